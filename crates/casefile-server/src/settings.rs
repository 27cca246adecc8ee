//! Server configuration, read from an optional TOML file and `CASEFILE_*`
//! environment variables.

use std::path::Path;

use config::{
  Config, ConfigError, Environment, File,
  builder::{ConfigBuilder, DefaultState},
};
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:              String,
  #[serde(default = "default_port")]
  pub port:              u16,
  /// How long the UI lingers on the winning answer before showing results.
  #[serde(default = "default_redirect_delay_ms")]
  pub redirect_delay_ms: u64,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

fn default_redirect_delay_ms() -> u64 { casefile_api::DEFAULT_REDIRECT_DELAY_MS }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:              default_host(),
      port:              default_port(),
      redirect_delay_ms: default_redirect_delay_ms(),
    }
  }
}

impl ServerConfig {
  /// Load from `path` (if it exists), then the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder().add_source(File::from(path).required(false)),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder
      .add_source(Environment::with_prefix("CASEFILE"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
