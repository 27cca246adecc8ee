//! casefile server binary.
//!
//! Reads `casefile.toml` (or the path given with `--config`), seeds the
//! in-memory case dataset, and serves the game API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use casefile_api::AppState;
use casefile_core::{dataset::DatasetProvider as _, question::Catalog};
use casefile_server::ServerConfig;
use casefile_store_sqlite::SqliteDataset;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "casefile SQL mystery server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "casefile.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  // Nothing is served until the dataset is seeded; failure here is fatal.
  let dataset = SqliteDataset::open_in_memory()
    .await
    .context("failed to open the case dataset")?;
  dataset
    .initialize()
    .await
    .context("failed to initialize the case dataset; restart the server")?;

  let catalog = Catalog::standard().context("invalid question catalog")?;
  let state = AppState::new(catalog, Arc::new(dataset))
    .with_redirect_delay(server_cfg.redirect_delay_ms);
  let app = casefile_server::router(state);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
