//! JSON REST API for casefile.
//!
//! Exposes an axum [`Router`] backed by any [`DatasetProvider`]. The dataset
//! must be initialized before the router is served; serving, TLS, and static
//! assets are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", casefile_api::api_router(state))
//! ```

pub mod error;
pub mod query;
pub mod questions;
pub mod session;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use casefile_core::{dataset::DatasetProvider, question::Catalog, sandbox::QuerySandbox};
use tokio::sync::Mutex;

pub use error::ApiError;
pub use session::PlayerSession;

/// Default pause between the winning answer and the result screen.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
///
/// There is one player, so there is one session slot.
pub struct AppState<D> {
  pub catalog:           Arc<Catalog>,
  pub sandbox:           QuerySandbox<D>,
  pub session:           Arc<Mutex<Option<PlayerSession>>>,
  pub redirect_delay_ms: u64,
}

impl<D> Clone for AppState<D> {
  fn clone(&self) -> Self {
    Self {
      catalog:           Arc::clone(&self.catalog),
      sandbox:           self.sandbox.clone(),
      session:           Arc::clone(&self.session),
      redirect_delay_ms: self.redirect_delay_ms,
    }
  }
}

impl<D: DatasetProvider> AppState<D> {
  /// State over `catalog` with no session started.
  pub fn new(catalog: Catalog, dataset: Arc<D>) -> Self {
    Self {
      catalog:           Arc::new(catalog),
      sandbox:           QuerySandbox::new(dataset),
      session:           Arc::new(Mutex::new(None)),
      redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
    }
  }

  pub fn with_redirect_delay(mut self, ms: u64) -> Self {
    self.redirect_delay_ms = ms;
    self
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<D>(state: AppState<D>) -> Router<()>
where
  D: DatasetProvider + 'static,
{
  Router::new()
    // Catalog
    .route("/questions", get(questions::list::<D>))
    .route("/questions/{id}/hint", get(questions::hint::<D>))
    .route("/questions/{id}/answer", post(questions::answer::<D>))
    // Session
    .route("/session", get(session::get_one::<D>).post(session::start::<D>))
    .route("/result", get(session::result::<D>))
    // Sandbox
    .route("/query", post(query::handler::<D>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
