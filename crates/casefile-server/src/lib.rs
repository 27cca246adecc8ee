//! HTTP front for the casefile game.
//!
//! Mounts the JSON API under `/api` and adds request tracing. The binary in
//! `main.rs` owns configuration and dataset initialization.

pub mod settings;

use axum::Router;
use casefile_api::{AppState, api_router};
use casefile_core::dataset::DatasetProvider;
use tower_http::trace::TraceLayer;

pub use settings::ServerConfig;

/// Build the top-level router. `state`'s dataset must already be initialized.
pub fn router<D>(state: AppState<D>) -> Router
where
  D: DatasetProvider + 'static,
{
  Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use casefile_core::question::Catalog;
  use casefile_store_sqlite::SqliteDataset;
  use tower::ServiceExt as _;

  use super::*;

  #[tokio::test]
  async fn api_is_nested_under_prefix() {
    let dataset = SqliteDataset::seeded().await.unwrap();
    let app = router(AppState::new(Catalog::standard().unwrap(), Arc::new(dataset)));

    let req = Request::builder().uri("/api/questions").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let list: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(list.as_array().map(Vec::len), Some(8));

    let req = Request::builder().uri("/questions").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
