//! Handler for `POST /query`.
//!
//! Body: `{"sql":"..."}`. Always answers 200 once a session exists; rejected
//! and failed queries are reported inside the [`QueryResult`].

use axum::{Json, extract::State};
use casefile_core::{
  dataset::DatasetProvider,
  render::render_query_result,
  sandbox::QueryResult,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct QueryBody {
  #[serde(default)]
  pub sql: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
  pub result: QueryResult,
  /// Escaped markup for the output pane.
  pub html:   String,
}

/// `POST /query`
pub async fn handler<D>(
  State(state): State<AppState<D>>,
  Json(body): Json<QueryBody>,
) -> Result<Json<QueryResponse>, ApiError>
where
  D: DatasetProvider,
{
  if state.session.lock().await.is_none() {
    return Err(ApiError::NoSession);
  }

  let result = state.sandbox.run_query(&body.sql).await;
  let html = render_query_result(&result);
  Ok(Json(QueryResponse { result, html }))
}
