//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Answers and queries need a detective name on file first.
  #[error("no active session; start one with a detective name")]
  NoSession,

  #[error("core error: {0}")]
  Core(#[source] casefile_core::Error),
}

impl From<casefile_core::Error> for ApiError {
  fn from(e: casefile_core::Error) -> Self {
    match e {
      casefile_core::Error::UnknownQuestion(id) => {
        ApiError::NotFound(format!("question {id} not found"))
      }
      other => ApiError::Core(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NoSession => StatusCode::CONFLICT,
      ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match self {
      ApiError::NotFound(m) | ApiError::BadRequest(m) => m,
      other => other.to_string(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
