//! Handlers for the player session.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/session` | Body: `{"detective_name":"..."}`; starts a fresh session |
//! | `GET`  | `/session` | Current snapshot; 409 without a session |
//! | `GET`  | `/result`  | Final score once the session is won; 404 before that |

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use casefile_core::{dataset::DatasetProvider, session::{Game, SessionSnapshot}};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError};

// ─── Session record ───────────────────────────────────────────────────────────

/// The single player's session, held by [`AppState`].
#[derive(Debug, Clone)]
pub struct PlayerSession {
  pub detective_name: String,
  pub started_at:     DateTime<Utc>,
  pub game:           Game,
  /// Set when the perfect run completes; the score is frozen here for the
  /// result screen.
  pub final_result:   Option<FinalResult>,
}

/// What the result screen reads after a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalResult {
  pub detective_name: String,
  pub final_score:    i64,
  pub won_at:         DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SessionBody {
  pub detective_name: String,
  pub started_at:     DateTime<Utc>,
  pub snapshot:       SessionSnapshot,
}

impl From<&PlayerSession> for SessionBody {
  fn from(s: &PlayerSession) -> Self {
    SessionBody {
      detective_name: s.detective_name.clone(),
      started_at:     s.started_at,
      snapshot:       s.game.snapshot(),
    }
  }
}

// ─── Start ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartBody {
  pub detective_name: String,
}

/// `POST /session` — returns 201 + the fresh session. Any previous session is
/// discarded.
pub async fn start<D>(
  State(state): State<AppState<D>>,
  Json(body): Json<StartBody>,
) -> Result<impl IntoResponse, ApiError>
where
  D: DatasetProvider,
{
  let name = body.detective_name.trim();
  if name.is_empty() {
    return Err(ApiError::BadRequest("detective_name must not be blank".into()));
  }

  let session = PlayerSession {
    detective_name: name.to_owned(),
    started_at:     Utc::now(),
    game:           Game::new(state.catalog.clone()),
    final_result:   None,
  };
  let body = SessionBody::from(&session);
  *state.session.lock().await = Some(session);

  info!(detective = %body.detective_name, "session started");
  Ok((StatusCode::CREATED, Json(body)))
}

// ─── Get ──────────────────────────────────────────────────────────────────────

/// `GET /session`
pub async fn get_one<D>(
  State(state): State<AppState<D>>,
) -> Result<Json<SessionBody>, ApiError>
where
  D: DatasetProvider,
{
  let guard = state.session.lock().await;
  let session = guard.as_ref().ok_or(ApiError::NoSession)?;
  Ok(Json(SessionBody::from(session)))
}

// ─── Result ───────────────────────────────────────────────────────────────────

/// `GET /result`
pub async fn result<D>(
  State(state): State<AppState<D>>,
) -> Result<Json<FinalResult>, ApiError>
where
  D: DatasetProvider,
{
  let guard = state.session.lock().await;
  guard
    .as_ref()
    .and_then(|s| s.final_result.clone())
    .map(Json)
    .ok_or_else(|| ApiError::NotFound("no winning result recorded".into()))
}
