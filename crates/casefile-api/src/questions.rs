//! Handlers for `/questions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/questions` | Ordered catalog; never includes answers |
//! | `GET`  | `/questions/:id/hint` | 404 for an unknown id |
//! | `POST` | `/questions/:id/answer` | Body: `{"answer":"..."}`; needs a session |

use axum::{
  Json,
  extract::{Path, State},
};
use casefile_core::{
  dataset::DatasetProvider,
  question::QuestionView,
  render::{feedback_text, render_feedback},
  session::{SessionSnapshot, SubmitResult},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, session::FinalResult};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /questions`
pub async fn list<D>(State(state): State<AppState<D>>) -> Json<Vec<QuestionView>>
where
  D: DatasetProvider,
{
  Json(state.catalog.questions().iter().map(|q| q.view()).collect())
}

// ─── Hint ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HintBody {
  pub id:   u32,
  pub hint: String,
}

/// `GET /questions/:id/hint`
pub async fn hint<D>(
  State(state): State<AppState<D>>,
  Path(id): Path<u32>,
) -> Result<Json<HintBody>, ApiError>
where
  D: DatasetProvider,
{
  let question = state.catalog.require(id)?;
  Ok(Json(HintBody { id, hint: question.hint.clone() }))
}

// ─── Answer ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnswerBody {
  #[serde(default)]
  pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
  pub result:            SubmitResult,
  pub snapshot:          SessionSnapshot,
  pub feedback:          &'static str,
  pub feedback_html:     String,
  /// Present only on the winning submission: how long the UI should linger
  /// before moving to the result screen.
  pub redirect_after_ms: Option<u64>,
}

/// `POST /questions/:id/answer`
pub async fn answer<D>(
  State(state): State<AppState<D>>,
  Path(id): Path<u32>,
  Json(body): Json<AnswerBody>,
) -> Result<Json<AnswerResponse>, ApiError>
where
  D: DatasetProvider,
{
  let mut guard = state.session.lock().await;
  let session = guard.as_mut().ok_or(ApiError::NoSession)?;

  let result = session.game.submit_answer(id, &body.answer)?;
  let snapshot = session.game.snapshot();

  if result.session_won {
    info!(
      detective = %session.detective_name,
      score = snapshot.score,
      "perfect run completed"
    );
    session.final_result = Some(FinalResult {
      detective_name: session.detective_name.clone(),
      final_score:    snapshot.score,
      won_at:         Utc::now(),
    });
  }

  Ok(Json(AnswerResponse {
    result,
    snapshot,
    feedback: feedback_text(&result),
    feedback_html: render_feedback(&result),
    redirect_after_ms: result.session_won.then_some(state.redirect_delay_ms),
  }))
}
