//! The game state machine: score, mistakes, and the solved set.
//!
//! All mutation goes through [`Game::submit_answer`]. A question moves from
//! unanswered to solved at most once; the session moves from in-progress to
//! won at most once, and only on a perfect run.

use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;
use tracing::debug;

use crate::{Result, question::Catalog};

/// Points awarded for the first correct answer to a question.
pub const CORRECT_POINTS: i64 = 5;
/// Points deducted for every incorrect answer.
pub const INCORRECT_PENALTY: i64 = 1;

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// What a single answer submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
  /// Blank input. Nothing changes.
  Ignored,
  /// More than one token. Not scored.
  RejectedMultiWord,
  CorrectFirstTime,
  /// The question was already solved; nothing changes.
  CorrectRepeat,
  Incorrect,
}

/// The result descriptor handed back to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
  pub question_id: u32,
  pub score_delta: i64,
  pub outcome:     Outcome,
  /// `true` only on the submission that completes a perfect run.
  pub session_won: bool,
}

// ─── State ───────────────────────────────────────────────────────────────────

/// Mutable per-session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
  /// May go negative.
  pub score:           i64,
  /// Never decremented.
  pub mistakes:        u32,
  /// Grows only.
  pub solved:          BTreeSet<u32>,
  pub total_questions: usize,
  pub won:             bool,
}

impl SessionState {
  pub fn new(total_questions: usize) -> Self {
    Self {
      score: 0,
      mistakes: 0,
      solved: BTreeSet::new(),
      total_questions,
      won: false,
    }
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot {
      score:        self.score,
      mistakes:     self.mistakes,
      solved_count: self.solved.len(),
      total:        self.total_questions,
      won:          self.won,
    }
  }
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
  pub score:        i64,
  pub mistakes:     u32,
  pub solved_count: usize,
  pub total:        usize,
  pub won:          bool,
}

// ─── Game ────────────────────────────────────────────────────────────────────

/// One player's session over a shared catalog.
#[derive(Debug, Clone)]
pub struct Game {
  catalog: Arc<Catalog>,
  state:   SessionState,
}

impl Game {
  /// Start a fresh session: score 0, no mistakes, nothing solved.
  pub fn new(catalog: Arc<Catalog>) -> Self {
    let state = SessionState::new(catalog.len());
    Self { catalog, state }
  }

  pub fn catalog(&self) -> &Catalog { &self.catalog }

  pub fn state(&self) -> &SessionState { &self.state }

  pub fn snapshot(&self) -> SessionSnapshot { self.state.snapshot() }

  pub fn is_solved(&self, question_id: u32) -> bool {
    self.state.solved.contains(&question_id)
  }

  /// Validate `raw_input` as the answer to `question_id`.
  ///
  /// Returns [`Error::UnknownQuestion`](crate::Error::UnknownQuestion) if the
  /// id is not in the catalog; every other input is folded into an
  /// [`Outcome`].
  pub fn submit_answer(
    &mut self,
    question_id: u32,
    raw_input: &str,
  ) -> Result<SubmitResult> {
    let question = self.catalog.require(question_id)?;
    let answer = raw_input.trim();

    let (outcome, score_delta) = if answer.is_empty() {
      (Outcome::Ignored, 0)
    } else if answer.chars().any(char::is_whitespace) {
      (Outcome::RejectedMultiWord, 0)
    } else if question.accepts(answer) {
      if self.state.solved.insert(question_id) {
        (Outcome::CorrectFirstTime, CORRECT_POINTS)
      } else {
        (Outcome::CorrectRepeat, 0)
      }
    } else {
      self.state.mistakes += 1;
      (Outcome::Incorrect, -INCORRECT_PENALTY)
    };

    self.state.score += score_delta;

    // Only a fresh solve can complete the set, so only it can win.
    let mut session_won = false;
    if outcome == Outcome::CorrectFirstTime
      && !self.state.won
      && self.state.solved.len() == self.state.total_questions
      && self.state.mistakes == 0
    {
      self.state.won = true;
      session_won = true;
    }

    debug!(
      question_id,
      %outcome,
      score = self.state.score,
      mistakes = self.state.mistakes,
      "answer submitted"
    );

    Ok(SubmitResult { question_id, score_delta, outcome, session_won })
  }
}
