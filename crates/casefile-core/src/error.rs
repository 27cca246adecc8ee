//! Error types for `casefile-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("question not found: {0}")]
  UnknownQuestion(u32),

  #[error("question id {0} appears more than once in the catalog")]
  DuplicateQuestion(u32),

  #[error("question id must be positive")]
  ZeroQuestionId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
