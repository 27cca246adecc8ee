//! Error type for `casefile-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A statement failed inside the engine; displays the engine's own
  /// diagnostic, unmodified.
  #[error("{0}")]
  Engine(String),

  #[error("dataset has not been initialized")]
  NotInitialized,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
