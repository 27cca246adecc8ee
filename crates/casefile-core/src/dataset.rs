//! The `DatasetProvider` trait and the raw tabular values it returns.
//!
//! The trait is implemented by engine backends (e.g. `casefile-store-sqlite`).
//! The sandbox and the HTTP layer depend on this abstraction, so tests can
//! substitute an in-memory fake for the real engine.

use std::future::Future;

/// Display text for a NULL cell.
pub const NULL_PLACEHOLDER: &str = "NULL";

// ─── Cells ───────────────────────────────────────────────────────────────────

/// A single value as reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
  Null,
  Integer(i64),
  Real(f64),
  Text(String),
  Blob(Vec<u8>),
}

impl Cell {
  /// The text shown to the player for this value.
  ///
  /// NULL becomes [`NULL_PLACEHOLDER`]; blobs become an SQL hex literal.
  pub fn display_text(&self) -> String {
    match self {
      Self::Null => NULL_PLACEHOLDER.to_owned(),
      Self::Integer(i) => i.to_string(),
      Self::Real(f) => f.to_string(),
      Self::Text(s) => s.clone(),
      Self::Blob(b) => format!("x'{}'", hex::encode(b)),
    }
  }
}

/// The first result set of a statement, with at least one row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
  pub columns: Vec<String>,
  pub rows:    Vec<Vec<Cell>>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Owner of the fixed relational dataset and the engine that queries it.
///
/// `initialize` seeds the dataset and must complete before `query` is
/// reachable; callers guard that at their boundary. Calling it again is a
/// no-op.
pub trait DatasetProvider: Send + Sync {
  /// Displayed verbatim to the player when a query fails, so backends should
  /// make it the engine's own diagnostic.
  type Error: std::error::Error + Send + Sync + 'static;

  fn initialize(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Run `sql` and return its result set, or `None` if it produced no rows.
  fn query<'a>(
    &'a self,
    sql: &'a str,
  ) -> impl Future<Output = Result<Option<ResultSet>, Self::Error>> + Send + 'a;
}
