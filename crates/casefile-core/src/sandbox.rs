//! The query sandbox: keyword policy in front of the dataset engine.
//!
//! The denylist is advisory. It keeps obviously mutating statements away from
//! the engine; it is not a parser and does not guarantee read-only access.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::{DatasetProvider, ResultSet};

/// Reason given for a blank query.
pub const EMPTY_QUERY: &str = "empty query";
/// Reason given when the denylist matches.
pub const READ_ONLY: &str = "only read queries permitted";

// ─── Policy ──────────────────────────────────────────────────────────────────

/// Statement keywords that are never forwarded to the engine.
pub const FORBIDDEN_KEYWORDS: [&str; 8] = [
  "DELETE", "DROP", "UPDATE", "INSERT", "ALTER", "TRUNCATE", "CREATE", "REPLACE",
];

/// A finite set of forbidden whole words, matched case-insensitively anywhere
/// in the statement.
#[derive(Debug, Clone)]
pub struct Denylist {
  keywords: Vec<String>,
}

impl Default for Denylist {
  fn default() -> Self { Self::new(FORBIDDEN_KEYWORDS) }
}

impl Denylist {
  pub fn new<I, S>(keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      keywords: keywords
        .into_iter()
        .map(|k| k.as_ref().to_ascii_uppercase())
        .collect(),
    }
  }

  pub fn keywords(&self) -> &[String] { &self.keywords }

  /// The first forbidden keyword appearing as a whole word in `sql`.
  ///
  /// Words are runs of ASCII letters, digits, and underscores, so
  /// `dropped` and `updated_at` do not match but `x.drop(` does.
  pub fn first_match(&self, sql: &str) -> Option<&str> {
    sql
      .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
      .filter(|word| !word.is_empty())
      .find_map(|word| {
        self
          .keywords
          .iter()
          .find(|k| k.eq_ignore_ascii_case(word))
          .map(String::as_str)
      })
  }

  pub fn is_forbidden(&self, sql: &str) -> bool { self.first_match(sql).is_some() }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// The outcome of one query, ready for rendering. Cells are display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryResult {
  Tabular {
    columns: Vec<String>,
    rows:    Vec<Vec<String>>,
  },
  Empty,
  Rejected {
    reason: String,
  },
  EngineError {
    message: String,
  },
}

impl QueryResult {
  fn rejected(reason: &str) -> Self { Self::Rejected { reason: reason.to_owned() } }

  pub fn row_count(&self) -> usize {
    match self {
      Self::Tabular { rows, .. } => rows.len(),
      _ => 0,
    }
  }
}

impl From<ResultSet> for QueryResult {
  fn from(set: ResultSet) -> Self {
    Self::Tabular {
      columns: set.columns,
      rows:    set
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.display_text()).collect())
        .collect(),
    }
  }
}

// ─── Sandbox ─────────────────────────────────────────────────────────────────

/// Filters player queries and forwards the survivors to a [`DatasetProvider`].
///
/// Cloning is cheap — the provider is reference-counted.
#[derive(Debug)]
pub struct QuerySandbox<D> {
  dataset:  Arc<D>,
  denylist: Denylist,
}

impl<D> Clone for QuerySandbox<D> {
  fn clone(&self) -> Self {
    Self { dataset: Arc::clone(&self.dataset), denylist: self.denylist.clone() }
  }
}

impl<D: DatasetProvider> QuerySandbox<D> {
  pub fn new(dataset: Arc<D>) -> Self {
    Self { dataset, denylist: Denylist::default() }
  }

  pub fn with_denylist(dataset: Arc<D>, denylist: Denylist) -> Self {
    Self { dataset, denylist }
  }

  /// Run a player query. Every failure is folded into the returned value.
  pub async fn run_query(&self, raw_text: &str) -> QueryResult {
    if raw_text.trim().is_empty() {
      return QueryResult::rejected(EMPTY_QUERY);
    }

    if let Some(keyword) = self.denylist.first_match(raw_text) {
      warn!(keyword, "query rejected by denylist");
      return QueryResult::rejected(READ_ONLY);
    }

    match self.dataset.query(raw_text).await {
      Ok(Some(set)) => {
        debug!(rows = set.rows.len(), "query returned rows");
        set.into()
      }
      Ok(None) => QueryResult::Empty,
      Err(e) => {
        debug!(error = %e, "query failed in engine");
        QueryResult::EngineError { message: e.to_string() }
      }
    }
  }
}
