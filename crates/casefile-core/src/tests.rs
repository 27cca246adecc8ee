//! Sandbox tests against an in-memory fake dataset.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use crate::{
  dataset::{Cell, DatasetProvider, ResultSet},
  render::render_query_result,
  sandbox::{Denylist, EMPTY_QUERY, QueryResult, QuerySandbox, READ_ONLY},
};

// ─── Fake ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct FakeError(String);

/// Answers canned statements and records everything it was asked.
#[derive(Debug, Default)]
struct FakeDataset {
  answers:   HashMap<String, Option<ResultSet>>,
  forwarded: Mutex<Vec<String>>,
}

impl FakeDataset {
  fn with(mut self, sql: &str, set: Option<ResultSet>) -> Self {
    self.answers.insert(sql.to_owned(), set);
    self
  }

  fn forwarded(&self) -> Vec<String> { self.forwarded.lock().unwrap().clone() }
}

impl DatasetProvider for FakeDataset {
  type Error = FakeError;

  async fn initialize(&self) -> Result<(), FakeError> { Ok(()) }

  async fn query(&self, sql: &str) -> Result<Option<ResultSet>, FakeError> {
    self.forwarded.lock().unwrap().push(sql.to_owned());
    self
      .answers
      .get(sql)
      .cloned()
      .ok_or_else(|| FakeError(format!("near \"{sql}\": syntax error")))
  }
}

fn guard_set() -> ResultSet {
  ResultSet {
    columns: vec!["name".into()],
    rows:    vec![vec![Cell::Text("Rohan".into())]],
  }
}

const GUARD_SQL: &str = "SELECT name FROM people WHERE role = 'guard'";

fn sandbox(fake: FakeDataset) -> (QuerySandbox<FakeDataset>, Arc<FakeDataset>) {
  let fake = Arc::new(fake);
  (QuerySandbox::new(Arc::clone(&fake)), fake)
}

// ─── Forwarding ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn select_is_forwarded_verbatim() {
  let padded = format!("  {GUARD_SQL}\n");
  let (sb, fake) = sandbox(FakeDataset::default().with(&padded, Some(guard_set())));

  let result = sb.run_query(&padded).await;
  assert_eq!(
    result,
    QueryResult::Tabular {
      columns: vec!["name".into()],
      rows:    vec![vec!["Rohan".into()]],
    }
  );
  assert_eq!(fake.forwarded(), vec![padded]);
}

#[tokio::test]
async fn no_rows_is_empty() {
  let sql = "SELECT name FROM people WHERE role = 'janitor'";
  let (sb, _) = sandbox(FakeDataset::default().with(sql, None));
  assert_eq!(sb.run_query(sql).await, QueryResult::Empty);
}

#[tokio::test]
async fn engine_error_carries_diagnostic_unmodified() {
  let (sb, _) = sandbox(FakeDataset::default());
  let result = sb.run_query("SELEKT *").await;
  assert_eq!(
    result,
    QueryResult::EngineError { message: "near \"SELEKT *\": syntax error".into() }
  );
}

// ─── Rejection ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn blank_query_is_rejected_before_engine() {
  let (sb, fake) = sandbox(FakeDataset::default());
  for sql in ["", "   ", "\n\t"] {
    assert_eq!(
      sb.run_query(sql).await,
      QueryResult::Rejected { reason: EMPTY_QUERY.into() }
    );
  }
  assert!(fake.forwarded().is_empty());
}

#[tokio::test]
async fn mutating_statements_never_reach_engine() {
  let (sb, fake) = sandbox(FakeDataset::default());
  for sql in [
    "DROP TABLE people",
    "delete from clues",
    "SELECT * FROM people; UPDATE people SET role = 'guard'",
    "insert into people values (6, 'Eve', 'thief')",
    "ALTER TABLE people ADD COLUMN alibi TEXT",
    "TRUNCATE movements",
    "create table t(x)",
    "REPLACE INTO people VALUES (1, 'x', 'y')",
  ] {
    assert_eq!(
      sb.run_query(sql).await,
      QueryResult::Rejected { reason: READ_ONLY.into() },
      "{sql}"
    );
  }
  assert!(fake.forwarded().is_empty());
}

#[tokio::test]
async fn hostile_cell_renders_inert() {
  let sql = "SELECT '<script>' AS x";
  let set = ResultSet {
    columns: vec!["x".into()],
    rows:    vec![vec![Cell::Text("<script>".into())]],
  };
  let (sb, _) = sandbox(FakeDataset::default().with(sql, Some(set)));
  let html = render_query_result(&sb.run_query(sql).await);
  assert!(html.contains("&lt;script&gt;"), "{html}");
  assert!(!html.contains("<script>"), "{html}");
}

#[tokio::test]
async fn custom_denylist_replaces_the_default() {
  let sql = "PRAGMA table_info(people)";
  let fake = Arc::new(FakeDataset::default().with("DROP TABLE people", None));
  let sb = QuerySandbox::with_denylist(Arc::clone(&fake), Denylist::new(["pragma"]));

  assert_eq!(sb.run_query(sql).await, QueryResult::Rejected { reason: READ_ONLY.into() });
  assert_eq!(sb.run_query("DROP TABLE people").await, QueryResult::Empty);
  assert_eq!(fake.forwarded(), vec!["DROP TABLE people".to_owned()]);
}
