//! Conversion from rusqlite rows to the engine-neutral [`ResultSet`], and the
//! read-only policy the connection runs under once seeded.

use casefile_core::dataset::{Cell, ResultSet};
use rusqlite::{
  Batch,
  hooks::{AuthAction, AuthContext, Authorization},
  types::ValueRef,
};

pub fn decode_cell(value: ValueRef<'_>) -> Cell {
  match value {
    ValueRef::Null => Cell::Null,
    ValueRef::Integer(i) => Cell::Integer(i),
    ValueRef::Real(f) => Cell::Real(f),
    ValueRef::Text(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
    ValueRef::Blob(b) => Cell::Blob(b.to_vec()),
  }
}

/// The engine's own diagnostic, without the statement text and offset that
/// rusqlite appends when displaying input errors.
pub fn engine_message(error: rusqlite::Error) -> String {
  match error {
    rusqlite::Error::SqlInputError { msg, .. } => msg,
    rusqlite::Error::SqliteFailure(_, Some(msg)) => msg,
    other => other.to_string(),
  }
}

/// Run every statement in `sql` in order and keep the first row set.
///
/// Statements after the first row set still run, and an error from any of
/// them fails the whole text. Returns `None` when no statement yields a row,
/// including text that holds only comments or separators.
pub fn run_batch(
  conn: &rusqlite::Connection,
  sql: &str,
) -> rusqlite::Result<Option<ResultSet>> {
  let mut batch = Batch::new(conn, sql);
  let mut first = None;

  while let Some(mut stmt) = batch.next()? {
    let columns: Vec<String> =
      stmt.column_names().into_iter().map(str::to_owned).collect();
    let width = columns.len();

    let mut rows = stmt.query([])?;
    let mut collected = Vec::new();
    while let Some(row) = rows.next()? {
      let cells = (0..width)
        .map(|i| row.get_ref(i).map(decode_cell))
        .collect::<rusqlite::Result<Vec<_>>>()?;
      collected.push(cells);
    }

    if first.is_none() && !collected.is_empty() {
      first = Some(ResultSet { columns, rows: collected });
    }
  }

  Ok(first)
}

// ─── Read-only policy ────────────────────────────────────────────────────────

/// Pragmas that take an argument but only report on the schema.
const INSPECTION_PRAGMAS: [&str; 6] = [
  "table_info",
  "table_xinfo",
  "index_list",
  "index_info",
  "index_xinfo",
  "foreign_key_list",
];

/// Authorizer installed after seeding. Reads, functions, and pragma lookups
/// are allowed; anything that writes data, changes the schema, attaches
/// files, or assigns a pragma fails at prepare time with "not authorized".
pub fn read_only_access(ctx: AuthContext<'_>) -> Authorization {
  match ctx.action {
    AuthAction::Select
    | AuthAction::Read { .. }
    | AuthAction::Function { .. }
    | AuthAction::Recursive => Authorization::Allow,
    AuthAction::Pragma { pragma_value: None, .. } => Authorization::Allow,
    AuthAction::Pragma { pragma_name, pragma_value: Some(_) }
      if INSPECTION_PRAGMAS
        .iter()
        .any(|p| p.eq_ignore_ascii_case(pragma_name)) =>
    {
      Authorization::Allow
    }
    _ => Authorization::Deny,
  }
}
