//! [`SqliteDataset`] — the SQLite implementation of [`DatasetProvider`].

use std::sync::Arc;

use casefile_core::dataset::{DatasetProvider, ResultSet};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::{
  Error, Result,
  encode::{engine_message, read_only_access, run_batch},
  schema::{LOCK, SCHEMA, SEED},
};

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// The case dataset held in a private in-memory SQLite database.
///
/// Cloning is cheap — the connection and the seeded flag are shared.
#[derive(Clone)]
pub struct SqliteDataset {
  conn:   tokio_rusqlite::Connection,
  seeded: Arc<OnceCell<()>>,
}

impl SqliteDataset {
  /// Open an empty in-memory database. Nothing is queryable until
  /// [`DatasetProvider::initialize`] has completed.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Ok(Self { conn, seeded: Arc::new(OnceCell::new()) })
  }

  /// Open and seed in one step.
  pub async fn seeded() -> Result<Self> {
    let dataset = Self::open_in_memory().await?;
    dataset.initialize().await?;
    Ok(dataset)
  }

  pub fn is_initialized(&self) -> bool { self.seeded.initialized() }

  async fn seed(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        conn.execute_batch(SEED)?;
        conn.execute_batch(LOCK)?;
        // The lock pragma alone can be switched back off from a query.
        conn.authorizer(Some(read_only_access));
        Ok(())
      })
      .await?;
    info!("case dataset seeded");
    Ok(())
  }
}

// ─── DatasetProvider impl ────────────────────────────────────────────────────

impl DatasetProvider for SqliteDataset {
  type Error = Error;

  async fn initialize(&self) -> Result<()> {
    self.seeded.get_or_try_init(|| self.seed()).await?;
    Ok(())
  }

  async fn query(&self, sql: &str) -> Result<Option<ResultSet>> {
    if !self.is_initialized() {
      return Err(Error::NotInitialized);
    }

    let sql = sql.to_owned();
    let outcome = self
      .conn
      .call(move |conn| Ok(run_batch(conn, &sql).map_err(engine_message)))
      .await?;

    outcome.map_err(|message| {
      debug!(%message, "engine rejected statement");
      Error::Engine(message)
    })
  }
}
