//! SQLite backend for the casefile dataset.
//!
//! Wraps [`tokio_rusqlite`] so all engine access runs on a dedicated thread
//! without blocking the async runtime.

mod dataset;
mod encode;
mod schema;

pub mod error;

pub use dataset::SqliteDataset;
pub use error::{Error, Result};
