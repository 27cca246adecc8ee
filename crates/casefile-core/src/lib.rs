//! Core types and game logic for the casefile SQL mystery.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! relational engine is reached only through the [`dataset::DatasetProvider`]
//! trait, implemented by `casefile-store-sqlite`.

pub mod dataset;
pub mod error;
pub mod question;
pub mod render;
pub mod sandbox;
pub mod session;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
