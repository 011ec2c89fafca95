//! Storage abstraction and its in-memory implementation.
//!
//! # Responsibility
//! - Define the per-entity CRUD contract consumed by request handlers.
//! - Provide the generic table engine and the seeded in-memory store.
//!
//! # Invariants
//! - Lookups signal absence with `None`, never with an error.
//! - The store performs no shape validation and no referential checks.
//! - Only seed bootstrap can fail, and that failure is fatal at startup.

pub mod mem_storage;
pub mod seed;
pub mod storage;
pub mod table;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Seed fixture could not be built.
    InvalidSeed(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeed(message) => write!(f, "invalid seed data: {message}"),
        }
    }
}

impl Error for StoreError {}
