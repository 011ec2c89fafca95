//! Civic-data domain model.
//!
//! # Responsibility
//! - Define one strongly-typed record (and insert shape) per entity kind.
//! - Provide the identity primitives shared by every record.
//!
//! # Invariants
//! - Every record is identified by an opaque `RecordId`, unique per kind.
//! - Reference fields hold a `RecordId` of the referenced kind or `None`;
//!   dangling references are representable and never rejected here.

pub mod action_plan;
pub mod activity;
pub mod issue;
pub mod official;
pub mod statistic;
pub mod user;
pub mod vote;

use uuid::Uuid;

/// Opaque record identifier.
///
/// Callers must not parse it or rely on any ordering between values.
pub type RecordId = String;

/// Generates a fresh random identifier for a newly created record.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Common surface of every stored record.
pub trait Record: Clone + Send + Sync + 'static {
    /// Short kind label used in log events.
    const KIND: &'static str;

    /// Returns the record identifier.
    fn id(&self) -> &str;
}
