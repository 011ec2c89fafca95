//! Civic use-case services.
//!
//! # Responsibility
//! - Orchestrate storage calls into use-case level APIs.
//! - Add the checks the raw store deliberately skips (reference existence).
//!
//! # Invariants
//! - Services only talk to storage through `CivicStorage`.

pub mod issue_service;
pub mod official_service;
