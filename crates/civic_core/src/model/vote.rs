//! Vote record linking an official to a government activity.
//!
//! # Invariants
//! - `official_id` and `activity_id` are not checked against the store.

use super::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ballot cast by an official.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ballot {
    Yes,
    No,
    Abstain,
}

/// Stored vote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub id: RecordId,
    pub official_id: RecordId,
    pub activity_id: RecordId,
    pub vote: Ballot,
    /// Free-text summary of what was voted on.
    pub issue: String,
    pub date: DateTime<Utc>,
}

/// Insert shape for `VoteRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVoteRecord {
    pub official_id: RecordId,
    pub activity_id: RecordId,
    pub vote: Ballot,
    pub issue: String,
    pub date: DateTime<Utc>,
}

impl VoteRecord {
    pub(crate) fn from_new(id: RecordId, input: NewVoteRecord) -> Self {
        Self {
            id,
            official_id: input.official_id,
            activity_id: input.activity_id,
            vote: input.vote,
            issue: input.issue,
            date: input.date,
        }
    }
}

impl Record for VoteRecord {
    const KIND: &'static str = "vote_record";

    fn id(&self) -> &str {
        &self.id
    }
}
