//! Government activity model (bills, meetings, votes, budgets).
//!
//! # Invariants
//! - Activities are immutable after creation.
//! - `agenda_items` keeps the caller-provided order.

use super::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of government activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Bill,
    Meeting,
    Vote,
    Budget,
}

/// Scheduling state of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityStatus {
    Upcoming,
    InProgress,
    Completed,
}

/// Outcome of the vote attached to an activity, when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteResult {
    Pending,
    Passed,
    Failed,
}

/// Stored government activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentActivity {
    pub id: RecordId,
    /// Serialized as `type` to match the public schema.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub status: ActivityStatus,
    pub location: String,
    pub agenda_items: Option<Vec<String>>,
    pub vote_result: Option<VoteResult>,
}

/// Insert shape for `GovernmentActivity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGovernmentActivity {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub status: ActivityStatus,
    pub location: String,
    #[serde(default)]
    pub agenda_items: Option<Vec<String>>,
    #[serde(default)]
    pub vote_result: Option<VoteResult>,
}

impl GovernmentActivity {
    pub(crate) fn from_new(id: RecordId, input: NewGovernmentActivity) -> Self {
        Self {
            id,
            kind: input.kind,
            title: input.title,
            description: input.description,
            category: input.category,
            date: input.date,
            status: input.status,
            location: input.location,
            agenda_items: input.agenda_items,
            vote_result: input.vote_result,
        }
    }
}

impl Record for GovernmentActivity {
    const KIND: &'static str = "government_activity";

    fn id(&self) -> &str {
        &self.id
    }
}
