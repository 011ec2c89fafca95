//! Recommended follow-up actions for a citizen issue.
//!
//! # Invariants
//! - `issue_id` is always set; `official_id`/`activity_id` are optional.
//! - References are stored as given, without existence checks.

use super::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the citizen is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Call,
    Attend,
    Email,
    Petition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Stored action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub id: RecordId,
    pub issue_id: RecordId,
    pub official_id: Option<RecordId>,
    pub activity_id: Option<RecordId>,
    pub action_type: ActionType,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
}

/// Insert shape for `ActionPlan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActionPlan {
    pub issue_id: RecordId,
    #[serde(default)]
    pub official_id: Option<RecordId>,
    #[serde(default)]
    pub activity_id: Option<RecordId>,
    pub action_type: ActionType,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
}

impl ActionPlan {
    pub(crate) fn from_new(id: RecordId, input: NewActionPlan) -> Self {
        Self {
            id,
            issue_id: input.issue_id,
            official_id: input.official_id,
            activity_id: input.activity_id,
            action_type: input.action_type,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
        }
    }
}

impl Record for ActionPlan {
    const KIND: &'static str = "action_plan";

    fn id(&self) -> &str {
        &self.id
    }
}
