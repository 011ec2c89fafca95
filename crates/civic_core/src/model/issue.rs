//! Citizen issue model and its partial-update merge.
//!
//! # Responsibility
//! - Define the only mutable entity kind in the store.
//! - Own the field-wise merge applied by `update_citizen_issue`.
//!
//! # Invariants
//! - New issues start as `pending` with zero votes and no matched activity.
//! - `IssueUpdate::apply_to` overwrites only the fields that are present.
//! - The merge is shallow: nested values are replaced wholesale.
//! - The identifier is never part of an update.

use super::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a citizen issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    /// Reported, not yet linked to any government activity.
    Pending,
    /// Linked to a government activity through `matched_activity_id`.
    Matched,
    /// Closed out by the reporter or an official.
    Resolved,
}

/// Stored citizen issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenIssue {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub zipcode: String,
    pub votes: u32,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub matched_activity_id: Option<RecordId>,
}

/// Insert shape for `CitizenIssue`.
///
/// Server-assigned fields (`votes`, `status`, `created_at`,
/// `matched_activity_id`) are not accepted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCitizenIssue {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub location: String,
    pub zipcode: String,
}

impl CitizenIssue {
    /// Builds a new pending issue stamped with `created_at`.
    pub(crate) fn from_new(id: RecordId, input: NewCitizenIssue, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            location: input.location,
            zipcode: input.zipcode,
            votes: 0,
            status: IssueStatus::Pending,
            created_at,
            matched_activity_id: None,
        }
    }
}

impl Record for CitizenIssue {
    const KIND: &'static str = "citizen_issue";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for `CitizenIssue`.
///
/// `None` means "leave untouched". For the nullable `matched_activity_id`,
/// `Some(None)` clears the reference and `Some(Some(id))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "present_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub matched_activity_id: Option<Option<RecordId>>,
}

impl IssueUpdate {
    /// Update that links an issue to an activity and marks it matched.
    pub fn matched_to(activity_id: impl Into<RecordId>) -> Self {
        Self {
            status: Some(IssueStatus::Matched),
            matched_activity_id: Some(Some(activity_id.into())),
            ..Self::default()
        }
    }

    /// Returns whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges present fields over `issue`.
    pub fn apply_to(self, issue: &mut CitizenIssue) {
        if let Some(title) = self.title {
            issue.title = title;
        }
        if let Some(description) = self.description {
            issue.description = description;
        }
        if let Some(category) = self.category {
            issue.category = category;
        }
        if let Some(location) = self.location {
            issue.location = location;
        }
        if let Some(zipcode) = self.zipcode {
            issue.zipcode = zipcode;
        }
        if let Some(votes) = self.votes {
            issue.votes = votes;
        }
        if let Some(status) = self.status {
            issue.status = status;
        }
        if let Some(created_at) = self.created_at {
            issue.created_at = created_at;
        }
        if let Some(matched_activity_id) = self.matched_activity_id {
            issue.matched_activity_id = matched_activity_id;
        }
    }
}

// A present key (even `null`) becomes `Some(..)`; a missing key falls back to
// `default` and stays `None`.
fn present_nullable<'de, D>(deserializer: D) -> Result<Option<Option<RecordId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RecordId>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{CitizenIssue, IssueStatus, IssueUpdate, NewCitizenIssue};
    use chrono::{TimeZone, Utc};

    fn pending_issue() -> CitizenIssue {
        let created_at = Utc
            .with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
            .single()
            .expect("valid fixture timestamp");
        CitizenIssue::from_new(
            "issue-1".to_string(),
            NewCitizenIssue {
                title: "Broken streetlight".to_string(),
                description: "Dark corner".to_string(),
                category: "safety".to_string(),
                location: "Mission District".to_string(),
                zipcode: "94110".to_string(),
            },
            created_at,
        )
    }

    #[test]
    fn new_issue_uses_server_defaults() {
        let issue = pending_issue();
        assert_eq!(issue.votes, 0);
        assert_eq!(issue.status, IssueStatus::Pending);
        assert!(issue.matched_activity_id.is_none());
    }

    #[test]
    fn apply_to_only_touches_present_fields() {
        let mut issue = pending_issue();
        let before = issue.clone();

        IssueUpdate {
            title: Some("Two broken streetlights".to_string()),
            ..IssueUpdate::default()
        }
        .apply_to(&mut issue);

        assert_eq!(issue.title, "Two broken streetlights");
        assert_eq!(issue.description, before.description);
        assert_eq!(issue.votes, before.votes);
        assert_eq!(issue.created_at, before.created_at);
        assert_eq!(issue.id, before.id);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut issue = pending_issue();
        let before = issue.clone();
        let update = IssueUpdate::default();
        assert!(update.is_empty());

        update.apply_to(&mut issue);
        assert_eq!(issue, before);
    }

    #[test]
    fn matched_to_sets_status_and_reference() {
        let mut issue = pending_issue();
        IssueUpdate::matched_to("activity-9").apply_to(&mut issue);
        assert_eq!(issue.status, IssueStatus::Matched);
        assert_eq!(issue.matched_activity_id.as_deref(), Some("activity-9"));
    }

    #[test]
    fn explicit_null_clears_matched_activity() {
        let mut issue = pending_issue();
        issue.matched_activity_id = Some("activity-9".to_string());

        let update: IssueUpdate =
            serde_json::from_str(r#"{"matchedActivityId": null}"#).expect("valid update json");
        assert_eq!(update.matched_activity_id, Some(None));

        update.apply_to(&mut issue);
        assert!(issue.matched_activity_id.is_none());
    }

    #[test]
    fn missing_key_leaves_matched_activity_untouched() {
        let mut issue = pending_issue();
        issue.matched_activity_id = Some("activity-9".to_string());

        let update: IssueUpdate =
            serde_json::from_str(r#"{"votes": 12, "status": "matched"}"#).expect("valid update json");
        assert!(update.matched_activity_id.is_none());

        update.apply_to(&mut issue);
        assert_eq!(issue.votes, 12);
        assert_eq!(issue.matched_activity_id.as_deref(), Some("activity-9"));
    }
}
