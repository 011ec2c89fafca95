//! Citizen issue use-case service.
//!
//! # Responsibility
//! - Provide report/upvote/match entry points for citizen issues.
//! - Drive the `pending -> matched` transition.
//!
//! # Invariants
//! - `match_to_activity` only links to activities that exist in the store.
//! - Votes only ever go up through this service.

use crate::model::issue::{CitizenIssue, IssueUpdate, NewCitizenIssue};
use crate::model::RecordId;
use crate::repo::storage::CivicStorage;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for issue use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueServiceError {
    /// Target issue does not exist.
    IssueNotFound(RecordId),
    /// Referenced government activity does not exist.
    ActivityNotFound(RecordId),
}

impl Display for IssueServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IssueNotFound(id) => write!(f, "citizen issue not found: {id}"),
            Self::ActivityNotFound(id) => write!(f, "government activity not found: {id}"),
        }
    }
}

impl Error for IssueServiceError {}

pub type IssueServiceResult<T> = Result<T, IssueServiceError>;

/// Use-case wrapper over citizen issue storage.
pub struct IssueService<'s, S: CivicStorage> {
    store: &'s S,
}

impl<'s, S: CivicStorage> IssueService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Files a new pending issue.
    pub fn report_issue(&self, input: NewCitizenIssue) -> CitizenIssue {
        let issue = self.store.create_citizen_issue(input);
        info!(
            "event=issue_report module=service status=ok id={} zipcode={}",
            issue.id, issue.zipcode
        );
        issue
    }

    /// Adds one vote to an issue.
    pub fn upvote(&self, issue_id: &str) -> IssueServiceResult<CitizenIssue> {
        self.store
            .upvote_citizen_issue(issue_id)
            .ok_or_else(|| IssueServiceError::IssueNotFound(issue_id.to_string()))
    }

    /// Links an issue to an existing activity and marks it matched.
    ///
    /// # Errors
    /// - `ActivityNotFound` when `activity_id` is unknown; the issue is untouched.
    /// - `IssueNotFound` when `issue_id` is unknown.
    pub fn match_to_activity(
        &self,
        issue_id: &str,
        activity_id: &str,
    ) -> IssueServiceResult<CitizenIssue> {
        let activity = self
            .store
            .get_government_activity(activity_id)
            .ok_or_else(|| IssueServiceError::ActivityNotFound(activity_id.to_string()))?;

        let issue = self
            .store
            .update_citizen_issue(issue_id, IssueUpdate::matched_to(activity.id))
            .ok_or_else(|| IssueServiceError::IssueNotFound(issue_id.to_string()))?;
        info!(
            "event=issue_match module=service status=ok id={} activity_id={}",
            issue.id, activity_id
        );
        Ok(issue)
    }

    /// Applies a partial update as-is.
    pub fn update(&self, issue_id: &str, update: IssueUpdate) -> IssueServiceResult<CitizenIssue> {
        self.store
            .update_citizen_issue(issue_id, update)
            .ok_or_else(|| IssueServiceError::IssueNotFound(issue_id.to_string()))
    }
}
