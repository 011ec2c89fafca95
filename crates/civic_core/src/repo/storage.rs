//! Storage capability contract.
//!
//! # Responsibility
//! - List every operation the request layer may perform, per entity kind.
//! - Keep callers independent from the concrete store.
//!
//! # Invariants
//! - `create_*` always succeeds and returns the full stored record.
//! - `get_*`, `update_*` and secondary lookups return `None` for unknown keys.
//! - `list_*` returns a snapshot, not a live view.
//! - Only citizen issues are mutable; nothing is ever deleted.

use crate::model::action_plan::{ActionPlan, NewActionPlan};
use crate::model::activity::{GovernmentActivity, NewGovernmentActivity};
use crate::model::issue::{CitizenIssue, IssueUpdate, NewCitizenIssue};
use crate::model::official::{NewOfficial, Official};
use crate::model::statistic::{NewStatistic, Statistic};
use crate::model::user::{NewUser, User};
use crate::model::vote::{NewVoteRecord, VoteRecord};

/// Storage interface for civic-data CRUD operations.
pub trait CivicStorage: Send + Sync {
    fn get_user(&self, id: &str) -> Option<User>;
    /// First user whose username matches exactly.
    fn get_user_by_username(&self, username: &str) -> Option<User>;
    fn list_users(&self) -> Vec<User>;
    fn create_user(&self, input: NewUser) -> User;

    fn list_government_activities(&self) -> Vec<GovernmentActivity>;
    fn get_government_activity(&self, id: &str) -> Option<GovernmentActivity>;
    fn create_government_activity(&self, input: NewGovernmentActivity) -> GovernmentActivity;

    fn list_citizen_issues(&self) -> Vec<CitizenIssue>;
    fn get_citizen_issue(&self, id: &str) -> Option<CitizenIssue>;
    /// Creates a pending issue with zero votes, stamped with the current time.
    fn create_citizen_issue(&self, input: NewCitizenIssue) -> CitizenIssue;
    /// Shallow-merges `update` over the stored issue.
    ///
    /// Returns `None` when `id` is unknown; the store is then unchanged.
    fn update_citizen_issue(&self, id: &str, update: IssueUpdate) -> Option<CitizenIssue>;
    /// Atomically adds one vote to the issue.
    fn upvote_citizen_issue(&self, id: &str) -> Option<CitizenIssue>;

    fn list_officials(&self) -> Vec<Official>;
    fn get_official(&self, id: &str) -> Option<Official>;
    fn create_official(&self, input: NewOfficial) -> Official;

    fn list_vote_records(&self) -> Vec<VoteRecord>;
    fn get_vote_record(&self, id: &str) -> Option<VoteRecord>;
    /// All vote records cast by `official_id`, possibly empty.
    fn vote_records_by_official(&self, official_id: &str) -> Vec<VoteRecord>;
    fn create_vote_record(&self, input: NewVoteRecord) -> VoteRecord;

    fn list_statistics(&self) -> Vec<Statistic>;
    fn get_statistic(&self, id: &str) -> Option<Statistic>;
    /// First statistic whose `area` matches exactly.
    fn statistic_by_area(&self, area: &str) -> Option<Statistic>;
    fn create_statistic(&self, input: NewStatistic) -> Statistic;

    fn list_action_plans(&self) -> Vec<ActionPlan>;
    fn get_action_plan(&self, id: &str) -> Option<ActionPlan>;
    /// All action plans attached to `issue_id`, possibly empty.
    fn action_plans_for_issue(&self, issue_id: &str) -> Vec<ActionPlan>;
    fn create_action_plan(&self, input: NewActionPlan) -> ActionPlan;
}
