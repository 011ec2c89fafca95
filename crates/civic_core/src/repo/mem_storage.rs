//! In-memory `CivicStorage` implementation.
//!
//! # Responsibility
//! - Hold one `RecordTable` per entity kind.
//! - Assign server-side defaults on create.
//!
//! # Invariants
//! - Seeded stores run the seed bootstrap exactly once, inside `seeded()`.
//! - Each table has its own lock; no operation spans two tables.

use crate::model::action_plan::{ActionPlan, NewActionPlan};
use crate::model::activity::{GovernmentActivity, NewGovernmentActivity};
use crate::model::issue::{CitizenIssue, IssueUpdate, NewCitizenIssue};
use crate::model::official::{NewOfficial, Official};
use crate::model::statistic::{NewStatistic, Statistic};
use crate::model::user::{NewUser, User};
use crate::model::vote::{NewVoteRecord, VoteRecord};
use crate::repo::seed::seed_store;
use crate::repo::storage::CivicStorage;
use crate::repo::table::RecordTable;
use crate::repo::StoreResult;
use chrono::Utc;
use log::{debug, error, info};
use std::time::Instant;

/// Process-local civic-data store.
#[derive(Default)]
pub struct MemStorage {
    users: RecordTable<User>,
    activities: RecordTable<GovernmentActivity>,
    issues: RecordTable<CitizenIssue>,
    officials: RecordTable<Official>,
    vote_records: RecordTable<VoteRecord>,
    statistics: RecordTable<Statistic>,
    action_plans: RecordTable<ActionPlan>,
}

/// Record counts per entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub government_activities: usize,
    pub citizen_issues: usize,
    pub officials: usize,
    pub vote_records: usize,
    pub statistics: usize,
    pub action_plans: usize,
}

impl MemStorage {
    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store populated with the fixture dataset.
    ///
    /// # Errors
    /// - Returns `StoreError::InvalidSeed` when the fixture cannot be built.
    ///   Callers should treat this as fatal.
    pub fn seeded() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_seed module=store status=start");

        let store = Self::empty();
        if let Err(err) = seed_store(&store) {
            error!(
                "event=store_seed module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }

        let counts = store.counts();
        info!(
            "event=store_seed module=store status=ok duration_ms={} officials={} activities={} issues={} vote_records={} statistics={} action_plans={}",
            started_at.elapsed().as_millis(),
            counts.officials,
            counts.government_activities,
            counts.citizen_issues,
            counts.vote_records,
            counts.statistics,
            counts.action_plans
        );
        Ok(store)
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            government_activities: self.activities.len(),
            citizen_issues: self.issues.len(),
            officials: self.officials.len(),
            vote_records: self.vote_records.len(),
            statistics: self.statistics.len(),
            action_plans: self.action_plans.len(),
        }
    }
}

impl CivicStorage for MemStorage {
    fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    fn list_users(&self) -> Vec<User> {
        self.users.list()
    }

    fn create_user(&self, input: NewUser) -> User {
        self.users.insert_with(|id| User::from_new(id, input))
    }

    fn list_government_activities(&self) -> Vec<GovernmentActivity> {
        self.activities.list()
    }

    fn get_government_activity(&self, id: &str) -> Option<GovernmentActivity> {
        self.activities.get(id)
    }

    fn create_government_activity(&self, input: NewGovernmentActivity) -> GovernmentActivity {
        self.activities
            .insert_with(|id| GovernmentActivity::from_new(id, input))
    }

    fn list_citizen_issues(&self) -> Vec<CitizenIssue> {
        self.issues.list()
    }

    fn get_citizen_issue(&self, id: &str) -> Option<CitizenIssue> {
        self.issues.get(id)
    }

    fn create_citizen_issue(&self, input: NewCitizenIssue) -> CitizenIssue {
        let created_at = Utc::now();
        self.issues
            .insert_with(|id| CitizenIssue::from_new(id, input, created_at))
    }

    fn update_citizen_issue(&self, id: &str, update: IssueUpdate) -> Option<CitizenIssue> {
        let updated = self.issues.update_with(id, |issue| update.apply_to(issue));
        match &updated {
            Some(issue) => debug!(
                "event=issue_update module=store status=ok id={} issue_status={:?}",
                issue.id, issue.status
            ),
            None => debug!("event=issue_update module=store status=not_found id={id}"),
        }
        updated
    }

    fn upvote_citizen_issue(&self, id: &str) -> Option<CitizenIssue> {
        self.issues
            .update_with(id, |issue| issue.votes = issue.votes.saturating_add(1))
    }

    fn list_officials(&self) -> Vec<Official> {
        self.officials.list()
    }

    fn get_official(&self, id: &str) -> Option<Official> {
        self.officials.get(id)
    }

    fn create_official(&self, input: NewOfficial) -> Official {
        self.officials.insert_with(|id| Official::from_new(id, input))
    }

    fn list_vote_records(&self) -> Vec<VoteRecord> {
        self.vote_records.list()
    }

    fn get_vote_record(&self, id: &str) -> Option<VoteRecord> {
        self.vote_records.get(id)
    }

    fn vote_records_by_official(&self, official_id: &str) -> Vec<VoteRecord> {
        self.vote_records
            .filter(|record| record.official_id == official_id)
    }

    fn create_vote_record(&self, input: NewVoteRecord) -> VoteRecord {
        self.vote_records
            .insert_with(|id| VoteRecord::from_new(id, input))
    }

    fn list_statistics(&self) -> Vec<Statistic> {
        self.statistics.list()
    }

    fn get_statistic(&self, id: &str) -> Option<Statistic> {
        self.statistics.get(id)
    }

    fn statistic_by_area(&self, area: &str) -> Option<Statistic> {
        self.statistics.find(|stat| stat.area == area)
    }

    fn create_statistic(&self, input: NewStatistic) -> Statistic {
        self.statistics
            .insert_with(|id| Statistic::from_new(id, input))
    }

    fn list_action_plans(&self) -> Vec<ActionPlan> {
        self.action_plans.list()
    }

    fn get_action_plan(&self, id: &str) -> Option<ActionPlan> {
        self.action_plans.get(id)
    }

    fn action_plans_for_issue(&self, issue_id: &str) -> Vec<ActionPlan> {
        self.action_plans.filter(|plan| plan.issue_id == issue_id)
    }

    fn create_action_plan(&self, input: NewActionPlan) -> ActionPlan {
        self.action_plans
            .insert_with(|id| ActionPlan::from_new(id, input))
    }
}
