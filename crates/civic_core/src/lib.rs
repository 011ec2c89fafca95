//! Civic-data storage core.
//! Owns the record models, the storage contract and its in-memory store.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{default_log_level, ConfigError, CoreConfig, LoggingConfig};
pub use logging::{init_logging, logging_status};
pub use model::action_plan::{ActionPlan, ActionType, NewActionPlan, Priority};
pub use model::activity::{
    ActivityStatus, ActivityType, GovernmentActivity, NewGovernmentActivity, VoteResult,
};
pub use model::issue::{CitizenIssue, IssueStatus, IssueUpdate, NewCitizenIssue};
pub use model::official::{NewOfficial, Official};
pub use model::statistic::{AreaType, NewStatistic, Statistic};
pub use model::user::{NewUser, User};
pub use model::vote::{Ballot, NewVoteRecord, VoteRecord};
pub use model::{new_record_id, Record, RecordId};
pub use repo::mem_storage::{MemStorage, StoreCounts};
pub use repo::storage::CivicStorage;
pub use repo::{StoreError, StoreResult};
pub use service::issue_service::{IssueService, IssueServiceError, IssueServiceResult};
pub use service::official_service::{OfficialService, OfficialVotingRecord, VoteEntry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
