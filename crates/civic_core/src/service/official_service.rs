//! Official voting-record lookups.

use crate::model::activity::GovernmentActivity;
use crate::model::official::Official;
use crate::model::vote::VoteRecord;
use crate::repo::storage::CivicStorage;

/// One vote joined with the activity it was cast on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteEntry {
    pub record: VoteRecord,
    /// `None` when the record points at an activity the store does not hold.
    pub activity: Option<GovernmentActivity>,
}

/// An official together with every vote they cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialVotingRecord {
    pub official: Official,
    pub votes: Vec<VoteEntry>,
}

pub struct OfficialService<'s, S: CivicStorage> {
    store: &'s S,
}

impl<'s, S: CivicStorage> OfficialService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns the official and their votes, or `None` for an unknown official.
    ///
    /// Dangling activity references are kept as entries without an activity.
    pub fn voting_record(&self, official_id: &str) -> Option<OfficialVotingRecord> {
        let official = self.store.get_official(official_id)?;
        let votes = self
            .store
            .vote_records_by_official(official_id)
            .into_iter()
            .map(|record| {
                let activity = self.store.get_government_activity(&record.activity_id);
                VoteEntry { record, activity }
            })
            .collect();

        Some(OfficialVotingRecord { official, votes })
    }
}
