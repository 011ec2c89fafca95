//! Elected official record.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Stored official.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Official {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    /// Empty for at-large offices such as mayor.
    pub district: String,
    pub party: String,
    pub phone: String,
    pub email: String,
    pub photo_url: String,
    pub committees: Vec<String>,
}

/// Insert shape for `Official`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOfficial {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub district: String,
    pub party: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub committees: Vec<String>,
}

impl Official {
    pub(crate) fn from_new(id: RecordId, input: NewOfficial) -> Self {
        Self {
            id,
            name: input.name,
            role: input.role,
            district: input.district,
            party: input.party,
            phone: input.phone,
            email: input.email,
            photo_url: input.photo_url,
            committees: input.committees,
        }
    }
}

impl Record for Official {
    const KIND: &'static str = "official";

    fn id(&self) -> &str {
        &self.id
    }
}
