//! Account record.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    /// Stored as received; hashing belongs to the caller.
    pub password: String,
}

/// Insert shape for `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    pub(crate) fn from_new(id: RecordId, input: NewUser) -> Self {
        Self {
            id,
            username: input.username,
            password: input.password,
        }
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }
}
