//! Account model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh account identifier (hyphenated v4 UUID, 36 characters).
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// A tracked player account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,
    /// In-game display name.
    #[serde(default)]
    pub nickname: String,
    /// When the account was first stored, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a new empty account.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with the given identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create an unsaved account for `nickname` with a freshly generated ID.
    #[must_use]
    pub fn register(nickname: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            nickname: nickname.into(),
            created_at: None,
        }
    }
}
