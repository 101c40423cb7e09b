//! Error types for the core library.

use thiserror::Error;

use crate::account::{RepositoryError, RuleError};

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An account rule rejected the account.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The account repository failed outside of a rule evaluation.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
