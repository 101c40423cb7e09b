//! Account rules.
//!
//! Each rule checks one property of an account's ID and reports the first
//! thing wrong with it. Rules are independent: callers decide which ones to
//! run and in what order ([`crate::validate_new_account`] and
//! [`crate::validate_existing_account`] cover the usual sets).

use thiserror::Error;
use tracing::{debug, warn};

use super::model::Account;
use super::repository::{AccountRepository, RepositoryError};
use crate::config::RuleConfig;

/// A rule rejected the account, or the repository could not answer.
#[derive(Debug, Error)]
pub enum RuleError {
    /// ID is empty.
    #[error("ID is required")]
    MissingId,

    /// ID does not have the configured length.
    #[error("ID must be {expected} bytes long, got {actual}")]
    IncorrectLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected ID.
        actual: usize,
    },

    /// A stored account's ID is not held by exactly one record.
    #[error("ID is not unique")]
    NotUnique {
        /// Number of records holding the ID.
        count: u64,
    },

    /// A new account's ID is already taken.
    #[error("ID already exists")]
    AlreadyExists {
        /// Number of records holding the ID.
        count: u64,
    },

    /// The repository query failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuleError {
    /// Account field the error relates to, if it is a validation failure.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingId
            | Self::IncorrectLength { .. }
            | Self::NotUnique { .. }
            | Self::AlreadyExists { .. } => Some("id"),
            Self::Repository(_) => None,
        }
    }

    /// Whether the error came from the repository rather than the account.
    #[must_use]
    pub const fn is_repository_failure(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

/// Result of a single rule.
pub type RuleResult = Result<(), RuleError>;

/// Validation rules for account IDs.
pub trait AccountRules {
    /// The ID must not be empty.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingId`] for an empty ID.
    fn id_is_present(&self, account: &Account) -> RuleResult;

    /// The ID must have the configured length, in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::IncorrectLength`] otherwise.
    fn id_is_correct_length(&self, account: &Account) -> RuleResult;

    /// The ID of a stored account must be held by exactly one record.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NotUnique`] if the count is not 1, or
    /// [`RuleError::Repository`] if the count query fails.
    fn id_is_unique(&self, account: &Account) -> RuleResult;

    /// The ID of an account about to be created must not be held by any record.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::AlreadyExists`] if the count is not 0, or
    /// [`RuleError::Repository`] if the count query fails.
    fn id_will_be_unique(&self, account: &Account) -> RuleResult;
}

/// Standard rule set, backed by an [`AccountRepository`].
#[derive(Debug, Clone)]
pub struct StdAccountRules<R> {
    repo: R,
    config: RuleConfig,
}

impl<R: AccountRepository> StdAccountRules<R> {
    /// Create a rule set with the default configuration.
    #[must_use]
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, RuleConfig::default())
    }

    /// Create a rule set with the given configuration.
    #[must_use]
    pub const fn with_config(repo: R, config: RuleConfig) -> Self {
        Self { repo, config }
    }

    /// The repository the rules query.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repo
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RuleConfig {
        &self.config
    }

    fn count(&self, id: &str) -> Result<u64, RuleError> {
        match self.repo.count_matching_id(id) {
            Ok(count) => {
                debug!("{count} account(s) hold ID {id:?}");
                Ok(count)
            }
            Err(e) => {
                warn!("Failed to count accounts with ID {id:?}: {e}");
                Err(e.into())
            }
        }
    }
}

impl<R: AccountRepository> AccountRules for StdAccountRules<R> {
    fn id_is_present(&self, account: &Account) -> RuleResult {
        if account.id.is_empty() {
            return Err(RuleError::MissingId);
        }
        Ok(())
    }

    fn id_is_correct_length(&self, account: &Account) -> RuleResult {
        let actual = account.id.len();
        if actual != self.config.id_length {
            return Err(RuleError::IncorrectLength {
                expected: self.config.id_length,
                actual,
            });
        }
        Ok(())
    }

    fn id_is_unique(&self, account: &Account) -> RuleResult {
        match self.count(&account.id)? {
            1 => Ok(()),
            count => Err(RuleError::NotUnique { count }),
        }
    }

    fn id_will_be_unique(&self, account: &Account) -> RuleResult {
        match self.count(&account.id)? {
            0 => Ok(()),
            count => Err(RuleError::AlreadyExists { count }),
        }
    }
}
