//! Account storage contract.
//!
//! The rule set only needs to know how many stored accounts share an
//! identifier. Storage backends implement [`AccountRepository`] elsewhere.

use std::sync::Arc;

use thiserror::Error;

/// Error reported by an account store.
///
/// Displays exactly the message the store produced, so it can travel through
/// the rule set without being reworded.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RepositoryError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl RepositoryError {
    /// Create an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error carrying the underlying storage failure.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The message reported by the store.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for repository queries.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Read access to stored accounts.
pub trait AccountRepository: Send + Sync {
    /// Count stored accounts whose ID equals `id`.
    ///
    /// Returns zero when there is none.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged if the query fails.
    fn count_matching_id(&self, id: &str) -> RepositoryResult<u64>;
}

impl<R: AccountRepository + ?Sized> AccountRepository for &R {
    fn count_matching_id(&self, id: &str) -> RepositoryResult<u64> {
        (**self).count_matching_id(id)
    }
}

impl<R: AccountRepository + ?Sized> AccountRepository for Box<R> {
    fn count_matching_id(&self, id: &str) -> RepositoryResult<u64> {
        (**self).count_matching_id(id)
    }
}

impl<R: AccountRepository + ?Sized> AccountRepository for Arc<R> {
    fn count_matching_id(&self, id: &str) -> RepositoryResult<u64> {
        (**self).count_matching_id(id)
    }
}
