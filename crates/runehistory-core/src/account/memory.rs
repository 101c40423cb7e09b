//! In-memory account store.

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use super::model::Account;
use super::repository::{AccountRepository, RepositoryResult};

/// Account store kept in process memory.
///
/// Duplicate IDs are accepted; uniqueness is checked by the rule set.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `accounts`.
    #[must_use]
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let repo = Self::new();
        for account in accounts {
            repo.insert(account);
        }
        repo
    }

    /// Store an account, stamping `created_at` if it is unset.
    pub fn insert(&self, mut account: Account) -> Account {
        if account.created_at.is_none() {
            account.created_at = Some(Utc::now());
        }
        debug!("Storing account {} in memory", account.id);
        self.accounts.write().push(account.clone());
        account
    }

    /// Remove every account with the given ID, returning how many were removed.
    pub fn remove(&self, id: &str) -> usize {
        let mut accounts = self.accounts.write();
        let before = accounts.len();
        accounts.retain(|account| account.id != id);
        before - accounts.len()
    }

    /// Snapshot of all stored accounts, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Account> {
        self.accounts.read().clone()
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn count_matching_id(&self, id: &str) -> RepositoryResult<u64> {
        let count = self
            .accounts
            .read()
            .iter()
            .filter(|account| account.id == id)
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}
