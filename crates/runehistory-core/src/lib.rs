//! # runehistory-core
//!
//! Core domain logic for the `RuneHistory` API.
//!
//! This crate provides:
//! - The account model
//! - The account storage contract ([`AccountRepository`])
//! - Account ID rules: presence, length, uniqueness and prospective uniqueness
//! - Validation of accounts on the create and update paths
//!
//! ## Example
//!
//! ```
//! use runehistory_core::{
//!     Account, AccountRules, InMemoryAccountRepository, StdAccountRules, validate_new_account,
//! };
//!
//! let repo = InMemoryAccountRepository::new();
//! let rules = StdAccountRules::new(&repo);
//!
//! let account = Account::register("Zezima");
//! assert!(validate_new_account(&rules, &account).is_ok());
//!
//! repo.insert(account.clone());
//! assert!(rules.id_will_be_unique(&account).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod config;
mod error;

pub use account::{
    Account, AccountRepository, AccountRules, InMemoryAccountRepository, RepositoryError,
    RepositoryResult, RuleError, RuleResult, StdAccountRules, ValidationResult, generate_id,
    validate_existing_account, validate_new_account,
};
#[cfg(any(test, feature = "test-util"))]
pub use account::{ExpectationHandle, MockAccountRepository};
pub use config::{DEFAULT_ID_LENGTH, RuleConfig};
pub use error::{Error, Result};
