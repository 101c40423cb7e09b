//! Account module.
//!
//! Provides the account model, the storage contract and the validation rules.

mod memory;
#[cfg(any(test, feature = "test-util"))]
mod mock;
mod model;
mod repository;
mod rules;
mod validation;

pub use memory::InMemoryAccountRepository;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{ExpectationHandle, MockAccountRepository};
pub use model::{Account, generate_id};
pub use repository::{AccountRepository, RepositoryError, RepositoryResult};
pub use rules::{AccountRules, RuleError, RuleResult, StdAccountRules};
pub use validation::{ValidationResult, validate_existing_account, validate_new_account};
