//! Account validation.
//!
//! Runs the account rules that apply to the create and update paths and
//! collects every failure.

use super::model::Account;
use super::rules::{AccountRules, RuleError, RuleResult};

/// Result of validating an account.
pub type ValidationResult = Result<(), Vec<RuleError>>;

/// Validate an account that is about to be created.
///
/// Checks presence, length and that no stored account holds the ID yet.
///
/// # Errors
///
/// Returns every failed rule. An empty ID is reported alone and the
/// repository is not queried.
pub fn validate_new_account<R: AccountRules + ?Sized>(
    rules: &R,
    account: &Account,
) -> ValidationResult {
    run(rules, account, R::id_will_be_unique)
}

/// Validate an account that is already stored.
///
/// Checks presence, length and that exactly one stored account holds the ID.
///
/// # Errors
///
/// Returns every failed rule. An empty ID is reported alone and the
/// repository is not queried.
pub fn validate_existing_account<R: AccountRules + ?Sized>(
    rules: &R,
    account: &Account,
) -> ValidationResult {
    run(rules, account, R::id_is_unique)
}

fn run<R: AccountRules + ?Sized>(
    rules: &R,
    account: &Account,
    uniqueness: impl Fn(&R, &Account) -> RuleResult,
) -> ValidationResult {
    if let Err(e) = rules.id_is_present(account) {
        return Err(vec![e]);
    }

    let errors: Vec<RuleError> = [
        rules.id_is_correct_length(account),
        uniqueness(rules, account),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
