//! Integration tests for the account rule set.
//!
//! Exercises the public API with the recording mock repository and the
//! in-memory store.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use runehistory_core::{
    Account, AccountRules, InMemoryAccountRepository, MockAccountRepository, RuleConfig,
    RuleError, StdAccountRules, validate_existing_account, validate_new_account,
};

/// Route rule logging to the test writer, filtered by `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runehistory_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn id_of_length(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn scenario_present_id() {
    init_tracing();
    let repo = MockAccountRepository::new();
    let rules = StdAccountRules::new(&repo);
    assert!(rules.id_is_present(&Account::with_id("present-id")).is_ok());
    repo.assert_expectations();
}

#[test]
fn scenario_vacant_id() {
    init_tracing();
    let repo = MockAccountRepository::new();
    let rules = StdAccountRules::new(&repo);
    assert!(rules.id_is_present(&Account::with_id("")).is_err());
    repo.assert_expectations();
}

#[test]
fn scenario_correct_length() {
    init_tracing();
    let repo = MockAccountRepository::new();
    let rules = StdAccountRules::new(&repo);
    let account = Account::with_id("uuid-correct-length-1234567890123456");
    assert!(rules.id_is_correct_length(&account).is_ok());
}

#[test]
fn scenario_incorrect_length() {
    init_tracing();
    let repo = MockAccountRepository::new();
    let rules = StdAccountRules::new(&repo);
    let account = Account::with_id("uuid-incorrect-length");
    assert!(rules.id_is_correct_length(&account).is_err());
}

#[test]
fn scenario_unique_id() {
    init_tracing();
    let repo = MockAccountRepository::new();
    repo.expect_count("unique-id", 1);
    let rules = StdAccountRules::new(&repo);
    assert!(rules.id_is_unique(&Account::with_id("unique-id")).is_ok());
    repo.assert_expectations();
}

#[test]
fn scenario_non_unique_id() {
    init_tracing();
    let repo = MockAccountRepository::new();
    repo.expect_count("non-unique-id", 2);
    let rules = StdAccountRules::new(&repo);
    assert!(rules.id_is_unique(&Account::with_id("non-unique-id")).is_err());
    repo.assert_expectations();
}

#[test]
fn scenario_id_is_unique_repository_error() {
    init_tracing();
    let repo = MockAccountRepository::new();
    repo.expect_failure("id-is-unique-err", "expecting failure");
    let rules = StdAccountRules::new(&repo);
    let err = rules
        .id_is_unique(&Account::with_id("id-is-unique-err"))
        .unwrap_err();
    assert_eq!(err.to_string(), "expecting failure");
    repo.assert_expectations();
}

#[test]
fn scenario_id_will_be_unique_taken() {
    init_tracing();
    let repo = MockAccountRepository::new();
    repo.expect_count("non-unique-id", 1);
    let rules = StdAccountRules::new(&repo);
    assert!(rules.id_will_be_unique(&Account::with_id("non-unique-id")).is_err());
    repo.assert_expectations();
}

#[test]
fn scenario_id_will_be_unique_repository_error() {
    init_tracing();
    let repo = MockAccountRepository::new();
    repo.expect_failure("id-is-unique-err", "expecting failure");
    let rules = StdAccountRules::new(&repo);
    let err = rules
        .id_will_be_unique(&Account::with_id("id-is-unique-err"))
        .unwrap_err();
    assert!(err.is_repository_failure());
    assert_eq!(err.to_string(), "expecting failure");
    repo.assert_expectations();
}

#[test]
fn rule_set_is_reused_across_calls() {
    init_tracing();
    let repo = MockAccountRepository::new();
    repo.expect_count("first", 1);
    repo.expect_count("second", 0);
    let rules = StdAccountRules::new(&repo);

    assert!(rules.id_is_unique(&Account::with_id("first")).is_ok());
    assert!(rules.id_will_be_unique(&Account::with_id("second")).is_ok());
    assert_eq!(repo.calls(), vec!["first".to_string(), "second".to_string()]);
    repo.assert_expectations();
}

#[test]
fn rules_share_a_store_across_threads() {
    init_tracing();
    let repo = Arc::new(InMemoryAccountRepository::new());
    let rules = Arc::new(StdAccountRules::new(Arc::clone(&repo)));

    let stored = Account::register("Lynx Titan");
    repo.insert(stored.clone());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rules = Arc::clone(&rules);
            let stored = stored.clone();
            thread::spawn(move || {
                let fresh = Account::register("Woox");
                validate_existing_account(rules.as_ref(), &stored).is_ok()
                    && validate_new_account(rules.as_ref(), &fresh).is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn new_account_with_short_taken_id_reports_both_failures() {
    init_tracing();
    let repo = InMemoryAccountRepository::with_accounts([Account::with_id("taken")]);
    let rules = StdAccountRules::new(&repo);

    let errors = validate_new_account(&rules, &Account::with_id("taken")).unwrap_err();
    assert!(matches!(
        errors[..],
        [
            RuleError::IncorrectLength {
                expected: 36,
                actual: 5
            },
            RuleError::AlreadyExists { count: 1 }
        ]
    ));
}

#[test]
fn configured_length_from_json() {
    init_tracing();
    let repo = InMemoryAccountRepository::new();
    let config = RuleConfig::from_json(r#"{"id_length": 5}"#).unwrap();
    let rules = StdAccountRules::with_config(&repo, config);

    assert!(validate_new_account(&rules, &Account::with_id("abcde")).is_ok());
}

proptest! {
    #[test]
    fn prop_non_empty_id_is_present(id in ".+") {
        let repo = MockAccountRepository::new();
        let rules = StdAccountRules::new(&repo);
        prop_assert!(rules.id_is_present(&Account::with_id(id)).is_ok());
        prop_assert!(repo.calls().is_empty());
    }

    #[test]
    fn prop_required_length_passes(id in id_of_length(36)) {
        let repo = MockAccountRepository::new();
        let rules = StdAccountRules::new(&repo);
        prop_assert!(rules.id_is_correct_length(&Account::with_id(id)).is_ok());
    }

    #[test]
    fn prop_other_length_fails(len in (0usize..100).prop_filter("not 36", |l| *l != 36)) {
        let repo = MockAccountRepository::new();
        let rules = StdAccountRules::new(&repo);
        let account = Account::with_id("x".repeat(len));
        let err = rules.id_is_correct_length(&account).unwrap_err();
        let is_length_error = matches!(
            err,
            RuleError::IncorrectLength { expected: 36, actual } if actual == len
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn prop_count_of_one_is_unique(id in "[a-z0-9-]{1,40}") {
        let repo = MockAccountRepository::new();
        repo.expect_count(id.clone(), 1);
        let rules = StdAccountRules::new(&repo);
        prop_assert!(rules.id_is_unique(&Account::with_id(id)).is_ok());
        repo.assert_expectations();
    }

    #[test]
    fn prop_other_count_is_not_unique(
        id in "[a-z0-9-]{1,40}",
        count in any::<u64>().prop_filter("not 1", |c| *c != 1),
    ) {
        let repo = MockAccountRepository::new();
        repo.expect_count(id.clone(), count);
        let rules = StdAccountRules::new(&repo);
        let err = rules.id_is_unique(&Account::with_id(id)).unwrap_err();
        let is_not_unique = matches!(err, RuleError::NotUnique { count: c } if c == count);
        prop_assert!(is_not_unique);
        repo.assert_expectations();
    }

    #[test]
    fn prop_zero_count_will_be_unique(id in "[a-z0-9-]{1,40}") {
        let repo = MockAccountRepository::new();
        repo.expect_count(id.clone(), 0);
        let rules = StdAccountRules::new(&repo);
        prop_assert!(rules.id_will_be_unique(&Account::with_id(id)).is_ok());
        repo.assert_expectations();
    }

    #[test]
    fn prop_positive_count_already_exists(id in "[a-z0-9-]{1,40}", count in 1u64..=u64::MAX) {
        let repo = MockAccountRepository::new();
        repo.expect_count(id.clone(), count);
        let rules = StdAccountRules::new(&repo);
        prop_assert!(rules.id_will_be_unique(&Account::with_id(id)).is_err());
        repo.assert_expectations();
    }

    #[test]
    fn prop_repository_message_round_trips(message in "[ -~]{0,64}") {
        let repo = MockAccountRepository::new();
        repo.expect_failure("id", message.clone()).times(2);
        let rules = StdAccountRules::new(&repo);
        let account = Account::with_id("id");

        let unique = rules.id_is_unique(&account).unwrap_err();
        let will_be_unique = rules.id_will_be_unique(&account).unwrap_err();
        prop_assert_eq!(unique.to_string(), message.clone());
        prop_assert_eq!(will_be_unique.to_string(), message);
        repo.assert_expectations();
    }
}
