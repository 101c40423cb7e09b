//! Recording test double for [`AccountRepository`].
//!
//! Register the queries a test expects along with canned responses, run the
//! code under test, then call [`MockAccountRepository::assert_expectations`].
//!
//! ```ignore
//! let repo = MockAccountRepository::new();
//! repo.expect_count("unique-id", 1);
//! let rules = StdAccountRules::new(&repo);
//! assert!(rules.id_is_unique(&Account::with_id("unique-id")).is_ok());
//! repo.assert_expectations();
//! ```

use parking_lot::Mutex;

use super::repository::{AccountRepository, RepositoryError, RepositoryResult};

#[derive(Debug, Clone)]
enum Response {
    Count(u64),
    Failure(String),
}

#[derive(Debug)]
struct Expectation {
    id: String,
    response: Response,
    times: usize,
    calls: usize,
}

#[derive(Debug, Default)]
struct State {
    expectations: Vec<Expectation>,
    calls: Vec<String>,
    unexpected: Vec<String>,
}

/// Account repository that answers from registered expectations.
#[derive(Debug, Default)]
pub struct MockAccountRepository {
    state: Mutex<State>,
}

/// Handle for adjusting an expectation after registering it.
#[derive(Debug)]
pub struct ExpectationHandle<'a> {
    mock: &'a MockAccountRepository,
    index: usize,
}

impl ExpectationHandle<'_> {
    /// Expect the query exactly `times` times instead of once.
    pub fn times(self, times: usize) {
        self.mock.state.lock().expectations[self.index].times = times;
    }
}

impl MockAccountRepository {
    /// Create a mock with no expectations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect one count query for `id`, answered with `count`.
    pub fn expect_count(&self, id: impl Into<String>, count: u64) -> ExpectationHandle<'_> {
        self.push(id.into(), Response::Count(count))
    }

    /// Expect one count query for `id`, failing with `message`.
    pub fn expect_failure(
        &self,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> ExpectationHandle<'_> {
        self.push(id.into(), Response::Failure(message.into()))
    }

    /// IDs of every count query received, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// Check that every expectation was met and no other query was made.
    ///
    /// # Panics
    ///
    /// Panics if an expected query was missed, made too often, or a query
    /// arrived that nothing expected.
    pub fn assert_expectations(&self) {
        let state = self.state.lock();
        assert!(
            state.unexpected.is_empty(),
            "unexpected count_matching_id calls: {:?}",
            state.unexpected
        );
        for expectation in &state.expectations {
            assert_eq!(
                expectation.calls, expectation.times,
                "count_matching_id({:?}) expected {} call(s), got {}",
                expectation.id, expectation.times, expectation.calls
            );
        }
    }

    fn push(&self, id: String, response: Response) -> ExpectationHandle<'_> {
        let mut state = self.state.lock();
        state.expectations.push(Expectation {
            id,
            response,
            times: 1,
            calls: 0,
        });
        let index = state.expectations.len() - 1;
        ExpectationHandle { mock: self, index }
    }
}

impl AccountRepository for MockAccountRepository {
    fn count_matching_id(&self, id: &str) -> RepositoryResult<u64> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.calls.push(id.to_string());

        let matched = state
            .expectations
            .iter_mut()
            .find(|e| e.id == id && e.calls < e.times);

        let Some(expectation) = matched else {
            state.unexpected.push(id.to_string());
            return Err(RepositoryError::new(format!(
                "unexpected call: count_matching_id({id:?})"
            )));
        };

        expectation.calls += 1;
        match expectation.response.clone() {
            Response::Count(count) => Ok(count),
            Response::Failure(message) => Err(RepositoryError::new(message)),
        }
    }
}
