//! The canonical test result summary.

use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Accumulated counts of one or more NUnit reports.
///
/// Counters only ever grow. `execution_time` stays `None` until some
/// result-bearing element supplies a timing attribute, and from then on holds
/// the running sum in milliseconds.
///
/// The counters are not cross-checked: reports do not guarantee that
/// `tests == errors + failures + skipped + passed`.
///
/// # Examples
/// ```
/// use nunit_report::UnitTestResults;
///
/// let mut results = UnitTestResults::new();
/// results.add_counts(10, 1, 2, 0, None);
/// results.add_counts(5, 0, 0, 1, Some(250));
///
/// assert_eq!(results.tests(), 15);
/// assert_eq!(results.execution_time(), Some(250));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnitTestResults {
    tests: u64,
    errors: u64,
    failures: u64,
    skipped: u64,
    #[serde(rename = "execution_time_ms", skip_serializing_if = "Option::is_none")]
    execution_time: Option<u64>,
}

impl UnitTestResults {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the counts of one result-bearing element into the accumulator.
    pub fn add_counts(
        &mut self,
        tests: u64,
        skipped: u64,
        failures: u64,
        errors: u64,
        execution_time: Option<u64>,
    ) {
        self.tests = self.tests.saturating_add(tests);
        self.skipped = self.skipped.saturating_add(skipped);
        self.failures = self.failures.saturating_add(failures);
        self.errors = self.errors.saturating_add(errors);
        self.execution_time = sum_times(self.execution_time, execution_time);
    }

    /// Fold another accumulator into this one, field by field.
    pub fn merge(&mut self, other: &UnitTestResults) {
        self.add_counts(
            other.tests,
            other.skipped,
            other.failures,
            other.errors,
            other.execution_time,
        );
    }

    #[must_use]
    pub fn tests(&self) -> u64 {
        self.tests
    }

    #[must_use]
    pub fn errors(&self) -> u64 {
        self.errors
    }

    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }

    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Total execution time in milliseconds, if any element reported one.
    #[must_use]
    pub fn execution_time(&self) -> Option<u64> {
        self.execution_time
    }

    /// Tests that neither errored, failed nor were skipped.
    ///
    /// Saturates at zero when the report counters are inconsistent.
    #[must_use]
    pub fn passed(&self) -> u64 {
        self.tests
            .saturating_sub(self.errors)
            .saturating_sub(self.failures)
            .saturating_sub(self.skipped)
    }

    /// True while nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn sum_times(current: Option<u64>, extra: Option<u64>) -> Option<u64> {
    match (current, extra) {
        (Some(a), Some(b)) => Some(a.saturating_add(b)),
        (a, b) => a.or(b),
    }
}

impl AddAssign for UnitTestResults {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Add for UnitTestResults {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::iter::Sum for UnitTestResults {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}
