//! Element and attribute names of the supported NUnit report dialects.

/// Root (and repeatable) element of NUnit 2.x reports.
pub const LEGACY_RESULTS_TAG: &str = "test-results";

/// Root element of NUnit 3.x reports.
pub const MODERN_RUN_TAG: &str = "test-run";

/// Suite element nested under both report roots.
pub const TEST_SUITE_TAG: &str = "test-suite";

/// Legacy attribute holding the total number of test cases.
pub const LEGACY_TOTAL: &str = "total";

/// Legacy attribute holding the number of errored test cases.
pub const LEGACY_ERRORS: &str = "errors";

/// Legacy attribute holding the number of failed test cases.
pub const LEGACY_FAILURES: &str = "failures";

/// Legacy attributes summed into the skipped bucket.
pub const LEGACY_SKIPPED: [&str; 3] = ["not-run", "ignored", "invalid"];

/// Legacy timing attribute. On `<test-results>` NUnit 2.x writes the start
/// time of day here; on `<test-suite>` it is the duration in seconds.
pub const LEGACY_TIME: &str = "time";

/// Modern attribute holding the total number of test cases.
pub const MODERN_TOTAL: &str = "total";

/// Modern attribute holding the number of failed test cases.
pub const MODERN_FAILED: &str = "failed";

/// Modern attribute holding the number of errored test cases.
pub const MODERN_ERRORS: &str = "errors";

/// Modern attributes summed into the skipped bucket.
pub const MODERN_SKIPPED: [&str; 2] = ["inconclusive", "skipped"];

/// Modern duration attribute, in seconds.
pub const MODERN_DURATION: &str = "duration";

/// Run-level counters that are only meaningful together with `total`.
pub const MODERN_RUN_COUNTERS: [&str; 7] = [
    "testcasecount",
    "passed",
    MODERN_FAILED,
    MODERN_ERRORS,
    "inconclusive",
    "skipped",
    MODERN_DURATION,
];

/// Scale from report seconds to accumulated milliseconds.
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Separator that marks a legacy `time` value as a clock time rather than a duration.
pub const CLOCK_SEPARATOR: char = ':';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_attributes_are_distinct() {
        for (i, a) in LEGACY_SKIPPED.iter().enumerate() {
            assert!(!LEGACY_SKIPPED[i + 1..].contains(a), "duplicate {a}");
        }
        assert_ne!(MODERN_SKIPPED[0], MODERN_SKIPPED[1]);
    }

    #[test]
    fn test_root_tags_differ() {
        assert_ne!(LEGACY_RESULTS_TAG, MODERN_RUN_TAG);
    }
}
