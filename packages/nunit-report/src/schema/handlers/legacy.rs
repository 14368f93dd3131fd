//! Handler for NUnit 2.x reports.

use roxmltree::Node;

use crate::config::{
    CLOCK_SEPARATOR, LEGACY_ERRORS, LEGACY_FAILURES, LEGACY_RESULTS_TAG, LEGACY_SKIPPED,
    LEGACY_TIME, LEGACY_TOTAL, TEST_SUITE_TAG,
};
use crate::error::Result;
use crate::numeric::{read_integer_or_zero, read_optional_decimal, read_required_integer, Decimal};
use crate::results::UnitTestResults;
use crate::schema::{Dialect, ReportContext, SchemaHandler};
use crate::xml::{descendants_named, find_children};

/// Handler for `<test-results>` documents.
///
/// Every `<test-results>` element in the document counts on its own, the root
/// included. `total`, `errors` and `failures` are required; `not-run`,
/// `ignored` and `invalid` are optional and summed as skipped.
pub struct LegacyHandler;

impl SchemaHandler for LegacyHandler {
    fn dialect(&self) -> Dialect {
        Dialect::Legacy
    }

    fn handle(&self, root: Node<'_, '_>, context: &ReportContext<'_>) -> Result<UnitTestResults> {
        let mut results = UnitTestResults::new();

        for element in descendants_named(root, LEGACY_RESULTS_TAG) {
            let path = context.path();
            let tests = read_required_integer(element, LEGACY_TOTAL, path)?;
            let errors = read_required_integer(element, LEGACY_ERRORS, path)?;
            let failures = read_required_integer(element, LEGACY_FAILURES, path)?;

            let mut skipped = 0u64;
            for attribute in LEGACY_SKIPPED {
                skipped = skipped.saturating_add(read_integer_or_zero(element, attribute, path)?);
            }

            let execution_time = read_execution_time(element, context)?;

            tracing::debug!(
                tests,
                errors,
                failures,
                skipped,
                ?execution_time,
                "Read <test-results> element"
            );
            results.add_counts(tests, skipped, failures, errors, execution_time);
        }

        Ok(results)
    }
}

/// Execution time of one `<test-results>` element, in milliseconds.
///
/// NUnit 2.x writes the start time of day (`hh:mm:ss`) into `time` and keeps
/// the durations on the directly nested suites. Any other `time` value is a
/// duration in seconds.
fn read_execution_time(element: Node<'_, '_>, context: &ReportContext<'_>) -> Result<Option<u64>> {
    match element.attribute(LEGACY_TIME) {
        None => Ok(None),
        Some(clock) if clock.contains(CLOCK_SEPARATOR) => {
            let total = read_nested_suite_times(element, context)?;
            if total.is_none() {
                tracing::warn!(
                    path = %context.path().display(),
                    time = clock,
                    "No suite durations next to clock time, execution time not reported"
                );
            }
            Ok(total)
        }
        Some(_) => {
            let seconds = read_optional_decimal(element, LEGACY_TIME, context.path())?;
            Ok(seconds.map(Decimal::thousandths))
        }
    }
}

fn read_nested_suite_times(
    element: Node<'_, '_>,
    context: &ReportContext<'_>,
) -> Result<Option<u64>> {
    let mut total: Option<u64> = None;
    for suite in find_children(element, TEST_SUITE_TAG) {
        if let Some(seconds) = read_optional_decimal(suite, LEGACY_TIME, context.path())? {
            total = Some(total.unwrap_or(0).saturating_add(seconds.thousandths()));
        }
    }
    Ok(total)
}
