//! Handler for NUnit 3.x reports.

use roxmltree::Node;

use crate::config::{
    MODERN_DURATION, MODERN_ERRORS, MODERN_FAILED, MODERN_RUN_COUNTERS, MODERN_SKIPPED,
    MODERN_TOTAL, TEST_SUITE_TAG,
};
use crate::error::{ParseError, Result};
use crate::numeric::{read_integer_or_zero, read_optional_decimal, read_required_integer, Decimal};
use crate::results::UnitTestResults;
use crate::schema::{Dialect, ReportContext, SchemaHandler};
use crate::xml::{find_children, get_tag_name};

/// Handler for `<test-run>` documents.
///
/// When the run element carries its own `total` it already covers every
/// suite and is the only element counted. Otherwise each `<test-suite>`
/// directly under the run is counted; deeper suites are breakdowns of their
/// parents and are never visited. A run without `total` is rejected when it
/// has no suites or carries counters of its own.
pub struct ModernHandler;

impl SchemaHandler for ModernHandler {
    fn dialect(&self) -> Dialect {
        Dialect::Modern
    }

    fn handle(&self, root: Node<'_, '_>, context: &ReportContext<'_>) -> Result<UnitTestResults> {
        if root.has_attribute(MODERN_TOTAL) {
            return read_element(root, context);
        }

        let carries_counters = MODERN_RUN_COUNTERS
            .iter()
            .any(|attribute| root.has_attribute(*attribute));
        let mut suites = find_children(root, TEST_SUITE_TAG).peekable();
        if carries_counters || suites.peek().is_none() {
            return Err(ParseError::MissingAttribute {
                path: context.path().to_path_buf(),
                element: get_tag_name(root).to_string(),
                attribute: MODERN_TOTAL.to_string(),
            });
        }

        suites.map(|suite| read_element(suite, context)).sum()
    }
}

/// Counts of a single `<test-run>` or `<test-suite>` element.
fn read_element(element: Node<'_, '_>, context: &ReportContext<'_>) -> Result<UnitTestResults> {
    let path = context.path();
    let tests = read_required_integer(element, MODERN_TOTAL, path)?;
    let failures = read_required_integer(element, MODERN_FAILED, path)?;

    let mut skipped = 0u64;
    for attribute in MODERN_SKIPPED {
        skipped = skipped.saturating_add(read_integer_or_zero(element, attribute, path)?);
    }

    let errors = read_integer_or_zero(element, MODERN_ERRORS, path)?;
    let execution_time =
        read_optional_decimal(element, MODERN_DURATION, path)?.map(Decimal::thousandths);

    tracing::debug!(
        element = get_tag_name(element),
        tests,
        failures,
        errors,
        skipped,
        ?execution_time,
        "Read NUnit 3 element"
    );

    let mut results = UnitTestResults::new();
    results.add_counts(tests, skipped, failures, errors, execution_time);
    Ok(results)
}
