//! Report parsing and aggregation.
//!
//! The entry points read a report, classify it by its root element, let the
//! dialect's handler extract the counts, and fold them into a summary.

use std::path::{Path, PathBuf};

use roxmltree::Document;

use crate::error::{ParseError, Result};
use crate::results::UnitTestResults;
use crate::schema::{Dialect, ReportContext};
use crate::xml::get_tag_name;

/// Parse a report held in memory.
///
/// `path` is only used to qualify error messages.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use nunit_report::parse_str;
///
/// let xml = r#"<test-results total="4" errors="0" failures="1" ignored="1" time="0,25"/>"#;
/// let results = parse_str(xml, Path::new("/reports/TestResult.xml")).unwrap();
///
/// assert_eq!(results.tests(), 4);
/// assert_eq!(results.skipped(), 1);
/// assert_eq!(results.execution_time(), Some(250));
/// ```
pub fn parse_str(xml: &str, path: &Path) -> Result<UnitTestResults> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let doc = Document::parse(xml).map_err(|source| ParseError::Xml {
        path: path.to_path_buf(),
        source,
    })?;

    let root = doc.root_element();
    let dialect = Dialect::detect(root).ok_or_else(|| ParseError::UnrecognizedRoot {
        path: path.to_path_buf(),
        root: get_tag_name(root).to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        %dialect,
        root = dialect.root_tag(),
        "Dispatching report"
    );

    let context = ReportContext::new(path);
    dialect.handler().handle(root, &context)
}

/// Parse one report file and return its counts.
///
/// # Errors
/// Any read, well-formedness, dialect or attribute problem. Error messages
/// carry the absolute path of the file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<UnitTestResults> {
    let path = absolute_path(path.as_ref());
    let xml = std::fs::read_to_string(&path).map_err(|source| ParseError::Read {
        path: path.clone(),
        source,
    })?;

    parse_str(&xml, &path)
}

/// Parse one report file and fold its counts into `results`.
///
/// The file is counted in full or not at all: on error `results` is left as
/// it was. Callers should still treat any error as fatal for the whole run.
///
/// # Examples
/// ```no_run
/// use nunit_report::{accept, UnitTestResults};
///
/// let mut results = UnitTestResults::new();
/// for file in ["build/TestResult.xml", "build/IntegrationResult.xml"] {
///     accept(file, &mut results)?;
/// }
/// println!("{} tests, {} failures", results.tests(), results.failures());
/// # Ok::<(), nunit_report::ParseError>(())
/// ```
pub fn accept(path: impl AsRef<Path>, results: &mut UnitTestResults) -> Result<()> {
    let path = path.as_ref();
    let file_results = parse_file(path)?;

    tracing::info!(
        path = %path.display(),
        tests = file_results.tests(),
        failures = file_results.failures(),
        errors = file_results.errors(),
        skipped = file_results.skipped(),
        execution_time = ?file_results.execution_time(),
        "Imported test report"
    );

    results.merge(&file_results);
    Ok(())
}

/// Aggregate several report files, in order, into a fresh summary.
///
/// Stops at the first file that fails.
pub fn aggregate<I, P>(paths: I) -> Result<UnitTestResults>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut results = UnitTestResults::new();
    for path in paths {
        accept(path, &mut results)?;
    }
    Ok(results)
}

/// Make `path` absolute against the current directory without resolving symlinks.
fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
