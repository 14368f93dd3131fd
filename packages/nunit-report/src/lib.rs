//! NUnit report importer - Aggregate NUnit test result files into one summary.
//!
//! This crate reads the XML reports written by NUnit 2.x (`<test-results>`)
//! and NUnit 3.x (`<test-run>`) and folds them into a single
//! [`UnitTestResults`] holding test, error, failure and skipped counts plus
//! the total execution time in milliseconds.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use nunit_report::{parse_str, UnitTestResults};
//!
//! let mut results = UnitTestResults::new();
//! let legacy = r#"<test-results total="200" errors="30" failures="20" not-run="4" ignored="3" invalid="2" time="0.051"/>"#;
//! let modern = r#"<test-run total="18" failed="2" errors="1" inconclusive="1" skipped="3" duration="0,154"/>"#;
//!
//! results += parse_str(legacy, Path::new("/reports/nunit2.xml")).unwrap();
//! results += parse_str(modern, Path::new("/reports/nunit3.xml")).unwrap();
//!
//! assert_eq!(results.tests(), 218);
//! assert_eq!(results.skipped(), 13);
//! assert_eq!(results.execution_time(), Some(205));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Element and attribute names of both dialects
//! - [`error`]: Error type and Result alias
//! - [`numeric`]: Locale-tolerant integer and decimal readers
//! - [`results`]: The accumulated summary
//! - [`schema`]: Dialect detection and per-dialect handlers
//! - [`parser`]: File parsing and aggregation entry points
//! - [`xml`]: XML utilities
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod numeric;
pub mod parser;
pub mod results;
pub mod schema;
pub mod xml;

// Re-export main functions
pub use parser::{accept, aggregate, parse_file, parse_str};

// Re-export commonly used items
pub use error::{ParseError, Result};
pub use results::UnitTestResults;
pub use schema::Dialect;
