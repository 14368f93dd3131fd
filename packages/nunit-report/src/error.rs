//! Error types for the report importer.
//!
//! Every failure is fatal for the file being imported. The variants carry the
//! structured pieces (file path, element, attribute, raw value) and the
//! `Display` implementation renders the user-facing message.

use std::path::PathBuf;

use thiserror::Error;

/// The single error kind raised while importing a test report.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document root is neither `<test-results>` nor `<test-run>`.
    #[error("Unrecognized root element <{root}> in {}", .path.display())]
    UnrecognizedRoot { path: PathBuf, root: String },

    /// A required integer attribute is absent.
    #[error("Missing attribute \"{attribute}\" in element <{element}> in {}", .path.display())]
    MissingAttribute {
        path: PathBuf,
        element: String,
        attribute: String,
    },

    /// A required integer attribute is present but not a non-negative integer.
    #[error(
        "Expected an integer instead of \"{value}\" for the attribute \"{attribute}\" in {}",
        .path.display()
    )]
    InvalidInteger {
        path: PathBuf,
        attribute: String,
        value: String,
    },

    /// An optional decimal attribute is present but malformed.
    #[error(
        "Expected a decimal number instead of \"{value}\" for the attribute \"{attribute}\" in {}",
        .path.display()
    )]
    InvalidDecimal {
        path: PathBuf,
        attribute: String,
        value: String,
    },

    /// The report file could not be read.
    #[error("Unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file is not well-formed XML.
    #[error("Unable to parse {} as XML: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
}

impl ParseError {
    /// Absolute path of the report that caused the error.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::UnrecognizedRoot { path, .. }
            | Self::MissingAttribute { path, .. }
            | Self::InvalidInteger { path, .. }
            | Self::InvalidDecimal { path, .. }
            | Self::Read { path, .. }
            | Self::Xml { path, .. } => path,
        }
    }
}

/// Result type alias for report import operations.
pub type Result<T> = std::result::Result<T, ParseError>;
