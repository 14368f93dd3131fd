//! Report dialect detection.

use std::fmt;

use roxmltree::Node;

use super::handler::SchemaHandler;
use super::handlers::{LegacyHandler, ModernHandler};
use crate::config::{LEGACY_RESULTS_TAG, MODERN_RUN_TAG};
use crate::xml::get_tag_name;

/// The NUnit report families this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// NUnit 2.x, rooted at a (repeatable) `<test-results>` element.
    Legacy,
    /// NUnit 3.x, rooted at a single `<test-run>` element nesting suites.
    Modern,
}

impl Dialect {
    /// Classify a document by its root element.
    ///
    /// Returns `None` when the root belongs to neither family.
    ///
    /// # Examples
    /// ```
    /// use roxmltree::Document;
    /// use nunit_report::schema::Dialect;
    ///
    /// let doc = Document::parse("<test-run/>").unwrap();
    /// assert_eq!(Dialect::detect(doc.root_element()), Some(Dialect::Modern));
    ///
    /// let doc = Document::parse("<assemblies/>").unwrap();
    /// assert_eq!(Dialect::detect(doc.root_element()), None);
    /// ```
    #[must_use]
    pub fn detect(root: Node<'_, '_>) -> Option<Self> {
        Self::from_root_tag(get_tag_name(root))
    }

    /// Map a root tag name to its dialect.
    #[must_use]
    pub fn from_root_tag(tag: &str) -> Option<Self> {
        match tag {
            LEGACY_RESULTS_TAG => Some(Self::Legacy),
            MODERN_RUN_TAG => Some(Self::Modern),
            _ => None,
        }
    }

    /// The root tag name of this dialect.
    #[must_use]
    pub fn root_tag(self) -> &'static str {
        match self {
            Self::Legacy => LEGACY_RESULTS_TAG,
            Self::Modern => MODERN_RUN_TAG,
        }
    }

    /// The handler that extracts counts for this dialect.
    #[must_use]
    pub fn handler(self) -> &'static dyn SchemaHandler {
        match self {
            Self::Legacy => &LegacyHandler,
            Self::Modern => &ModernHandler,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "NUnit 2.x"),
            Self::Modern => write!(f, "NUnit 3.x"),
        }
    }
}
