//! Schema handler trait definition.

use std::path::Path;

use roxmltree::Node;

use super::dialect::Dialect;
use crate::error::Result;
use crate::results::UnitTestResults;

/// Per-document state shared with the handlers.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    path: &'a Path,
}

impl<'a> ReportContext<'a> {
    /// Create a context for the report at `path`.
    ///
    /// The path is only used in error messages and should already be absolute.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &'a Path {
        self.path
    }
}

/// Trait for dialect handlers.
///
/// A handler receives the root element of a document of its dialect and
/// returns the counts of every result-bearing element in it, summed. It fails
/// on the first element that does not validate, so a document is either fully
/// counted or rejected.
pub trait SchemaHandler: Send + Sync {
    /// The dialect this handler understands.
    fn dialect(&self) -> Dialect;

    /// Extract and sum the counts of the document rooted at `root`.
    fn handle(&self, root: Node<'_, '_>, context: &ReportContext<'_>) -> Result<UnitTestResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHandler;

    impl SchemaHandler for FixedHandler {
        fn dialect(&self) -> Dialect {
            Dialect::Modern
        }

        fn handle(
            &self,
            _root: Node<'_, '_>,
            _context: &ReportContext<'_>,
        ) -> Result<UnitTestResults> {
            let mut results = UnitTestResults::new();
            results.add_counts(1, 0, 0, 0, None);
            Ok(results)
        }
    }

    #[test]
    fn test_handler_trait() {
        let handler = FixedHandler;
        assert_eq!(handler.dialect(), Dialect::Modern);

        let doc = roxmltree::Document::parse("<test-run/>").unwrap();
        let path = Path::new("/tmp/report.xml");
        let context = ReportContext::new(path);

        let results = handler.handle(doc.root_element(), &context).unwrap();
        assert_eq!(results.tests(), 1);
        assert_eq!(context.path(), path);
    }
}
