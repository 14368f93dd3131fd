//! XML utility functions for navigating report DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use nunit_report::xml::get_tag_name;
///
/// let xml = r#"<test-run><test-suite/></test-run>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "test-run");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find all direct child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use nunit_report::xml::find_children;
///
/// let xml = r#"<test-run><test-suite/><settings/><test-suite/></test-run>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let suites: Vec<_> = find_children(doc.root_element(), "test-suite").collect();
/// assert_eq!(suites.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Find all elements with the given tag name in the subtree rooted at `node`,
/// including `node` itself, in document order.
pub fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().filter(move |n| has_tag(*n, tag))
}
