//! DOM Operations Adapter
//!
//! Element tree access on top of the `dom_query` crate. The extractor only
//! needs a handful of read-only operations: tag name, ordered child nodes,
//! attribute lookup, trimmed descendant text, subtree search by tag, and the
//! document level `title` and `body` accessors.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// A direct child of an element, as seen by the flattener.
#[derive(Clone)]
pub enum ChildNode<'a> {
    /// Nested element.
    Element(NodeRef<'a>),
    /// Raw character data, possibly whitespace only.
    Text(StrTendril),
    /// Comments, doctypes and processing instructions.
    Other,
}

impl<'a> From<NodeRef<'a>> for ChildNode<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        if node.is_element() {
            ChildNode::Element(node)
        } else if node.is_text() {
            ChildNode::Text(node.text())
        } else {
            ChildNode::Other
        }
    }
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists, regardless of its value
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag_name)
}

/// Get tag name (lowercase) of a single node
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get all descendant text with surrounding whitespace removed
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

// === Tree Navigation ===

/// Get all direct child nodes (elements and text) in document order
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<ChildNode<'a>> {
    node.children().into_iter().map(ChildNode::from).collect()
}

/// Find every descendant matching `selector`, in document order
///
/// The search covers the whole subtree, not only direct children, and never
/// includes the starting element itself.
#[must_use]
pub fn descendants_matching<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Document Accessors ===

/// Trimmed text of the first `<title>` element, if it has any
#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    let title = doc.select_single("title");
    if !title.exists() {
        return None;
    }
    let text = trimmed_text(&title);
    (!text.is_empty()).then_some(text)
}

/// The `<body>` element, if the document has one
#[must_use]
pub fn body(doc: &Document) -> Option<Selection<'_>> {
    let body = doc.select_single("body");
    body.exists().then_some(body)
}
