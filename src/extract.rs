//! Page-level extraction.
//!
//! Ties the document accessors to the flattener: the title comes from the
//! first `<title>` element and the content from flattening `<body>`.

use crate::dom::{self, Document, Selection};
use crate::extractor;
use crate::options::Options;
use crate::result::{ContentRecord, PageExtractionResult, NO_TITLE};

/// Extract title and content from a parsed document.
///
/// Never fails: a missing title yields [`NO_TITLE`], a missing body yields
/// an empty content sequence.
#[must_use]
pub fn extract_document(document: &Document, options: &Options) -> PageExtractionResult {
    let title = dom::title(document).unwrap_or_else(|| {
        log::debug!("document has no title, using sentinel");
        NO_TITLE.to_string()
    });

    let content = match dom::body(document) {
        Some(body) => extract_element(&body, options),
        None => {
            log::debug!("document has no body element");
            Vec::new()
        }
    };

    log::debug!("extracted {} content records", content.len());
    PageExtractionResult { title, content }
}

/// Flatten the children of the first node in `selection`.
///
/// An empty selection yields an empty vector.
#[must_use]
pub fn extract_element(selection: &Selection, options: &Options) -> Vec<ContentRecord> {
    selection
        .nodes()
        .first()
        .map(|node| extractor::flatten(node, options))
        .unwrap_or_default()
}

/// Parse `html` and extract it.
pub(crate) fn extract_html(html: &str, options: &Options) -> PageExtractionResult {
    log::debug!("parsing {} bytes of HTML", html.len());
    let document = dom::parse(html);
    extract_document(&document, options)
}
