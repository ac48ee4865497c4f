//! Per-element classification.
//!
//! Decides whether a single element is a terminal content unit (and builds
//! its record) or a transparent wrapper whose children must be traversed.
//! Siblings are never consumed here; the flattener drives the walk.

use crate::dom::{self, NodeRef, Selection};
use crate::options::Options;
use crate::result::ContentRecord;

use super::tags::{self, TagKind};

/// Outcome of classifying one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The element is fully consumed into one record.
    Terminal(ContentRecord),
    /// The element contributes nothing itself; traverse its children.
    Transparent,
    /// The element and its whole subtree are ignored (see `Options::skip_tags`).
    Skip,
}

/// Classify one element node.
///
/// Headers, paragraphs, links, lists and tables are terminal: nested
/// headings or paragraphs inside them are folded into their text and never
/// emitted separately. An `a` without `href` and every other tag is
/// transparent.
#[must_use]
pub fn classify(node: &NodeRef<'_>, options: &Options) -> Classification {
    let Some(tag) = dom::node_tag_name(node) else {
        return Classification::Transparent;
    };
    if options.skips(&tag) {
        return Classification::Skip;
    }

    let el = Selection::from(*node);
    match TagKind::of(&tag) {
        TagKind::Heading(level) => Classification::Terminal(ContentRecord::Header {
            level,
            text: dom::trimmed_text(&el),
        }),
        TagKind::Paragraph => Classification::Terminal(ContentRecord::Paragraph {
            text: dom::trimmed_text(&el),
        }),
        TagKind::Anchor => match dom::get_attribute(&el, tags::HREF_ATTR) {
            Some(href) => Classification::Terminal(ContentRecord::Link {
                text: dom::trimmed_text(&el),
                href,
            }),
            None => Classification::Transparent,
        },
        TagKind::List { ordered } => Classification::Terminal(extract_list(&el, ordered)),
        TagKind::Table => Classification::Terminal(extract_table(&el)),
        TagKind::Other => Classification::Transparent,
    }
}

/// Every `li` in the list subtree, nested lists included.
fn extract_list(list: &Selection, ordered: bool) -> ContentRecord {
    let items = dom::descendants_matching(list, tags::LIST_ITEM_SELECTOR)
        .iter()
        .map(dom::trimmed_text)
        .collect();
    ContentRecord::List { items, ordered }
}

/// Every `tr` in the table subtree; cells are every `td`/`th` below that row.
///
/// A table nested in a cell therefore adds its rows to the outer table and
/// its cells to the enclosing outer row.
fn extract_table(table: &Selection) -> ContentRecord {
    let rows = dom::descendants_matching(table, tags::ROW_SELECTOR)
        .iter()
        .map(|row| {
            dom::descendants_matching(row, tags::CELL_SELECTOR)
                .iter()
                .map(dom::trimmed_text)
                .collect::<Vec<_>>()
        })
        .collect();
    ContentRecord::Table { rows }
}
