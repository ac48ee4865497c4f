//! Depth-first flattening of an element's children into content records.
//!
//! The walk keeps an explicit stack of child iterators instead of
//! recursing, so document nesting depth is bounded by heap memory rather
//! than by the call stack. The output is the same as a recursive
//! pre-order traversal: transparent wrappers splice their descendants'
//! records in at their own position.

use crate::dom::{self, ChildNode, NodeRef};
use crate::options::Options;
use crate::result::ContentRecord;

use super::classify::{classify, Classification};

/// Flatten the children of `node` into records, in document order.
///
/// - Text children become `Text` records when non-empty after trimming.
/// - Element children are classified; terminal records are appended,
///   transparent elements are descended into, skipped ones are dropped.
/// - Comments and other non-element, non-text nodes are ignored.
///
/// The node itself is never classified, so flattening a `p` yields the
/// records of its children rather than one paragraph.
#[must_use]
pub fn flatten(node: &NodeRef<'_>, options: &Options) -> Vec<ContentRecord> {
    let mut records = Vec::new();
    let mut stack = vec![dom::child_nodes(node).into_iter()];

    while let Some(children) = stack.last_mut() {
        let Some(child) = children.next() else {
            stack.pop();
            continue;
        };

        match child {
            ChildNode::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    records.push(ContentRecord::Text {
                        text: text.to_string(),
                    });
                }
            }
            ChildNode::Element(element) => match classify(&element, options) {
                Classification::Terminal(record) => records.push(record),
                Classification::Transparent => stack.push(dom::child_nodes(&element).into_iter()),
                Classification::Skip => {}
            },
            ChildNode::Other => {}
        }
    }

    records
}
