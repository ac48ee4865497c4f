//! Tag constants and tag-kind dispatch.
//!
//! Provides arrays (for iteration) and a `HashSet` (for O(1) lookup) of the
//! tags that end traversal, plus `TagKind` which maps a lowercase tag name
//! to the extraction rule that applies to it.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::result::HeadingLevel;

// === Tag Lists (arrays for iteration) ===

/// Heading tags: h1-h6, in rank order
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List tags: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Every tag that can produce a record of its own
pub static TERMINAL_TAGS: [&str; 10] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "ul", "ol",
];

/// `TERMINAL_TAGS` plus `table` as a `HashSet`
pub static TERMINAL_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    TERMINAL_TAGS.into_iter().chain([TABLE_TAG]).collect()
});

// === Single tags and selectors ===

/// Paragraph tag
pub const PARAGRAPH_TAG: &str = "p";

/// Anchor tag (a link only when it carries `href`)
pub const LINK_TAG: &str = "a";

/// Attribute that turns an anchor into a link
pub const HREF_ATTR: &str = "href";

/// Ordered list tag
pub const ORDERED_LIST_TAG: &str = "ol";

/// Table tag
pub const TABLE_TAG: &str = "table";

/// List items, searched over the whole list subtree
pub const LIST_ITEM_SELECTOR: &str = "li";

/// Table rows, searched over the whole table subtree
pub const ROW_SELECTOR: &str = "tr";

/// Table cells, searched over the whole row subtree
pub const CELL_SELECTOR: &str = "td, th";

// === Dispatch ===

/// Extraction rule selected by an element's tag name.
///
/// Exactly one kind applies to any tag; `Other` covers every wrapper and
/// unknown element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `h1`..`h6`
    Heading(HeadingLevel),
    /// `p`
    Paragraph,
    /// `a`, which still needs an `href` to become a link
    Anchor,
    /// `ul` / `ol`
    List {
        /// True for `ol`
        ordered: bool,
    },
    /// `table`
    Table,
    /// Anything else: `div`, `span`, `section`, `body`, custom elements...
    Other,
}

impl TagKind {
    /// Classify a tag name. Matching is case-insensitive.
    #[must_use]
    pub fn of(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        if !is_terminal_tag(&tag) {
            return Self::Other;
        }
        if is_heading_tag(&tag) {
            return heading_level(&tag).map_or(Self::Other, Self::Heading);
        }
        match tag.as_str() {
            PARAGRAPH_TAG => Self::Paragraph,
            LINK_TAG => Self::Anchor,
            TABLE_TAG => Self::Table,
            list if is_list_tag(list) => Self::List {
                ordered: list == ORDERED_LIST_TAG,
            },
            _ => Self::Other,
        }
    }
}

// === Helper Functions ===

/// Heading rank parsed from the tag suffix (`h3` -> `H3`)
#[must_use]
pub fn heading_level(tag: &str) -> Option<HeadingLevel> {
    let rank = tag.strip_prefix(['h', 'H'])?;
    if rank.len() != 1 {
        return None;
    }
    rank.parse::<u8>().ok().and_then(|r| HeadingLevel::try_from(r).ok())
}

/// Check if tag is a heading tag (h1-h6)
#[inline]
#[must_use]
pub fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAGS.contains(&tag)
}

/// Check if tag is a list tag (ul, ol)
#[inline]
#[must_use]
pub fn is_list_tag(tag: &str) -> bool {
    LIST_TAGS.contains(&tag)
}

/// Check if tag can produce a record itself instead of being traversed
///
/// `a` is included even though an anchor without `href` is traversed.
#[inline]
#[must_use]
pub fn is_terminal_tag(tag: &str) -> bool {
    TERMINAL_TAG_SET.contains(tag)
}
