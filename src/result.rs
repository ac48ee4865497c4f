//! Result types for extraction output.
//!
//! A page is reduced to a title plus an ordered sequence of `ContentRecord`s.
//! Records serialise as internally tagged JSON objects, e.g.
//! `{"type":"link","text":"Example","href":"https://example.com"}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when the document has no (or an empty) `<title>` element.
pub const NO_TITLE: &str = "No title";

/// Rank of a heading element, `h1` through `h6`.
///
/// Serialised as the integer rank (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl HeadingLevel {
    /// Numeric rank, 1 for `h1` through 6 for `h6`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    /// Lowercase tag name of this heading.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.rank()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            other => Err(format!("heading level must be 1-6, got {other}")),
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One unit of extracted content.
///
/// Every string stored here is whitespace-trimmed. `Text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentRecord {
    /// `h1`..`h6` element.
    Header {
        /// Heading rank.
        level: HeadingLevel,
        /// Full descendant text.
        text: String,
    },

    /// `p` element, including the text of inline markup inside it.
    Paragraph {
        /// Full descendant text.
        text: String,
    },

    /// `a` element carrying an `href` attribute.
    Link {
        /// Full descendant text.
        text: String,
        /// Raw `href` value, possibly empty.
        href: String,
    },

    /// `ul` or `ol` element.
    List {
        /// Text of every `li` descendant, in document order.
        items: Vec<String>,
        /// True for `ol`.
        ordered: bool,
    },

    /// `table` element.
    Table {
        /// One entry per `tr` descendant, each holding its `td`/`th` texts.
        rows: Vec<Vec<String>>,
    },

    /// Loose text that is not wrapped in any terminal element.
    Text {
        /// Trimmed, non-empty text.
        text: String,
    },
}

impl ContentRecord {
    /// Name of the record kind, as used for the JSON `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Paragraph { .. } => "paragraph",
            Self::Link { .. } => "link",
            Self::List { .. } => "list",
            Self::Table { .. } => "table",
            Self::Text { .. } => "text",
        }
    }

    /// The single text field of headers, paragraphs, links and loose text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Header { text, .. }
            | Self::Paragraph { text }
            | Self::Link { text, .. }
            | Self::Text { text } => Some(text),
            Self::List { .. } | Self::Table { .. } => None,
        }
    }
}

/// Result of extracting one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageExtractionResult {
    /// Trimmed `<title>` text, or [`NO_TITLE`].
    pub title: String,

    /// Records in document order.
    pub content: Vec<ContentRecord>,
}

impl Default for PageExtractionResult {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            content: Vec::new(),
        }
    }
}

impl PageExtractionResult {
    /// True when no content record was extracted.
    ///
    /// A failed retrieval and a page without body content look the same.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the document had no usable `<title>`.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title != NO_TITLE
    }

    /// Header records as `(level, text)` pairs.
    pub fn headers(&self) -> impl Iterator<Item = (HeadingLevel, &str)> {
        self.content.iter().filter_map(|record| match record {
            ContentRecord::Header { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }

    /// Link records as `(text, href)` pairs.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.content.iter().filter_map(|record| match record {
            ContentRecord::Link { text, href } => Some((text.as_str(), href.as_str())),
            _ => None,
        })
    }

    /// Serialise to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialise to indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
