//! # rs-webscrape
//!
//! Turns a web page into an ordered, typed sequence of content records
//! (headers, paragraphs, links, lists, tables and loose text) ready to be
//! fed to a language model or a search index.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_webscrape::{extract_page, ContentRecord, HeadingLevel};
//!
//! let html = r#"<html><head><title>My Page</title></head>
//! <body><div><h1>Welcome</h1><p>Main <em>content</em> here.</p></div></body></html>"#;
//!
//! let page = extract_page(html);
//! assert_eq!(page.title, "My Page");
//! assert_eq!(
//!     page.content,
//!     vec![
//!         ContentRecord::Header { level: HeadingLevel::H1, text: "Welcome".into() },
//!         ContentRecord::Paragraph { text: "Main content here.".into() },
//!     ]
//! );
//! ```
//!
//! ## How content is found
//!
//! Children of `<body>` are walked depth-first in document order:
//!
//! - `h1`-`h6`, `p`, `a[href]`, `ul`/`ol` and `table` each become exactly
//!   one record and are not walked any further.
//! - Every other element (`div`, `span`, `section`, an `a` without `href`...)
//!   is transparent: it adds no record, its children are walked in place.
//! - Loose text becomes a `Text` record when it is not just whitespace.
//!
//! Extraction never fails. Pages without a body produce no content and
//! pages without a title get [`NO_TITLE`].
//!
//! ## Features
//!
//! - `fetch` (default): HTTP retrieval with `reqwest` and the [`scrape`] entry points
//! - `cli`: the `extract_stdin` and `scrape_url` binaries

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Element classification and tree flattening.
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Plain text and Markdown rendering of records.
pub mod markdown;

/// Question answering interface over extracted pages.
pub mod qa;

/// HTTP page retrieval.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_document, extract_element};
pub use options::{FetchOptions, Options, DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
pub use result::{ContentRecord, HeadingLevel, PageExtractionResult, NO_TITLE};

/// Extracts title and content from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_webscrape::extract_page;
///
/// let page = extract_page("<body><a href=\"https://example.com\">Example</a></body>");
/// assert_eq!(page.links().next(), Some(("Example", "https://example.com")));
/// ```
#[must_use]
pub fn extract_page(html: &str) -> PageExtractionResult {
    extract_page_with_options(html, &Options::default())
}

/// Extracts title and content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_webscrape::{extract_page_with_options, Options};
///
/// let options = Options {
///     skip_tags: vec!["script".into(), "style".into()],
///     ..Options::default()
/// };
/// let page = extract_page_with_options("<body><script>track()</script><p>Hi</p></body>", &options);
/// assert_eq!(page.content.len(), 1);
/// ```
#[must_use]
pub fn extract_page_with_options(html: &str, options: &Options) -> PageExtractionResult {
    extract::extract_html(html, options)
}

/// Extracts title and content from HTML bytes with automatic encoding detection.
///
/// The charset is read from `<meta>` declarations and defaults to UTF-8.
/// Invalid characters are replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_webscrape::extract_page_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let page = extract_page_bytes(html);
/// assert_eq!(page.content[0].text(), Some("Café"));
/// ```
#[must_use]
pub fn extract_page_bytes(html: &[u8]) -> PageExtractionResult {
    extract_page_with_options(&encoding::decode_html(html, None), &Options::default())
}

/// Fetches a page and extracts it using default options.
///
/// Retrieval failures are logged and produce an empty result (sentinel
/// title, no content), exactly like a page with an empty body.
#[cfg(feature = "fetch")]
#[must_use]
pub fn scrape(url: &str) -> PageExtractionResult {
    scrape_with_options(url, &Options::default(), &FetchOptions::default())
}

/// Fetches a page and extracts it with custom options.
#[cfg(feature = "fetch")]
#[must_use]
pub fn scrape_with_options(
    url: &str,
    options: &Options,
    fetch_options: &FetchOptions,
) -> PageExtractionResult {
    let html = fetch::fetch_page_source(url, fetch_options);
    extract_page_with_options(&html, options)
}
