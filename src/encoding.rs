//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset is taken from the HTTP
//! `Content-Type` header when one is known, otherwise from the document's
//! own `<meta>` declarations, and the bytes are decoded to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes scanned for `<meta>` charset declarations.
const META_SCAN_LIMIT: usize = 1024;

/// `charset=...` parameter, as found in a `Content-Type` value
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_HTTP_EQUIV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Encoding named by a `Content-Type` header value, if any.
///
/// ```
/// use rs_webscrape::encoding::encoding_from_content_type;
///
/// let enc = encoding_from_content_type("text/html; charset=ISO-8859-1");
/// assert_eq!(enc.map(|e| e.name()), Some("windows-1252"));
/// assert!(encoding_from_content_type("text/html").is_none());
/// ```
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let label = CHARSET_PARAM_RE.captures(content_type)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

/// Encoding declared by `<meta>` tags near the start of the document.
///
/// `<meta charset>` wins over `<meta http-equiv="Content-Type">`.
#[must_use]
pub fn encoding_from_meta(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LIMIT)]);

    [&*META_CHARSET_RE, &*META_HTTP_EQUIV_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head)?.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Pick the encoding for a document: header, then meta tags, then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(encoding_from_content_type)
        .or_else(|| encoding_from_meta(html))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD; decoding never fails. A byte order mark
/// overrides any declared charset.
///
/// # Examples
///
/// ```
/// use rs_webscrape::encoding::decode_html;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// assert!(decode_html(html, Some("text/html; charset=latin1")).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced invalid {} sequences while decoding", used.name());
    }
    decoded.into_owned()
}
