//! Configuration options for extraction and retrieval.
//!
//! `Options` controls how the element tree is flattened, `FetchOptions`
//! controls how page source is retrieved. Both have public fields and a
//! `Default` that classifies every element and fetches with a 30 second deadline.

use std::time::Duration;

/// Default deadline for loading a page.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header sent when fetching pages.
pub const DEFAULT_USER_AGENT: &str = concat!("rs-webscrape/", env!("CARGO_PKG_VERSION"));

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use rs_webscrape::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert!(options.skip_tags.is_empty());
///
/// // Drop script and style text instead of surfacing it as loose text
/// let options = Options {
///     skip_tags: vec!["script".to_string(), "style".to_string()],
///     ..Options::default()
/// };
/// assert!(options.skips("SCRIPT"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Elements (by tag name, case-insensitive) whose whole subtree is ignored.
    ///
    /// A skipped element produces no record and its children are not
    /// traversed. Terminal tags (`h1`..`h6`, `p`, `a`, `ul`, `ol`, `table`)
    /// can be skipped too.
    ///
    /// Default: empty (every element is classified)
    pub skip_tags: Vec<String>,
}

impl Options {
    /// Returns true if elements with this tag name are ignored entirely.
    #[must_use]
    pub fn skips(&self, tag: &str) -> bool {
        self.skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Configuration options for page retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Deadline for the whole request, including reading the body.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Value of the `User-Agent` request header.
    ///
    /// Default: `rs-webscrape/<version>`
    pub user_agent: String,

    /// Honour proxy settings from the environment (`HTTP_PROXY`, `HTTPS_PROXY`...).
    ///
    /// Default: `true`
    pub use_system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            use_system_proxy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_skip_nothing() {
        let opts = Options::default();

        assert!(opts.skip_tags.is_empty());
        assert!(!opts.skips("script"));
        assert!(!opts.skips("div"));
    }

    #[test]
    fn test_skips_is_case_insensitive() {
        let opts = Options {
            skip_tags: vec!["Script".to_string(), "nav".to_string()],
        };

        assert!(opts.skips("script"));
        assert!(opts.skips("SCRIPT"));
        assert!(opts.skips("nav"));
        assert!(!opts.skips("p"));
    }

    #[test]
    fn test_default_fetch_options() {
        let opts = FetchOptions::default();

        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert!(opts.user_agent.starts_with("rs-webscrape/"));
        assert!(opts.use_system_proxy);
    }

    #[test]
    fn test_custom_fetch_timeout() {
        let opts = FetchOptions {
            timeout: Duration::from_millis(250),
            ..FetchOptions::default()
        };

        assert_eq!(opts.timeout.as_millis(), 250);
        assert_eq!(opts.user_agent, DEFAULT_USER_AGENT);
    }
}
