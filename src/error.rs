//! Error types for rs-webscrape.
//!
//! Extraction itself is total: every well-formed element tree produces a
//! result. Errors only exist at the retrieval boundary, where a page could
//! not be fetched.

/// Error type for page retrieval.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL could not be parsed or uses a scheme other than http(s).
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given by the caller.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// The request did not complete before the configured deadline.
    #[error("Timed out while loading {url}")]
    RetrievalTimeout {
        /// The URL that was being loaded.
        url: String,
    },

    /// Any other transport or HTTP level failure.
    #[error("Failed to load {url}: {reason}")]
    RetrievalFailure {
        /// The URL that was being loaded.
        url: String,
        /// Underlying error message or HTTP status.
        reason: String,
    },
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, Error>;
