//! Content extraction core.
//!
//! # Module Structure
//!
//! - `tags`: Tag constants and the tag-name to `TagKind` dispatch
//! - `classify`: Per-element classification (terminal record or transparent wrapper)
//! - `flatten`: Document-order traversal that splices records together
//!
//! # Usage
//!
//! ```rust
//! use rs_webscrape::dom;
//! use rs_webscrape::extractor::{classify, flatten, Classification};
//! use rs_webscrape::Options;
//!
//! let doc = dom::parse("<body><div><p>Hello</p></div></body>");
//! let options = Options::default();
//!
//! let div = doc.select("div");
//! let node = div.nodes()[0];
//! assert_eq!(classify(&node, &options), Classification::Transparent);
//!
//! let body = dom::body(&doc).unwrap();
//! let records = flatten(&body.nodes()[0], &options);
//! assert_eq!(records.len(), 1);
//! ```

pub mod classify;
pub mod flatten;
pub mod tags;

pub use classify::{classify, Classification};
pub use flatten::flatten;
pub use tags::TagKind;
