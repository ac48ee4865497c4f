//! Integration tests for rs-webscrape
//!
//! End-to-end extraction over realistic pages and unusual inputs.

mod edge_cases;
mod real_world_pages;
