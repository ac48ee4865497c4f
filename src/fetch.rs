//! Page retrieval over HTTP.
//!
//! `try_fetch_page_source` reports why a page could not be loaded;
//! `fetch_page_source` is the tolerant variant used by the scraping entry
//! points, which logs the failure and hands back an empty document.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::FetchOptions;

/// Load `url` and return its decoded HTML source.
///
/// Only `http` and `https` URLs are accepted. Non-success HTTP statuses are
/// not errors: the error page's body is returned like any other page.
pub fn try_fetch_page_source(url: &str, options: &FetchOptions) -> Result<String> {
    let parsed = parse_url(url)?;

    let mut builder = Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str());
    if !options.use_system_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build().map_err(|e| retrieval_error(url, &e))?;

    let response = client.get(parsed).send().map_err(|e| retrieval_error(url, &e))?;
    let status = response.status();
    if !status.is_success() {
        log::debug!("{url} answered with HTTP {status}");
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().map_err(|e| retrieval_error(url, &e))?;

    log::debug!("fetched {} bytes from {url}", bytes.len());
    Ok(encoding::decode_html(&bytes, content_type.as_deref()))
}

/// Load `url`, returning an empty string if anything goes wrong.
///
/// Failures are logged at `warn` level and never returned, so callers see
/// a failed retrieval as an empty page.
#[must_use]
pub fn fetch_page_source(url: &str, options: &FetchOptions) -> String {
    match try_fetch_page_source(url, options) {
        Ok(html) => html,
        Err(err) => {
            log::warn!("{err}");
            String::new()
        }
    }
}

fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn retrieval_error(url: &str, err: &reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::RetrievalTimeout {
            url: url.to_string(),
        }
    } else {
        Error::RetrievalFailure {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
