//! Bucket listing fetch.
//!
//! One blocking GET of the listing URL, an XML parse of the body, and
//! extraction of every `Contents/Key` text. The base URL used to build object
//! URLs is the listing URL without its query string.

mod http;
mod parse;

use crate::config::OssbConfig;
use crate::error::{BrowseError, UserError};
use crate::extensions;
use crate::url_model::normalize_base_url;
use std::collections::BTreeSet;
use std::time::Duration;

pub use parse::parse_keys;

/// Where listing bodies come from. The production source is [`CurlSource`].
pub trait ListingSource {
    /// Returns the response body of a successful GET of `url`.
    fn get(&self, url: &str) -> Result<Vec<u8>, BrowseError>;
}

/// Transfer options for the listing GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub follow_redirects: bool,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&OssbConfig::default())
    }
}

impl From<&OssbConfig> for FetchOptions {
    fn from(cfg: &OssbConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            follow_redirects: cfg.follow_redirects,
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// libcurl-backed listing source.
#[derive(Debug, Clone, Default)]
pub struct CurlSource {
    opts: FetchOptions,
}

impl CurlSource {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl ListingSource for CurlSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, BrowseError> {
        http::get(url, &self.opts)
    }
}

/// Keys of one fetched listing together with the base URL they resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    base_url: String,
    keys: Vec<String>,
}

impl Listing {
    /// Builds a listing from the URL it was fetched from and the response body.
    ///
    /// `Key` elements without text are dropped.
    pub fn from_body(url: &str, body: &[u8]) -> Result<Self, BrowseError> {
        let parsed = parse_keys(body)?;
        let total = parsed.len();
        let keys: Vec<String> = parsed.into_iter().flatten().collect();
        if keys.len() < total {
            tracing::debug!("skipped {} Key elements without text", total - keys.len());
        }
        Ok(Self {
            base_url: normalize_base_url(url),
            keys,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn extensions(&self) -> BTreeSet<String> {
        extensions::extension_set(&self.keys)
    }
}

/// Fetches and parses the listing at `url`.
///
/// Fails with [`UserError::MissingUrl`] for a blank URL, a network error for
/// transport failures and non-2xx statuses, and a parse error for bodies that
/// are not well-formed XML.
pub fn fetch_listing(source: &dyn ListingSource, url: &str) -> Result<Listing, BrowseError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UserError::MissingUrl.into());
    }
    tracing::debug!("fetching listing from {}", url);
    let body = source.get(url)?;
    let listing = Listing::from_body(url, &body)?;
    tracing::info!(
        "fetched {} keys from {} ({} bytes)",
        listing.keys.len(),
        listing.base_url,
        body.len()
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::cell::Cell;

    struct StaticSource {
        body: &'static str,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    impl ListingSource for StaticSource {
        fn get(&self, _url: &str) -> Result<Vec<u8>, BrowseError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Contents><Key>a.png</Key><Size>10</Size></Contents>
  <Contents><Key></Key></Contents>
  <Contents><Key>b.PNG</Key></Contents>
  <Contents><Key>c.txt</Key></Contents>
</ListBucketResult>"#;

    #[test]
    fn fetch_strips_query_and_drops_empty_keys() {
        let source = StaticSource::new(LISTING);
        let listing = fetch_listing(&source, " https://bucket.example.com?prefix=a ").unwrap();
        assert_eq!(listing.base_url(), "https://bucket.example.com/");
        assert_eq!(listing.keys(), ["a.png", "b.PNG", "c.txt"]);
        assert_eq!(
            listing.extensions().into_iter().collect::<Vec<_>>(),
            vec!["png", "txt"]
        );
    }

    #[test]
    fn blank_url_is_user_error_without_request() {
        let source = StaticSource::new(LISTING);
        let err = fetch_listing(&source, "   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::User);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let source = StaticSource::new("<ListBucketResult><Contents><Key>a");
        let err = fetch_listing(&source, "https://bucket.example.com/").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn fetch_options_follow_config() {
        let cfg = OssbConfig {
            connect_timeout_secs: Some(3),
            timeout_secs: None,
            follow_redirects: false,
            max_redirections: 2,
            user_agent: Some("ua".to_string()),
        };
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Some(Duration::from_secs(3)));
        assert!(opts.timeout.is_none());
        assert!(!opts.follow_redirects);
        assert_eq!(opts.max_redirections, 2);
        assert_eq!(opts.user_agent.as_deref(), Some("ua"));
    }
}
