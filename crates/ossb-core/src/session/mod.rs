//! Browsing session: the owned state behind every user action.
//!
//! A front end builds one [`Session`] and feeds it [`Action`]s. Each action
//! runs to completion on the calling thread and returns an [`Outcome`] or a
//! [`BrowseError`]; on error the session is left as it was.

mod action;

pub use action::{Action, Outcome};

use crate::clipboard::ClipboardSink;
use crate::error::{BrowseError, UserError};
use crate::filter::{filter_keys, KeyFilter};
use crate::listing::{fetch_listing, Listing, ListingSource};
use crate::url_model::{display_urls, encoded_urls};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct Session {
    listing: Option<Listing>,
    extensions: BTreeSet<String>,
    filter: Option<KeyFilter>,
    view: Vec<String>,
    displayed: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action. The listing source is only used by [`Action::Fetch`]
    /// and the clipboard only by [`Action::Copy`].
    pub fn apply(
        &mut self,
        action: Action,
        source: &dyn ListingSource,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<Outcome, BrowseError> {
        match action {
            Action::Fetch(url) => self.fetch(source, &url),
            Action::Filter(text) => Ok(self.apply_filter(KeyFilter::Text(text))),
            Action::FilterExtension(ext) => Ok(self.apply_filter(KeyFilter::Extension(ext))),
            Action::Select(index) => self.select(index),
            Action::Copy => self.copy(clipboard),
        }
    }

    fn fetch(&mut self, source: &dyn ListingSource, url: &str) -> Result<Outcome, BrowseError> {
        let listing = fetch_listing(source, url)?;
        self.extensions = listing.extensions();
        self.filter = None;
        self.view = listing.keys().to_vec();
        self.displayed = display_urls(listing.base_url(), &self.view);
        let outcome = Outcome::Fetched {
            keys: listing.keys().len(),
            extensions: self.extensions.len(),
        };
        self.listing = Some(listing);
        Ok(outcome)
    }

    fn apply_filter(&mut self, filter: KeyFilter) -> Outcome {
        self.view = filter_keys(self.keys(), filter.predicate())
            .into_iter()
            .map(str::to_string)
            .collect();
        self.displayed = display_urls(self.base_url().unwrap_or_default(), &self.view);
        tracing::debug!("filter {:?} matched {} keys", filter, self.view.len());
        self.filter = Some(filter);
        Outcome::Filtered {
            matches: self.view.len(),
        }
    }

    fn select(&mut self, index: usize) -> Result<Outcome, BrowseError> {
        let key = self
            .keys()
            .get(index)
            .cloned()
            .ok_or(UserError::SelectionOutOfRange {
                index,
                len: self.keys().len(),
            })?;
        let base = self.base_url().unwrap_or_default();
        let url = format!("{}{}", base, key);
        self.displayed = url.clone();
        self.view = vec![key];
        Ok(Outcome::Selected { url })
    }

    fn copy(&mut self, clipboard: &mut dyn ClipboardSink) -> Result<Outcome, BrowseError> {
        let base = self.base_url().ok_or(UserError::NoBaseUrl)?;
        let urls = encoded_urls(base, &self.displayed);
        let count = urls.len();
        clipboard.set_text(urls.join("\n"))?;
        tracing::info!("copied {} URLs to clipboard", count);
        Ok(Outcome::Copied { count })
    }

    /// Base URL of the current listing, `None` before the first successful fetch.
    pub fn base_url(&self) -> Option<&str> {
        self.listing.as_ref().map(|l| l.base_url())
    }

    /// All keys of the current listing.
    pub fn keys(&self) -> &[String] {
        self.listing.as_ref().map(|l| l.keys()).unwrap_or_default()
    }

    /// Extension selectors for the current listing, alphabetically ordered.
    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    pub fn active_filter(&self) -> Option<&KeyFilter> {
        self.filter.as_ref()
    }

    /// Keys currently shown in the URL pane.
    pub fn view(&self) -> &[String] {
        &self.view
    }

    /// Text of the URL pane: one display URL per line.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }
}
