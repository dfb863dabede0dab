// src/core/net.rs
//! Page fetching.
//!
//! `Fetch` is the seam between the extractors and the network: production uses
//! `HttpClient` (ureq + on-disk cache), tests plug in canned pages.

use std::io::Read;

use tracing::{debug, error};
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::core::html::Page;
use crate::error::{Result, ScrapeError};
use crate::store::Store;

pub trait Fetch {
    /// GET `url` and return the raw body. Transport failures and non-2xx
    /// statuses come back as `ScrapeError::Transport`.
    fn get(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Blocking HTTP client with an optional persistent response cache.
pub struct HttpClient {
    agent: ureq::Agent,
    store: Option<Store>,
}

impl HttpClient {
    pub fn new(store: Option<Store>) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        Self { agent, store }
    }

    fn get_uncached(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| ScrapeError::transport(url.as_str(), e))?;

        let mut body = Vec::new();
        resp.into_reader()
            .read_to_end(&mut body)
            .map_err(|e| ScrapeError::transport(url.as_str(), e))?;
        Ok(body)
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        if let Some(body) = self.store.as_ref().and_then(|s| s.get(url)) {
            return Ok(body);
        }

        let body = self.get_uncached(url)?;
        debug!(%url, bytes = body.len(), "fetched");

        if let Some(store) = &self.store {
            // A failed cache write only costs a refetch next run.
            if let Err(e) = store.put(url, &body) {
                error!(%url, error = %e, "could not cache response");
            }
        }
        Ok(body)
    }
}

/// Fetch and parse `url`. Any failure is logged and yields `None`; callers
/// decide whether that means "skip" or "abort".
pub fn get_page(fetch: &dyn Fetch, url: &Url) -> Option<Page> {
    match fetch.get(url) {
        Ok(body) => Some(Page::parse(url.clone(), &body)),
        Err(e) => {
            error!(%url, error = %e, "An error occurred while loading the page {url}");
            None
        }
    }
}

/// Like `get_page`, for pages the extractor cannot continue without.
pub fn require_page(fetch: &dyn Fetch, url: &Url) -> Result<Page> {
    get_page(fetch, url).ok_or_else(|| ScrapeError::PageUnavailable { url: url.to_string() })
}
