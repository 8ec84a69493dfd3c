//! Pagination strategies
//!
//! - [`LinkHeaderPaginator`]: follows `rel="next"` links until the server stops advertising one
//! - [`PageRequest`](super::PageRequest): a single explicit offset/limit page, never follows links

use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

// ============================================================================
// Link Header Pagination
// ============================================================================

/// Link header pagination (RFC 5988)
///
/// Starts from the unpaginated listing and follows the `next` link of each
/// response, concatenating the items of every page in fetch order. Pages
/// are fetched strictly one after another since each continuation URL is
/// only known once the previous response has been read.
///
/// By default the server is trusted to stop advertising `next`. Against an
/// untrusted server use [`with_max_pages`](Self::with_max_pages) to put a
/// ceiling on the walk.
#[derive(Debug, Clone, Default)]
pub struct LinkHeaderPaginator {
    /// Maximum number of pages to fetch (None = follow until the end)
    pub max_pages: Option<u32>,
}

impl LinkHeaderPaginator {
    /// Create an unbounded link header paginator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator that fails rather than fetch more than `max_pages` pages
    ///
    /// A ceiling of zero is rejected by [`collect`](Self::collect) before any request is sent.
    pub fn with_max_pages(max_pages: u32) -> Self {
        Self {
            max_pages: Some(max_pages),
        }
    }

    /// Walk every page starting at `url`
    ///
    /// - 404 on any page → `Ok(vec![])`
    /// - any other failure → `Err`, nothing collected so far is returned
    /// - a page without a `next` link ends the walk
    /// - a `max_pages` of zero → `Err(Config)` without any request
    pub async fn collect<T: DeserializeOwned>(
        &self,
        client: &HttpClient,
        url: &str,
    ) -> Result<Vec<T>> {
        if self.max_pages == Some(0) {
            return Err(Error::config("max_pages must be greater than zero"));
        }

        let mut items = Vec::new();
        let mut current = url.to_string();
        let mut pages: u32 = 0;

        loop {
            let outcome = client.fetch_single_page::<Vec<T>>(&current).await?;
            pages += 1;

            let Some(page) = outcome.into_page()? else {
                debug!("{} not found after {} page(s), returning no items", current, pages);
                return Ok(Vec::new());
            };

            let next = page.next_url().map(str::to_string);
            items.extend(page.items);

            let Some(next) = next else {
                info!("Fetched {} item(s) across {} page(s)", items.len(), pages);
                return Ok(items);
            };

            if let Some(max) = self.max_pages {
                if pages >= max {
                    return Err(Error::PageLimitExceeded { max_pages: max });
                }
            }

            debug!("Following next link: {}", next);
            current = next;
        }
    }
}
