//! Pagination types
//!
//! Defines the per-request outcome and page abstractions used by the
//! single-page fetch and the link-following walk.

use super::link_header::LinkSet;
use crate::error::{Error, Result};

/// Result of one fetch attempt
///
/// 404 is `NotFound`, never `Failure`, and a `Failure` is never turned into
/// an empty value by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<T> {
    /// 2xx with a decoded body and the parsed `link` header, if one was sent
    Success {
        /// Decoded response body
        body: T,
        /// Links advertised by this response
        links: Option<LinkSet>,
    },
    /// 404: the resource does not exist
    NotFound,
    /// Any other non-2xx status
    Failure {
        /// HTTP status code
        status: u16,
        /// Reason phrase for the status
        reason: String,
    },
}

impl<T> RequestOutcome<T> {
    /// Check if this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Check if the resource was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Collapse into the caller-facing shape: `Some` on success, `None` on
    /// 404, `Err(RequestFailure)` otherwise. Links are discarded.
    pub fn into_option(self) -> Result<Option<T>> {
        match self {
            Self::Success { body, .. } => Ok(Some(body)),
            Self::NotFound => Ok(None),
            Self::Failure { status, reason } => Err(Error::request_failure(status, reason)),
        }
    }
}

impl<T> RequestOutcome<Vec<T>> {
    /// View a successful collection response as a [`Page`]
    pub fn into_page(self) -> Result<Option<Page<T>>> {
        match self {
            Self::Success { body, links } => Ok(Some(Page { items: body, links })),
            Self::NotFound => Ok(None),
            Self::Failure { status, reason } => Err(Error::request_failure(status, reason)),
        }
    }
}

/// One response's worth of items plus its link metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Decoded items, possibly none
    pub items: Vec<T>,
    /// Links advertised by the response
    pub links: Option<LinkSet>,
}

impl<T> Page<T> {
    /// Continuation URL, if the response advertised a non-empty `next` link
    pub fn next_url(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(LinkSet::next_link)
            .filter(|url| !url.is_empty())
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Offset/limit request for a single page
///
/// `page` is 1-based. Values are not validated locally; the API rejects
/// non-positive values itself and that rejection surfaces as a
/// [`Error::RequestFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: i32,
    /// Items per page
    pub limit: i32,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(page: i32, limit: i32) -> Self {
        Self { page, limit }
    }

    /// Offset sent to the API: `1` for the first page, `limit * (page - 1)` after that
    pub fn offset(&self) -> i64 {
        if self.page == 1 {
            1
        } else {
            i64::from(self.limit) * (i64::from(self.page) - 1)
        }
    }

    /// Append `?offset=..&limit=..` to a relative path
    pub fn apply_to(&self, path: &str) -> String {
        format!("{path}?offset={}&limit={}", self.offset(), self.limit)
    }
}
