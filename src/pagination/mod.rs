//! Pagination module
//!
//! Supports: Link header continuation and explicit offset/limit pages
//!
//! # Overview
//!
//! The Extra Life API advertises continuation pages through the `link`
//! response header. [`parse_link_header`] turns that header into a
//! [`LinkSet`], and [`LinkHeaderPaginator`] walks the `next` relation to
//! aggregate a whole collection. [`PageRequest`] computes the
//! `offset`/`limit` query for callers that want one page at a time.

mod link_header;
mod strategies;
mod types;

pub use link_header::{parse_link_header, LinkSet, Relation};
pub use strategies::LinkHeaderPaginator;
pub use types::{Page, PageRequest, RequestOutcome};
