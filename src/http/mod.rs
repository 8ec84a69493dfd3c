//! HTTP client module
//!
//! Provides the transport used by every API call.
//!
//! # Features
//!
//! - **Shared connection pool**: `HttpClient` is cheap to clone
//! - **Outcome classification**: 404, other failures and successes are distinct
//! - **Link header extraction**: each successful response carries its parsed links

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
