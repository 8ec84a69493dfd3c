//! # Extra Life API client
//!
//! Typed access to the Extra Life (DonorDrive) donation tracking API:
//! participants, donations, donors and activity feeds, with automatic
//! `Link` header pagination.
//!
//! ## Features
//!
//! - **Typed endpoints**: one method per resource, decoding into plain structs
//! - **Automatic pagination**: `all_*` methods follow `rel="next"` links to the end
//! - **Explicit pages**: `page`/`limit` methods fetch exactly one page
//! - **Absence is not an error**: 404 maps to `None` or an empty `Vec`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use extralife_client::{ExtraLifeClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ExtraLifeClient::new()?;
//!
//!     if let Some(participant) = client.participant(412345).await? {
//!         println!("{:?} raised {}", participant.display_name, participant.sum_donations);
//!     }
//!
//!     let donations = client.all_participant_donations(412345).await?;
//!     println!("{} donations", donations.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 ExtraLifeClient (api)                │
//! │  participants · donations · donors · activity        │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────┐
//! │   HttpClient (http)          Pagination              │
//! │   fetch_single_page ──────▶  parse_link_header       │
//! │   fetch_all ─────────────▶  LinkHeaderPaginator      │
//! │                              PageRequest             │
//! └──────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::ref_option)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Entity types returned by the API
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport and single-page fetch
pub mod http;

/// Link header parsing and pagination
pub mod pagination;

/// Typed endpoints
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::ExtraLifeClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{parse_link_header, LinkSet, RequestOutcome};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
