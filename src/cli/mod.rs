//! CLI module
//!
//! Command-line interface over [`ExtraLifeClient`](crate::api::ExtraLifeClient).
//!
//! # Commands
//!
//! - `participants` - List participants (`--page`/`--limit` or `--all`)
//! - `participant` - Show one participant
//! - `donations` - List a participant's donations
//! - `donors` - List a participant's donors
//! - `donor` - Show one donor
//! - `activity` - Show a participant's activity feed

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
