//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Query the Extra Life donation tracking API
#[derive(Parser, Debug)]
#[command(name = "extralife")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL (overrides config file and EXTRALIFE_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page selection shared by collection commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// 1-based page number
    #[arg(long, default_value = "1", allow_negative_numbers = true, conflicts_with = "all")]
    pub page: i32,

    /// Items per page (defaults to the configured page size)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "all")]
    pub limit: Option<i32>,

    /// Follow pagination links and return the whole collection
    #[arg(long)]
    pub all: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List participants
    Participants {
        #[command(flatten)]
        pages: PageArgs,
    },

    /// Show one participant
    Participant {
        /// Participant ID
        id: i64,
    },

    /// List a participant's donations
    Donations {
        /// Participant ID
        id: i64,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// List a participant's donors
    Donors {
        /// Participant ID
        id: i64,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Show one donor
    Donor {
        /// Donor ID
        id: String,
    },

    /// Show a participant's activity feed
    Activity {
        /// Participant ID
        id: i64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participants_page() {
        let cli = Cli::parse_from(["extralife", "participants", "--page", "3", "--limit", "10"]);
        match cli.command {
            Commands::Participants { pages } => {
                assert_eq!(pages.page, 3);
                assert_eq!(pages.limit, Some(10));
                assert!(!pages.all);
            }
            other => panic!("Expected Participants, got {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_donations_all() {
        let cli = Cli::parse_from(["extralife", "--format", "pretty", "donations", "42", "--all"]);
        match cli.command {
            Commands::Donations { id, pages } => {
                assert_eq!(id, 42);
                assert!(pages.all);
                assert_eq!(pages.page, 1);
            }
            other => panic!("Expected Donations, got {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_all_conflicts_with_page() {
        let result = Cli::try_parse_from(["extralife", "donors", "1", "--all", "--page", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_page_is_passed_through() {
        let cli = Cli::parse_from(["extralife", "participants", "--page", "-1"]);
        match cli.command {
            Commands::Participants { pages } => assert_eq!(pages.page, -1),
            other => panic!("Expected Participants, got {other:?}"),
        }
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::parse_from([
            "extralife",
            "donor",
            "ABC",
            "--base-url",
            "http://localhost:1234/api/",
            "-v",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1234/api/"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Donor { ref id } if id == "ABC"));
    }
}
