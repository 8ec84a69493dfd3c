//! CLI runner - executes commands

use crate::api::ExtraLifeClient;
use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing the result to stdout
    pub async fn run(&self) -> Result<()> {
        let mut buf = Vec::new();
        self.run_to(&mut buf).await?;
        std::io::stdout().write_all(&buf)?;
        Ok(())
    }

    /// Run the CLI command, writing the result to `out`
    pub async fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let config = self.load_config()?;
        let client = ExtraLifeClient::with_config(&config)?;
        let page_size = config.default_page_size;

        match &self.cli.command {
            Commands::Participants { pages } => {
                if pages.all {
                    self.emit(out, &client.all_participants().await?)
                } else {
                    let (page, limit) = resolve(pages, page_size);
                    self.emit(out, &client.participants(page, limit).await?)
                }
            }
            Commands::Participant { id } => self.emit(out, &client.participant(*id).await?),
            Commands::Donations { id, pages } => {
                if pages.all {
                    self.emit(out, &client.all_participant_donations(*id).await?)
                } else {
                    let (page, limit) = resolve(pages, page_size);
                    self.emit(out, &client.participant_donations(*id, page, limit).await?)
                }
            }
            Commands::Donors { id, pages } => {
                if pages.all {
                    self.emit(out, &client.all_participant_donors(*id).await?)
                } else {
                    let (page, limit) = resolve(pages, page_size);
                    self.emit(out, &client.participant_donors(*id, page, limit).await?)
                }
            }
            Commands::Donor { id } => self.emit(out, &client.donor(id).await?),
            Commands::Activity { id } => {
                self.emit(out, &client.all_participant_activities(*id).await?)
            }
        }
    }

    /// Resolve configuration: file (or defaults), then environment, then `--base-url`
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                let mut config = ClientConfig::from_file(path)?;
                config.apply_env();
                config
            }
            None => ClientConfig::from_env(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        config.validate()?;
        debug!("Using API base URL {}", config.base_url);
        Ok(config)
    }

    fn emit<T: Serialize>(&self, out: &mut impl Write, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(|e| Error::Other(format!("Failed to render output: {e}")))?;

        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

fn resolve(pages: &PageArgs, default_limit: i32) -> (i32, i32) {
    (pages.page, pages.limit.unwrap_or(default_limit))
}
