//! CLI for the obocheck registry checks.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use obocheck_core::config;
use std::path::PathBuf;

use commands::{run_check, run_probe};

/// Top-level CLI for obocheck.
#[derive(Debug, Parser)]
#[command(name = "obocheck")]
#[command(about = "obocheck: ontology registry documentation check", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `PASS`/`ERROR` line per record.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that records have a homepage and description, and that the homepage resolves.
    Check {
        /// Record files (.md front matter, .yml/.yaml, .json) or directories of them.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Check up to N records concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// GET a URL the way the homepage check does and report the final status.
    Probe {
        /// HTTP/HTTPS URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                paths,
                jobs,
                format,
            } => {
                let jobs = jobs.unwrap_or(cfg.jobs);
                run_check(&cfg, &paths, jobs, format).await?;
            }
            CliCommand::Probe { url } => run_probe(&cfg, &url).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
