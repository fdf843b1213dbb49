//! CLI for the OSSB bucket listing browser.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ossb_core::config;
use ossb_core::listing::{CurlSource, FetchOptions};

use commands::{run_decode, run_exts, run_ls, run_shell, LsArgs};

/// Top-level CLI for OSSB.
#[derive(Debug, Parser)]
#[command(name = "ossb")]
#[command(about = "OSSB: browse object-storage bucket listings and copy object URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a bucket listing and print object URLs.
    Ls {
        /// Listing URL (query parameters are allowed and stripped from object URLs).
        url: String,

        /// Only keys containing this text (case-insensitive).
        #[arg(long, conflicts_with = "ext")]
        filter: Option<String>,

        /// Only keys containing this extension (case-insensitive).
        #[arg(long)]
        ext: Option<String>,

        /// Copy the printed URLs, percent-encoded, to the clipboard.
        #[arg(long)]
        copy: bool,

        /// Print a JSON document instead of one URL per line.
        #[arg(long)]
        json: bool,
    },

    /// Fetch a bucket listing and print its file extensions with key counts.
    Exts {
        /// Listing URL.
        url: String,
    },

    /// Percent-decode copied object URLs.
    Decode {
        /// Encoded URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Interactive session: fetch, filter, select, and copy.
    Shell {
        /// Listing URL to fetch on start.
        url: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().command.run()
    }

    pub(crate) fn run(self) -> Result<()> {
        match self {
            CliCommand::Ls {
                url,
                filter,
                ext,
                copy,
                json,
            } => run_ls(
                &listing_source()?,
                &LsArgs {
                    url,
                    filter,
                    ext,
                    copy,
                    json,
                },
            )?,
            CliCommand::Exts { url } => run_exts(&listing_source()?, &url)?,
            CliCommand::Decode { urls } => run_decode(&urls),
            CliCommand::Shell { url } => run_shell(&listing_source()?, url.as_deref())?,
        }

        Ok(())
    }
}

/// Curl source configured from `config.toml`; only commands that fetch need it.
fn listing_source() -> Result<CurlSource> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(CurlSource::new(FetchOptions::from(&cfg)))
}

#[cfg(test)]
mod tests;
