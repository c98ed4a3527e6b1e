//! Command-line definition and the effective configuration derived from it.
//!
//! Environment fallbacks:
//!
//! - `LISTING_SCOUT_FILE` - listings JSON file (for `--source file`)
//! - `LISTING_SCOUT_URL` - listings endpoint (for `--source http`)
//! - `LISTING_SCOUT_HISTORY` - history file (default `listing_history.json`)

use crate::commands;
use crate::sources::{HttpSource, JsonFileSource, MockSource, RecordSource};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Listing Scout - query rental listings from the terminal
#[derive(Debug, Parser)]
#[command(name = "listing-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Where listings are loaded from
    #[arg(long, value_enum, default_value_t = SourceKind::Mock)]
    pub source: SourceKind,

    /// Listings JSON file
    #[arg(long, env = "LISTING_SCOUT_FILE")]
    pub file: Option<PathBuf>,

    /// Listings endpoint returning a JSON array
    #[arg(long, env = "LISTING_SCOUT_URL")]
    pub url: Option<String>,

    /// Search history and saved searches
    #[arg(long, env = "LISTING_SCOUT_HISTORY", default_value = "listing_history.json")]
    pub history_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration
    pub fn config(&self) -> Config {
        Config {
            source: self.source,
            file: self.file.clone(),
            url: self.url.clone(),
            history_file: self.history_file.clone(),
            format: self.format,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter, sort and page through listings
    Search(commands::search::SearchArgs),
    /// Show the best matches for a partial query
    Suggest(commands::suggest::SuggestArgs),
    /// List recent queries and saved searches
    History(commands::history::HistoryArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in sample listings
    #[default]
    Mock,
    /// A JSON file on disk
    File,
    /// An HTTP endpoint
    Http,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceKind,
    pub file: Option<PathBuf>,
    pub url: Option<String>,
    pub history_file: PathBuf,
    pub format: OutputFormat,
}

impl Config {
    /// Build the record source the configuration points at
    pub fn record_source(&self) -> Result<Box<dyn RecordSource>> {
        Ok(match self.source {
            SourceKind::Mock => Box::new(MockSource),
            SourceKind::File => {
                let path = self
                    .file
                    .clone()
                    .context("A listings file is required. Set LISTING_SCOUT_FILE or use --file")?;
                Box::new(JsonFileSource::new(path))
            }
            SourceKind::Http => {
                let url = self
                    .url
                    .clone()
                    .context("A listings URL is required. Set LISTING_SCOUT_URL or use --url")?;
                Box::new(HttpSource::new(url)?)
            }
        })
    }
}
