//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::content::{Collection, RuntimeMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// folio content tool CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Runtime mode. Drafts are only visible in development.
    ///
    /// Read once at startup; falls back to the FOLIO_MODE environment variable.
    #[arg(short, long, value_enum, env = "FOLIO_MODE", default_value_t = RuntimeMode::Production, global = true)]
    pub mode: RuntimeMode,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the feed, listing indexes, tag indexes and OG descriptors
    Build {
        /// Remove the output directory before building
        #[arg(long)]
        clean: bool,

        /// enable rss feed generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        rss: Option<bool>,

        /// Override base URL for the site.
        ///
        /// Useful when the production URL differs from the one in folio.toml:
        ///   folio build --base-url "https://example.github.io/blog"
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },

    /// Print the rss feed to stdout
    Feed {
        /// Override base URL for the site.
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },

    /// Print the entries that appear on index pages
    List {
        /// Only list this collection
        #[arg(long, value_enum)]
        collection: Option<Collection>,

        /// Print only the homepage slice
        #[arg(long)]
        recent: bool,
    },
}

impl Cli {
    pub fn base_url(&self) -> Option<&String> {
        match &self.command {
            Commands::Build { base_url, .. } | Commands::Feed { base_url } => base_url.as_ref(),
            Commands::List { .. } => None,
        }
    }
}
