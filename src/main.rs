//! Folio - content visibility, feeds and listings for a Markdown blog.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod utils;

use anyhow::{Result, bail};
use build::{build_site, load_content};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{Collection, RuntimeMode};
use generator::{listing::homepage_size, rss::render_rss};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mode = cli.mode;

    match &cli.command {
        Commands::Build { .. } => build_site(&config, mode),
        Commands::Feed { .. } => print_feed(&config, mode),
        Commands::List { collection, recent } => print_listing(&config, mode, *collection, *recent),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file `{}` not found.", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Write the RSS document to stdout.
fn print_feed(config: &SiteConfig, mode: RuntimeMode) -> Result<()> {
    let content = load_content(config)?;
    let xml = render_rss(config, &content.feed(mode))?;
    println!("{xml}");
    Ok(())
}

/// Print listed entries, one per line: `date  url  title`.
fn print_listing(
    config: &SiteConfig,
    mode: RuntimeMode,
    only: Option<Collection>,
    recent: bool,
) -> Result<()> {
    let content = load_content(config)?;
    let listing = content.listing(mode);

    let collections = only.map_or(Collection::ALL.to_vec(), |c| vec![c]);
    for collection in collections {
        let entries = if recent {
            listing.recent(collection, homepage_size(config, collection))
        } else {
            listing.entries(collection)
        };

        log!("list"; "{collection}: {} entries", entries.len());
        for entry in entries {
            println!("{}  {}  {}", entry.date.to_display(), entry.link(), entry.title);
        }
    }

    Ok(())
}
