//! Build orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_content() ──► FsSource, one Vec per collection
//!     │
//!     ├── assemble_feed() ──► should_render, newest first
//!     │
//!     └── rayon::join
//!             ├── build_rss()       ──► rss.xml
//!             └── write_listings()  ──► _data/{blog,projects}.json, _data/tags/
//!                 write_og()        ──► _data/og.json
//! ```
//!
//! Any content error aborts the build before anything is written.

use crate::{
    config::SiteConfig,
    content::{Collection, ContentEntry, ContentSource, FsSource, RuntimeMode, Visibility},
    generator::{
        feed::{FeedItem, assemble_feed},
        listing::{Listing, write_listings},
        og::{og_pages, write_og},
        rss::build_rss,
    },
    log,
};
use anyhow::{Context, Result};
use std::fs;

/// Entries of every collection, in collection order.
pub struct Content {
    collections: Vec<(Collection, Vec<ContentEntry>)>,
}

impl Content {
    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.collections.iter().flat_map(|(_, entries)| entries)
    }

    pub fn feed(&self, mode: RuntimeMode) -> Vec<FeedItem> {
        assemble_feed(self.collections.iter().map(|(_, e)| e.as_slice()), mode)
    }

    pub fn listing(&self, mode: RuntimeMode) -> Listing<'_> {
        Listing::new(self.iter(), mode)
    }
}

/// Load both collections from `[build].content`.
pub fn load_content(config: &SiteConfig) -> Result<Content> {
    let source = FsSource::new(&config.build.content);
    let collections = source
        .load_all()
        .with_context(|| format!("failed to load content from `{}`", source.root().display()))?;

    Ok(Content { collections })
}

/// Load content and write every build output.
pub fn build_site(config: &SiteConfig, mode: RuntimeMode) -> Result<()> {
    let content = load_content(config)?;
    report_hidden(&content, mode);

    if config.build.clean && config.build.output.exists() {
        fs::remove_dir_all(&config.build.output).with_context(|| {
            format!("failed to clean `{}`", config.build.output.display())
        })?;
    }

    let feed = content.feed(mode);
    let (rss_result, index_result) = rayon::join(
        || build_rss(config, &feed),
        || {
            write_listings(config, &content.listing(mode))?;
            write_og(config, &og_pages(config, content.iter(), mode))
        },
    );

    rss_result?;
    index_result?;

    log!("build"; "done ({mode})");
    Ok(())
}

/// Log how many entries the current mode keeps off the site.
fn report_hidden(content: &Content, mode: RuntimeMode) {
    let drafts = content
        .iter()
        .filter(|entry| Visibility::of(entry).draft)
        .count();
    if drafts == 0 {
        return;
    }

    if mode.is_development() {
        log!("draft"; "rendering {drafts} draft(s)");
    } else {
        log!("draft"; "skipping {drafts} draft(s)");
    }
}
