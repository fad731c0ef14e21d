//! RSS feed serialization.
//!
//! Turns the assembled [`FeedItem`]s into an RSS 2.0 document.

use super::{feed::FeedItem, write_output};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, anyhow};
use quick_xml::escape::escape;
use regex::Regex;
use rss::{
    ChannelBuilder, GuidBuilder, ItemBuilder, extension::dublincore::DublinCoreExtensionBuilder,
    validation::Validate,
};
use std::sync::LazyLock;

// ============================================================================
// Public API
// ============================================================================

/// Write the feed to `[build.rss].path` if enabled in config.
pub fn build_rss(config: &SiteConfig, items: &[FeedItem]) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::build(config, items).write()?;
    }
    Ok(())
}

/// Render the feed document without writing it.
pub fn render_rss(config: &SiteConfig, items: &[FeedItem]) -> Result<String> {
    RssFeed::build(config, items).into_xml()
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    items: &'a [FeedItem],
}

impl<'a> RssFeed<'a> {
    /// Items are expected newest first, as `assemble_feed` returns them.
    const fn build(config: &'a SiteConfig, items: &'a [FeedItem]) -> Self {
        Self { config, items }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let base = &self.config.base;
        let site_url = base
            .url
            .as_deref()
            .ok_or_else(|| anyhow!("[base.url] is required for RSS generation"))?;

        let items = self
            .items
            .iter()
            .map(|item| feed_item_to_rss(item, self.config))
            .collect::<Result<Vec<_>>>()?;

        let last_build_date = self.items.first().map_or_else(
            || chrono::Utc::now().to_rfc2822(),
            |item| item.published_at.to_rfc2822(),
        );

        let channel = ChannelBuilder::default()
            .title(&base.title)
            .link(site_url)
            .description(&base.description)
            .language(base.language.clone())
            .managing_editor(managing_editor(self.config))
            .copyright((!base.copyright.is_empty()).then(|| base.copyright.clone()))
            .last_build_date(last_build_date)
            .generator("folio".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;

        let xml = channel.to_string();
        Ok(match &self.config.build.rss.stylesheet {
            Some(href) => with_stylesheet(&xml, href),
            None => xml,
        })
    }

    /// Write rss feed to file
    fn write(self) -> Result<()> {
        let rss_path = self.config.rss_path();
        let count = self.items.len();
        let xml = self.into_xml()?;

        write_output(&rss_path, xml.as_bytes())?;

        log!("feed"; "{} ({count} items)", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a [`FeedItem`] to an rss item with an absolute permalink.
///
/// `dc:date` is only emitted for items that carry an update timestamp.
fn feed_item_to_rss(item: &FeedItem, config: &SiteConfig) -> Result<rss::Item> {
    let link = config
        .absolute_url(&item.link)
        .with_context(|| format!("cannot build an absolute link for `{}`", item.link))?;

    let dublin_core = item.updated_at.map(|updated| {
        DublinCoreExtensionBuilder::default()
            .dates(vec![updated.to_iso8601()])
            .build()
    });

    Ok(ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(item.description.clone())
        .pub_date(item.published_at.to_rfc2822())
        .dublin_core_ext(dublin_core)
        .build())
}

/// Insert an `<?xml-stylesheet?>` instruction after the XML declaration.
fn with_stylesheet(xml: &str, href: &str) -> String {
    let href = escape(href);
    let instruction = format!(r#"<?xml-stylesheet href="{href}" type="text/xsl"?>"#);
    match xml.find("?>") {
        Some(end) if xml.starts_with("<?xml") => {
            let (decl, rest) = xml.split_at(end + 2);
            format!("{decl}\n{instruction}{rest}")
        }
        _ => format!("{instruction}\n{xml}"),
    }
}

/// Normalize the site author to rss format: "email@example.com (Name)"
///
/// An author already written in that format is kept as-is.
fn managing_editor(config: &SiteConfig) -> String {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(author) {
        return author.clone();
    }

    format!("{} ({})", config.base.email, author)
}
