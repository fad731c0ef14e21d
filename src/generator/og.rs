//! Open Graph page descriptors.
//!
//! Every renderable entry and every fixed page gets a title and a
//! description for its social card, keyed by route.

use super::write_json;
use crate::{
    config::SiteConfig,
    content::{ContentEntry, RuntimeMode, should_render},
    log,
};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgPage {
    pub title: String,
    pub description: String,
}

/// Route key (`blog/hello-world`, `about`, ...) to card contents.
pub type OgPages = BTreeMap<String, OgPage>;

/// Collect descriptors for fixed pages and all renderable entries.
///
/// Entry descriptions get the publication date appended on its own line.
pub fn og_pages<'a, I>(config: &SiteConfig, entries: I, mode: RuntimeMode) -> OgPages
where
    I: IntoIterator<Item = &'a ContentEntry>,
{
    let mut pages: OgPages = config
        .pages
        .routes()
        .into_iter()
        .map(|(route, info)| {
            let page = OgPage {
                title: info.title.clone(),
                description: info.description.clone(),
            };
            (route.to_owned(), page)
        })
        .collect();

    for entry in entries.into_iter().filter(|e| should_render(e, mode)) {
        let page = OgPage {
            title: entry.title.clone(),
            description: format!("{}\n\n{}", entry.description, entry.date.to_display()),
        };
        pages.insert(entry.route(), page);
    }

    pages
}

/// Write `_data/og.json`.
pub fn write_og(config: &SiteConfig, pages: &OgPages) -> Result<()> {
    let path = config.data_dir().join("og.json");
    write_json(&path, pages)?;
    log!("og"; "og.json ({} pages)", pages.len());
    Ok(())
}
