//! Index pages: listed entries, homepage slices and tag indexes.
//!
//! Everything here goes through [`should_list`], so archived entries and
//! (outside development) drafts never appear.

use super::write_json;
use crate::{
    config::SiteConfig,
    content::{Collection, ContentEntry, ProjectLinks, RuntimeMode, should_list},
    log,
    utils::reading::reading_time,
};
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Listed entries per collection, newest first.
#[derive(Debug, Default)]
pub struct Listing<'a> {
    collections: BTreeMap<Collection, Vec<&'a ContentEntry>>,
}

impl<'a> Listing<'a> {
    pub fn new<I>(entries: I, mode: RuntimeMode) -> Self
    where
        I: IntoIterator<Item = &'a ContentEntry>,
    {
        let mut collections: BTreeMap<Collection, Vec<&ContentEntry>> = BTreeMap::new();
        for entry in entries.into_iter().filter(|e| should_list(e, mode)) {
            collections.entry(entry.collection).or_default().push(entry);
        }
        for entries in collections.values_mut() {
            entries.sort_by(|a, b| b.date.cmp(&a.date));
        }
        Self { collections }
    }

    pub fn entries(&self, collection: Collection) -> &[&'a ContentEntry] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The `n` newest listed entries.
    pub fn recent(&self, collection: Collection, n: usize) -> &[&'a ContentEntry] {
        let entries = self.entries(collection);
        &entries[..n.min(entries.len())]
    }

    /// Listed entries grouped by tag, alphabetical by tag name.
    pub fn tags(&self, collection: Collection) -> BTreeMap<&'a str, Vec<&'a ContentEntry>> {
        let mut tags: BTreeMap<&str, Vec<&ContentEntry>> = BTreeMap::new();
        // entries are already newest first, so each tag list is too
        for &entry in self.entries(collection) {
            let own: BTreeSet<&str> = entry.tags.iter().map(String::as_str).collect();
            for tag in own {
                tags.entry(tag).or_default().push(entry);
            }
        }
        tags
    }
}

/// Entry as exposed to templates in `_data/<collection>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    /// Page URL path (e.g., "/blog/hello-world/")
    pub url: String,
    pub title: String,
    pub description: String,
    /// ISO 8601
    pub date: String,
    /// `MM/DD/YYYY`
    pub date_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<String>,
    pub reading_time: String,
    #[serde(skip_serializing_if = "ProjectLinks::is_empty")]
    pub links: ProjectLinks,
}

impl ListedEntry {
    pub fn new(entry: &ContentEntry, words_per_minute: u32) -> Self {
        Self {
            url: entry.link(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            date: entry.date.to_iso8601(),
            date_display: entry.date.to_display(),
            updated: entry.updated.map(|d| d.to_iso8601()),
            tags: entry.tags.clone(),
            socials: entry.socials.clone(),
            reading_time: reading_time(&entry.body, words_per_minute),
            links: entry.links.clone(),
        }
    }
}

/// Entry reference inside a tag index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedEntry {
    pub url: String,
    pub title: String,
    pub date: String,
}

impl From<&ContentEntry> for TaggedEntry {
    fn from(entry: &ContentEntry) -> Self {
        Self {
            url: entry.link(),
            title: entry.title.clone(),
            date: entry.date.to_iso8601(),
        }
    }
}

/// Contents of `_data/<collection>.json`.
#[derive(Debug, Serialize)]
pub struct CollectionIndex {
    pub collection: Collection,
    pub total: usize,
    /// Homepage slice.
    pub recent: Vec<ListedEntry>,
    pub entries: Vec<ListedEntry>,
}

impl CollectionIndex {
    pub fn new(listing: &Listing<'_>, collection: Collection, config: &SiteConfig) -> Self {
        let wpm = config.build.reading.words_per_minute;
        let entries: Vec<_> = listing
            .entries(collection)
            .iter()
            .map(|e| ListedEntry::new(e, wpm))
            .collect();
        let recent = entries
            .iter()
            .take(homepage_size(config, collection))
            .cloned()
            .collect();

        Self {
            collection,
            total: entries.len(),
            recent,
            entries,
        }
    }
}

/// How many entries of `collection` the homepage shows.
pub const fn homepage_size(config: &SiteConfig, collection: Collection) -> usize {
    match collection {
        Collection::Blog => config.listing.posts_on_homepage,
        Collection::Projects => config.listing.projects_on_homepage,
    }
}

/// Write the listing and tag index of every collection.
pub fn write_listings(config: &SiteConfig, listing: &Listing<'_>) -> Result<()> {
    let data_dir = config.data_dir();

    for collection in Collection::ALL {
        let index = CollectionIndex::new(listing, collection, config);
        write_json(&data_dir.join(format!("{collection}.json")), &index)?;
        log!("list"; "{collection}.json ({} entries)", index.total);

        let tags: BTreeMap<_, Vec<TaggedEntry>> = listing
            .tags(collection)
            .into_iter()
            .map(|(tag, entries)| (tag, entries.into_iter().map(TaggedEntry::from).collect()))
            .collect();
        write_json(&data_dir.join("tags").join(format!("{collection}.json")), &tags)?;
        log!("tags"; "{collection}.json ({} tags)", tags.len());
    }

    Ok(())
}
