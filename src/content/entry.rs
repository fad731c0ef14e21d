//! Content entries: one blog post or project each.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

/// The content collections a site is built from.
///
/// The lowercase name doubles as the URL segment and the directory name
/// under the content root (`content/blog/`, `content/projects/`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Projects,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::Blog, Self::Projects];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound links a project can carry. Always empty on blog posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_url: Option<String>,
}

impl ProjectLinks {
    pub const fn is_empty(&self) -> bool {
        self.demo_url.is_none() && self.repo_url.is_none() && self.package_url.is_none()
    }
}

/// A single blog post or project, as validated by the content source.
///
/// Entries are read-only once loaded. `draft` and `archive` keep the
/// distinction between "absent" and "false"; see
/// [`Visibility::of`](super::visibility::Visibility::of) for how they resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub collection: Collection,
    /// Unique within `collection`, URL-safe.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: DateTimeUtc,
    pub updated: Option<DateTimeUtc>,
    pub draft: Option<bool>,
    pub archive: Option<bool>,
    pub tags: Vec<String>,
    pub socials: Vec<String>,
    pub links: ProjectLinks,
    /// Body following the frontmatter.
    pub body: String,
    /// Source file, empty for entries built in memory.
    pub source: PathBuf,
}

impl ContentEntry {
    /// Site-relative permalink, e.g. `/blog/hello-world/`.
    pub fn link(&self) -> String {
        format!("/{}/{}/", self.collection, self.slug)
    }

    /// Route key without slashes, e.g. `blog/hello-world`.
    pub fn route(&self) -> String {
        format!("{}/{}", self.collection, self.slug)
    }
}

/// In-memory construction, for tests that do not go through a content source.
#[cfg(test)]
impl ContentEntry {
    pub fn new(
        collection: Collection,
        slug: impl Into<String>,
        title: impl Into<String>,
        date: DateTimeUtc,
    ) -> Self {
        Self {
            collection,
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            date,
            updated: None,
            draft: None,
            archive: None,
            tags: Vec::new(),
            socials: Vec::new(),
            links: ProjectLinks::default(),
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_updated(mut self, updated: DateTimeUtc) -> Self {
        self.updated = Some(updated);
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_archive(mut self, archive: bool) -> Self {
        self.archive = Some(archive);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}
