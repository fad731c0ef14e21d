//! TOML frontmatter for Markdown content files.
//!
//! ```text
//! +++
//! title = "Hello"
//! description = "First post"
//! date = 2024-01-15
//! tags = ["rust"]
//! +++
//!
//! Body text...
//! ```

use super::{Collection, ContentEntry, ContentError, ProjectLinks};
use crate::utils::{date::DateTimeUtc, slug};
use serde::Deserialize;
use std::path::Path;

const DELIMITER: &str = "+++";

/// Frontmatter schema shared by both collections.
///
/// Project links are accepted by the parser but rejected on blog posts in
/// [`Frontmatter::into_entry`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    pub date: DateTimeUtc,
    #[serde(default)]
    pub updated: Option<DateTimeUtc>,
    #[serde(default)]
    pub draft: Option<bool>,
    #[serde(default)]
    pub archive: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub socials: Option<Vec<String>>,
    /// Overrides the slug derived from the file name.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "demoURL")]
    pub demo_url: Option<String>,
    #[serde(default, alias = "repoURL")]
    pub repo_url: Option<String>,
    #[serde(default, alias = "packageURL")]
    pub package_url: Option<String>,
}

/// Split a file into its frontmatter text and body.
///
/// Returns `None` unless the file opens with a `+++` line that is closed by
/// another `+++` line.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = strip_delimiter_line(content)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }
    None
}

fn strip_delimiter_line(s: &str) -> Option<&str> {
    let rest = s.strip_prefix(DELIMITER)?;
    let rest = rest.trim_start_matches([' ', '\t']);
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parse a content file into frontmatter and body.
pub fn parse<'a>(path: &Path, content: &'a str) -> Result<(Frontmatter, &'a str), ContentError> {
    let (front, body) =
        split(content).ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;
    let frontmatter: Frontmatter =
        toml::from_str(front).map_err(|err| ContentError::Frontmatter(path.to_path_buf(), err))?;
    Ok((frontmatter, body))
}

impl Frontmatter {
    /// Check the schema and build the entry.
    ///
    /// `fallback_slug` (usually the file stem) is used when the frontmatter
    /// has no `slug`; it is slugified if it is not already URL-safe.
    pub fn into_entry(
        self,
        collection: Collection,
        fallback_slug: &str,
        body: &str,
        path: &Path,
    ) -> Result<ContentEntry, ContentError> {
        if self.title.trim().is_empty() {
            return Err(empty(path, "title"));
        }
        if self.description.trim().is_empty() {
            return Err(empty(path, "description"));
        }

        let slug = match self.slug {
            Some(slug) if slug::is_url_safe(&slug) => slug,
            Some(slug) => {
                return Err(ContentError::InvalidSlug {
                    path: path.to_path_buf(),
                    slug,
                });
            }
            None if slug::is_url_safe(fallback_slug) => fallback_slug.to_owned(),
            None => {
                let derived = slug::slugify(fallback_slug);
                if derived.is_empty() {
                    return Err(ContentError::InvalidSlug {
                        path: path.to_path_buf(),
                        slug: fallback_slug.to_owned(),
                    });
                }
                derived
            }
        };

        let links = ProjectLinks {
            demo_url: self.demo_url,
            repo_url: self.repo_url,
            package_url: self.package_url,
        };
        if collection == Collection::Blog && !links.is_empty() {
            return Err(ContentError::Schema {
                path: path.to_path_buf(),
                message: "project links (`demo_url`, `repo_url`, `package_url`) are only allowed on projects".into(),
            });
        }

        Ok(ContentEntry {
            collection,
            slug,
            title: self.title,
            description: self.description,
            date: self.date,
            updated: self.updated,
            draft: self.draft,
            archive: self.archive,
            tags: self.tags.unwrap_or_default(),
            socials: self.socials.unwrap_or_default(),
            links,
            body: body.to_owned(),
            source: path.to_path_buf(),
        })
    }
}

fn empty(path: &Path, field: &'static str) -> ContentError {
    ContentError::EmptyField {
        path: path.to_path_buf(),
        field,
    }
}
