//! Content loading error types.

use super::Collection;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a content collection.
///
/// Any of these aborts generation for the whole run.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk content directory")]
    Walk(#[from] walkdir::Error),

    #[error("`{0}` has no `+++` frontmatter block")]
    MissingFrontmatter(PathBuf),

    #[error("invalid frontmatter in `{0}`")]
    Frontmatter(PathBuf, #[source] toml::de::Error),

    #[error("`{path}`: `{field}` must not be empty")]
    EmptyField { path: PathBuf, field: &'static str },

    #[error("`{path}`: {message}")]
    Schema { path: PathBuf, message: String },

    #[error("`{path}`: `{slug}` is not a URL-safe slug")]
    InvalidSlug { path: PathBuf, slug: String },

    #[error("duplicate slug `{slug}` in `{collection}`: `{first}` and `{second}`")]
    DuplicateSlug {
        collection: Collection,
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
