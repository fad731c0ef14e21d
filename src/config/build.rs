//! `[build]` section configuration.
//!
//! Contains input/output paths, feed generation and reading-time settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Collections live in content/blog, content/projects
/// output = "public"        # Generated files
///
/// [build.rss]
/// enable = true
/// path = "rss.xml"
///
/// [build.reading]
/// words_per_minute = 200
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content root containing one directory per collection.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Directory for listing/tag/OG JSON, relative to `output`.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// RSS feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Reading-time estimation settings.
    #[serde(default)]
    pub reading: ReadingConfig,
}

/// `[build.rss]` section - RSS feed generation configuration.
///
/// See `build_rss` in `generator/rss.rs`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable RSS feed generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Output path for the feed, relative to `[build].output`.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,

    /// `href` of an `<?xml-stylesheet?>` for browsers opening the feed.
    #[serde(default = "defaults::build::rss::stylesheet")]
    #[educe(Default = defaults::build::rss::stylesheet())]
    pub stylesheet: Option<String>,
}

/// `[build.reading]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ReadingConfig {
    #[serde(default = "defaults::build::reading::words_per_minute")]
    #[educe(Default = defaults::build::reading::words_per_minute())]
    pub words_per_minute: u32,
}
