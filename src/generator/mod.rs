//! Build outputs derived from the loaded content.
//!
//! | Module      | Output                                   |
//! |-------------|------------------------------------------|
//! | `feed`      | ordered [`FeedItem`](feed::FeedItem)s    |
//! | `rss`       | `rss.xml`                                |
//! | `listing`   | `_data/{blog,projects}.json`, tag index  |
//! | `og`        | `_data/og.json`                          |

pub mod feed;
pub mod listing;
pub mod og;
pub mod rss;

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Write `contents` to `path`, creating parent directories first.
pub(crate) fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write `{}`", path.display()))
}

/// Serialize `value` as pretty JSON and write it to `path`.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    write_output(path, &json)
}
