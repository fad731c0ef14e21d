//! Content sources: where entries come from.
//!
//! The generators never touch the filesystem themselves. They receive fully
//! materialized `Vec<ContentEntry>`s from a [`ContentSource`], so a failure to
//! load a collection surfaces before anything is generated.

use super::{Collection, ContentEntry, ContentError, frontmatter};
use crate::log;
use rayon::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// File extensions treated as content.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Anything that can hand out the entries of a collection.
pub trait ContentSource {
    fn load(&self, collection: Collection) -> Result<Vec<ContentEntry>, ContentError>;

    /// Load every collection, stopping at the first failure.
    fn load_all(&self) -> Result<Vec<(Collection, Vec<ContentEntry>)>, ContentError> {
        Collection::ALL
            .into_iter()
            .map(|collection| Ok((collection, self.load(collection)?)))
            .collect()
    }
}

/// Loads `<root>/<collection>/<slug>.md` and `<root>/<collection>/<slug>/index.md`.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Content files of a collection, sorted by path for a stable load order.
    fn collect_files(&self, dir: &Path) -> Result<Vec<(PathBuf, String)>, ContentError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(2) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_content_file(path) {
                continue;
            }
            if let Some(stem) = slug_stem(dir, path) {
                files.push((path.to_path_buf(), stem));
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

impl ContentSource for FsSource {
    fn load(&self, collection: Collection) -> Result<Vec<ContentEntry>, ContentError> {
        let dir = self.root.join(collection.as_str());
        if !dir.is_dir() {
            log!("content"; "no `{}` directory, skipping", collection);
            return Ok(Vec::new());
        }

        let files = self.collect_files(&dir)?;
        let entries = files
            .par_iter()
            .map(|(path, stem)| load_file(collection, path, stem))
            .collect::<Result<Vec<_>, _>>()?;

        check_unique_slugs(collection, &entries)?;
        Ok(entries)
    }
}

fn load_file(collection: Collection, path: &Path, stem: &str) -> Result<ContentEntry, ContentError> {
    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    let (frontmatter, body) = frontmatter::parse(path, &content)?;
    frontmatter.into_entry(collection, stem, body, path)
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Slug candidate for a content file.
///
/// - `blog/hello.md` → `hello`
/// - `blog/hello/index.md` → `hello`
/// - `blog/hello/notes.md` → skipped (a sibling of a bundled post)
fn slug_stem(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let mut components = relative.components();
    let first = components.next()?.as_os_str().to_str()?;

    match components.next() {
        None => Some(Path::new(first).file_stem()?.to_str()?.to_owned()),
        Some(second) => {
            let is_index = Path::new(second.as_os_str()).file_stem()? == "index";
            is_index.then(|| first.to_owned())
        }
    }
}

fn check_unique_slugs(collection: Collection, entries: &[ContentEntry]) -> Result<(), ContentError> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(first) = seen.insert(entry.slug.as_str(), entry.source.as_path()) {
            return Err(ContentError::DuplicateSlug {
                collection,
                slug: entry.slug.clone(),
                first: first.to_path_buf(),
                second: entry.source.clone(),
            });
        }
    }
    Ok(())
}
