//! Render/list decisions for content entries.
//!
//! Two independent axes:
//!
//! | draft | archive | development      | production       |
//! |-------|---------|------------------|------------------|
//! | no    | no      | render + list    | render + list    |
//! | yes   | no      | render + list    | hidden           |
//! | no    | yes     | render only      | render only      |
//! | yes   | yes     | render only      | hidden           |
//!
//! Archived entries keep their permalink and stay in the feed, they are only
//! dropped from index pages. Drafts only exist in development.

use super::entry::ContentEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-wide build mode, chosen once at startup and passed explicitly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[value(alias = "dev")]
    Development,
    #[default]
    #[value(alias = "prod")]
    Production,
}

impl RuntimeMode {
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

/// Resolved visibility flags of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub draft: bool,
    pub archive: bool,
}

impl Visibility {
    /// Resolve the optional frontmatter flags. Absent means `false`.
    pub fn of(entry: &ContentEntry) -> Self {
        Self {
            draft: entry.draft.unwrap_or(false),
            archive: entry.archive.unwrap_or(false),
        }
    }

    pub const fn should_render(self, mode: RuntimeMode) -> bool {
        !self.draft || mode.is_development()
    }

    /// Archive is checked first: an archived entry is never listed, draft or not.
    pub const fn should_list(self, mode: RuntimeMode) -> bool {
        !self.archive && self.should_render(mode)
    }
}

/// Whether the entry gets a page at all. Detail pages use this as an access gate.
pub fn should_render(entry: &ContentEntry, mode: RuntimeMode) -> bool {
    Visibility::of(entry).should_render(mode)
}

/// Whether the entry shows up on index pages.
pub fn should_list(entry: &ContentEntry, mode: RuntimeMode) -> bool {
    Visibility::of(entry).should_list(mode)
}
