//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.folio".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn data() -> PathBuf {
        "_data".into()
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "rss.xml".into()
        }

        pub fn stylesheet() -> Option<String> {
            Some("/rss-styles.xsl".into())
        }
    }

    pub mod reading {
        pub fn words_per_minute() -> u32 {
            200
        }
    }
}

// ============================================================================
// [listing] Section Defaults
// ============================================================================

pub mod listing {
    pub fn posts_on_homepage() -> usize {
        5
    }

    pub fn projects_on_homepage() -> usize {
        3
    }
}

// ============================================================================
// [pages] Section Defaults
// ============================================================================

pub mod pages {
    use super::super::pages::PageInfo;

    pub fn home() -> PageInfo {
        PageInfo::new("Home", "Welcome to my blog, where I post about tech and tools I'm interested in.")
    }

    pub fn blog() -> PageInfo {
        PageInfo::new("Blog", "A collection of articles on topics I'm interested in.")
    }

    pub fn projects() -> PageInfo {
        PageInfo::new(
            "Projects",
            "A collection of my projects with links to repositories and live demos.",
        )
    }

    pub fn about() -> PageInfo {
        PageInfo::new("About", "A little bit about me.")
    }

    pub fn not_found() -> PageInfo {
        PageInfo::new("404", "Page not found.")
    }
}
