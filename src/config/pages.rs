//! `[listing]` and `[pages]` sections.
//!
//! `[listing]` sizes the homepage slices; `[pages]` names the fixed pages
//! that get Open Graph cards next to the content entries.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[listing]` section in folio.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Newest blog posts shown on the homepage.
    #[serde(default = "defaults::listing::posts_on_homepage")]
    #[educe(Default = defaults::listing::posts_on_homepage())]
    pub posts_on_homepage: usize,

    /// Newest projects shown on the homepage.
    #[serde(default = "defaults::listing::projects_on_homepage")]
    #[educe(Default = defaults::listing::projects_on_homepage())]
    pub projects_on_homepage: usize,
}

/// Title and description of a fixed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageInfo {
    pub title: String,
    pub description: String,
}

impl PageInfo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// `[pages]` section in folio.toml.
///
/// # Example
/// ```toml
/// [pages.about]
/// title = "About"
/// description = "Who writes this."
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PagesConfig {
    #[serde(default = "defaults::pages::home")]
    #[educe(Default = defaults::pages::home())]
    pub home: PageInfo,

    #[serde(default = "defaults::pages::blog")]
    #[educe(Default = defaults::pages::blog())]
    pub blog: PageInfo,

    #[serde(default = "defaults::pages::projects")]
    #[educe(Default = defaults::pages::projects())]
    pub projects: PageInfo,

    #[serde(default = "defaults::pages::about")]
    #[educe(Default = defaults::pages::about())]
    pub about: PageInfo,

    #[serde(default = "defaults::pages::not_found")]
    #[educe(Default = defaults::pages::not_found())]
    pub not_found: PageInfo,
}

impl PagesConfig {
    /// Route key and info for every fixed page, in a stable order.
    pub fn routes(&self) -> [(&'static str, &PageInfo); 5] {
        [
            ("index", &self.home),
            ("blog", &self.blog),
            ("projects", &self.projects),
            ("about", &self.about),
            ("404", &self.not_found),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_listing_defaults() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"T\"\ndescription = \"D\"").unwrap();
        assert_eq!(config.listing.posts_on_homepage, 5);
        assert_eq!(config.listing.projects_on_homepage, 3);
    }

    #[test]
    fn test_pages_override_one() {
        let config = r#"
            [base]
            title = "T"
            description = "D"

            [pages.about]
            title = "Who"
            description = "Me."
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.pages.about, PageInfo::new("Who", "Me."));
        assert_eq!(config.pages.not_found.title, "404");
    }

    #[test]
    fn test_routes_order() {
        let pages = PagesConfig::default();
        let keys: Vec<_> = pages.routes().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["index", "blog", "projects", "about", "404"]);
    }

    #[test]
    fn test_page_info_requires_both_fields() {
        let config = r#"
            [base]
            title = "T"
            description = "D"

            [pages.about]
            title = "Who"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
