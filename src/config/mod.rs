//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)             |
//! | `[build]`   | Paths, RSS feed, reading time                  |
//! | `[listing]` | Homepage slice sizes                           |
//! | `[pages]`   | Fixed pages that get Open Graph cards          |
//! | `[extra]`   | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//!
//! [build.rss]
//! enable = true
//!
//! [listing]
//! posts_on_homepage = 5
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod pages;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use pages::{ListingConfig, PagesConfig};

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Homepage listing sizes
    #[serde(default)]
    pub listing: ListingConfig,

    /// Fixed pages
    #[serde(default)]
    pub pages: PagesConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        let config = toml::from_str(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Directory the listing/tag/OG JSON files are written to.
    pub fn data_dir(&self) -> PathBuf {
        self.build.output.join(&self.build.data)
    }

    /// Absolute feed output path.
    pub fn rss_path(&self) -> PathBuf {
        self.build.output.join(&self.build.rss.path)
    }

    /// Join a site-relative link onto `[base].url`.
    ///
    /// Returns `None` when no base URL is configured.
    pub fn absolute_url(&self, link: &str) -> Option<String> {
        let base = self.base.url.as_deref()?.trim_end_matches('/');
        let link = link.trim_start_matches('/');
        Some(format!("{base}/{link}"))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        if let Some(url) = cli.base_url() {
            self.base.url = Some(url.clone());
        }

        if let Commands::Build { clean, rss, .. } = &cli.command {
            self.build.clean |= *clean;
            Self::update_option(&mut self.build.rss.enable, rss.as_ref());
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration after CLI overrides are applied
    pub fn validate(&self) -> Result<()> {
        if self.build.rss.enable && self.base.url.is_none() {
            bail!(ConfigError::invalid("base.url", "is required for RSS generation"));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::invalid("base.url", "must start with http:// or https://"));
        }

        if !self.build.content.is_dir() {
            bail!(ConfigError::invalid(
                "build.content",
                format!("`{}` is not a directory", self.build.content.display())
            ));
        }

        if self.build.clean {
            self.check_clean_target()?;
        }

        if self.build.reading.words_per_minute == 0 {
            bail!(ConfigError::invalid("build.reading.words_per_minute", "must be greater than 0"));
        }

        if self.listing.posts_on_homepage == 0 {
            bail!(ConfigError::invalid("listing.posts_on_homepage", "must be greater than 0"));
        }
        if self.listing.projects_on_homepage == 0 {
            bail!(ConfigError::invalid("listing.projects_on_homepage", "must be greater than 0"));
        }

        if self.build.rss.path.is_absolute() {
            bail!(ConfigError::invalid("build.rss.path", "must be relative to [build.output]"));
        }
        if self.build.data.is_absolute() {
            bail!(ConfigError::invalid("build.data", "must be relative to [build.output]"));
        }

        Ok(())
    }

    /// `clean` wipes `[build.output]`, so it must not hold the project or its content.
    fn check_clean_target(&self) -> Result<()> {
        let output = Self::normalize_path(&self.build.output);
        let root = Self::normalize_path(self.get_root());
        let content = Self::normalize_path(&self.build.content);

        if root.starts_with(&output) {
            bail!(ConfigError::invalid(
                "build.output",
                format!("`{}` contains the project root and cannot be cleaned", output.display())
            ));
        }
        if content.starts_with(&output) || output.starts_with(&content) {
            bail!(ConfigError::invalid(
                "build.output",
                format!("`{}` overlaps [build.content] and cannot be cleaned", output.display())
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn valid_config(dir: &TempDir) -> SiteConfig {
        fs::create_dir_all(dir.path().join("content")).unwrap();
        let mut config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"
            url = "https://example.com"
        "#,
        )
        .unwrap();
        config.set_root(dir.path());
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("public");
        config
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(
            &path,
            "[base]\ntitle = \"My Blog\"\ndescription = \"A test blog\"\nauthor = \"Test Author\"\n",
        )
        .unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.author, "Test Author");
    }

    #[test]
    fn test_from_path_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[base\ntitle = \"My Blog\"").unwrap();

        let err = SiteConfig::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("is not a valid folio config"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config file"));
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_absolute_url() {
        let mut config = SiteConfig::default();
        assert_eq!(config.absolute_url("/blog/a/"), None);

        config.base.url = Some("https://example.com/".into());
        assert_eq!(
            config.absolute_url("/blog/a/").as_deref(),
            Some("https://example.com/blog/a/")
        );

        config.base.url = Some("https://example.com/sub".into());
        assert_eq!(
            config.absolute_url("/projects/b/").as_deref(),
            Some("https://example.com/sub/projects/b/")
        );
    }

    #[test]
    fn test_output_paths() {
        let mut config = SiteConfig::default();
        config.build.output = PathBuf::from("/site/public");
        assert_eq!(config.rss_path(), PathBuf::from("/site/public/rss.xml"));
        assert_eq!(config.data_dir(), PathBuf::from("/site/public/_data"));
    }

    #[test]
    fn test_update_with_cli() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "folio",
            "--root",
            root,
            "--output",
            "dist",
            "build",
            "--rss",
            "false",
            "--clean",
            "--base-url",
            "https://override.dev",
        ])
        .unwrap();

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.build.content, root.join("content"));
        assert!(!config.build.rss.enable);
        assert!(config.build.clean);
        assert_eq!(config.base.url.as_deref(), Some("https://override.dev"));
    }

    #[test]
    fn test_validate_ok() {
        let dir = TempDir::new().unwrap();
        assert!(valid_config(&dir).validate().is_ok());
    }

    #[test]
    fn test_validate_rss_requires_url() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.base.url = None;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.url] is required"));

        config.build.rss.enable = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_url_scheme() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.base.url = Some("example.com".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.build.content = dir.path().join("nope");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_clean_separate_output() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.build.clean = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_clean_refuses_project_root() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.build.clean = true;
        config.build.output = dir.path().to_path_buf();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("[build.output]"));
        assert!(dir.path().join("content").exists());

        // harmless without `clean`
        config.build.clean = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_clean_refuses_content_overlap() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.build.clean = true;

        config.build.output = dir.path().join("content");
        assert!(config.validate().is_err());

        config.build.output = dir.path().join("content/blog");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_sizes() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.listing.posts_on_homepage = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config(&dir);
        config.build.reading.words_per_minute = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extra_fields() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test blog"

            [extra]
            custom_field = "custom_value"
            number_field = 42
            [extra.social]
            github = "username"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
        let social = config.extra.get("social").and_then(|v| v.as_table()).unwrap();
        assert_eq!(social.get("github").and_then(|v| v.as_str()), Some("username"));
    }

    #[test]
    fn test_full_config_all_sections() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "My Blog"
            description = "A personal blog"
            author = "Alice"
            email = "alice@example.com"
            url = "https://myblog.com"

            [build]
            content = "src/content"
            output = "dist"
            clean = true

            [build.rss]
            enable = true
            path = "feed.xml"
            stylesheet = "/feed.xsl"

            [build.reading]
            words_per_minute = 220

            [listing]
            posts_on_homepage = 10
            projects_on_homepage = 4

            [pages.home]
            title = "Home"
            description = "Hi."
        "#,
        )
        .unwrap();

        assert_eq!(config.base.email, "alice@example.com");
        assert_eq!(config.build.content, PathBuf::from("src/content"));
        assert!(config.build.clean);
        assert_eq!(config.build.rss.stylesheet.as_deref(), Some("/feed.xsl"));
        assert_eq!(config.build.reading.words_per_minute, 220);
        assert_eq!(config.listing.posts_on_homepage, 10);
        assert_eq!(config.pages.home.description, "Hi.");
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"

            [deploy]
            provider = "github"
        "#,
        );
        assert!(result.is_err());
    }
}
