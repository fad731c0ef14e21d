//! Errors raised while loading or checking `folio.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not a valid folio config")]
    Parse(PathBuf, #[source] toml::de::Error),

    /// A setting that parsed fine but cannot be used, e.g. `[base.url]` missing
    /// while the feed is enabled.
    #[error("[{key}] {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    pub(super) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}
