//! Error type for configuration and pagination failures.
//!
//! Discovery and collection never fail on missing data; the only errors this
//! crate raises are programmer or deployment misconfiguration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the sitemap library.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// A configuration value is unusable (zero page size, relative domain, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The config file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::SiteConfig`].
    #[error("cannot parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for sitemap library operations.
pub type Result<T> = std::result::Result<T, SitemapError>;
