//! Site configuration threaded through discovery, collection and rendering.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `SITEMAP_*` environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::error::{Result, SitemapError};

/// Production domain of the site.
pub const DEFAULT_DOMAIN: &str = "https://moazhaider.com";

/// Maximum URLs per sitemap file.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Directory holding the page tree, relative to the working directory.
pub const DEFAULT_APP_ROOT: &str = "app";

/// File names that mark a directory as a route.
pub const DEFAULT_PAGE_MARKERS: [&str; 5] = ["page.tsx", "page.ts", "page.jsx", "page.js", "page.mdx"];

/// Where `<lastmod>` values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastModifiedSource {
    /// The day the sitemap is generated.
    #[default]
    GenerationDate,
    /// The modification day of the route's page marker file.
    ContentMtime,
}

impl std::str::FromStr for LastModifiedSource {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "generation-date" => Ok(Self::GenerationDate),
            "content-mtime" => Ok(Self::ContentMtime),
            other => Err(SitemapError::InvalidConfiguration(format!(
                "unknown lastmod source `{other}` (expected generation-date or content-mtime)"
            ))),
        }
    }
}

/// Configuration for one generation or validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Base URL without trailing slash, e.g. `https://moazhaider.com`.
    pub domain: String,
    /// Maximum URLs per sitemap file.
    pub page_size: usize,
    /// Root of the page tree.
    pub app_root: PathBuf,
    /// File names that mark a directory as a route.
    pub page_markers: Vec<String>,
    /// Source of `<lastmod>` values.
    pub last_modified: LastModifiedSource,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            app_root: PathBuf::from(DEFAULT_APP_ROOT),
            page_markers: DEFAULT_PAGE_MARKERS.iter().map(|m| m.to_string()).collect(),
            last_modified: LastModifiedSource::default(),
        }
    }
}

/// On-disk shape of the TOML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    domain: Option<String>,
    page_size: Option<i64>,
    app_root: Option<PathBuf>,
    page_markers: Option<Vec<String>>,
    last_modified: Option<LastModifiedSource>,
}

impl SiteConfig {
    /// Loads defaults, overlays `file` (if given) and the process environment,
    /// then validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any value
    /// fails [`SiteConfig::validate`].
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = file {
            config = config.with_file(path)?;
        }
        config
            .with_env(|key| std::env::var(key).ok())?
            .validate()
    }

    /// Overlays the keys present in a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::ConfigRead`] or [`SitemapError::ConfigParse`],
    /// or [`SitemapError::InvalidConfiguration`] for a non-positive page size.
    pub fn with_file(self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SitemapError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.with_toml(&content).map_err(|err| match err {
            SitemapError::ConfigParse { source, .. } => SitemapError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Overlays the keys present in a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::ConfigParse`] for malformed TOML or unknown keys,
    /// and [`SitemapError::InvalidConfiguration`] for a non-positive page size.
    pub fn with_toml(mut self, content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| SitemapError::ConfigParse {
            path: PathBuf::new(),
            source,
        })?;
        if let Some(domain) = file.domain {
            self.domain = domain;
        }
        if let Some(size) = file.page_size {
            self.page_size = positive_page_size(size)?;
        }
        if let Some(root) = file.app_root {
            self.app_root = root;
        }
        if let Some(markers) = file.page_markers {
            self.page_markers = markers;
        }
        if let Some(source) = file.last_modified {
            self.last_modified = source;
        }
        Ok(self)
    }

    /// Overlays `SITEMAP_DOMAIN`, `SITEMAP_PAGE_SIZE`, `SITEMAP_APP_ROOT` and
    /// `SITEMAP_LASTMOD` as returned by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::InvalidConfiguration`] if the page size is not a
    /// positive integer or the lastmod source is unknown.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(domain) = lookup("SITEMAP_DOMAIN") {
            self.domain = domain;
        }
        if let Some(raw) = lookup("SITEMAP_PAGE_SIZE") {
            let size: i64 = raw.trim().parse().map_err(|_| {
                SitemapError::InvalidConfiguration(format!("SITEMAP_PAGE_SIZE is not an integer: {raw}"))
            })?;
            self.page_size = positive_page_size(size)?;
        }
        if let Some(root) = lookup("SITEMAP_APP_ROOT") {
            self.app_root = PathBuf::from(root);
        }
        if let Some(source) = lookup("SITEMAP_LASTMOD") {
            self.last_modified = source.trim().parse()?;
        }
        Ok(self)
    }

    /// Checks every value and normalizes the domain to have no trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::InvalidConfiguration`] for a zero page size, an
    /// empty marker list, or a domain that is not a bare `http(s)` origin.
    pub fn validate(mut self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(SitemapError::InvalidConfiguration(
                "page size must be greater than zero".to_string(),
            ));
        }
        if self.page_markers.is_empty() {
            return Err(SitemapError::InvalidConfiguration(
                "at least one page marker file name is required".to_string(),
            ));
        }

        let domain = self.domain.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&domain).map_err(|e| {
            SitemapError::InvalidConfiguration(format!("domain `{domain}` is not a URL: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SitemapError::InvalidConfiguration(format!(
                "domain `{domain}` must use http or https"
            )));
        }
        if parsed.host_str().is_none()
            || parsed.path() != "/"
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(SitemapError::InvalidConfiguration(format!(
                "domain `{domain}` must be a bare origin without path, query or fragment"
            )));
        }
        self.domain = domain;
        Ok(self)
    }
}

fn positive_page_size(size: i64) -> Result<usize> {
    usize::try_from(size)
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| {
            SitemapError::InvalidConfiguration(format!("page size must be greater than zero, got {size}"))
        })
}
