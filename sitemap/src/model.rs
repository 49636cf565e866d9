//! Data model types for the sitemap generator.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFrequency {
    /// Changes on every access.
    Always,
    /// Hourly.
    Hourly,
    /// Daily.
    Daily,
    /// Weekly.
    Weekly,
    /// Monthly.
    Monthly,
    /// Yearly.
    Yearly,
    /// Archived content.
    Never,
}

impl ChangeFrequency {
    /// Returns the sitemap protocol keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named partition of the site's URLs.
///
/// Every discovered route belongs to exactly one bucket, decided by its
/// top-level path segment. Declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    /// Everything not owned by another bucket, including `/`.
    Pages,
    /// Blog posts under `/blog`.
    Blogs,
    /// Service pages under `/services`.
    Services,
    /// Platform pages under `/platforms`.
    Platforms,
    /// Industry pages under `/industries`.
    Industries,
    /// Country landing pages under `/countries`.
    Countries,
    /// City landing pages under `/cities`.
    Cities,
}

impl Bucket {
    /// All buckets in output order.
    pub const ALL: [Bucket; 7] = [
        Bucket::Pages,
        Bucket::Blogs,
        Bucket::Services,
        Bucket::Platforms,
        Bucket::Industries,
        Bucket::Countries,
        Bucket::Cities,
    ];

    /// Returns the bucket name used in sitemap file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Blogs => "blogs",
            Self::Services => "services",
            Self::Platforms => "platforms",
            Self::Industries => "industries",
            Self::Countries => "countries",
            Self::Cities => "cities",
        }
    }

    /// Returns the static discovery and metadata table row for this bucket.
    pub fn spec(self) -> &'static BucketSpec {
        match self {
            Self::Pages => &PAGES,
            Self::Blogs => &BLOGS,
            Self::Services => &SERVICES,
            Self::Platforms => &PLATFORMS,
            Self::Industries => &INDUSTRIES,
            Self::Countries => &COUNTRIES,
            Self::Cities => &CITIES,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("unknown bucket: {s}"))
    }
}

/// Discovery source and default metadata for one bucket.
#[derive(Debug, PartialEq)]
pub struct BucketSpec {
    /// Subdirectory of the app root holding this bucket's pages.
    /// `None` means the app root itself, minus every other bucket's directory.
    pub source_dir: Option<&'static str>,
    /// Path prepended to each discovered route (empty for the site root).
    pub url_prefix: &'static str,
    /// Priority of every entry except the bucket's own index route.
    pub default_priority: f32,
    /// Priority override for the bucket's index route, if any.
    pub index_priority: Option<f32>,
    /// Change frequency of every entry.
    pub default_change_frequency: ChangeFrequency,
}

impl BucketSpec {
    /// Priority for a route relative to the bucket source (`/` is the index).
    pub fn priority_for(&self, route: &str) -> f32 {
        match self.index_priority {
            Some(p) if route == "/" => p,
            _ => self.default_priority,
        }
    }
}

static PAGES: BucketSpec = BucketSpec {
    source_dir: None,
    url_prefix: "",
    default_priority: 0.8,
    index_priority: Some(1.0),
    default_change_frequency: ChangeFrequency::Monthly,
};

static BLOGS: BucketSpec = BucketSpec {
    source_dir: Some("blog"),
    url_prefix: "/blog",
    default_priority: 0.8,
    index_priority: None,
    default_change_frequency: ChangeFrequency::Weekly,
};

static SERVICES: BucketSpec = BucketSpec {
    source_dir: Some("services"),
    url_prefix: "/services",
    default_priority: 0.9,
    index_priority: None,
    default_change_frequency: ChangeFrequency::Weekly,
};

static PLATFORMS: BucketSpec = BucketSpec {
    source_dir: Some("platforms"),
    url_prefix: "/platforms",
    default_priority: 0.9,
    index_priority: None,
    default_change_frequency: ChangeFrequency::Weekly,
};

static INDUSTRIES: BucketSpec = BucketSpec {
    source_dir: Some("industries"),
    url_prefix: "/industries",
    default_priority: 0.9,
    index_priority: None,
    default_change_frequency: ChangeFrequency::Weekly,
};

static COUNTRIES: BucketSpec = BucketSpec {
    source_dir: Some("countries"),
    url_prefix: "/countries",
    default_priority: 0.7,
    index_priority: None,
    default_change_frequency: ChangeFrequency::Monthly,
};

static CITIES: BucketSpec = BucketSpec {
    source_dir: Some("cities"),
    url_prefix: "/cities",
    default_priority: 0.7,
    index_priority: None,
    default_change_frequency: ChangeFrequency::Monthly,
};

/// One sitemap-eligible destination.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Absolute URL under the configured domain, no trailing slash except the bare root.
    pub location: String,
    /// Last modification day.
    pub last_modified: Option<NaiveDate>,
    /// Expected change frequency.
    pub change_frequency: Option<ChangeFrequency>,
    /// Priority in `[0.0, 1.0]`.
    pub priority: Option<f32>,
}

impl UrlEntry {
    /// Creates an entry with only a location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
        }
    }
}

/// Every bucket mapped to its ordered entries.
///
/// Always holds a (possibly empty) list for each bucket in [`Bucket::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct UrlCollection {
    buckets: BTreeMap<Bucket, Vec<UrlEntry>>,
}

impl UrlCollection {
    /// Creates a collection with every bucket present and empty.
    pub fn new() -> Self {
        Self {
            buckets: Bucket::ALL.into_iter().map(|b| (b, Vec::new())).collect(),
        }
    }

    /// Replaces the entries of a bucket.
    pub fn insert(&mut self, bucket: Bucket, entries: Vec<UrlEntry>) {
        self.buckets.insert(bucket, entries);
    }

    /// Returns the entries of a bucket.
    pub fn get(&self, bucket: Bucket) -> &[UrlEntry] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates buckets in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[UrlEntry])> {
        self.buckets.iter().map(|(b, e)| (*b, e.as_slice()))
    }

    /// Total number of entries across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl Default for UrlCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference to one generated sitemap file, listed in the sitemap index.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapIndexEntry {
    /// Absolute URL of the sitemap file.
    pub location: String,
    /// Last modification day of the newest entry in the file.
    pub last_modified: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_names_round_trip_through_from_str() {
        for bucket in Bucket::ALL {
            assert_eq!(bucket.as_str().parse::<Bucket>(), Ok(bucket));
        }
        assert!("blog".parse::<Bucket>().is_err());
    }

    #[test]
    fn only_pages_index_gets_top_priority() {
        assert_eq!(Bucket::Pages.spec().priority_for("/"), 1.0);
        assert_eq!(Bucket::Pages.spec().priority_for("/about"), 0.8);
        assert_eq!(Bucket::Services.spec().priority_for("/"), 0.9);
    }

    #[test]
    fn every_non_page_bucket_owns_a_source_dir() {
        for bucket in Bucket::ALL {
            let spec = bucket.spec();
            match bucket {
                Bucket::Pages => assert!(spec.source_dir.is_none()),
                _ => {
                    let dir = spec.source_dir.unwrap_or_default();
                    assert_eq!(spec.url_prefix, format!("/{dir}"));
                }
            }
        }
    }

    #[test]
    fn new_collection_has_every_bucket_empty() {
        let collection = UrlCollection::new();
        assert_eq!(collection.iter().count(), Bucket::ALL.len());
        assert_eq!(collection.total(), 0);
        assert!(collection.get(Bucket::Cities).is_empty());
    }
}
