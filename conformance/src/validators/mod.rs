//! Sitemap validators. Each takes the freshly collected URLs and returns a report.

pub mod coverage;
pub mod duplicates;
pub mod pagination;
pub mod partition;
pub mod url_shape;
