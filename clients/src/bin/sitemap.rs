//! `moaz-sitemap` — Generates the moazhaider.com sitemap files.
//!
//! **Outputs (`public/`):**
//! - `sitemap.xml` — Sitemap index listing every page file
//! - `sitemaps/<bucket>-<n>.xml` — One file per bucket page (at least one per bucket)
//! - `robots.txt` — Allows all crawlers and references the index
//!
//! **Usage:**
//! ```
//! moaz-sitemap [--out <path>] [--config <file>]
//! ```
//!
//! `SITEMAP_DOMAIN`, `SITEMAP_PAGE_SIZE`, `SITEMAP_APP_ROOT` and
//! `SITEMAP_LASTMOD` override the config file.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use moaz_sitemap::{generate, index_location, SiteConfig};

/// Generate the moazhaider.com sitemap files.
#[derive(Parser)]
#[command(
    name = "moaz-sitemap",
    version,
    about = "Generate sitemap.xml, paginated bucket sitemaps and robots.txt"
)]
struct Args {
    /// Output directory for the generated files.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Optional TOML config file (domain, page_size, app_root, page_markers, last_modified).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    moaz_clients::init_tracing();

    let config = SiteConfig::load(args.config.as_deref()).context("Invalid sitemap configuration")?;
    let summary = generate(&config, &args.out)?;

    println!("Sitemaps generated successfully.");
    println!("  URLs:   {}", summary.url_count);
    println!("  Files:  {} (+ index)", summary.file_count);
    println!("  Index:  {}", index_location(&config));
    println!("  Output: {}", args.out.display());

    Ok(())
}
