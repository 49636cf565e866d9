//! `moaz-sitemap-validate` — Checks the sitemap the site would publish right now.
//!
//! Re-walks the page tree, re-collects and re-paginates every bucket, then
//! prints per-bucket counts, warnings, errors and (when clean) sample URLs.
//! Configuration comes from `SITEMAP_*` environment variables only.
//!
//! **Usage:**
//! ```
//! moaz-sitemap-validate
//! ```
//!
//! Exits 1 if any structural error is found or the run itself fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::panic;
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use moaz_conformance::render::render_text;
use moaz_conformance::run_all;
use moaz_sitemap::SiteConfig;
use tracing::error;

/// Validate the moazhaider.com sitemap.
#[derive(Parser)]
#[command(
    name = "moaz-sitemap-validate",
    version,
    about = "Validate sitemap URLs, buckets and pagination for moazhaider.com"
)]
struct Args {}

/// Runs validation and returns whether it passed.
fn validate() -> Result<bool> {
    let config = SiteConfig::load(None).context("Invalid sitemap configuration")?;
    let report = run_all(&config)?;
    print!("{}", render_text(&config, &report));
    Ok(report.all_passed())
}

fn main() {
    let _ = Args::parse();
    moaz_clients::init_tracing();

    let outcome = panic::catch_unwind(validate)
        .unwrap_or_else(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(anyhow!("validator crashed: {reason}"))
        });

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            error!(error = %format!("{err:#}"), "sitemap validation could not complete");
            eprintln!("Sitemap validation FAILED to run: {err:#}");
            process::exit(1);
        }
    }
}
