//! Human-readable rendering of a [`ConformanceReport`].

use std::fmt::Write;

use moaz_sitemap::{index_location, robots_location, SiteConfig};

use crate::report::{ConformanceReport, TestResult};

/// Renders the full text report printed by the validation CLI.
///
/// Sample URLs and entry points are only listed when there are no errors.
pub fn render_text(config: &SiteConfig, report: &ConformanceReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sitemap Validation Report");
    let _ = writeln!(out, "=========================");
    let _ = writeln!(out, "Domain:    {}", config.domain);
    let _ = writeln!(out, "App root:  {}", config.app_root.display());
    let _ = writeln!(out, "Page size: {}", config.page_size);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>6} {:>9} {:<10}",
        "bucket", "urls", "pages", "priority", "changefreq"
    );
    for summary in &report.buckets {
        let _ = writeln!(
            out,
            "{:<12} {:>6} {:>6} {:>9.1} {:<10}",
            summary.bucket.as_str(),
            summary.url_count,
            summary.page_count,
            summary.default_priority,
            summary.default_change_frequency.as_str()
        );
    }
    let total: usize = report.buckets.iter().map(|b| b.url_count).sum();
    let _ = writeln!(out, "{:<12} {:>6}", "total", total);
    let _ = writeln!(out);

    let warnings: Vec<&TestResult> = report.warnings().collect();
    let errors: Vec<&TestResult> = report.errors().collect();

    let _ = writeln!(out, "Warnings ({}):", warnings.len());
    for warning in &warnings {
        write_result(&mut out, "WARN", warning);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Errors ({}):", errors.len());
    for error in &errors {
        write_result(&mut out, "FAIL", error);
    }
    let _ = writeln!(out);

    if errors.is_empty() {
        let _ = writeln!(out, "Example URLs:");
        for summary in report.buckets.iter().filter(|b| !b.samples.is_empty()) {
            let _ = writeln!(out, "  {}:", summary.bucket);
            for sample in &summary.samples {
                let _ = writeln!(out, "    {sample}");
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Entry points:");
        let _ = writeln!(out, "  Sitemap index: {}", index_location(config));
        let _ = writeln!(out, "  Robots:        {}", robots_location(config));
        let _ = writeln!(out);
        let _ = writeln!(out, "Validation PASSED.");
    } else {
        let _ = writeln!(out, "Validation FAILED: {} error(s).", errors.len());
    }

    out
}

fn write_result(out: &mut String, status: &str, result: &TestResult) {
    let scope = result
        .bucket
        .map(|b| format!("{}/{}", result.validator, b))
        .unwrap_or_else(|| result.validator.to_string());
    let _ = writeln!(out, "  [{status}] {scope} — {}", result.message);
    for detail in &result.details {
        let _ = writeln!(out, "         {detail}");
    }
}

#[cfg(test)]
mod tests {
    use moaz_sitemap::{Bucket, ChangeFrequency};

    use super::*;
    use crate::report::BucketSummary;

    fn summary(bucket: Bucket, urls: usize) -> BucketSummary {
        BucketSummary {
            bucket,
            url_count: urls,
            page_count: 1,
            default_priority: 0.9,
            default_change_frequency: ChangeFrequency::Weekly,
            samples: (0..urls.min(3))
                .map(|i| format!("https://moazhaider.com/{bucket}/{i}"))
                .collect(),
        }
    }

    #[test]
    fn clean_report_lists_samples_and_entry_points() {
        let config = SiteConfig::default();
        let mut report = ConformanceReport::new();
        report.buckets = vec![summary(Bucket::Services, 5), summary(Bucket::Cities, 0)];
        report.push(TestResult::warn("coverage", Some(Bucket::Cities), "Bucket `cities` has no URLs"));

        let text = render_text(&config, &report);
        assert!(text.contains("services          5      1       0.9 weekly"));
        assert!(text.contains("Warnings (1):"));
        assert!(text.contains("[WARN] coverage/cities"));
        assert!(text.contains("Errors (0):"));
        assert!(text.contains("    https://moazhaider.com/services/0"));
        assert!(text.contains("Sitemap index: https://moazhaider.com/sitemap.xml"));
        assert!(text.contains("Robots:        https://moazhaider.com/robots.txt"));
        assert!(text.ends_with("Validation PASSED.\n"));
    }

    #[test]
    fn failing_report_hides_samples() {
        let config = SiteConfig::default();
        let mut report = ConformanceReport::new();
        report.buckets = vec![summary(Bucket::Pages, 2)];
        report.push(TestResult::fail_with_details(
            "url/shape",
            Some(Bucket::Pages),
            "1 malformed URL(s)",
            vec!["https://moazhaider.com/a/: has a trailing slash".to_string()],
        ));

        let text = render_text(&config, &report);
        assert!(text.contains("[FAIL] url/shape/pages — 1 malformed URL(s)"));
        assert!(text.contains("https://moazhaider.com/a/: has a trailing slash"));
        assert!(!text.contains("Example URLs:"));
        assert!(!text.contains("Entry points:"));
        assert!(text.ends_with("Validation FAILED: 1 error(s).\n"));
    }
}
