//! Validation report types: results, severity levels, bucket summaries, and aggregation.

use moaz_sitemap::{Bucket, ChangeFrequency};

/// Severity level of a validation check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// A non-fatal observation (e.g. an empty bucket).
    Warning,
    /// A structural error; fails the run.
    Failure,
}

/// A single validation check result.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: &'static str,
    /// Bucket the result concerns, if any.
    pub bucket: Option<Bucket>,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending URLs or other detail lines.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: &'static str, bucket: Option<Bucket>, message: String, severity: Severity) -> Self {
        Self {
            validator,
            bucket,
            message,
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: &'static str, bucket: Option<Bucket>, message: impl Into<String>) -> Self {
        Self::new(validator, bucket, message.into(), Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: &'static str, bucket: Option<Bucket>, message: impl Into<String>) -> Self {
        Self::new(validator, bucket, message.into(), Severity::Failure)
    }

    /// Creates a failure result listing the offending items.
    pub fn fail_with_details(
        validator: &'static str,
        bucket: Option<Bucket>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, bucket, message)
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: &'static str, bucket: Option<Bucket>, message: impl Into<String>) -> Self {
        Self::new(validator, bucket, message.into(), Severity::Warning)
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    /// Returns true if this result is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Per-bucket counts and defaults shown at the top of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSummary {
    /// The bucket.
    pub bucket: Bucket,
    /// URLs collected.
    pub url_count: usize,
    /// Sitemap pages produced.
    pub page_count: usize,
    /// Default priority from the bucket table.
    pub default_priority: f32,
    /// Default change frequency from the bucket table.
    pub default_change_frequency: ChangeFrequency,
    /// First few URLs, shown when the run is clean.
    pub samples: Vec<String>,
}

/// Aggregated report from all validators.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// One summary per bucket, in bucket order.
    pub buckets: Vec<BucketSummary>,
    /// All individual results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.buckets.extend(other.buckets);
        self.results.extend(other.results);
    }

    /// Structural errors, in the order they were found.
    pub fn errors(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Non-fatal observations.
    pub fn warnings(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_warning())
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.errors().count()
    }

    /// Returns true if no check failed. Warnings do not count.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
