//! Seed outcome accounting and progress reporting.

use crate::repo::StoreError;
use serde::Serialize;
use std::io::Write;

const BANNER_WIDTH: usize = 60;

/// Seed batch, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Batch {
    Categories,
    TrainingCenters,
    Athletes,
}

impl Batch {
    /// Plural label used in progress lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::TrainingCenters => "training centers",
            Self::Athletes => "athletes",
        }
    }

    /// Singular label used in per-record lines.
    pub fn record_label(self) -> &'static str {
        match self {
            Self::Categories => "category",
            Self::TrainingCenters => "training center",
            Self::Athletes => "athlete",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::TrainingCenters => "Training Centers",
            Self::Athletes => "Athletes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    /// Identifying name of the record that failed.
    pub record: String,
    pub message: String,
}

/// Outcome counts for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub batch: Batch,
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn new(batch: Batch) -> Self {
        Self {
            batch,
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, record: &str, err: &StoreError) {
        self.attempted += 1;
        self.failures.push(RecordFailure {
            record: record.to_string(),
            message: err.to_string(),
        });
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Per-batch outcome of a full seed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub categories: BatchReport,
    pub training_centers: BatchReport,
    pub athletes: BatchReport,
}

impl SeedSummary {
    pub fn batches(&self) -> [&BatchReport; 3] {
        [&self.categories, &self.training_centers, &self.athletes]
    }

    pub fn total_succeeded(&self) -> usize {
        self.batches().iter().map(|report| report.succeeded).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.batches().iter().map(|report| report.failures.len()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.batches().iter().all(|report| report.is_complete())
    }
}

/// Observer for seed progress. All hooks default to no-ops.
pub trait SeedReporter {
    fn run_started(&mut self) {}
    fn batch_started(&mut self, _batch: Batch) {}
    fn record_succeeded(&mut self, _batch: Batch, _detail: &str) {}
    fn record_failed(&mut self, _batch: Batch, _record: &str, _err: &StoreError) {}
    fn batch_finished(&mut self, _report: &BatchReport) {}
    fn run_finished(&mut self, _summary: &SeedSummary) {}
}

/// Reporter that discards all progress.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl SeedReporter for SilentReporter {}

/// Human-readable progress writer.
///
/// Write failures are ignored; reporting never affects seed outcomes.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn rule(&mut self) {
        self.line(&"=".repeat(BANNER_WIDTH));
    }
}

impl<W: Write> SeedReporter for ConsoleReporter<W> {
    fn run_started(&mut self) {
        self.rule();
        self.line("POPULATING WORKOUT API DATABASE");
        self.rule();
    }

    fn batch_started(&mut self, batch: Batch) {
        self.line(&format!("\n=== Inserting {} ===", batch.title()));
    }

    fn record_succeeded(&mut self, batch: Batch, detail: &str) {
        self.line(&format!("  ✓ Added {}: {detail}", batch.record_label()));
    }

    fn record_failed(&mut self, batch: Batch, record: &str, err: &StoreError) {
        self.line(&format!(
            "  ✗ Failed to add {} {record}: {err}",
            batch.record_label()
        ));
    }

    fn batch_finished(&mut self, report: &BatchReport) {
        self.line(&format!(
            "✓ Inserted {}/{} {}",
            report.succeeded,
            report.attempted,
            report.batch.label()
        ));
    }

    fn run_finished(&mut self, summary: &SeedSummary) {
        self.line("");
        self.rule();
        self.line("✓ DATABASE POPULATION COMPLETE!");
        self.rule();
        self.line("\nSummary:");
        for report in summary.batches() {
            self.line(&format!(
                "  - {}: {}/{}",
                report.batch.title(),
                report.succeeded,
                report.attempted
            ));
        }
        self.rule();
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::{Batch, BatchReport, ConsoleReporter, SeedReporter, SeedSummary};
    use crate::repo::StoreError;

    fn summary_with_one_failure() -> SeedSummary {
        let mut categories = BatchReport::new(Batch::Categories);
        categories.record_success();
        categories.record_failure(
            "RX",
            &StoreError::Duplicate {
                entity: "category",
                key: "RX".to_string(),
            },
        );
        SeedSummary {
            categories,
            training_centers: BatchReport::new(Batch::TrainingCenters),
            athletes: BatchReport::new(Batch::Athletes),
        }
    }

    #[test]
    fn batch_report_counts_attempts_and_failures() {
        let summary = summary_with_one_failure();
        assert_eq!(summary.categories.attempted, 2);
        assert_eq!(summary.categories.succeeded, 1);
        assert_eq!(summary.total_failed(), 1);
        assert!(!summary.is_complete());
        assert!(summary.categories.failures[0].message.contains("already exists"));
    }

    #[test]
    fn console_reporter_prints_running_counts_and_summary() {
        let summary = summary_with_one_failure();
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.batch_finished(&summary.categories);
        reporter.run_finished(&summary);

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("✓ Inserted 1/2 categories"));
        assert!(output.contains("  - Categories: 1/2"));
        assert!(output.contains("  - Athletes: 0/0"));
    }
}
