use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use scoring::Document;

use crate::batch::BatchOutcome;

/// Renders per-document results and the run summary to stdout.
pub struct ResultFormatter {
    document_count: u64,
}

impl ResultFormatter {
    pub fn new() -> Self {
        Self { document_count: 0 }
    }

    pub fn display_document(&mut self, document: &Document) {
        self.document_count += 1;

        println!("\n{}", "=".repeat(80));
        println!("RESULT #{}", self.document_count);
        println!("{}\t{}", document.id(), document.text());
        println!("{}", "-".repeat(80));

        for window in document.windows().values() {
            println!("{}", window);
        }

        if let Some(overall) = document.overall_sentiment() {
            let tag = if overall > 0.0 { "+" } else { "-" };
            println!("Tag: {}", tag);
            println!("Overall score: {:.4}", overall);
        }
    }

    pub fn display_summary(&self, outcome: &BatchOutcome) {
        println!("\n{}", "=".repeat(80));
        println!(
            "Total posts: {}; relevant posts: {}; skipped: {}",
            outcome.total,
            outcome.relevant_count(),
            outcome.skipped
        );
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable form of a full batch run.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total_posts: usize,
    pub relevant_posts: usize,
    pub skipped_posts: usize,
    pub documents: Vec<Document>,
}

impl BatchReport {
    /// Builds the report from a finished batch; only relevant documents
    /// are included, in input order.
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        Self {
            generated_at: Utc::now(),
            total_posts: outcome.total,
            relevant_posts: outcome.relevant_count(),
            skipped_posts: outcome.skipped,
            documents: outcome.relevant().cloned().collect(),
        }
    }
}

pub fn write_json_report(path: &Path, report: &BatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("cannot write report to {}", path.display()))?;
    info!("JSON report saved to: {}", path.display());
    Ok(())
}
