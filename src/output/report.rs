// JSON evaluation report.
//
// Captures one classification pass: corpus sizes, metrics and every result
// row, so a run can be compared against later ones.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classifier::metrics::{self, Confusion};
use crate::corpus::ingest::TrainedModel;
use crate::models::{ClassifiedEmail, ScoredDocument};

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub smoothing: f64,
    pub train_ham_documents: u32,
    pub train_spam_documents: u32,
    pub vocabulary: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub confusion: Confusion,
    pub results: Vec<ClassifiedEmail>,
}

/// Assemble a report. Fails when there are no scored documents, since
/// accuracy is undefined.
pub fn build_report(
    model: &TrainedModel,
    smoothing: f64,
    docs: &[ScoredDocument],
) -> Result<Report> {
    Ok(Report {
        generated_at: Utc::now(),
        smoothing,
        train_ham_documents: model.ham.document_count,
        train_spam_documents: model.spam.document_count,
        vocabulary: model.vocabulary_size(),
        accuracy: metrics::accuracy(docs)?,
        precision: metrics::precision(docs),
        recall: metrics::recall(docs),
        confusion: metrics::confusion(docs),
        results: docs.iter().map(ClassifiedEmail::from).collect(),
    })
}

/// Write a report as pretty-printed JSON, creating parent directories.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
