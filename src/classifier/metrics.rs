// Evaluation metrics over a batch of scored documents.
//
// A document is predicted spam when its probability is strictly above 0.5.
// Accuracy is undefined for an empty batch and reported as an error;
// precision with no positive predictions is defined as 0.0.

use anyhow::Result;
use serde::Serialize;

use crate::models::ScoredDocument;

/// Confusion-matrix counts, with spam as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Confusion {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl Confusion {
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }
}

/// Tally predictions against ground truth.
pub fn confusion(docs: &[ScoredDocument]) -> Confusion {
    let mut c = Confusion::default();
    for doc in docs {
        match (doc.predicted_spam(), doc.actual.is_spam()) {
            (true, true) => c.true_positives += 1,
            (true, false) => c.false_positives += 1,
            (false, false) => c.true_negatives += 1,
            (false, true) => c.false_negatives += 1,
        }
    }
    c
}

/// Fraction of documents whose prediction matches the ground truth.
///
/// Fails on an empty batch.
pub fn accuracy(docs: &[ScoredDocument]) -> Result<f64> {
    if docs.is_empty() {
        anyhow::bail!("Cannot compute accuracy: no documents were classified");
    }
    let c = confusion(docs);
    Ok(c.correct() as f64 / c.total() as f64)
}

/// True positives over all spam predictions; 0.0 if nothing was predicted
/// spam.
pub fn precision(docs: &[ScoredDocument]) -> f64 {
    let c = confusion(docs);
    let predicted = c.true_positives + c.false_positives;
    if predicted == 0 {
        return 0.0;
    }
    c.true_positives as f64 / predicted as f64
}

/// True positives over all actual spam; 0.0 if there is no spam.
pub fn recall(docs: &[ScoredDocument]) -> f64 {
    let c = confusion(docs);
    let actual = c.true_positives + c.false_negatives;
    if actual == 0 {
        return 0.0;
    }
    c.true_positives as f64 / actual as f64
}
