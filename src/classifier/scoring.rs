// Document scoring — combining per-word probabilities into one spam
// likelihood.
//
// Each word's probability is clamped into [0.1, 0.9] so that no single word
// can dominate, then the log-odds are summed with a 1/sqrt(n) weight and
// passed through a logistic:
//
//   eta = sum over words of (ln(1 - p) - ln(p)) / sqrt(n)
//   P(spam) = 1 / (1 + e^eta)
//
// The square-root weight damps, but does not remove, the tendency of long
// documents to saturate. It is not the mean log-odds.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use super::probability::{ProbabilityTable, NEUTRAL_PROBABILITY};
use crate::corpus::ingest::list_documents;
use crate::corpus::tokenize::{tokenize, tokenize_file, WordSet};
use crate::models::{Label, ScoredDocument};

/// Lower bound applied to every word probability before scoring.
pub const MIN_WORD_PROBABILITY: f64 = 0.1;
/// Upper bound applied to every word probability before scoring.
pub const MAX_WORD_PROBABILITY: f64 = 0.9;

/// Spam probability of a document given its unique words.
///
/// An empty word set carries no evidence and scores exactly 0.5. Any
/// non-empty set scores strictly inside (0, 1).
pub fn score_words(table: &ProbabilityTable, words: &WordSet) -> f64 {
    if words.is_empty() {
        return NEUTRAL_PROBABILITY;
    }

    let normalization = (words.len() as f64).sqrt();

    let eta: f64 = words
        .iter()
        .map(|word| {
            let p = table
                .scoring_probability(word)
                .clamp(MIN_WORD_PROBABILITY, MAX_WORD_PROBABILITY);
            ((1.0 - p).ln() - p.ln()) / normalization
        })
        .sum();

    1.0 / (1.0 + eta.exp())
}

/// Score raw text.
pub fn score_text(table: &ProbabilityTable, text: &str) -> f64 {
    score_words(table, &tokenize(text))
}

/// Score a file on disk. An unreadable file scores as empty (0.5).
pub fn score_file(table: &ProbabilityTable, path: &Path) -> f64 {
    score_words(table, &tokenize_file(path))
}

/// Score every regular file in one label directory, in file-name order.
pub fn classify_label_dir(
    table: &ProbabilityTable,
    dir: &Path,
    actual: Label,
) -> Vec<ScoredDocument> {
    let files = list_documents(dir);

    files
        .par_iter()
        .map(|path| ScoredDocument {
            identifier: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            spam_probability: score_file(table, path),
            actual,
        })
        .collect()
}

/// Score a test root containing `ham/` and `spam/` subdirectories.
///
/// Ham documents come before spam documents; within a label, documents are
/// ordered by file name. Missing subdirectories contribute nothing.
pub fn classify_directory(table: &ProbabilityTable, root: &Path) -> Vec<ScoredDocument> {
    let mut scored = Vec::new();

    for label in Label::ALL {
        let dir = root.join(label.dir_name());
        let docs = classify_label_dir(table, &dir, label);
        debug!(label = label.as_str(), documents = docs.len(), "Scored label directory");
        scored.extend(docs);
    }

    info!(documents = scored.len(), "Classified test corpus");
    scored
}
