// Trainer / Classifier capabilities — the seam between the core and any
// driver (CLI, batch job, UI).
//
// Drivers call these and then read results back; the core has no knowledge
// of how anything is displayed.

use std::path::Path;

use anyhow::Result;

use crate::models::{ClassifiedEmail, ScoredDocument};

/// Builds training state from a labeled directory tree.
pub trait Trainer {
    /// Ingest `<root>/ham` and `<root>/spam` and rebuild the probability
    /// table. Each call replaces all prior training state.
    fn train(&mut self, root: &Path);

    /// P(spam | word) from the current table; 0.0 for unknown words.
    fn word_probability(&self, word: &str) -> f64;
}

/// Scores a labeled test tree and reports on the results.
pub trait Classifier {
    /// Score `<root>/ham` and `<root>/spam`, replacing any previous results.
    fn classify(&mut self, root: &Path);

    /// Results of the last classification pass, in canonical order.
    fn scored_documents(&self) -> &[ScoredDocument];

    /// Display rows for the last pass.
    fn classified_emails(&self) -> Vec<ClassifiedEmail> {
        self.scored_documents()
            .iter()
            .map(ClassifiedEmail::from)
            .collect()
    }

    /// Fails if the last pass scored no documents.
    fn accuracy(&self) -> Result<f64> {
        super::metrics::accuracy(self.scored_documents())
    }

    fn precision(&self) -> f64 {
        super::metrics::precision(self.scored_documents())
    }

    fn recall(&self) -> f64 {
        super::metrics::recall(self.scored_documents())
    }
}
