// SpamDetector — the stateful facade a driver talks to.
//
// Holds the latest training snapshot, the probability table derived from
// it, and the results of the latest classification pass. Training always
// rebuilds the table, so scoring can never see stale probabilities.

use std::path::Path;

use tracing::info;

use crate::classifier::probability::{
    compute_word_probabilities, ProbabilityTable, SmoothingParams,
};
use crate::classifier::scoring;
use crate::classifier::traits::{Classifier, Trainer};
use crate::corpus::ingest::{self, TrainedModel};
use crate::models::ScoredDocument;

#[derive(Debug, Default)]
pub struct SpamDetector {
    params: SmoothingParams,
    model: TrainedModel,
    table: ProbabilityTable,
    scored: Vec<ScoredDocument>,
}

impl SpamDetector {
    pub fn new(params: SmoothingParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Replace training state with an already-built snapshot.
    pub fn load_model(&mut self, model: TrainedModel) {
        self.table = compute_word_probabilities(&model, &self.params);
        self.model = model;
        info!(
            vocabulary = self.table.len(),
            ham_documents = self.model.ham.document_count,
            spam_documents = self.model.spam.document_count,
            "Computed word probabilities"
        );
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    pub fn params(&self) -> &SmoothingParams {
        &self.params
    }

    /// Score one text against the current table.
    pub fn score_text(&self, text: &str) -> f64 {
        scoring::score_text(&self.table, text)
    }

    /// Score one file against the current table.
    pub fn score_file(&self, path: &Path) -> f64 {
        scoring::score_file(&self.table, path)
    }
}

impl Trainer for SpamDetector {
    fn train(&mut self, root: &Path) {
        info!(root = %root.display(), "Training");
        self.load_model(ingest::ingest(root));
    }

    fn word_probability(&self, word: &str) -> f64 {
        self.table.word_probability(word)
    }
}

impl Classifier for SpamDetector {
    fn classify(&mut self, root: &Path) {
        info!(root = %root.display(), "Classifying");
        self.scored = scoring::classify_directory(&self.table, root);
    }

    fn scored_documents(&self) -> &[ScoredDocument] {
        &self.scored
    }
}
