// Training-corpus ingestion.
//
// Walks `<root>/ham` and `<root>/spam`, tokenizes every regular file and
// counts, per label, how many documents contain each word. Tokenization runs
// in parallel; the per-document word sets are then folded into the label's
// frequency table, which is order-independent.
//
// Document totals count every regular file in the label directory, including
// ones that fail to read. An unreadable file therefore still raises the
// smoothing denominator while contributing no words.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::tokenize::{tokenize_file, WordSet};
use crate::models::Label;

/// Word -> number of distinct documents (within one label) containing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDocFrequency {
    counts: HashMap<String, u32>,
}

impl WordDocFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one document's unique words.
    pub fn add_document(&mut self, words: &WordSet) {
        for word in words {
            *self.counts.entry(word.clone()).or_insert(0) += 1;
        }
    }

    /// Documents containing `word`, 0 if never seen.
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

impl FromIterator<(String, u32)> for WordDocFrequency {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Training statistics for one label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCorpus {
    pub frequencies: WordDocFrequency,
    /// Regular files found in the label directory
    pub document_count: u32,
}

/// Immutable snapshot of one training pass: both frequency tables and
/// both document counts. Retraining produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainedModel {
    pub ham: LabelCorpus,
    pub spam: LabelCorpus,
}

impl TrainedModel {
    pub fn corpus(&self, label: Label) -> &LabelCorpus {
        match label {
            Label::Ham => &self.ham,
            Label::Spam => &self.spam,
        }
    }

    /// Distinct words seen across both labels.
    pub fn vocabulary_size(&self) -> usize {
        let ham_only = self
            .ham
            .frequencies
            .iter()
            .filter(|(w, _)| !self.spam.frequencies.contains(w))
            .count();
        self.spam.frequencies.len() + ham_only
    }

    pub fn total_documents(&self) -> u32 {
        self.ham.document_count + self.spam.document_count
    }
}

/// List the regular files of a label directory, sorted by file name.
///
/// A missing directory yields an empty list. Subdirectories and other
/// non-regular entries are skipped.
pub fn list_documents(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Label directory not present, skipping");
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Failed to list label directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files
}

/// Ingest a single label directory.
pub fn ingest_label_dir(dir: &Path) -> LabelCorpus {
    let files = list_documents(dir);

    let word_sets: Vec<WordSet> = files.par_iter().map(|f| tokenize_file(f)).collect();

    let mut frequencies = WordDocFrequency::new();
    for words in &word_sets {
        frequencies.add_document(words);
    }

    LabelCorpus {
        frequencies,
        document_count: files.len() as u32,
    }
}

/// Ingest a training root containing `ham/` and `spam/` subdirectories.
///
/// Either subdirectory may be absent; its corpus is then empty with a
/// document count of 0.
pub fn ingest(root: &Path) -> TrainedModel {
    let mut model = TrainedModel::default();

    for label in Label::ALL {
        let corpus = ingest_label_dir(&root.join(label.dir_name()));
        info!(
            label = label.as_str(),
            documents = corpus.document_count,
            words = corpus.frequencies.len(),
            "Ingested label directory"
        );
        match label {
            Label::Ham => model.ham = corpus,
            Label::Spam => model.spam = corpus,
        }
    }

    model
}
