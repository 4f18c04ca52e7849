// Per-word spam probabilities via smoothed Bayes' rule.
//
// For every word seen in training:
//
//   P(w|spam) = (spam_docs(w) + 1) / (num_spam_docs + K)
//   P(w|ham)  = (ham_docs(w)  + 1) / (num_ham_docs  + K)
//   P(spam|w) = P(w|spam) / (P(w|spam) + P(w|ham))
//
// K is large relative to typical corpora, which pulls rare-word ratios
// toward 0.5. The table is a pure function of a TrainedModel and is rebuilt
// wholesale, never merged.

use std::collections::HashMap;

use anyhow::Result;

use crate::corpus::ingest::TrainedModel;

/// Default smoothing constant.
pub const DEFAULT_SMOOTHING: f64 = 500.0;

/// Probability used during scoring for words never seen in training.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Smoothing parameters for the probability estimate.
///
/// `k` must be finite and greater than zero. With `k = 0` an empty label
/// divides by zero and the table fills with NaN; build values from
/// untrusted input through [`SmoothingParams::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    /// Added to each label's document count in the denominator
    pub k: f64,
}

impl SmoothingParams {
    /// Validated constructor: rejects zero, negative, infinite and NaN `k`.
    pub fn new(k: f64) -> Result<Self> {
        if !k.is_finite() || k <= 0.0 {
            anyhow::bail!("Smoothing constant must be a positive number, got {k}");
        }
        Ok(Self { k })
    }
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            k: DEFAULT_SMOOTHING,
        }
    }
}

/// Word -> P(spam | document contains word). Every value lies strictly
/// in (0, 1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    probabilities: HashMap<String, f64>,
}

impl ProbabilityTable {
    /// Stored probability for a word, if it was seen in training.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.probabilities.get(word).copied()
    }

    /// Read accessor for drivers: 0.0 for a word never seen in training.
    pub fn word_probability(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(0.0)
    }

    /// Probability used when scoring: 0.5 for a word never seen in training.
    pub fn scoring_probability(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(NEUTRAL_PROBABILITY)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(w, &p)| (w.as_str(), p))
    }

    /// The `n` words most indicative of spam, highest probability first.
    pub fn top_spam_words(&self, n: usize) -> Vec<(String, f64)> {
        let mut words = self.sorted_entries();
        words.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        words.truncate(n);
        words
    }

    /// The `n` words most indicative of ham, lowest probability first.
    pub fn top_ham_words(&self, n: usize) -> Vec<(String, f64)> {
        let mut words = self.sorted_entries();
        words.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        words.truncate(n);
        words
    }

    fn sorted_entries(&self) -> Vec<(String, f64)> {
        self.probabilities
            .iter()
            .map(|(w, &p)| (w.clone(), p))
            .collect()
    }
}

/// Smoothed P(spam|w) from one word's per-label document counts.
pub fn spam_probability(
    spam_docs: u32,
    ham_docs: u32,
    num_spam_docs: u32,
    num_ham_docs: u32,
    params: &SmoothingParams,
) -> f64 {
    let p_word_given_spam = (spam_docs as f64 + 1.0) / (num_spam_docs as f64 + params.k);
    let p_word_given_ham = (ham_docs as f64 + 1.0) / (num_ham_docs as f64 + params.k);
    p_word_given_spam / (p_word_given_spam + p_word_given_ham)
}

/// Build the probability table for every word in either label's
/// frequency table.
///
/// Spam-table words come first with their ham count (or 0); words found
/// only in the ham table follow with a spam count of 0.
pub fn compute_word_probabilities(
    model: &TrainedModel,
    params: &SmoothingParams,
) -> ProbabilityTable {
    let num_spam = model.spam.document_count;
    let num_ham = model.ham.document_count;
    let spam = &model.spam.frequencies;
    let ham = &model.ham.frequencies;

    let mut probabilities = HashMap::with_capacity(model.vocabulary_size());

    for (word, spam_docs) in spam.iter() {
        let p = spam_probability(spam_docs, ham.get(word), num_spam, num_ham, params);
        probabilities.insert(word.to_string(), p);
    }

    for (word, ham_docs) in ham.iter() {
        if !probabilities.contains_key(word) {
            let p = spam_probability(0, ham_docs, num_spam, num_ham, params);
            probabilities.insert(word.to_string(), p);
        }
    }

    ProbabilityTable { probabilities }
}
