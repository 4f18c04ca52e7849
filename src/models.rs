// Data models — the value types that flow between ingestion, scoring and
// the presentation layer.
//
// Kept free of filesystem and scoring logic so any driver (CLI, batch job,
// UI) can consume them without pulling in the rest of the classifier.

use serde::{Deserialize, Serialize};

/// Probability above which a document is predicted spam. Strictly
/// greater-than: a score of exactly 0.5 predicts ham.
pub const SPAM_THRESHOLD: f64 = 0.5;

/// Ground-truth label of a training or test document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// Both labels in canonical processing order (ham before spam).
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    /// Name of the subdirectory holding this label's documents.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }

    /// Display name. Downstream comparisons are case-sensitive, so this is
    /// always exactly "Ham" or "Spam".
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "Ham",
            Label::Spam => "Spam",
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One evaluated test document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// File name of the document (no directory component)
    pub identifier: String,
    /// Predicted spam probability in [0, 1]
    pub spam_probability: f64,
    /// Label of the subdirectory the document was found in
    pub actual: Label,
}

impl ScoredDocument {
    /// Whether the classifier predicts spam for this document.
    pub fn predicted_spam(&self) -> bool {
        self.spam_probability > SPAM_THRESHOLD
    }

    /// Whether the prediction agrees with the ground truth.
    pub fn is_correct(&self) -> bool {
        self.predicted_spam() == self.actual.is_spam()
    }

    /// The spam probability formatted to five decimal places.
    pub fn rounded_probability(&self) -> String {
        format!("{:.5}", self.spam_probability)
    }
}

/// A display row for the presentation layer: file name, rounded
/// probability and ground-truth label, all as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEmail {
    pub filename: String,
    pub spam_probability: String,
    pub actual_class: String,
}

impl From<&ScoredDocument> for ClassifiedEmail {
    fn from(doc: &ScoredDocument) -> Self {
        Self {
            filename: doc.identifier.clone(),
            spam_probability: doc.rounded_probability(),
            actual_class: doc.actual.as_str().to_string(),
        }
    }
}
