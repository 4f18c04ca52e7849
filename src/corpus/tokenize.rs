// Tokenizer shared by training and scoring.
//
// A document is lower-cased and split on any run of non-word characters
// (anything outside ASCII letters, digits and underscore). The result is a
// set: a word appearing many times in one document counts once.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::warn;

/// The unique words of one document. Ordered so that downstream sums run in
/// a reproducible order.
pub type WordSet = BTreeSet<String>;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// Tokenize a text into its set of unique lower-case words.
///
/// Empty fragments (from leading or trailing delimiters) are dropped, so
/// text with no word characters yields an empty set.
pub fn tokenize(text: &str) -> WordSet {
    let lower = text.to_lowercase();
    NON_WORD
        .split(&lower)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a file and tokenize its full contents.
///
/// Invalid UTF-8 is decoded lossily. A read failure is logged and yields an
/// empty word set; it never aborts the surrounding batch.
pub fn tokenize_file(path: &Path) -> WordSet {
    match fs::read(path) {
        Ok(bytes) => tokenize(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Failed to read document");
            WordSet::new()
        }
    }
}
