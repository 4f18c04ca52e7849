// Colored terminal output for corpus summaries, result tables and metrics.
//
// main.rs delegates all terminal formatting here.

use colored::Colorize;

use crate::classifier::metrics::Confusion;
use crate::classifier::probability::ProbabilityTable;
use crate::corpus::ingest::TrainedModel;
use crate::models::ScoredDocument;

use super::{format_metric, truncate_chars};

/// Display document counts and vocabulary for a training pass.
pub fn display_corpus_summary(model: &TrainedModel, table: &ProbabilityTable) {
    println!("\n{}", "=== Training Corpus ===".bold());
    println!("  Ham documents:  {}", model.ham.document_count);
    println!("  Spam documents: {}", model.spam.document_count);
    println!(
        "  Vocabulary:     {} words ({} ham, {} spam)",
        table.len(),
        model.ham.frequencies.len(),
        model.spam.frequencies.len()
    );

    if model.total_documents() == 0 {
        println!(
            "\n  {} no documents found. Expected `ham/` and `spam/` subdirectories.",
            "Warning:".yellow()
        );
    }
}

/// Display the most spam- and ham-indicative words.
pub fn display_top_words(table: &ProbabilityTable, n: usize) {
    if table.is_empty() || n == 0 {
        return;
    }

    println!("\n{}", format!("=== Top {n} Spam Words ===").bold());
    for (word, p) in table.top_spam_words(n) {
        println!("  {:<24} {}", truncate_chars(&word, 22), format_metric(p).red());
    }

    println!("\n{}", format!("=== Top {n} Ham Words ===").bold());
    for (word, p) in table.top_ham_words(n) {
        println!("  {:<24} {}", truncate_chars(&word, 22), format_metric(p).green());
    }
}

/// Display per-word probabilities for a lookup.
pub fn display_word_probabilities(results: &[(String, f64)]) {
    for (word, p) in results {
        let value = if *p == 0.0 {
            format!("{} (not seen in training)", format_metric(*p))
                .dimmed()
                .to_string()
        } else {
            format_metric(*p)
        };
        println!("  {:<24} {}", word, value);
    }
}

/// Display the classification table: file, actual class, spam probability.
pub fn display_results(docs: &[ScoredDocument]) {
    if docs.is_empty() {
        println!("No test documents found. Expected `ham/` and `spam/` subdirectories.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Classification ({} documents) ===", docs.len()).bold()
    );
    println!();
    println!(
        "  {:<40} {:<6} {:>12}",
        "File".dimmed(),
        "Actual".dimmed(),
        "Spam Prob".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());

    for doc in docs {
        let prob = doc.rounded_probability();
        let prob = if doc.is_correct() {
            prob.normal()
        } else {
            prob.red()
        };
        println!(
            "  {:<40} {:<6} {:>12}",
            truncate_chars(&doc.identifier, 37),
            doc.actual.as_str(),
            prob,
        );
    }
}

/// Display accuracy, precision, recall and the confusion counts.
pub fn display_metrics(accuracy: f64, precision: f64, recall: f64, counts: &Confusion) {
    println!("\n{}", "=== Metrics ===".bold());
    println!("  Accuracy:  {}", format_metric(accuracy).bold());
    println!("  Precision: {}", format_metric(precision).bold());
    println!("  Recall:    {}", format_metric(recall));
    println!(
        "  {}",
        format!(
            "TP {}  FP {}  TN {}  FN {}",
            counts.true_positives,
            counts.false_positives,
            counts.true_negatives,
            counts.false_negatives
        )
        .dimmed()
    );
}

/// Explain what the reported metrics mean.
pub fn display_metric_explanations() {
    println!("{}", "Accuracy".bold());
    println!("  How often the classifier is right, over every test document:");
    println!("  (correct predictions) / (total predictions).");
    println!("  A document is predicted spam when its probability is above 0.5.");
    println!();
    println!("{}", "Precision".bold());
    println!("  How trustworthy a spam verdict is:");
    println!("  (spam correctly flagged) / (everything flagged as spam).");
    println!("  Higher precision means fewer legitimate emails marked as spam.");
    println!("  Reported as 0 when nothing was flagged.");
    println!();
    println!("{}", "Recall".bold());
    println!("  How much of the actual spam was caught:");
    println!("  (spam correctly flagged) / (all spam).");
}
