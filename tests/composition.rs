// Composition tests — verifying the whole pipeline on real directory trees.
//
// These tests exercise the data flow between modules:
//   Ingest -> Probability table -> Scoring -> Metrics -> Report
// using throwaway corpora built under a temporary directory.

use std::fs;
use std::path::Path;

use hamsift::classifier::probability::SmoothingParams;
use hamsift::classifier::traits::{Classifier, Trainer};
use hamsift::corpus::ingest::ingest;
use hamsift::detector::SpamDetector;
use hamsift::models::Label;
use hamsift::output::report::{build_report, write_report};
use tempfile::TempDir;

fn write_docs(root: &Path, label: &str, docs: &[(&str, &str)]) {
    let dir = root.join(label);
    fs::create_dir_all(&dir).unwrap();
    for (name, body) in docs {
        fs::write(dir.join(name), body).unwrap();
    }
}

fn detector() -> SpamDetector {
    SpamDetector::new(SmoothingParams::default())
}

// ============================================================
// Chain: train -> word probabilities
// ============================================================

#[test]
fn single_document_training_scenario() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "ham", &[("h1.txt", "free money")]);
    write_docs(train.path(), "spam", &[("s1.txt", "free money now")]);

    let mut d = detector();
    d.train(train.path());

    assert_eq!(d.model().ham.document_count, 1);
    assert_eq!(d.model().spam.document_count, 1);

    let free = d.word_probability("free");
    let money = d.word_probability("money");
    let now = d.word_probability("now");
    assert!((free - 0.5).abs() < 0.01, "free = {free}");
    assert!((money - 0.5).abs() < 0.01, "money = {money}");
    assert!(now > 0.5, "now = {now}");
    assert_eq!(d.word_probability("absent"), 0.0);

    let test = TempDir::new().unwrap();
    write_docs(test.path(), "spam", &[("t1.txt", "now")]);
    d.classify(test.path());

    let docs = d.scored_documents();
    assert_eq!(docs.len(), 1);
    assert!(docs[0].spam_probability > 0.5);
    assert_eq!(d.accuracy().unwrap(), 1.0);
    assert_eq!(d.precision(), 1.0);
}

#[test]
fn documents_are_counted_once_per_word() {
    let train = TempDir::new().unwrap();
    write_docs(
        train.path(),
        "spam",
        &[("a", "buy buy buy\nBUY now"), ("b", "buy later"), ("c", "nothing")],
    );

    let model = ingest(train.path());
    assert_eq!(model.spam.frequencies.get("buy"), 2);
    assert_eq!(model.spam.frequencies.get("now"), 1);
    assert_eq!(model.spam.document_count, 3);
    assert_eq!(model.ham.document_count, 0);
    assert!(model.ham.frequencies.is_empty());
}

#[test]
fn missing_label_directories_are_not_errors() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "ham", &[("h1", "hello team")]);

    let mut d = detector();
    d.train(train.path());
    assert_eq!(d.model().spam.document_count, 0);
    assert!(d.model().spam.frequencies.is_empty());
    assert!(d.word_probability("hello") > 0.0);

    let empty_test = TempDir::new().unwrap();
    d.classify(empty_test.path());
    assert!(d.scored_documents().is_empty());
    assert!(d.accuracy().is_err());
    assert_eq!(d.precision(), 0.0);
}

#[test]
fn nested_directories_are_not_documents() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "ham", &[("h1", "hello")]);
    fs::create_dir_all(train.path().join("ham").join("archive")).unwrap();
    fs::write(
        train.path().join("ham").join("archive").join("old"),
        "ignored words",
    )
    .unwrap();

    let model = ingest(train.path());
    assert_eq!(model.ham.document_count, 1);
    assert_eq!(model.ham.frequencies.get("ignored"), 0);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let train = TempDir::new().unwrap();
    let dir = train.path().join("spam");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("bin"), b"cheap\xff\xfepills").unwrap();

    let model = ingest(train.path());
    assert_eq!(model.spam.document_count, 1);
    assert_eq!(model.spam.frequencies.get("cheap"), 1);
    assert_eq!(model.spam.frequencies.get("pills"), 1);
}

#[test]
fn empty_document_counts_toward_totals() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "ham", &[("empty", ""), ("h1", "hello")]);

    let model = ingest(train.path());
    assert_eq!(model.ham.document_count, 2);
    assert_eq!(model.ham.frequencies.get("hello"), 1);
}

#[cfg(unix)]
#[test]
fn unreadable_document_counts_toward_totals_without_words() {
    use std::os::unix::fs::PermissionsExt;

    let train = TempDir::new().unwrap();
    write_docs(
        train.path(),
        "spam",
        &[("locked", "secret lottery"), ("open", "cheap pills")],
    );
    let locked = train.path().join("spam").join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user from reading
    if fs::read(&locked).is_ok() {
        eprintln!("skipping: file stays readable for this user");
        return;
    }

    let model = ingest(train.path());
    assert_eq!(model.spam.document_count, 2);
    assert_eq!(model.spam.frequencies.get("secret"), 0);
    assert_eq!(model.spam.frequencies.get("lottery"), 0);
    assert_eq!(model.spam.frequencies.get("cheap"), 1);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

// ============================================================
// Chain: classify -> ordering and rebuilds
// ============================================================

#[test]
fn results_list_ham_before_spam_in_file_name_order() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "ham", &[("h", "meeting notes")]);
    write_docs(train.path(), "spam", &[("s", "free prize")]);

    let test = TempDir::new().unwrap();
    write_docs(test.path(), "spam", &[("b.txt", "prize"), ("a.txt", "free")]);
    write_docs(test.path(), "ham", &[("z.txt", "notes"), ("m.txt", "meeting")]);

    let mut d = detector();
    d.train(train.path());
    d.classify(test.path());

    let rows = d.classified_emails();
    let order: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.filename.as_str(), r.actual_class.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("m.txt", "Ham"),
            ("z.txt", "Ham"),
            ("a.txt", "Spam"),
            ("b.txt", "Spam"),
        ]
    );
    for row in &rows {
        assert_eq!(row.spam_probability.split('.').nth(1).unwrap().len(), 5);
    }
    assert_eq!(d.accuracy().unwrap(), 1.0);
}

#[test]
fn empty_test_document_scores_neutral_and_predicts_ham() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "spam", &[("s", "free prize")]);

    let test = TempDir::new().unwrap();
    write_docs(test.path(), "spam", &[("blank", "   \n\n")]);

    let mut d = detector();
    d.train(train.path());
    d.classify(test.path());

    let doc = &d.scored_documents()[0];
    assert_eq!(doc.spam_probability, 0.5);
    assert_eq!(doc.actual, Label::Spam);
    assert!(!doc.predicted_spam());
}

#[test]
fn retraining_replaces_previous_state() {
    let first = TempDir::new().unwrap();
    write_docs(first.path(), "spam", &[("s", "lottery")]);
    let second = TempDir::new().unwrap();
    write_docs(second.path(), "ham", &[("h", "invoice")]);

    let mut d = detector();
    d.train(first.path());
    assert!(d.word_probability("lottery") > 0.0);

    d.train(second.path());
    assert_eq!(d.word_probability("lottery"), 0.0);
    assert!(d.word_probability("invoice") > 0.0);
    assert_eq!(d.model().spam.document_count, 0);
}

#[test]
fn reclassifying_replaces_previous_results() {
    let train = TempDir::new().unwrap();
    write_docs(train.path(), "spam", &[("s", "prize")]);

    let test_a = TempDir::new().unwrap();
    write_docs(test_a.path(), "ham", &[("1", "a"), ("2", "b")]);
    let test_b = TempDir::new().unwrap();
    write_docs(test_b.path(), "spam", &[("3", "prize")]);

    let mut d = detector();
    d.train(train.path());
    d.classify(test_a.path());
    assert_eq!(d.scored_documents().len(), 2);

    d.classify(test_b.path());
    assert_eq!(d.scored_documents().len(), 1);
    assert_eq!(d.scored_documents()[0].identifier, "3");
}

// ============================================================
// Chain: metrics -> JSON report
// ============================================================

#[test]
fn report_round_trips_metrics_to_json() {
    let train = TempDir::new().unwrap();
    write_docs(
        train.path(),
        "ham",
        &[("h1", "meeting agenda tomorrow"), ("h2", "project notes")],
    );
    write_docs(
        train.path(),
        "spam",
        &[("s1", "win free prize"), ("s2", "free money now")],
    );

    let test = TempDir::new().unwrap();
    write_docs(test.path(), "ham", &[("t1", "meeting notes")]);
    write_docs(test.path(), "spam", &[("t2", "free prize")]);

    let mut d = detector();
    d.train(train.path());
    d.classify(test.path());

    let report = build_report(d.model(), d.params().k, d.scored_documents()).unwrap();
    assert_eq!(report.train_ham_documents, 2);
    assert_eq!(report.train_spam_documents, 2);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.accuracy, 1.0);

    let out = TempDir::new().unwrap();
    let path = out.path().join("reports").join("run.json");
    write_report(&report, &path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["accuracy"], 1.0);
    assert_eq!(json["smoothing"], 500.0);
    assert_eq!(json["results"][0]["actual_class"], "Ham");
    assert_eq!(json["results"][1]["actual_class"], "Spam");
    assert_eq!(json["confusion"]["true_positives"], 1);
}

#[test]
fn report_requires_scored_documents() {
    let d = detector();
    assert!(build_report(d.model(), d.params().k, d.scored_documents()).is_err());
}
