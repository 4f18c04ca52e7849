use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use hamsift::classifier::metrics;
use hamsift::classifier::traits::{Classifier, Trainer};
use hamsift::config::Config;
use hamsift::detector::SpamDetector;
use hamsift::output::{format_metric, report, terminal};

/// hamsift: Naive Bayes spam filtering for labeled email corpora.
///
/// Trains on a directory with `ham/` and `spam/` subdirectories (one email
/// body per file), then scores a test directory laid out the same way.
#[derive(Parser)]
#[command(name = "hamsift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a corpus and show its summary and most telling words
    Train {
        /// Training root (defaults to HAMSIFT_TRAIN_DIR)
        #[arg(long)]
        train_dir: Option<PathBuf>,

        /// How many top spam/ham words to list (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Train, then classify a test corpus and report accuracy and precision
    Classify {
        /// Training root (defaults to HAMSIFT_TRAIN_DIR)
        #[arg(long)]
        train_dir: Option<PathBuf>,

        /// Test root (defaults to HAMSIFT_TEST_DIR)
        #[arg(long)]
        test_dir: Option<PathBuf>,

        /// Also write a JSON report (defaults to HAMSIFT_REPORT_PATH when given without a value)
        #[arg(long, num_args = 0..=1)]
        json: Option<Option<PathBuf>>,
    },

    /// Train, then print the spam probability of each word
    Word {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Training root (defaults to HAMSIFT_TRAIN_DIR)
        #[arg(long)]
        train_dir: Option<PathBuf>,
    },

    /// Train, then score a single file
    Score {
        /// The email body to score
        file: PathBuf,

        /// Training root (defaults to HAMSIFT_TRAIN_DIR)
        #[arg(long)]
        train_dir: Option<PathBuf>,
    },

    /// Explain accuracy, precision and recall
    Explain,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hamsift=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train { train_dir, top } => {
            let config = Config::load()?;
            let detector = train(&config, train_dir.as_deref())?;

            terminal::display_corpus_summary(detector.model(), detector.table());
            terminal::display_top_words(detector.table(), top);
        }

        Commands::Classify {
            train_dir,
            test_dir,
            json,
        } => {
            let config = Config::load()?;
            let mut detector = train(&config, train_dir.as_deref())?;

            let test_dir = test_dir.unwrap_or_else(|| config.test_dir.clone());
            Config::require_dir(&test_dir, "Test")?;

            let spinner = spinner(format!("Classifying {}", test_dir.display()))?;
            detector.classify(&test_dir);
            spinner.finish_and_clear();

            let docs = detector.scored_documents();
            terminal::display_results(docs);

            if docs.is_empty() {
                return Ok(());
            }

            terminal::display_metrics(
                detector.accuracy()?,
                detector.precision(),
                detector.recall(),
                &metrics::confusion(docs),
            );

            if let Some(path) = json {
                let path = path.unwrap_or_else(|| config.report_path.clone());
                let report =
                    report::build_report(detector.model(), detector.params().k, docs)?;
                report::write_report(&report, &path)?;
                info!(path = %path.display(), "Wrote report");
                println!("\nReport saved to: {}", path.display());
            }
        }

        Commands::Word { words, train_dir } => {
            let config = Config::load()?;
            let detector = train(&config, train_dir.as_deref())?;

            let results: Vec<(String, f64)> = words
                .iter()
                .map(|w| {
                    let word = w.to_lowercase();
                    let p = detector.word_probability(&word);
                    (word, p)
                })
                .collect();
            println!();
            terminal::display_word_probabilities(&results);
        }

        Commands::Score { file, train_dir } => {
            let config = Config::load()?;
            if !file.is_file() {
                anyhow::bail!("Not a file: {}", file.display());
            }
            let detector = train(&config, train_dir.as_deref())?;

            let p = detector.score_file(&file);
            let verdict = if p > hamsift::models::SPAM_THRESHOLD {
                "Spam".red().bold()
            } else {
                "Ham".green().bold()
            };
            println!("\n{}: {} ({})", file.display(), verdict, format_metric(p));
        }

        Commands::Explain => {
            terminal::display_metric_explanations();
        }
    }

    Ok(())
}

/// Build a detector trained on the given root, falling back to the
/// configured training directory.
fn train(config: &Config, train_dir: Option<&Path>) -> Result<SpamDetector> {
    let train_dir = train_dir.unwrap_or(&config.train_dir);
    Config::require_dir(train_dir, "Training")?;

    let mut detector = SpamDetector::new(config.smoothing_params());
    let spinner = spinner(format!("Training on {}", train_dir.display()))?;
    detector.train(train_dir);
    spinner.finish_and_clear();

    Ok(detector)
}

fn spinner(message: String) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
