use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::classifier::probability::{SmoothingParams, DEFAULT_SMOOTHING};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override the directory settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Training root containing `ham/` and `spam/` (HAMSIFT_TRAIN_DIR)
    pub train_dir: PathBuf,
    /// Test root containing `ham/` and `spam/` (HAMSIFT_TEST_DIR)
    pub test_dir: PathBuf,
    /// Smoothing constant K (HAMSIFT_SMOOTHING, default 500)
    pub smoothing: f64,
    /// Where `classify --json` writes when no path is given
    pub report_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Every setting has a
    /// default; only a malformed smoothing value is an error.
    pub fn load() -> Result<Self> {
        let smoothing = match env::var("HAMSIFT_SMOOTHING") {
            Ok(raw) => parse_smoothing(&raw)?,
            Err(_) => DEFAULT_SMOOTHING,
        };

        Ok(Self {
            train_dir: env::var("HAMSIFT_TRAIN_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/train")),
            test_dir: env::var("HAMSIFT_TEST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/test")),
            smoothing,
            report_path: env::var("HAMSIFT_REPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./output/hamsift-report.json")),
        })
    }

    pub fn smoothing_params(&self) -> SmoothingParams {
        SmoothingParams { k: self.smoothing }
    }

    /// Check that a corpus root exists.
    /// Call this before training or classifying from the CLI.
    pub fn require_dir(path: &Path, what: &str) -> Result<()> {
        if !path.is_dir() {
            anyhow::bail!(
                "{what} directory not found: {}\n\
                 Expected a directory containing `ham/` and `spam/` subdirectories.\n\
                 Pass it as a flag or set it in your .env file.",
                path.display()
            );
        }
        Ok(())
    }
}

/// Parse a smoothing constant: must be a finite number greater than zero.
pub fn parse_smoothing(raw: &str) -> Result<f64> {
    let k: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("HAMSIFT_SMOOTHING is not a number: {raw:?}"))?;
    let params = SmoothingParams::new(k).context("Invalid HAMSIFT_SMOOTHING")?;
    Ok(params.k)
}
