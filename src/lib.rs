// hamsift: Naive Bayes spam/ham classification for labeled email corpora
//
// This is the library root. Ingestion and classification are independent of
// any presentation; the CLI in main.rs is one driver among many.

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod detector;
pub mod models;
pub mod output;
