// Bayesian classifier — word probabilities, document scoring and metrics.

pub mod metrics;
pub mod probability;
pub mod scoring;
pub mod traits;
