//! CLI error type

use monte_carlo_pi_core_rs::AccumulatorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid session config: {0}")]
    InvalidSession(String),

    #[error(transparent)]
    Accumulator(#[from] AccumulatorError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
