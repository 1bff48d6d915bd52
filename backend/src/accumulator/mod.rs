//! Accumulator - the sampling engine
//!
//! Generates batches of samples, folds them into cumulative counts and keeps
//! per-batch convergence history.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    Accumulator, AccumulatorConfig, AccumulatorError, BatchResult, ConvergenceHistory,
    SummaryStatistics, DEFAULT_BATCH_SIZE, DEFAULT_RNG_SEED,
};
