//! Monte Carlo π Core - Rust Engine
//!
//! Sampling engine that estimates π from uniform points in [-1, 1]² and keeps
//! exact running and historical statistics for a display layer to render.
//!
//! # Architecture
//!
//! - **core**: Disk geometry and descriptive statistics
//! - **models**: Domain types (Sample, AccumulatorState)
//! - **sampling**: Coordinate sources (uniform square, pluggable)
//! - **accumulator**: Batch accumulation, convergence history, summaries
//! - **analysis**: Display-side windowing and distance histograms
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. `inside_count <= total_count` and `total_count == samples.len()`
//! 2. All history sequences have one entry per batch since the last reset
//! 3. All randomness is deterministic (seeded RNG)

// Module declarations
pub mod accumulator;
pub mod analysis;
pub mod core;
pub mod models;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use accumulator::{
    Accumulator, AccumulatorConfig, AccumulatorError, BatchResult, ConvergenceHistory,
    SummaryStatistics, DEFAULT_BATCH_SIZE, DEFAULT_RNG_SEED,
};
pub use models::{AccumulatorState, Sample};
pub use rng::RngManager;
pub use sampling::{SampleSource, UniformSquareSource};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn monte_carlo_pi_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::accumulator::PyAccumulator>()?;
    Ok(())
}
