//! Accumulator Engine
//!
//! One batch runs these steps, synchronously and to completion:
//!
//! ```text
//! 1. Draw `count` coordinate pairs from the sample source
//! 2. Classify each against the closed unit disk
//! 3. Append samples, bump inside/total counters
//! 4. Recompute cumulative estimate 4 * inside / total and |estimate - π|
//! 5. Record estimate, error and elapsed time in the history
//! ```
//!
//! The accumulator owns no timer. Whoever drives it decides when the next
//! batch happens (see the `mcpi` binary for a paced loop).
//!
//! # Example
//!
//! ```rust
//! use monte_carlo_pi_core_rs::{Accumulator, AccumulatorConfig, DEFAULT_BATCH_SIZE};
//!
//! let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: 12345 });
//!
//! for _ in 0..10 {
//!     let result = acc.accumulate_batch(DEFAULT_BATCH_SIZE);
//!     assert!(result.inside_count <= result.total_count);
//! }
//!
//! assert_eq!(acc.total_count(), 10 * DEFAULT_BATCH_SIZE as u64);
//! assert_eq!(acc.convergence_history().len(), 10);
//! ```

use crate::core::geometry::{self, absolute_error, estimate_pi};
use crate::core::stats;
use crate::models::{AccumulatorState, Sample};
use crate::sampling::{SampleSource, UniformSquareSource};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};

// ============================================================================
// Configuration Types
// ============================================================================

/// Points generated per batch when the caller has no preference
pub const DEFAULT_BATCH_SIZE: usize = 42;

/// Seed used by `AccumulatorConfig::default()`
pub const DEFAULT_RNG_SEED: u64 = 42;

/// Accumulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulatorConfig {
    /// Seed for the uniform coordinate generator
    pub rng_seed: u64,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Outcome of one `accumulate_batch` call
///
/// Owned by the caller; the accumulator keeps its own copy of the samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// 0-based position of this batch in the convergence history
    pub batch_index: usize,

    /// Samples generated by this batch only
    pub samples: Vec<Sample>,

    /// Cumulative π estimate after this batch
    pub pi_estimate: f64,

    /// Cumulative number of samples inside the unit disk
    pub inside_count: u64,

    /// Cumulative number of samples
    pub total_count: u64,

    /// `|pi_estimate - π|`
    pub error: f64,

    /// Wall-clock time spent generating and classifying this batch
    pub computation_time: Duration,
}

impl BatchResult {
    /// Cumulative samples that fell outside the disk
    pub fn points_outside(&self) -> u64 {
        self.total_count - self.inside_count
    }

    /// Error as a percentage of π
    pub fn relative_error_percent(&self) -> f64 {
        geometry::relative_error_percent(self.error)
    }

    /// `100 - relative error`, floored at 0
    pub fn accuracy_percent(&self) -> f64 {
        geometry::accuracy_percent(self.error)
    }

    /// Generation throughput of this batch
    ///
    /// `None` when the batch finished below the clock's resolution.
    pub fn points_per_second(&self) -> Option<f64> {
        let secs = self.computation_time.as_secs_f64();
        if secs > 0.0 {
            Some(self.samples.len() as f64 / secs)
        } else {
            None
        }
    }
}

/// Aligned convergence sequences, one entry per batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceHistory {
    /// 0-based batch numbers
    pub batch_indices: Vec<usize>,

    /// Cumulative estimate after each batch
    pub estimates: Vec<f64>,

    /// Absolute error after each batch
    pub errors: Vec<f64>,
}

impl ConvergenceHistory {
    pub fn len(&self) -> usize {
        self.batch_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch_indices.is_empty()
    }
}

/// Aggregate statistics over the whole history
///
/// Every field is zero before the first batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean_estimate: f64,

    /// Population standard deviation of the estimate history
    pub std_estimate: f64,

    pub min_error: f64,
    pub max_error: f64,
    pub mean_error: f64,

    /// Sum of all per-batch computation times
    pub total_computation_time: Duration,
}

// ============================================================================
// Errors
// ============================================================================

/// Accumulator errors
#[derive(Debug, Error, PartialEq)]
pub enum AccumulatorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// ============================================================================
// Accumulator
// ============================================================================

/// The sampling accumulator
///
/// Single-owner and synchronous: every mutation takes `&mut self`, so sharing
/// one across threads requires an external lock.
pub struct Accumulator {
    state: AccumulatorState,
    source: Box<dyn SampleSource>,
}

impl std::fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Accumulator {
    /// Create an empty accumulator drawing uniform points from `config.rng_seed`
    pub fn new(config: AccumulatorConfig) -> Self {
        debug!("Creating accumulator (seed={})", config.rng_seed);
        Self::with_source(UniformSquareSource::new(config.rng_seed))
    }

    /// Create an empty accumulator over a custom coordinate source
    ///
    /// # Example
    ///
    /// ```rust
    /// use monte_carlo_pi_core_rs::Accumulator;
    /// use monte_carlo_pi_core_rs::sampling::SampleSource;
    ///
    /// struct Corner;
    ///
    /// impl SampleSource for Corner {
    ///     fn next_point(&mut self) -> (f64, f64) {
    ///         (1.0, 1.0)
    ///     }
    /// }
    ///
    /// let mut acc = Accumulator::with_source(Corner);
    /// acc.accumulate_batch(3);
    /// assert_eq!(acc.inside_count(), 0);
    /// assert_eq!(acc.current_estimate(), 0.0);
    /// ```
    pub fn with_source<S: SampleSource + 'static>(source: S) -> Self {
        Self {
            state: AccumulatorState::new(),
            source: Box::new(source),
        }
    }

    /// Discard all samples, counts and history
    ///
    /// The sample source is not rewound; subsequent batches continue its stream.
    pub fn reset(&mut self) {
        debug!(
            "Resetting accumulator ({} samples, {} batches discarded)",
            self.state.total_count(),
            self.state.batch_count()
        );
        self.state.clear();
    }

    /// Generate `count` samples and fold them into the running totals
    ///
    /// `count == 0` still records a history entry carrying the unchanged
    /// estimate, so history length always equals the number of calls.
    pub fn accumulate_batch(&mut self, count: usize) -> BatchResult {
        let start = Instant::now();

        let samples: Vec<Sample> = (0..count)
            .map(|_| {
                let (x, y) = self.source.next_point();
                Sample::new(x, y)
            })
            .collect();

        self.state.append_samples(&samples);

        let inside_count = self.state.inside_count();
        let total_count = self.state.total_count();
        let pi_estimate = estimate_pi(inside_count, total_count);
        let error = absolute_error(pi_estimate);

        let computation_time = start.elapsed();

        let batch_index = self.state.record_batch(pi_estimate, error, computation_time);

        trace!(
            "Batch {}: {} new samples, {}/{} inside, estimate={:.6}, error={:.6}, took {:?}",
            batch_index,
            count,
            inside_count,
            total_count,
            pi_estimate,
            error,
            computation_time
        );

        BatchResult {
            batch_index,
            samples,
            pi_estimate,
            inside_count,
            total_count,
            error,
            computation_time,
        }
    }

    /// `accumulate_batch` for counts arriving from untyped callers
    ///
    /// # Errors
    ///
    /// Returns `AccumulatorError::InvalidArgument` for a negative count (or one
    /// that does not fit in `usize`). State is untouched on error.
    pub fn try_accumulate_batch(&mut self, count: i64) -> Result<BatchResult, AccumulatorError> {
        let count = usize::try_from(count).map_err(|_| {
            AccumulatorError::InvalidArgument(format!(
                "batch size must be a non-negative integer, got {}",
                count
            ))
        })?;
        Ok(self.accumulate_batch(count))
    }

    /// `4 * inside / total`, or 0.0 before any samples
    pub fn current_estimate(&self) -> f64 {
        estimate_pi(self.state.inside_count(), self.state.total_count())
    }

    /// Owned copy of the per-batch estimate and error history
    pub fn convergence_history(&self) -> ConvergenceHistory {
        ConvergenceHistory {
            batch_indices: (0..self.state.batch_count()).collect(),
            estimates: self.state.estimates().to_vec(),
            errors: self.state.errors().to_vec(),
        }
    }

    /// Mean/std of estimates, min/max/mean of errors and total compute time
    pub fn summary_statistics(&self) -> SummaryStatistics {
        if self.state.batch_count() == 0 {
            return SummaryStatistics::default();
        }

        let estimates = self.state.estimates();
        let errors = self.state.errors();

        SummaryStatistics {
            mean_estimate: stats::mean(estimates),
            std_estimate: stats::population_std_dev(estimates),
            min_error: stats::min(errors),
            max_error: stats::max(errors),
            mean_error: stats::mean(errors),
            total_computation_time: self.state.computation_times().iter().sum(),
        }
    }

    /// Borrowed view of every sample since the last reset
    pub fn samples(&self) -> &[Sample] {
        self.state.samples()
    }

    /// Owned copy of every sample since the last reset
    pub fn all_samples(&self) -> Vec<Sample> {
        self.state.samples().to_vec()
    }

    pub fn inside_count(&self) -> u64 {
        self.state.inside_count()
    }

    pub fn total_count(&self) -> u64 {
        self.state.total_count()
    }

    /// Batches processed since the last reset
    pub fn batch_count(&self) -> usize {
        self.state.batch_count()
    }

    /// Read-only access to the full state
    pub fn state(&self) -> &AccumulatorState {
        &self.state
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(AccumulatorConfig::default())
    }
}
