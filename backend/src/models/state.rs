//! Accumulator State
//!
//! Everything the sampling engine remembers between batches.
//!
//! # Critical Invariants
//!
//! 1. **Count Bound**: `inside_count <= total_count`
//! 2. **Sample Accounting**: `total_count == samples.len()`
//! 3. **History Alignment**: estimate, error and timing histories always have
//!    the same length, equal to the number of batches since the last reset
//! 4. **Append Only**: samples and history entries are never removed except
//!    by a full `clear()`

use crate::models::sample::Sample;
use std::time::Duration;

/// Complete accumulator state
///
/// Storage is unbounded on purpose: statistics stay exact for the whole run.
/// Consumers that only want a window of recent points slice it themselves.
#[derive(Debug, Clone, Default)]
pub struct AccumulatorState {
    /// Every sample since the last reset, in generation order
    samples: Vec<Sample>,

    /// Number of samples with `inside == true`
    inside_count: u64,

    /// Number of samples overall
    total_count: u64,

    /// Cumulative π estimate after each batch
    estimates: Vec<f64>,

    /// `|estimate - π|` after each batch
    errors: Vec<f64>,

    /// Wall-clock generation + classification time of each batch
    computation_times: Vec<Duration>,
}

impl AccumulatorState {
    /// Create an empty state
    ///
    /// # Example
    ///
    /// ```rust
    /// use monte_carlo_pi_core_rs::AccumulatorState;
    ///
    /// let state = AccumulatorState::new();
    /// assert_eq!(state.total_count(), 0);
    /// assert_eq!(state.batch_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all samples, counts and history
    pub fn clear(&mut self) {
        self.samples.clear();
        self.inside_count = 0;
        self.total_count = 0;
        self.estimates.clear();
        self.errors.clear();
        self.computation_times.clear();
    }

    /// Append classified samples and update both counters
    pub fn append_samples(&mut self, batch: &[Sample]) {
        let new_inside = batch.iter().filter(|s| s.is_inside()).count() as u64;

        self.samples.extend_from_slice(batch);
        self.inside_count += new_inside;
        self.total_count += batch.len() as u64;

        debug_assert!(self.inside_count <= self.total_count);
        debug_assert_eq!(self.total_count, self.samples.len() as u64);
    }

    /// Record one history entry; returns the 0-based index of the batch
    pub fn record_batch(&mut self, estimate: f64, error: f64, elapsed: Duration) -> usize {
        self.estimates.push(estimate);
        self.errors.push(error);
        self.computation_times.push(elapsed);

        debug_assert_eq!(self.estimates.len(), self.errors.len());
        debug_assert_eq!(self.estimates.len(), self.computation_times.len());

        self.estimates.len() - 1
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn inside_count(&self) -> u64 {
        self.inside_count
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    pub fn computation_times(&self) -> &[Duration] {
        &self.computation_times
    }

    /// Number of batches recorded since the last reset
    pub fn batch_count(&self) -> usize {
        self.estimates.len()
    }
}
