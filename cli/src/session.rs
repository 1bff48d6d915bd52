//! Paced driving loop
//!
//! The accumulator has no clock. A session calls it once per tick, sleeping
//! out the rest of the interval, until a batch or sample bound is reached.

use crate::error::CliError;
use monte_carlo_pi_core_rs::{Accumulator, BatchResult};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Fastest allowed cadence
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Slowest allowed cadence
pub const MAX_INTERVAL: Duration = Duration::from_millis(1000);

pub const DEFAULT_INTERVAL_MS: u64 = 100;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(DEFAULT_INTERVAL_MS);

/// Batch bound applied when the caller sets neither bound
pub const DEFAULT_MAX_BATCHES: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Points per batch; kept signed so bad input reaches the accumulator's own check
    pub batch_size: i64,

    /// Delay between batch starts; zero runs unpaced
    pub interval: Duration,

    pub max_batches: Option<usize>,

    /// Stop once this many samples exist; the final batch is shortened to hit it exactly
    pub max_samples: Option<u64>,
}

impl SessionConfig {
    /// Back-to-back batches with no sleeping
    #[cfg(test)]
    pub fn unpaced(batch_size: i64, max_batches: usize) -> Self {
        Self {
            batch_size,
            interval: Duration::ZERO,
            max_batches: Some(max_batches),
            max_samples: None,
        }
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if !self.interval.is_zero() && !(MIN_INTERVAL..=MAX_INTERVAL).contains(&self.interval) {
            return Err(CliError::InvalidSession(format!(
                "interval must be 0 or between {} and {} ms, got {} ms",
                MIN_INTERVAL.as_millis(),
                MAX_INTERVAL.as_millis(),
                self.interval.as_millis()
            )));
        }

        if self.max_batches.is_none() && self.max_samples.is_none() {
            return Err(CliError::InvalidSession(
                "either a batch limit or a sample limit is required".to_string(),
            ));
        }

        if self.max_batches == Some(0) {
            return Err(CliError::InvalidSession(
                "batch limit must be at least 1".to_string(),
            ));
        }

        if self.batch_size == 0 && self.max_batches.is_none() {
            return Err(CliError::InvalidSession(
                "a zero batch size never reaches a sample limit; set a batch limit".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            batch_size: monte_carlo_pi_core_rs::DEFAULT_BATCH_SIZE as i64,
            interval: DEFAULT_INTERVAL,
            max_batches: Some(DEFAULT_MAX_BATCHES),
            max_samples: None,
        }
    }
}

/// What a finished session did
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub batches_run: usize,
    pub last_batch: Option<BatchResult>,
    pub wall_time: Duration,
}

pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, CliError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Drive `accumulator` until a bound is hit, handing each batch to `on_batch`
    pub fn run<F>(&self, accumulator: &mut Accumulator, mut on_batch: F) -> Result<SessionOutcome, CliError>
    where
        F: FnMut(&BatchResult),
    {
        let started = Instant::now();
        let mut batches_run = 0;
        let mut last_batch = None;

        while let Some(count) = self.next_batch_size(accumulator, batches_run) {
            let tick_start = Instant::now();

            let result = accumulator.try_accumulate_batch(count)?;
            on_batch(&result);
            batches_run += 1;
            last_batch = Some(result);

            if self.next_batch_size(accumulator, batches_run).is_some() && !self.config.interval.is_zero() {
                let remaining = self.config.interval.saturating_sub(tick_start.elapsed());
                thread::sleep(remaining);
            }
        }

        debug!("Session finished after {} batches", batches_run);

        Ok(SessionOutcome {
            batches_run,
            last_batch,
            wall_time: started.elapsed(),
        })
    }

    /// Size of the next batch, or `None` when a bound has been reached
    fn next_batch_size(&self, accumulator: &Accumulator, batches_run: usize) -> Option<i64> {
        if self.config.max_batches.is_some_and(|max| batches_run >= max) {
            return None;
        }

        match self.config.max_samples {
            Some(max) if self.config.batch_size > 0 => {
                let remaining = max.saturating_sub(accumulator.total_count());
                if remaining == 0 {
                    None
                } else {
                    Some(self.config.batch_size.min(remaining.min(i64::MAX as u64) as i64))
                }
            }
            _ => Some(self.config.batch_size),
        }
    }
}
