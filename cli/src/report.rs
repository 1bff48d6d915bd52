//! Summary reporter
//!
//! Text or JSON rendering of where a run ended up.

use monte_carlo_pi_core_rs::core::geometry;
use monte_carlo_pi_core_rs::{Accumulator, BatchResult};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// Snapshot of a finished (or in-progress) run
///
/// The error fields are `None` until the first batch has been recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub pi_estimate: f64,
    pub total_points: u64,
    pub points_inside: u64,
    pub points_outside: u64,
    pub current_error: Option<f64>,
    pub relative_error_percent: Option<f64>,
    pub accuracy_percent: Option<f64>,
    pub batches: usize,
    pub mean_estimate: f64,
    pub std_estimate: f64,
    pub min_error: f64,
    pub max_error: f64,
    pub mean_error: f64,
    pub total_computation_secs: f64,
    /// Throughput of the last batch, when measurable
    pub points_per_second: Option<f64>,
}

impl Report {
    pub fn from_accumulator(accumulator: &Accumulator, last_batch: Option<&BatchResult>) -> Self {
        let stats = accumulator.summary_statistics();
        let current_error = accumulator.state().errors().last().copied();

        Self {
            pi_estimate: accumulator.current_estimate(),
            total_points: accumulator.total_count(),
            points_inside: accumulator.inside_count(),
            points_outside: accumulator.total_count() - accumulator.inside_count(),
            current_error,
            relative_error_percent: current_error.map(geometry::relative_error_percent),
            accuracy_percent: current_error.map(geometry::accuracy_percent),
            batches: accumulator.batch_count(),
            mean_estimate: stats.mean_estimate,
            std_estimate: stats.std_estimate,
            min_error: stats.min_error,
            max_error: stats.max_error,
            mean_error: stats.mean_error,
            total_computation_secs: stats.total_computation_time.as_secs_f64(),
            points_per_second: last_batch.and_then(BatchResult::points_per_second),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monte Carlo π estimate")?;
        writeln!(f, "  π ≈ {:.6}  (π = {:.6})", self.pi_estimate, PI)?;
        writeln!(
            f,
            "  Points:         {} total | {} inside | {} outside",
            group_thousands(self.total_points),
            group_thousands(self.points_inside),
            group_thousands(self.points_outside)
        )?;
        match (self.current_error, self.relative_error_percent) {
            (Some(error), Some(relative)) => {
                writeln!(f, "  Current error:  {:.6} ({:.2}%)", error, relative)?
            }
            _ => writeln!(f, "  Current error:  n/a")?,
        }
        match self.accuracy_percent {
            Some(accuracy) => writeln!(f, "  Accuracy:       {:.2}%", accuracy)?,
            None => writeln!(f, "  Accuracy:       n/a")?,
        }
        writeln!(f)?;
        writeln!(f, "Estimate history ({} batches)", self.batches)?;
        writeln!(f, "  Mean:           {:.6}", self.mean_estimate)?;
        writeln!(f, "  Std deviation:  {:.6}", self.std_estimate)?;
        writeln!(f)?;
        writeln!(f, "Error history")?;
        writeln!(f, "  Min:            {:.6}", self.min_error)?;
        writeln!(f, "  Max:            {:.6}", self.max_error)?;
        writeln!(f, "  Mean:           {:.6}", self.mean_error)?;
        writeln!(f)?;
        writeln!(f, "Performance")?;
        writeln!(f, "  Compute time:   {:.3}s", self.total_computation_secs)?;
        if let Some(pps) = self.points_per_second {
            writeln!(f, "  Last batch:     {:.0} points/s", pps)?;
        }
        Ok(())
    }
}

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
