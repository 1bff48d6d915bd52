//! History and sample windowing for plots

use crate::accumulator::ConvergenceHistory;
use crate::models::Sample;

/// Plot budget used by the convergence and distribution views
pub const DEFAULT_MAX_DISPLAY_POINTS: usize = 1000;

/// Step-subsample a history that outgrew `max_points`
///
/// With `len > max_points` every `len / max_points`-th entry is kept, starting
/// at batch 0. The three sequences stay aligned. Shorter histories come back
/// unchanged.
///
/// # Example
/// ```
/// use monte_carlo_pi_core_rs::analysis::decimate_history;
/// use monte_carlo_pi_core_rs::ConvergenceHistory;
///
/// let history = ConvergenceHistory {
///     batch_indices: (0..10).collect(),
///     estimates: vec![3.0; 10],
///     errors: vec![0.1; 10],
/// };
///
/// let reduced = decimate_history(&history, 5);
/// assert_eq!(reduced.batch_indices, vec![0, 2, 4, 6, 8]);
/// ```
pub fn decimate_history(history: &ConvergenceHistory, max_points: usize) -> ConvergenceHistory {
    if max_points == 0 {
        return ConvergenceHistory::default();
    }
    if history.len() <= max_points {
        return history.clone();
    }

    let step = history.len() / max_points;
    ConvergenceHistory {
        batch_indices: history.batch_indices.iter().copied().step_by(step).collect(),
        estimates: history.estimates.iter().copied().step_by(step).collect(),
        errors: history.errors.iter().copied().step_by(step).collect(),
    }
}

/// The last `n` samples (or all of them when there are fewer)
pub fn recent_samples(samples: &[Sample], n: usize) -> &[Sample] {
    &samples[samples.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_samples_window() {
        let samples: Vec<Sample> = (0..5).map(|i| Sample::new(i as f64 * 0.1, 0.0)).collect();

        assert_eq!(recent_samples(&samples, 2), &samples[3..]);
        assert_eq!(recent_samples(&samples, 10).len(), 5);
        assert!(recent_samples(&samples, 0).is_empty());
    }

    #[test]
    fn test_zero_budget_is_empty() {
        let history = ConvergenceHistory {
            batch_indices: vec![0, 1],
            estimates: vec![3.0, 3.1],
            errors: vec![0.14, 0.04],
        };
        assert!(decimate_history(&history, 0).is_empty());
    }
}
