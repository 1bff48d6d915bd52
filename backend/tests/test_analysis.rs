//! Display-side analysis helpers
//!
//! Windowing and histograms must leave the accumulator untouched.

use monte_carlo_pi_core_rs::analysis::{
    decimate_history, recent_samples, RadialHistogram, DEFAULT_HISTOGRAM_BINS,
    DEFAULT_HISTOGRAM_RADIUS, DEFAULT_MAX_DISPLAY_POINTS,
};
use monte_carlo_pi_core_rs::{Accumulator, AccumulatorConfig, ConvergenceHistory, Sample};

fn history_of(len: usize) -> ConvergenceHistory {
    ConvergenceHistory {
        batch_indices: (0..len).collect(),
        estimates: (0..len).map(|i| 3.0 + i as f64 * 1e-4).collect(),
        errors: (0..len).map(|i| 0.1 - i as f64 * 1e-5).collect(),
    }
}

#[test]
fn test_short_history_unchanged() {
    let history = history_of(10);
    assert_eq!(decimate_history(&history, DEFAULT_MAX_DISPLAY_POINTS), history);
}

#[test]
fn test_long_history_is_step_subsampled() {
    let history = history_of(2500);
    let reduced = decimate_history(&history, 1000);

    // step = 2500 / 1000 = 2
    assert_eq!(reduced.len(), 1250);
    assert_eq!(reduced.batch_indices[0], 0);
    assert_eq!(reduced.batch_indices[1], 2);
    assert_eq!(reduced.estimates.len(), reduced.batch_indices.len());
    assert_eq!(reduced.errors.len(), reduced.batch_indices.len());

    for (pos, index) in reduced.batch_indices.iter().enumerate() {
        assert_eq!(reduced.estimates[pos], history.estimates[*index]);
        assert_eq!(reduced.errors[pos], history.errors[*index]);
    }
}

#[test]
fn test_decimation_does_not_touch_accumulator() {
    let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: 1 });
    for _ in 0..30 {
        acc.accumulate_batch(5);
    }

    let reduced = decimate_history(&acc.convergence_history(), 10);

    assert_eq!(reduced.len(), 10);
    assert_eq!(acc.convergence_history().len(), 30);
}

#[test]
fn test_recent_window_of_accumulator_samples() {
    let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: 2 });
    for _ in 0..30 {
        acc.accumulate_batch(42);
    }

    let window = recent_samples(acc.samples(), 1000);

    assert_eq!(window.len(), 1000);
    assert_eq!(window.last(), acc.samples().last());
    assert_eq!(acc.total_count(), 1260);
}

#[test]
fn test_histogram_counts_every_sample_in_square() {
    let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: 3 });
    acc.accumulate_batch(2000);

    let hist = RadialHistogram::from_samples(
        acc.samples(),
        DEFAULT_HISTOGRAM_BINS,
        DEFAULT_HISTOGRAM_RADIUS,
    );

    // Every point of [-1, 1)² is within √2 < 1.5 of the origin.
    assert_eq!(hist.total(), 2000);
    assert_eq!(hist.bins().len(), DEFAULT_HISTOGRAM_BINS);
}

#[test]
fn test_histogram_inside_bins_hold_inside_samples() {
    let samples = vec![
        Sample::new(0.0, 0.0),
        Sample::new(0.3, 0.4),
        Sample::new(1.0, 1.0),
        Sample::new(-1.0, 1.0),
    ];

    let hist = RadialHistogram::from_samples(&samples, 2, 2.0);

    assert_eq!(hist.counts(), vec![2, 2]);
    assert!(hist.bins()[0].is_inside());
    assert!(!hist.bins()[1].is_inside());
    assert_eq!(hist.peak(), 2);
}

#[test]
fn test_histogram_ignores_out_of_range() {
    let samples = [Sample::new(0.9, 0.9), Sample::new(0.1, 0.1)];
    let hist = RadialHistogram::from_samples(&samples, 4, 1.0);

    assert_eq!(hist.total(), 1);
}
