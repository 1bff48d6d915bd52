//! Radial distance histogram
//!
//! Bins sample distances from the origin so a renderer can show how the
//! points split around radius 1.

use crate::models::Sample;
use serde::{Deserialize, Serialize};

/// Bin count of the distribution view
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Upper radius of the distribution view (the square's corners sit at √2)
pub const DEFAULT_HISTOGRAM_RADIUS: f64 = 1.5;

/// One half-open bin `[start, end)`; the last bin also holds `end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Whether the bin center lies within the unit disk
    pub fn is_inside(&self) -> bool {
        self.center() <= 1.0
    }
}

/// Equal-width histogram of distances over `[0, max_radius]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialHistogram {
    bins: Vec<HistogramBin>,
}

impl RadialHistogram {
    /// Count `samples` into `bins` equal-width bins
    ///
    /// Distances beyond `max_radius` are ignored.
    ///
    /// # Panics
    /// Panics if `bins == 0` or `max_radius` is not positive
    ///
    /// # Example
    /// ```
    /// use monte_carlo_pi_core_rs::analysis::RadialHistogram;
    /// use monte_carlo_pi_core_rs::Sample;
    ///
    /// let samples = [Sample::new(0.1, 0.0), Sample::new(0.0, 1.2)];
    /// let hist = RadialHistogram::from_samples(&samples, 3, 1.5);
    ///
    /// assert_eq!(hist.counts(), vec![1, 0, 1]);
    /// ```
    pub fn from_samples(samples: &[Sample], bins: usize, max_radius: f64) -> Self {
        assert!(bins > 0, "bins must be positive");
        assert!(max_radius > 0.0, "max_radius must be positive");

        let width = max_radius / bins as f64;
        let mut histogram = Self {
            bins: (0..bins)
                .map(|i| HistogramBin {
                    start: i as f64 * width,
                    end: (i + 1) as f64 * width,
                    count: 0,
                })
                .collect(),
        };

        for distance in samples.iter().map(Sample::distance_from_origin) {
            if distance > max_radius {
                continue;
            }
            let index = ((distance / width) as usize).min(bins - 1);
            histogram.bins[index].count += 1;
        }

        histogram
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    /// Number of samples that landed in some bin
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count, 0 when empty
    pub fn peak(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
