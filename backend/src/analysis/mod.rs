//! Consumer-side views over accumulator output
//!
//! Renderers rarely want the full unbounded history. These helpers build
//! reduced copies for display; none of them touch the accumulator itself.

pub mod decimate;
pub mod histogram;

pub use decimate::{decimate_history, recent_samples, DEFAULT_MAX_DISPLAY_POINTS};
pub use histogram::{HistogramBin, RadialHistogram, DEFAULT_HISTOGRAM_BINS, DEFAULT_HISTOGRAM_RADIUS};
