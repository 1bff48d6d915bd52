//! Sample sources
//!
//! The accumulator never draws coordinates itself. It asks a [`SampleSource`]
//! for raw (x, y) pairs and does the classification and bookkeeping on its own,
//! so a source only has to decide *where* points fall.
//!
//! The production source is [`UniformSquareSource`]: x and y independent and
//! uniform on [-1, 1). Tests plug in scripted sources to pin exact coordinates.

use crate::rng::RngManager;

/// Lower bound of each axis of the sampling square
pub const SQUARE_MIN: f64 = -1.0;

/// Upper bound of each axis of the sampling square
pub const SQUARE_MAX: f64 = 1.0;

/// Producer of raw coordinate pairs
///
/// # Example
///
/// ```rust
/// use monte_carlo_pi_core_rs::sampling::SampleSource;
///
/// /// Always samples the origin.
/// struct Origin;
///
/// impl SampleSource for Origin {
///     fn next_point(&mut self) -> (f64, f64) {
///         (0.0, 0.0)
///     }
/// }
/// ```
pub trait SampleSource: Send + Sync {
    /// Produce the next (x, y) coordinate pair
    ///
    /// Called once per sample, in generation order.
    fn next_point(&mut self) -> (f64, f64);
}

/// Independent uniform draws on each axis of [-1, 1)²
#[derive(Debug, Clone)]
pub struct UniformSquareSource {
    rng: RngManager,
}

impl UniformSquareSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngManager::new(seed),
        }
    }

    /// Wrap an existing generator, continuing its stream
    pub fn from_rng(rng: RngManager) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &RngManager {
        &self.rng
    }
}

impl SampleSource for UniformSquareSource {
    fn next_point(&mut self) -> (f64, f64) {
        // x first, then y: the stream order is part of seeded reproducibility.
        let x = self.rng.uniform(SQUARE_MIN, SQUARE_MAX);
        let y = self.rng.uniform(SQUARE_MIN, SQUARE_MAX);
        (x, y)
    }
}
