//! PyO3 wrapper for Accumulator
//!
//! This module provides the Python interface to the sampling engine.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{batch_result_to_py, samples_to_py, summary_statistics_to_py};
use crate::accumulator::{Accumulator as RustAccumulator, AccumulatorConfig, DEFAULT_RNG_SEED};

/// Python wrapper for the Rust accumulator
///
/// # Example (from Python)
///
/// ```python
/// from monte_carlo_pi_core_rs import Accumulator
///
/// acc = Accumulator(seed=12345)
/// result = acc.add_points(42)
/// print(f"pi ~ {result['pi_estimate']:.6f} after {result['total_points']} points")
///
/// indices, estimates, errors = acc.convergence_data()
/// ```
#[pyclass(name = "Accumulator")]
pub struct PyAccumulator {
    inner: RustAccumulator,
}

#[pymethods]
impl PyAccumulator {
    /// Create an empty accumulator
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the uniform coordinate generator (default 42)
    #[new]
    #[pyo3(signature = (seed = DEFAULT_RNG_SEED))]
    fn new(seed: u64) -> Self {
        PyAccumulator {
            inner: RustAccumulator::new(AccumulatorConfig { rng_seed: seed }),
        }
    }

    /// Discard all points and history
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Generate and accumulate one batch
    ///
    /// # Returns
    ///
    /// Dictionary with:
    /// - `batch_index`: 0-based batch number
    /// - `points`: list of `{x, y, inside_circle}` for this batch
    /// - `pi_estimate`: cumulative estimate
    /// - `total_points`, `points_inside`: cumulative counts
    /// - `error`: absolute error against pi
    /// - `computation_time`: seconds spent on this batch
    ///
    /// # Errors
    ///
    /// Raises ValueError if `count` is negative
    fn add_points(&mut self, py: Python, count: i64) -> PyResult<Py<PyDict>> {
        let result = self
            .inner
            .try_accumulate_batch(count)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        batch_result_to_py(py, &result)
    }

    /// Cumulative estimate, 0.0 before any points
    fn current_estimate(&self) -> f64 {
        self.inner.current_estimate()
    }

    /// `(batch_indices, estimates, errors)` as independent lists
    fn convergence_data(&self) -> (Vec<usize>, Vec<f64>, Vec<f64>) {
        let history = self.inner.convergence_history();
        (history.batch_indices, history.estimates, history.errors)
    }

    /// Summary statistics dictionary (all zeros before the first batch)
    fn statistics(&self, py: Python) -> PyResult<Py<PyDict>> {
        summary_statistics_to_py(py, &self.inner.summary_statistics())
    }

    /// Every point since the last reset
    fn all_points(&self, py: Python) -> PyResult<Py<PyList>> {
        samples_to_py(py, self.inner.samples())
    }

    #[getter]
    fn total_points(&self) -> u64 {
        self.inner.total_count()
    }

    #[getter]
    fn points_inside(&self) -> u64 {
        self.inner.inside_count()
    }

    #[getter]
    fn batch_count(&self) -> usize {
        self.inner.batch_count()
    }
}
