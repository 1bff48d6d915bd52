//! Type conversion utilities for FFI boundary
//!
//! Converts accumulator results into plain Python dicts and lists.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::accumulator::{BatchResult, SummaryStatistics};
use crate::models::Sample;

/// Convert a Sample to `{x, y, inside_circle}`
pub fn sample_to_py<'py>(py: Python<'py>, sample: &Sample) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("x", sample.x())?;
    dict.set_item("y", sample.y())?;
    dict.set_item("inside_circle", sample.is_inside())?;
    Ok(dict)
}

/// Convert a slice of samples to a Python list of dicts
pub fn samples_to_py(py: Python, samples: &[Sample]) -> PyResult<Py<PyList>> {
    let items = samples
        .iter()
        .map(|s| sample_to_py(py, s))
        .collect::<PyResult<Vec<_>>>()?;
    Ok(PyList::new(py, items)?.into())
}

/// Convert BatchResult to Python dict
pub fn batch_result_to_py(py: Python, result: &BatchResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("batch_index", result.batch_index)?;
    dict.set_item("points", samples_to_py(py, &result.samples)?)?;
    dict.set_item("pi_estimate", result.pi_estimate)?;
    dict.set_item("total_points", result.total_count)?;
    dict.set_item("points_inside", result.inside_count)?;
    dict.set_item("error", result.error)?;
    dict.set_item("computation_time", result.computation_time.as_secs_f64())?;

    Ok(dict.into())
}

/// Convert SummaryStatistics to Python dict
pub fn summary_statistics_to_py(py: Python, stats: &SummaryStatistics) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("mean_estimate", stats.mean_estimate)?;
    dict.set_item("std_estimate", stats.std_estimate)?;
    dict.set_item("min_error", stats.min_error)?;
    dict.set_item("max_error", stats.max_error)?;
    dict.set_item("mean_error", stats.mean_error)?;
    dict.set_item(
        "total_computation_time",
        stats.total_computation_time.as_secs_f64(),
    )?;

    Ok(dict.into())
}
