//! Python bindings
//!
//! Exposes the accumulator to a Python display layer. Only built with the
//! `pyo3` feature.

pub mod accumulator;
pub mod types;
