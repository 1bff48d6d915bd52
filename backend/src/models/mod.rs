//! Domain models for the sampling engine

pub mod sample;
pub mod state;

// Re-exports
pub use sample::Sample;
pub use state::AccumulatorState;
