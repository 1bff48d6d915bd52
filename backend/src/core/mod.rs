//! Numeric building blocks shared by the accumulator and its consumers

pub mod geometry;
pub mod stats;
