//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, seedable coordinate sampling.
//! Every random coordinate the accumulator classifies is drawn through this module.

mod xorshift;

pub use xorshift::RngManager;
