//! Deterministic synthetic data generation.

pub mod sample;

pub use sample::*;
