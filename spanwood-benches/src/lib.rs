//! Benchmark support crate for spanwood.
//!
//! Provides seeded random graphs and parameter labels for the Criterion
//! benchmarks comparing the spanning forest algorithms and the structures
//! underneath them.

pub mod error;
pub mod params;
pub mod source;
