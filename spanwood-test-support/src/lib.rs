//! Test helpers shared across the spanwood crates.

pub mod ci;
pub mod tracing;
