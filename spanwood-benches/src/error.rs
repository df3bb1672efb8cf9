//! Benchmark setup error type.

use spanwood_core::{GraphError, MsfError};

/// Errors raised while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated graph was rejected.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A warm-up computation failed.
    #[error("spanning forest computation failed: {0}")]
    Msf(#[from] MsfError),
    /// The configuration asked for more edges than vertex pairs exist.
    #[error("{edges} edges requested but {vertices} vertices only have {max} distinct pairs")]
    TooManyEdges {
        /// Requested vertex count.
        vertices: usize,
        /// Requested edge count.
        edges: usize,
        /// Number of distinct unordered pairs.
        max: usize,
    },
    /// A connected graph needs at least `V - 1` edges.
    #[error("{edges} edges cannot connect {vertices} vertices")]
    TooFewEdges {
        /// Requested vertex count.
        vertices: usize,
        /// Requested edge count.
        edges: usize,
    },
}
