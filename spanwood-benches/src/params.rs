//! Benchmark parameter labels.

use std::fmt;

/// Size of one benchmarked graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of edges.
    pub edges: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},E={}", self.vertices, self.edges)
    }
}
