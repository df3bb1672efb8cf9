//! Seeded random graph generation.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwood_core::{Edge, EdgeWeightedGraph};

use crate::error::BenchSetupError;

/// Shape of a random connected graph.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertices: usize,
    /// Total number of edges, including the spanning path.
    pub edges: usize,
    /// RNG seed; equal configs produce equal graphs.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Generates a connected simple graph with uniform weights in `[0, 1)`.
    ///
    /// A random Hamiltonian path guarantees connectivity; the remaining
    /// edges join distinct, not yet joined pairs chosen uniformly.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::TooFewEdges`] or
    /// [`BenchSetupError::TooManyEdges`] when no such graph exists.
    pub fn generate(&self) -> Result<EdgeWeightedGraph, BenchSetupError> {
        let vertices = self.vertices;
        let max = vertices.saturating_mul(vertices.saturating_sub(1)) / 2;
        if self.edges > max {
            return Err(BenchSetupError::TooManyEdges {
                vertices,
                edges: self.edges,
                max,
            });
        }
        if self.edges < vertices.saturating_sub(1) {
            return Err(BenchSetupError::TooFewEdges {
                vertices,
                edges: self.edges,
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut order: Vec<usize> = (0..vertices).collect();
        for i in (1..vertices).rev() {
            order.swap(i, rng.gen_range(0..=i));
        }

        let mut graph = EdgeWeightedGraph::new(vertices);
        let mut joined = HashSet::with_capacity(self.edges);
        for pair in order.windows(2) {
            if let [a, b] = *pair {
                joined.insert((a.min(b), a.max(b)));
                graph.add_edge(Edge::new(a, b, rng.r#gen::<f64>()))?;
            }
        }
        while graph.edge_count() < self.edges {
            let a = rng.gen_range(0..vertices);
            let b = rng.gen_range(0..vertices);
            if a != b && joined.insert((a.min(b), a.max(b))) {
                graph.add_edge(Edge::new(a, b, rng.r#gen::<f64>()))?;
            }
        }
        Ok(graph)
    }
}
