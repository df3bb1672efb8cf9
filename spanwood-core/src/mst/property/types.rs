//! Fixture and configuration types for the forest properties.

use crate::{Boruvka, EdgeWeightedGraph, Kruskal, LazyPrim, Prim, SpanningForestAlgorithm};

/// Every algorithm a property runs against.
pub(super) const ALGORITHMS: [&dyn SpanningForestAlgorithm; 4] =
    [&Kruskal, &Prim, &LazyPrim, &Boruvka];

/// How edge weights and topology are drawn for a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Distinct continuous weights, some negative.
    Unique,
    /// Weights drawn from a pool of one to three values, forcing ties.
    ManyIdentical,
    /// A random spanning path plus a few extra edges, which may repeat a
    /// pair or loop on a vertex.
    Sparse,
    /// Most vertex pairs joined.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
}

/// A generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MsfFixture {
    pub graph: EdgeWeightedGraph,
    pub distribution: WeightDistribution,
}

impl MsfFixture {
    /// Short description for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        )
    }
}

/// Repetition settings for the determinism property.
pub(super) struct DeterminismConfig {
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Reads `SPANWOOD_MSF_PBT_REPS`, defaulting to five repetitions.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("SPANWOOD_MSF_PBT_REPS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
