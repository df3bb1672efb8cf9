//! Shared test utilities for `spanwood-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, EdgeWeightedGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWOOD_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(a, b, weight)` triples, panicking on invalid input.
#[must_use]
pub(crate) fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedGraph {
    EdgeWeightedGraph::from_edges(
        vertex_count,
        edges.iter().map(|&(a, b, weight)| Edge::new(a, b, weight)),
    )
    .expect("test graph edges must be valid")
}

/// The classic eight-vertex, sixteen-edge weighted graph. Its minimum
/// spanning tree has seven edges and weight 1.81.
#[must_use]
pub(crate) fn tiny_graph() -> EdgeWeightedGraph {
    graph(
        8,
        &[
            (4, 5, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (0, 7, 0.16),
            (1, 5, 0.32),
            (0, 4, 0.38),
            (2, 3, 0.17),
            (1, 7, 0.19),
            (0, 2, 0.26),
            (1, 2, 0.36),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}
