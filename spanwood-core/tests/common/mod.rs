use spanwood_core::{Boruvka, Edge, EdgeWeightedGraph, Kruskal, LazyPrim, Prim, SpanningForestAlgorithm};

pub const ALGORITHMS: [&dyn SpanningForestAlgorithm; 4] = [&Kruskal, &Prim, &LazyPrim, &Boruvka];

/// Builds a graph from `(a, b, weight)` triples.
#[must_use]
pub fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedGraph {
    EdgeWeightedGraph::from_edges(
        vertex_count,
        edges.iter().map(|&(a, b, weight)| Edge::new(a, b, weight)),
    )
    .unwrap_or_else(|err| panic!("fixture edges are valid: {err}"))
}

/// The classic eight-vertex, sixteen-edge weighted graph. Its minimum
/// spanning tree has seven edges and weight 1.81.
#[must_use]
pub fn tiny_graph() -> EdgeWeightedGraph {
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
