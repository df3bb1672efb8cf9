//! Reference solutions for the equivalence property.
//!
//! [`sequential_kruskal`] sorts a copy of the edge list and shares no code
//! with the library's heap or union-find. [`exhaustive_minimum`] tries
//! every edge subset and is only usable on tiny graphs.

use crate::{Edge, EdgeWeightedGraph};

use super::helpers::find_root;

/// Weight, size and component count of a reference forest.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: f64,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Kruskal over a stably sorted edge list with a plain parent array.
pub(super) fn sequential_kruskal(graph: &EdgeWeightedGraph) -> OracleForest {
    let mut edges: Vec<Edge> = graph.edges().copied().collect();
    edges.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    for edge in &edges {
        let (a, b) = edge.endpoints();
        let root_a = find_root(&mut parent, a);
        let root_b = find_root(&mut parent, b);
        if root_a != root_b {
            parent[root_b] = root_a;
            total_weight += edge.weight();
            edge_count += 1;
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count: graph.vertex_count() - edge_count,
    }
}

/// Minimum weight over every acyclic edge subset of size `V - C`.
///
/// Enumerates `2^E` subsets, so callers must keep `E` small.
pub(super) fn exhaustive_minimum(graph: &EdgeWeightedGraph) -> f64 {
    let edges: Vec<Edge> = graph.edges().copied().collect();
    assert!(edges.len() < 20, "exhaustive search needs a tiny graph");

    let target = sequential_kruskal(graph).edge_count;
    let mut best = f64::INFINITY;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let chosen: Vec<&Edge> = edges
            .iter()
            .enumerate()
            .filter(|&(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if is_acyclic(graph.vertex_count(), &chosen) {
            best = best.min(chosen.iter().map(|edge| edge.weight()).sum());
        }
    }
    // Kruskal's own selection has `target` edges, so `best` is finite.
    best
}

fn is_acyclic(vertex_count: usize, edges: &[&Edge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    edges.iter().all(|edge| {
        let (a, b) = edge.endpoints();
        let root_a = find_root(&mut parent, a);
        let root_b = find_root(&mut parent, b);
        parent[root_b] = root_a;
        root_a != root_b
    })
}
