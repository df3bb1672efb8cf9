//! Independent checks on a computed forest.

use tracing::warn;

use crate::{
    disjoint_set::DisjointSet,
    error::ForestViolation,
    graph::{Edge, EdgeWeightedGraph},
};

use super::MinimumSpanningForest;

const RELATIVE_WEIGHT_TOLERANCE: f64 = 1e-12;

/// Checks that `forest` is a minimum spanning forest of `graph`.
///
/// The checks run in this order and the first failure is returned:
///
/// 1. the reported total weight matches the edge sum within a relative
///    tolerance of `1e-12`;
/// 2. every forest edge is an edge of the graph (same endpoints and weight);
/// 3. no forest edge closes a cycle;
/// 4. the reported component count matches the graph's;
/// 5. the forest has exactly `V - C` edges;
/// 6. for every forest edge, no graph edge crossing the cut obtained by
///    removing it is strictly lighter.
///
/// The cut check rebuilds components once per forest edge, costing
/// `O(V * (V + E))`. Meant for tests and debugging, not hot paths.
///
/// # Errors
/// Returns the first [`ForestViolation`] found.
pub fn verify_forest(
    graph: &EdgeWeightedGraph,
    forest: &MinimumSpanningForest,
) -> Result<(), ForestViolation> {
    let result = run_checks(graph, forest);
    if let Err(violation) = &result {
        warn!(code = %violation.code(), %violation, "forest verification failed");
    }
    result
}

fn run_checks(
    graph: &EdgeWeightedGraph,
    forest: &MinimumSpanningForest,
) -> Result<(), ForestViolation> {
    check_weight(forest)?;
    check_membership(graph, forest.edges())?;
    check_acyclic(graph.vertex_count(), forest.edges())?;

    let actual = count_components(graph);
    if forest.component_count() != actual {
        return Err(ForestViolation::ComponentCount {
            reported: forest.component_count(),
            actual,
        });
    }
    let expected = graph.vertex_count() - actual;
    if forest.len() != expected {
        return Err(ForestViolation::EdgeCount {
            actual: forest.len(),
            expected,
        });
    }

    check_cuts(graph, forest.edges())
}

fn check_weight(forest: &MinimumSpanningForest) -> Result<(), ForestViolation> {
    let summed: f64 = forest.edges().iter().map(Edge::weight).sum();
    let reported = forest.total_weight();
    let tolerance = RELATIVE_WEIGHT_TOLERANCE * summed.abs().max(1.0);
    if (reported - summed).abs() <= tolerance {
        Ok(())
    } else {
        Err(ForestViolation::WeightMismatch { reported, summed })
    }
}

fn check_membership(graph: &EdgeWeightedGraph, edges: &[Edge]) -> Result<(), ForestViolation> {
    for (position, edge) in edges.iter().enumerate() {
        let present = graph.adjacent(edge.either()).is_ok_and(|mut incident| {
            incident.any(|candidate| {
                candidate.joins_same_pair(edge) && candidate.weight() == edge.weight()
            })
        });
        if !present {
            return Err(ForestViolation::ForeignEdge {
                position,
                edge: *edge,
            });
        }
    }
    Ok(())
}

// Runs after membership, so every endpoint is in range.
fn check_acyclic(vertex_count: usize, edges: &[Edge]) -> Result<(), ForestViolation> {
    let mut sets = DisjointSet::new(vertex_count);
    for (position, edge) in edges.iter().enumerate() {
        let (a, b) = edge.endpoints();
        if !sets.union(a, b).unwrap_or(false) {
            return Err(ForestViolation::Cycle {
                position,
                edge: *edge,
            });
        }
    }
    Ok(())
}

fn count_components(graph: &EdgeWeightedGraph) -> usize {
    let mut sets = DisjointSet::new(graph.vertex_count());
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        // Endpoints were range-checked by `add_edge`.
        let _ = sets.union(a, b);
    }
    sets.count()
}

fn check_cuts(graph: &EdgeWeightedGraph, edges: &[Edge]) -> Result<(), ForestViolation> {
    for (removed, forest_edge) in edges.iter().enumerate() {
        let mut sets = DisjointSet::new(graph.vertex_count());
        for (position, edge) in edges.iter().enumerate() {
            if position != removed {
                let (a, b) = edge.endpoints();
                let _ = sets.union(a, b);
            }
        }

        let (a, b) = forest_edge.endpoints();
        let side_a = sets.find(a).ok();
        let side_b = sets.find(b).ok();
        for crossing in graph.edges() {
            let (v, w) = crossing.endpoints();
            let (side_v, side_w) = (sets.find(v).ok(), sets.find(w).ok());
            let crosses = (side_v == side_a && side_w == side_b)
                || (side_v == side_b && side_w == side_a);
            if crosses && crossing.weight() < forest_edge.weight() {
                return Err(ForestViolation::CutOptimality {
                    forest_edge: *forest_edge,
                    crossing: *crossing,
                });
            }
        }
    }
    Ok(())
}
