//! Borůvka's algorithm.

use tracing::{Span, debug, field::Empty, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::MsfError,
    graph::{Edge, EdgeWeightedGraph},
};

use super::{ForestEdges, MinimumSpanningForest, SpanningForestAlgorithm};

/// Borůvka's algorithm, `O(E log V)`.
///
/// Each round scans every edge once and records, per component, the
/// lightest edge leaving it; the first edge seen wins a tie. All recorded
/// edges are then added, re-checking components before each union because
/// two components may pick the same edge or merge earlier in the round.
/// Every round at least halves the number of non-isolated components, so
/// at most `ceil(log2 V)` rounds run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Boruvka;

impl SpanningForestAlgorithm for Boruvka {
    fn name(&self) -> &'static str {
        "boruvka"
    }

    #[instrument(
        name = "msf.boruvka",
        err,
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count(), rounds = Empty),
    )]
    fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError> {
        let vertex_count = graph.vertex_count();
        let target = vertex_count.saturating_sub(1);
        let mut components = DisjointSet::new(vertex_count);
        let mut forest = ForestEdges::with_capacity(target);
        let mut closest: Vec<Option<Edge>> = vec![None; vertex_count];
        let mut rounds = 0_usize;

        while forest.len() < target {
            rounds += 1;
            closest.fill(None);
            record_cheapest_edges(graph, &mut components, &mut closest)?;

            let mut merged = 0_usize;
            for edge in closest.iter().flatten() {
                let (v, w) = edge.endpoints();
                if components.union(v, w)? {
                    forest.push(*edge);
                    merged += 1;
                }
            }

            debug!(
                round = rounds,
                merged,
                components = components.count(),
                "boruvka round complete"
            );
            // No component has an outgoing edge: the rest are separate trees.
            if merged == 0 {
                break;
            }
        }

        Span::current().record("rounds", rounds);
        Ok(forest.finish(self.name(), components.count()))
    }
}

/// Records in `closest[root]` the lightest edge leaving each component.
fn record_cheapest_edges(
    graph: &EdgeWeightedGraph,
    components: &mut DisjointSet,
    closest: &mut [Option<Edge>],
) -> Result<(), MsfError> {
    for edge in graph.edges() {
        let (v, w) = edge.endpoints();
        let i = components.find(v)?;
        let j = components.find(w)?;
        if i == j {
            continue;
        }
        for root in [i, j] {
            if closest[root].is_none_or(|best| edge.weight() < best.weight()) {
                closest[root] = Some(*edge);
            }
        }
    }
    Ok(())
}
