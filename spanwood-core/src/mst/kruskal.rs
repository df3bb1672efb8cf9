//! Kruskal's algorithm over a heapified edge list.

use tracing::instrument;

use crate::{
    disjoint_set::DisjointSet,
    error::MsfError,
    graph::{ByWeight, EdgeWeightedGraph},
    queue::MinPriorityQueue,
};

use super::{ForestEdges, MinimumSpanningForest, SpanningForestAlgorithm};

/// Kruskal's algorithm, `O(E log E)`.
///
/// Every edge is heapified in linear time, then extracted lightest first.
/// An edge whose endpoints already share a component would close a cycle
/// and is skipped; any other edge joins the forest. Extraction stops once
/// the forest holds `V - 1` edges or the heap runs dry, the latter meaning
/// the graph is disconnected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kruskal;

impl SpanningForestAlgorithm for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    #[instrument(
        name = "msf.kruskal",
        err,
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError> {
        let vertex_count = graph.vertex_count();
        let target = vertex_count.saturating_sub(1);

        let mut queue: MinPriorityQueue<ByWeight> = graph.edges().copied().map(ByWeight).collect();
        let mut components = DisjointSet::new(vertex_count);
        let mut forest = ForestEdges::with_capacity(target);

        while forest.len() < target && !queue.is_empty() {
            let ByWeight(edge) = queue.delete_min()?;
            let (v, w) = edge.endpoints();
            if components.find(v)? == components.find(w)? {
                continue;
            }
            components.union(v, w)?;
            forest.push(edge);
        }

        Ok(forest.finish(self.name(), components.count()))
    }
}
