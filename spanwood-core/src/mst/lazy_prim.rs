//! Lazy Prim's algorithm.

use tracing::instrument;

use crate::{
    error::MsfError,
    graph::{ByWeight, EdgeWeightedGraph},
    queue::MinPriorityQueue,
};

use super::{ForestEdges, MinimumSpanningForest, SpanningForestAlgorithm};

/// Lazy Prim's algorithm, `O(E log E)`.
///
/// Unlike [`super::Prim`], every edge leaving a newly reached vertex goes
/// into a plain heap. An extracted edge whose endpoints are both in the tree
/// is stale and dropped. Uses more heap space than the eager variant but
/// needs no decrease-key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LazyPrim;

impl SpanningForestAlgorithm for LazyPrim {
    fn name(&self) -> &'static str {
        "lazy-prim"
    }

    #[instrument(
        name = "msf.lazy_prim",
        err,
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError> {
        let vertex_count = graph.vertex_count();
        let mut marked = vec![false; vertex_count];
        let mut queue = MinPriorityQueue::new();
        let mut forest = ForestEdges::with_capacity(vertex_count.saturating_sub(1));
        let mut trees = 0;

        for source in 0..vertex_count {
            if marked[source] {
                continue;
            }
            trees += 1;
            visit(graph, source, &mut marked, &mut queue)?;

            while !queue.is_empty() {
                let ByWeight(edge) = queue.delete_min()?;
                let (v, w) = edge.endpoints();
                if marked[v] && marked[w] {
                    continue;
                }
                forest.push(edge);
                if !marked[v] {
                    visit(graph, v, &mut marked, &mut queue)?;
                }
                if !marked[w] {
                    visit(graph, w, &mut marked, &mut queue)?;
                }
            }
        }

        Ok(forest.finish(self.name(), trees))
    }
}

/// Marks `vertex` and queues every edge leading out of the tree.
fn visit(
    graph: &EdgeWeightedGraph,
    vertex: usize,
    marked: &mut [bool],
    queue: &mut MinPriorityQueue<ByWeight>,
) -> Result<(), MsfError> {
    marked[vertex] = true;
    for edge in graph.adjacent(vertex)? {
        if !marked[edge.other(vertex)?] {
            queue.insert(ByWeight(*edge));
        }
    }
    Ok(())
}
