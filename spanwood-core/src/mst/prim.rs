//! Eager Prim's algorithm.

use tracing::instrument;

use crate::{
    error::MsfError,
    graph::{Edge, EdgeWeightedGraph},
    queue::IndexMinPriorityQueue,
};

use super::{ForestEdges, MinimumSpanningForest, SpanningForestAlgorithm};

/// Eager Prim's algorithm, `O(E log V)`.
///
/// Grows a tree from the lowest-numbered vertex not yet covered. For each
/// fringe vertex the indexed heap holds only the lightest known edge
/// connecting it to the tree, updated in place with decrease-key. When the
/// heap drains, the tree spans one connected component and growth restarts
/// from the next uncovered vertex, so disconnected graphs yield a forest.
///
/// Edges are reported in the order their far endpoints join the tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Prim;

/// Per-vertex search state for one computation.
struct PrimState {
    dist_to: Vec<f64>,
    edge_to: Vec<Option<Edge>>,
    in_tree: Vec<bool>,
    queue: IndexMinPriorityQueue<f64>,
}

impl PrimState {
    fn new(vertex_count: usize) -> Self {
        Self {
            dist_to: vec![f64::INFINITY; vertex_count],
            edge_to: vec![None; vertex_count],
            in_tree: vec![false; vertex_count],
            queue: IndexMinPriorityQueue::with_capacity(vertex_count),
        }
    }

    /// Grows one tree from `source` until the heap drains.
    fn grow(
        &mut self,
        graph: &EdgeWeightedGraph,
        source: usize,
        forest: &mut ForestEdges,
    ) -> Result<(), MsfError> {
        self.dist_to[source] = 0.0;
        self.queue.insert(source, 0.0)?;

        while !self.queue.is_empty() {
            let v = self.queue.delete_min()?;
            self.in_tree[v] = true;
            if let Some(edge) = self.edge_to[v] {
                forest.push(edge);
            }
            self.relax(graph, v)?;
        }
        Ok(())
    }

    fn relax(&mut self, graph: &EdgeWeightedGraph, v: usize) -> Result<(), MsfError> {
        for edge in graph.adjacent(v)? {
            let w = edge.other(v)?;
            // Also skips self-loops, since `v` is already in the tree.
            if self.in_tree[w] || edge.weight() >= self.dist_to[w] {
                continue;
            }
            self.dist_to[w] = edge.weight();
            self.edge_to[w] = Some(*edge);
            if self.queue.contains(w)? {
                self.queue.decrease_key(w, edge.weight())?;
            } else {
                self.queue.insert(w, edge.weight())?;
            }
        }
        Ok(())
    }
}

impl SpanningForestAlgorithm for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    #[instrument(
        name = "msf.prim",
        err,
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError> {
        let vertex_count = graph.vertex_count();
        let mut state = PrimState::new(vertex_count);
        let mut forest = ForestEdges::with_capacity(vertex_count.saturating_sub(1));
        let mut trees = 0;

        for source in 0..vertex_count {
            if state.in_tree[source] {
                continue;
            }
            trees += 1;
            state.grow(graph, source, &mut forest)?;
        }

        Ok(forest.finish(self.name(), trees))
    }
}
