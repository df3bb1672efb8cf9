//! Minimum spanning forest (MSF) computation.
//!
//! Four greedy algorithms implement [`SpanningForestAlgorithm`]:
//!
//! - [`Kruskal`] heapifies every edge and accepts edges in weight order
//!   unless they close a cycle (cycle property).
//! - [`Prim`] (eager) grows one tree at a time, keeping the lightest known
//!   connecting edge per fringe vertex in an indexed heap (cut property).
//! - [`LazyPrim`] grows trees the same way but queues every crossing edge
//!   and discards stale ones on extraction.
//! - [`Boruvka`] repeatedly adds every component's cheapest outgoing edge.
//!
//! Each call owns its working state, so independent computations may run
//! on separate threads. A disconnected graph yields a forest with one tree
//! per connected component rather than an error.
//!
//! # Ties
//!
//! Among edges of equal weight the algorithms keep whichever they meet
//! first. That order follows graph insertion order and heap layout, and is
//! not a canonical tie-break: two algorithms may return different edge sets
//! of the same total weight.

mod boruvka;
mod kruskal;
mod lazy_prim;
mod prim;
mod verify;

use tracing::info;

use crate::{error::MsfError, graph::Edge, graph::EdgeWeightedGraph};

pub use self::{
    boruvka::Boruvka, kruskal::Kruskal, lazy_prim::LazyPrim, prim::Prim, verify::verify_forest,
};

/// A minimum spanning forest algorithm.
///
/// Implementations never mutate the graph and keep no state between calls.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, EdgeWeightedGraph, Kruskal, SpanningForestAlgorithm};
///
/// let graph = EdgeWeightedGraph::from_edges(
///     3,
///     [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(0, 2, 3.0)],
/// )?;
/// let forest = Kruskal.compute(&graph)?;
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SpanningForestAlgorithm {
    /// Returns the stable lowercase name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// Returns [`MsfError`] when an internal structure rejects an operation.
    /// For a graph built through [`EdgeWeightedGraph::add_edge`] this
    /// indicates a bug, and the computation is abandoned rather than
    /// returning a possibly wrong forest.
    fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError>;
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights, accumulated in
    /// selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of trees in the forest, which equals the number of
    /// connected components of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Accumulates selected edges and their running weight.
struct ForestEdges {
    edges: Vec<Edge>,
    total_weight: f64,
}

impl ForestEdges {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_weight: 0.0,
        }
    }

    fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn finish(self, algorithm: &'static str, component_count: usize) -> MinimumSpanningForest {
        let forest = MinimumSpanningForest {
            edges: self.edges,
            total_weight: self.total_weight,
            component_count,
        };
        record_completion(algorithm, &forest);
        forest
    }
}

fn record_completion(algorithm: &'static str, forest: &MinimumSpanningForest) {
    info!(
        algorithm,
        selected = forest.len(),
        components = forest.component_count(),
        total_weight = forest.total_weight(),
        "minimum spanning forest computed"
    );

    #[cfg(feature = "metrics")]
    record_metrics(algorithm, forest);
}

#[cfg(feature = "metrics")]
#[expect(
    clippy::cast_precision_loss,
    reason = "histogram samples are f64; edge counts stay far below 2^52"
)]
fn record_metrics(algorithm: &'static str, forest: &MinimumSpanningForest) {
    metrics::counter!("msf_computations_total", "algorithm" => algorithm).increment(1);
    metrics::histogram!("msf_selected_edges", "algorithm" => algorithm)
        .record(forest.len() as f64);
}


#[cfg(test)]
mod property;
