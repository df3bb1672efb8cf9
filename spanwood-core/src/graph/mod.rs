//! Undirected edge-weighted graph.
//!
//! Edges live once in an arena; each vertex's adjacency list stores arena
//! offsets. That keeps the "every edge in both adjacency lists" relation
//! without duplicating edge values, and makes [`EdgeWeightedGraph::edges`]
//! yield each edge exactly once without any filtering.

mod edge;

use std::fmt;

use crate::error::GraphError;

pub use self::edge::Edge;
pub(crate) use self::edge::ByWeight;

/// An undirected graph with `f64` edge weights over vertices `0..V`.
///
/// The vertex count is fixed at construction. Edges are added with
/// [`EdgeWeightedGraph::add_edge`]; self-loops and parallel edges are
/// accepted. A self-loop is listed **once** in its vertex's adjacency, so
/// [`EdgeWeightedGraph::degree`] counts it once.
///
/// Enumeration order, both for [`EdgeWeightedGraph::edges`] and for each
/// adjacency list, is insertion order. Algorithms that break weight ties by
/// first-seen edge therefore break them by insertion order.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, EdgeWeightedGraph};
///
/// let mut graph = EdgeWeightedGraph::new(3);
/// graph.add_edge(Edge::new(0, 1, 0.5))?;
/// graph.add_edge(Edge::new(1, 2, 0.25))?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(1)?, 2);
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeWeightedGraph {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl EdgeWeightedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// # Errors
    /// Returns the first error [`EdgeWeightedGraph::add_edge`] reports.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an undirected edge.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of this graph and [`GraphError::NonFiniteWeight`] when the
    /// weight is NaN or infinite. The graph is unchanged on error.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let (a, b) = edge.endpoints();
        self.validate_vertex(a)?;
        self.validate_vertex(b)?;
        if !edge.weight().is_finite() {
            return Err(GraphError::NonFiniteWeight { a, b });
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.adjacency[a].push(id);
        if a != b {
            self.adjacency[b].push(id);
        }
        Ok(())
    }

    /// Iterates over the edges incident to `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn adjacent(&self, vertex: usize) -> Result<impl Iterator<Item = &Edge> + '_, GraphError> {
        self.validate_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().map(|&id| &self.edges[id]))
    }

    /// Returns the number of adjacency entries of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.validate_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Iterates over every edge exactly once, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Returns `true` when `vertex` is a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    pub(crate) fn validate_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;
        for (vertex, ids) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex}:")?;
            for &id in ids {
                write!(f, " {}", self.edges[id])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
