//! Undirected weighted edges.

use std::{cmp::Ordering, fmt};

use crate::error::GraphError;

/// An undirected edge between two vertices with an `f64` weight.
///
/// The endpoints carry no orientation: `Edge::new(3, 1, w)` and
/// `Edge::new(1, 3, w)` describe the same connection. Use [`Edge::either`]
/// and [`Edge::other`] to walk an edge from a known endpoint instead of
/// assuming which slot holds which vertex.
///
/// # Examples
/// ```
/// use spanwood_core::Edge;
///
/// let edge = Edge::new(4, 7, 0.37);
/// let v = edge.either();
/// assert_eq!(edge.other(v)?, 7);
/// assert_eq!(edge.to_string(), "4-7 0.37000");
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    a: usize,
    b: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `a` and `b`.
    ///
    /// Range and weight validation happen when the edge is added to a graph.
    #[must_use]
    pub const fn new(a: usize, b: usize, weight: f64) -> Self {
        Self { a, b, weight }
    }

    /// Returns one of the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn either(&self) -> usize { self.a }

    /// Returns both endpoints in the order they were supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.a, self.b) }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// For a self-loop the opposite endpoint is the vertex itself.
    ///
    /// # Errors
    /// Returns [`GraphError::NotAnEndpoint`] when `vertex` is neither
    /// endpoint.
    pub const fn other(&self, vertex: usize) -> Result<usize, GraphError> {
        if vertex == self.a {
            Ok(self.b)
        } else if vertex == self.b {
            Ok(self.a)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex,
                a: self.a,
                b: self.b,
            })
        }
    }

    /// Compares two edges by weight alone using IEEE total ordering.
    ///
    /// Equal weights compare [`Ordering::Equal`]; which of two tied edges an
    /// algorithm prefers depends only on the order it meets them in.
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }

    /// Returns `true` when `other` joins the same unordered vertex pair.
    #[must_use]
    pub const fn joins_same_pair(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.a, self.b, self.weight)
    }
}

/// Heap adaptor ordering edges by weight only.
///
/// Equality is weight equality, so two distinct edges of the same weight are
/// interchangeable to a heap holding them. Only used internally where that
/// is the intended semantics.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ByWeight(pub(crate) Edge);

impl PartialEq for ByWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByWeight {}

impl PartialOrd for ByWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_weight(&other.0)
    }
}
