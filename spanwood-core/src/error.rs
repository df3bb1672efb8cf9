//! Error types for the spanwood core library.
//!
//! Each component owns its own error enum. Every variant carries a stable
//! machine-readable code and maps onto one of the four [`ErrorKind`]s that
//! callers can branch on without matching individual variants.

use std::fmt;

use thiserror::Error;

use crate::graph::Edge;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )?
                    => $code:expr, $kind:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the broad failure category this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Return the broad failure category of this error.
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Broad failure categories shared by every error in the crate.
///
/// None of these are recoverable inside the engine: an operation either
/// succeeds or fails fast with one of these kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A caller supplied an out-of-range index or an unusable value.
    InvalidArgument,
    /// A priority queue was read or popped while empty.
    Underflow,
    /// An index was inserted into an indexed queue twice.
    DuplicateIndex,
    /// An operation was applied in a state that forbids it, usually a
    /// broken invariant inside an algorithm.
    InvalidState,
}

impl ErrorKind {
    /// Returns a stable lowercase identifier for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Underflow => "underflow",
            Self::DuplicateIndex => "duplicate_index",
            Self::InvalidState => "invalid_state",
        }
    }
}

/// An error produced while building or querying an [`crate::EdgeWeightedGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge {a}-{b} has a non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as provided.
        a: usize,
        /// Second endpoint as provided.
        b: usize,
    },
    /// [`crate::Edge::other`] was asked about a vertex the edge does not touch.
    #[error("vertex {vertex} is not an endpoint of edge {a}-{b}")]
    NotAnEndpoint {
        /// The vertex that was queried.
        vertex: usize,
        /// First endpoint of the edge.
        a: usize,
        /// Second endpoint of the edge.
        b: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex id fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE", InvalidArgument,
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT", InvalidArgument,
        /// A vertex was not an endpoint of the queried edge.
        NotAnEndpoint => NotAnEndpoint { .. } => "GRAPH_NOT_AN_ENDPOINT", InvalidArgument,
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// An element id fell outside `[0, len)`.
    #[error("element {element} is out of range for a disjoint set of {len} elements")]
    ElementOutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// An element id fell outside the structure.
        ElementOutOfRange => ElementOutOfRange { .. } => "DISJOINT_SET_ELEMENT_OUT_OF_RANGE", InvalidArgument,
    }
}

/// An error produced by [`crate::IndexMinPriorityQueue`] and
/// [`crate::MinPriorityQueue`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// The queue was empty.
    #[error("priority queue underflow")]
    Underflow,
    /// An index fell outside `[0, capacity)`.
    #[error("index {index} is out of range for a queue of capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Maximum index plus one.
        capacity: usize,
    },
    /// The index is already present in the queue.
    #[error("index {index} is already in the priority queue")]
    DuplicateIndex {
        /// The duplicated index.
        index: usize,
    },
    /// The index is not present in the queue.
    #[error("index {index} is not in the priority queue")]
    IndexNotPresent {
        /// The missing index.
        index: usize,
    },
    /// A decrease-key call did not strictly decrease the key.
    #[error("new key for index {index} is not strictly less than the current key")]
    KeyNotDecreased {
        /// The index whose key was not decreased.
        index: usize,
    },
    /// An increase-key call did not strictly increase the key.
    #[error("new key for index {index} is not strictly greater than the current key")]
    KeyNotIncreased {
        /// The index whose key was not increased.
        index: usize,
    },
    /// A key was NaN, which has no place in a total order.
    #[error("key for index {index} is NaN")]
    NanKey {
        /// The index whose key was rejected.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// The queue was empty.
        Underflow => Underflow => "QUEUE_UNDERFLOW", Underflow,
        /// An index fell outside the queue capacity.
        IndexOutOfRange => IndexOutOfRange { .. } => "QUEUE_INDEX_OUT_OF_RANGE", InvalidArgument,
        /// The index is already present in the queue.
        DuplicateIndex => DuplicateIndex { .. } => "QUEUE_DUPLICATE_INDEX", DuplicateIndex,
        /// The index is not present in the queue.
        IndexNotPresent => IndexNotPresent { .. } => "QUEUE_INDEX_NOT_PRESENT", InvalidState,
        /// A decrease-key call did not strictly decrease the key.
        KeyNotDecreased => KeyNotDecreased { .. } => "QUEUE_KEY_NOT_DECREASED", InvalidState,
        /// An increase-key call did not strictly increase the key.
        KeyNotIncreased => KeyNotIncreased { .. } => "QUEUE_KEY_NOT_INCREASED", InvalidState,
        /// A key was NaN.
        NanKey => NanKey { .. } => "QUEUE_NAN_KEY", InvalidArgument,
    }
}

/// A property a minimum spanning forest must satisfy but does not, as
/// reported by [`crate::verify_forest`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ForestViolation {
    /// The reported total weight differs from the sum of the edge weights.
    #[error("reported total weight {reported} but edges sum to {summed}")]
    WeightMismatch {
        /// Total weight stored in the forest.
        reported: f64,
        /// Sum of the forest's edge weights.
        summed: f64,
    },
    /// A forest edge does not exist in the graph.
    #[error("forest edge {edge} at position {position} is not an edge of the graph")]
    ForeignEdge {
        /// Position of the edge in the forest's edge list.
        position: usize,
        /// The offending edge.
        edge: Edge,
    },
    /// A forest edge closes a cycle with earlier forest edges.
    #[error("forest edge {edge} at position {position} closes a cycle")]
    Cycle {
        /// Position of the edge in the forest's edge list.
        position: usize,
        /// The offending edge.
        edge: Edge,
    },
    /// The forest does not have `V - C` edges.
    #[error("forest has {actual} edges but the graph needs {expected}")]
    EdgeCount {
        /// Number of edges in the forest.
        actual: usize,
        /// `V - C` for the input graph.
        expected: usize,
    },
    /// The reported component count differs from the graph's.
    #[error("forest reports {reported} components but the graph has {actual}")]
    ComponentCount {
        /// Component count stored in the forest.
        reported: usize,
        /// Connected components of the input graph.
        actual: usize,
    },
    /// A graph edge crossing the cut defined by a forest edge is lighter
    /// than that forest edge.
    #[error("edge {crossing} crosses the cut of forest edge {forest_edge} but is lighter")]
    CutOptimality {
        /// The forest edge whose removal defines the cut.
        forest_edge: Edge,
        /// The lighter graph edge crossing that cut.
        crossing: Edge,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestViolation`] variants.
    enum ForestViolationCode for ForestViolation {
        /// Reported total weight differs from the edge sum.
        WeightMismatch => WeightMismatch { .. } => "FOREST_WEIGHT_MISMATCH", InvalidState,
        /// A forest edge does not exist in the graph.
        ForeignEdge => ForeignEdge { .. } => "FOREST_FOREIGN_EDGE", InvalidState,
        /// A forest edge closes a cycle.
        Cycle => Cycle { .. } => "FOREST_CYCLE", InvalidState,
        /// The forest does not have `V - C` edges.
        EdgeCount => EdgeCount { .. } => "FOREST_EDGE_COUNT", InvalidState,
        /// The reported component count is wrong.
        ComponentCount => ComponentCount { .. } => "FOREST_COMPONENT_COUNT", InvalidState,
        /// A lighter edge crosses a forest edge's cut.
        CutOptimality => CutOptimality { .. } => "FOREST_CUT_OPTIMALITY", InvalidState,
    }
}

/// Error returned while computing a minimum spanning forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MsfError {
    /// The input graph was queried with an invalid vertex.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The union-find structure rejected an operation.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
    /// The priority queue rejected an operation.
    #[error(transparent)]
    Queue(#[from] QueueError),
    /// The computed forest failed post-computation verification.
    #[error("{algorithm} produced an invalid forest: {violation}")]
    Verification {
        /// Name of the algorithm that produced the forest.
        algorithm: &'static str,
        #[source]
        /// The first violated property.
        violation: ForestViolation,
    },
}

define_error_codes! {
    /// Stable codes describing [`MsfError`] variants.
    enum MsfErrorCode for MsfError {
        /// The input graph was queried with an invalid vertex.
        Graph => Graph(..) => "MSF_GRAPH", InvalidArgument,
        /// The union-find structure rejected an operation.
        DisjointSet => DisjointSet(..) => "MSF_DISJOINT_SET", InvalidArgument,
        /// The priority queue rejected an operation.
        Queue => Queue(..) => "MSF_QUEUE", InvalidState,
        /// The computed forest failed verification.
        Verification => Verification { .. } => "MSF_VERIFICATION", InvalidState,
    }
}

impl MsfError {
    /// Returns the [`ErrorKind`] of the innermost error.
    ///
    /// [`MsfError::kind`] reports the wrapper's own category; this method
    /// looks through wrapped component errors so an underflow inside an
    /// algorithm still reports [`ErrorKind::Underflow`].
    #[must_use]
    pub const fn root_kind(&self) -> ErrorKind {
        match self {
            Self::Graph(error) => error.kind(),
            Self::DisjointSet(error) => error.kind(),
            Self::Queue(error) => error.kind(),
            Self::Verification { .. } => ErrorKind::InvalidState,
        }
    }
}
