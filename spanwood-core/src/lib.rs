//! Spanwood core library.
//!
//! Computes minimum spanning forests over undirected edge-weighted graphs
//! with four interchangeable greedy algorithms (Kruskal, eager Prim, lazy
//! Prim and Borůvka), together with the union-find and heap structures they
//! are built from.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod error;
mod graph;
mod mst;
mod queue;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{Algorithm, MsfBuilder, MsfSolver, ParseAlgorithmError},
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, ErrorKind, ForestViolation, ForestViolationCode,
        GraphError, GraphErrorCode, MsfError, MsfErrorCode, QueueError, QueueErrorCode,
    },
    graph::{Edge, EdgeWeightedGraph},
    mst::{
        Boruvka, Kruskal, LazyPrim, MinimumSpanningForest, Prim, SpanningForestAlgorithm,
        verify_forest,
    },
    queue::{IndexMinPriorityQueue, MinPriorityQueue},
};
