//! Algorithm selection and solver configuration.
//!
//! [`MsfBuilder`] collects the chosen [`Algorithm`] and whether results are
//! verified, then produces an immutable [`MsfSolver`].

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::instrument;

use crate::{
    error::MsfError,
    graph::EdgeWeightedGraph,
    mst::{
        Boruvka, Kruskal, LazyPrim, MinimumSpanningForest, Prim, SpanningForestAlgorithm,
        verify_forest,
    },
};

/// Names one of the available spanning forest algorithms.
///
/// # Examples
/// ```
/// use spanwood_core::Algorithm;
///
/// let algorithm: Algorithm = "Lazy-Prim".parse()?;
/// assert_eq!(algorithm, Algorithm::LazyPrim);
/// assert_eq!(algorithm.as_str(), "lazy-prim");
/// # Ok::<(), spanwood_core::ParseAlgorithmError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// [`Kruskal`].
    #[default]
    Kruskal,
    /// Eager [`Prim`].
    Prim,
    /// [`LazyPrim`].
    LazyPrim,
    /// [`Boruvka`].
    Boruvka,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 4] = [Self::Kruskal, Self::Prim, Self::LazyPrim, Self::Boruvka];

    /// Returns the canonical lowercase name, matching
    /// [`SpanningForestAlgorithm::name`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::LazyPrim => "lazy-prim",
            Self::Boruvka => "boruvka",
        }
    }

    fn implementation(self) -> &'static dyn SpanningForestAlgorithm {
        match self {
            Self::Kruskal => &Kruskal,
            Self::Prim => &Prim,
            Self::LazyPrim => &LazyPrim,
            Self::Boruvka => &Boruvka,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known algorithm.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown spanning forest algorithm `{input}`")]
pub struct ParseAlgorithmError {
    input: String,
}

impl ParseAlgorithmError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" | "eager-prim" | "eager_prim" => Ok(Self::Prim),
            "lazy-prim" | "lazy_prim" => Ok(Self::LazyPrim),
            "boruvka" | "borůvka" => Ok(Self::Boruvka),
            _ => Err(ParseAlgorithmError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Configures and constructs [`MsfSolver`] instances.
///
/// # Examples
/// ```
/// use spanwood_core::{Algorithm, Edge, EdgeWeightedGraph, MsfBuilder};
///
/// let solver = MsfBuilder::new()
///     .with_algorithm(Algorithm::Boruvka)
///     .with_verification(true)
///     .build();
/// let graph = EdgeWeightedGraph::from_edges(2, [Edge::new(0, 1, 0.5)])?;
/// let forest = solver.compute(&graph)?;
/// assert_eq!(forest.total_weight(), 0.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MsfBuilder {
    algorithm: Algorithm,
    verify: bool,
}

impl MsfBuilder {
    /// Creates a builder selecting [`Algorithm::Kruskal`] without
    /// verification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm the solver runs.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the selected algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Enables or disables [`verify_forest`] on every result.
    #[must_use]
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    /// Returns whether results will be verified.
    #[must_use]
    #[rustfmt::skip]
    pub fn verification(&self) -> bool { self.verify }

    /// Constructs the solver. Every configuration is valid.
    #[must_use]
    pub fn build(self) -> MsfSolver {
        MsfSolver {
            algorithm: self.algorithm,
            verify: self.verify,
        }
    }
}

/// Runs the configured algorithm, optionally verifying its output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MsfSolver {
    algorithm: Algorithm,
    verify: bool,
}

impl MsfSolver {
    /// Returns the configured algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns whether results are verified.
    #[must_use]
    #[rustfmt::skip]
    pub fn verification(&self) -> bool { self.verify }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// Propagates the algorithm's [`MsfError`]. With verification enabled,
    /// a result failing [`verify_forest`] becomes
    /// [`MsfError::Verification`].
    #[instrument(name = "msf.solve", err, skip_all, fields(algorithm = %self.algorithm, verify = self.verify))]
    pub fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError> {
        let forest = self.algorithm.implementation().compute(graph)?;
        if self.verify {
            verify_forest(graph, &forest).map_err(|violation| MsfError::Verification {
                algorithm: self.algorithm.as_str(),
                violation,
            })?;
        }
        Ok(forest)
    }
}

impl SpanningForestAlgorithm for MsfSolver {
    fn name(&self) -> &'static str {
        self.algorithm.as_str()
    }

    fn compute(&self, graph: &EdgeWeightedGraph) -> Result<MinimumSpanningForest, MsfError> {
        Self::compute(self, graph)
    }
}
