//! Helpers shared by the property modules.

use proptest::test_runner::TestCaseError;

use crate::{Edge, MinimumSpanningForest, SpanningForestAlgorithm};

use super::types::MsfFixture;

/// Relative tolerance for weights summed in different orders.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Path-halving find over a bare parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums edge weights in slice order.
pub(super) fn sum_weights(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}

/// Returns `true` when two totals agree up to summation order.
pub(super) fn weights_agree(left: f64, right: f64) -> bool {
    (left - right).abs() <= WEIGHT_TOLERANCE * left.abs().max(right.abs()).max(1.0)
}

/// Runs `algorithm`, turning an error into a test failure with context.
pub(super) fn compute_or_fail(
    algorithm: &dyn SpanningForestAlgorithm,
    fixture: &MsfFixture,
) -> Result<MinimumSpanningForest, TestCaseError> {
    algorithm.compute(&fixture.graph).map_err(|err| {
        TestCaseError::fail(format!(
            "{} failed: {err} ({})",
            algorithm.name(),
            fixture.describe(),
        ))
    })
}
