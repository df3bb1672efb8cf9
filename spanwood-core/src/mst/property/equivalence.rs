//! Agreement of every algorithm with the reference solutions.
//!
//! Different algorithms may pick different edges among equal weights, so
//! only the total weight, edge count and component count are compared.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{compute_or_fail, weights_agree};
use super::oracle::{exhaustive_minimum, sequential_kruskal};
use super::types::{ALGORITHMS, MsfFixture};

/// Compares each algorithm with the sort-based oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &MsfFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(&fixture.graph);

    for algorithm in ALGORITHMS {
        let forest = compute_or_fail(algorithm, fixture)?;
        let name = algorithm.name();

        if !weights_agree(forest.total_weight(), oracle.total_weight) {
            return Err(TestCaseError::fail(format!(
                "{name}: total weight {} but oracle found {} ({})",
                forest.total_weight(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }
        if forest.len() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{name}: {} edges but oracle selected {} ({})",
                forest.len(),
                oracle.edge_count,
                fixture.describe(),
            )));
        }
        if forest.component_count() != oracle.component_count {
            return Err(TestCaseError::fail(format!(
                "{name}: {} components but oracle counted {} ({})",
                forest.component_count(),
                oracle.component_count,
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

/// Compares each algorithm with exhaustive search on a tiny graph.
pub(super) fn run_exhaustive_minimum_property(fixture: &MsfFixture) -> TestCaseResult {
    let minimum = exhaustive_minimum(&fixture.graph);

    for algorithm in ALGORITHMS {
        let forest = compute_or_fail(algorithm, fixture)?;
        if !weights_agree(forest.total_weight(), minimum) {
            return Err(TestCaseError::fail(format!(
                "{}: total weight {} but the minimum is {minimum} ({})\n{}",
                algorithm.name(),
                forest.total_weight(),
                fixture.describe(),
                fixture.graph,
            )));
        }
    }
    Ok(())
}
