//! Structural invariants of every computed forest.
//!
//! - no self-loops and only finite weights;
//! - acyclic;
//! - `V - C` edges for `C` input components;
//! - the reported total equals the selection-order sum exactly;
//! - a connected input yields a tree;
//! - [`crate::verify_forest`] accepts the result, including cut optimality.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MinimumSpanningForest, verify_forest};

use super::helpers::{compute_or_fail, find_root, sum_weights};
use super::types::{ALGORITHMS, MsfFixture};

/// Runs every structural check for every algorithm.
pub(super) fn run_structural_invariants_property(fixture: &MsfFixture) -> TestCaseResult {
    let input_components = count_input_components(fixture);

    for algorithm in ALGORITHMS {
        let forest = compute_or_fail(algorithm, fixture)?;
        let context = format!("{}, {}", algorithm.name(), fixture.describe());

        validate_edges(forest.edges(), &context, |edge| {
            edge.is_self_loop().then(|| "self-loop selected".to_owned())
        })?;
        validate_edges(forest.edges(), &context, |edge| {
            (!edge.weight().is_finite()).then(|| "non-finite weight".to_owned())
        })?;
        validate_acyclicity(fixture.graph.vertex_count(), forest.edges(), &context)?;
        validate_counts(fixture, &forest, input_components, &context)?;

        let summed = sum_weights(forest.edges());
        if forest.total_weight() != summed {
            return Err(TestCaseError::fail(format!(
                "total weight {} differs from selection-order sum {summed} ({context})",
                forest.total_weight(),
            )));
        }

        verify_forest(&fixture.graph, &forest)
            .map_err(|violation| TestCaseError::fail(format!("{violation} ({context})")))?;
    }
    Ok(())
}

fn validate_edges<F>(edges: &[Edge], context: &str, mut predicate: F) -> TestCaseResult
where
    F: FnMut(&Edge) -> Option<String>,
{
    for (position, edge) in edges.iter().enumerate() {
        if let Some(problem) = predicate(edge) {
            return Err(TestCaseError::fail(format!(
                "edge {position} ({edge}): {problem} ({context})"
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge], context: &str) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (position, edge) in edges.iter().enumerate() {
        let (a, b) = edge.endpoints();
        let root_a = find_root(&mut parent, a);
        let root_b = find_root(&mut parent, b);
        if root_a == root_b {
            return Err(TestCaseError::fail(format!(
                "edge {position} ({edge}) closes a cycle ({context})"
            )));
        }
        parent[root_b] = root_a;
    }
    Ok(())
}

fn validate_counts(
    fixture: &MsfFixture,
    forest: &MinimumSpanningForest,
    input_components: usize,
    context: &str,
) -> TestCaseResult {
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "reported {} components, input has {input_components} ({context})",
            forest.component_count(),
        )));
    }
    let expected = fixture.graph.vertex_count() - input_components;
    if forest.len() != expected {
        return Err(TestCaseError::fail(format!(
            "{} edges, expected V - C = {expected} ({context})",
            forest.len(),
        )));
    }
    if input_components == 1 && !forest.is_tree() {
        return Err(TestCaseError::fail(format!(
            "connected input produced a forest ({context})"
        )));
    }
    Ok(())
}

fn count_input_components(fixture: &MsfFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.graph.vertex_count()).collect();
    let mut components = parent.len();
    for edge in fixture.graph.edges() {
        let (a, b) = edge.endpoints();
        let root_a = find_root(&mut parent, a);
        let root_b = find_root(&mut parent, b);
        if root_a != root_b {
            parent[root_b] = root_a;
            components -= 1;
        }
    }
    components
}
