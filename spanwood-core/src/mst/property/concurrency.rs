//! Determinism and thread isolation.
//!
//! Each algorithm owns all of its working state, so repeating a computation
//! or running many at once on a shared graph must reproduce the sequential
//! edge list bit for bit.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rayon::prelude::*;

use super::helpers::compute_or_fail;
use super::types::{ALGORITHMS, DeterminismConfig, MsfFixture};

/// Parallel computations launched per algorithm.
const PARALLEL_RUNS: usize = 8;

/// Repeats each computation and demands identical output.
pub(super) fn run_determinism_property(fixture: &MsfFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();

    for algorithm in ALGORITHMS {
        let baseline = compute_or_fail(algorithm, fixture)?;
        for run in 1..config.repetitions {
            let repeat = compute_or_fail(algorithm, fixture)?;
            if repeat != baseline {
                return Err(TestCaseError::fail(format!(
                    "{}: run {run} diverged from the first run ({})",
                    algorithm.name(),
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}

/// Runs every algorithm concurrently on rayon workers against one shared
/// graph and compares each result with a sequential baseline.
pub(super) fn run_parallel_isolation_property(fixture: &MsfFixture) -> TestCaseResult {
    let baselines = ALGORITHMS
        .iter()
        .map(|algorithm| compute_or_fail(*algorithm, fixture))
        .collect::<Result<Vec<_>, _>>()?;

    let graph = &fixture.graph;
    let diverged: Vec<String> = (0..ALGORITHMS.len() * PARALLEL_RUNS)
        .into_par_iter()
        .filter_map(|job| {
            let slot = job % ALGORITHMS.len();
            let algorithm = ALGORITHMS[slot];
            match algorithm.compute(graph) {
                Ok(forest) if forest == baselines[slot] => None,
                Ok(_) => Some(format!("{}: job {job} diverged", algorithm.name())),
                Err(err) => Some(format!("{}: job {job} failed: {err}", algorithm.name())),
            }
        })
        .collect();

    if diverged.is_empty() {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{} ({})",
            diverged.join("; "),
            fixture.describe(),
        )))
    }
}
