//! Round bound for Borůvka.
//!
//! Every merging round at least doubles the size of each component that
//! still has an outgoing edge, so a graph on `V` vertices needs at most
//! `max(1, ceil(log2 V))` rounds, counting the final round that finds
//! nothing to merge. The count is read back from the `rounds` field of the
//! `msf.boruvka` span.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use spanwood_test_support::tracing::RecordingLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use crate::{Boruvka, SpanningForestAlgorithm};

use super::types::MsfFixture;

/// Upper bound on Borůvka rounds for `vertex_count` vertices.
pub(super) fn round_bound(vertex_count: usize) -> usize {
    let ceil_log2 = vertex_count.next_power_of_two().trailing_zeros() as usize;
    ceil_log2.max(1)
}

/// Runs Borůvka under a recording subscriber and checks the round count.
pub(super) fn run_boruvka_round_bound_property(fixture: &MsfFixture) -> TestCaseResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || Boruvka.compute(&fixture.graph)).map_err(
        |err| TestCaseError::fail(format!("boruvka failed: {err} ({})", fixture.describe())),
    )?;

    let span = layer.span_named("msf.boruvka").ok_or_else(|| {
        TestCaseError::fail(format!("no msf.boruvka span ({})", fixture.describe()))
    })?;
    let rounds: usize = span
        .field("rounds")
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| {
            TestCaseError::fail(format!("rounds not recorded ({})", fixture.describe()))
        })?;

    let bound = round_bound(fixture.graph.vertex_count());
    if rounds > bound {
        return Err(TestCaseError::fail(format!(
            "{rounds} rounds exceed the bound of {bound} ({})",
            fixture.describe(),
        )));
    }
    let logged = layer.events_at(Level::DEBUG).len();
    if logged != rounds {
        return Err(TestCaseError::fail(format!(
            "{logged} round events for {rounds} rounds ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
