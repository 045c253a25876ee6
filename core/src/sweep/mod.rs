//! Sequential parameter sweep over the configured size sequence.

mod report;
#[cfg(test)]
mod sweep_test;

use std::time::Instant;

use tracing::info;

use crate::{
    clock::{Clock, MonotonicClock},
    config::SweepConfig,
    error::BenchResult,
    op::Operation,
    probe::{LoopProbe, Probe, VectorizedProbe},
};

pub use report::{Speedup, SweepPoint, SweepReport, SweepSummary};

/// Measure both probes once per size, smallest size first.
///
/// For every size the loop probe finishes before the vectorized probe
/// starts; sizes never overlap.
pub fn run_sweep<C: Clock>(config: &SweepConfig, op: Operation, clock: &C) -> SweepReport {
    let sizes = config.sizes();
    info!(
        target: "vecbench::sweep",
        %op,
        min = config.min_size(),
        max = config.max_size(),
        count = config.count(),
        "starting sweep"
    );
    let started = Instant::now();

    let points: Vec<SweepPoint> = sizes
        .iter()
        .map(|&size| {
            let loop_elapsed = LoopProbe.measure(clock, op, size);
            let vectorized_elapsed = VectorizedProbe.measure(clock, op, size);
            SweepPoint::new(size, loop_elapsed, vectorized_elapsed)
        })
        .collect();

    info!(
        target: "vecbench::sweep",
        %op,
        points = points.len(),
        wall_ms = started.elapsed().as_millis() as u64,
        "sweep finished"
    );
    SweepReport {
        operation: op,
        config: *config,
        points,
    }
}

/// Run a sweep on the monotonic clock for an operation given by name.
pub fn sweep(config: &SweepConfig, operation: &str) -> BenchResult<SweepReport> {
    let op: Operation = operation.parse()?;
    Ok(run_sweep(config, op, &MonotonicClock))
}
