//! Timing probes.
//!
//! A probe builds two `0..n` integer inputs, then times exactly one
//! element-wise pass over them. Input construction is never part of the
//! measured region.

mod loop_probe;
mod vectorized;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{clock::Clock, clock::MonotonicClock, error::BenchResult, op::Operation};

pub use loop_probe::LoopProbe;
pub use vectorized::VectorizedProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeKind {
    Loop,
    Vectorized,
}

impl ProbeKind {
    pub fn label(self) -> &'static str {
        match self {
            ProbeKind::Loop => "Loop",
            ProbeKind::Vectorized => "Vectorized",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait Probe {
    fn kind(&self) -> ProbeKind;

    /// Element-wise result for `0..size`, without timing.
    fn compute(&self, op: Operation, size: usize) -> Vec<i64>;

    /// Elapsed time of a single element-wise pass over `0..size`.
    fn measure<C: Clock>(&self, clock: &C, op: Operation, size: usize) -> Duration;
}

/// Seconds spent by the loop probe, for an operation given by name.
pub fn time_loop(size: usize, operation: &str) -> BenchResult<f64> {
    let op: Operation = operation.parse()?;
    Ok(LoopProbe.measure(&MonotonicClock, op, size).as_secs_f64())
}

/// Seconds spent by the vectorized probe, for an operation given by name.
pub fn time_vectorized(size: usize, operation: &str) -> BenchResult<f64> {
    let op: Operation = operation.parse()?;
    Ok(VectorizedProbe.measure(&MonotonicClock, op, size).as_secs_f64())
}
