use std::hint::black_box;
use std::time::Duration;

use tracing::debug;

use super::{Probe, ProbeKind};
use crate::{clock::Clock, op::Operation};

/// Walks both inputs pair by pair, pushing each result into a fresh vector.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopProbe;

impl LoopProbe {
    pub fn inputs(size: usize) -> (Vec<i64>, Vec<i64>) {
        let lhs: Vec<i64> = (0..size as i64).collect();
        let rhs = lhs.clone();
        (lhs, rhs)
    }

    /// Dispatches on the operation once per element, the way an interpreter would.
    pub fn kernel(op: Operation, lhs: &[i64], rhs: &[i64]) -> Vec<i64> {
        let mut out = Vec::new();
        for (x, y) in lhs.iter().zip(rhs) {
            out.push(op.apply(*x, *y));
        }
        out
    }
}

impl Probe for LoopProbe {
    fn kind(&self) -> ProbeKind {
        ProbeKind::Loop
    }

    fn compute(&self, op: Operation, size: usize) -> Vec<i64> {
        let (lhs, rhs) = Self::inputs(size);
        Self::kernel(op, &lhs, &rhs)
    }

    fn measure<C: Clock>(&self, clock: &C, op: Operation, size: usize) -> Duration {
        let (lhs, rhs) = Self::inputs(size);
        let (out, elapsed) = clock.time(|| Self::kernel(op, black_box(&lhs), black_box(&rhs)));
        black_box(out);
        debug!(target: "vecbench::probe", probe = %self.kind(), %op, size, elapsed_ns = elapsed.as_nanos() as u64);
        elapsed
    }
}
