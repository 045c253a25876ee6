use std::hint::black_box;
use std::time::Duration;

use ndarray::Array1;
use tracing::debug;

use super::{Probe, ProbeKind};
use crate::{clock::Clock, op::Operation};

/// Evaluates the operation as one bulk `ndarray` expression.
///
/// Element arithmetic is not wrapping; sizes above
/// [`MAX_SIZE_CEILING`](crate::config::MAX_SIZE_CEILING) overflow `i64`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VectorizedProbe;

impl VectorizedProbe {
    pub fn inputs(size: usize) -> (Array1<i64>, Array1<i64>) {
        let lhs = Array1::from_iter(0..size as i64);
        let rhs = lhs.clone();
        (lhs, rhs)
    }

    pub fn kernel(op: Operation, lhs: &Array1<i64>, rhs: &Array1<i64>) -> Array1<i64> {
        match op {
            Operation::Addition => lhs + rhs,
            Operation::Multiplication => lhs * rhs,
            Operation::Power => lhs * lhs,
        }
    }
}

impl Probe for VectorizedProbe {
    fn kind(&self) -> ProbeKind {
        ProbeKind::Vectorized
    }

    fn compute(&self, op: Operation, size: usize) -> Vec<i64> {
        let (lhs, rhs) = Self::inputs(size);
        Self::kernel(op, &lhs, &rhs).to_vec()
    }

    fn measure<C: Clock>(&self, clock: &C, op: Operation, size: usize) -> Duration {
        let (lhs, rhs) = Self::inputs(size);
        let (out, elapsed) = clock.time(|| Self::kernel(op, black_box(&lhs), black_box(&rhs)));
        black_box(out);
        debug!(target: "vecbench::probe", probe = %self.kind(), %op, size, elapsed_ns = elapsed.as_nanos() as u64);
        elapsed
    }
}
