use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::{config::SweepConfig, op::Operation};

/// Loop duration divided by vectorized duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum Speedup {
    Ratio(f64),
    /// The vectorized probe reported exactly zero elapsed time.
    Unbounded,
    /// The loop probe reported exactly zero elapsed time, so no ratio exists.
    Unmeasured,
}

impl Speedup {
    pub fn between(loop_elapsed: Duration, vectorized_elapsed: Duration) -> Self {
        if loop_elapsed.is_zero() {
            Speedup::Unmeasured
        } else if vectorized_elapsed.is_zero() {
            Speedup::Unbounded
        } else {
            Speedup::Ratio(loop_elapsed.as_nanos() as f64 / vectorized_elapsed.as_nanos() as f64)
        }
    }

    pub fn ratio(self) -> Option<f64> {
        match self {
            Speedup::Ratio(r) => Some(r),
            Speedup::Unbounded | Speedup::Unmeasured => None,
        }
    }
}

impl From<Speedup> for Option<f64> {
    fn from(value: Speedup) -> Self {
        value.ratio()
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Ratio(r) => write!(f, "{:.2}x", r),
            Speedup::Unbounded => f.write_str("unbounded"),
            Speedup::Unmeasured => f.write_str("n/a"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub size: usize,
    pub loop_secs: f64,
    pub vectorized_secs: f64,
    pub speedup: Speedup,
}

impl SweepPoint {
    pub fn new(size: usize, loop_elapsed: Duration, vectorized_elapsed: Duration) -> Self {
        Self {
            size,
            loop_secs: loop_elapsed.as_secs_f64(),
            vectorized_secs: vectorized_elapsed.as_secs_f64(),
            speedup: Speedup::between(loop_elapsed, vectorized_elapsed),
        }
    }
}

/// One finished sweep. `points[i]` belongs to the i-th entry of the size
/// sequence for both probes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub operation: Operation,
    pub config: SweepConfig,
    pub points: Vec<SweepPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    /// `None` when no point produced a finite ratio.
    pub max_speedup: Option<f64>,
    pub min_speedup: Option<f64>,
    pub vectorized_always_faster: bool,
    /// Points where either probe read exactly zero seconds. These have no
    /// finite ratio and cannot be placed on a log axis.
    pub zero_readings: usize,
}

impl SweepReport {
    pub fn sizes(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.size).collect()
    }

    pub fn loop_durations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.loop_secs).collect()
    }

    pub fn vectorized_durations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.vectorized_secs).collect()
    }

    pub fn speedups(&self) -> Vec<Speedup> {
        self.points.iter().map(|p| p.speedup).collect()
    }

    pub fn summary(&self) -> SweepSummary {
        let ratios: Vec<f64> = self.points.iter().filter_map(|p| p.speedup.ratio()).collect();
        let max_speedup = ratios.iter().copied().reduce(f64::max);
        let min_speedup = ratios.iter().copied().reduce(f64::min);
        let vectorized_always_faster = !self.points.is_empty()
            && self.points.iter().all(|p| match p.speedup {
                Speedup::Ratio(r) => r > 1.0,
                Speedup::Unbounded => true,
                Speedup::Unmeasured => false,
            });
        let zero_readings = self
            .points
            .iter()
            .filter(|p| p.loop_secs == 0.0 || p.vectorized_secs == 0.0)
            .count();
        SweepSummary {
            max_speedup,
            min_speedup,
            vectorized_always_faster,
            zero_readings,
        }
    }
}
