//! Wall-clock capability used by the probes.
//!
//! Probes never read a clock directly; they hand the computation to a
//! [`Clock`] which reports how long it took. Tests swap in a
//! [`ScriptedClock`] to get deterministic durations.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Run `work` and return its output together with the elapsed time.
    fn time<R>(&self, work: impl FnOnce() -> R) -> (R, Duration);
}

/// Monotonic clock backed by [`Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn time<R>(&self, work: impl FnOnce() -> R) -> (R, Duration) {
        let start = Instant::now();
        let out = work();
        (out, start.elapsed())
    }
}

/// Replays a fixed list of durations, one per call, in order.
///
/// Once the script runs out the last duration repeats; an empty script
/// always reports zero. The computation itself still runs.
#[derive(Debug, Default)]
pub struct ScriptedClock {
    script: Vec<Duration>,
    calls: Cell<usize>,
}

impl ScriptedClock {
    pub fn new(script: Vec<Duration>) -> Self {
        Self {
            script,
            calls: Cell::new(0),
        }
    }

    /// Clock that reports the same duration for every call.
    pub fn constant(duration: Duration) -> Self {
        Self::new(vec![duration])
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Clock for ScriptedClock {
    fn time<R>(&self, work: impl FnOnce() -> R) -> (R, Duration) {
        let idx = self.calls.get();
        self.calls.set(idx + 1);
        let out = work();
        let elapsed = self
            .script
            .get(idx)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(Duration::ZERO);
        (out, elapsed)
    }
}
