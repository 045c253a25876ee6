//! Loop vs vectorized element-wise benchmark core.
//!
//! Everything here is synchronous and single-threaded: a sweep measures one
//! probe at a time so CPU work from one measurement never overlaps another.

pub mod clock;
pub mod config;
pub mod error;
pub mod op;
pub mod probe;
pub mod sweep;

pub use clock::{Clock, MonotonicClock, ScriptedClock};
pub use config::SweepConfig;
pub use error::{BenchError, BenchResult};
pub use op::Operation;
pub use probe::{LoopProbe, Probe, ProbeKind, VectorizedProbe};
pub use sweep::{Speedup, SweepPoint, SweepReport, SweepSummary, run_sweep, sweep};
