use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Smallest minimum size the dashboard input accepts.
pub const MIN_SIZE_FLOOR: usize = 1_000;
/// Smallest maximum size the dashboard input accepts.
pub const MAX_SIZE_FLOOR: usize = 10_000;
/// Largest array size whose elements `0..n` can be squared without
/// overflowing `i64` (`(n - 1)^2 <= i64::MAX`).
pub const MAX_SIZE_CEILING: usize = 3_037_000_500;
pub const COUNT_MIN: usize = 2;
pub const COUNT_MAX: usize = 10;

/// Validated sweep range. Construction goes through [`SweepConfig::new`], so
/// every value of this type yields a well-formed size sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSweepConfig")]
pub struct SweepConfig {
    min_size: usize,
    max_size: usize,
    count: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSweepConfig {
    min_size: usize,
    max_size: usize,
    count: usize,
}

impl TryFrom<RawSweepConfig> for SweepConfig {
    type Error = BenchError;

    fn try_from(raw: RawSweepConfig) -> Result<Self, Self::Error> {
        SweepConfig::new(raw.min_size, raw.max_size, raw.count)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_size: 10_000,
            max_size: 10_000_000,
            count: 5,
        }
    }
}

impl SweepConfig {
    pub fn new(min_size: usize, max_size: usize, count: usize) -> BenchResult<Self> {
        if min_size == 0 {
            return Err(BenchError::ZeroSize);
        }
        if min_size > max_size {
            return Err(BenchError::MinExceedsMax {
                min: min_size,
                max: max_size,
            });
        }
        if max_size > MAX_SIZE_CEILING {
            return Err(BenchError::OutOfBounds {
                field: "max_size",
                value: max_size,
                bound: format!("<= {}", MAX_SIZE_CEILING),
            });
        }
        if count < COUNT_MIN {
            return Err(BenchError::TooFewPoints(count));
        }
        Ok(Self {
            min_size,
            max_size,
            count,
        })
    }

    /// Like [`SweepConfig::new`], but also holds the values to the ranges
    /// offered by the dashboard inputs. The upper bound on `max_size` is
    /// [`MAX_SIZE_CEILING`], enforced by `new`.
    pub fn from_inputs(min_size: usize, max_size: usize, count: usize) -> BenchResult<Self> {
        if min_size < MIN_SIZE_FLOOR {
            return Err(BenchError::OutOfBounds {
                field: "min_size",
                value: min_size,
                bound: format!(">= {}", MIN_SIZE_FLOOR),
            });
        }
        if max_size < MAX_SIZE_FLOOR {
            return Err(BenchError::OutOfBounds {
                field: "max_size",
                value: max_size,
                bound: format!(">= {}", MAX_SIZE_FLOOR),
            });
        }
        if !(COUNT_MIN..=COUNT_MAX).contains(&count) {
            return Err(BenchError::OutOfBounds {
                field: "count",
                value: count,
                bound: format!("{}..={}", COUNT_MIN, COUNT_MAX),
            });
        }
        Self::new(min_size, max_size, count)
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Log-spaced sizes from `min_size` to `max_size`, `count` entries long.
    ///
    /// Interior points are `round(10^e)` for evenly spaced exponents; the
    /// endpoints are exact. The sequence is non-decreasing and stays inside
    /// `[min_size, max_size]`.
    pub fn sizes(&self) -> Vec<usize> {
        let lo = (self.min_size as f64).log10();
        let hi = (self.max_size as f64).log10();
        let last = self.count - 1;
        let step = (hi - lo) / last as f64;
        (0..self.count)
            .map(|i| match i {
                0 => self.min_size,
                i if i == last => self.max_size,
                i => {
                    let exponent = lo + step * i as f64;
                    (10f64.powf(exponent).round() as usize).clamp(self.min_size, self.max_size)
                }
            })
            .collect()
    }
}
