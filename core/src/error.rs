use std::fmt;

/// Failures surfaced to the caller of a probe or a sweep.
///
/// Every variant is produced synchronously and locally; nothing here is
/// retried because a retried measurement is just another noisy sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// The operation name did not match any known element-wise operation.
    UnknownOperation(String),
    /// A sweep cannot start from an empty array.
    ZeroSize,
    MinExceedsMax { min: usize, max: usize },
    TooFewPoints(usize),
    /// A dashboard input fell outside the range the input widgets allow.
    OutOfBounds {
        field: &'static str,
        value: usize,
        bound: String,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::UnknownOperation(name) => write!(
                f,
                "unrecognized operation '{}' (expected one of Addition, Multiplication, Power)",
                name
            ),
            BenchError::ZeroSize => write!(f, "minimum array size must be at least 1"),
            BenchError::MinExceedsMax { min, max } => {
                write!(f, "minimum array size {} exceeds maximum array size {}", min, max)
            }
            BenchError::TooFewPoints(count) => {
                write!(f, "a sweep needs at least 2 sample points, got {}", count)
            }
            BenchError::OutOfBounds { field, value, bound } => {
                write!(f, "{} = {} is out of bounds (expected {})", field, value, bound)
            }
        }
    }
}

impl std::error::Error for BenchError {}

pub type BenchResult<T> = Result<T, BenchError>;
