use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Element-wise operation applied by both probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Multiplication,
    /// Squares the first operand; the second one is ignored.
    Power,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Addition, Operation::Multiplication, Operation::Power];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Multiplication => "Multiplication",
            Operation::Power => "Power",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Multiplication => "*",
            Operation::Power => "**",
        }
    }

    /// Scalar formula used by the loop kernel. Wraps on `i64` overflow.
    #[inline]
    pub fn apply(self, x: i64, y: i64) -> i64 {
        match self {
            Operation::Addition => x.wrapping_add(y),
            Operation::Multiplication => x.wrapping_mul(y),
            Operation::Power => x.wrapping_mul(x),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = BenchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Operation::ALL
            .into_iter()
            .find(|op| trimmed.eq_ignore_ascii_case(op.name()) || trimmed == op.symbol())
            .ok_or_else(|| BenchError::UnknownOperation(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("Addition".parse::<Operation>(), Ok(Operation::Addition));
        assert_eq!("Multiplication".parse::<Operation>(), Ok(Operation::Multiplication));
        assert_eq!("Power".parse::<Operation>(), Ok(Operation::Power));
    }

    #[test]
    fn parses_case_insensitively_and_by_symbol() {
        assert_eq!(" power ".parse::<Operation>(), Ok(Operation::Power));
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiplication));
        assert_eq!("**".parse::<Operation>(), Ok(Operation::Power));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Division".parse::<Operation>().unwrap_err();
        assert_eq!(err, BenchError::UnknownOperation("Division".to_string()));
        assert!(err.to_string().contains("unrecognized operation 'Division'"));
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn power_ignores_second_operand() {
        assert_eq!(Operation::Power.apply(7, 1_000), 49);
        assert_eq!(Operation::Addition.apply(3, 4), 7);
        assert_eq!(Operation::Multiplication.apply(3, 4), 12);
    }

    #[test]
    fn apply_wraps_instead_of_panicking() {
        assert_eq!(Operation::Power.apply(i64::MAX, 0), 1);
        assert_eq!(Operation::Addition.apply(i64::MAX, 1), i64::MIN);
        assert_eq!(Operation::Multiplication.apply(i64::MAX, 2), -2);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }
}
