use std::fmt;

use thiserror::Error;

/// Which rate of a rule set a count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Birth,
    Death,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Birth => f.write_str("birth"),
            Self::Death => f.write_str("death"),
        }
    }
}

/// Errors raised while reading or validating rule sets.
///
/// Transitions themselves never fail; these only come out of the
/// configuration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("malformed rulestring {0:?}")]
    Malformed(String),

    #[error("invalid neighbor count {0:?}")]
    InvalidCount(String),

    #[error("{phase} count {count} exceeds the neighborhood size {max}")]
    OutOfRange { phase: Phase, count: usize, max: usize },
}
