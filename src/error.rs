//! Error types for building boolean functions
//!
//! Construction-time preconditions are reported as [`ArgumentError`]; formula
//! syntax problems come from [`FormulaParseError`]. [`LogicError`] wraps both and
//! is what the constructors of [`BooleanFunction`](crate::BooleanFunction) return.

use std::fmt;
use std::io;

pub use crate::formula::error::FormulaParseError;

/// A precondition on the arguments of a constructor did not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Variable count outside `1..=max`
    VariableCountOutOfRange {
        /// The requested number of variables
        requested: u32,
        /// Largest accepted number of variables
        max: u32,
    },

    /// Function number does not fit into `2^(2^n)` truth-table bits
    FunctionNumberOutOfRange {
        /// The rejected function number
        number: u64,
        /// Largest valid function number for this variable count
        max: u64,
        /// Number of variables
        variables: u32,
    },

    /// The formula is empty or only whitespace
    EmptyFormula,

    /// The formula uses more distinct variables than the table can hold
    TooManyVariables {
        /// Distinct variables found in the formula
        found: usize,
        /// Largest accepted number of variables
        max: usize,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::VariableCountOutOfRange { requested, max } => write!(
                f,
                "Variable count must be between 1 and {}, got {}",
                max, requested
            ),
            ArgumentError::FunctionNumberOutOfRange {
                number,
                max,
                variables,
            } => write!(
                f,
                "Function number must be in [0, {}] for {} variables, got {}",
                max, variables, number
            ),
            ArgumentError::EmptyFormula => {
                write!(f, "Formula cannot be empty or contain only whitespace")
            }
            ArgumentError::TooManyVariables { found, max } => write!(
                f,
                "Formula has {} variables, at most {} are supported",
                found, max
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}

impl From<ArgumentError> for io::Error {
    fn from(err: ArgumentError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// The main error type of the crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// Invalid constructor argument
    Argument(ArgumentError),
    /// The formula could not be parsed or evaluated
    Parse(FormulaParseError),
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Argument(err) => write!(f, "{}", err),
            LogicError::Parse(err) => write!(f, "Formula error: {}", err),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Argument(err) => Some(err),
            LogicError::Parse(err) => Some(err),
        }
    }
}

impl From<ArgumentError> for LogicError {
    fn from(err: ArgumentError) -> Self {
        LogicError::Argument(err)
    }
}

impl From<FormulaParseError> for LogicError {
    fn from(err: FormulaParseError) -> Self {
        LogicError::Parse(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Argument(err) => err.into(),
            LogicError::Parse(err) => err.into(),
        }
    }
}
