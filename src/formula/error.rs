//! Error types for formula tokenizing, parsing and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Direction of a parenthesis imbalance found by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenImbalance {
    /// A `)` appeared with no open `(` before it
    ExtraClosing,
    /// Input ended with at least one `(` still open
    MissingClosing,
}

/// Errors raised while turning formula text into tokens, RPN or a value
///
/// These errors stay inside the formula layer. [`validate`](crate::formula::validate)
/// and the comparison entry points convert them into result values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaParseError {
    /// The formula is empty or contains only whitespace
    Empty,
    /// Parentheses do not balance
    UnbalancedParentheses(ParenImbalance),
    /// A `)` was reached with no matching `(` on the operator stack
    MissingOpenParen,
    /// A `(` was left on the operator stack at end of input
    MissingCloseParen,
    /// A token that is neither operand, operator nor parenthesis
    UnknownToken {
        /// The offending token
        token: Arc<str>,
    },
    /// A token that could not be classified by the typed tokenizer
    UnknownTokenType {
        /// The offending token
        token: Arc<str>,
    },
    /// An operator token the evaluator does not know
    UnknownOperator {
        /// The offending token
        token: Arc<str>,
    },
    /// A variable with no value in the assignment
    UnknownVariable {
        /// Name of the variable
        name: Arc<str>,
    },
    /// An operator found fewer operands on the stack than its arity
    InsufficientOperands {
        /// Canonical symbol of the operator
        operator: Arc<str>,
    },
    /// Evaluation did not end with exactly one value on the stack
    MalformedExpression {
        /// Number of values left on the stack
        remaining: usize,
    },
}

impl fmt::Display for FormulaParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaParseError::Empty => write!(f, "Formula must not be empty"),
            FormulaParseError::UnbalancedParentheses(ParenImbalance::ExtraClosing) => {
                write!(f, "Unbalanced parentheses: unexpected closing parenthesis")
            }
            FormulaParseError::UnbalancedParentheses(ParenImbalance::MissingClosing) => {
                write!(f, "Unbalanced parentheses: missing closing parenthesis")
            }
            FormulaParseError::MissingOpenParen => {
                write!(f, "Unbalanced parentheses: missing opening parenthesis")
            }
            FormulaParseError::MissingCloseParen => {
                write!(f, "Unbalanced parentheses: missing closing parenthesis")
            }
            FormulaParseError::UnknownToken { token } => write!(f, "Unknown token: {}", token),
            FormulaParseError::UnknownTokenType { token } => {
                write!(f, "Unknown token type: {}", token)
            }
            FormulaParseError::UnknownOperator { token } => {
                write!(f, "Unknown operator: {}", token)
            }
            FormulaParseError::UnknownVariable { name } => {
                write!(f, "Unknown variable: {}", name)
            }
            FormulaParseError::InsufficientOperands { operator } => {
                write!(f, "Insufficient operands for operator {}", operator)
            }
            FormulaParseError::MalformedExpression { remaining } => write!(
                f,
                "Malformed expression: {} values left on the stack, expected 1",
                remaining
            ),
        }
    }
}

impl std::error::Error for FormulaParseError {}

impl From<FormulaParseError> for io::Error {
    fn from(err: FormulaParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_display_names_direction() {
        let extra = FormulaParseError::UnbalancedParentheses(ParenImbalance::ExtraClosing);
        assert!(extra.to_string().contains("unexpected closing"));

        let missing = FormulaParseError::UnbalancedParentheses(ParenImbalance::MissingClosing);
        assert!(missing.to_string().contains("missing closing"));
    }

    #[test]
    fn test_insufficient_operands_mentions_operator() {
        let err = FormulaParseError::InsufficientOperands {
            operator: Arc::from("∧"),
        };
        assert!(err.to_string().contains('∧'));
    }

    #[test]
    fn test_malformed_expression_reports_stack_depth() {
        let err = FormulaParseError::MalformedExpression { remaining: 2 };
        assert!(err.to_string().contains("2 values"));
    }

    #[test]
    fn test_formula_parse_error_to_io_error() {
        let err = FormulaParseError::UnknownVariable {
            name: Arc::from("x9"),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
