//! Outcome of formula validation

use std::fmt;
use std::sync::Arc;

use super::token::Token;

/// How serious a validation failure is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ErrorSeverity {
    /// Informational, no problem
    #[default]
    Info,
    /// Suspicious but usable
    Warning,
    /// The formula cannot be used
    Error,
    /// Validation itself failed unexpectedly
    Critical,
}

/// Result of [`validate`](super::validate): tokens and RPN, or an error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingResult {
    /// The formula tokenized and converted to RPN
    Success {
        /// The validated formula
        formula: Arc<str>,
        /// Typed tokens
        tokens: Vec<Token>,
        /// Postfix form
        rpn: Vec<String>,
    },
    /// Validation failed
    Failure {
        /// The rejected formula
        formula: Arc<str>,
        /// Human-readable reason
        message: String,
        /// Severity of the failure
        severity: ErrorSeverity,
    },
}

impl ParsingResult {
    /// Successful validation
    pub fn success(formula: &str, tokens: Vec<Token>, rpn: Vec<String>) -> Self {
        ParsingResult::Success {
            formula: Arc::from(formula),
            tokens,
            rpn,
        }
    }

    /// Failed validation
    pub fn failure(formula: &str, message: impl Into<String>, severity: ErrorSeverity) -> Self {
        ParsingResult::Failure {
            formula: Arc::from(formula),
            message: message.into(),
            severity,
        }
    }

    /// Whether validation succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ParsingResult::Success { .. })
    }

    /// The formula that was validated
    pub fn formula(&self) -> &str {
        match self {
            ParsingResult::Success { formula, .. } | ParsingResult::Failure { formula, .. } => {
                formula
            }
        }
    }

    /// Typed tokens; empty on failure
    pub fn tokens(&self) -> &[Token] {
        match self {
            ParsingResult::Success { tokens, .. } => tokens,
            ParsingResult::Failure { .. } => &[],
        }
    }

    /// RPN tokens; empty on failure
    pub fn rpn(&self) -> &[String] {
        match self {
            ParsingResult::Success { rpn, .. } => rpn,
            ParsingResult::Failure { .. } => &[],
        }
    }

    /// Error message; empty on success
    pub fn error_message(&self) -> &str {
        match self {
            ParsingResult::Success { .. } => "",
            ParsingResult::Failure { message, .. } => message,
        }
    }

    /// Severity; [`ErrorSeverity::Info`] on success
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ParsingResult::Success { .. } => ErrorSeverity::Info,
            ParsingResult::Failure { severity, .. } => *severity,
        }
    }
}

impl fmt::Display for ParsingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsingResult::Success { formula, rpn, .. } => {
                write!(f, "Parsed: {} -> {}", formula, rpn.join(" "))
            }
            ParsingResult::Failure { message, .. } => write!(f, "Parse error: {}", message),
        }
    }
}
