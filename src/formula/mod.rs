//! Formula processing: lexing, typed tokens, shunting-yard, RPN evaluation and
//! rewriting into the {¬, ∧, ∨} basis
//!
//! # Accepted syntax
//!
//! | Connective | Canonical | Also accepted |
//! |---|---|---|
//! | negation | `¬` | `!`, `not` |
//! | conjunction | `∧` | `&`, `and` |
//! | disjunction | `∨` | `\|`, `or` |
//! | exclusive or | `^` | `xor` |
//! | implication | `→` | `->`, `impl`, `then` |
//! | equivalence | `↔` | `=`, `=>`, `equ`, `eq`, `iff` |
//!
//! Keywords are case-insensitive. Variables are letter-initial runs of letters and
//! digits; `0` and `1` are the constants.
//!
//! # Pipeline
//!
//! ```
//! use logic_tool::formula::{evaluate, to_rpn, tokenize};
//! use std::collections::HashMap;
//!
//! let tokens = tokenize("x1 ∧ x2")?;
//! assert_eq!(tokens, ["x1", "∧", "x2"]);
//!
//! let rpn = to_rpn(&tokens)?;
//! assert_eq!(rpn, ["x1", "x2", "∧"]);
//!
//! let assignment = HashMap::from([("x1", true), ("x2", true)]);
//! assert!(evaluate(&rpn, &assignment)?);
//! # Ok::<(), logic_tool::formula::FormulaParseError>(())
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
mod lexer;
mod operators;
mod parser;
mod result;
mod token;

pub use ast::{AstNode, FormulaAst};
pub use error::{FormulaParseError, ParenImbalance};
pub use eval::{evaluate, Valuation};
pub use lexer::tokenize;
pub use operators::{is_constant, is_operator, is_variable, Arity, Operator};
pub use parser::to_rpn;
pub use result::{ErrorSeverity, ParsingResult};
pub use token::{tokenize_with_types, Token, TokenKind};

use log::debug;

/// Rewrite a formula into the {¬, ∧, ∨} basis and render it as infix text
///
/// # Examples
///
/// ```
/// use logic_tool::formula::to_basic_basis;
///
/// assert_eq!(to_basic_basis("a ^ b").unwrap(), "((a ∧ ¬b) ∨ (¬a ∧ b))");
/// assert_eq!(to_basic_basis("a = b").unwrap(), "((a ∧ b) ∨ (¬a ∧ ¬b))");
/// ```
pub fn to_basic_basis(formula: &str) -> Result<String, FormulaParseError> {
    if formula.trim().is_empty() {
        return Err(FormulaParseError::Empty);
    }
    let rewritten = FormulaAst::parse(formula)?.to_basic_basis();
    Ok(rewritten.to_string())
}

/// Check a formula without raising
///
/// Tokenizes with types and converts to RPN. Any parse error is returned as a
/// [`ParsingResult::Failure`] with [`ErrorSeverity::Error`].
///
/// # Examples
///
/// ```
/// use logic_tool::formula::validate;
///
/// assert!(validate("x1 ∧ x2").is_success());
///
/// let result = validate("x1 ∧ (x2");
/// assert!(!result.is_success());
/// assert!(!result.error_message().is_empty());
/// ```
pub fn validate(formula: &str) -> ParsingResult {
    let parsed = tokenize_with_types(formula).and_then(|tokens| {
        let raw: Vec<&str> = tokens.iter().map(Token::value).collect();
        let rpn = to_rpn(&raw)?;
        Ok((tokens, rpn))
    });

    match parsed {
        Ok((tokens, rpn)) => ParsingResult::success(formula, tokens, rpn),
        Err(err) => {
            debug!("validate({:?}) failed: {}", formula, err);
            ParsingResult::failure(formula, err.to_string(), ErrorSeverity::Error)
        }
    }
}

#[cfg(test)]
mod tests;
