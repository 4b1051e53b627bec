//! Shunting-yard conversion from infix tokens to postfix (RPN)

use std::sync::Arc;

use super::error::FormulaParseError;
use super::operators::{is_constant, is_variable, Arity, Operator};

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    OpenParen,
    Op(Operator),
}

/// Convert infix tokens (as produced by [`tokenize`](super::tokenize)) to RPN
///
/// Operands go straight to the output. A binary operator first moves every
/// stacked operator of greater or equal precedence to the output, so ties
/// associate to the left. Prefix negation is pushed as is.
///
/// # Errors
///
/// [`FormulaParseError::MissingOpenParen`] and
/// [`FormulaParseError::MissingCloseParen`] on unpaired parentheses,
/// [`FormulaParseError::UnknownToken`] on anything that is not an operand,
/// operator or parenthesis.
///
/// # Examples
///
/// ```
/// use logic_tool::formula::to_rpn;
///
/// let rpn = to_rpn(&["(", "x1", "∧", "x2", ")", "∨", "x3"]).unwrap();
/// assert_eq!(rpn, vec!["x1", "x2", "∧", "x3", "∨"]);
/// ```
pub fn to_rpn<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>, FormulaParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        let token = token.as_ref();

        if is_variable(token) || is_constant(token) {
            output.push(token.to_string());
        } else if token == "(" {
            stack.push(Pending::OpenParen);
        } else if token == ")" {
            loop {
                match stack.pop() {
                    Some(Pending::OpenParen) => break,
                    Some(Pending::Op(op)) => output.push(op.symbol().to_string()),
                    None => return Err(FormulaParseError::MissingOpenParen),
                }
            }
        } else if let Some(op) = Operator::from_symbol(token) {
            if op.arity() == Arity::Binary {
                while let Some(&Pending::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(top.symbol().to_string());
                    stack.pop();
                }
            }
            stack.push(Pending::Op(op));
        } else {
            return Err(FormulaParseError::UnknownToken {
                token: Arc::from(token),
            });
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::OpenParen => return Err(FormulaParseError::MissingCloseParen),
            Pending::Op(op) => output.push(op.symbol().to_string()),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::tokenize;
    use test_log::test;

    fn rpn_of(formula: &str) -> Vec<String> {
        to_rpn(&tokenize(formula).unwrap()).unwrap()
    }

    #[test]
    fn test_simple_conjunction() {
        assert_eq!(to_rpn(&["x1", "∧", "x2"]).unwrap(), vec!["x1", "x2", "∧"]);
    }

    #[test]
    fn test_conjunction_binds_tighter_than_disjunction() {
        assert_eq!(rpn_of("a ∨ b ∧ c"), vec!["a", "b", "c", "∧", "∨"]);
        assert_eq!(rpn_of("a ∧ b ∨ c"), vec!["a", "b", "∧", "c", "∨"]);
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        assert_eq!(rpn_of("a → b → c"), vec!["a", "b", "→", "c", "→"]);
        assert_eq!(rpn_of("a ∨ b ^ c"), vec!["a", "b", "∨", "c", "^"]);
        assert_eq!(rpn_of("a ↔ b → c"), vec!["a", "b", "↔", "c", "→"]);
    }

    #[test]
    fn test_negation_binds_tightest() {
        assert_eq!(rpn_of("¬a ∧ b"), vec!["a", "¬", "b", "∧"]);
        assert_eq!(rpn_of("a ∧ ¬b"), vec!["a", "b", "¬", "∧"]);
        assert_eq!(rpn_of("¬(a ∧ b)"), vec!["a", "b", "∧", "¬"]);
    }

    #[test]
    fn test_stacked_negations() {
        assert_eq!(rpn_of("¬¬a"), vec!["a", "¬", "¬"]);
        assert_eq!(rpn_of("!!a | b"), vec!["a", "¬", "¬", "b", "∨"]);
    }

    #[test]
    fn test_implication_is_loosest() {
        assert_eq!(
            rpn_of("¬x1 ∧ (x2 ∨ x3) → x4"),
            vec!["x1", "¬", "x2", "x3", "∨", "∧", "x4", "→"]
        );
    }

    #[test]
    fn test_constants_are_operands() {
        assert_eq!(rpn_of("1 ∧ 0"), vec!["1", "0", "∧"]);
    }

    #[test]
    fn test_missing_open_paren() {
        assert_eq!(
            to_rpn(&["a", ")", "∧", "b"]),
            Err(FormulaParseError::MissingOpenParen)
        );
    }

    #[test]
    fn test_missing_close_paren() {
        assert_eq!(
            to_rpn(&["(", "a", "∧", "b"]),
            Err(FormulaParseError::MissingCloseParen)
        );
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            to_rpn(&["a", "#", "b"]),
            Err(FormulaParseError::UnknownToken {
                token: Arc::from("#")
            })
        );
    }
}
