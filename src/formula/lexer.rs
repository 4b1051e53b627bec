//! Lexer: formula text to raw token strings
//!
//! Letter/digit runs become one token (variables, constants, keywords). Every
//! other non-whitespace character is a token of its own, except the digraphs
//! `->` and `=>`. All operator spellings come out as canonical symbols.

use super::error::{FormulaParseError, ParenImbalance};
use super::operators::Operator;

/// Split a formula into raw tokens
///
/// # Errors
///
/// Returns [`FormulaParseError::Empty`] for blank input and
/// [`FormulaParseError::UnbalancedParentheses`] when parentheses do not pair up.
///
/// # Examples
///
/// ```
/// use logic_tool::formula::tokenize;
///
/// let tokens = tokenize("x1 and !x2 -> y").unwrap();
/// assert_eq!(tokens, vec!["x1", "∧", "¬", "x2", "→", "y"]);
/// ```
pub fn tokenize(formula: &str) -> Result<Vec<String>, FormulaParseError> {
    if formula.trim().is_empty() {
        return Err(FormulaParseError::Empty);
    }

    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut chars = formula.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            flush_buffer(&mut buffer, &mut tokens);
            continue;
        }

        if c.is_alphanumeric() {
            buffer.push(c);
            continue;
        }

        flush_buffer(&mut buffer, &mut tokens);

        if let Some(op) = chars
            .peek()
            .and_then(|&next| Operator::from_digraph(c, next))
        {
            chars.next();
            tokens.push(op.symbol().to_string());
            continue;
        }

        match Operator::from_alias(c) {
            Some(op) => tokens.push(op.symbol().to_string()),
            None => tokens.push(c.to_string()),
        }
    }

    flush_buffer(&mut buffer, &mut tokens);
    validate_parentheses(&tokens)?;

    Ok(tokens)
}

/// Emit the buffered word, replacing operator keywords by their symbol
fn flush_buffer(buffer: &mut String, tokens: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    let word = std::mem::take(buffer);
    match Operator::from_keyword(&word) {
        Some(op) => tokens.push(op.symbol().to_string()),
        None => tokens.push(word),
    }
}

fn validate_parentheses(tokens: &[String]) -> Result<(), FormulaParseError> {
    let mut balance: usize = 0;

    for token in tokens {
        match token.as_str() {
            "(" => balance += 1,
            ")" => {
                balance = balance.checked_sub(1).ok_or(
                    FormulaParseError::UnbalancedParentheses(ParenImbalance::ExtraClosing),
                )?;
            }
            _ => {}
        }
    }

    if balance > 0 {
        return Err(FormulaParseError::UnbalancedParentheses(
            ParenImbalance::MissingClosing,
        ));
    }
    Ok(())
}
