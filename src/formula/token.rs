//! Typed tokens for diagnostics and highlighting

use std::fmt;
use std::sync::Arc;

use super::error::FormulaParseError;
use super::lexer::tokenize;
use super::operators::{is_constant, is_operator, is_variable};

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A variable name
    Variable,
    /// A canonical operator symbol
    Operator,
    /// `0` or `1`
    Constant,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Variable => "Variable",
            TokenKind::Operator => "Operator",
            TokenKind::Constant => "Constant",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
        };
        f.write_str(name)
    }
}

/// A classified token with its index in the token stream
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: Arc<str>,
    kind: TokenKind,
    position: usize,
}

impl Token {
    /// Create a token
    pub fn new(value: impl Into<Arc<str>>, kind: TokenKind, position: usize) -> Self {
        Token {
            value: value.into(),
            kind,
            position,
        }
    }

    /// Token text (operators in canonical form)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Token classification
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Index of the token in the emitted sequence (not a character offset)
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.value, self.kind, self.position)
    }
}

/// Tokenize a formula and classify every token
///
/// # Examples
///
/// ```
/// use logic_tool::formula::{tokenize_with_types, TokenKind};
///
/// let tokens = tokenize_with_types("x1 ∧ x2").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Variable, TokenKind::Operator, TokenKind::Variable]);
/// ```
pub fn tokenize_with_types(formula: &str) -> Result<Vec<Token>, FormulaParseError> {
    tokenize(formula)?
        .into_iter()
        .enumerate()
        .map(|(position, raw)| {
            let kind = classify(&raw)?;
            Ok(Token::new(raw, kind, position))
        })
        .collect()
}

fn classify(token: &str) -> Result<TokenKind, FormulaParseError> {
    match token {
        "(" => Ok(TokenKind::LeftParen),
        ")" => Ok(TokenKind::RightParen),
        _ if is_constant(token) => Ok(TokenKind::Constant),
        _ if is_operator(token) => Ok(TokenKind::Operator),
        _ if is_variable(token) => Ok(TokenKind::Variable),
        _ => Err(FormulaParseError::UnknownTokenType {
            token: Arc::from(token),
        }),
    }
}
