//! Connective table: canonical symbols, precedence, arity and accepted spellings
//!
//! Every spelling the lexer accepts is normalized to one canonical symbol before
//! parsing. The tables here are static and never mutated.

use std::fmt;

/// Number of operands an operator consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand (prefix)
    Unary,
    /// Two operands (infix)
    Binary,
}

/// A logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Negation `¬`
    Not,
    /// Conjunction `∧`
    And,
    /// Disjunction `∨`
    Or,
    /// Exclusive or `^`
    Xor,
    /// Implication `→`
    Implies,
    /// Equivalence `↔`
    Equiv,
}

/// Symbol of the false constant
pub const FALSE_SYMBOL: &str = "0";
/// Symbol of the true constant
pub const TRUE_SYMBOL: &str = "1";

/// Keyword spellings, matched case-insensitively
static KEYWORDS: [(&str, Operator); 9] = [
    ("not", Operator::Not),
    ("and", Operator::And),
    ("or", Operator::Or),
    ("xor", Operator::Xor),
    ("impl", Operator::Implies),
    ("then", Operator::Implies),
    ("equ", Operator::Equiv),
    ("eq", Operator::Equiv),
    ("iff", Operator::Equiv),
];

/// Two-character ASCII spellings
static DIGRAPHS: [(char, char, Operator); 2] = [
    ('-', '>', Operator::Implies),
    ('=', '>', Operator::Equiv),
];

/// Single-character ASCII aliases
static ALIASES: [(char, Operator); 4] = [
    ('!', Operator::Not),
    ('&', Operator::And),
    ('|', Operator::Or),
    ('=', Operator::Equiv),
];

impl Operator {
    /// All operators, highest precedence first
    pub const ALL: [Operator; 6] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Implies,
        Operator::Equiv,
    ];

    /// Canonical symbol used in token streams and rendered formulas
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "¬",
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Xor => "^",
            Operator::Implies => "→",
            Operator::Equiv => "↔",
        }
    }

    /// Binding strength; larger binds tighter
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::And => 3,
            Operator::Or | Operator::Xor => 2,
            Operator::Implies | Operator::Equiv => 1,
        }
    }

    /// Operand count
    pub const fn arity(self) -> Arity {
        match self {
            Operator::Not => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Look up a canonical symbol
    ///
    /// Only canonical symbols are recognized here; aliases and keywords are
    /// resolved by the lexer.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::formula::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("∧"), Some(Operator::And));
    /// assert_eq!(Operator::from_symbol("&"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Resolve a word such as `AND` or `iff` to its operator
    pub fn from_keyword(word: &str) -> Option<Self> {
        let lowered = word.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == lowered)
            .map(|(_, op)| *op)
    }

    /// Resolve a two-character spelling such as `->`
    pub fn from_digraph(first: char, second: char) -> Option<Self> {
        DIGRAPHS
            .iter()
            .find(|(a, b, _)| *a == first && *b == second)
            .map(|(_, _, op)| *op)
    }

    /// Resolve a single-character ASCII alias such as `!`
    pub fn from_alias(c: char) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == c)
            .map(|(_, op)| *op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Whether `token` is a canonical operator symbol
pub fn is_operator(token: &str) -> bool {
    Operator::from_symbol(token).is_some()
}

/// Whether `token` is one of the constants `0` / `1`
pub fn is_constant(token: &str) -> bool {
    token == FALSE_SYMBOL || token == TRUE_SYMBOL
}

/// Whether `token` names a variable: it starts with a letter and is not an operator
pub fn is_variable(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphabetic) && !is_operator(token)
}
