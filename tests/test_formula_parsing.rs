//! Integration tests for lexing, parsing, evaluation and validation of formulas

use logic_tool::formula::{
    evaluate, to_basic_basis, to_rpn, tokenize, tokenize_with_types, validate, ErrorSeverity,
    FormulaParseError, ParenImbalance, TokenKind,
};
use std::collections::HashMap;

fn rpn_of(formula: &str) -> Vec<String> {
    to_rpn(&tokenize(formula).unwrap()).unwrap()
}

#[test]
fn test_tokenize_basic() {
    assert_eq!(tokenize("x1 ∧ x2").unwrap(), ["x1", "∧", "x2"]);
    assert_eq!(tokenize("x1∧x2").unwrap(), ["x1", "∧", "x2"]);
}

#[test]
fn test_tokenize_normalizes_every_spelling() {
    assert_eq!(
        tokenize("!a & b | c").unwrap(),
        ["¬", "a", "∧", "b", "∨", "c"]
    );
    assert_eq!(
        tokenize("a -> b => c = d").unwrap(),
        ["a", "→", "b", "↔", "c", "↔", "d"]
    );
    assert_eq!(
        tokenize("NOT a And b oR c XoR d").unwrap(),
        ["¬", "a", "∧", "b", "∨", "c", "^", "d"]
    );
    assert_eq!(
        tokenize("a impl b then c iff d eq e equ f").unwrap(),
        ["a", "→", "b", "→", "c", "↔", "d", "↔", "e", "↔", "f"]
    );
}

#[test]
fn test_tokenize_keeps_identifiers_whole() {
    // "android" contains "and" but is a single identifier
    assert_eq!(tokenize("android or x10").unwrap(), ["android", "∨", "x10"]);
}

#[test]
fn test_tokenize_parenthesis_errors() {
    assert_eq!(
        tokenize("x1 ∧ (x2"),
        Err(FormulaParseError::UnbalancedParentheses(
            ParenImbalance::MissingClosing
        ))
    );
    assert_eq!(
        tokenize("x1) ∧ (x2"),
        Err(FormulaParseError::UnbalancedParentheses(
            ParenImbalance::ExtraClosing
        ))
    );
    assert_eq!(tokenize(" \t\n"), Err(FormulaParseError::Empty));
}

#[test]
fn test_typed_tokens() {
    let tokens = tokenize_with_types("(a ∨ 1)").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::LeftParen,
            TokenKind::Variable,
            TokenKind::Operator,
            TokenKind::Constant,
            TokenKind::RightParen,
        ]
    );
    let positions: Vec<usize> = tokens.iter().map(|t| t.position()).collect();
    assert_eq!(positions, [0, 1, 2, 3, 4]);
    assert_eq!(tokens[1].to_string(), "a (Variable) at 1");
}

#[test]
fn test_typed_tokens_reject_unknown_characters() {
    assert!(matches!(
        tokenize_with_types("a $ b"),
        Err(FormulaParseError::UnknownTokenType { .. })
    ));
    assert!(matches!(
        tokenize_with_types("2 ∧ a"),
        Err(FormulaParseError::UnknownTokenType { .. })
    ));
}

#[test]
fn test_rpn_precedence() {
    assert_eq!(rpn_of("a ∨ b ∧ c"), ["a", "b", "c", "∧", "∨"]);
    assert_eq!(rpn_of("(a ∨ b) ∧ c"), ["a", "b", "∨", "c", "∧"]);
    assert_eq!(rpn_of("¬a ∧ b"), ["a", "¬", "b", "∧"]);
    assert_eq!(rpn_of("a → b ↔ c"), ["a", "b", "→", "c", "↔"]);
    assert_eq!(rpn_of("a ∨ b ^ c"), ["a", "b", "∨", "c", "^"]);
}

#[test]
fn test_rpn_binary_operators_are_left_associative() {
    assert_eq!(rpn_of("a → b → c"), ["a", "b", "→", "c", "→"]);
    assert_eq!(rpn_of("a ∧ b ∧ c"), ["a", "b", "∧", "c", "∧"]);
}

#[test]
fn test_rpn_prefix_negation() {
    assert_eq!(rpn_of("¬¬a"), ["a", "¬", "¬"]);
    assert_eq!(rpn_of("¬(a ∨ b)"), ["a", "b", "∨", "¬"]);
}

#[test]
fn test_rpn_paren_errors() {
    assert_eq!(to_rpn(&["a", ")"]), Err(FormulaParseError::MissingOpenParen));
    assert_eq!(to_rpn(&["(", "a"]), Err(FormulaParseError::MissingCloseParen));
    assert!(matches!(
        to_rpn(&["a", "#"]),
        Err(FormulaParseError::UnknownToken { .. })
    ));
}

#[test]
fn test_evaluate_semantics() {
    let cases = [
        ("¬a", [true, false, true, false]),
        ("a ∧ b", [false, false, false, true]),
        ("a ∨ b", [false, true, true, true]),
        ("a ^ b", [false, true, true, false]),
        ("a → b", [true, true, false, true]),
        ("a ↔ b", [true, false, false, true]),
    ];
    for (formula, expected) in cases {
        let rpn = rpn_of(formula);
        for (i, want) in expected.iter().enumerate() {
            let assignment = HashMap::from([("a", i & 2 != 0), ("b", i & 1 != 0)]);
            assert_eq!(
                evaluate(&rpn, &assignment).unwrap(),
                *want,
                "{} at row {}",
                formula,
                i
            );
        }
    }
}

#[test]
fn test_evaluate_errors() {
    let assignment = HashMap::from([("a", true)]);
    assert!(matches!(
        evaluate(&["a", "b", "∧"], &assignment),
        Err(FormulaParseError::UnknownVariable { .. })
    ));
    assert!(matches!(
        evaluate(&["a", "∧"], &assignment),
        Err(FormulaParseError::InsufficientOperands { .. })
    ));
    assert_eq!(
        evaluate(&["a", "a"], &assignment),
        Err(FormulaParseError::MalformedExpression { remaining: 2 })
    );
    assert!(evaluate(&["1", "0", "∨"], &assignment).unwrap());
}

#[test]
fn test_basic_basis() {
    assert_eq!(to_basic_basis("a -> b").unwrap(), "(¬a ∨ b)");
    assert_eq!(
        to_basic_basis("x1 xor x2").unwrap(),
        "((x1 ∧ ¬x2) ∨ (¬x1 ∧ x2))"
    );
    assert_eq!(
        to_basic_basis("!(a iff b)").unwrap(),
        "¬(((a ∧ b) ∨ (¬a ∧ ¬b)))"
    );
    assert_eq!(to_basic_basis("a ∧ ¬b").unwrap(), "(a ∧ ¬b)");
}

#[test]
fn test_validate() {
    let ok = validate("x1 & !x2");
    assert!(ok.is_success());
    assert_eq!(ok.rpn(), ["x1", "x2", "¬", "∧"]);
    assert_eq!(ok.to_string(), "Parsed: x1 & !x2 -> x1 x2 ¬ ∧");

    let failed = validate("x1 ∧ (x2");
    assert!(!failed.is_success());
    assert_eq!(failed.severity(), ErrorSeverity::Error);
    assert!(failed.to_string().starts_with("Parse error: "));
    assert!(failed.tokens().is_empty());
}
