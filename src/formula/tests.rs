//! Tests for the formula module

use super::*;
use std::collections::BTreeMap;
use test_log::test;

/// All assignments of `names`, first name as most significant bit
fn assignments(names: &[&str]) -> Vec<BTreeMap<String, bool>> {
    let n = names.len();
    (0..1usize << n)
        .map(|i| {
            names
                .iter()
                .enumerate()
                .map(|(j, name)| (name.to_string(), (i >> (n - 1 - j)) & 1 == 1))
                .collect()
        })
        .collect()
}

fn eval_formula(formula: &str, assignment: &BTreeMap<String, bool>) -> bool {
    let rpn = to_rpn(&tokenize(formula).unwrap()).unwrap();
    evaluate(&rpn, assignment).unwrap()
}

// ========== Pipeline ==========

#[test]
fn test_tokenize_rpn_evaluate_pipeline() {
    let tokens = tokenize("x1 ∧ x2").unwrap();
    assert_eq!(tokens, ["x1", "∧", "x2"]);
    let rpn = to_rpn(&tokens).unwrap();
    assert_eq!(rpn, ["x1", "x2", "∧"]);
    let assignment = BTreeMap::from([("x1", true), ("x2", true)]);
    assert_eq!(evaluate(&rpn, &assignment), Ok(true));
}

#[test]
fn test_all_spellings_evaluate_alike() {
    let spellings = [
        ("¬a ∧ b", "!a & b"),
        ("¬a ∧ b", "not a AND b"),
        ("a ∨ b", "a | b"),
        ("a ∨ b", "a or b"),
        ("a ^ b", "a XOR b"),
        ("a → b", "a -> b"),
        ("a → b", "a impl b"),
        ("a → b", "a then b"),
        ("a ↔ b", "a = b"),
        ("a ↔ b", "a => b"),
        ("a ↔ b", "a iff b"),
        ("a ↔ b", "a eq b"),
        ("a ↔ b", "a equ b"),
    ];
    for (canonical, alias) in spellings {
        for assignment in assignments(&["a", "b"]) {
            assert_eq!(
                eval_formula(canonical, &assignment),
                eval_formula(alias, &assignment),
                "{} vs {} at {:?}",
                canonical,
                alias,
                assignment
            );
        }
    }
}

#[test]
fn test_double_negation_evaluates() {
    for assignment in assignments(&["a"]) {
        assert_eq!(eval_formula("!!a", &assignment), assignment["a"]);
        assert_eq!(eval_formula("¬¬¬a", &assignment), !assignment["a"]);
    }
}

#[test]
fn test_dangling_operator_fails_at_evaluation() {
    let rpn = to_rpn(&tokenize("a ∧").unwrap()).unwrap();
    let assignment = BTreeMap::from([("a", true)]);
    assert!(matches!(
        evaluate(&rpn, &assignment),
        Err(FormulaParseError::InsufficientOperands { .. })
    ));
}

// ========== Basis rewriting ==========

#[test]
fn test_to_basic_basis_rewrites() {
    assert_eq!(to_basic_basis("a → b").unwrap(), "(¬a ∨ b)");
    assert_eq!(to_basic_basis("a ^ b").unwrap(), "((a ∧ ¬b) ∨ (¬a ∧ b))");
    assert_eq!(
        to_basic_basis("a ↔ b").unwrap(),
        "((a ∧ b) ∨ (¬a ∧ ¬b))"
    );
    assert_eq!(to_basic_basis("¬(a ∧ b)").unwrap(), "¬((a ∧ b))");
}

#[test]
fn test_to_basic_basis_nested() {
    assert_eq!(
        to_basic_basis("(a → b) ∧ c").unwrap(),
        "((¬a ∨ b) ∧ c)"
    );
}

#[test]
fn test_to_basic_basis_idempotent_on_basic_input() {
    for formula in ["a ∧ b ∨ ¬c", "¬(a ∨ b) ∧ 1", "x1", "¬¬x1 ∨ (x2 ∧ ¬x3)"] {
        let once = to_basic_basis(formula).unwrap();
        let twice = to_basic_basis(&once).unwrap();
        assert_eq!(once, twice, "{}", formula);
    }
}

#[test]
fn test_to_basic_basis_preserves_semantics() {
    let formulas = ["a ^ b → c", "(a ↔ b) ∨ ¬c", "a → (b ^ (c ↔ a))"];
    for formula in formulas {
        let rewritten = to_basic_basis(formula).unwrap();
        assert!(!rewritten.contains('^'));
        assert!(!rewritten.contains('→'));
        assert!(!rewritten.contains('↔'));
        for assignment in assignments(&["a", "b", "c"]) {
            assert_eq!(
                eval_formula(formula, &assignment),
                eval_formula(&rewritten, &assignment),
                "{} -> {} at {:?}",
                formula,
                rewritten,
                assignment
            );
        }
    }
}

#[test]
fn test_to_basic_basis_errors() {
    assert_eq!(to_basic_basis("   "), Err(FormulaParseError::Empty));
    assert!(to_basic_basis("a ∧ (b").is_err());
    assert!(matches!(
        to_basic_basis("a ∧"),
        Err(FormulaParseError::InsufficientOperands { .. })
    ));
}

// ========== Validation ==========

#[test]
fn test_validate_success_carries_tokens_and_rpn() {
    let result = validate("x1 ∧ x2");
    assert!(result.is_success());
    assert_eq!(result.tokens().len(), 3);
    assert_eq!(result.tokens()[1].kind(), TokenKind::Operator);
    assert_eq!(result.rpn(), ["x1", "x2", "∧"]);
}

#[test]
fn test_validate_never_raises() {
    for formula in ["", "x1 ∧ (x2", ")(", "a # b", "a )"] {
        let result = validate(formula);
        assert!(!result.is_success(), "{:?}", formula);
        assert!(!result.error_message().is_empty());
        assert_eq!(result.severity(), ErrorSeverity::Error);
    }
}
