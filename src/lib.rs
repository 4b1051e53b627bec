//! # Logic Tool
//!
//! Evaluation and comparison of propositional-logic functions of a small number
//! of variables.
//!
//! ## Overview
//!
//! A function is given either by its number (the result column of its truth
//! table read as a binary number) or by a formula. From either, the crate
//! builds:
//!
//! - the complete truth table
//! - the perfect disjunctive and conjunctive normal forms
//! - a complexity class and cost metrics
//!
//! Two functions can then be checked for equivalence by trying every
//! assignment of their variables.
//!
//! ## Functions by number
//!
//! ```
//! use logic_tool::BooleanFunction;
//!
//! # fn main() -> Result<(), logic_tool::LogicError> {
//! let f = BooleanFunction::from_number(2, 0b0111)?;
//! assert_eq!(f.dnf(), "(¬x1 ∧ x2) ∨ (x1 ∧ ¬x2) ∨ (x1 ∧ x2)");
//! assert_eq!(f.knf(), "(x1 ∨ x2)");
//!
//! for row in f.truth_table() {
//!     println!("{}", row);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Functions by formula
//!
//! Formulas accept canonical symbols (`¬ ∧ ∨ ^ → ↔`), ASCII spellings
//! (`! & | -> = =>`) and keywords (`not and or xor impl then eq equ iff`). See
//! [`formula`] for the full grammar.
//!
//! ```
//! use logic_tool::BooleanFunction;
//!
//! # fn main() -> Result<(), logic_tool::LogicError> {
//! let f = BooleanFunction::from_formula("a and not b")?;
//! assert_eq!(f.dnf(), "(a ∧ ¬b)");
//! println!("{}", f.metrics());
//! # Ok(())
//! # }
//! ```
//!
//! ## Comparing
//!
//! ```
//! use logic_tool::{compare_formulas, compare_number_and_formula};
//!
//! assert!(compare_formulas("a -> b", "!a | b").is_equivalent());
//!
//! let result = compare_number_and_formula(2, 0b0001, "x1 | x2");
//! assert_eq!(result.counter_example(), "x1 = false, x2 = true");
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: construction and comparison
//! outcomes at `debug`, individual rows at `trace`. No logger is installed by
//! the library.

// Public modules
pub mod compare;
pub mod config;
pub mod error;
pub mod formula;
pub mod function;

// Re-export high-level public API
pub use compare::{
    compare, compare_formulas, compare_number_and_formula, compare_with_limits, ComparisonResult,
};
pub use config::Limits;
pub use error::{ArgumentError, LogicError};
pub use formula::{validate, FormulaParseError, ParsingResult};
pub use function::{
    BooleanFunction, ComplexityLevel, FormulaMetrics, NormalFormType, TruthTableRow,
};
