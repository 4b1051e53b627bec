//! Equivalence checking by exhaustive enumeration
//!
//! Two functions are compared over the union of their variables. Every
//! assignment of the union is tried in row order; the first one on which the
//! functions disagree is reported as a counterexample.
//!
//! # Examples
//!
//! ```
//! use logic_tool::{compare_formulas, ComparisonResult};
//!
//! let result = compare_formulas("(x1 & !x2) | x3", "(x3) | (x1 & !x2)");
//! assert_eq!(result, ComparisonResult::Equivalent);
//!
//! let result = compare_formulas("x1", "!x1");
//! assert_eq!(result.counter_example(), "x1 = false");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::config::Limits;
use crate::formula::{evaluate, FormulaParseError};
use crate::function::{row_count_for, BooleanFunction, RowAssignment, MAX_TABLE_VARIABLES};

/// Verdict of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComparisonResult {
    /// The functions agree on every assignment
    Equivalent,
    /// The functions differ; `counter_example` is the first differing assignment
    NotEquivalent {
        /// `"name = value"` pairs joined by `", "`
        counter_example: String,
    },
    /// The comparison could not be carried out
    Error {
        /// Reason
        message: String,
    },
}

impl ComparisonResult {
    /// Whether the functions were found equivalent
    pub fn is_equivalent(&self) -> bool {
        matches!(self, ComparisonResult::Equivalent)
    }

    /// Counterexample, empty unless [`ComparisonResult::NotEquivalent`]
    pub fn counter_example(&self) -> &str {
        match self {
            ComparisonResult::NotEquivalent { counter_example } => counter_example,
            _ => "",
        }
    }

    /// Human-readable summary
    pub fn message(&self) -> &str {
        match self {
            ComparisonResult::Equivalent => "Functions are equivalent",
            ComparisonResult::NotEquivalent { .. } => "Functions are not equivalent",
            ComparisonResult::Error { message } => message,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        ComparisonResult::Error {
            message: message.into(),
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonResult::NotEquivalent { counter_example } => {
                write!(f, "{}. Counterexample: {}", self.message(), counter_example)
            }
            _ => f.write_str(self.message()),
        }
    }
}

/// Compare two functions with [`Limits::default()`]
///
/// # Examples
///
/// ```
/// use logic_tool::{compare, BooleanFunction};
///
/// let by_number = BooleanFunction::from_number(2, 0b0001).unwrap();
/// let by_formula = BooleanFunction::from_formula("x1 and x2").unwrap();
/// assert!(compare(&by_number, &by_formula).is_equivalent());
/// ```
pub fn compare(f1: &BooleanFunction, f2: &BooleanFunction) -> ComparisonResult {
    compare_with_limits(f1, f2, &Limits::default())
}

/// Compare two functions over the union of their variables
///
/// Returns [`ComparisonResult::Error`] when the union is larger than
/// `limits.max_comparison_variables` or a formula fails to evaluate.
pub fn compare_with_limits(
    f1: &BooleanFunction,
    f2: &BooleanFunction,
    limits: &Limits,
) -> ComparisonResult {
    let union: BTreeSet<&str> = f1
        .variable_names()
        .iter()
        .chain(f2.variable_names())
        .map(|name| name.as_ref())
        .collect();

    if union.len() > limits.max_comparison_variables {
        debug!(
            "Refusing comparison over {} variables (limit {})",
            union.len(),
            limits.max_comparison_variables
        );
        return ComparisonResult::error(format!(
            "Too many variables ({}) for comparison. Use at most {} variables.",
            union.len(),
            limits.max_comparison_variables
        ));
    }

    let Some(assignments) = row_count_for(union.len()) else {
        return ComparisonResult::error(format!(
            "Too many variables ({}) for comparison. Use at most {} variables.",
            union.len(),
            MAX_TABLE_VARIABLES
        ));
    };

    let names: Vec<Arc<str>> = union.into_iter().map(Arc::from).collect();
    let result = enumerate(f1, f2, &names, assignments).unwrap_or_else(|err| {
        ComparisonResult::error(format!("Failed to compare functions: {}", err))
    });
    debug!("Compared over {:?}: {}", names, result);
    result
}

fn enumerate(
    f1: &BooleanFunction,
    f2: &BooleanFunction,
    names: &[Arc<str>],
    assignments: usize,
) -> Result<ComparisonResult, EvaluationError> {
    for i in 0..assignments {
        let assignment = RowAssignment::new(names, i);
        let lhs = evaluate_function(f1, &assignment)?;
        let rhs = evaluate_function(f2, &assignment)?;
        trace!("assignment {}: {} vs {}", i, lhs, rhs);

        if lhs != rhs {
            return Ok(ComparisonResult::NotEquivalent {
                counter_example: format_counter_example(&assignment),
            });
        }
    }
    Ok(ComparisonResult::Equivalent)
}

/// Why a function could not be evaluated on an assignment
#[derive(Debug)]
enum EvaluationError {
    Formula(FormulaParseError),
    NoMatchingRow(String),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::Formula(err) => write!(f, "cannot evaluate formula: {}", err),
            EvaluationError::NoMatchingRow(assignment) => {
                write!(f, "no truth table row matches {}", assignment)
            }
        }
    }
}

/// Formula functions re-run their RPN, numbered functions use their table
///
/// A table row is used only if it [`matches`](crate::TruthTableRow::matches)
/// the whole assignment, so a numbered function never matches an assignment
/// naming a variable it does not have.
fn evaluate_function(
    function: &BooleanFunction,
    assignment: &RowAssignment<'_>,
) -> Result<bool, EvaluationError> {
    match function.rpn() {
        Some(rpn) => evaluate(rpn, assignment).map_err(EvaluationError::Formula),
        None => function
            .truth_table()
            .iter()
            .find(|row| row.matches(assignment.pairs()))
            .map(|row| row.result())
            .ok_or_else(|| EvaluationError::NoMatchingRow(format_counter_example(assignment))),
    }
}

fn format_counter_example(assignment: &RowAssignment<'_>) -> String {
    assignment
        .pairs()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build two functions from formulas and compare them
///
/// Construction errors are reported as [`ComparisonResult::Error`].
pub fn compare_formulas(formula1: &str, formula2: &str) -> ComparisonResult {
    let functions = BooleanFunction::from_formula(formula1)
        .and_then(|f1| Ok((f1, BooleanFunction::from_formula(formula2)?)));
    match functions {
        Ok((f1, f2)) => compare(&f1, &f2),
        Err(err) => ComparisonResult::error(format!("Failed to compare formulas: {}", err)),
    }
}

/// Build a function by number and one by formula and compare them
///
/// Construction errors are reported as [`ComparisonResult::Error`].
///
/// # Examples
///
/// ```
/// use logic_tool::compare_number_and_formula;
///
/// assert!(compare_number_and_formula(2, 0b0110, "x1 xor x2").is_equivalent());
/// assert!(!compare_number_and_formula(2, 0b0110, "x1 = x2").is_equivalent());
/// ```
pub fn compare_number_and_formula(
    variables: u32,
    number: u64,
    formula: &str,
) -> ComparisonResult {
    let functions = BooleanFunction::from_number(variables, number)
        .and_then(|f1| Ok((f1, BooleanFunction::from_formula(formula)?)));
    match functions {
        Ok((f1, f2)) => compare(&f1, &f2),
        Err(err) => ComparisonResult::error(format!("Failed to compare: {}", err)),
    }
}
