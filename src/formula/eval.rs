//! Stack evaluation of RPN token sequences

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use log::trace;

use super::error::FormulaParseError;
use super::operators::{is_variable, Operator, FALSE_SYMBOL, TRUE_SYMBOL};

/// Source of variable values for evaluation
///
/// Implemented for name-keyed maps and for truth-table rows, so a formula can be
/// evaluated directly against a row of another function.
pub trait Valuation {
    /// Value of the variable `name`, or `None` if it is not assigned
    fn value_of(&self, name: &str) -> Option<bool>;
}

impl<K, S> Valuation for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Valuation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Operator {
    /// Apply a binary operator to two values
    ///
    /// For [`Operator::Not`] only `lhs` is used.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Operator::Not => !lhs,
            Operator::And => lhs && rhs,
            Operator::Or => lhs || rhs,
            Operator::Xor => lhs ^ rhs,
            Operator::Implies => !lhs || rhs,
            Operator::Equiv => lhs == rhs,
        }
    }
}

/// Evaluate an RPN sequence against a variable assignment
///
/// # Errors
///
/// - [`FormulaParseError::UnknownVariable`] if a variable has no value
/// - [`FormulaParseError::InsufficientOperands`] if an operator lacks operands
/// - [`FormulaParseError::UnknownOperator`] on a token that is not an operand or operator
/// - [`FormulaParseError::MalformedExpression`] unless exactly one value remains
///
/// # Examples
///
/// ```
/// use logic_tool::formula::evaluate;
/// use std::collections::HashMap;
///
/// let assignment = HashMap::from([("x1", true), ("x2", true)]);
/// assert_eq!(evaluate(&["x1", "x2", "∧"], &assignment), Ok(true));
/// ```
pub fn evaluate<S, V>(rpn: &[S], assignment: &V) -> Result<bool, FormulaParseError>
where
    S: AsRef<str>,
    V: Valuation + ?Sized,
{
    let mut stack: Vec<bool> = Vec::with_capacity(rpn.len());

    for token in rpn {
        let token = token.as_ref();

        if token == FALSE_SYMBOL {
            stack.push(false);
        } else if token == TRUE_SYMBOL {
            stack.push(true);
        } else if is_variable(token) {
            let value =
                assignment
                    .value_of(token)
                    .ok_or_else(|| FormulaParseError::UnknownVariable {
                        name: Arc::from(token),
                    })?;
            stack.push(value);
        } else {
            let op = Operator::from_symbol(token).ok_or_else(|| {
                FormulaParseError::UnknownOperator {
                    token: Arc::from(token),
                }
            })?;
            let value = apply_from_stack(op, &mut stack)?;
            stack.push(value);
        }
    }

    match stack.as_slice() {
        [result] => {
            trace!("evaluate({}) = {}", join(rpn), result);
            Ok(*result)
        }
        rest => Err(FormulaParseError::MalformedExpression {
            remaining: rest.len(),
        }),
    }
}

fn apply_from_stack(op: Operator, stack: &mut Vec<bool>) -> Result<bool, FormulaParseError> {
    let insufficient = || FormulaParseError::InsufficientOperands {
        operator: Arc::from(op.symbol()),
    };

    if op == Operator::Not {
        let operand = stack.pop().ok_or_else(insufficient)?;
        return Ok(!operand);
    }

    if stack.len() < 2 {
        return Err(insufficient());
    }
    let rhs = stack.pop().ok_or_else(insufficient)?;
    let lhs = stack.pop().ok_or_else(insufficient)?;
    Ok(op.apply(lhs, rhs))
}

fn join<S: AsRef<str>>(rpn: &[S]) -> String {
    rpn.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
