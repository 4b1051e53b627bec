//! Infix rendering of expression trees

use std::fmt;

use super::ast::FormulaAst;
use super::operators::{Operator, FALSE_SYMBOL, TRUE_SYMBOL};

/// Fully parenthesized infix form
///
/// Every binary node is wrapped in parentheses with single spaces around the
/// operator. A negated binary operand gets one more pair, so `¬(a ∧ b)` renders
/// as `¬((a ∧ b))`.
///
/// # Examples
///
/// ```
/// use logic_tool::formula::FormulaAst;
///
/// let ast = FormulaAst::parse("a -> b").unwrap().to_basic_basis();
/// assert_eq!(ast.to_string(), "(¬a ∨ b)");
/// ```
impl fmt::Display for FormulaAst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaAst::Variable(name) => f.write_str(name),
            FormulaAst::Constant(value) => {
                f.write_str(if *value { TRUE_SYMBOL } else { FALSE_SYMBOL })
            }
            FormulaAst::Not(inner) => {
                let symbol = Operator::Not.symbol();
                match inner.as_ref() {
                    FormulaAst::Binary(..) => write!(f, "{}({})", symbol, inner),
                    _ => write!(f, "{}{}", symbol, inner),
                }
            }
            FormulaAst::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
