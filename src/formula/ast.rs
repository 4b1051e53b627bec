//! Expression tree built from RPN, folding and rewriting into the {¬, ∧, ∨} basis

use std::sync::Arc;

use super::error::FormulaParseError;
use super::operators::{is_variable, Arity, Operator, FALSE_SYMBOL, TRUE_SYMBOL};
use super::{lexer, parser};

/// Node view handed to [`FormulaAst::fold`]
///
/// Children are replaced by the results already computed for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// A constant value
    Constant(bool),
    /// Negation of the folded operand
    Not(T),
    /// A binary connective with folded operands
    Binary(Operator, T, T),
}

/// Expression tree of a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaAst {
    /// A named variable
    Variable(Arc<str>),
    /// `0` or `1`
    Constant(bool),
    /// Negation
    Not(Box<FormulaAst>),
    /// Any binary connective
    Binary(Operator, Box<FormulaAst>, Box<FormulaAst>),
}

impl FormulaAst {
    /// Tokenize, convert to RPN and build the tree
    pub fn parse(formula: &str) -> Result<Self, FormulaParseError> {
        let tokens = lexer::tokenize(formula)?;
        let rpn = parser::to_rpn(&tokens)?;
        Self::from_rpn(&rpn)
    }

    /// Rebuild a tree from RPN using the evaluator's stack discipline
    pub fn from_rpn<S: AsRef<str>>(rpn: &[S]) -> Result<Self, FormulaParseError> {
        let mut stack: Vec<FormulaAst> = Vec::with_capacity(rpn.len());

        for token in rpn {
            let token = token.as_ref();

            if token == FALSE_SYMBOL || token == TRUE_SYMBOL {
                stack.push(FormulaAst::Constant(token == TRUE_SYMBOL));
                continue;
            }
            if is_variable(token) {
                stack.push(FormulaAst::Variable(Arc::from(token)));
                continue;
            }

            let op = Operator::from_symbol(token).ok_or_else(|| FormulaParseError::UnknownToken {
                token: Arc::from(token),
            })?;
            let insufficient = || FormulaParseError::InsufficientOperands {
                operator: Arc::from(op.symbol()),
            };

            match op.arity() {
                Arity::Unary => {
                    let operand = stack.pop().ok_or_else(insufficient)?;
                    stack.push(FormulaAst::not(operand));
                }
                Arity::Binary => {
                    if stack.len() < 2 {
                        return Err(insufficient());
                    }
                    let rhs = stack.pop().ok_or_else(insufficient)?;
                    let lhs = stack.pop().ok_or_else(insufficient)?;
                    stack.push(FormulaAst::binary(op, lhs, rhs));
                }
            }
        }

        let remaining = stack.len();
        match (stack.pop(), remaining) {
            (Some(root), 1) => Ok(root),
            _ => Err(FormulaParseError::MalformedExpression { remaining }),
        }
    }

    /// Negation node
    pub fn not(operand: FormulaAst) -> Self {
        FormulaAst::Not(Box::new(operand))
    }

    /// Binary node
    pub fn binary(op: Operator, lhs: FormulaAst, rhs: FormulaAst) -> Self {
        FormulaAst::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Conjunction node
    pub fn and(lhs: FormulaAst, rhs: FormulaAst) -> Self {
        Self::binary(Operator::And, lhs, rhs)
    }

    /// Disjunction node
    pub fn or(lhs: FormulaAst, rhs: FormulaAst) -> Self {
        Self::binary(Operator::Or, lhs, rhs)
    }

    /// Fold the tree bottom-up
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::formula::{AstNode, FormulaAst};
    ///
    /// let ast = FormulaAst::parse("a ∧ ¬b").unwrap();
    /// let ops = ast.fold(|node| match node {
    ///     AstNode::Variable(_) | AstNode::Constant(_) => 0,
    ///     AstNode::Not(inner) => inner + 1,
    ///     AstNode::Binary(_, l, r) => l + r + 1,
    /// });
    /// assert_eq!(ops, 2);
    /// ```
    pub fn fold<'a, T, F>(&'a self, f: F) -> T
    where
        F: Fn(AstNode<'a, T>) -> T,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<'a, T, F>(&'a self, f: &F) -> T
    where
        F: Fn(AstNode<'a, T>) -> T,
    {
        match self {
            FormulaAst::Variable(name) => f(AstNode::Variable(name)),
            FormulaAst::Constant(value) => f(AstNode::Constant(*value)),
            FormulaAst::Not(inner) => {
                let inner = inner.fold_impl(f);
                f(AstNode::Not(inner))
            }
            FormulaAst::Binary(op, lhs, rhs) => {
                let lhs = lhs.fold_impl(f);
                let rhs = rhs.fold_impl(f);
                f(AstNode::Binary(*op, lhs, rhs))
            }
        }
    }

    /// Rewrite XOR, implication and equivalence into ¬, ∧ and ∨
    ///
    /// - `a ^ b` becomes `(a ∧ ¬b) ∨ (¬a ∧ b)`
    /// - `a → b` becomes `¬a ∨ b`
    /// - `a ↔ b` becomes `(a ∧ b) ∨ (¬a ∧ ¬b)`
    pub fn to_basic_basis(&self) -> FormulaAst {
        self.fold(|node| match node {
            AstNode::Variable(name) => FormulaAst::Variable(Arc::from(name)),
            AstNode::Constant(value) => FormulaAst::Constant(value),
            AstNode::Not(inner) => FormulaAst::not(inner),
            AstNode::Binary(Operator::Xor, l, r) => FormulaAst::or(
                FormulaAst::and(l.clone(), FormulaAst::not(r.clone())),
                FormulaAst::and(FormulaAst::not(l), r),
            ),
            AstNode::Binary(Operator::Implies, l, r) => FormulaAst::or(FormulaAst::not(l), r),
            AstNode::Binary(Operator::Equiv, l, r) => FormulaAst::or(
                FormulaAst::and(l.clone(), r.clone()),
                FormulaAst::and(FormulaAst::not(l), FormulaAst::not(r)),
            ),
            AstNode::Binary(op, l, r) => FormulaAst::binary(op, l, r),
        })
    }

    /// Whether the tree only uses ¬, ∧ and ∨
    pub fn is_basic(&self) -> bool {
        self.fold(|node| match node {
            AstNode::Variable(_) | AstNode::Constant(_) => true,
            AstNode::Not(inner) => inner,
            AstNode::Binary(op, l, r) => matches!(op, Operator::And | Operator::Or) && l && r,
        })
    }
}
