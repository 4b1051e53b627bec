//! Boolean functions given by number or by formula
//!
//! A [`BooleanFunction`] owns its complete truth table together with the perfect
//! DNF and KNF derived from it. It is built once by
//! [`from_number`](BooleanFunction::from_number) or
//! [`from_formula`](BooleanFunction::from_formula) and never changes afterwards.
//!
//! # Row order
//!
//! Row `i` assigns the binary digits of `i` to the variables, first variable as
//! the most significant bit. For a function given by number, row `i` takes bit
//! `2^n − 1 − i` of the number, so the binary code of the number read left to
//! right is the result column read top to bottom.
//!
//! ```
//! use logic_tool::BooleanFunction;
//!
//! let f = BooleanFunction::from_number(3, 11)?;
//! let results: Vec<bool> = f.truth_table().iter().map(|row| row.result()).collect();
//! assert_eq!(results, [false, false, false, false, true, false, true, true]);
//! assert_eq!(
//!     f.dnf(),
//!     "(x1 ∧ ¬x2 ∧ ¬x3) ∨ (x1 ∧ x2 ∧ ¬x3) ∨ (x1 ∧ x2 ∧ x3)"
//! );
//! # Ok::<(), logic_tool::LogicError>(())
//! ```

mod complexity;
mod metrics;
mod truth_table;

pub use complexity::{ComplexityLevel, NormalFormType};
pub use metrics::FormulaMetrics;
pub use truth_table::TruthTableRow;

pub(crate) use truth_table::{row_count_for, RowAssignment, MAX_TABLE_VARIABLES};

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, trace};

use crate::config::Limits;
use crate::error::{ArgumentError, LogicError};
use crate::formula::{evaluate, is_variable, to_rpn, tokenize, Operator, Valuation};

/// Where a function came from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Number(u64),
    Formula { text: Arc<str>, rpn: Vec<String> },
}

/// A boolean function with its truth table and perfect normal forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanFunction {
    variable_names: Arc<[Arc<str>]>,
    truth_table: Vec<TruthTableRow>,
    dnf: String,
    knf: String,
    origin: Origin,
    complexity: ComplexityLevel,
}

impl BooleanFunction {
    /// Build the function of `variables` variables with the given number
    ///
    /// Variables are named `x1..xn`. Uses [`Limits::default()`].
    ///
    /// # Errors
    ///
    /// [`ArgumentError::VariableCountOutOfRange`] unless `1 <= variables <= 10`,
    /// and [`ArgumentError::FunctionNumberOutOfRange`] if `number` has a set bit
    /// beyond the `2^variables` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::BooleanFunction;
    ///
    /// let xor = BooleanFunction::from_number(2, 0b0110).unwrap();
    /// assert_eq!(xor.dnf(), "(¬x1 ∧ x2) ∨ (x1 ∧ ¬x2)");
    /// assert_eq!(xor.knf(), "(x1 ∨ x2) ∧ (¬x1 ∨ ¬x2)");
    ///
    /// assert!(BooleanFunction::from_number(2, 16).is_err());
    /// ```
    pub fn from_number(variables: u32, number: u64) -> Result<Self, LogicError> {
        Self::from_number_with_limits(variables, number, &Limits::default())
    }

    /// Like [`from_number`](Self::from_number) with custom limits
    pub fn from_number_with_limits(
        variables: u32,
        number: u64,
        limits: &Limits,
    ) -> Result<Self, LogicError> {
        let out_of_range = || ArgumentError::VariableCountOutOfRange {
            requested: variables,
            max: limits.max_function_variables,
        };
        if !(1..=limits.max_function_variables).contains(&variables) {
            return Err(out_of_range().into());
        }
        let rows = 1usize.checked_shl(variables).ok_or_else(out_of_range)?;

        let max = match u32::try_from(rows) {
            Ok(bits) if bits < u64::BITS => (1u64 << bits) - 1,
            _ => u64::MAX,
        };
        if number > max {
            return Err(ArgumentError::FunctionNumberOutOfRange {
                number,
                max,
                variables,
            }
            .into());
        }

        let variable_names: Arc<[Arc<str>]> = (1..=variables)
            .map(|i| Arc::from(format!("x{}", i)))
            .collect();
        let truth_table = (0..rows)
            .map(|i| {
                let result = number_bit(number, rows - 1 - i);
                trace!("row {}: f = {}", i, u8::from(result));
                TruthTableRow::new(Arc::clone(&variable_names), i, result)
            })
            .collect();

        let function = Self::assemble(variable_names, truth_table, Origin::Number(number));
        debug!(
            "Built function #{} of {} variables ({} rows, complexity {})",
            number,
            variables,
            rows,
            function.complexity
        );
        Ok(function)
    }

    /// Build the function computed by a formula
    ///
    /// Variables are the distinct identifiers of the formula in lexicographic
    /// order. Uses [`Limits::default()`].
    ///
    /// # Errors
    ///
    /// [`ArgumentError::EmptyFormula`] for blank input,
    /// [`ArgumentError::TooManyVariables`] past the formula limit, and
    /// [`LogicError::Parse`] when the formula does not parse or evaluate.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::BooleanFunction;
    ///
    /// let f = BooleanFunction::from_formula("b -> a").unwrap();
    /// assert_eq!(f.variable_names().len(), 2);
    /// assert_eq!(f.variable_names()[0].as_ref(), "a");
    /// assert_eq!(f.knf(), "(a ∨ ¬b)");
    /// assert_eq!(f.function_number(), None);
    /// ```
    pub fn from_formula(formula: &str) -> Result<Self, LogicError> {
        Self::from_formula_with_limits(formula, &Limits::default())
    }

    /// Like [`from_formula`](Self::from_formula) with custom limits
    pub fn from_formula_with_limits(formula: &str, limits: &Limits) -> Result<Self, LogicError> {
        if formula.trim().is_empty() {
            return Err(ArgumentError::EmptyFormula.into());
        }

        let tokens = tokenize(formula)?;
        let rpn = to_rpn(&tokens)?;

        let distinct: BTreeSet<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|token| is_variable(token))
            .collect();
        if distinct.len() > limits.max_formula_variables {
            return Err(ArgumentError::TooManyVariables {
                found: distinct.len(),
                max: limits.max_formula_variables,
            }
            .into());
        }
        let variable_names: Arc<[Arc<str>]> = distinct.into_iter().map(Arc::from).collect();

        let rows =
            row_count_for(variable_names.len()).ok_or(ArgumentError::TooManyVariables {
                found: variable_names.len(),
                max: MAX_TABLE_VARIABLES,
            })?;
        let mut truth_table = Vec::with_capacity(rows);
        for i in 0..rows {
            let result = evaluate(&rpn, &RowAssignment::new(&variable_names, i))?;
            trace!("row {}: f = {}", i, u8::from(result));
            truth_table.push(TruthTableRow::new(Arc::clone(&variable_names), i, result));
        }

        let origin = Origin::Formula {
            text: Arc::from(formula),
            rpn,
        };
        let function = Self::assemble(variable_names, truth_table, origin);
        debug!(
            "Built function from {:?} over {:?} ({} rows, complexity {})",
            formula,
            function.variable_names,
            rows,
            function.complexity
        );
        Ok(function)
    }

    fn assemble(
        variable_names: Arc<[Arc<str>]>,
        truth_table: Vec<TruthTableRow>,
        origin: Origin,
    ) -> Self {
        let dnf = perfect_form(&truth_table, true, Operator::And, Operator::Or);
        let knf = perfect_form(&truth_table, false, Operator::Or, Operator::And);
        let complexity = ComplexityLevel::from_variable_count(variable_names.len());
        BooleanFunction {
            variable_names,
            truth_table,
            dnf,
            knf,
            origin,
            complexity,
        }
    }

    /// Number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_names.len()
    }

    /// Variable names in table order
    pub fn variable_names(&self) -> &[Arc<str>] {
        &self.variable_names
    }

    /// All `2^n` rows in index order
    pub fn truth_table(&self) -> &[TruthTableRow] {
        &self.truth_table
    }

    /// Number of truth table rows
    pub fn row_count(&self) -> usize {
        self.truth_table.len()
    }

    /// Perfect disjunctive normal form
    pub fn dnf(&self) -> &str {
        &self.dnf
    }

    /// Perfect conjunctive normal form
    pub fn knf(&self) -> &str {
        &self.knf
    }

    /// Select a normal form by kind
    pub fn normal_form(&self, kind: NormalFormType) -> &str {
        match kind {
            NormalFormType::Dnf | NormalFormType::PerfectDnf => &self.dnf,
            NormalFormType::Knf | NormalFormType::PerfectKnf => &self.knf,
        }
    }

    /// Source formula, empty for a function given by number
    pub fn original_formula(&self) -> &str {
        match &self.origin {
            Origin::Number(_) => "",
            Origin::Formula { text, .. } => text,
        }
    }

    /// Function number, `None` for a function given by formula
    pub fn function_number(&self) -> Option<u64> {
        match self.origin {
            Origin::Number(number) => Some(number),
            Origin::Formula { .. } => None,
        }
    }

    /// Whether the function was built from a formula
    pub fn is_from_formula(&self) -> bool {
        matches!(self.origin, Origin::Formula { .. })
    }

    /// RPN of the source formula
    pub(crate) fn rpn(&self) -> Option<&[String]> {
        match &self.origin {
            Origin::Number(_) => None,
            Origin::Formula { rpn, .. } => Some(rpn),
        }
    }

    /// Complexity class
    pub fn complexity(&self) -> ComplexityLevel {
        self.complexity
    }

    /// Advisory text for the complexity class, empty when low
    pub fn complexity_warning(&self) -> &'static str {
        self.complexity.warning()
    }

    /// Cost metrics of the perfect DNF and KNF
    pub fn metrics(&self) -> FormulaMetrics {
        FormulaMetrics::new(&self.dnf, &self.knf)
    }

    /// Truth table lookup
    ///
    /// Reads the function's own variables from `assignment` and returns the
    /// result of that row. Extra names in `assignment` are ignored; `None` if one
    /// of the function's variables is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::BooleanFunction;
    /// use std::collections::HashMap;
    ///
    /// let f = BooleanFunction::from_formula("a ∧ ¬b").unwrap();
    /// let assignment = HashMap::from([("a", true), ("b", false), ("c", true)]);
    /// assert_eq!(f.value_at(&assignment), Some(true));
    /// assert_eq!(f.value_at(&HashMap::from([("a", true)])), None);
    /// ```
    pub fn value_at<V: Valuation + ?Sized>(&self, assignment: &V) -> Option<bool> {
        let mut index = 0usize;
        for name in self.variable_names.iter() {
            index = (index << 1) | usize::from(assignment.value_of(name)?);
        }
        self.truth_table.get(index).map(TruthTableRow::result)
    }

    /// Explain how the bits of the function number map onto table rows
    ///
    /// Empty for a function given by formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::BooleanFunction;
    ///
    /// let f = BooleanFunction::from_number(1, 0b10).unwrap();
    /// let text = f.describe_binary_mapping();
    /// assert!(text.starts_with("Function code (2 bits): 10\n"));
    /// assert!(text.contains("1. (x1=0) → f = 1 ↔ bit 1\n"));
    /// assert!(text.contains("2. (x1=1) → f = 0 ↔ bit 0\n"));
    /// ```
    pub fn describe_binary_mapping(&self) -> String {
        let number = match self.origin {
            Origin::Number(number) => number,
            Origin::Formula { .. } => return String::new(),
        };

        let rows = self.truth_table.len();
        let binary = format!("{:0width$b}", number, width = rows);
        let mut text = format!(
            "Function code ({} bits): {}\n\
             Rows are read left to right in lexicographic order of the variables.\n",
            rows, binary
        );

        for (row, bit) in self.truth_table.iter().zip(binary.chars()) {
            let tuple = row
                .values()
                .map(|(name, value)| format!("{}={}", name, u8::from(value)))
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!(
                "{}. ({}) → f = {} ↔ bit {}\n",
                row.index() + 1,
                tuple,
                u8::from(row.result()),
                bit
            ));
        }

        text
    }
}

/// Bit `position` of `number`; positions past 63 read as zero
fn number_bit(number: u64, position: usize) -> bool {
    u32::try_from(position)
        .ok()
        .and_then(|position| number.checked_shr(position))
        .is_some_and(|shifted| shifted & 1 == 1)
}

/// Perfect DNF (`want = true`) or perfect KNF (`want = false`)
///
/// One `inner`-joined term per row whose result is `want`; a variable appears
/// plain when its value equals `want` and negated otherwise. Terms are joined by
/// `outer`. With no such rows the result is the constant `!want`; a function of
/// zero variables with such a row is the constant `want`.
fn perfect_form(table: &[TruthTableRow], want: bool, inner: Operator, outer: Operator) -> String {
    let constant = |value: bool| if value { "1" } else { "0" }.to_string();

    let rows: Vec<&TruthTableRow> = table.iter().filter(|row| row.result() == want).collect();
    if rows.is_empty() {
        return constant(!want);
    }
    if rows.iter().all(|row| row.variable_names().is_empty()) {
        return constant(want);
    }

    let inner_sep = format!(" {} ", inner);
    let outer_sep = format!(" {} ", outer);
    rows.iter()
        .map(|row| {
            let literals: Vec<String> = row
                .values()
                .map(|(name, value)| {
                    if value == want {
                        name.to_string()
                    } else {
                        format!("{}{}", Operator::Not, name)
                    }
                })
                .collect();
            format!("({})", literals.join(&inner_sep))
        })
        .collect::<Vec<_>>()
        .join(&outer_sep)
}
