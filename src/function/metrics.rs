//! Cost metrics of a pair of normal forms

use std::fmt;

use crate::formula::Operator;

/// Literal and connective counts of a (DNF, KNF) pair
///
/// # Examples
///
/// ```
/// use logic_tool::FormulaMetrics;
///
/// let metrics = FormulaMetrics::new("(x1 ∧ ¬x2) ∨ (x3 ∧ x4)", "(x1 ∨ x2) ∧ (x3 ∨ ¬x4)");
/// assert_eq!(metrics.literal_count(), 8);
/// assert_eq!(metrics.total_cost(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormulaMetrics {
    literal_count: usize,
    conjunction_count: usize,
    disjunction_count: usize,
}

impl FormulaMetrics {
    /// Measure a DNF and a KNF
    ///
    /// Literals are counted in both forms, conjunctions only in the DNF and
    /// disjunctions only in the KNF.
    pub fn new(dnf: &str, knf: &str) -> Self {
        FormulaMetrics {
            literal_count: count_literals(dnf) + count_literals(knf),
            conjunction_count: dnf.matches(Operator::And.symbol()).count(),
            disjunction_count: knf.matches(Operator::Or.symbol()).count(),
        }
    }

    /// Variable occurrences, negated or not, in both forms
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Number of `∧` in the DNF
    pub fn conjunction_count(&self) -> usize {
        self.conjunction_count
    }

    /// Number of `∨` in the KNF
    pub fn disjunction_count(&self) -> usize {
        self.disjunction_count
    }

    /// Sum of the three counts
    pub fn total_cost(&self) -> usize {
        self.literal_count + self.conjunction_count + self.disjunction_count
    }
}

impl fmt::Display for FormulaMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Literals: {}, Conjunctions: {}, Disjunctions: {}, Total cost: {}",
            self.literal_count,
            self.conjunction_count,
            self.disjunction_count,
            self.total_cost()
        )
    }
}

/// Count letter-initial identifiers; constants and connectives are skipped
fn count_literals(formula: &str) -> usize {
    let mut count = 0;
    let mut in_identifier = false;

    for c in formula.chars() {
        if c.is_alphanumeric() {
            if !in_identifier && c.is_alphabetic() {
                count += 1;
            }
            in_identifier |= c.is_alphabetic();
        } else {
            in_identifier = false;
        }
    }

    count
}
