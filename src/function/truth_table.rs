//! Truth table rows

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::formula::Valuation;

/// Value of `names[j]` in row `index`, first variable as most significant bit
fn bit_of(names: &[Arc<str>], index: usize, name: &str) -> Option<bool> {
    let n = names.len();
    let j = names.iter().position(|v| v.as_ref() == name)?;
    Some((index >> (n - 1 - j)) & 1 == 1)
}

/// Number of rows of a table over `variables` variables
///
/// `None` once `2^variables` no longer fits in a `usize`.
pub(crate) fn row_count_for(variables: usize) -> Option<usize> {
    u32::try_from(variables)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
}

/// Widest table [`row_count_for`] accepts
pub(crate) const MAX_TABLE_VARIABLES: usize = usize::BITS as usize - 1;

/// The assignment encoded by a row index, before its result is known
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowAssignment<'a> {
    names: &'a [Arc<str>],
    index: usize,
}

impl<'a> RowAssignment<'a> {
    pub(crate) fn new(names: &'a [Arc<str>], index: usize) -> Self {
        RowAssignment { names, index }
    }

    /// Every variable of the assignment with its value, in name order
    pub(crate) fn pairs(self) -> impl Iterator<Item = (&'a Arc<str>, bool)> + 'a {
        let RowAssignment { names, index } = self;
        let n = names.len();
        names
            .iter()
            .enumerate()
            .map(move |(j, name)| (name, (index >> (n - 1 - j)) & 1 == 1))
    }
}

impl Valuation for RowAssignment<'_> {
    fn value_of(&self, name: &str) -> Option<bool> {
        bit_of(self.names, self.index, name)
    }
}

/// One row of a truth table: an assignment of every variable and the result
///
/// Rows of the same table share their variable names. The assignment is the
/// binary encoding of [`index`](Self::index) with the first variable as the most
/// significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTableRow {
    names: Arc<[Arc<str>]>,
    index: usize,
    result: bool,
}

impl TruthTableRow {
    pub(crate) fn new(names: Arc<[Arc<str>]>, index: usize, result: bool) -> Self {
        TruthTableRow {
            names,
            index,
            result,
        }
    }

    /// Position of the row in its table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Function value on this row
    pub fn result(&self) -> bool {
        self.result
    }

    /// Variable names, in table order
    pub fn variable_names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Value of one variable, `None` if the row has no such variable
    pub fn value(&self, name: &str) -> Option<bool> {
        bit_of(&self.names, self.index, name)
    }

    /// `(name, value)` pairs in table order
    pub fn values(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        let n = self.names.len();
        self.names
            .iter()
            .enumerate()
            .map(move |(j, name)| (name.as_ref(), (self.index >> (n - 1 - j)) & 1 == 1))
    }

    /// The assignment as an owned map
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.values()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Whether every variable of `test` is in this row with the same value
    ///
    /// Variables of the row that `test` does not mention are ignored, so a
    /// partial assignment matches every row that agrees with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::BooleanFunction;
    ///
    /// let f = BooleanFunction::from_number(2, 0b0001).unwrap();
    /// let last = &f.truth_table()[3];
    /// assert!(last.matches([("x1", true)]));
    /// assert!(last.matches([("x1", true), ("x2", true)]));
    /// assert!(!last.matches([("x2", false)]));
    /// assert!(!last.matches([("y", true)]));
    /// ```
    pub fn matches<I, K, B>(&self, test: I) -> bool
    where
        I: IntoIterator<Item = (K, B)>,
        K: AsRef<str>,
        B: Borrow<bool>,
    {
        test.into_iter()
            .all(|(name, value)| self.value(name.as_ref()) == Some(*value.borrow()))
    }
}

impl Valuation for TruthTableRow {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.value(name)
    }
}

impl fmt::Display for TruthTableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, " → {}", self.result)
    }
}
