//! Size limits for truth tables and comparisons

/// Upper bounds on the number of variables the engines accept
///
/// Every truth table has `2^n` rows, so these bounds are what keep construction
/// and comparison fast. The plain constructors and [`compare`](crate::compare)
/// use [`Limits::default()`]; the `*_with_limits` variants take a custom value.
///
/// # Examples
///
/// ```
/// use logic_tool::{compare_with_limits, BooleanFunction, Limits};
///
/// let mut limits = Limits::default();
/// limits.max_comparison_variables = 2;
///
/// let f = BooleanFunction::from_formula("a ∧ b ∧ c").unwrap();
/// let result = compare_with_limits(&f, &f, &limits);
/// assert!(!result.is_equivalent());
/// ```
///
/// # Defaults
///
/// | Field | Default |
/// |---|---|
/// | `max_function_variables` | 10 |
/// | `max_comparison_variables` | 8 |
/// | `max_formula_variables` | 16 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Largest variable count accepted by
    /// [`BooleanFunction::from_number`](crate::BooleanFunction::from_number)
    ///
    /// **Default:** `10`
    pub max_function_variables: u32,

    /// Largest size of the variable union two functions may be compared over
    ///
    /// **Default:** `8`
    pub max_comparison_variables: usize,

    /// Largest number of distinct variables in a formula
    ///
    /// **Default:** `16`
    pub max_formula_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_function_variables: 10,
            max_comparison_variables: 8,
            max_formula_variables: 16,
        }
    }
}

impl Limits {
    /// Create limits with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
