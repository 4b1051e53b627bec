//! Complexity classification and normal form selection

use std::fmt;

/// Advisory cost class of a function, derived from its variable count
///
/// Truth tables grow as `2^n`, so the class only depends on `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexityLevel {
    /// Up to 4 variables
    Low,
    /// 5 or 6 variables
    Medium,
    /// 7 or 8 variables
    High,
    /// 9 to 11 variables
    VeryHigh,
    /// 12 variables or more
    Critical,
}

impl ComplexityLevel {
    /// Classify a function by its number of variables
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_tool::ComplexityLevel;
    ///
    /// assert_eq!(ComplexityLevel::from_variable_count(4), ComplexityLevel::Low);
    /// assert_eq!(ComplexityLevel::from_variable_count(9), ComplexityLevel::VeryHigh);
    /// ```
    pub fn from_variable_count(variables: usize) -> Self {
        match variables {
            0..=4 => ComplexityLevel::Low,
            5..=6 => ComplexityLevel::Medium,
            7..=8 => ComplexityLevel::High,
            9..=11 => ComplexityLevel::VeryHigh,
            _ => ComplexityLevel::Critical,
        }
    }

    /// Advisory text for callers; empty for [`ComplexityLevel::Low`]
    pub fn warning(self) -> &'static str {
        match self {
            ComplexityLevel::Low => "",
            ComplexityLevel::Medium => "Note: moderate computational complexity",
            ComplexityLevel::High => "Warning: high computational complexity (O(2^n))",
            ComplexityLevel::VeryHigh => "Strong warning: very high computational complexity",
            ComplexityLevel::Critical => {
                "CRITICAL WARNING: exponential complexity may make the program unresponsive"
            }
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
            ComplexityLevel::VeryHigh => "Very high",
            ComplexityLevel::Critical => "Critical",
        };
        f.write_str(name)
    }
}

/// Which normal form to read from a [`BooleanFunction`](crate::BooleanFunction)
///
/// Only perfect forms are built, so `Dnf` and `PerfectDnf` select the same text
/// (and likewise for KNF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalFormType {
    /// Disjunctive normal form
    Dnf,
    /// Conjunctive normal form
    Knf,
    /// Perfect disjunctive normal form
    PerfectDnf,
    /// Perfect conjunctive normal form
    PerfectKnf,
}

impl fmt::Display for NormalFormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NormalFormType::Dnf => "DNF",
            NormalFormType::Knf => "KNF",
            NormalFormType::PerfectDnf => "Perfect DNF",
            NormalFormType::PerfectKnf => "Perfect KNF",
        };
        f.write_str(name)
    }
}
