//! Field validation rules.
//!
//! Rules follow form-control conventions: `Required` rejects an empty value,
//! while the length rules only apply to non-empty values, so an empty
//! required field reports `Required` alone. Lengths count characters.

use std::collections::BTreeMap;
use std::fmt;

/// A constraint on one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Must not be empty
    Required,
    /// At least this many characters
    MinLength(usize),
    /// At most this many characters
    MaxLength(usize),
}

/// A broken [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Value is empty
    Required,
    /// Value is shorter than `min`
    MinLength {
        /// Required minimum
        min: usize,
        /// Actual length
        actual: usize,
    },
    /// Value is longer than `max`
    MaxLength {
        /// Allowed maximum
        max: usize,
        /// Actual length
        actual: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "required"),
            Violation::MinLength { min, actual } => {
                write!(f, "at least {min} characters (got {actual})")
            }
            Violation::MaxLength { max, actual } => {
                write!(f, "at most {max} characters (got {actual})")
            }
        }
    }
}

impl Rule {
    /// Checks `value` against this rule.
    pub fn check(self, value: &str) -> Option<Violation> {
        let actual = value.chars().count();
        match self {
            Rule::Required if value.is_empty() => Some(Violation::Required),
            Rule::MinLength(min) if actual > 0 && actual < min => {
                Some(Violation::MinLength { min, actual })
            }
            Rule::MaxLength(max) if actual > max => Some(Violation::MaxLength { max, actual }),
            _ => None,
        }
    }
}

/// Violations per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<F: Ord> {
    errors: BTreeMap<F, Vec<Violation>>,
}

impl<F: Ord + Copy> Validation<F> {
    /// Creates a passing validation.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Applies `rules` to `value` and records anything broken under `field`.
    pub fn check(&mut self, field: F, value: &str, rules: &[Rule]) -> &mut Self {
        let broken: Vec<Violation> = rules.iter().filter_map(|r| r.check(value)).collect();
        if !broken.is_empty() {
            self.errors.entry(field).or_default().extend(broken);
        }
        self
    }

    /// Returns `true` when no rule was broken.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violations recorded for `field`.
    pub fn errors_for(&self, field: F) -> &[Violation] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fields with at least one violation, in order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }
}

impl<F: Ord + Copy> Default for Validation<F> {
    fn default() -> Self {
        Self::new()
    }
}
