//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the value of a column read from a record,
//! and [`Kind`] names the type a column carries. Literals in filter
//! conditions are coerced into the column's kind before comparison.

use std::cmp::Ordering;

/// The type of values a column carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Free text, compared case-insensitively.
    String,
    /// Whole numbers.
    Integer,
    /// Floating point numbers.
    Real,
    /// Present on the record but never filtered on.
    Excluded,
}

impl Kind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime value for comparison, borrowed from the source record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Integer value.
    Integer(i64),
    /// Real value.
    Real(f64),
}

/// Owned literal parsed from a condition, typed by the target column.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Text, kept as written.
    String(String),
    /// Parsed integer.
    Integer(i64),
    /// Parsed real number.
    Real(f64),
}

impl Literal {
    /// Coerces literal text into the given kind.
    ///
    /// Returns `None` when the text does not parse for the kind, or when the
    /// kind is [`Kind::Excluded`].
    pub fn coerce(text: &str, kind: Kind) -> Option<Literal> {
        match kind {
            Kind::String => Some(Literal::String(text.to_string())),
            Kind::Integer => text.parse::<i64>().ok().map(Literal::Integer),
            Kind::Real => text.parse::<f64>().ok().map(Literal::Real),
            Kind::Excluded => None,
        }
    }
}

/// Compares two strings ignoring case, without allocating.
pub fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Returns `true` if the strings are equal ignoring case.
pub fn fold_eq(a: &str, b: &str) -> bool {
    fold_cmp(a, b) == Ordering::Equal
}
