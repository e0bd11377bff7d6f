//! Comparison operators for filter conditions.
//!
//! The [`Op`] enum defines every operator the condition language accepts,
//! along with the token each one is written as.

use std::cmp::Ordering;

/// Comparison operator for a condition.
///
/// String columns accept `Contains`, `Eq` and `Ne`; numeric columns accept
/// every operator except `Contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Substring match, written `~=`.
    Contains,
    /// Equal, written `==`.
    Eq,
    /// Not equal, written `!=`.
    Ne,
    /// Greater than, written `>`.
    Gt,
    /// Greater than or equal, written `>=`.
    Gte,
    /// Less than, written `<`.
    Lt,
    /// Less than or equal, written `<=`.
    Lte,
}

impl Op {
    /// Operators in recognition order: two-character tokens come first so
    /// that `>=` is never read as `>` followed by `=`.
    pub const RECOGNITION_ORDER: [Op; 7] =
        [Op::Gte, Op::Lte, Op::Eq, Op::Ne, Op::Contains, Op::Gt, Op::Lt];

    /// Returns the token this operator is written as.
    pub fn token(self) -> &'static str {
        match self {
            Op::Contains => "~=",
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
        }
    }

    /// Finds the first operator token in `text`.
    ///
    /// Positions are scanned left to right; at each position multi-character
    /// tokens are tried before single-character ones. Returns the byte offset
    /// of the token and the operator.
    pub fn find_in(text: &str) -> Option<(usize, Op)> {
        text.char_indices().find_map(|(at, _)| {
            let rest = &text[at..];
            Op::RECOGNITION_ORDER
                .iter()
                .find(|op| rest.starts_with(op.token()))
                .map(|op| (at, *op))
        })
    }

    /// Returns `true` if this operator is valid for string comparisons.
    pub fn is_string_op(self) -> bool {
        matches!(self, Op::Contains | Op::Eq | Op::Ne)
    }

    /// Returns `true` if this operator is valid for numeric comparisons.
    pub fn is_number_op(self) -> bool {
        !matches!(self, Op::Contains)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Contains => "contains",
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
