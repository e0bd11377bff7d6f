//! Condition parsing and predicate evaluation.
//!
//! A [`Clause`] is one parsed `column op literal` condition with its literal
//! already coerced into the column's kind. Text that cannot become a clause
//! yields a [`Skip`] describing why; callers treat skips as no-ops.

use crate::column::Column;
use crate::op::Op;
use crate::value::{Kind, Literal, Value};

/// Absolute tolerance for real equality.
pub const EPSILON: f64 = 1e-9;

/// A single parsed filter condition.
///
/// # Example
///
/// ```
/// use meeple_seeker::{BoardGame, Clause, Column, Op};
///
/// let clause = Clause::parse("minPlayers>=2").unwrap();
/// assert_eq!(clause.column, Column::MinPlayers);
/// assert_eq!(clause.op, Op::Gte);
///
/// let game = BoardGame::new("Chess", 7).players(2, 2);
/// assert!(clause.matches(&game));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The column to compare.
    pub column: Column,
    /// The comparison operator.
    pub op: Op,
    /// The literal, typed by the column's kind.
    pub literal: Literal,
}

/// Why a condition was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The segment was blank.
    Empty,
    /// No operator token was found.
    NoOperator,
    /// The operator did not split the segment into two non-empty parts.
    MalformedParts,
    /// The column text did not resolve.
    UnknownColumn(String),
    /// The column is never filtered on.
    ExcludedColumn(Column),
    /// The operator does not apply to the column's kind.
    UnsupportedOperator { op: Op, kind: Kind },
    /// The literal did not parse into the column's kind.
    BadLiteral { text: String, kind: Kind },
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::Empty => write!(f, "empty condition"),
            Skip::NoOperator => write!(f, "no operator"),
            Skip::MalformedParts => write!(f, "expected exactly one column and one value"),
            Skip::UnknownColumn(text) => write!(f, "unknown column '{}'", text),
            Skip::ExcludedColumn(column) => write!(f, "column '{}' is not filterable", column),
            Skip::UnsupportedOperator { op, kind } => {
                write!(f, "operator '{}' is not valid for {} columns", op, kind)
            }
            Skip::BadLiteral { text, kind } => write!(f, "'{}' is not a valid {}", text, kind),
        }
    }
}

impl Clause {
    /// Creates a clause from already-typed parts.
    pub fn new(column: Column, op: Op, literal: Literal) -> Self {
        Clause {
            column,
            op,
            literal,
        }
    }

    /// Parses one condition segment.
    ///
    /// The leftmost operator token splits the segment; both sides are
    /// trimmed and must be non-empty, and the literal must not repeat the
    /// operator token.
    pub fn parse(segment: &str) -> Result<Clause, Skip> {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(Skip::Empty);
        }

        let (at, op) = Op::find_in(segment).ok_or(Skip::NoOperator)?;
        let column_text = segment[..at].trim();
        let literal_text = &segment[at + op.token().len()..];
        if literal_text.contains(op.token()) {
            return Err(Skip::MalformedParts);
        }
        let literal_text = literal_text.trim();
        if column_text.is_empty() || literal_text.is_empty() {
            return Err(Skip::MalformedParts);
        }

        let column = Column::from_name(column_text)
            .ok_or_else(|| Skip::UnknownColumn(column_text.to_string()))?;
        let kind = column.kind();
        let op_valid = match kind {
            Kind::Excluded => return Err(Skip::ExcludedColumn(column)),
            Kind::String => op.is_string_op(),
            Kind::Integer | Kind::Real => op.is_number_op(),
        };
        if !op_valid {
            return Err(Skip::UnsupportedOperator { op, kind });
        }

        let literal = Literal::coerce(literal_text, kind).ok_or_else(|| Skip::BadLiteral {
            text: literal_text.to_string(),
            kind,
        })?;

        Ok(Clause::new(column, op, literal))
    }

    /// Evaluates this clause against a record.
    pub fn matches(&self, game: &crate::BoardGame) -> bool {
        match (&self.literal, self.column.value(game)) {
            (Literal::String(pattern), Value::String(s)) => self.match_string(s, pattern),
            (Literal::Integer(n), Value::Integer(field)) => self.op.eval_ordering(field.cmp(n)),
            (Literal::Real(n), Value::Real(field)) => self.match_real(field, *n),
            // Literals are coerced to the column's kind, so kinds always agree.
            _ => false,
        }
    }

    fn match_string(&self, field: &str, pattern: &str) -> bool {
        match self.op {
            Op::Contains => field.to_lowercase().contains(&pattern.to_lowercase()),
            Op::Eq => crate::value::fold_eq(field, pattern),
            Op::Ne => !crate::value::fold_eq(field, pattern),
            _ => false,
        }
    }

    // Values exactly EPSILON apart are neither equal nor not-equal.
    fn match_real(&self, field: f64, clause: f64) -> bool {
        match self.op {
            Op::Eq => (field - clause).abs() < EPSILON,
            Op::Ne => (field - clause).abs() > EPSILON,
            op => match field.partial_cmp(&clause) {
                Some(ordering) => op.eval_ordering(ordering),
                None => false, // NaN comparison
            },
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.op.token())?;
        match &self.literal {
            Literal::String(s) => write!(f, "{}", s),
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Real(n) => write!(f, "{}", n),
        }
    }
}

/// Splits an expression on commas and parses each segment in order.
///
/// A blank expression yields no attempts at all.
pub fn parse_expression(expr: &str) -> Vec<Result<Clause, Skip>> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Vec::new();
    }
    expr.split(',').map(Clause::parse).collect()
}
