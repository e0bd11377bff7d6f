//! Ordering types for result sorting.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for column-based
//! ordering. Every ordering ends with a case-insensitive ascending name
//! tie-break so positions in a sorted result are reproducible.

use std::cmp::Ordering;

use crate::column::Column;
use crate::record::BoardGame;
use crate::value::{fold_cmp, Kind, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Direction from an `ascending` flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sort request: primary column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    /// The column to sort by.
    pub column: Column,
    /// The sort direction.
    pub dir: Dir,
}

impl Default for OrderBy {
    fn default() -> Self {
        OrderBy {
            column: Column::Name,
            dir: Dir::Asc,
        }
    }
}

impl OrderBy {
    /// Creates a new ordering.
    ///
    /// Columns that cannot be sorted on fall back to name ascending.
    pub fn new(column: Column, dir: Dir) -> Self {
        if column.kind() == Kind::Excluded {
            return OrderBy::default();
        }
        OrderBy { column, dir }
    }

    /// Creates a new ascending ordering for the given column.
    pub fn asc(column: Column) -> Self {
        OrderBy::new(column, Dir::Asc)
    }

    /// Creates a new descending ordering for the given column.
    pub fn desc(column: Column) -> Self {
        OrderBy::new(column, Dir::Desc)
    }

    /// Resolves a column token; unknown tokens fall back to name ascending.
    pub fn parse(token: &str, dir: Dir) -> Self {
        match Column::from_name(token) {
            Some(column) => OrderBy::new(column, dir),
            None => OrderBy::default(),
        }
    }

    /// Compares two records: the primary column in this ordering's
    /// direction, then name ascending regardless of direction.
    pub fn compare(&self, a: &BoardGame, b: &BoardGame) -> Ordering {
        let primary = compare_values(&self.column.value(a), &self.column.value(b));
        self.dir
            .apply(primary)
            .then_with(|| fold_cmp(&a.name, &b.name))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Sorts records in place by this ordering.
    pub fn sort(&self, games: &mut [&BoardGame]) {
        games.sort_by(|a, b| self.compare(a, b));
    }
}

/// Compares two values of the same kind in their natural order.
///
/// Strings compare case-insensitively; reals use a total order so NaN
/// sorts consistently. Both sides come from one column, so mixed kinds
/// never meet; they compare equal.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => fold_cmp(a, b),
        (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (Value::Real(a), Value::Real(b)) => a.total_cmp(b),
        _ => Ordering::Equal,
    }
}
