//! Parsed filter chains.
//!
//! A [`Query`] holds the clauses that survived parsing plus the ordering to
//! apply afterwards. Clauses are applied one after another, each narrowing
//! the survivors of the previous one, and the sort runs last.

use crate::clause::{parse_expression, Clause};
use crate::column::Column;
use crate::ordering::{Dir, OrderBy};
use crate::record::BoardGame;

/// A filter chain and its ordering.
///
/// # Example
///
/// ```
/// use meeple_seeker::{BoardGame, Column, Dir, Query};
///
/// let games = vec![
///     BoardGame::new("Chess", 7).rating(10.0).year(2006),
///     BoardGame::new("Go", 1).rating(7.5).year(2000),
///     BoardGame::new("Monopoly", 8).rating(5.0).year(2007),
/// ];
///
/// let query = Query::parse("rating>6, year>2001").order_by(Column::Rating, Dir::Desc);
/// let results = query.filter(&games);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Chess");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    clauses: Vec<Clause>,
    order: OrderBy,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all records and sorts by name ascending.
    pub fn new() -> Self {
        Query::default()
    }

    /// Parses a comma-separated filter expression.
    ///
    /// Conditions that fail to parse are dropped; the rest keep their order.
    pub fn parse(expr: &str) -> Self {
        let clauses = parse_expression(expr)
            .into_iter()
            .filter_map(|attempt| match attempt {
                Ok(clause) => Some(clause),
                Err(skip) => {
                    tracing::debug!(expr, reason = %skip, "skipping condition");
                    None
                }
            })
            .collect();
        Query {
            clauses,
            order: OrderBy::default(),
        }
    }

    /// Adds a clause to the end of the chain.
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Sets the ordering.
    pub fn order_by(mut self, column: Column, dir: Dir) -> Self {
        self.order = OrderBy::new(column, dir);
        self
    }

    /// Returns the clauses in application order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the ordering.
    pub fn ordering(&self) -> OrderBy {
        self.order
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Tests if a single record matches every clause.
    pub fn matches(&self, game: &BoardGame) -> bool {
        self.clauses.iter().all(|clause| clause.matches(game))
    }

    /// Narrows `games` by each clause in turn, without sorting.
    ///
    /// Survivors keep their input order.
    pub fn narrow<'a>(&self, mut games: Vec<&'a BoardGame>) -> Vec<&'a BoardGame> {
        for clause in &self.clauses {
            games.retain(|game| clause.matches(game));
        }
        games
    }

    /// Filters a collection, returning references to matching records
    /// sorted by the query's ordering.
    pub fn filter<'a, I>(&self, games: I) -> Vec<&'a BoardGame>
    where
        I: IntoIterator<Item = &'a BoardGame>,
    {
        let mut results = self.narrow(games.into_iter().collect());
        self.order.sort(&mut results);
        results
    }

    /// Counts the number of matching records.
    pub fn count<'a, I>(&self, games: I) -> usize
    where
        I: IntoIterator<Item = &'a BoardGame>,
    {
        games.into_iter().filter(|game| self.matches(game)).count()
    }
}
