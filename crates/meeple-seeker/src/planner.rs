//! Stateful filtering session over a catalog.
//!
//! A [`Planner`] narrows cumulatively: each [`Planner::query`] filters the
//! result of the previous call, not the full catalog, until
//! [`Planner::reset`] restores the full catalog as the working set.
//!
//! ```
//! use meeple_seeker::{BoardGame, Planner};
//!
//! let catalog = vec![
//!     BoardGame::new("Chess", 7).rating(10.0).year(2006),
//!     BoardGame::new("Go", 1).rating(7.5).year(2000),
//!     BoardGame::new("Monopoly", 8).rating(5.0).year(2007),
//! ];
//! let mut planner = Planner::new(&catalog);
//!
//! assert_eq!(planner.filter("rating>7").len(), 2);
//! // Only survivors of the previous call are considered.
//! assert_eq!(planner.filter("year>2005").len(), 1);
//!
//! planner.reset();
//! assert_eq!(planner.filter("year>2005").len(), 2);
//! ```

use crate::column::Column;
use crate::ordering::Dir;
use crate::query::Query;
use crate::record::BoardGame;

/// Cumulative filter session over a borrowed catalog.
///
/// The catalog is shared read-only; the working set is owned by the planner
/// and only ever handed out as a fresh `Vec`.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    catalog: &'a [BoardGame],
    working: Vec<&'a BoardGame>,
}

impl<'a> Planner<'a> {
    /// Starts a session with the full catalog as the working set.
    pub fn new(catalog: &'a [BoardGame]) -> Self {
        Planner {
            catalog,
            working: catalog.iter().collect(),
        }
    }

    /// Filters the working set by `expr`, sorts by name ascending.
    pub fn filter(&mut self, expr: &str) -> Vec<&'a BoardGame> {
        self.query(expr, Column::Name, true)
    }

    /// Filters the working set by `expr`, sorts ascending by `column`.
    pub fn filter_sorted(&mut self, expr: &str, column: Column) -> Vec<&'a BoardGame> {
        self.query(expr, column, true)
    }

    /// Filters the working set by `expr` and sorts by `column`.
    ///
    /// A blank expression skips filtering. The sorted result replaces the
    /// working set and a copy of it is returned.
    pub fn query(&mut self, expr: &str, column: Column, ascending: bool) -> Vec<&'a BoardGame> {
        let query = Query::parse(expr).order_by(column, Dir::from_ascending(ascending));
        let before = self.working.len();
        let working = std::mem::take(&mut self.working);
        self.working = query.filter(working);
        tracing::debug!(
            expr,
            order = %query.ordering().column,
            dir = %query.ordering().dir,
            before,
            after = self.working.len(),
            "planner query"
        );
        self.working.clone()
    }

    /// Ends the cumulative chain: the full catalog becomes the working set.
    pub fn reset(&mut self) {
        self.working = self.catalog.iter().collect();
        tracing::debug!(size = self.working.len(), "planner reset");
    }

    /// Returns a copy of the working set as left by the last call.
    pub fn current(&self) -> Vec<&'a BoardGame> {
        self.working.clone()
    }

    /// Returns the full catalog.
    pub fn catalog(&self) -> &'a [BoardGame] {
        self.catalog
    }
}
