//! Seeker - condition language, sorting and selection lists for board game
//! catalogs.
//!
//! The crate narrows a fixed in-memory catalog of [`BoardGame`] records with
//! a small textual condition language, orders the result deterministically,
//! and keeps a separate [`GameList`] of picked names.
//!
//! - **Columns**: a capability table maps case-insensitive tokens to typed
//!   accessors ([`Column`])
//! - **Conditions**: comma-separated `column op literal` clauses ([`Clause`])
//! - **Sorting**: one primary column plus a name tie-break ([`OrderBy`])
//! - **Sessions**: cumulative narrowing until reset ([`Planner`])
//! - **Selection**: add/remove by `all`, index, range or name ([`GameList`])
//!
//! # Quick Start
//!
//! ```rust
//! use meeple_seeker::{BoardGame, Column, GameList, Planner};
//!
//! let catalog = vec![
//!     BoardGame::new("Chess", 7).players(2, 2).rating(10.0),
//!     BoardGame::new("Go", 1).players(2, 5).rating(7.5),
//!     BoardGame::new("Tucano", 5).players(10, 20).rating(8.0),
//! ];
//!
//! let mut planner = Planner::new(&catalog);
//! let results = planner.query("minPlayers<=2", Column::Rating, false);
//! assert_eq!(results[0].name, "Chess");
//!
//! let mut list = GameList::new();
//! list.add("1-2", &results).unwrap();
//! assert_eq!(list.names(), ["Chess", "Go"]);
//! ```
//!
//! # Condition Language
//!
//! ```text
//! expr      := condition (',' condition)*
//! condition := column op literal
//! op        := '>=' | '<=' | '==' | '!=' | '~=' | '>' | '<'
//! ```
//!
//! | Kind | Columns | Operators |
//! |------|---------|-----------|
//! | String | `name` | `~=`, `==`, `!=` (case-insensitive) |
//! | Integer | `rank`, `minplayers`, `maxplayers`, `mintime`, `maxtime`, `year` | all but `~=` |
//! | Real | `rating`, `difficulty` | all but `~=`; equality within `1e-9` |
//!
//! Conditions are an implicit AND chain. A condition that cannot be parsed
//! (unknown column or operator, `id` column, literal of the wrong type) is
//! skipped; the others still apply.

pub mod catalog;
mod clause;
mod column;
mod error;
mod op;
mod ordering;
mod planner;
mod query;
mod record;
mod selection;
mod value;

// Re-export public API
pub use clause::{parse_expression, Clause, Skip, EPSILON};
pub use column::{Column, ColumnSpec};
pub use error::{Result, ShelfError};
pub use op::Op;
pub use ordering::{compare_values, Dir, OrderBy};
pub use planner::Planner;
pub use query::Query;
pub use record::BoardGame;
pub use selection::{GameList, ALL};
pub use value::{fold_cmp, fold_eq, Kind, Literal, Value};
