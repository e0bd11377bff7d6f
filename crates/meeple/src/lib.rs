//! Interactive shell over a board game catalog.
//!
//! The binary wires [`session::Session`] to stdin; everything else lives
//! here so it can be driven from tests.
//!
//! ```rust
//! use meeple::session::{Outcome, Session};
//! use meeple_seeker::BoardGame;
//!
//! let catalog = vec![
//!     BoardGame::new("Chess", 7).rating(10.0),
//!     BoardGame::new("Go", 1).rating(7.5),
//! ];
//! let mut session = Session::new(&catalog, false);
//! session.execute("filter rating>8");
//! session.execute("list add 1");
//! assert_eq!(session.execute("list count"), Outcome::Continue("1".into()));
//! ```

pub mod commands;
pub mod logging;
pub mod output;
pub mod session;
