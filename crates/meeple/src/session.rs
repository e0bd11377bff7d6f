//! An interactive session: one planner, one game list, and the results
//! last shown to the user.

use meeple_seeker::{BoardGame, Dir, GameList, OrderBy, Planner, Query};

use crate::commands::{joined, Line, ListAction, ShellCommand};
use crate::output;

/// What the shell should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text (if any) and read the next line.
    Continue(String),
    /// Leave the shell.
    Exit,
}

impl Outcome {
    fn text(text: impl Into<String>) -> Self {
        Outcome::Continue(text.into())
    }
}

/// Shell state over a borrowed catalog.
#[derive(Debug)]
pub struct Session<'a> {
    planner: Planner<'a>,
    list: GameList,
    shown: Vec<&'a BoardGame>,
    json: bool,
}

impl<'a> Session<'a> {
    /// Starts a session; until the first filter, `list add` picks from the
    /// whole catalog sorted by name.
    pub fn new(catalog: &'a [BoardGame], json: bool) -> Self {
        Session {
            planner: Planner::new(catalog),
            list: GameList::new(),
            shown: Query::new().filter(catalog),
            json,
        }
    }

    /// The game list built so far.
    pub fn list(&self) -> &GameList {
        &self.list
    }

    /// Runs one input line.
    ///
    /// Parse errors and failed list operations are reported in the returned
    /// text; they never end the session.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::text("");
        }
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => return Outcome::text(format!("error: {}", e)),
        };
        let command = match Line::parse_words(words) {
            Ok(command) => command,
            // Includes `help`, which clap reports as an error kind.
            Err(e) => return Outcome::text(e.to_string().trim_end().to_string()),
        };
        match self.run(command) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(line, error = %e, "command failed");
                Outcome::text(format!("error: {}", e))
            }
        }
    }

    fn run(&mut self, command: ShellCommand) -> anyhow::Result<Outcome> {
        match command {
            ShellCommand::Filter { expr, sort, desc } => {
                let order = OrderBy::parse(&sort, Dir::from_ascending(!desc));
                self.shown = self.planner.query(&joined(&expr), order.column, order.dir.is_asc());
                let rendered = if self.json {
                    output::json(&self.shown)?
                } else {
                    output::table(&self.shown)
                };
                Ok(Outcome::text(rendered))
            }
            ShellCommand::Reset => {
                self.planner.reset();
                self.shown = Query::new().filter(self.planner.catalog());
                Ok(Outcome::text(format!(
                    "filters cleared ({} games)",
                    self.shown.len()
                )))
            }
            ShellCommand::List { action } => self.run_list(action.unwrap_or(ListAction::Show)),
            ShellCommand::Exit => Ok(Outcome::Exit),
        }
    }

    fn run_list(&mut self, action: ListAction) -> anyhow::Result<Outcome> {
        let text = match action {
            ListAction::Show => output::names(&self.list.names()),
            ListAction::Add { selector } => {
                self.list.add(&joined(&selector), &self.shown)?;
                format!("{} games listed", self.list.count())
            }
            ListAction::Remove { selector } => {
                self.list.remove(&joined(&selector))?;
                format!("{} games listed", self.list.count())
            }
            ListAction::Clear => {
                self.list.clear();
                "game list cleared".to_string()
            }
            ListAction::Count => self.list.count().to_string(),
            ListAction::Save { path } => {
                self.list.save(&path)?;
                format!("saved {} games to {}", self.list.count(), path.display())
            }
        };
        Ok(Outcome::text(text))
    }
}
