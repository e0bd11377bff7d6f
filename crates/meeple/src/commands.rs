//! Shell command grammar.
//!
//! Each input line is split into words and parsed as one of these
//! subcommands. Multi-word arguments (filter expressions, game names) are
//! rejoined with single spaces.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// One parsed shell line.
#[derive(Debug, Parser)]
#[command(
    name = "meeple",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Filter a board game catalog and keep a list of picks"
)]
pub struct Line {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ShellCommand {
    /// Narrow the current results and sort them
    #[command(allow_negative_numbers = true)]
    Filter {
        /// Conditions, e.g. `minPlayers>2, rating>=7`; quote them to keep
        /// repeated spaces
        expr: Vec<String>,
        /// Column to sort on
        #[arg(long, short, default_value = "name")]
        sort: String,
        /// Sort in descending order
        #[arg(long, short)]
        desc: bool,
    },
    /// Drop every filter and start again from the full catalog
    Reset,
    /// Show or change the game list
    List {
        #[command(subcommand)]
        action: Option<ListAction>,
    },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ListAction {
    /// Print the list
    Show,
    /// Add games from the last results: all, N, A-B or a name
    ///
    /// Unquoted words are joined with single spaces; quote a name to keep
    /// its spacing exact.
    Add {
        #[arg(required = true)]
        selector: Vec<String>,
    },
    /// Remove games from the list: all, N, A-B or a name
    ///
    /// Unquoted words are joined with single spaces; quote a name to keep
    /// its spacing exact.
    Remove {
        #[arg(required = true)]
        selector: Vec<String>,
    },
    /// Empty the list
    Clear,
    /// Print how many games are listed
    Count,
    /// Write the list to a file, one name per line
    Save { path: PathBuf },
}

impl Line {
    /// Parses pre-split words.
    pub fn parse_words<I, S>(words: I) -> Result<ShellCommand, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        Line::try_parse_from(words).map(|line| line.command)
    }
}

/// Rejoins words split by the shell.
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_with_sort_flags() {
        let cmd = Line::parse_words(["filter", "rating>7,", "year>2000", "--sort", "year", "--desc"])
            .unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Filter {
                expr: vec!["rating>7,".into(), "year>2000".into()],
                sort: "year".into(),
                desc: true,
            }
        );
    }

    #[test]
    fn filter_defaults() {
        let cmd = Line::parse_words(["filter"]).unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Filter {
                expr: vec![],
                sort: "name".into(),
                desc: false,
            }
        );
    }

    #[test]
    fn list_subcommands() {
        assert_eq!(
            Line::parse_words(["list"]).unwrap(),
            ShellCommand::List { action: None }
        );
        assert_eq!(
            Line::parse_words(["list", "add", "Go", "Fish"]).unwrap(),
            ShellCommand::List {
                action: Some(ListAction::Add {
                    selector: vec!["Go".into(), "Fish".into()]
                })
            }
        );
        assert_eq!(
            Line::parse_words(["list", "save", "out.txt"]).unwrap(),
            ShellCommand::List {
                action: Some(ListAction::Save {
                    path: PathBuf::from("out.txt")
                })
            }
        );
    }

    #[test]
    fn filter_accepts_negative_literals() {
        let cmd = Line::parse_words(["filter", "rating", ">", "-1", "--desc"]).unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Filter {
                expr: vec!["rating".into(), ">".into(), "-1".into()],
                sort: "name".into(),
                desc: true,
            }
        );
    }

    #[test]
    fn add_requires_selector() {
        assert!(Line::parse_words(["list", "add"]).is_err());
    }

    #[test]
    fn quit_is_exit() {
        assert_eq!(Line::parse_words(["quit"]).unwrap(), ShellCommand::Exit);
    }

    #[test]
    fn unknown_command_is_error() {
        assert!(Line::parse_words(["dance"]).is_err());
    }

    #[test]
    fn joined_words() {
        assert_eq!(joined(&["Go".into(), "Fish".into()]), "Go Fish");
        assert_eq!(joined(&[]), "");
    }
}
