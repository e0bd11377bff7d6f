//! The selection list: a named set of games picked from filter results.
//!
//! Selectors are a small mini-language, checked in this order:
//!
//! | Selector | add | remove |
//! |----------|-----|--------|
//! | `all` | every candidate | clear the list |
//! | `A-B` | candidates `A..=B` (1-based) | listed names `A..=B` |
//! | `N` | candidate `N` | listed name `N` |
//! | anything else | candidate with that name | listed name with that name |
//!
//! Index selectors for `remove` refer to positions in [`GameList::names`].
//! Names match case-insensitively. A failing selector leaves the list
//! untouched.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ShelfError};
use crate::record::BoardGame;
use crate::value::{fold_cmp, fold_eq};

/// Selector that adds every candidate or clears the list.
pub const ALL: &str = "all";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

// ASCII digits only; other scripts' digits are part of a name.
static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("valid regex"));
static INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

fn position(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector<'s> {
    All,
    Range(usize, usize),
    Index(usize),
    Name(&'s str),
}

impl<'s> Selector<'s> {
    fn parse(raw: &'s str, op: &'static str) -> Result<Selector<'s>> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ShelfError::EmptySelector { op });
        }
        if text.eq_ignore_ascii_case(ALL) {
            return Ok(Selector::All);
        }
        // Digits too long for usize saturate and fail in `resolve` against
        // the real source length.
        if let Some(caps) = RANGE.captures(text) {
            return Ok(Selector::Range(position(&caps[1]), position(&caps[2])));
        }
        if INDEX.is_match(text) {
            return Ok(Selector::Index(position(text)));
        }
        Ok(Selector::Name(text))
    }

    /// Resolves the selector against `source`, returning the picked names.
    ///
    /// `All` is handled by the callers since its meaning differs.
    fn resolve<'n>(&self, raw: &str, source: &[&'n str]) -> Result<Vec<&'n str>> {
        let available = source.len();
        match *self {
            Selector::All => Ok(source.to_vec()),
            Selector::Range(start, end) => {
                if start == 0 || end < start || end > available {
                    return Err(ShelfError::InvalidRange {
                        selector: raw.trim().to_string(),
                        available,
                    });
                }
                Ok(source[start - 1..end].to_vec())
            }
            Selector::Index(index) => {
                if index == 0 || index > available {
                    return Err(ShelfError::InvalidIndex {
                        selector: raw.trim().to_string(),
                        available,
                    });
                }
                Ok(vec![source[index - 1]])
            }
            Selector::Name(name) => source
                .iter()
                .find(|candidate| fold_eq(candidate, name))
                .map(|found| vec![*found])
                .ok_or_else(|| ShelfError::NoMatch {
                    name: name.to_string(),
                }),
        }
    }
}

/// A set of unique game names.
///
/// Storage keeps the case a name was added with; duplicates collapse on
/// exact match. Observed order is always case-insensitive ascending.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    names: HashSet<String>,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        GameList::default()
    }

    /// Returns all names sorted case-insensitively.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort_by(|a, b| fold_cmp(a, b).then_with(|| a.cmp(b)));
        names
    }

    /// Returns the number of names in the list.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the list holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` if `name` is in the list, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| fold_eq(n, name))
    }

    /// Removes every name.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Adds names picked from `candidates` by `selector`.
    ///
    /// Index and range selectors are 1-based positions in `candidates` as
    /// given, so callers pass the same ordering they displayed.
    pub fn add(&mut self, selector: &str, candidates: &[&BoardGame]) -> Result<()> {
        let parsed = Selector::parse(selector, "add")?;
        let source: Vec<&str> = candidates.iter().map(|g| g.name.as_str()).collect();
        let picked = parsed.resolve(selector, &source)?;
        let before = self.names.len();
        self.names.extend(picked.into_iter().map(str::to_string));
        tracing::debug!(selector, added = self.names.len() - before, "list add");
        Ok(())
    }

    /// Removes names picked from the current list by `selector`.
    pub fn remove(&mut self, selector: &str) -> Result<()> {
        let parsed = Selector::parse(selector, "remove")?;
        if parsed == Selector::All {
            self.clear();
            tracing::debug!(selector, "list cleared");
            return Ok(());
        }
        let current = self.names();
        let source: Vec<&str> = current.iter().map(String::as_str).collect();
        let picked = parsed.resolve(selector, &source)?;
        for name in &picked {
            self.names.remove(*name);
        }
        tracing::debug!(selector, removed = picked.len(), "list remove");
        Ok(())
    }

    /// Overwrites `path` with [`GameList::names`], one per line.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        let names = self.names();
        for name in &names {
            out.write_all(name.as_bytes())?;
            out.write_all(LINE_ENDING.as_bytes())?;
        }
        out.flush()?;
        tracing::info!(path = %path.display(), count = names.len(), "saved game list");
        Ok(())
    }
}
