//! Rendering of results and lists.

use meeple_seeker::BoardGame;
use serde::Serialize;

/// A result row as printed in JSON mode.
#[derive(Debug, Serialize)]
pub struct Row<'a> {
    /// 1-based position, the number `list add` accepts.
    pub index: usize,
    #[serde(flatten)]
    pub game: &'a BoardGame,
}

/// Numbered, one game per line.
pub fn table(games: &[&BoardGame]) -> String {
    if games.is_empty() {
        return "no games match".to_string();
    }
    let width = games.len().to_string().len();
    games
        .iter()
        .enumerate()
        .map(|(i, g)| {
            format!(
                "{:>width$}. {}  [rating {:.2}, difficulty {:.2}, {}-{} players, {}-{} min, {}, rank {}]",
                i + 1,
                g.name,
                g.rating,
                g.difficulty,
                g.min_players,
                g.max_players,
                g.min_play_time,
                g.max_play_time,
                g.year_published,
                g.rank,
                width = width,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON array of [`Row`]s.
pub fn json(games: &[&BoardGame]) -> serde_json::Result<String> {
    let rows: Vec<Row<'_>> = games
        .iter()
        .enumerate()
        .map(|(i, game)| Row {
            index: i + 1,
            game,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

/// Numbered list names, or a note when the list is empty.
pub fn names(names: &[String]) -> String {
    if names.is_empty() {
        return "game list is empty".to_string();
    }
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}
