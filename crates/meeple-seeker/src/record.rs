//! The board game record.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Records are created once when the catalog is loaded and are never
/// mutated by the planner or the selection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardGame {
    #[serde(rename = "objectname", alias = "name")]
    pub name: String,
    pub id: i64,
    pub rank: i64,
    #[serde(rename = "minplayers")]
    pub min_players: i64,
    #[serde(rename = "maxplayers")]
    pub max_players: i64,
    #[serde(rename = "minplaytime", alias = "mintime")]
    pub min_play_time: i64,
    #[serde(rename = "maxplaytime", alias = "maxtime")]
    pub max_play_time: i64,
    #[serde(rename = "yearpublished", alias = "year")]
    pub year_published: i64,
    pub rating: f64,
    pub difficulty: f64,
}

impl BoardGame {
    /// Starts a record with the given name and id; every other column is zero.
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        BoardGame {
            name: name.into(),
            id,
            rank: 0,
            min_players: 0,
            max_players: 0,
            min_play_time: 0,
            max_play_time: 0,
            year_published: 0,
            rating: 0.0,
            difficulty: 0.0,
        }
    }

    /// Sets the overall rank.
    pub fn rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }

    /// Sets the player-count bounds.
    pub fn players(mut self, min: i64, max: i64) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Sets the play-time bounds in minutes.
    pub fn play_time(mut self, min: i64, max: i64) -> Self {
        self.min_play_time = min;
        self.max_play_time = max;
        self
    }

    /// Sets the publication year.
    pub fn year(mut self, year: i64) -> Self {
        self.year_published = year;
        self
    }

    /// Sets the average rating.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the difficulty weight.
    pub fn difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_column() {
        let game = BoardGame::new("Go", 1)
            .rank(100)
            .players(2, 5)
            .play_time(30, 30)
            .year(2000)
            .rating(7.5)
            .difficulty(8.0);

        assert_eq!(game.name, "Go");
        assert_eq!(game.id, 1);
        assert_eq!(game.rank, 100);
        assert_eq!((game.min_players, game.max_players), (2, 5));
        assert_eq!((game.min_play_time, game.max_play_time), (30, 30));
        assert_eq!(game.year_published, 2000);
        assert_eq!(game.rating, 7.5);
        assert_eq!(game.difficulty, 8.0);
    }
}
