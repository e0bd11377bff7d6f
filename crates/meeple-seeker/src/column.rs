//! Column registry.
//!
//! Every filterable or sortable column is described once in a capability
//! table: its kind, the tokens it can be written as, and the accessor that
//! reads it from a [`BoardGame`]. Parsing, filtering and sorting all go
//! through this table rather than matching on columns themselves.

use crate::record::BoardGame;
use crate::value::{Kind, Value};

/// A named, typed column of a [`BoardGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Game title (`name`, `objectname`).
    Name,
    /// Catalog identifier; never filtered or sorted on.
    Id,
    /// Overall rank (`rank`).
    Rank,
    /// Fewest players (`minplayers`).
    MinPlayers,
    /// Most players (`maxplayers`).
    MaxPlayers,
    /// Shortest play time in minutes (`mintime`, `minplaytime`).
    MinTime,
    /// Longest play time in minutes (`maxtime`, `maxplaytime`).
    MaxTime,
    /// Publication year (`year`, `yearpublished`).
    Year,
    /// Average rating (`rating`, `avgrating`).
    Rating,
    /// Difficulty weight (`difficulty`, `weight`).
    Difficulty,
}

/// Capability entry for one column.
#[derive(Clone, Copy)]
pub struct ColumnSpec {
    /// The column this entry describes.
    pub column: Column,
    /// The kind of value the accessor returns.
    pub kind: Kind,
    /// Lowercase tokens accepted for this column. The first is canonical.
    pub tokens: &'static [&'static str],
    /// Reads the column from a record.
    pub accessor: for<'a> fn(&'a BoardGame) -> Value<'a>,
}

impl std::fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("column", &self.column)
            .field("kind", &self.kind)
            .field("tokens", &self.tokens)
            .finish()
    }
}

mod access {
    use super::{BoardGame, Value};

    pub fn name(g: &BoardGame) -> Value<'_> {
        Value::String(&g.name)
    }
    pub fn id(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.id)
    }
    pub fn rank(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.rank)
    }
    pub fn min_players(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.min_players)
    }
    pub fn max_players(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.max_players)
    }
    pub fn min_time(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.min_play_time)
    }
    pub fn max_time(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.max_play_time)
    }
    pub fn year(g: &BoardGame) -> Value<'_> {
        Value::Integer(g.year_published)
    }
    pub fn rating(g: &BoardGame) -> Value<'_> {
        Value::Real(g.rating)
    }
    pub fn difficulty(g: &BoardGame) -> Value<'_> {
        Value::Real(g.difficulty)
    }
}

static COLUMNS: [ColumnSpec; 10] = [
    ColumnSpec {
        column: Column::Name,
        kind: Kind::String,
        tokens: &["name", "objectname"],
        accessor: access::name,
    },
    ColumnSpec {
        column: Column::Id,
        kind: Kind::Excluded,
        tokens: &["id"],
        accessor: access::id,
    },
    ColumnSpec {
        column: Column::Rank,
        kind: Kind::Integer,
        tokens: &["rank"],
        accessor: access::rank,
    },
    ColumnSpec {
        column: Column::MinPlayers,
        kind: Kind::Integer,
        tokens: &["minplayers"],
        accessor: access::min_players,
    },
    ColumnSpec {
        column: Column::MaxPlayers,
        kind: Kind::Integer,
        tokens: &["maxplayers"],
        accessor: access::max_players,
    },
    ColumnSpec {
        column: Column::MinTime,
        kind: Kind::Integer,
        tokens: &["mintime", "minplaytime"],
        accessor: access::min_time,
    },
    ColumnSpec {
        column: Column::MaxTime,
        kind: Kind::Integer,
        tokens: &["maxtime", "maxplaytime"],
        accessor: access::max_time,
    },
    ColumnSpec {
        column: Column::Year,
        kind: Kind::Integer,
        tokens: &["year", "yearpublished"],
        accessor: access::year,
    },
    ColumnSpec {
        column: Column::Rating,
        kind: Kind::Real,
        tokens: &["rating", "avgrating"],
        accessor: access::rating,
    },
    ColumnSpec {
        column: Column::Difficulty,
        kind: Kind::Real,
        tokens: &["difficulty", "weight"],
        accessor: access::difficulty,
    },
];

impl Column {
    /// Every column, in table order.
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::Id,
        Column::Rank,
        Column::MinPlayers,
        Column::MaxPlayers,
        Column::MinTime,
        Column::MaxTime,
        Column::Year,
        Column::Rating,
        Column::Difficulty,
    ];

    /// Resolves a column token, ignoring case and surrounding whitespace.
    pub fn from_name(text: &str) -> Option<Column> {
        let text = text.trim();
        COLUMNS
            .iter()
            .find(|spec| spec.tokens.iter().any(|t| t.eq_ignore_ascii_case(text)))
            .map(|spec| spec.column)
    }

    /// Returns the capability entry for this column.
    pub fn spec(self) -> &'static ColumnSpec {
        // Table order matches declaration order.
        &COLUMNS[self as usize]
    }

    pub fn kind(self) -> Kind {
        self.spec().kind
    }

    /// Reads this column from a record.
    pub fn value(self, game: &BoardGame) -> Value<'_> {
        (self.spec().accessor)(game)
    }

    /// Returns the canonical token for this column.
    pub fn as_str(self) -> &'static str {
        self.spec().tokens[0]
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_declaration() {
        for column in Column::ALL {
            assert_eq!(column.spec().column, column);
        }
    }

    #[test]
    fn resolves_case_insensitively() {
        assert_eq!(Column::from_name("minPlayers"), Some(Column::MinPlayers));
        assert_eq!(Column::from_name("MAXPLAYERS"), Some(Column::MaxPlayers));
        assert_eq!(Column::from_name("Name"), Some(Column::Name));
        assert_eq!(Column::from_name(" rating "), Some(Column::Rating));
    }

    #[test]
    fn resolves_aliases() {
        assert_eq!(Column::from_name("objectname"), Some(Column::Name));
        assert_eq!(Column::from_name("minPlayTime"), Some(Column::MinTime));
        assert_eq!(Column::from_name("yearPublished"), Some(Column::Year));
        assert_eq!(Column::from_name("weight"), Some(Column::Difficulty));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(Column::from_name("players"), None);
        assert_eq!(Column::from_name(""), None);
        assert_eq!(Column::from_name("min players"), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(Column::Name.kind(), Kind::String);
        assert_eq!(Column::Id.kind(), Kind::Excluded);
        assert_eq!(Column::Year.kind(), Kind::Integer);
        assert_eq!(Column::Rating.kind(), Kind::Real);
    }

    #[test]
    fn accessors_read_the_right_field() {
        let game = BoardGame::new("Go", 1)
            .rank(100)
            .players(2, 5)
            .play_time(30, 45)
            .year(2000)
            .rating(7.5)
            .difficulty(8.0);

        assert_eq!(Column::Name.value(&game), Value::String("Go"));
        assert_eq!(Column::Id.value(&game), Value::Integer(1));
        assert_eq!(Column::Rank.value(&game), Value::Integer(100));
        assert_eq!(Column::MinPlayers.value(&game), Value::Integer(2));
        assert_eq!(Column::MaxPlayers.value(&game), Value::Integer(5));
        assert_eq!(Column::MinTime.value(&game), Value::Integer(30));
        assert_eq!(Column::MaxTime.value(&game), Value::Integer(45));
        assert_eq!(Column::Year.value(&game), Value::Integer(2000));
        assert_eq!(Column::Rating.value(&game), Value::Real(7.5));
        assert_eq!(Column::Difficulty.value(&game), Value::Real(8.0));
    }

    #[test]
    fn display_uses_canonical_token() {
        assert_eq!(Column::MinTime.to_string(), "mintime");
        assert_eq!(Column::Name.as_str(), "name");
    }
}
