//! Property-based tests for seeker using proptest.

use meeple_seeker::{BoardGame, Column, OrderBy, Planner, Query};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

// Strategy to generate a catalog entry
fn game_strategy() -> impl Strategy<Value = BoardGame> {
    (
        "[A-Za-z]{1,8}",
        0i64..1000,
        1i64..8,
        0i64..8,
        1900i64..2030,
        0u8..=20,
    )
        .prop_map(|(name, id, min, spread, year, half_points)| {
            BoardGame::new(name, id)
                .rank(id)
                .players(min, min + spread)
                .year(year)
                .rating(half_points as f64 / 2.0)
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<BoardGame>> {
    prop::collection::vec(game_strategy(), 0..40)
}

fn column_strategy() -> impl Strategy<Value = Column> {
    prop::sample::select(vec![
        Column::Name,
        Column::Rank,
        Column::MinPlayers,
        Column::MaxPlayers,
        Column::Year,
        Column::Rating,
    ])
}

fn ids(games: &[&BoardGame]) -> Vec<(String, i64)> {
    games.iter().map(|g| (g.name.clone(), g.id)).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filter should never return more records than the input.
    #[test]
    fn filter_never_grows_collection(
        games in catalog_strategy(),
        threshold in 0i64..10,
    ) {
        let results = Query::parse(&format!("minPlayers>{}", threshold)).filter(&games);
        prop_assert!(results.len() <= games.len());
    }

    /// Count should equal the length of filtered results.
    #[test]
    fn count_equals_filter_len(
        games in catalog_strategy(),
        year in 1900i64..2030,
    ) {
        let query = Query::parse(&format!("year>={}", year));
        prop_assert_eq!(query.filter(&games).len(), query.count(&games));
    }

    /// Expressions made only of malformed clauses leave the set unfiltered.
    #[test]
    fn malformed_only_is_a_noop(
        games in catalog_strategy(),
        junk in prop::sample::select(vec![
            "bogus", "id==1", "year>soon", "name>abc", "rating", "==3", "year~=19",
        ]),
    ) {
        let mut planner = Planner::new(&games);
        let results = planner.filter(&format!("{}, {}", junk, junk));
        prop_assert_eq!(results.len(), games.len());
    }

    /// Two cumulative queries equal one conjunctive query on the catalog.
    #[test]
    fn cumulative_equals_conjunction(
        games in catalog_strategy(),
        low in 0i64..8,
        high in 0i64..10,
    ) {
        let mut planner = Planner::new(&games);
        planner.filter(&format!("minPlayers>{}", low));
        let chained = planner.filter(&format!("minPlayers<{}", high));

        let single = Query::parse(&format!("minPlayers>{}, minPlayers<{}", low, high))
            .filter(&games);

        prop_assert_eq!(ids(&chained), ids(&single));
    }

    /// Reset followed by an empty query reproduces the catalog sorted by name.
    #[test]
    fn reset_then_empty_query_is_full_catalog(
        games in catalog_strategy(),
        year in 1900i64..2030,
    ) {
        let mut planner = Planner::new(&games);
        planner.filter(&format!("year<{}", year));
        planner.reset();
        let results = planner.query("", Column::Name, true);

        let mut expected: Vec<&BoardGame> = games.iter().collect();
        OrderBy::asc(Column::Name).sort(&mut expected);
        prop_assert_eq!(ids(&results), ids(&expected));
    }

    /// Flipping direction reverses the primary key but not the tie-break.
    #[test]
    fn descending_reverses_primary_only(
        games in catalog_strategy(),
        column in column_strategy(),
    ) {
        let mut planner = Planner::new(&games);
        let asc = planner.query("", column, true);
        let desc = planner.query("", column, false);
        prop_assert_eq!(asc.len(), desc.len());

        // Names compare case-insensitively, so fold them for the key.
        let primary = |g: &&BoardGame| format!("{:?}", column.value(g)).to_lowercase();
        let asc_keys: Vec<String> = asc.iter().map(primary).collect();
        let mut desc_keys: Vec<String> = desc.iter().map(primary).collect();
        desc_keys.reverse();
        prop_assert_eq!(asc_keys, desc_keys);

        // Within each equal-key group, both directions list names ascending.
        for results in [&asc, &desc] {
            for pair in results.windows(2) {
                if primary(&pair[0]) == primary(&pair[1]) {
                    prop_assert!(
                        pair[0].name.to_lowercase() <= pair[1].name.to_lowercase(),
                        "tie-break must stay ascending"
                    );
                }
            }
        }
    }

    /// Repeating a query on the same session is stable.
    #[test]
    fn repeated_query_is_idempotent(
        games in catalog_strategy(),
        rating in 0u8..=20,
    ) {
        let expr = format!("rating>={}", rating as f64 / 2.0);
        let mut planner = Planner::new(&games);
        let first = planner.filter(&expr);
        let second = planner.filter(&expr);
        prop_assert_eq!(ids(&first), ids(&second));
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_catalog_returns_empty() {
    let games: Vec<BoardGame> = vec![];
    let mut planner = Planner::new(&games);
    assert!(planner.filter("rating>1").is_empty());
    assert!(planner.filter("").is_empty());
}
