//! Catalog ingestion from CSV.
//!
//! The header row names the columns; order does not matter. Accepted
//! headers are `objectname`, `id`, `rank`, `minplayers`, `maxplayers`,
//! `minplaytime`, `maxplaytime`, `yearpublished`, `rating` and
//! `difficulty`, with `name`, `mintime`, `maxtime` and `year` as aliases.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::record::BoardGame;

/// Reads a catalog from any CSV source.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BoardGame>> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let games = csv
        .deserialize::<BoardGame>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(games)
}

/// Reads a catalog from a CSV file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<BoardGame>> {
    let path = path.as_ref();
    let games = from_reader(std::fs::File::open(path)?)?;
    tracing::info!(path = %path.display(), count = games.len(), "loaded catalog");
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    const SAMPLE: &str = "\
objectname,id,rank,minplayers,maxplayers,minplaytime,maxplaytime,yearpublished,rating,difficulty
Go,1,100,2,5,30,30,2000,7.5,8.0
Go Fish,2,200,2,10,20,120,2001,6.5,3.0
";

    #[test]
    fn reads_all_rows() {
        let games = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(
            games[1],
            BoardGame::new("Go Fish", 2)
                .rank(200)
                .players(2, 10)
                .play_time(20, 120)
                .year(2001)
                .rating(6.5)
                .difficulty(3.0)
        );
    }

    #[test]
    fn accepts_aliases_in_any_order() {
        let data = "year,name,id,rank,minplayers,maxplayers,mintime,maxtime,rating,difficulty\n\
                    2006, Chess ,7,700,2,2,10,20,10.0,10.0\n";
        let games = from_reader(data.as_bytes()).unwrap();
        assert_eq!(games[0].name, "Chess");
        assert_eq!(games[0].year_published, 2006);
        assert_eq!(games[0].max_play_time, 20);
    }

    #[test]
    fn bad_rows_are_errors() {
        let data = "objectname,id,rank,minplayers,maxplayers,minplaytime,maxplaytime,yearpublished,rating,difficulty\n\
                    Go,one,100,2,5,30,30,2000,7.5,8.0\n";
        assert!(matches!(from_reader(data.as_bytes()), Err(ShelfError::Csv(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(ShelfError::Io(_))));
    }
}
