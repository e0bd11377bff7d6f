use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use meeple::logging;
use meeple::session::{Outcome, Session};
use meeple_seeker::catalog;

/// Filter a board game catalog and keep a list of picks.
///
/// Reads one command per line from stdin; type `help` for the commands.
#[derive(Debug, Parser)]
#[command(name = "meeple", version)]
struct Args {
    /// CSV catalog to load
    #[arg(long, env = "MEEPLE_CATALOG")]
    catalog: PathBuf,

    /// Log filter directive (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log_level: Option<String>,

    /// Print filter results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level.as_deref())?;

    let games = catalog::load(&args.catalog)
        .with_context(|| format!("failed to load catalog {}", args.catalog.display()))?;
    let mut session = Session::new(&games, args.json);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            write!(stdout, "meeple> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else { break };
        match session.execute(&line.context("failed to read stdin")?) {
            Outcome::Continue(text) if text.is_empty() => {}
            Outcome::Continue(text) => writeln!(stdout, "{}", text)?,
            Outcome::Exit => break,
        }
    }
    Ok(())
}
