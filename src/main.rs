//! Referee adapter: the per-turn stdin/stdout game loop.
//!
//! Stdout carries exactly one protocol line per turn; all diagnostics go
//! to stderr so the referee never sees them.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cauldron::bot::{budget_for_turn, choose_move};
use cauldron::protocol::{format_move, read_state};
use cauldron::search::{Clock, FrontierSearch, SearchConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut search = FrontierSearch::new(SearchConfig::default());
    let mut turn = 0u32;

    loop {
        turn += 1;
        let Some(state) = read_state(&mut input, turn)
            .with_context(|| format!("reading turn {turn}"))?
        else {
            break;
        };

        let turn_start = search.clock().now();
        let mv = choose_move(&mut search, &state, turn_start, budget_for_turn(turn));

        writeln!(output, "{}", format_move(&mv)).context("writing move")?;
        output.flush().context("flushing move")?;
    }

    Ok(())
}
