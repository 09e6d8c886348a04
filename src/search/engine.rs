//! Time-boxed frontier exploration.
//!
//! The engine drives the legality engine and transition function over a
//! capped FIFO frontier seeded with the turn-start state, ranking every
//! popped entry and keeping the best path found. Work happens in bounded
//! batches; after each batch the engine projects the next batch's duration
//! from the one just measured and stops before the projection would overrun
//! the turn deadline. The seed entry is ranked before the first deadline
//! check, so a best path always exists: even when the deadline is already
//! in the past, the caller gets a valid outcome (empty path, Rest fallback).
//!
//! One `FrontierSearch` is reusable across turns: every `run` resets the
//! per-invocation accumulator (frontier, best path, stats), so no state
//! leaks between turns.

use std::time::Duration;

use tracing::debug;

use crate::core::{GameState, Move};
use crate::rules::{apply, legal_moves};

use super::clock::{Clock, MonotonicClock};
use super::config::SearchConfig;
use super::frontier::{Frontier, Path};
use super::score::rank;
use super::stats::SearchStats;

/// The best path a search found and the state it reaches.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best-ranked move sequence; may be empty when nothing beat the seed.
    pub path: Path,

    /// The state at the end of `path`.
    pub state: GameState,

    /// The rank that won.
    pub rank: i64,
}

impl SearchOutcome {
    /// The move to emit this turn: the first move of the best path, or
    /// Rest when the path is empty. A turn must always emit a move.
    #[must_use]
    pub fn first_move(&self) -> Move {
        self.path.first().copied().unwrap_or(Move::Rest)
    }
}

/// Frontier-exploration search context.
///
/// Owns the per-invocation accumulator. Create once, call
/// [`run`](Self::run) once per turn.
pub struct FrontierSearch<C: Clock = MonotonicClock> {
    config: SearchConfig,
    clock: C,
    frontier: Frontier,
    stats: SearchStats,
}

impl FrontierSearch<MonotonicClock> {
    /// A search reading the wall clock.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> FrontierSearch<C> {
    /// A search reading time through `clock`.
    #[must_use]
    pub fn with_clock(config: SearchConfig, clock: C) -> Self {
        let frontier = Frontier::new(config.frontier_cap);
        Self {
            config,
            clock,
            frontier,
            stats: SearchStats::new(),
        }
    }

    /// The clock this search reads. The adapter uses it to timestamp the
    /// start of a turn in the same timeline the deadline check uses.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Statistics from the most recent `run`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Explore from `state` until the frontier is exhausted or the next
    /// batch would overrun `turn_start + budget`.
    pub fn run(&mut self, state: &GameState, turn_start: Duration, budget: Duration) -> SearchOutcome {
        self.frontier.reset();
        self.stats.reset();

        let deadline = turn_start.saturating_add(budget);
        let run_start = self.clock.now();

        self.frontier.push(Path::new(), state.clone());

        let mut best_rank = i64::MIN;
        let mut best: Option<(Path, GameState)> = None;

        while !self.frontier.is_empty() {
            let batch_start = self.clock.now();

            for _ in 0..self.config.batch_size {
                let Some((path, current)) = self.frontier.pop() else {
                    break;
                };

                if !self.frontier.cap_reached() {
                    for mv in legal_moves(&current, &path) {
                        let next = apply(&current, &mv);
                        let mut next_path = path.clone();
                        next_path.push(mv);

                        if self.frontier.push(next_path, next) {
                            self.stats.expanded += 1;
                        } else {
                            self.stats.dropped += 1;
                        }
                    }
                }

                let entry_rank = rank(state, &path, &current);
                self.stats.scored += 1;

                // Strictly greater only: ties keep the earliest find,
                // which under FIFO order is the shorter path.
                if entry_rank > best_rank {
                    best_rank = entry_rank;
                    best = Some((path, current));
                }
            }

            self.stats.batches += 1;

            let now = self.clock.now();
            let batch_elapsed = now.saturating_sub(batch_start);
            if now + batch_elapsed > deadline {
                break;
            }
        }

        self.stats.time_us = self
            .clock
            .now()
            .saturating_sub(run_start)
            .as_micros() as u64;

        // The seed is always ranked before the first deadline check; an
        // empty best here is an implementation invariant violation.
        let (path, terminal) = best.expect("frontier search ranked no entries");

        debug!(
            rank = best_rank,
            path_len = path.len(),
            scored = self.stats.scored,
            expanded = self.stats.expanded,
            dropped = self.stats.dropped,
            batches = self.stats.batches,
            time_us = self.stats.time_us,
            "search finished"
        );

        SearchOutcome {
            path,
            state: terminal,
            rank: best_rank,
        }
    }
}
