//! Spell-learning heuristic.
//!
//! Consulted once per turn before the search: a good tome entry early in
//! the game is worth more than one searched move. Free generators (all
//! deltas non-negative) are taken greedily by yield; otherwise a spell is
//! worth learning only if its yield beats its tome cost.

use crate::core::{ActionKind, GameState, Move};

/// Pick a tome entry worth spending this turn on, if any.
///
/// Preference order:
/// 1. among affordable entries with all non-negative deltas, the one with
///    the highest total yield;
/// 2. otherwise the affordable entry maximizing yield minus tome cost,
///    when that margin is positive;
/// 3. otherwise decline.
#[must_use]
pub fn choose_learn(state: &GameState) -> Option<Move> {
    let affordable: Vec<_> = state
        .actions
        .iter()
        .filter(|a| a.kind == ActionKind::Learn && state.me.inventory.tier(0) >= a.tome_index)
        .collect();

    if let Some(generator) = affordable
        .iter()
        .filter(|a| a.deltas.all_non_negative())
        .max_by_key(|a| a.total_delta())
    {
        return Some(Move::Learn(**generator));
    }

    affordable
        .iter()
        .max_by_key(|a| a.total_delta() - a.tome_index)
        .filter(|a| a.total_delta() - a.tome_index > 0)
        .map(|a| Move::Learn(**a))
}
