//! Ranking of explored (path, state) pairs.
//!
//! The rank rewards liquid score gained over the turn-start state (score
//! plus banked inventory value, so building up valuable ingredients counts
//! before a brew lands), scaled so any gain beats any path-length penalty;
//! among equal gains shorter paths win. A path that finishes the game with
//! a winning brew outranks everything, shortest such path first.

use crate::core::{ActionKind, GameState, Move};
use crate::rules::POTION_TARGET;

/// Rank assigned to a game-winning brew, before the path-length penalty.
pub const WIN_BONUS: i64 = 1_000_000_000;

/// Weight of one point of liquid-score gain relative to one path step.
pub const SCORE_WEIGHT: i64 = 10_000;

/// Rank a path and the state it reaches, relative to the turn-start state.
///
/// Higher is better. Comparable only across one search invocation, since
/// the gain is measured against `initial`.
#[must_use]
pub fn rank(initial: &GameState, path: &[Move], state: &GameState) -> i64 {
    let finished_with_brew = matches!(
        path.last(),
        Some(Move::Play { action, .. }) if action.kind == ActionKind::Brew
    );

    if state.me.potions_brewed >= POTION_TARGET
        && finished_with_brew
        && state.me.total_score() > state.opponent.total_score()
    {
        return WIN_BONUS - path.len() as i64;
    }

    let gain = i64::from(state.me.liquid_score() - initial.me.liquid_score());
    gain * SCORE_WEIGHT - path.len().max(1) as i64
}
