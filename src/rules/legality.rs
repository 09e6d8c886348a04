//! Legal-move generation.
//!
//! `legal_moves` produces the candidate moves for a state, given the moves
//! already chosen along the current search path. The path matters only for
//! the pruning policy: exploration ends one move after a Brew, after the
//! path grows past [`MAX_PATH_LEN`], once the potion target is met, or
//! once the game is past its last turn. These cuts are deliberate policy,
//! not incidental behavior.

use crate::core::{Action, ActionKind, GameState, Move, Player, MAX_INVENTORY, TIER_COUNT};

/// Potions per game; brewing this many ends the player's game.
pub const POTION_TARGET: u32 = 6;

/// Longest path the search will extend.
pub const MAX_PATH_LEN: usize = 7;

/// Last turn of the game.
pub const MAX_TURNS: u32 = 100;

/// Most applications of a repeatable Cast in one move.
pub const MAX_REPEAT: u32 = 10;

/// True if applying `action`'s deltas `times` times keeps the player's
/// inventory legal: every tier with a negative delta stays >= 0 (tiers
/// with a non-negative delta are always safe) and the total stays at most
/// [`MAX_INVENTORY`].
fn fits(action: &Action, player: &Player, times: u32) -> bool {
    let scaled = action.deltas.scaled(times as i32);

    for tier in 0..TIER_COUNT {
        if action.deltas.tier(tier) < 0 && player.inventory.tier(tier) + scaled.tier(tier) < 0 {
            return false;
        }
    }
    player.total_inventory() + scaled.total() <= MAX_INVENTORY
}

/// True when the last path move was a Brew; exploration stops there.
fn ends_with_brew(path: &[Move]) -> bool {
    matches!(
        path.last(),
        Some(Move::Play { action, .. }) if action.kind == ActionKind::Brew
    )
}

/// Enumerate the legal moves for `state` given the search path so far.
///
/// Returns an empty set once the pruning policy says this path is done.
/// Ordering is not semantically significant; ties downstream are broken
/// by discovery order.
#[must_use]
pub fn legal_moves(state: &GameState, path: &[Move]) -> Vec<Move> {
    if path.len() > MAX_PATH_LEN
        || state.me.potions_brewed >= POTION_TARGET
        || state.turn > MAX_TURNS
        || ends_with_brew(path)
    {
        return Vec::new();
    }

    let mut moves = Vec::new();

    for action in &state.actions {
        match action.kind {
            ActionKind::OpponentCast => {}
            ActionKind::Cast => {
                if !action.castable {
                    continue;
                }
                let max_times = if action.repeatable { MAX_REPEAT } else { 1 };
                for times in 1..=max_times {
                    if fits(action, &state.me, times) {
                        moves.push(Move::play_times(*action, times));
                    }
                }
            }
            ActionKind::Brew => {
                if fits(action, &state.me, 1) {
                    moves.push(Move::play(*action));
                }
            }
            ActionKind::Learn => {
                if state.me.inventory.tier(0) >= action.tome_index {
                    moves.push(Move::Learn(*action));
                }
            }
        }
    }

    // Back-to-back rests are redundant.
    if !matches!(path.last(), Some(Move::Rest)) {
        moves.push(Move::Rest);
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ingredients, Player};

    fn state_with(actions: Vec<Action>, inventory: Ingredients) -> GameState {
        GameState::new(
            1,
            Player::new(inventory, 0),
            Player::new(Ingredients::new(3, 0, 0, 0), 0),
            actions,
        )
    }

    #[test]
    fn test_opponent_casts_never_legal() {
        let state = state_with(
            vec![Action::opponent_cast(82, Ingredients::new(2, 0, 0, 0))],
            Ingredients::new(3, 0, 0, 0),
        );

        let moves = legal_moves(&state, &[]);
        assert_eq!(moves, vec![Move::Rest]);
    }

    #[test]
    fn test_exhausted_cast_not_offered() {
        let mut exhausted = Action::cast(78, Ingredients::new(2, 0, 0, 0));
        exhausted.castable = false;

        let state = state_with(vec![exhausted], Ingredients::new(3, 0, 0, 0));
        assert_eq!(legal_moves(&state, &[]), vec![Move::Rest]);
    }

    #[test]
    fn test_repeatable_cast_enumerates_every_count() {
        // +1 tier-1 per application, inventory 3/10 used: up to 7 fit.
        let cast = Action::cast(79, Ingredients::new(0, 1, 0, 0)).with_repeatable();
        let state = state_with(vec![cast], Ingredients::new(3, 0, 0, 0));

        let times: Vec<u32> = legal_moves(&state, &[])
            .into_iter()
            .filter_map(|mv| match mv {
                Move::Play { times, .. } => Some(times),
                Move::Wait | Move::Rest | Move::Learn(_) => None,
            })
            .collect();

        assert_eq!(times, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_cast_blocked_by_negative_tier() {
        let cast = Action::cast(80, Ingredients::new(0, -1, 1, 0));
        let state = state_with(vec![cast], Ingredients::new(3, 0, 0, 0));

        // No tier-1 ingredients to consume.
        assert_eq!(legal_moves(&state, &[]), vec![Move::Rest]);
    }

    #[test]
    fn test_brew_requires_ingredients() {
        let brew = Action::brew(70, Ingredients::new(-2, -2, 0, -2), 15);

        let poor = state_with(vec![brew], Ingredients::new(3, 0, 0, 0));
        assert_eq!(legal_moves(&poor, &[]), vec![Move::Rest]);

        let rich = state_with(vec![brew], Ingredients::new(3, 3, 0, 3));
        assert_eq!(legal_moves(&rich, &[]), vec![Move::play(brew), Move::Rest]);
    }

    #[test]
    fn test_learn_costs_tier0() {
        let deep = Action::learn(20, Ingredients::new(1, 1, 0, 0), 4, 0);
        let state = state_with(vec![deep], Ingredients::new(3, 0, 0, 0));
        assert_eq!(legal_moves(&state, &[]), vec![Move::Rest]);

        let shallow = Action::learn(21, Ingredients::new(1, 1, 0, 0), 2, 0);
        let state = state_with(vec![shallow], Ingredients::new(3, 0, 0, 0));
        assert_eq!(
            legal_moves(&state, &[]),
            vec![Move::Learn(shallow), Move::Rest]
        );
    }

    #[test]
    fn test_no_consecutive_rests() {
        let state = state_with(vec![], Ingredients::new(3, 0, 0, 0));

        assert_eq!(legal_moves(&state, &[]), vec![Move::Rest]);
        assert!(legal_moves(&state, &[Move::Rest]).is_empty());
    }

    #[test]
    fn test_path_ends_after_brew() {
        let brew = Action::brew(70, Ingredients::new(-2, 0, 0, 0), 10);
        let state = state_with(
            vec![Action::cast(78, Ingredients::new(2, 0, 0, 0))],
            Ingredients::new(3, 0, 0, 0),
        );

        assert!(legal_moves(&state, &[Move::play(brew)]).is_empty());
    }

    #[test]
    fn test_path_length_cut() {
        let state = state_with(
            vec![Action::cast(78, Ingredients::new(2, 0, 0, 0))],
            Ingredients::new(3, 0, 0, 0),
        );
        let long_path = vec![Move::Wait; MAX_PATH_LEN + 1];

        assert!(!legal_moves(&state, &long_path[..MAX_PATH_LEN]).is_empty());
        assert!(legal_moves(&state, &long_path).is_empty());
    }

    #[test]
    fn test_potion_target_cut() {
        let mut state = state_with(
            vec![Action::cast(78, Ingredients::new(2, 0, 0, 0))],
            Ingredients::new(3, 0, 0, 0),
        );
        state.me.potions_brewed = POTION_TARGET;

        assert!(legal_moves(&state, &[]).is_empty());
    }

    #[test]
    fn test_turn_limit_cut() {
        let mut state = state_with(
            vec![Action::cast(78, Ingredients::new(2, 0, 0, 0))],
            Ingredients::new(3, 0, 0, 0),
        );
        state.turn = MAX_TURNS + 1;

        assert!(legal_moves(&state, &[]).is_empty());
    }
}
