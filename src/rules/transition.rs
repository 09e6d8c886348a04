//! The pure state-transition function.
//!
//! `apply(state, move)` returns a new snapshot; the input state is never
//! touched. Callers must only apply moves produced by `legal_moves` for
//! that exact state; the `debug_assert!`s here are a testing aid, not a
//! recovery path.

use im::Vector;

use crate::core::{Action, ActionKind, GameState, Move, MAX_INVENTORY};

/// Remove the catalog entry with `id`, returning the shrunk catalog.
fn without(actions: &Vector<Action>, id: i32) -> Vector<Action> {
    let mut next = actions.clone();
    if let Some(pos) = next.iter().position(|a| a.id == id) {
        next.remove(pos);
    }
    next
}

/// Apply a move to a state, deriving the successor snapshot.
#[must_use]
pub fn apply(state: &GameState, mv: &Move) -> GameState {
    match mv {
        Move::Wait => state.clone(),

        Move::Rest => {
            let mut next = state.clone();
            next.actions = state
                .actions
                .iter()
                .map(|a| match a.kind {
                    ActionKind::Cast => Action {
                        castable: true,
                        ..*a
                    },
                    ActionKind::OpponentCast | ActionKind::Brew | ActionKind::Learn => *a,
                })
                .collect();
            next.turn += 1;
            next
        }

        Move::Learn(action) => {
            debug_assert!(state.me.inventory.tier(0) >= action.tome_index);

            let mut next = state.clone();
            // The tome entry becomes one of our spells, ready to cast.
            let mut learned = *action;
            learned.kind = ActionKind::Cast;
            learned.castable = true;

            next.actions = without(&state.actions, action.id);
            next.actions.push_back(learned);
            next.me.inventory.0[0] += action.tax_count - action.tome_index;

            // Taxed tier-0 ingredients past inventory capacity are lost.
            let overflow = next.me.total_inventory() - MAX_INVENTORY;
            if overflow > 0 {
                next.me.inventory.0[0] -= overflow;
            }

            debug_assert!(next.me.inventory.is_valid_inventory());
            next.turn += 1;
            next
        }

        Move::Play { action, times } => {
            let mut next = state.clone();
            next.me.inventory = state.me.inventory + action.deltas.scaled(*times as i32);
            next.me.score += action.price * *times as i32;
            next.actions = without(&state.actions, action.id);

            match action.kind {
                ActionKind::Cast => {
                    let mut spent = *action;
                    spent.castable = false;
                    next.actions.push_back(spent);
                }
                ActionKind::Brew => {
                    next.me.potions_brewed += 1;
                }
                // Neither is playable; if one slips through it is simply
                // consumed.
                ActionKind::OpponentCast | ActionKind::Learn => {}
            }

            debug_assert!(next.me.inventory.is_valid_inventory());
            next.turn += 1;
            next
        }
    }
}
