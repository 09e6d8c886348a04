//! Immutable game snapshots.
//!
//! A [`GameState`] is produced once per real turn from protocol input and,
//! inside the search, derived repeatedly by the transition function. Every
//! derived state is an independent value; nothing mutates a state that has
//! been handed out. The action catalog uses an `im::Vector` so deriving a
//! snapshot shares structure with its parent instead of copying the whole
//! catalog.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionKind};
use super::player::Player;

/// A full snapshot of the game at one point in (real or simulated) time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Turn counter (starts at 1, incremented by the transition function).
    pub turn: u32,

    /// The searching player.
    pub me: Player,

    /// The opponent.
    pub opponent: Player,

    /// Catalog of currently available actions. Insertion order carries no
    /// semantics; no two entries share an id.
    pub actions: Vector<Action>,
}

impl GameState {
    /// Build a snapshot from parsed turn input.
    #[must_use]
    pub fn new(
        turn: u32,
        me: Player,
        opponent: Player,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        let actions: Vector<Action> = actions.into_iter().collect();

        debug_assert!(
            {
                let mut ids = FxHashSet::default();
                actions.iter().all(|a| ids.insert(a.id))
            },
            "catalog ids must be unique"
        );
        debug_assert!(me.inventory.is_valid_inventory());
        debug_assert!(opponent.inventory.is_valid_inventory());

        Self {
            turn,
            me,
            opponent,
            actions,
        }
    }

    /// Look up a catalog entry by id.
    #[must_use]
    pub fn find_action(&self, id: i32) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Iterate over our Cast spells.
    pub fn casts(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.kind == ActionKind::Cast)
    }

    /// Iterate over available potion recipes.
    pub fn brews(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.kind == ActionKind::Brew)
    }
}
