//! Core state model: ingredient tiers, players, the action catalog, moves.
//!
//! Everything here is an immutable value type. States are derived, never
//! mutated in place; see `rules::transition`.

pub mod action;
pub mod ingredients;
pub mod moves;
pub mod player;
pub mod state;

pub use action::{Action, ActionKind};
pub use ingredients::{Ingredients, MAX_INVENTORY, TIER_COUNT};
pub use moves::Move;
pub use player::Player;
pub use state::GameState;
