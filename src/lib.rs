//! # cauldron
//!
//! A time-boxed search agent for a two-player potion-brewing contest.
//! Each turn the agent picks one move (cast a spell, brew a potion,
//! learn a new spell, or rest) under a wall-clock budget of tens of
//! milliseconds.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: `GameState` values are derived, never
//!    mutated. The catalog uses `im` persistent vectors so snapshots
//!    share structure.
//!
//! 2. **Pure rules**: legal-move generation and the transition function
//!    are free functions over states; the search owns all mutable
//!    bookkeeping and resets it per turn.
//!
//! 3. **Deadline by projection**: the search measures each batch and
//!    stops before the next would overrun, through an injectable clock so
//!    tests control time.
//!
//! ## Modules
//!
//! - `core`: ingredient tiers, players, the action catalog, moves
//! - `rules`: legality engine and the pure transition function
//! - `search`: capped FIFO frontier exploration under a time budget
//! - `policy`: the spell-learning heuristic consulted before searching
//! - `protocol`: line-oriented turn input/output
//! - `bot`: per-turn driver tying policy and search together

pub mod bot;
pub mod core;
pub mod policy;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, ActionKind, GameState, Ingredients, Move, Player, MAX_INVENTORY};

pub use crate::rules::{apply, legal_moves, MAX_PATH_LEN, MAX_TURNS, POTION_TARGET};

pub use crate::search::{
    Clock, FrontierSearch, ManualClock, MonotonicClock, Path, SearchConfig, SearchOutcome,
    SearchStats,
};

pub use crate::policy::choose_learn;

pub use crate::protocol::{format_move, parse_move, read_state, ParseError};
