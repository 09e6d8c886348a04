//! Time-boxed state-space search.
//!
//! ## Overview
//!
//! The search explores move sequences breadth-first from the turn-start
//! state over a capped FIFO frontier, ranking every reached state and
//! keeping the best path. It never fails in production: even with a
//! deadline already in the past it returns an outcome whose first move
//! defaults to Rest.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use cauldron::core::{Action, GameState, Ingredients, Player};
//! use cauldron::search::{Clock, FrontierSearch, SearchConfig};
//!
//! let state = GameState::new(
//!     1,
//!     Player::new(Ingredients::new(3, 0, 0, 0), 0),
//!     Player::new(Ingredients::new(3, 0, 0, 0), 0),
//!     vec![Action::cast(78, Ingredients::new(2, 0, 0, 0))],
//! );
//!
//! let mut search = FrontierSearch::new(SearchConfig::default());
//! let turn_start = search.clock().now();
//! let outcome = search.run(&state, turn_start, Duration::from_millis(40));
//! let mv = outcome.first_move();
//! # let _ = mv;
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod frontier;
pub mod score;
pub mod stats;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::SearchConfig;
pub use engine::{FrontierSearch, SearchOutcome};
pub use frontier::{Frontier, Path};
pub use score::{rank, SCORE_WEIGHT, WIN_BONUS};
pub use stats::SearchStats;
