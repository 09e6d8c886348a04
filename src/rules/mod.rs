//! Game rules: legal-move generation and the pure transition function.

pub mod legality;
pub mod transition;

pub use legality::{legal_moves, MAX_PATH_LEN, MAX_REPEAT, MAX_TURNS, POTION_TARGET};
pub use transition::apply;
