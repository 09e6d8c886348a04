//! Turn-level heuristics outside the search core.

pub mod learn;

pub use learn::choose_learn;
