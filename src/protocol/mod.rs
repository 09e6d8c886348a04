//! Line-oriented turn protocol: input parsing and move serialization.

pub mod reader;
pub mod writer;

pub use reader::{read_state, ParseError};
pub use writer::{format_move, parse_move};
