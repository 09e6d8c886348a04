//! Catalog actions: spells, potion recipes, and tome entries.
//!
//! An [`Action`] is an immutable catalog entry. Cast actions toggle their
//! `castable` flag across turns (false after use, reset by Rest); Brew and
//! Learn entries are consumed once used.

use serde::{Deserialize, Serialize};

use super::ingredients::Ingredients;

/// The four catalog entry kinds.
///
/// Matched exhaustively at every consumption site; there is deliberately
/// no catch-all handling anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A spell of ours: transforms ingredients, exhausted until Rest.
    Cast,
    /// A spell of the opponent's. Never playable by us.
    OpponentCast,
    /// A potion recipe: consumes ingredients for rupees, single use.
    Brew,
    /// A tome entry: can be learned into a new Cast spell.
    Learn,
}

impl ActionKind {
    /// Parse a protocol kind tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CAST" => Some(Self::Cast),
            "OPPONENT_CAST" => Some(Self::OpponentCast),
            "BREW" => Some(Self::Brew),
            "LEARN" => Some(Self::Learn),
            _ => None,
        }
    }

    /// The protocol kind tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Cast => "CAST",
            Self::OpponentCast => "OPPONENT_CAST",
            Self::Brew => "BREW",
            Self::Learn => "LEARN",
        }
    }
}

/// An immutable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Unique id within the catalog.
    pub id: i32,

    /// Entry kind.
    pub kind: ActionKind,

    /// Signed per-tier ingredient change when played.
    pub deltas: Ingredients,

    /// Rupees earned (Brew only; 0 otherwise).
    pub price: i32,

    /// Position in the tome; learning costs this many tier-0 ingredients.
    pub tome_index: i32,

    /// Tier-0 ingredients gained back when learning this entry.
    pub tax_count: i32,

    /// Whether a Cast can be played this turn.
    pub castable: bool,

    /// Whether a Cast may be applied several times in one turn.
    pub repeatable: bool,
}

impl Action {
    /// A castable, non-repeatable spell. Test/fixture convenience.
    #[must_use]
    pub fn cast(id: i32, deltas: Ingredients) -> Self {
        Self {
            id,
            kind: ActionKind::Cast,
            deltas,
            price: 0,
            tome_index: -1,
            tax_count: -1,
            castable: true,
            repeatable: false,
        }
    }

    /// An opponent spell. Test/fixture convenience.
    #[must_use]
    pub fn opponent_cast(id: i32, deltas: Ingredients) -> Self {
        Self {
            kind: ActionKind::OpponentCast,
            ..Self::cast(id, deltas)
        }
    }

    /// A potion recipe. Test/fixture convenience.
    #[must_use]
    pub fn brew(id: i32, deltas: Ingredients, price: i32) -> Self {
        Self {
            kind: ActionKind::Brew,
            price,
            castable: false,
            ..Self::cast(id, deltas)
        }
    }

    /// A tome entry. Test/fixture convenience.
    #[must_use]
    pub fn learn(id: i32, deltas: Ingredients, tome_index: i32, tax_count: i32) -> Self {
        Self {
            kind: ActionKind::Learn,
            tome_index,
            tax_count,
            castable: false,
            ..Self::cast(id, deltas)
        }
    }

    /// Mark this action repeatable. Test/fixture convenience.
    #[must_use]
    pub fn with_repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Sum of the four deltas.
    #[must_use]
    pub fn total_delta(&self) -> i32 {
        self.deltas.total()
    }
}
