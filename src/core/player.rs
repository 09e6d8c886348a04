//! Player state: inventory, score, brewed-potion counter.

use serde::{Deserialize, Serialize};

use super::ingredients::Ingredients;

/// One player's resources and score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Ingredient inventory (every tier >= 0, total <= 10).
    pub inventory: Ingredients,

    /// Rupees earned from brewing.
    pub score: i32,

    /// Potions brewed so far this game.
    pub potions_brewed: u32,
}

impl Player {
    /// Create a player with the given inventory and score.
    #[must_use]
    pub fn new(inventory: Ingredients, score: i32) -> Self {
        Self {
            inventory,
            score,
            potions_brewed: 0,
        }
    }

    /// Total ingredients held.
    #[must_use]
    pub fn total_inventory(&self) -> i32 {
        self.inventory.total()
    }

    /// Score plus the banked value of non-tier-0 ingredients.
    ///
    /// At game end each tier-1..3 ingredient is worth one rupee, so this
    /// is the score the player could liquidate right now.
    #[must_use]
    pub fn liquid_score(&self) -> i32 {
        self.score + self.inventory.tier(1) + self.inventory.tier(2) + self.inventory.tier(3)
    }

    /// Final-standing comparison value; currently the liquid score.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.liquid_score()
    }
}
