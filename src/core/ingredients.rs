//! Ingredient tier vectors.
//!
//! Every inventory and every action delta is a vector of four tier counts
//! (tier 0 is the cheapest ingredient, tier 3 the most valuable). Player
//! inventories keep every tier non-negative and the total at or below
//! [`MAX_INVENTORY`]; deltas are signed.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Maximum total ingredients a player can hold.
pub const MAX_INVENTORY: i32 = 10;

/// Number of ingredient tiers.
pub const TIER_COUNT: usize = 4;

/// A vector of four ingredient tier counts.
///
/// Used both for player inventories (non-negative) and action deltas
/// (signed). `Copy` so states and moves can carry it by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredients(pub [i32; TIER_COUNT]);

impl Ingredients {
    /// Create from the four tier counts.
    #[must_use]
    pub const fn new(t0: i32, t1: i32, t2: i32, t3: i32) -> Self {
        Self([t0, t1, t2, t3])
    }

    /// Get a single tier count.
    #[must_use]
    pub fn tier(self, tier: usize) -> i32 {
        self.0[tier]
    }

    /// Sum of all four tiers.
    #[must_use]
    pub fn total(self) -> i32 {
        self.0.iter().sum()
    }

    /// Multiply every tier by `times`.
    #[must_use]
    pub fn scaled(self, times: i32) -> Self {
        Self([
            self.0[0] * times,
            self.0[1] * times,
            self.0[2] * times,
            self.0[3] * times,
        ])
    }

    /// True if every tier is >= 0.
    #[must_use]
    pub fn all_non_negative(self) -> bool {
        self.0.iter().all(|&t| t >= 0)
    }

    /// True if this is a valid player inventory: every tier >= 0 and the
    /// total at most [`MAX_INVENTORY`].
    #[must_use]
    pub fn is_valid_inventory(self) -> bool {
        self.all_non_negative() && self.total() <= MAX_INVENTORY
    }
}

impl Add for Ingredients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_tier() {
        let inv = Ingredients::new(3, 2, 1, 0);
        assert_eq!(inv.total(), 6);
        assert_eq!(inv.tier(0), 3);
        assert_eq!(inv.tier(3), 0);
    }

    #[test]
    fn test_scaled() {
        let delta = Ingredients::new(-1, 2, 0, 1);
        assert_eq!(delta.scaled(3), Ingredients::new(-3, 6, 0, 3));
    }

    #[test]
    fn test_add() {
        let inv = Ingredients::new(3, 0, 0, 0);
        let delta = Ingredients::new(-1, 1, 0, 0);
        assert_eq!(inv + delta, Ingredients::new(2, 1, 0, 0));
    }

    #[test]
    fn test_valid_inventory() {
        assert!(Ingredients::new(3, 3, 2, 2).is_valid_inventory());
        assert!(!Ingredients::new(4, 4, 2, 2).is_valid_inventory()); // total 12
        assert!(!Ingredients::new(-1, 0, 0, 0).is_valid_inventory());
    }

    #[test]
    fn test_serialization() {
        let inv = Ingredients::new(1, 2, 3, 4);
        let json = serde_json::to_string(&inv).unwrap();
        let back: Ingredients = serde_json::from_str(&json).unwrap();
        assert_eq!(inv, back);
    }
}
