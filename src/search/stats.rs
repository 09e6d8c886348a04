//! Per-search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected by one search invocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Entries popped and ranked.
    pub scored: u32,

    /// Child states pushed onto the frontier.
    pub expanded: u32,

    /// Child states dropped at the frontier cap.
    pub dropped: u32,

    /// Batches completed before the deadline check stopped the loop.
    pub batches: u32,

    /// Total search time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Entries ranked per second.
    #[must_use]
    pub fn scored_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.scored as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.scored = 10;
        stats.expanded = 40;

        stats.reset();

        assert_eq!(stats.scored, 0);
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn test_scored_per_second() {
        let mut stats = SearchStats::new();
        stats.scored = 500;
        stats.time_us = 500_000;

        assert_eq!(stats.scored_per_second(), 1000.0);
        stats.time_us = 0;
        assert_eq!(stats.scored_per_second(), 0.0);
    }
}
