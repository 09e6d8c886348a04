//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Frontier-search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Frontier entries processed per batch; the deadline is checked
    /// between batches, so this bounds how late a stop can be.
    pub batch_size: usize,

    /// Total entries ever admitted to the frontier. Expansions past the
    /// cap are silently dropped, keeping per-turn allocation predictable.
    pub frontier_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: 64,
            frontier_cap: 2000,
        }
    }
}

impl SearchConfig {
    /// Override the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        self.batch_size = batch_size;
        self
    }

    /// Override the frontier cap.
    pub fn with_frontier_cap(mut self, cap: usize) -> Self {
        assert!(cap > 0, "frontier cap must be positive");
        self.frontier_cap = cap;
        self
    }
}
