//! The FIFO frontier of unexplored (path, state) pairs.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::core::{GameState, Move};

/// A move sequence explored by the search. Inline capacity covers the
/// longest path the pruning policy allows.
pub type Path = SmallVec<[Move; 8]>;

/// FIFO queue of (path, state) pairs with a cap on total admissions.
///
/// The cap counts every entry ever pushed, not the current length, so a
/// single search admits at most `cap` states regardless of pop order.
/// Entries offered past the cap are dropped, not re-queued.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<(Path, GameState)>,
    cap: usize,
    pushed: usize,
}

impl Frontier {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            cap,
            pushed: 0,
        }
    }

    /// Drop all entries and reset the admission counter.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.pushed = 0;
    }

    /// Admit an entry unless the cap is reached. Returns whether the
    /// entry was kept.
    pub fn push(&mut self, path: Path, state: GameState) -> bool {
        if self.pushed >= self.cap {
            return false;
        }
        self.pushed += 1;
        self.queue.push_back((path, state));
        true
    }

    /// Pop the oldest entry.
    pub fn pop(&mut self) -> Option<(Path, GameState)> {
        self.queue.pop_front()
    }

    /// True once no further entries will be admitted.
    #[must_use]
    pub fn cap_reached(&self) -> bool {
        self.pushed >= self.cap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
