//! Monotonic clock abstraction.
//!
//! The engine's deadline management reads time through [`Clock`] so tests
//! can simulate arbitrary elapsed time deterministically instead of racing
//! the wall clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic clock: durations since an arbitrary fixed origin.
pub trait Clock {
    /// Time elapsed since the clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Production clock backed by `std::time::Instant`.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock for tests.
///
/// Time only moves when told to: either explicitly via [`advance`]
/// (`ManualClock::advance`), or by a fixed `tick` added on every `now()`
/// read, which makes each measured interval span a known duration.
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    /// A clock frozen at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that advances by `tick` on every read.
    #[must_use]
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            elapsed: Cell::new(Duration::ZERO),
            tick,
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.elapsed.get();
        self.elapsed.set(now + self.tick);
        now
    }
}
