//! Manually advanced clock for deterministic timing tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::traits::Clock;

/// Clock that only moves when told to.
///
/// Clones share the same timeline.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use scaled_props::adapters::mock::ManualClock;
/// use scaled_props::traits::Clock;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance_millis(250);
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// The instant `millis` after the clock's origin.
    pub fn at_millis(&self, millis: u64) -> Instant {
        self.origin + Duration::from_millis(millis)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
