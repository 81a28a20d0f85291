//! Wall-clock time source.

use std::time::Instant;

use crate::traits::Clock;

/// [`Clock`] reading [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
