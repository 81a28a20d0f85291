//! Deadline-based throttle and debounce.
//!
//! The limiter never runs anything itself. Callers report each notification
//! with [`RateLimiter::notify`] and learn whether to act now or wait; when
//! waiting, they call [`RateLimiter::poll`] once [`RateLimiter::next_deadline`]
//! has passed. Time is always passed in, so the same limiter works under a
//! tokio timer and under a manual test clock.

use std::time::{Duration, Instant};

use crate::config::RefreshBehavior;

/// What the caller should do with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Run the action now.
    Now,
    /// Deferred; poll again at the deadline.
    Scheduled(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// Throttle window open until `ends`; `pending` when calls were coalesced.
    Window { ends: Instant, pending: bool },
    /// Debounced call waiting for quiet.
    Waiting { deadline: Instant },
}

/// Rate limiter for resize notifications.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    behavior: RefreshBehavior,
    interval: Duration,
    state: State,
}

impl RateLimiter {
    pub fn new(behavior: RefreshBehavior, interval: Duration) -> Self {
        Self {
            behavior,
            interval,
            state: State::Idle,
        }
    }

    pub fn behavior(&self) -> RefreshBehavior {
        self.behavior
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record a notification at `now`.
    pub fn notify(&mut self, now: Instant) -> Trigger {
        match self.behavior {
            RefreshBehavior::OnResize => self.notify_throttle(now),
            RefreshBehavior::OnResizeComplete => {
                let deadline = now + self.interval;
                self.state = State::Waiting { deadline };
                Trigger::Scheduled(deadline)
            }
        }
    }

    fn notify_throttle(&mut self, now: Instant) -> Trigger {
        match self.state {
            State::Window { ends, .. } if now < ends => {
                self.state = State::Window { ends, pending: true };
                Trigger::Scheduled(ends)
            }
            // Idle, or a window the host did not poll in time: a pending call
            // folds into this one.
            _ => {
                self.state = State::Window {
                    ends: now + self.interval,
                    pending: false,
                };
                Trigger::Now
            }
        }
    }

    /// True when a deferred call is due at `now` and must run.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            State::Window { ends, pending } if now >= ends => {
                if pending {
                    self.state = State::Window {
                        ends: now + self.interval,
                        pending: false,
                    };
                    true
                } else {
                    self.state = State::Idle;
                    false
                }
            }
            State::Waiting { deadline } if now >= deadline => {
                self.state = State::Idle;
                true
            }
            _ => false,
        }
    }

    /// When the next deferred call is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            State::Window {
                ends,
                pending: true,
            } => Some(ends),
            State::Waiting { deadline } => Some(deadline),
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Drop all pending work and return to idle.
    pub fn cancel(&mut self) {
        if self.has_pending() {
            tracing::debug!(behavior = self.behavior.as_str(), "cancelled pending refresh");
        }
        self.state = State::Idle;
    }
}
