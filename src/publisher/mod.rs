//! Surface size publisher.
//!
//! A [`SurfacePublisher`] owns the current [`SurfaceState`] of one viewing
//! surface and pushes a fresh [`SurfaceContext`] to its subscribers whenever
//! the surface is resampled. The host wires it to its event loop:
//!
//! - `activate()` on mount, `deactivate()` on unmount
//! - `handle_resize()` for every resize event
//! - `poll_timers()` once `next_deadline()` has passed
//!
//! Everything runs on the caller's thread. Subscribers are invoked
//! synchronously, in registration order, before the publishing call returns.

mod shared;
mod subscription;

pub use shared::SharedSurfaceContext;
pub use subscription::Subscription;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use crate::adapters::SystemClock;
use crate::config::PublisherConfig;
use crate::models::{SurfaceContext, SurfaceState};
use crate::rate_limiter::{RateLimiter, Trigger};
use crate::traits::{Clock, SurfaceSampler};
use subscription::SubscriberList;

enum Lifecycle {
    Inactive,
    Active(RateLimiter),
}

/// Publishes surface measurements to subscribers.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use scaled_props::adapters::mock::MockSampler;
/// use scaled_props::config::PublisherConfig;
/// use scaled_props::publisher::SurfacePublisher;
///
/// let sampler = MockSampler::with_size(800.0, 600.0);
/// let mut publisher = SurfacePublisher::new(PublisherConfig::default(), sampler.clone());
///
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
/// let _sub = publisher.subscribe(move |ctx| sink.set(ctx.screen_width()));
///
/// publisher.activate();
/// assert_eq!(seen.get(), Some(800.0));
///
/// sampler.resize(1024.0, 768.0);
/// publisher.handle_resize();
/// assert_eq!(seen.get(), Some(1024.0));
/// ```
pub struct SurfacePublisher {
    config: PublisherConfig,
    sampler: Box<dyn SurfaceSampler>,
    clock: Box<dyn Clock>,
    lifecycle: Lifecycle,
    shared: SharedSurfaceContext,
    subscribers: Rc<RefCell<SubscriberList>>,
    publications: u64,
}

impl SurfacePublisher {
    pub fn new(config: PublisherConfig, sampler: impl SurfaceSampler + 'static) -> Self {
        Self::with_clock(config, sampler, SystemClock)
    }

    pub fn with_clock(
        config: PublisherConfig,
        sampler: impl SurfaceSampler + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let initial = SurfaceContext::new(config.bounds, SurfaceState::unavailable());
        Self {
            config,
            sampler: Box::new(sampler),
            clock: Box::new(clock),
            lifecycle: Lifecycle::Inactive,
            shared: SharedSurfaceContext::new(initial),
            subscribers: Rc::new(RefCell::new(SubscriberList::default())),
            publications: 0,
        }
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Active(_))
    }

    /// Start listening. Samples and publishes immediately. No-op when
    /// already active.
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }

        let limiter = RateLimiter::new(
            self.config.refresh_behavior,
            self.config.refresh_interval(),
        );
        tracing::info!(
            behavior = limiter.behavior().as_str(),
            interval_ms = limiter.interval().as_millis() as u64,
            "surface publisher activated"
        );
        self.lifecycle = Lifecycle::Active(limiter);
        self.publish("activate");
    }

    /// Stop listening and drop any pending refresh.
    pub fn deactivate(&mut self) {
        if let Lifecycle::Active(limiter) = &mut self.lifecycle {
            limiter.cancel();
            self.lifecycle = Lifecycle::Inactive;
            tracing::info!(publications = self.publications, "surface publisher deactivated");
        }
    }

    /// Resize notification. Returns true when it published.
    pub fn handle_resize(&mut self) -> bool {
        let now = self.clock.now();
        let trigger = match &mut self.lifecycle {
            Lifecycle::Active(limiter) => limiter.notify(now),
            Lifecycle::Inactive => return false,
        };

        match trigger {
            Trigger::Now => {
                self.publish("resize");
                true
            }
            Trigger::Scheduled(deadline) => {
                tracing::trace!(
                    in_ms = deadline.saturating_duration_since(now).as_millis() as u64,
                    "resize deferred"
                );
                false
            }
        }
    }

    /// Run a deferred refresh if one is due. Returns true when it published.
    pub fn poll_timers(&mut self) -> bool {
        let now = self.clock.now();
        let due = match &mut self.lifecycle {
            Lifecycle::Active(limiter) => limiter.poll(now),
            Lifecycle::Inactive => false,
        };

        if due {
            self.publish("deferred");
        }
        due
    }

    /// When the host should next call [`poll_timers`](Self::poll_timers).
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.lifecycle {
            Lifecycle::Active(limiter) => limiter.next_deadline(),
            Lifecycle::Inactive => None,
        }
    }

    /// Register a callback for every future publication.
    pub fn subscribe(&mut self, callback: impl FnMut(&SurfaceContext) + 'static) -> Subscription {
        let id = self
            .subscribers
            .borrow_mut()
            .add(Rc::new(RefCell::new(callback)));
        tracing::debug!(subscriber = id, "subscribed to surface updates");
        Subscription::new(id, &self.subscribers)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// The latest published context.
    pub fn context(&self) -> SurfaceContext {
        self.shared.get()
    }

    /// A handle that keeps reflecting the latest publication.
    pub fn shared_context(&self) -> SharedSurfaceContext {
        self.shared.clone()
    }

    pub fn state(&self) -> SurfaceState {
        self.context().state
    }

    /// Publications since construction.
    pub fn publication_count(&self) -> u64 {
        self.publications
    }

    fn publish(&mut self, reason: &'static str) {
        let state = self.sampler.sample();
        let ctx = SurfaceContext::new(self.config.bounds, state);
        self.shared.set(ctx);
        self.publications += 1;

        let callbacks = self.subscribers.borrow().snapshot();
        tracing::debug!(
            reason,
            surface = %state,
            subscribers = callbacks.len(),
            "publishing surface context"
        );

        for callback in callbacks {
            (callback.borrow_mut())(&ctx);
        }
    }
}

impl Drop for SurfacePublisher {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl fmt::Debug for SurfacePublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfacePublisher")
            .field("config", &self.config)
            .field("active", &self.is_active())
            .field("context", &self.context())
            .field("subscribers", &self.subscriber_count())
            .field("publications", &self.publications)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{ManualClock, MockSampler};
    use crate::config::RefreshBehavior;
    use crate::models::SurfaceBounds;
    use std::cell::Cell;

    fn publisher(behavior: RefreshBehavior) -> (SurfacePublisher, MockSampler, ManualClock) {
        let sampler = MockSampler::with_size(800.0, 600.0);
        let clock = ManualClock::new();
        let config = PublisherConfig::new(SurfaceBounds::new().with_width(400.0, 1200.0))
            .with_refresh_behavior(behavior);
        let publisher = SurfacePublisher::with_clock(config, sampler.clone(), clock.clone());
        (publisher, sampler, clock)
    }

    fn counter(publisher: &mut SurfacePublisher) -> (Rc<Cell<u32>>, Subscription) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let sub = publisher.subscribe(move |_| sink.set(sink.get() + 1));
        (count, sub)
    }

    #[test]
    fn test_inactive_until_activated() {
        let (mut publisher, sampler, _clock) = publisher(RefreshBehavior::OnResize);
        let (count, _sub) = counter(&mut publisher);

        assert!(!publisher.handle_resize());
        assert!(!publisher.poll_timers());
        assert_eq!(count.get(), 0);
        assert_eq!(sampler.sample_count(), 0);
        assert_eq!(publisher.context().screen_width(), None);
        assert_eq!(publisher.context().min_screen_width(), Some(400.0));
    }

    #[test]
    fn test_activate_publishes_once() {
        let (mut publisher, _sampler, _clock) = publisher(RefreshBehavior::OnResize);
        let (count, _sub) = counter(&mut publisher);

        publisher.activate();
        publisher.activate();
        assert!(publisher.is_active());
        assert_eq!(count.get(), 1);
        assert_eq!(publisher.context().screen_width(), Some(800.0));
        assert_eq!(publisher.context().screen_height(), Some(600.0));
    }

    #[test]
    fn test_throttled_resize_publishes_trailing() {
        let (mut publisher, sampler, clock) = publisher(RefreshBehavior::OnResize);
        let (count, _sub) = counter(&mut publisher);
        publisher.activate();

        sampler.resize(900.0, 600.0);
        assert!(publisher.handle_resize());
        sampler.resize(1000.0, 600.0);
        assert!(!publisher.handle_resize());
        assert_eq!(publisher.state().width, Some(900.0));

        clock.advance_millis(200);
        assert!(publisher.poll_timers());
        assert_eq!(publisher.state().width, Some(1000.0));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_debounced_resize_waits() {
        let (mut publisher, sampler, clock) = publisher(RefreshBehavior::OnResizeComplete);
        let (count, _sub) = counter(&mut publisher);
        publisher.activate();

        sampler.resize(1000.0, 600.0);
        assert!(!publisher.handle_resize());
        assert_eq!(publisher.next_deadline(), Some(clock.at_millis(200)));

        clock.advance_millis(199);
        assert!(!publisher.poll_timers());
        clock.advance_millis(1);
        assert!(publisher.poll_timers());
        assert_eq!(count.get(), 2);
        assert_eq!(publisher.context().screen_width(), Some(1000.0));
    }

    #[test]
    fn test_deactivate_cancels_pending() {
        let (mut publisher, _sampler, clock) = publisher(RefreshBehavior::OnResizeComplete);
        let (count, _sub) = counter(&mut publisher);
        publisher.activate();
        publisher.handle_resize();

        publisher.deactivate();
        assert_eq!(publisher.next_deadline(), None);
        clock.advance_millis(1000);
        assert!(!publisher.poll_timers());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_reactivate_starts_fresh() {
        let (mut publisher, sampler, clock) = publisher(RefreshBehavior::OnResize);
        let (count, _sub) = counter(&mut publisher);
        publisher.activate();
        publisher.handle_resize();
        publisher.handle_resize();
        publisher.deactivate();

        sampler.resize(500.0, 300.0);
        publisher.activate();
        assert_eq!(count.get(), 3);
        assert_eq!(publisher.context().screen_width(), Some(500.0));

        // Fresh limiter: the first resize runs immediately.
        clock.advance_millis(10);
        assert!(publisher.handle_resize());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let (mut publisher, _sampler, _clock) = publisher(RefreshBehavior::OnResize);
        let (first, sub) = counter(&mut publisher);
        let (second, _keep) = counter(&mut publisher);

        publisher.activate();
        drop(sub);
        assert_eq!(publisher.subscriber_count(), 1);

        publisher.deactivate();
        publisher.activate();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_shared_context_tracks_publications() {
        let (mut publisher, sampler, _clock) = publisher(RefreshBehavior::OnResize);
        let shared = publisher.shared_context();
        publisher.activate();
        assert_eq!(shared.get().screen_width(), Some(800.0));

        sampler.detach();
        publisher.handle_resize();
        assert_eq!(shared.get().screen_width(), None);
        assert_eq!(shared.get().max_screen_width(), Some(1200.0));
    }

    #[test]
    fn test_drop_deactivates() {
        let (mut publisher, _sampler, _clock) = publisher(RefreshBehavior::OnResize);
        let (_count, sub) = counter(&mut publisher);
        publisher.activate();
        drop(publisher);
        assert!(!sub.is_connected());
    }
}
