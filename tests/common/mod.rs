//! Common test utilities for integration tests.
//!
//! Fixtures for building publishers over a mock surface and a manual clock.
//!
//! # Example
//!
//! ```ignore
//! let fixture = PublisherFixture::throttled(200);
//! fixture.sampler.resize(1024.0, 768.0);
//! fixture.clock.advance_millis(250);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use scaled_props::config::{PublisherConfig, RefreshBehavior};
use scaled_props::models::{Axis, ScalableProp, ScalablePropSet, SurfaceBounds};
use scaled_props::publisher::SurfacePublisher;

/// Width bounds [400, 1200] and height bounds [400, 700].
pub fn desktop_bounds() -> SurfaceBounds {
    SurfaceBounds::new()
        .with_width(400.0, 1200.0)
        .with_height(400.0, 700.0)
}

/// fontSize 20..40 by width, opacity 0.1..1.0 by height.
pub fn sample_props() -> ScalablePropSet {
    ScalablePropSet::new()
        .with("fontSize", ScalableProp::new(20.0, 40.0))
        .and_then(|set| set.with("opacity", ScalableProp::new(0.1, 1.0).scaled_by(Axis::Height)))
        .expect("sample props are valid")
}

/// A publisher wired to shared mock handles.
pub struct PublisherFixture {
    pub publisher: SurfacePublisher,
    pub sampler: MockSampler,
    pub clock: ManualClock,
}

impl PublisherFixture {
    pub fn new(behavior: RefreshBehavior, rate_ms: u64) -> Self {
        let sampler = MockSampler::with_size(800.0, 600.0);
        let clock = ManualClock::new();
        let config = PublisherConfig::new(desktop_bounds())
            .with_refresh_behavior(behavior)
            .with_refresh_rate(rate_ms);
        let publisher = SurfacePublisher::with_clock(config, sampler.clone(), clock.clone());
        Self {
            publisher,
            sampler,
            clock,
        }
    }

    pub fn throttled(rate_ms: u64) -> Self {
        Self::new(RefreshBehavior::OnResize, rate_ms)
    }

    pub fn debounced(rate_ms: u64) -> Self {
        Self::new(RefreshBehavior::OnResizeComplete, rate_ms)
    }

    /// Resize the mock surface and notify the publisher.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.sampler.resize(width, height);
        self.publisher.handle_resize()
    }

    /// Advance time and run any due refresh.
    pub fn advance(&mut self, millis: u64) -> bool {
        self.clock.advance_millis(millis);
        self.publisher.poll_timers()
    }
}
