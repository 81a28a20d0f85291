//! Settable surface sampler for testing.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::SurfaceState;
use crate::traits::SurfaceSampler;

/// Sampler returning whatever state the test last set.
///
/// Clones share state, so a test keeps one handle to drive the surface while
/// the publisher owns another.
///
/// # Example
///
/// ```
/// use scaled_props::adapters::mock::MockSampler;
/// use scaled_props::traits::SurfaceSampler;
///
/// let sampler = MockSampler::with_size(800.0, 600.0);
/// let handle = sampler.clone();
///
/// handle.resize(1024.0, 768.0);
/// assert_eq!(sampler.sample().width, Some(1024.0));
/// assert_eq!(handle.sample_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSampler {
    state: Rc<Cell<SurfaceState>>,
    samples: Rc<Cell<usize>>,
}

impl MockSampler {
    /// A sampler with no surface.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        let sampler = Self::new();
        sampler.resize(width, height);
        sampler
    }

    /// Change what the next sample returns.
    pub fn set_state(&self, state: SurfaceState) {
        self.state.set(state);
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.set_state(SurfaceState::new(width, height));
    }

    /// Make the surface disappear.
    pub fn detach(&self) {
        self.set_state(SurfaceState::unavailable());
    }

    /// How many times `sample()` ran.
    pub fn sample_count(&self) -> usize {
        self.samples.get()
    }
}

impl SurfaceSampler for MockSampler {
    fn sample(&self) -> SurfaceState {
        self.samples.set(self.samples.get() + 1);
        self.state.get()
    }
}
