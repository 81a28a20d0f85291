//! Surface size sampler trait abstraction.
//!
//! Lets the publisher read viewing-surface extents without knowing whether
//! they come from a terminal, a window system, or a test fixture.

use crate::models::SurfaceState;

/// Reads the current extents of the viewing surface.
///
/// Implementations must not fail: when no viewing surface exists in the
/// current environment (headless process, output redirected to a file) the
/// affected dimensions are `None`.
///
/// # Example
///
/// ```
/// use scaled_props::models::SurfaceState;
/// use scaled_props::traits::SurfaceSampler;
///
/// struct FixedSampler(f64, f64);
///
/// impl SurfaceSampler for FixedSampler {
///     fn sample(&self) -> SurfaceState {
///         SurfaceState::new(self.0, self.1)
///     }
/// }
///
/// assert_eq!(FixedSampler(80.0, 24.0).sample().width, Some(80.0));
/// ```
pub trait SurfaceSampler {
    /// Read the current width and height.
    fn sample(&self) -> SurfaceState;
}

impl<S: SurfaceSampler + ?Sized> SurfaceSampler for Box<S> {
    fn sample(&self) -> SurfaceState {
        (**self).sample()
    }
}

impl<S: SurfaceSampler + ?Sized> SurfaceSampler for std::rc::Rc<S> {
    fn sample(&self) -> SurfaceState {
        (**self).sample()
    }
}
