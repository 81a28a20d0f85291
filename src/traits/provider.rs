//! Read access to the current surface context.

use crate::models::SurfaceContext;

/// Anything that can report the latest [`SurfaceContext`].
///
/// The publisher hands out a `SharedSurfaceContext` implementing this; a
/// plain `SurfaceContext` implements it too, as a fixed snapshot.
pub trait SurfaceContextProvider {
    fn surface_context(&self) -> SurfaceContext;
}

impl SurfaceContextProvider for SurfaceContext {
    fn surface_context(&self) -> SurfaceContext {
        *self
    }
}

impl<P: SurfaceContextProvider + ?Sized> SurfaceContextProvider for &P {
    fn surface_context(&self) -> SurfaceContext {
        (**self).surface_context()
    }
}

impl<P: SurfaceContextProvider + ?Sized> SurfaceContextProvider for std::rc::Rc<P> {
    fn surface_context(&self) -> SurfaceContext {
        (**self).surface_context()
    }
}
