//! Data types shared by the scaling, publishing and binding layers.
//!
//! - [`SurfaceBounds`], [`SurfaceState`], [`SurfaceContext`]: screen bounds
//!   and sampled dimensions
//! - [`ScalableProp`], [`ScalablePropSet`], [`ScaledPropertySet`]: prop
//!   declarations and the values computed from them

mod props;
mod surface;

pub use props::{ScalableProp, ScalablePropSet, ScaledBy, ScaledPropertySet, WithScaledProps};
pub use surface::{Axis, BoundSide, SurfaceBounds, SurfaceContext, SurfaceState};
