//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`SurfaceSampler`] - Reads viewing-surface extents
//! - [`Clock`] - Current instant, for deadline-based rate limiting
//! - [`SurfaceContextProvider`] - Latest published surface context

pub mod clock;
pub mod provider;
pub mod sampler;

pub use clock::Clock;
pub use provider::SurfaceContextProvider;
pub use sampler::SurfaceSampler;
