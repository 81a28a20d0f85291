//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockSampler`] - Surface sampler with a settable size
//! - [`ManualClock`] - Clock advanced explicitly by the test

pub mod clock;
pub mod sampler;

pub use clock::ManualClock;
pub use sampler::MockSampler;
