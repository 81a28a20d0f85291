//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`TerminalSampler`] - Sizes the terminal attached to stdout
//! - [`SystemClock`] - Wall-clock time
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockSampler`] - Settable surface size
//! - [`mock::ManualClock`] - Explicitly advanced time

pub mod mock;
pub mod system_clock;
pub mod terminal_sampler;

pub use mock::{ManualClock, MockSampler};
pub use system_clock::SystemClock;
pub use terminal_sampler::{SurfaceUnit, TerminalSampler};
