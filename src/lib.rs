//! Scaled props: values that follow the size of a viewing surface.
//!
//! A [`publisher::SurfacePublisher`] samples the surface (a terminal, by
//! default) and publishes a [`models::SurfaceContext`]; a
//! [`binder::ScaledPropsBinder`] turns declared [`models::ScalableProp`]s
//! into concrete numbers by linear interpolation between screen-size bounds.
//!
//! This library exposes modules for the binary and for integration tests.

pub mod adapters;
pub mod app;
pub mod binder;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod publisher;
pub mod rate_limiter;
pub mod scale;
pub mod terminal;
pub mod traits;
pub mod ui;
