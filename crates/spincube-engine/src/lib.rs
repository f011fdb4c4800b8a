//! Spincube engine crate.
//!
//! This crate owns the context + GL runtime pieces used by the web app:
//! context acquisition, the shader/geometry/transform pipeline, frame timing
//! and frame scheduling.

pub mod core;
pub mod device;
pub mod runtime;
pub mod time;

pub mod logging;
pub mod render;
