//! Drawing context acquisition and the GL backend seam.
//!
//! This module is responsible for:
//! - the `GlBackend` trait every renderer talks to
//! - acquiring a WebGL context from a page canvas (wasm32)
//! - a recording backend for running the renderer without a browser

mod backend;
mod error;
mod init;
pub mod recording;

#[cfg(target_arch = "wasm32")]
mod web;

pub use backend::{BufferTarget, GlBackend, ShaderKind};
pub use error::DeviceError;
pub use init::SurfaceInit;
pub use recording::{GlCall, RecordingGl};

#[cfg(target_arch = "wasm32")]
pub use web::{acquire_context, WebGl};
