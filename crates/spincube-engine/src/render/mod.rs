//! Cube rendering.
//!
//! Everything here talks to the context through `device::GlBackend`, so the
//! same code runs against a browser context or a `RecordingGl`.
//!
//! Convention:
//! - right-handed view space, camera looking down -Z
//! - matrices are column-major and uploaded untransposed

mod error;
mod geometry;
mod init;
mod renderer;
mod shader;
mod transform;

pub use error::RenderError;
pub use geometry::{GeometryBuffers, CUBE_COLORS, CUBE_INDICES, CUBE_POSITIONS};
pub use init::{LinkPolicy, RenderInit};
pub use renderer::CubeRenderer;
pub use shader::{
    build_program, compile_shader, link_program, CUBE_FRAGMENT_SHADER, CUBE_VERTEX_SHADER,
};
pub use transform::{aspect_ratio, Transforms};
