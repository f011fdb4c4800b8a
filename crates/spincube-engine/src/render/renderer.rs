use crate::device::GlBackend;
use crate::time::{FrameTime, SpinClock};

use super::geometry::GeometryBuffers;
use super::shader::{build_program, CUBE_FRAGMENT_SHADER, CUBE_VERTEX_SHADER};
use super::transform::{aspect_ratio, Transforms};
use super::{RenderError, RenderInit};

/// Owns every piece of per-session GL state for the spinning cube.
///
/// Built once with [`CubeRenderer::new`]; each [`CubeRenderer::tick`] advances
/// the spin and draws one frame. Nothing is allocated after setup.
pub struct CubeRenderer<G: GlBackend> {
    gl: G,
    program: G::Program,
    buffers: GeometryBuffers<G>,
    model_view_location: Option<G::UniformLocation>,
    projection_location: Option<G::UniformLocation>,
    transforms: Transforms,
    clock: SpinClock,
}

impl<G: GlBackend> CubeRenderer<G> {
    /// Builds the program, uploads geometry and sets the one-time GL state.
    pub fn new(gl: G, init: RenderInit) -> Result<Self, RenderError> {
        let program = build_program(
            &gl,
            CUBE_VERTEX_SHADER,
            CUBE_FRAGMENT_SHADER,
            init.link_policy,
        )?;
        gl.use_program(&program);

        let buffers = GeometryBuffers::upload(&gl, &program)?;

        let model_view_location = gl.uniform_location(&program, "modelViewMatrix");
        let projection_location = gl.uniform_location(&program, "projectionMatrix");
        if model_view_location.is_none() || projection_location.is_none() {
            log::warn!("matrix uniforms not found; uploads will be ignored");
        }

        let (width, height) = gl.drawable_size();
        let transforms = Transforms::new(&init, aspect_ratio(width, height));

        gl.viewport(0, 0, viewport_extent(width), viewport_extent(height));
        gl.clear_color(init.clear_color);
        gl.enable_depth_test();

        log::info!("cube renderer ready ({width}x{height})");

        Ok(Self {
            gl,
            program,
            buffers,
            model_view_location,
            projection_location,
            transforms,
            clock: SpinClock::new(init.angle_step),
        })
    }

    /// Advances the angle and draws one frame.
    pub fn tick(&mut self) -> FrameTime {
        let time = self.clock.tick();
        let model_view = self.transforms.model_view(time.angle);

        self.gl.clear();
        self.gl.uniform_matrix4(
            self.model_view_location.as_ref(),
            &model_view.to_cols_array(),
        );
        self.gl.uniform_matrix4(
            self.projection_location.as_ref(),
            &self.transforms.projection().to_cols_array(),
        );
        self.gl.draw_indexed_triangles(self.buffers.index_count);

        log::trace!("frame {} angle {:.3}", time.frame_index, time.angle);
        time
    }

    pub fn angle(&self) -> f32 {
        self.clock.angle()
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    pub fn program(&self) -> &G::Program {
        &self.program
    }

    /// Returns the backend, e.g. to inspect a `RecordingGl`.
    pub fn backend(&self) -> &G {
        &self.gl
    }
}

/// Drawable sizes past `i32::MAX` saturate instead of wrapping negative.
fn viewport_extent(pixels: u32) -> i32 {
    i32::try_from(pixels).unwrap_or(i32::MAX)
}
