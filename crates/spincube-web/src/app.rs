use anyhow::{Context, Result};

use spincube_engine::core::{App, AppControl, FrameCtx};
use spincube_engine::device::GlBackend;
use spincube_engine::render::{CubeRenderer, RenderInit};

/// The spinning cube as an engine `App`.
///
/// Owns the renderer, and with it every piece of mutable state. There is no
/// exit condition; the loop ends when the page goes away.
pub struct CubeApp<G: GlBackend> {
    renderer: CubeRenderer<G>,
}

impl<G: GlBackend> CubeApp<G> {
    pub fn new(gl: G, init: RenderInit) -> Result<Self> {
        let renderer = CubeRenderer::new(gl, init).context("failed to set up cube renderer")?;
        Ok(Self { renderer })
    }

    pub fn renderer(&self) -> &CubeRenderer<G> {
        &self.renderer
    }
}

impl<G: GlBackend> App for CubeApp<G> {
    fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl {
        let time = self.renderer.tick();
        if time.frame_index % 600 == 0 {
            log::debug!("frame {} (scheduler frame {})", time.frame_index, ctx.frame_index);
        }
        AppControl::Continue
    }
}
