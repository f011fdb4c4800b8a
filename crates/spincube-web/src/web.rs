use anyhow::{Context, Result};
use wasm_bindgen::prelude::*;

use spincube_engine::device::{acquire_context, SurfaceInit};
use spincube_engine::logging::{init_logging, LoggingConfig};
use spincube_engine::render::RenderInit;
use spincube_engine::runtime::{AnimationFrameScheduler, FrameScheduler};

use crate::CubeApp;

fn check<T>(result: Result<T>) -> Result<T, JsValue> {
    result.map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

#[wasm_bindgen(start)]
fn wasm_start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging(LoggingConfig::default());

    check(start(SurfaceInit::default(), RenderInit::default()))
}

fn start(surface: SurfaceInit, init: RenderInit) -> Result<()> {
    let gl = acquire_context(&surface).context("failed to acquire drawing context")?;
    let app = CubeApp::new(gl, init)?;
    AnimationFrameScheduler::new()
        .run(app)
        .context("failed to start render loop")
}
