//! Spinning cube, rendered with WebGL into the host page's canvas.
//!
//! Build with `wasm-pack build --target web` and serve `index.html` next to
//! the generated `pkg/` directory.

mod app;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::CubeApp;
