//! Frame scheduling.
//!
//! A `FrameScheduler` owns the app and decides when `App::on_frame` runs.
//! The browser scheduler follows the display refresh; the manual one runs a
//! fixed number of frames back to back.

mod frame_loop;
mod manual;

#[cfg(target_arch = "wasm32")]
mod animation_frame;

use anyhow::Result;

use crate::core::App;

pub use frame_loop::FrameLoop;
pub use manual::ManualScheduler;

#[cfg(target_arch = "wasm32")]
pub use animation_frame::AnimationFrameScheduler;

/// Drives an app one frame at a time.
pub trait FrameScheduler {
    /// Takes ownership of `app` and starts producing frames.
    ///
    /// Returns once the loop is set up (browser) or finished (manual).
    fn run<A>(self, app: A) -> Result<()>
    where
        A: App + 'static;
}
