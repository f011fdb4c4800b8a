//! Core engine-facing contracts.
//!
//! This module defines the stable interface between a frame scheduler and
//! the application it drives. Schedulers own the app; the app owns its
//! renderer state.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
