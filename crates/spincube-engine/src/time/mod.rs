//! Time subsystem.
//!
//! Animation here is frame-coupled: every presented frame advances the same
//! fixed step, whatever the display refresh rate.
//! Intended usage:
//! - one `SpinClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod spin_clock;

pub use spin_clock::{FrameTime, SpinClock};
