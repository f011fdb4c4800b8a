use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per frame by the scheduler. Returning `Exit` stops
    /// further frames from being requested.
    fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl;
}
