/// Per-frame context passed to `core::App::on_frame`.
///
/// Built by the scheduler for every frame it runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameCtx {
    /// Frames run by this scheduler before the current one.
    pub frame_index: u64,
}

impl FrameCtx {
    #[inline]
    pub fn new(frame_index: u64) -> Self {
        Self { frame_index }
    }
}
