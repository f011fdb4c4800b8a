use crate::core::{App, AppControl, FrameCtx};

/// Per-frame bookkeeping shared by every scheduler.
///
/// Hands the app a `FrameCtx` with a monotonic index and reports whether the
/// app wants another frame.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    frame_index: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames stepped so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Runs one frame of `app`.
    pub fn step<A: App>(&mut self, app: &mut A) -> AppControl {
        let mut ctx = FrameCtx::new(self.frame_index);
        self.frame_index = self.frame_index.wrapping_add(1);

        let control = app.on_frame(&mut ctx);
        if control == AppControl::Exit {
            log::debug!("app requested exit at frame {}", ctx.frame_index);
        }
        control
    }
}
