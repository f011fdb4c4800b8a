use anyhow::Result;

use crate::core::{App, AppControl};

use super::{FrameLoop, FrameScheduler};

/// Runs frames synchronously, back to back.
///
/// Stops after `max_frames` or when the app returns `AppControl::Exit`,
/// whichever comes first. Useful for tests and headless stepping.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    max_frames: u64,
    frames: FrameLoop,
}

impl ManualScheduler {
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            frames: FrameLoop::new(),
        }
    }

    /// Total frames run so far, across every `drive` call.
    pub fn frames(&self) -> u64 {
        self.frames.frames()
    }

    /// Runs up to the remaining budget against a borrowed app.
    ///
    /// Returns the number of frames run by this call.
    pub fn drive<A: App>(&mut self, app: &mut A) -> u64 {
        let start = self.frames.frames();

        while self.frames.frames() < self.max_frames {
            if self.frames.step(app) == AppControl::Exit {
                break;
            }
        }

        self.frames.frames() - start
    }
}

impl FrameScheduler for ManualScheduler {
    fn run<A>(mut self, mut app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let ran = self.drive(&mut app);
        log::debug!("manual scheduler finished after {ran} frames");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrameCtx;

    struct Counter {
        seen: Vec<u64>,
        exit_at: Option<u64>,
    }

    impl App for Counter {
        fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl {
            self.seen.push(ctx.frame_index);
            if Some(ctx.frame_index) == self.exit_at {
                AppControl::Exit
            } else {
                AppControl::Continue
            }
        }
    }

    #[test]
    fn runs_full_budget() {
        let mut app = Counter { seen: Vec::new(), exit_at: None };
        let mut scheduler = ManualScheduler::new(5);
        assert_eq!(scheduler.drive(&mut app), 5);
        assert_eq!(app.seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn stops_on_exit() {
        let mut app = Counter { seen: Vec::new(), exit_at: Some(2) };
        let mut scheduler = ManualScheduler::new(100);
        assert_eq!(scheduler.drive(&mut app), 3);
        assert_eq!(app.seen, vec![0, 1, 2]);
    }

    #[test]
    fn budget_is_shared_across_drives() {
        let mut app = Counter { seen: Vec::new(), exit_at: None };
        let mut scheduler = ManualScheduler::new(3);
        assert_eq!(scheduler.drive(&mut app), 3);
        assert_eq!(scheduler.drive(&mut app), 0);
        assert_eq!(scheduler.frames(), 3);
    }

    #[test]
    fn run_consumes_app() {
        let app = Counter { seen: Vec::new(), exit_at: None };
        assert!(ManualScheduler::new(2).run(app).is_ok());
    }
}
