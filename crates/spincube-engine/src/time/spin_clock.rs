/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Accumulated rotation in radians after this tick.
    pub angle: f32,

    /// Monotonic frame counter, starting at 0 for the first tick.
    pub frame_index: u64,
}

/// Fixed-step angle accumulator.
///
/// The angle grows without bound; it is never wrapped to `2π`. f32 keeps
/// sub-milliradian precision for far longer than a browser session.
#[derive(Debug, Clone)]
pub struct SpinClock {
    angle: f32,
    step: f32,
    frame_index: u64,
}

impl SpinClock {
    /// Creates a clock at angle 0 that advances `step` radians per tick.
    pub fn new(step: f32) -> Self {
        debug_assert!(step.is_finite());
        Self {
            angle: 0.0,
            step,
            frame_index: 0,
        }
    }

    /// Current angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.angle += self.step;

        let ft = FrameTime {
            angle: self.angle,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for SpinClock {
    fn default() -> Self {
        Self::new(0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = SpinClock::default();
        assert_eq!(clock.angle(), 0.0);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn first_tick_already_advanced() {
        let mut clock = SpinClock::new(0.01);
        let ft = clock.tick();
        assert_eq!(ft.angle, 0.01);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn angle_after_n_ticks() {
        let mut clock = SpinClock::new(0.01);
        for _ in 0..1000 {
            clock.tick();
        }
        assert_eq!(clock.frames(), 1000);
        assert!((clock.angle() - 10.0).abs() < 1e-3, "angle = {}", clock.angle());
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut clock = SpinClock::new(1.0);
        for _ in 0..10 {
            clock.tick();
        }
        assert!(clock.angle() > std::f32::consts::TAU);
    }
}
