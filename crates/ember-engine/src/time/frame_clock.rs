/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick.
    pub dt: f64,

    /// Timestamp of this tick, in backend seconds.
    pub now: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Variable-timestep clock fed with backend timestamps.
///
/// Delta time is the raw wall-clock difference between ticks; nothing is
/// accumulated or clamped, so `update(dt)` sees exactly the elapsed time.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the baseline the next tick measures from.
    pub fn reset(&mut self, now: f64) {
        self.last = Some(now);
    }

    /// Advances the clock to `now` and returns the frame snapshot.
    ///
    /// A clock that was never reset reports `dt = 0` on its first tick. Time
    /// going backwards also yields zero.
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let dt = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
