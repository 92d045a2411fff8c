use std::time::{Duration, Instant};

/// Final stretch of a wait that is spun instead of slept.
///
/// OS sleeps routinely overshoot by a millisecond or more.
const SPIN_MARGIN: Duration = Duration::from_millis(1);

/// Caps the loop at a target iteration rate when vsync is off.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FramePacer {
    period: f64,
}

impl FramePacer {
    /// `frequency` is in Hz and must be positive.
    pub fn new(frequency: f64) -> Self {
        debug_assert!(frequency > 0.0);
        Self {
            period: 1.0 / frequency,
        }
    }

    /// Target seconds per iteration.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Seconds left before the next iteration may start, if any.
    pub fn remaining(&self, frame_start: f64, now: f64) -> Option<f64> {
        let left = frame_start + self.period - now;
        (left > 0.0).then_some(left)
    }
}

/// Sleeps for `seconds`, spinning the final millisecond for accuracy.
///
/// Waits that are not positive or do not fit a `Duration` return at once.
pub fn sleep_precise(seconds: f64) {
    if seconds <= 0.0 {
        return;
    }
    let Ok(wait) = Duration::try_from_secs_f64(seconds) else {
        return;
    };
    let Some(deadline) = Instant::now().checked_add(wait) else {
        return;
    };

    if wait > SPIN_MARGIN {
        std::thread::sleep(wait - SPIN_MARGIN);
    }

    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}
