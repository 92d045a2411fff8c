use super::moving_avg::moving_avg;
use super::perf_log::FrameMetrics;

/// Accumulates per-frame samples and closes a `FrameMetrics` record once per
/// sampling window.
#[derive(Debug, Clone)]
pub struct PerfSampler {
    interval: f64,
    window_start: Option<f64>,

    frames: usize,
    avg_frame_time: f64,
    max_frame_time: f64,
    avg_fps: f64,
    min_fps: f64,
}

impl PerfSampler {
    /// `interval` is the window length in seconds.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            window_start: None,
            frames: 0,
            avg_frame_time: 0.0,
            max_frame_time: 0.0,
            avg_fps: 0.0,
            min_fps: 0.0,
        }
    }

    /// Feeds one frame that took `frame_time` seconds and ended at `now`.
    ///
    /// Returns the finished record when the window has elapsed. Zero or
    /// non-finite frame times carry no fps information and are skipped.
    pub fn record(&mut self, now: f64, frame_time: f64) -> Option<FrameMetrics> {
        if !(frame_time.is_finite() && frame_time > 0.0) {
            return None;
        }

        let start = *self.window_start.get_or_insert(now);
        let fps = 1.0 / frame_time;

        if self.frames == 0 {
            self.max_frame_time = frame_time;
            self.min_fps = fps;
        } else {
            self.max_frame_time = self.max_frame_time.max(frame_time);
            self.min_fps = self.min_fps.min(fps);
        }
        self.avg_frame_time = moving_avg(self.avg_frame_time, self.frames, frame_time);
        self.avg_fps = moving_avg(self.avg_fps, self.frames, fps);
        self.frames += 1;

        if now - start < self.interval {
            return None;
        }

        let metrics = FrameMetrics {
            avg_frame_time: self.avg_frame_time,
            max_frame_time: self.max_frame_time,
            avg_fps: self.avg_fps,
            min_fps: self.min_fps,
            frames: self.frames,
        };

        self.frames = 0;
        self.window_start = Some(now);

        Some(metrics)
    }

    /// Frames accumulated in the open window.
    pub fn pending_frames(&self) -> usize {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_once_per_window() {
        let mut sampler = PerfSampler::new(1.0);

        let mut now = 0.0;
        let mut emitted = Vec::new();
        for _ in 0..10 {
            now += 0.25;
            if let Some(m) = sampler.record(now, 0.25) {
                emitted.push(m);
            }
        }

        // Window opens at 0.25, closes at 1.25, 2.25.
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].frames, 5);
        assert_eq!(emitted[1].frames, 4);
        assert_eq!(sampler.pending_frames(), 1);
    }

    #[test]
    fn aggregates_mean_max_and_min() {
        let mut sampler = PerfSampler::new(0.5);

        assert_eq!(sampler.record(0.1, 0.1), None);
        assert_eq!(sampler.record(0.3, 0.2), None);
        let m = sampler.record(0.7, 0.4).unwrap();

        assert_eq!(m.frames, 3);
        assert!((m.avg_frame_time - 0.7 / 3.0).abs() < 1e-12);
        assert_eq!(m.max_frame_time, 0.4);
        assert!((m.avg_fps - (10.0 + 5.0 + 2.5) / 3.0).abs() < 1e-9);
        assert_eq!(m.min_fps, 2.5);
    }

    #[test]
    fn zero_frame_time_is_skipped() {
        let mut sampler = PerfSampler::new(0.0);
        assert_eq!(sampler.record(1.0, 0.0), None);
        assert_eq!(sampler.pending_frames(), 0);

        let m = sampler.record(1.0, 0.5).unwrap();
        assert_eq!(m.frames, 1);
        assert_eq!(m.avg_fps, 2.0);
    }

    #[test]
    fn new_window_reseeds_statistics() {
        let mut sampler = PerfSampler::new(0.0);
        let first = sampler.record(1.0, 1.0).unwrap();
        let second = sampler.record(1.1, 0.1).unwrap();

        assert_eq!(first.max_frame_time, 1.0);
        assert_eq!(second.max_frame_time, 0.1);
        assert_eq!(second.avg_frame_time, 0.1);
        assert_eq!(second.min_fps, 10.0);
    }
}
