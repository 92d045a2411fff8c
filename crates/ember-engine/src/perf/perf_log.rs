use std::collections::VecDeque;
use std::fmt;

/// Frame statistics aggregated over one sampling window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMetrics {
    /// Mean frame time, seconds.
    pub avg_frame_time: f64,
    /// Longest frame time, seconds.
    pub max_frame_time: f64,
    /// Mean of the per-frame fps values.
    pub avg_fps: f64,
    /// Lowest per-frame fps value.
    pub min_fps: f64,
    /// Number of frames in the window.
    pub frames: usize,
}

impl fmt::Display for FrameMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg {:.2} ms, max {:.2} ms, avg {:.1} fps, min {:.1} fps over {} frames",
            self.avg_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.avg_fps,
            self.min_fps,
            self.frames,
        )
    }
}

/// Fixed-capacity history of `FrameMetrics`.
///
/// Pushing into a full log evicts the oldest record, so memory stays bounded
/// for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct PerfLog {
    records: VecDeque<FrameMetrics>,
    capacity: usize,
    total: u64,
}

impl PerfLog {
    /// `capacity` is clamped to at least one record.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    pub fn push(&mut self, metrics: FrameMetrics) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(metrics);
        self.total += 1;
    }

    /// Most recent record.
    pub fn latest(&self) -> Option<&FrameMetrics> {
        self.records.back()
    }

    /// Retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &FrameMetrics> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records pushed since creation, including evicted ones.
    pub fn total_recorded(&self) -> u64 {
        self.total
    }
}
