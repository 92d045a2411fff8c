//! Frame performance sampling.
//!
//! Each frame time is folded into a running window; when the window elapses a
//! `FrameMetrics` record is appended to a bounded `PerfLog`.

mod moving_avg;
mod perf_log;
mod sampler;

pub use moving_avg::moving_avg;
pub use perf_log::{FrameMetrics, PerfLog};
pub use sampler::PerfSampler;
