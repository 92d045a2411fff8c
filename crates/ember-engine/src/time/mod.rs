//! Time subsystem.
//!
//! Frame timing utilities that do not depend on the platform clock:
//! - `FrameClock` turns backend timestamps into per-iteration `dt`
//! - `FramePacer` computes how long to wait when vsync is disabled

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::{sleep_precise, FramePacer};
