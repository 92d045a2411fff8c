//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Adapter/Device/Queue with limits matching the context request
//! - creating & configuring the Surface (swapchain) and optional MSAA target
//! - acquiring frames and providing encoders/views for rendering

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::{FrameTarget, GpuFrame};
pub use gpu::Gpu;
pub use init::{GpuInit, LimitTier};
pub use surface::SurfaceErrorAction;
