//! Native windowing/graphics collaborators.
//!
//! The window loop only talks to the platform through [`Backend`]. The real
//! implementation drives winit + wgpu; tests substitute a scripted backend.

mod backend;
#[cfg(test)]
pub(crate) mod scripted;
mod winit;

pub use backend::{Backend, PlatformEvent, Size};
pub use self::winit::WinitBackend;
