//! Window/context owner and frame loop.
//!
//! `Window` binds one `Application` to one `Backend` and drives
//! poll → update → render → present until quit or close.

mod config;
mod owner;

pub use config::{ContextVersion, WindowConfig};
pub use owner::Window;
