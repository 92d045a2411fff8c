//! Ember engine crate.
//!
//! A window owner that drives a variable-timestep loop and forwards input,
//! resize and frame callbacks to an [`Application`].

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod perf;
pub mod platform;
pub mod time;
pub mod window;

mod error;

pub use crate::core::{Application, Context};
pub use crate::error::WindowError;
pub use crate::platform::{Backend, WinitBackend};
pub use crate::window::{ContextVersion, Window, WindowConfig};
