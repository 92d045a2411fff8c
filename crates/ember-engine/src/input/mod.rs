//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Backends translate native events into `InputEvent`s; the window loop folds
//! them into `InputState` and forwards them to the application hook.

mod dispatch;
pub(crate) mod platform;
mod state;
mod types;

pub(crate) use dispatch::dispatch;
pub use state::InputState;
pub use types::{Action, InputEvent, Key, Modifiers, MouseButton, MousePosition};
