//! Core engine-facing contracts.
//!
//! Defines the interface between the window loop and the application: the
//! lifecycle/input hook trait and the context handed to every callback.

mod app;
mod ctx;

pub use app::Application;
pub use ctx::Context;
