use anyhow::Result;

use crate::input::InputEvent;
use crate::time::sleep_precise;

/// Width/height pair.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Event reported by the native layer during a poll.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlatformEvent {
    Input(InputEvent),

    /// Window size in window coordinates.
    WindowResized(Size),

    /// Drawable size in pixels.
    FramebufferResized(Size),

    FocusChanged(bool),

    /// The user or the OS asked the window to close.
    CloseRequested,
}

/// Native surface + graphics context owned by a [`crate::window::Window`].
///
/// Implementations release every native resource on drop.
pub trait Backend {
    /// Drains all pending native events into `out`, in the order the platform
    /// reported them.
    fn poll_events(&mut self, out: &mut Vec<PlatformEvent>) -> Result<()>;

    /// Presents the current frame, blocking on vsync when it is enabled.
    ///
    /// Returns `false` when no frame could be presented (minimized window,
    /// skipped surface frame); the loop then paces itself instead.
    fn present(&mut self) -> Result<bool>;

    /// Window size in window coordinates.
    fn window_size(&self) -> Size;

    /// Drawable size in pixels.
    fn framebuffer_size(&self) -> Size;

    /// Monotonic seconds since the backend was created.
    fn time(&self) -> f64;

    fn set_cursor_visible(&mut self, visible: bool);

    /// Blocks the loop thread for `seconds`.
    fn sleep(&mut self, seconds: f64) {
        sleep_precise(seconds);
    }
}
