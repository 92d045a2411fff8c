use crate::input::InputState;
use crate::perf::PerfLog;
use crate::platform::{Backend, Size};
use crate::window::WindowConfig;

/// Window state shared with the application during callbacks.
///
/// Owned by [`crate::window::Window`]; every hook method receives it mutably.
/// Cached sizes change only while events are dispatched on the loop thread.
pub struct Context<B> {
    pub(crate) backend: B,
    pub(crate) config: WindowConfig,
    pub(crate) window_size: Size,
    pub(crate) framebuffer_size: Size,
    pub(crate) input: InputState,
    pub(crate) perf_log: PerfLog,
    pub(crate) quit_requested: bool,
}

impl<B: Backend> Context<B> {
    pub(crate) fn new(backend: B, config: WindowConfig) -> Self {
        let window_size = backend.window_size();
        let framebuffer_size = backend.framebuffer_size();
        let perf_log = PerfLog::with_capacity(config.perf_log_capacity);

        Self {
            backend,
            config,
            window_size,
            framebuffer_size,
            input: InputState::default(),
            perf_log,
            quit_requested: false,
        }
    }

    /// Stops the loop once the current frame has been presented.
    ///
    /// Idempotent; safe to call from any callback.
    pub fn quit(&mut self) {
        if !self.quit_requested {
            log::debug!("quit requested");
        }
        self.quit_requested = true;
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn window_width(&self) -> u32 {
        self.window_size.width
    }

    pub fn window_height(&self) -> u32 {
        self.window_size.height
    }

    pub fn framebuffer_width(&self) -> u32 {
        self.framebuffer_size.width
    }

    pub fn framebuffer_height(&self) -> u32 {
        self.framebuffer_size.height
    }

    pub fn window_size(&self) -> Size {
        self.window_size
    }

    pub fn framebuffer_size(&self) -> Size {
        self.framebuffer_size
    }

    /// Drawable aspect ratio, guarding against a minimized (0-height) surface.
    pub fn aspect_ratio(&self) -> f32 {
        self.framebuffer_size.width as f32 / self.framebuffer_size.height.max(1) as f32
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn perf_log(&self) -> &PerfLog {
        &self.perf_log
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Current backend time in seconds.
    pub fn time(&self) -> f64 {
        self.backend.time()
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.backend.set_cursor_visible(visible);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable backend access, e.g. to record draw commands for the frame.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Stores a new window size; returns whether it differed.
    pub(crate) fn set_window_size(&mut self, size: Size) -> bool {
        let changed = self.window_size != size;
        self.window_size = size;
        changed
    }

    /// Stores a new drawable size; returns whether it differed.
    pub(crate) fn set_framebuffer_size(&mut self, size: Size) -> bool {
        let changed = self.framebuffer_size != size;
        self.framebuffer_size = size;
        changed
    }
}
