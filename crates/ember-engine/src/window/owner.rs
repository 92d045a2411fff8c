use crate::core::{Application, Context};
use crate::error::WindowError;
use crate::input;
use crate::perf::{PerfLog, PerfSampler};
use crate::platform::{Backend, PlatformEvent, WinitBackend};
use crate::time::{FrameClock, FramePacer};

use super::config::WindowConfig;

/// Owns the native surface, the graphics context and the frame loop.
///
/// One application hook is bound at construction and driven until the loop
/// ends. Native resources live in the backend and are released when the
/// window is dropped, including while unwinding from a panicking callback.
pub struct Window<B: Backend, A: Application<B>> {
    ctx: Context<B>,
    app: A,
    clock: FrameClock,
    sampler: PerfSampler,
    pacer: FramePacer,
    ran: bool,
}

impl<A> Window<WinitBackend, A>
where
    A: Application<WinitBackend>,
{
    /// Opens a native window and graphics context for `app`.
    pub fn new(config: WindowConfig, app: A) -> Result<Self, WindowError> {
        config.validate()?;
        let backend = WinitBackend::new(&config).map_err(WindowError::Context)?;
        Self::with_backend(backend, config, app)
    }
}

impl<B, A> Window<B, A>
where
    B: Backend,
    A: Application<B>,
{
    /// Binds `app` to an already-created backend.
    pub fn with_backend(backend: B, config: WindowConfig, app: A) -> Result<Self, WindowError> {
        config.validate()?;

        let sampler = PerfSampler::new(config.perf_sample_interval);
        let pacer = FramePacer::new(config.update_frequency);
        let ctx = Context::new(backend, config);

        log::info!(
            "window ready: {}x{} (framebuffer {}x{}), vsync={}",
            ctx.window_width(),
            ctx.window_height(),
            ctx.framebuffer_width(),
            ctx.framebuffer_height(),
            ctx.config().vsync,
        );

        Ok(Self {
            ctx,
            app,
            clock: FrameClock::new(),
            sampler,
            pacer,
            ran: false,
        })
    }

    /// Runs the frame loop on the calling thread until quit or close.
    ///
    /// `shutdown` is invoked exactly once on every non-panicking exit path.
    /// Errors from `init`, `update` and `render` are returned unchanged in kind.
    pub fn run(&mut self) -> Result<(), WindowError> {
        if self.ran {
            return Err(WindowError::AlreadyRan);
        }
        self.ran = true;

        let result = self.drive();

        self.app.shutdown(&mut self.ctx);
        match &result {
            Ok(()) => log::info!("frame loop finished after {} frames", self.clock.frame_index()),
            Err(e) => log::error!("frame loop aborted: {e}"),
        }
        if self.sampler.pending_frames() > 0 {
            log::debug!(
                "discarded {} frames from the open perf window",
                self.sampler.pending_frames()
            );
        }

        result
    }

    /// Stops the loop after the current frame. Idempotent.
    pub fn quit(&mut self) {
        self.ctx.quit();
    }

    pub fn window_width(&self) -> u32 {
        self.ctx.window_width()
    }

    pub fn window_height(&self) -> u32 {
        self.ctx.window_height()
    }

    pub fn framebuffer_width(&self) -> u32 {
        self.ctx.framebuffer_width()
    }

    pub fn framebuffer_height(&self) -> u32 {
        self.ctx.framebuffer_height()
    }

    pub fn input(&self) -> &input::InputState {
        self.ctx.input()
    }

    pub fn perf_log(&self) -> &PerfLog {
        self.ctx.perf_log()
    }

    pub fn time(&self) -> f64 {
        self.ctx.time()
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.ctx.set_cursor_visible(visible);
    }

    pub fn config(&self) -> &WindowConfig {
        self.ctx.config()
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    fn drive(&mut self) -> Result<(), WindowError> {
        self.app.init(&mut self.ctx).map_err(WindowError::Init)?;
        log::debug!("application initialized");

        let mut events = Vec::new();
        self.clock.reset(self.ctx.time());

        while !self.ctx.is_quit_requested() {
            let frame_start = self.ctx.time();
            let ft = self.clock.tick(frame_start);

            self.ctx
                .backend
                .poll_events(&mut events)
                .map_err(WindowError::Platform)?;
            for event in events.drain(..) {
                self.handle_event(event);
            }

            self.app
                .update(&mut self.ctx, ft.dt)
                .map_err(WindowError::Callback)?;
            self.app
                .render(&mut self.ctx, ft.dt)
                .map_err(WindowError::Callback)?;
            let presented = self.ctx.backend.present().map_err(WindowError::Platform)?;

            let now = self.ctx.time();
            if let Some(metrics) = self.sampler.record(now, ft.dt) {
                log::debug!("perf: {metrics}");
                self.ctx.perf_log.push(metrics);
            }

            // Vsync only throttles frames that actually reach the display.
            if !self.ctx.config.vsync || !presented {
                if let Some(wait) = self.pacer.remaining(frame_start, now) {
                    self.ctx.backend.sleep(wait);
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: PlatformEvent) {
        let (app, ctx) = (&mut self.app, &mut self.ctx);

        match event {
            PlatformEvent::Input(ev) => input::dispatch(app, ctx, ev),

            PlatformEvent::WindowResized(size) => {
                if ctx.set_window_size(size) {
                    app.on_window_resize(ctx, size.width, size.height);
                }
            }

            PlatformEvent::FramebufferResized(size) => {
                if ctx.set_framebuffer_size(size) {
                    log::debug!("framebuffer resized to {}x{}", size.width, size.height);
                    app.on_frame_buffer_resize(ctx, size.width, size.height);
                }
            }

            PlatformEvent::FocusChanged(focused) => {
                if !focused {
                    ctx.input.release_all();
                }
            }

            PlatformEvent::CloseRequested => {
                log::info!("close requested");
                ctx.quit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};

    use super::*;
    use crate::input::{Action, InputEvent, Key, Modifiers, MouseButton, MousePosition};
    use crate::platform::scripted::{Call, Journal, ScriptedBackend};
    use crate::platform::Size;

    /// Hook that writes every callback into the shared journal.
    #[derive(Default)]
    struct Recorder {
        journal: Journal,
        fail_init: bool,
        quit_on_update: Option<usize>,
        quit_on_key: Option<Key>,
        fail_update_on: Option<usize>,
        fail_render_on: Option<usize>,
        updates: usize,
        renders: usize,
        framebuffer_seen_in_update: Vec<Size>,
    }

    impl Recorder {
        fn new(journal: &Journal) -> Self {
            Self {
                journal: journal.clone(),
                ..Self::default()
            }
        }

        fn push(&self, call: Call) {
            self.journal.borrow_mut().push(call);
        }
    }

    impl Application<ScriptedBackend> for Recorder {
        fn init(&mut self, _ctx: &mut Context<ScriptedBackend>) -> Result<()> {
            self.push(Call::Init);
            if self.fail_init {
                return Err(anyhow!("shader failed to compile"));
            }
            Ok(())
        }

        fn update(&mut self, ctx: &mut Context<ScriptedBackend>, dt: f64) -> Result<()> {
            self.push(Call::Update(dt));
            self.framebuffer_seen_in_update.push(ctx.framebuffer_size());
            if self.quit_on_update == Some(self.updates) {
                ctx.quit();
            }
            if self.fail_update_on == Some(self.updates) {
                return Err(anyhow!("simulation diverged"));
            }
            self.updates += 1;
            Ok(())
        }

        fn render(&mut self, _ctx: &mut Context<ScriptedBackend>, dt: f64) -> Result<()> {
            self.push(Call::Render(dt));
            if self.fail_render_on == Some(self.renders) {
                return Err(anyhow!("draw failed"));
            }
            self.renders += 1;
            Ok(())
        }

        fn shutdown(&mut self, _ctx: &mut Context<ScriptedBackend>) {
            self.push(Call::Shutdown);
        }

        fn on_window_resize(&mut self, _ctx: &mut Context<ScriptedBackend>, w: u32, h: u32) {
            self.push(Call::WindowResize(w, h));
        }

        fn on_frame_buffer_resize(&mut self, _ctx: &mut Context<ScriptedBackend>, w: u32, h: u32) {
            self.push(Call::FramebufferResize(w, h));
        }

        fn on_key(
            &mut self,
            ctx: &mut Context<ScriptedBackend>,
            key: Key,
            action: Action,
            _modifiers: Modifiers,
        ) {
            self.push(Call::Key(key, action, ctx.input().key_down(key)));
            if self.quit_on_key == Some(key) {
                ctx.quit();
            }
        }

        fn on_mouse_move(&mut self, _ctx: &mut Context<ScriptedBackend>, p: MousePosition) {
            self.push(Call::MouseMove(p.x, p.y));
        }

        fn on_mouse_button(
            &mut self,
            _ctx: &mut Context<ScriptedBackend>,
            button: MouseButton,
            action: Action,
            _modifiers: Modifiers,
        ) {
            self.push(Call::MouseButton(button, action));
        }

        fn on_mouse_scroll(&mut self, _ctx: &mut Context<ScriptedBackend>, x: f64, y: f64) {
            self.push(Call::Scroll(x, y));
        }
    }

    fn config() -> WindowConfig {
        WindowConfig::new("test", 640, 480)
    }

    fn key(key: Key, action: Action) -> PlatformEvent {
        PlatformEvent::Input(InputEvent::Key {
            key,
            action,
            modifiers: Modifiers::default(),
        })
    }

    fn window(backend: ScriptedBackend, app: Recorder) -> Window<ScriptedBackend, Recorder> {
        Window::with_backend(backend, config(), app).expect("valid config")
    }

    fn frame_calls(journal: &Journal) -> Vec<Call> {
        journal
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Poll | Call::Update(_) | Call::Render(_) | Call::Present))
            .cloned()
            .collect()
    }

    // ── dimensions ────────────────────────────────────────────────────────

    #[test]
    fn sizes_match_construction_without_resize_events() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(5);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        assert_eq!(win.app().updates, 5);
        assert_eq!((win.window_width(), win.window_height()), (640, 480));
        assert_eq!((win.framebuffer_width(), win.framebuffer_height()), (640, 480));
        assert!(
            win.app()
                .framebuffer_seen_in_update
                .iter()
                .all(|s| *s == Size::new(640, 480))
        );
    }

    #[test]
    fn framebuffer_resize_updates_cache_and_notifies_once() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame(vec![PlatformEvent::FramebufferResized(Size::new(1280, 960))])
            .with_idle_frames(1);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        let calls = journal.borrow().clone();
        let resizes: Vec<&Call> = calls
            .iter()
            .filter(|c| matches!(c, Call::FramebufferResize(..)))
            .collect();
        assert_eq!(resizes, vec![&Call::FramebufferResize(1280, 960)]);

        let resize_at = calls
            .iter()
            .position(|c| *c == Call::FramebufferResize(1280, 960))
            .unwrap();
        let first_update = calls.iter().position(|c| matches!(c, Call::Update(_))).unwrap();
        assert!(resize_at < first_update);

        assert_eq!(win.app().framebuffer_seen_in_update[0], Size::new(1280, 960));
        assert_eq!((win.framebuffer_width(), win.framebuffer_height()), (1280, 960));
        // Window size is independent of the drawable size.
        assert_eq!((win.window_width(), win.window_height()), (640, 480));
    }

    #[test]
    fn unchanged_resize_is_not_forwarded() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame(vec![
                PlatformEvent::WindowResized(Size::new(640, 480)),
                PlatformEvent::WindowResized(Size::new(800, 600)),
            ]);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        let resizes: Vec<Call> = journal
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::WindowResize(..)))
            .cloned()
            .collect();
        assert_eq!(resizes, vec![Call::WindowResize(800, 600)]);
        assert_eq!(win.window_width(), 800);
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn quit_during_update_finishes_frame_then_stops() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(10);
        let mut app = Recorder::new(&journal);
        app.quit_on_update = Some(1);
        let mut win = window(backend, app);

        win.run().unwrap();

        let frames = frame_calls(&journal);
        let tail: Vec<Call> = frames[frames.len() - 4..].to_vec();
        assert!(matches!(tail[0], Call::Poll));
        assert!(matches!(tail[1], Call::Update(_)));
        assert!(matches!(tail[2], Call::Render(_)));
        assert!(matches!(tail[3], Call::Present));

        assert_eq!(win.app().updates, 2);
        assert_eq!(win.app().renders, 2);
        assert_eq!(journal.borrow().last(), Some(&Call::Shutdown));
    }

    #[test]
    fn quit_is_idempotent_and_works_from_input() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame(vec![key(Key::Escape, Action::Press), key(Key::Escape, Action::Repeat)])
            .with_idle_frames(10);
        let mut app = Recorder::new(&journal);
        app.quit_on_key = Some(Key::Escape);
        let mut win = window(backend, app);

        win.run().unwrap();

        assert_eq!(win.app().updates, 1);
        assert_eq!(win.app().renders, 1);
    }

    #[test]
    fn close_request_ends_loop_after_frame() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(2)
            .with_frame(vec![PlatformEvent::CloseRequested])
            .with_idle_frames(5);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        assert_eq!(win.app().updates, 3);
        assert_eq!(win.app().renders, 3);
    }

    #[test]
    fn init_failure_skips_frames_but_shuts_down_once() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(3);
        let mut app = Recorder::new(&journal);
        app.fail_init = true;
        let mut win = window(backend, app);

        let err = win.run().unwrap_err();

        assert!(matches!(err, WindowError::Init(_)));
        assert_eq!(*journal.borrow(), vec![Call::Init, Call::Shutdown]);
    }

    #[test]
    fn render_error_propagates_and_still_shuts_down() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(5);
        let mut app = Recorder::new(&journal);
        app.fail_render_on = Some(2);
        let mut win = window(backend, app);

        let err = win.run().unwrap_err();

        assert!(matches!(err, WindowError::Callback(_)));
        assert!(err.to_string().contains("draw failed"));
        let shutdowns = journal
            .borrow()
            .iter()
            .filter(|c| **c == Call::Shutdown)
            .count();
        assert_eq!(shutdowns, 1);
        // The failing frame is never presented.
        let presents = journal.borrow().iter().filter(|c| **c == Call::Present).count();
        assert_eq!(presents, 2);
    }

    #[test]
    fn update_error_skips_render_and_still_shuts_down() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(5);
        let mut app = Recorder::new(&journal);
        app.fail_update_on = Some(1);
        let mut win = window(backend, app);

        let err = win.run().unwrap_err();

        assert!(matches!(err, WindowError::Callback(_)));
        assert!(err.to_string().contains("simulation diverged"));
        assert_eq!(win.app().renders, 1);

        let calls = journal.borrow().clone();
        let failed_at = calls.iter().rposition(|c| matches!(c, Call::Update(_))).unwrap();
        assert_eq!(&calls[failed_at + 1..], &[Call::Shutdown]);
    }

    #[test]
    fn poll_failure_is_a_platform_error() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(5)
            .fail_poll_on(2);
        let mut win = window(backend, Recorder::new(&journal));

        let err = win.run().unwrap_err();

        assert!(matches!(err, WindowError::Platform(_)));
        assert!(err.to_string().contains("display connection lost"));
        assert_eq!(win.app().updates, 2);

        let calls = journal.borrow().clone();
        let last_poll = calls.iter().rposition(|c| *c == Call::Poll).unwrap();
        assert_eq!(&calls[last_poll + 1..], &[Call::Shutdown]);
    }

    #[test]
    fn present_failure_is_a_platform_error() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_idle_frames(5)
            .fail_present_on(0);
        let mut win = window(backend, Recorder::new(&journal));

        let err = win.run().unwrap_err();

        assert!(matches!(err, WindowError::Platform(_)));
        assert!(err.to_string().contains("surface lost"));
        assert_eq!(
            frame_calls(&journal),
            vec![Call::Poll, Call::Update(0.0), Call::Render(0.0), Call::Present]
        );
        let shutdowns = journal
            .borrow()
            .iter()
            .filter(|c| **c == Call::Shutdown)
            .count();
        assert_eq!(shutdowns, 1);
    }

    #[test]
    fn run_twice_is_rejected() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480));
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();
        assert!(matches!(win.run(), Err(WindowError::AlreadyRan)));

        let inits = journal.borrow().iter().filter(|c| **c == Call::Init).count();
        assert_eq!(inits, 1);
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480));
        let result = Window::with_backend(
            backend,
            WindowConfig::new("bad", 0, 480),
            Recorder::new(&journal),
        );

        assert!(matches!(result, Err(WindowError::InvalidConfig(_))));
        assert!(journal.borrow().is_empty());
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn input_burst_is_dispatched_in_order_before_update() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame(vec![
                key(Key::A, Action::Press),
                PlatformEvent::Input(InputEvent::MouseMove(MousePosition::new(5.0, 5.0))),
                key(Key::A, Action::Release),
            ]);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        let calls = journal.borrow().clone();
        assert_eq!(
            &calls[..6],
            &[
                Call::Init,
                Call::Poll,
                Call::Key(Key::A, Action::Press, true),
                Call::MouseMove(5.0, 5.0),
                Call::Key(Key::A, Action::Release, false),
                Call::Update(0.0),
            ]
        );
        assert_eq!(win.input().mouse_position(), MousePosition::new(5.0, 5.0));
        assert!(!win.input().key_down(Key::A));
    }

    #[test]
    fn buttons_and_scroll_reach_the_hook() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame(vec![
                PlatformEvent::Input(InputEvent::MouseButton {
                    button: MouseButton::Left,
                    action: Action::Press,
                    modifiers: Modifiers::default(),
                }),
                PlatformEvent::Input(InputEvent::Scroll { x: 0.0, y: -1.0 }),
            ]);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        let calls = journal.borrow().clone();
        assert!(calls.contains(&Call::MouseButton(MouseButton::Left, Action::Press)));
        assert!(calls.contains(&Call::Scroll(0.0, -1.0)));
        assert!(win.input().button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame(vec![key(Key::W, Action::Press)])
            .with_frame(vec![PlatformEvent::FocusChanged(false)]);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        assert!(!win.input().key_down(Key::W));
    }

    // ── timing & perf ─────────────────────────────────────────────────────

    #[test]
    fn dt_is_elapsed_time_between_frames() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame_duration(0.25)
            .with_idle_frames(3);
        let mut win = window(backend, Recorder::new(&journal));

        win.run().unwrap();

        let dts: Vec<f64> = journal
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Update(dt) => Some(*dt),
                _ => None,
            })
            .collect();
        assert_eq!(dts, vec![0.0, 0.25, 0.25]);
    }

    #[test]
    fn perf_log_collects_windows_and_stays_bounded() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame_duration(0.25)
            .with_idle_frames(40);
        let cfg = config().perf_sample_interval(1.0).perf_log_capacity(3);
        let mut win = Window::with_backend(backend, cfg, Recorder::new(&journal)).unwrap();

        win.run().unwrap();

        let log = win.perf_log();
        assert_eq!(log.len(), 3);
        assert!(log.total_recorded() > 3);
        let latest = log.latest().unwrap();
        assert_eq!(latest.avg_frame_time, 0.25);
        assert_eq!(latest.avg_fps, 4.0);
        assert_eq!(latest.min_fps, 4.0);
    }

    #[test]
    fn pacing_sleeps_only_without_vsync() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame_duration(0.125)
            .with_idle_frames(3);
        let cfg = config().vsync(false).update_frequency(4.0);
        let mut win = Window::with_backend(backend, cfg, Recorder::new(&journal)).unwrap();

        win.run().unwrap();

        let sleeps: Vec<Call> = journal
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Sleep(_)))
            .cloned()
            .collect();
        assert_eq!(sleeps, vec![Call::Sleep(0.125); 3]);

        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame_duration(0.125)
            .with_idle_frames(3);
        let mut win = window(backend, Recorder::new(&journal));
        win.run().unwrap();
        assert!(!journal.borrow().iter().any(|c| matches!(c, Call::Sleep(_))));
    }

    #[test]
    fn skipped_present_paces_even_with_vsync() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480))
            .with_frame_duration(0.125)
            .with_idle_frames(3)
            .without_presents();
        let cfg = config().update_frequency(4.0);
        assert!(cfg.vsync);
        let mut win = Window::with_backend(backend, cfg, Recorder::new(&journal)).unwrap();

        win.run().unwrap();

        let sleeps: Vec<Call> = journal
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Sleep(_)))
            .cloned()
            .collect();
        assert_eq!(sleeps, vec![Call::Sleep(0.125); 3]);
    }

    #[test]
    fn cursor_visibility_reaches_backend() {
        let journal = Journal::default();
        let backend = ScriptedBackend::new(&journal, Size::new(640, 480), Size::new(640, 480));
        let mut win = window(backend, Recorder::new(&journal));

        win.set_cursor_visible(false);

        assert_eq!(*journal.borrow(), vec![Call::CursorVisible(false)]);
    }
}
