use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{anyhow, Result};

use crate::input::{Action, Key, MouseButton};

use super::{Backend, PlatformEvent, Size};

/// Everything observable from a test run, in call order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Init,
    Update(f64),
    Render(f64),
    Shutdown,
    WindowResize(u32, u32),
    FramebufferResize(u32, u32),
    /// Key, action, and whether the key reads as down inside the callback.
    Key(Key, Action, bool),
    MouseMove(f64, f64),
    MouseButton(MouseButton, Action),
    Scroll(f64, f64),

    Poll,
    Present,
    Sleep(f64),
    CursorVisible(bool),
}

pub(crate) type Journal = Rc<RefCell<Vec<Call>>>;

/// Backend that replays one scripted event batch per poll on a virtual clock.
///
/// The poll that hands out the last batch also reports a close request, so a
/// script of N batches runs exactly N frames. Each present advances the clock
/// by the configured frame duration; sleeps advance it by the slept amount.
pub(crate) struct ScriptedBackend {
    journal: Journal,
    frames: VecDeque<Vec<PlatformEvent>>,
    window_size: Size,
    framebuffer_size: Size,
    now: f64,
    frame_duration: f64,
    presenting: bool,
    fail_poll_on: Option<usize>,
    fail_present_on: Option<usize>,
    polls: usize,
    presents: usize,
}

impl ScriptedBackend {
    pub(crate) fn new(journal: &Journal, window_size: Size, framebuffer_size: Size) -> Self {
        Self {
            journal: journal.clone(),
            frames: VecDeque::new(),
            window_size,
            framebuffer_size,
            now: 0.0,
            frame_duration: 0.0,
            presenting: true,
            fail_poll_on: None,
            fail_present_on: None,
            polls: 0,
            presents: 0,
        }
    }

    pub(crate) fn with_frame(mut self, events: Vec<PlatformEvent>) -> Self {
        self.frames.push_back(events);
        self
    }

    pub(crate) fn with_idle_frames(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_with(Vec::new).take(count));
        self
    }

    pub(crate) fn with_frame_duration(mut self, seconds: f64) -> Self {
        self.frame_duration = seconds;
        self
    }

    /// Reports every present as skipped, like a minimized window.
    pub(crate) fn without_presents(mut self) -> Self {
        self.presenting = false;
        self
    }

    /// Fails the poll with zero-based index `index`.
    pub(crate) fn fail_poll_on(mut self, index: usize) -> Self {
        self.fail_poll_on = Some(index);
        self
    }

    /// Fails the present with zero-based index `index`.
    pub(crate) fn fail_present_on(mut self, index: usize) -> Self {
        self.fail_present_on = Some(index);
        self
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl Backend for ScriptedBackend {
    fn poll_events(&mut self, out: &mut Vec<PlatformEvent>) -> Result<()> {
        self.record(Call::Poll);
        let index = self.polls;
        self.polls += 1;
        if self.fail_poll_on == Some(index) {
            return Err(anyhow!("display connection lost"));
        }

        if let Some(batch) = self.frames.pop_front() {
            out.extend(batch);
        }
        if self.frames.is_empty() {
            out.push(PlatformEvent::CloseRequested);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<bool> {
        self.record(Call::Present);
        let index = self.presents;
        self.presents += 1;
        if self.fail_present_on == Some(index) {
            return Err(anyhow!("surface lost"));
        }

        self.now += self.frame_duration;
        Ok(self.presenting)
    }

    fn window_size(&self) -> Size {
        self.window_size
    }

    fn framebuffer_size(&self) -> Size {
        self.framebuffer_size
    }

    fn time(&self) -> f64 {
        self.now
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.record(Call::CursorVisible(visible));
    }

    fn sleep(&mut self, seconds: f64) {
        self.record(Call::Sleep(seconds));
        self.now += seconds;
    }
}
