use anyhow::Result;

use crate::input::{Action, Key, Modifiers, MouseButton, MousePosition};
use crate::platform::Backend;

use super::ctx::Context;

/// Application contract driven by [`crate::window::Window`].
///
/// Every method has a no-op default; implement only what the application
/// needs. Unhandled input is silently dropped.
///
/// Call order per run:
/// 1. `init` once, before the first frame. An error aborts the run.
/// 2. per frame: input and resize callbacks (0..n), `update` once, `render` once.
/// 3. `shutdown` once after the loop ends, including after `init` or frame errors.
pub trait Application<B: Backend> {
    fn init(&mut self, ctx: &mut Context<B>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Simulation step. `dt` is the wall-clock seconds since the previous frame.
    fn update(&mut self, ctx: &mut Context<B>, dt: f64) -> Result<()> {
        let _ = (ctx, dt);
        Ok(())
    }

    /// Produces the frame; presentation follows immediately after.
    fn render(&mut self, ctx: &mut Context<B>, dt: f64) -> Result<()> {
        let _ = (ctx, dt);
        Ok(())
    }

    fn shutdown(&mut self, ctx: &mut Context<B>) {
        let _ = ctx;
    }

    /// Window size changed (window coordinates).
    fn on_window_resize(&mut self, ctx: &mut Context<B>, width: u32, height: u32) {
        let _ = (ctx, width, height);
    }

    /// Drawable size changed (pixels). Usually where viewports and depth
    /// buffers get rebuilt.
    fn on_frame_buffer_resize(&mut self, ctx: &mut Context<B>, width: u32, height: u32) {
        let _ = (ctx, width, height);
    }

    fn on_key(&mut self, ctx: &mut Context<B>, key: Key, action: Action, modifiers: Modifiers) {
        let _ = (ctx, key, action, modifiers);
    }

    fn on_mouse_move(&mut self, ctx: &mut Context<B>, position: MousePosition) {
        let _ = (ctx, position);
    }

    fn on_mouse_button(
        &mut self,
        ctx: &mut Context<B>,
        button: MouseButton,
        action: Action,
        modifiers: Modifiers,
    ) {
        let _ = (ctx, button, action, modifiers);
    }

    fn on_mouse_scroll(&mut self, ctx: &mut Context<B>, x: f64, y: f64) {
        let _ = (ctx, x, y);
    }
}
