use crate::core::{Application, Context};
use crate::platform::Backend;

use super::types::InputEvent;

/// Applies `event` to the context's input state, then hands it to the hook.
///
/// Runs inline on the loop thread. The state update happens first so the hook
/// observes a state that already includes the event it is handling.
pub(crate) fn dispatch<B, A>(app: &mut A, ctx: &mut Context<B>, event: InputEvent)
where
    B: Backend,
    A: Application<B> + ?Sized,
{
    ctx.input.apply(&event);

    match event {
        InputEvent::Key {
            key,
            action,
            modifiers,
        } => app.on_key(ctx, key, action, modifiers),

        InputEvent::MouseMove(position) => app.on_mouse_move(ctx, position),

        InputEvent::MouseButton {
            button,
            action,
            modifiers,
        } => app.on_mouse_button(ctx, button, action, modifiers),

        InputEvent::Scroll { x, y } => app.on_mouse_scroll(ctx, x, y),
    }
}
