use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{Action, InputEvent, Key, Modifiers, MouseButton, MousePosition};
use crate::platform::{PlatformEvent, Size};

/// Translates winit `WindowEvent`s into `PlatformEvent`s.
///
/// winit reports modifiers as a separate event; the translator remembers the
/// last set and stamps it onto key and button events.
#[derive(Debug, Default)]
pub(crate) struct Translator {
    modifiers: Modifiers,
}

impl Translator {
    /// Appends zero or more platform events for `event` to `out`.
    ///
    /// `scale_factor` and `inner_size` describe the window at the time the event
    /// is handled; they convert physical positions into window coordinates.
    pub(crate) fn translate(
        &mut self,
        event: &WindowEvent,
        scale_factor: f64,
        inner_size: PhysicalSize<u32>,
        out: &mut Vec<PlatformEvent>,
    ) {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m.state());
            }

            WindowEvent::Focused(focused) => out.push(PlatformEvent::FocusChanged(*focused)),

            WindowEvent::CloseRequested => out.push(PlatformEvent::CloseRequested),

            WindowEvent::Resized(size) => resize_events(*size, scale_factor, out),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                resize_events(inner_size, *scale_factor, out)
            }

            WindowEvent::CursorMoved { position, .. } => {
                let position = to_window_coords(*position, scale_factor);
                out.push(PlatformEvent::Input(InputEvent::MouseMove(position)));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                out.push(PlatformEvent::Input(InputEvent::MouseButton {
                    button: map_mouse_button(*button),
                    action: map_action(*state, false),
                    modifiers: self.modifiers,
                }));
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x as f64, *y as f64),
                    MouseScrollDelta::PixelDelta(p) => {
                        let logical = to_window_coords(*p, scale_factor);
                        (logical.x, logical.y)
                    }
                };
                out.push(PlatformEvent::Input(InputEvent::Scroll { x, y }));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                out.push(PlatformEvent::Input(InputEvent::Key {
                    key: map_key(event.physical_key),
                    action: map_action(event.state, event.repeat),
                    modifiers: self.modifiers,
                }));
            }

            _ => {}
        }
    }
}

/// Emits the window (logical) and frame-buffer (physical) sizes for a resize.
fn resize_events(physical: PhysicalSize<u32>, scale_factor: f64, out: &mut Vec<PlatformEvent>) {
    let logical = physical.to_logical::<u32>(scale_factor);
    out.push(PlatformEvent::WindowResized(Size::new(logical.width, logical.height)));
    out.push(PlatformEvent::FramebufferResized(Size::new(
        physical.width,
        physical.height,
    )));
}

fn to_window_coords(pos: PhysicalPosition<f64>, scale_factor: f64) -> MousePosition {
    let logical = pos.to_logical::<f64>(scale_factor);
    MousePosition::new(logical.x, logical.y)
}

fn map_action(state: ElementState, repeat: bool) -> Action {
    match (state, repeat) {
        (ElementState::Pressed, true) => Action::Repeat,
        (ElementState::Pressed, false) => Action::Press,
        (ElementState::Released, _) => Action::Release,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        super_key: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        // NativeKeyCode has no stable numeric form in winit 0.30.
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,

        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Super,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_flag_maps_to_repeat_action() {
        assert_eq!(map_action(ElementState::Pressed, false), Action::Press);
        assert_eq!(map_action(ElementState::Pressed, true), Action::Repeat);
        assert_eq!(map_action(ElementState::Released, true), Action::Release);
    }

    #[test]
    fn known_and_unknown_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyA)), Key::A);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)), Key::Shift);
        assert!(matches!(
            map_key(PhysicalKey::Code(KeyCode::NumpadAdd)),
            Key::Unknown(_)
        ));
    }

    #[test]
    fn resize_reports_logical_window_and_physical_framebuffer() {
        let mut out = Vec::new();
        resize_events(PhysicalSize::new(1600, 1200), 2.0, &mut out);

        assert_eq!(
            out,
            vec![
                PlatformEvent::WindowResized(Size::new(800, 600)),
                PlatformEvent::FramebufferResized(Size::new(1600, 1200)),
            ]
        );
    }

    #[test]
    fn cursor_positions_are_scaled_to_window_coords() {
        let pos = to_window_coords(PhysicalPosition::new(10.0, 30.0), 2.0);
        assert_eq!(pos, MousePosition::new(5.0, 15.0));
    }
}
