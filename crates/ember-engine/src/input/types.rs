use std::fmt;

/// Keyboard key identifier.
///
/// The platform layer maps physical key codes into these variants where possible.
/// Keys without a variant arrive as `Key::Unknown(u32)` carrying the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Super,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform key not represented above.
    Unknown(u32),
}

/// Transition reported for a key or mouse button.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    Press,
    Release,
    /// Key held long enough for the platform to auto-repeat it.
    Repeat,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Modifier keys held while an event was generated.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.super_key
    }
}

/// Cursor position in window coordinates (not frame-buffer pixels).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
}

impl MousePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Device event delivered to the application hook.
///
/// Events are transient: they are applied to `InputState`, dispatched and dropped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        action: Action,
        modifiers: Modifiers,
    },

    MouseMove(MousePosition),

    MouseButton {
        button: MouseButton,
        action: Action,
        modifiers: Modifiers,
    },

    /// Scroll offsets; positive `y` scrolls up/away from the user.
    Scroll { x: f64, y: f64 },
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
