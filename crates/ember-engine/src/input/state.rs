use std::collections::HashSet;

use super::types::{Action, InputEvent, Key, Modifiers, MouseButton, MousePosition};

/// Point-in-time input state for one window.
///
/// Reflects the last processed event only; no history is kept.
#[derive(Debug, Default)]
pub struct InputState {
    modifiers: Modifiers,
    mouse_position: MousePosition,
    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds a single event into the current state.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key {
                key,
                action,
                modifiers,
            } => {
                self.modifiers = modifiers;
                match action {
                    Action::Press | Action::Repeat => {
                        self.keys_down.insert(key);
                    }
                    Action::Release => {
                        self.keys_down.remove(&key);
                    }
                }
            }

            InputEvent::MouseMove(position) => {
                self.mouse_position = position;
            }

            InputEvent::MouseButton {
                button,
                action,
                modifiers,
            } => {
                self.modifiers = modifiers;
                match action {
                    Action::Press | Action::Repeat => {
                        self.buttons_down.insert(button);
                    }
                    Action::Release => {
                        self.buttons_down.remove(&button);
                    }
                }
            }

            InputEvent::Scroll { .. } => {}
        }
    }

    /// Drops every held key and button.
    ///
    /// Called on focus loss so a release delivered to another window does not
    /// leave keys stuck down here.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
        self.modifiers = Modifiers::default();
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn mouse_position(&self) -> MousePosition {
        self.mouse_position
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
