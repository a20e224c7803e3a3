use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state of the window: held keys and buttons, pointer position.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Logical pixels; `None` while the pointer is outside the window.
    pub pointer_pos: Option<Vec2>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies `ev` and records transitions into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases can be lost while unfocused.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(p) => self.pointer_pos = Some(*p),

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos }) => {
                self.pointer_pos = Some(*pos);
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            pos: Vec2::new(x, y),
        })
    }

    #[test]
    fn press_and_release_in_one_frame_keep_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 1.0, 2.0));
        state.apply_event(&mut frame, button(MouseButtonState::Released, 1.0, 2.0));

        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert_eq!(frame.events.len(), 2);
        assert!(matches!(
            frame.events[0],
            InputEvent::PointerButton(PointerButtonEvent { state: MouseButtonState::Pressed, .. })
        ));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn button_event_updates_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 5.0, 6.0));
        assert_eq!(state.pointer_pos, Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(3.0, 3.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn focus_loss_drops_held_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 0.0, 0.0));
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Space, state: KeyState::Pressed, repeat: false },
        );
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
        assert!(!state.key_down(Key::Space));
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let press = InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, repeat: false };
        state.apply_event(&mut frame, press.clone());
        frame.clear();
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, repeat: true },
        );
        assert!(!frame.key_pressed(Key::Escape));
    }
}
