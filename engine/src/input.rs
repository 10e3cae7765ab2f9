use std::collections::HashSet;

use winit::{event::ElementState, keyboard::KeyCode};

/// Keyboard state as seen by a scene during one frame.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one key event. Auto-repeat presses are ignored for edge detection.
    pub fn record(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if self.held.insert(key) && !repeat {
                    self.pressed.insert(key);
                }
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// True if the key went down since the last `end_frame`.
    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forgets held keys, e.g. when the window loses focus and release
    /// events would never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_reported_for_one_frame_only() {
        let mut input = InputState::new();
        input.record(KeyCode::Space, ElementState::Pressed, false);

        assert!(input.was_pressed(KeyCode::Space));
        assert!(input.is_held(KeyCode::Space));

        input.end_frame();
        assert!(!input.was_pressed(KeyCode::Space));
        assert!(input.is_held(KeyCode::Space));
    }

    #[test]
    fn repeat_does_not_count_as_a_new_press() {
        let mut input = InputState::new();
        input.record(KeyCode::ArrowLeft, ElementState::Pressed, false);
        input.end_frame();
        input.record(KeyCode::ArrowLeft, ElementState::Pressed, true);

        assert!(!input.was_pressed(KeyCode::ArrowLeft));
        assert!(input.is_held(KeyCode::ArrowLeft));
    }

    #[test]
    fn release_clears_held() {
        let mut input = InputState::new();
        input.record(KeyCode::ArrowUp, ElementState::Pressed, false);
        input.record(KeyCode::ArrowUp, ElementState::Released, false);

        assert!(!input.is_held(KeyCode::ArrowUp));
        // the press still happened during this frame
        assert!(input.was_pressed(KeyCode::ArrowUp));
    }

    #[test]
    fn release_all_drops_every_held_key() {
        let mut input = InputState::new();
        input.record(KeyCode::ArrowUp, ElementState::Pressed, false);
        input.record(KeyCode::ArrowRight, ElementState::Pressed, false);
        input.release_all();

        assert!(!input.is_held(KeyCode::ArrowUp));
        assert!(!input.is_held(KeyCode::ArrowRight));
    }
}
