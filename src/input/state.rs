//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad (gilrs) input, combining them
//! into one `FrameInput` per rendered frame.

use macroquad::prelude::*;
use super::{button, Action, FrameInput, Gamepad};

/// Stick deflection that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame. Held actions report `is_down`, one-shot
    /// actions report presses that happened since the previous frame.
    pub fn poll(&mut self) -> FrameInput {
        self.gamepad.poll();

        let mut input = FrameInput::default();
        for action in Action::ALL {
            let active = if action.is_one_shot() {
                self.keyboard_pressed(action) || self.gamepad_pressed(action)
            } else {
                self.keyboard_down(action) || self.gamepad_down(action)
            };
            input.set(action, active);
        }
        input
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            _ => false,
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => {
                is_key_pressed(KeyCode::Space)
                    || is_key_pressed(KeyCode::Up)
                    || is_key_pressed(KeyCode::W)
            }
            Action::Confirm => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
            Action::Quit => is_key_pressed(KeyCode::Escape),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        let stick = self.gamepad.left_stick();

        match action {
            Action::MoveLeft => {
                self.gamepad.is_button_down(button::DPAD_LEFT) || stick.x < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                self.gamepad.is_button_down(button::DPAD_RIGHT) || stick.x > STICK_THRESHOLD
            }
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }

        match action {
            Action::Jump => {
                self.gamepad.is_button_pressed(button::A)
                    || self.gamepad.is_button_pressed(button::DPAD_UP)
            }
            Action::Confirm => self.gamepad.is_button_pressed(button::START),
            Action::Quit => self.gamepad.is_button_pressed(button::SELECT),
            _ => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
