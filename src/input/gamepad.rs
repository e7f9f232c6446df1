//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend; the game is keyboard-only in the browser

use macroquad::prelude::Vec2;

// Standard gamepad button indices (Xbox layout, matches the Web Gamepad API)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const SELECT: u32 = 8;      // Back/Select
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Raw state read from the backend for one pad
#[derive(Debug, Clone, Copy, Default)]
struct RawPad {
    buttons: u32,
    stick_x: f32,
    stick_y: f32,
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::RawPad;

    pub struct Backend;

    impl Backend {
        pub fn new() -> Self {
            Backend
        }

        pub fn read(&mut self) -> Option<RawPad> {
            None
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::{button, RawPad};
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Backend {
        gilrs: Option<Gilrs>,
    }

    impl Backend {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        pub fn read(&mut self) -> Option<RawPad> {
            let gilrs = self.gilrs.as_mut()?;
            // Drain events so gilrs updates its cached state
            while gilrs.next_event().is_some() {}

            let (_, gp) = gilrs.gamepads().next()?;
            let mut buttons = 0u32;
            let map = [
                (GilrsButton::South, button::A),
                (GilrsButton::Select, button::SELECT),
                (GilrsButton::Start, button::START),
                (GilrsButton::DPadUp, button::DPAD_UP),
                (GilrsButton::DPadLeft, button::DPAD_LEFT),
                (GilrsButton::DPadRight, button::DPAD_RIGHT),
            ];
            for (gilrs_button, bit) in map {
                if gp.is_pressed(gilrs_button) {
                    buttons |= 1 << bit;
                }
            }

            Some(RawPad {
                buttons,
                stick_x: gp.value(Axis::LeftStickX),
                stick_y: gp.value(Axis::LeftStickY),
            })
        }
    }
}

// ============================================================================
// Shared state
// ============================================================================

/// Current and previous button masks, for press edge detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    current: u32,
    previous: u32,
}

impl ButtonEdges {
    pub fn update(&mut self, mask: u32) {
        self.previous = self.current;
        self.current = mask;
    }

    pub fn is_down(&self, button: u32) -> bool {
        (self.current & (1 << button)) != 0
    }

    /// Down now, up on the previous poll
    pub fn is_pressed(&self, button: u32) -> bool {
        self.is_down(button) && (self.previous & (1 << button)) == 0
    }
}

/// First connected gamepad, polled once per frame
pub struct Gamepad {
    backend: platform::Backend,
    edges: ButtonEdges,
    left_stick: Vec2,
    connected: bool,
    /// Analog stick deadzone (0.0-1.0)
    pub deadzone: f32,
}

impl Gamepad {
    pub fn new() -> Self {
        Self {
            backend: platform::Backend::new(),
            edges: ButtonEdges::default(),
            left_stick: Vec2::ZERO,
            connected: false,
            deadzone: 0.15,
        }
    }

    /// Call once per frame before checking buttons
    pub fn poll(&mut self) {
        let raw = self.backend.read();
        if raw.is_some() != self.connected {
            log::info!("Gamepad {}", if raw.is_some() { "connected" } else { "disconnected" });
        }
        self.connected = raw.is_some();

        let raw = raw.unwrap_or_default();
        self.edges.update(raw.buttons);
        self.left_stick = apply_deadzone(raw.stick_x, raw.stick_y, self.deadzone);
    }

    pub fn has_gamepad(&self) -> bool {
        self.connected
    }

    pub fn is_button_down(&self, button: u32) -> bool {
        self.edges.is_down(button)
    }

    pub fn is_button_pressed(&self, button: u32) -> bool {
        self.edges.is_pressed(button)
    }

    /// Left stick, +y up
    pub fn left_stick(&self) -> Vec2 {
        self.left_stick
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_zeroes_small_input() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales_full_tilt() {
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 1e-5);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_button_press_is_an_edge() {
        let mut edges = ButtonEdges::default();
        edges.update(1 << button::A);
        assert!(edges.is_pressed(button::A));

        edges.update(1 << button::A);
        assert!(edges.is_down(button::A));
        assert!(!edges.is_pressed(button::A));

        edges.update(0);
        assert!(!edges.is_down(button::A));
    }
}
