//! Player
//!
//! The player is anchored at the mid-bottom of its sprite. Movement uses
//! simple per-step equations of motion:
//!
//! ```text
//! acc    = (±acceleration, gravity) + (vel.x * friction, 0)
//! vel   += acc
//! pos   += vel + acc / 2
//! ```
//!
//! Horizontal velocity below 0.1 snaps to zero so the player comes to rest.

use macroquad::math::{vec2, Vec2};
use super::rect::Rect;
use crate::config::PlayerSettings;
use crate::input::FrameInput;

/// Horizontal speed below which the player stops
const REST_SPEED: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Mid-bottom point of the sprite
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub size: Vec2,
    pub facing_right: bool,
    /// In the air after a jump; cleared on landing
    pub jumping: bool,
    /// Landed on a platform during the last step
    pub on_ground: bool,
    pub lives: u32,
}

impl Player {
    pub fn new(spawn: Vec2, settings: &PlayerSettings, lives: u32) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            size: vec2(settings.width, settings.height),
            facing_right: true,
            jumping: false,
            on_ground: false,
            lives,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_midbottom(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Integrate one step of movement. x wraps around the screen edges.
    pub fn update(&mut self, input: &FrameInput, settings: &PlayerSettings, screen_width: f32) {
        self.acc = vec2(0.0, settings.gravity);
        if input.left {
            self.acc.x = -settings.acceleration;
            self.facing_right = false;
        }
        if input.right {
            self.acc.x = settings.acceleration;
            self.facing_right = true;
        }

        self.acc.x += self.vel.x * settings.friction;

        self.vel += self.acc;
        if self.vel.x.abs() < REST_SPEED {
            self.vel.x = 0.0;
        }
        self.pos += self.vel + 0.5 * self.acc;
        self.on_ground = false;

        if self.pos.x > screen_width {
            self.pos.x = 0.0;
        }
        if self.pos.x < 0.0 {
            self.pos.x = screen_width;
        }
    }

    /// Start a jump. Callers check that the player is standing on something.
    pub fn jump(&mut self, jump_velocity: f32) {
        self.jumping = true;
        self.on_ground = false;
        self.vel.y = jump_velocity;
    }

    /// Snap the feet to `y` and stop falling
    pub fn land(&mut self, y: f32) {
        self.pos.y = y;
        self.vel.y = 0.0;
        self.jumping = false;
        self.on_ground = true;
    }

    /// Whole sprite is below the bottom of the screen
    pub fn fell_off(&self, screen_height: f32) -> bool {
        self.rect().y > screen_height
    }

    /// Back to `spawn` at rest, keeping lives and facing
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.acc = Vec2::ZERO;
        self.jumping = false;
        self.on_ground = false;
    }
}
