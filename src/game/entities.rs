//! Level Entities
//!
//! Platforms, enemies and coins. Plain data plus the one behavior they
//! have: moving platforms and enemies patrol back and forth around their
//! start position.

use super::rect::Rect;
use crate::world::{CoinDef, EnemyDef, PlatformDef};

pub const ENEMY_SIZE: f32 = 30.0;
pub const COIN_SIZE: f32 = 15.0;

/// Horizontal back-and-forth movement.
///
/// Each step moves `speed * direction`; once the distance from the start
/// exceeds `range` the direction reverses. The entity therefore never
/// strays further than `range + speed` from where it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    start_x: f32,
    range: f32,
    speed: f32,
    /// +1 right, -1 left
    direction: f32,
}

impl Patrol {
    pub fn new(start_x: f32, range: f32, speed: f32) -> Self {
        Self { start_x, range, speed, direction: 1.0 }
    }

    /// Advance `x` by one step, returning the distance moved
    pub fn step(&mut self, x: &mut f32) -> f32 {
        let dx = self.speed * self.direction;
        *x += dx;
        if (*x - self.start_x).abs() > self.range {
            self.direction = -self.direction;
        }
        dx
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }
}

/// A surface the player can stand on
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    motion: Option<Patrol>,
    /// Horizontal distance moved during the last update
    last_dx: f32,
}

impl Platform {
    pub fn fixed(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h), motion: None, last_dx: 0.0 }
    }

    pub fn moving(x: f32, y: f32, w: f32, h: f32, range: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            motion: Some(Patrol::new(x, range, speed)),
            last_dx: 0.0,
        }
    }

    pub fn from_def(def: &PlatformDef) -> Self {
        match def.motion {
            Some(m) => Self::moving(def.x, def.y, def.w, def.h, m.range, m.speed),
            None => Self::fixed(def.x, def.y, def.w, def.h),
        }
    }

    pub fn update(&mut self) {
        self.last_dx = match self.motion.as_mut() {
            Some(patrol) => patrol.step(&mut self.rect.x),
            None => 0.0,
        };
    }

    pub fn last_dx(&self) -> f32 {
        self.last_dx
    }
}

/// A patrolling hazard; touching it costs a life
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    patrol: Patrol,
}

impl Enemy {
    pub fn new(x: f32, y: f32, patrol_range: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            patrol: Patrol::new(x, patrol_range, speed),
        }
    }

    pub fn from_def(def: &EnemyDef) -> Self {
        Self::new(def.x, def.y, def.patrol_range, def.speed)
    }

    pub fn update(&mut self) {
        self.patrol.step(&mut self.rect.x);
    }

    pub fn facing_right(&self) -> bool {
        self.patrol.direction() > 0.0
    }
}

/// A collectible worth points
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self { rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE) }
    }

    pub fn from_def(def: &CoinDef) -> Self {
        Self::new(def.x, def.y)
    }
}
