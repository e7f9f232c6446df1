//! Game configuration
//!
//! Everything tunable lives here: window, player physics, scoring rules and
//! audio. Defaults reproduce the classic feel (800x600 at 60 steps/second,
//! 3 lives, 10 points per coin). An optional `assets/config.ron` overrides
//! any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Simulation steps per second; physics values are per step
    pub fps: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Platformer Adventure".to_string(),
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

/// Player movement tuning. All values are per simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Sprite width
    pub width: f32,
    /// Sprite height
    pub height: f32,
    /// Horizontal acceleration while a direction is held
    pub acceleration: f32,
    /// Multiplier applied to horizontal velocity as counter-acceleration.
    /// Must lie in (-2.0, 0.0]; outside that range speed grows every step.
    pub friction: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_velocity: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 40.0,
            acceleration: 0.5,
            friction: -0.12,
            gravity: 0.8,
            jump_velocity: -16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub starting_lives: u32,
    pub coin_value: u32,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self { starting_lives: 3, coin_value: 10 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// 0.0 - 1.0
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { sfx_volume: 1.0, muted: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub physics: PlayerSettings,
    pub rules: RuleSettings,
    pub audio: AudioSettings,
    /// Root of `images/`, `sounds/` and `levels/`
    pub assets_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            physics: PlayerSettings::default(),
            rules: RuleSettings::default(),
            audio: AudioSettings::default(),
            assets_dir: "assets".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, falling back to defaults if it is missing or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::from_ron_str(&text) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default(_path: &Path) -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.width <= 0 || w.height <= 0 {
            return Err(ConfigError::Invalid(format!("window size {}x{}", w.width, w.height)));
        }
        if w.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".to_string()));
        }

        let p = &self.physics;
        let values = [p.width, p.height, p.acceleration, p.friction, p.gravity, p.jump_velocity];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("physics values must be finite".to_string()));
        }
        if p.width <= 0.0 || p.height <= 0.0 {
            return Err(ConfigError::Invalid(format!("player size {}x{}", p.width, p.height)));
        }
        if !(p.friction > -2.0 && p.friction <= 0.0) {
            return Err(ConfigError::Invalid(format!("friction {} outside (-2.0, 0.0]", p.friction)));
        }

        if self.rules.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.audio.sfx_volume) {
            return Err(ConfigError::Invalid(format!("sfx_volume {}", self.audio.sfx_volume)));
        }
        Ok(())
    }

    pub fn screen_width(&self) -> f32 {
        self.window.width as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.window.height as f32
    }

    /// Length of one simulation step in seconds
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.window.fps as f32
    }

    pub fn images_dir(&self) -> String {
        format!("{}/images", self.assets_dir)
    }

    pub fn sounds_dir(&self) -> String {
        format!("{}/sounds", self.assets_dir)
    }

    pub fn levels_dir(&self) -> String {
        format!("{}/levels", self.assets_dir)
    }
}
