//! Level Definition
//!
//! A level is a plain list of platforms, enemies and coins plus the player
//! spawn point. Levels are stored as RON so they can be edited by hand.
//! Coordinates are in screen pixels with the origin at the top-left corner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading, writing or validating a level
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Horizontal back-and-forth motion of a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformMotion {
    /// Maximum distance from the start x before reversing
    pub range: f32,
    /// Pixels moved per frame
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// `None` for static platforms
    #[serde(default)]
    pub motion: Option<PlatformMotion>,
}

impl PlatformDef {
    pub const fn fixed(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h, motion: None }
    }

    pub const fn moving(x: f32, y: f32, w: f32, h: f32, range: f32, speed: f32) -> Self {
        Self { x, y, w, h, motion: Some(PlatformMotion { range, speed }) }
    }
}

fn default_patrol_range() -> f32 {
    100.0
}

fn default_enemy_speed() -> f32 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_patrol_range")]
    pub patrol_range: f32,
    #[serde(default = "default_enemy_speed")]
    pub speed: f32,
}

impl EnemyDef {
    pub const fn new(x: f32, y: f32, patrol_range: f32) -> Self {
        Self { x, y, patrol_range, speed: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinDef {
    pub x: f32,
    pub y: f32,
}

impl CoinDef {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Default spawn: 100px from the left, 200px above the bottom of a 600px screen
fn default_spawn() -> (f32, f32) {
    (100.0, 400.0)
}

/// A complete level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// Player start, as the mid-bottom point of the player sprite
    #[serde(default = "default_spawn")]
    pub spawn: (f32, f32),
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
    pub coins: Vec<CoinDef>,
}

impl LevelDef {
    /// Reject levels that cannot be played or would break the simulation
    pub fn validate(&self) -> Result<(), LevelError> {
        let invalid = |msg: String| Err(LevelError::Validation(format!("{}: {}", self.name, msg)));

        if !self.spawn.0.is_finite() || !self.spawn.1.is_finite() {
            return invalid("spawn point is not finite".to_string());
        }
        if self.platforms.is_empty() {
            return invalid("level has no platforms".to_string());
        }
        // Win is triggered by collecting the last coin, so a coinless level is unwinnable
        if self.coins.is_empty() {
            return invalid("level has no coins".to_string());
        }

        for (i, p) in self.platforms.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return invalid(format!("platform {} position is not finite", i));
            }
            if !(p.w > 0.0 && p.h > 0.0 && p.w.is_finite() && p.h.is_finite()) {
                return invalid(format!("platform {} has non-positive size {}x{}", i, p.w, p.h));
            }
            if let Some(m) = p.motion {
                if !(m.range >= 0.0 && m.speed >= 0.0 && m.range.is_finite() && m.speed.is_finite()) {
                    return invalid(format!("platform {} has invalid motion", i));
                }
            }
        }

        for (i, e) in self.enemies.iter().enumerate() {
            if !(e.x.is_finite() && e.y.is_finite()) {
                return invalid(format!("enemy {} position is not finite", i));
            }
            if !(e.patrol_range >= 0.0 && e.speed >= 0.0 && e.patrol_range.is_finite() && e.speed.is_finite()) {
                return invalid(format!("enemy {} has invalid patrol", i));
            }
        }

        for (i, c) in self.coins.iter().enumerate() {
            if !(c.x.is_finite() && c.y.is_finite()) {
                return invalid(format!("coin {} position is not finite", i));
            }
        }

        Ok(())
    }
}

/// Parse and validate a level from RON text
pub fn parse_level(text: &str) -> Result<LevelDef, LevelError> {
    let level: LevelDef = ron::from_str(text)?;
    level.validate()?;
    Ok(level)
}

/// Serialize a level to pretty-printed RON
pub fn level_to_ron(level: &LevelDef) -> Result<String, LevelError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(level, config)?)
}

/// Ground strip along the bottom of an 800x600 screen
const GROUND: PlatformDef = PlatformDef::fixed(0.0, 560.0, 800.0, 40.0);

/// The levels that ship with the game
pub fn builtin_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            name: "Meadow".to_string(),
            spawn: default_spawn(),
            platforms: vec![
                GROUND,
                PlatformDef::fixed(100.0, 400.0, 150.0, 20.0),
                PlatformDef::fixed(300.0, 300.0, 100.0, 20.0),
                PlatformDef::fixed(500.0, 200.0, 150.0, 20.0),
                PlatformDef::fixed(250.0, 120.0, 100.0, 20.0),
                PlatformDef::moving(650.0, 350.0, 100.0, 20.0, 100.0, 1.0),
            ],
            enemies: vec![
                EnemyDef::new(300.0, 280.0, 80.0),
                EnemyDef::new(500.0, 180.0, 100.0),
            ],
            coins: vec![
                CoinDef::new(130.0, 370.0),
                CoinDef::new(330.0, 270.0),
                CoinDef::new(530.0, 170.0),
                CoinDef::new(280.0, 90.0),
                CoinDef::new(680.0, 320.0),
            ],
        },
        LevelDef {
            name: "Towers".to_string(),
            spawn: default_spawn(),
            platforms: vec![
                GROUND,
                PlatformDef::fixed(100.0, 450.0, 100.0, 20.0),
                PlatformDef::fixed(300.0, 350.0, 100.0, 20.0),
                PlatformDef::fixed(500.0, 250.0, 100.0, 20.0),
                PlatformDef::fixed(200.0, 150.0, 100.0, 20.0),
                PlatformDef::fixed(400.0, 100.0, 100.0, 20.0),
                PlatformDef::fixed(600.0, 150.0, 100.0, 20.0),
                PlatformDef::moving(100.0, 250.0, 100.0, 20.0, 150.0, 2.0),
            ],
            enemies: vec![
                EnemyDef::new(300.0, 330.0, 80.0),
                EnemyDef::new(500.0, 230.0, 80.0),
                EnemyDef::new(200.0, 130.0, 80.0),
                EnemyDef::new(600.0, 130.0, 80.0),
            ],
            coins: vec![
                CoinDef::new(130.0, 420.0),
                CoinDef::new(330.0, 320.0),
                CoinDef::new(530.0, 220.0),
                CoinDef::new(230.0, 120.0),
                CoinDef::new(430.0, 70.0),
                CoinDef::new(630.0, 120.0),
                CoinDef::new(130.0, 220.0),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_are_valid() {
        let levels = builtin_levels();
        assert_eq!(levels.len(), 2);
        for level in &levels {
            level.validate().unwrap();
        }
        assert_eq!(levels[0].coins.len(), 5);
        assert_eq!(levels[1].coins.len(), 7);
        assert_eq!(levels[1].enemies.len(), 4);
    }

    #[test]
    fn test_builtin_levels_have_single_ground() {
        for level in builtin_levels() {
            let grounds = level.platforms.iter().filter(|p| **p == GROUND).count();
            assert_eq!(grounds, 1, "{} should have exactly one ground strip", level.name);
        }
    }

    #[test]
    fn test_parse_minimal_level_uses_defaults() {
        let text = r#"(
            name: "Tiny",
            platforms: [(x: 0.0, y: 560.0, w: 800.0, h: 40.0)],
            enemies: [(x: 10.0, y: 20.0)],
            coins: [(x: 50.0, y: 500.0)],
        )"#;
        let level = parse_level(text).unwrap();
        assert_eq!(level.spawn, (100.0, 400.0));
        assert!(level.platforms[0].motion.is_none());
        assert_eq!(level.enemies[0].patrol_range, 100.0);
        assert_eq!(level.enemies[0].speed, 1.0);
    }

    #[test]
    fn test_pretty_ron_parses_back() {
        let level = builtin_levels().remove(0);
        let text = level_to_ron(&level).unwrap();
        assert_eq!(parse_level(&text).unwrap(), level);
    }

    #[test]
    fn test_rejects_level_without_coins() {
        let mut level = builtin_levels().remove(0);
        level.coins.clear();
        assert!(matches!(level.validate(), Err(LevelError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_sized_platform() {
        let mut level = builtin_levels().remove(1);
        level.platforms[2].w = 0.0;
        let err = level.validate().unwrap_err();
        assert!(err.to_string().contains("platform 2"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        assert!(matches!(parse_level("(name: "), Err(LevelError::Parse(_))));
    }
}
