//! Game World
//!
//! The World holds every live entity of the level being played: the
//! player plus plain lists of platforms, enemies and coins. A coin exists
//! while it is in the list; collecting it removes it, and starting a new
//! game rebuilds the whole world from its level definition.

use macroquad::math::vec2;
use macroquad::math::Vec2;
use super::collision;
use super::entities::{Coin, Enemy, Platform};
use super::player::Player;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::world::LevelDef;

/// What happened to the player during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub coins_collected: usize,
    pub hit_enemy: bool,
    pub fell: bool,
}

pub struct World {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    /// Where the player starts and respawns
    pub spawn: Vec2,
    /// Platform the player landed on during the last step
    support: Option<usize>,
}

impl World {
    /// Build a fresh world from a level definition
    pub fn from_level(level: &LevelDef, config: &GameConfig) -> Self {
        let spawn = vec2(level.spawn.0, level.spawn.1);
        Self {
            player: Player::new(spawn, &config.physics, config.rules.starting_lives),
            platforms: level.platforms.iter().map(Platform::from_def).collect(),
            enemies: level.enemies.iter().map(Enemy::from_def).collect(),
            coins: level.coins.iter().map(Coin::from_def).collect(),
            spawn,
            support: None,
        }
    }

    /// Start a jump if the player is standing on a platform
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if collision::can_jump(&self.player, &self.platforms) {
            self.player.jump(jump_velocity);
            self.support = None;
            true
        } else {
            false
        }
    }

    /// Advance every entity by one step and resolve collisions.
    ///
    /// Order: player, platforms (carrying a supported player along),
    /// enemies, then landing, coin pickup and enemy contact.
    pub fn step(&mut self, input: &FrameInput, config: &GameConfig) -> StepOutcome {
        self.player.update(input, &config.physics, config.screen_width());
        let fell = self.player.fell_off(config.screen_height());

        for platform in &mut self.platforms {
            platform.update();
        }
        self.carry_player();

        for enemy in &mut self.enemies {
            enemy.update();
        }

        self.support = collision::resolve_landing(&mut self.player, &self.platforms);

        let rect = self.player.rect();
        StepOutcome {
            coins_collected: collision::collect_coins(&rect, &mut self.coins),
            hit_enemy: collision::touches_enemy(&rect, &self.enemies),
            fell,
        }
    }

    /// Move the player with the platform it stood on last step, if it is still on it
    fn carry_player(&mut self) {
        let Some(index) = self.support else { return };
        let Some(platform) = self.platforms.get(index) else { return };
        if platform.last_dx() == 0.0 {
            return;
        }
        if collision::standing_on(&self.player.rect(), std::slice::from_ref(platform)).is_some() {
            self.player.pos.x += platform.last_dx();
        }
    }

    pub fn respawn_player(&mut self) {
        self.player.respawn(self.spawn);
        self.support = None;
    }

    pub fn coins_left(&self) -> usize {
        self.coins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{builtin_levels, CoinDef, EnemyDef, PlatformDef};

    fn flat_level() -> LevelDef {
        LevelDef {
            name: "Flat".to_string(),
            spawn: (100.0, 400.0),
            platforms: vec![PlatformDef::fixed(0.0, 560.0, 800.0, 40.0)],
            enemies: Vec::new(),
            coins: vec![CoinDef::new(700.0, 100.0)],
        }
    }

    fn settle(world: &mut World, config: &GameConfig) {
        for _ in 0..120 {
            world.step(&FrameInput::default(), config);
        }
    }

    #[test]
    fn test_from_level_builds_all_entities() {
        let config = GameConfig::default();
        let level = &builtin_levels()[0];
        let world = World::from_level(level, &config);
        assert_eq!(world.platforms.len(), 6);
        assert_eq!(world.enemies.len(), 2);
        assert_eq!(world.coins_left(), 5);
        assert_eq!(world.player.lives, 3);
        assert_eq!(world.player.pos, vec2(100.0, 400.0));
    }

    #[test]
    fn test_player_falls_and_comes_to_rest_on_ground() {
        let config = GameConfig::default();
        let mut world = World::from_level(&flat_level(), &config);
        settle(&mut world, &config);

        // Feet rest a pixel inside the ground, plus at most one step of gravity
        assert!(world.player.pos.y >= 561.0 && world.player.pos.y < 562.5);
        assert!(!world.player.jumping);
        assert!(world.player.on_ground);
    }

    #[test]
    fn test_jump_requires_ground() {
        let config = GameConfig::default();
        let mut world = World::from_level(&flat_level(), &config);
        assert!(!world.try_jump(config.physics.jump_velocity), "spawn is in mid-air");

        settle(&mut world, &config);
        assert!(world.try_jump(config.physics.jump_velocity));
        assert!(world.player.jumping);
        assert!(!world.try_jump(config.physics.jump_velocity), "no double jump");

        let start_y = world.player.pos.y;
        world.step(&FrameInput::default(), &config);
        assert!(world.player.pos.y < start_y);
    }

    #[test]
    fn test_step_reports_coin_and_enemy_contact() {
        let config = GameConfig::default();
        let mut level = flat_level();
        level.coins = vec![CoinDef::new(95.0, 540.0), CoinDef::new(700.0, 100.0)];
        level.enemies = vec![EnemyDef { x: 600.0, y: 530.0, patrol_range: 0.0, speed: 0.0 }];
        let mut world = World::from_level(&level, &config);

        let mut collected = 0;
        for _ in 0..120 {
            collected += world.step(&FrameInput::default(), &config).coins_collected;
        }
        assert_eq!(collected, 1);
        assert_eq!(world.coins_left(), 1);

        world.player.pos.x = 610.0;
        let outcome = world.step(&FrameInput::default(), &config);
        assert!(outcome.hit_enemy);
    }

    #[test]
    fn test_falling_below_screen_is_reported() {
        let config = GameConfig::default();
        let mut level = flat_level();
        level.platforms = vec![PlatformDef::fixed(600.0, 560.0, 200.0, 40.0)];
        let mut world = World::from_level(&level, &config);

        let fell = (0..200).any(|_| world.step(&FrameInput::default(), &config).fell);
        assert!(fell);
    }

    #[test]
    fn test_moving_platform_carries_player() {
        let config = GameConfig::default();
        let mut level = flat_level();
        level.platforms = vec![PlatformDef::moving(50.0, 450.0, 100.0, 20.0, 100.0, 1.0)];
        let mut world = World::from_level(&level, &config);

        for _ in 0..40 {
            world.step(&FrameInput::default(), &config);
        }
        assert!(world.player.on_ground);
        let x_before = world.player.pos.x;
        let platform_before = world.platforms[0].rect.x;

        for _ in 0..10 {
            world.step(&FrameInput::default(), &config);
        }
        let platform_moved = world.platforms[0].rect.x - platform_before;
        assert!(platform_moved > 0.0);
        assert!((world.player.pos.x - x_before - platform_moved).abs() < 1e-3);
    }

    #[test]
    fn test_respawn_player_returns_to_spawn() {
        let config = GameConfig::default();
        let mut world = World::from_level(&flat_level(), &config);
        settle(&mut world, &config);
        world.player.pos.x = 500.0;
        world.respawn_player();
        assert_eq!(world.player.pos, world.spawn);
    }
}
