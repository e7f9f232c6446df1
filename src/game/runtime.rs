//! Game Runtime
//!
//! The orchestrating game-state object. Owns the current phase (menu,
//! playing, game over, win), the score, the world being played and the
//! level library, and turns per-step input into state transitions:
//!
//! ```text
//! Menu --Enter--> Playing --last coin--> Win --Enter--> Menu
//!                    |
//!                    +--no lives left--> GameOver --Enter--> Menu
//! ```
//!
//! Escape quits from any phase.

use super::event::{EventQueue, GameEvent};
use super::world::World;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::world::LevelLibrary;

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
    Win,
}

impl GamePhase {
    pub fn label(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "Game Over",
            GamePhase::Win => "Win",
        }
    }
}

pub struct Game {
    pub phase: GamePhase,
    pub score: u32,
    /// Level played by the next new game
    pub level_index: usize,
    /// Live entities; `None` until the first game starts
    pub world: Option<World>,
    /// Events produced since the last drain
    pub events: EventQueue<GameEvent>,
    config: GameConfig,
    levels: LevelLibrary,
    quit_requested: bool,
}

impl Game {
    pub fn new(config: GameConfig, levels: LevelLibrary) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            level_index: 0,
            world: None,
            events: EventQueue::new(),
            config,
            levels,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn levels(&self) -> &LevelLibrary {
        &self.levels
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Lives left in the current game (0 before the first game)
    pub fn lives(&self) -> u32 {
        self.world.as_ref().map_or(0, |w| w.player.lives)
    }

    /// One simulation step: discrete input first, then the world update
    pub fn step(&mut self, input: &FrameInput) {
        self.handle_input(input);
        if self.phase == GamePhase::Playing {
            self.update(input);
        }
    }

    /// React to one-shot actions for the current phase
    pub fn handle_input(&mut self, input: &FrameInput) {
        if input.quit {
            self.quit_requested = true;
            return;
        }

        match self.phase {
            GamePhase::Playing => {
                if input.jump {
                    let jump_velocity = self.config.physics.jump_velocity;
                    if let Some(world) = self.world.as_mut() {
                        if world.try_jump(jump_velocity) {
                            self.events.send(GameEvent::Jumped);
                        }
                    }
                }
            }
            GamePhase::Menu => {
                if input.confirm {
                    self.new_game();
                }
            }
            GamePhase::GameOver | GamePhase::Win => {
                if input.confirm {
                    self.set_phase(GamePhase::Menu);
                }
            }
        }
    }

    /// Reset the score and rebuild the world for the selected level
    pub fn new_game(&mut self) {
        self.score = 0;
        let level = self.levels.get(self.level_index);
        self.world = Some(World::from_level(level, &self.config));
        self.events.send(GameEvent::LevelStarted { index: self.level_index % self.levels.len() });
        self.set_phase(GamePhase::Playing);
    }

    /// Advance the world one step and apply scoring, winning and dying
    pub fn update(&mut self, input: &FrameInput) {
        let Some(world) = self.world.as_mut() else { return };
        let outcome = world.step(input, &self.config);
        let remaining = world.coins_left();

        for _ in 0..outcome.coins_collected {
            self.score = self.score.saturating_add(self.config.rules.coin_value);
            self.events.send(GameEvent::CoinCollected { score: self.score, remaining });
        }

        if outcome.coins_collected > 0 && remaining == 0 {
            self.level_index = self.levels.next_index(self.level_index);
            self.set_phase(GamePhase::Win);
            return;
        }

        if outcome.fell || outcome.hit_enemy {
            self.player_die();
        }
    }

    /// Take a life; respawn, or end the game when none are left
    pub fn player_die(&mut self) {
        let Some(world) = self.world.as_mut() else { return };
        world.player.lives = world.player.lives.saturating_sub(1);
        let lives_left = world.player.lives;
        self.events.send(GameEvent::PlayerDied { lives_left });

        if lives_left == 0 {
            self.set_phase(GamePhase::GameOver);
        } else {
            world.respawn_player();
        }
    }

    fn set_phase(&mut self, to: GamePhase) {
        if self.phase != to {
            self.events.send(GameEvent::PhaseChanged { from: self.phase, to });
            self.phase = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{CoinDef, EnemyDef, LevelDef, PlatformDef};

    const CONFIRM: FrameInput = FrameInput { left: false, right: false, jump: false, confirm: true, quit: false };
    const JUMP: FrameInput = FrameInput { left: false, right: false, jump: true, confirm: false, quit: false };
    const IDLE: FrameInput = FrameInput { left: false, right: false, jump: false, confirm: false, quit: false };

    fn level(coins: Vec<CoinDef>, enemies: Vec<EnemyDef>) -> LevelDef {
        LevelDef {
            name: "Test".to_string(),
            spawn: (100.0, 400.0),
            platforms: vec![PlatformDef::fixed(0.0, 560.0, 800.0, 40.0)],
            enemies,
            coins,
        }
    }

    fn game_with(levels: Vec<LevelDef>) -> Game {
        Game::new(GameConfig::default(), LevelLibrary::from_levels(levels))
    }

    fn phases(game: &mut Game) -> Vec<(GamePhase, GamePhase)> {
        game.events
            .drain()
            .filter_map(|e| match e {
                GameEvent::PhaseChanged { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_menu_enter_starts_game() {
        let mut game = game_with(vec![level(vec![CoinDef::new(700.0, 100.0)], vec![])]);
        assert_eq!(game.phase, GamePhase::Menu);

        game.step(&IDLE);
        assert_eq!(game.phase, GamePhase::Menu);
        assert!(game.world.is_none());

        game.step(&CONFIRM);
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.lives(), 3);
        assert_eq!(phases(&mut game), vec![(GamePhase::Menu, GamePhase::Playing)]);
    }

    #[test]
    fn test_quit_from_any_phase() {
        let mut game = game_with(Vec::new());
        game.step(&FrameInput { quit: true, ..Default::default() });
        assert!(game.should_quit());
    }

    #[test]
    fn test_score_increments_on_coin() {
        let coins = vec![CoinDef::new(95.0, 540.0), CoinDef::new(700.0, 100.0)];
        let mut game = game_with(vec![level(coins, vec![])]);
        game.step(&CONFIRM);
        for _ in 0..120 {
            game.step(&IDLE);
        }
        assert_eq!(game.score, 10);
        assert_eq!(game.phase, GamePhase::Playing);
        assert!(game.events.iter().any(|e| matches!(e, GameEvent::CoinCollected { score: 10, remaining: 1 })));
    }

    #[test]
    fn test_last_coin_wins_and_advances_level() {
        let first = level(vec![CoinDef::new(95.0, 540.0)], vec![]);
        let mut second = level(vec![CoinDef::new(700.0, 100.0)], vec![]);
        second.name = "Second".to_string();
        let mut game = game_with(vec![first, second]);

        game.step(&CONFIRM);
        for _ in 0..120 {
            game.step(&IDLE);
        }
        assert_eq!(game.phase, GamePhase::Win);
        assert_eq!(game.score, 10);
        assert_eq!(game.level_index, 1);

        // Enter returns to menu, the next game uses the second level
        game.step(&CONFIRM);
        assert_eq!(game.phase, GamePhase::Menu);
        game.step(&CONFIRM);
        assert_eq!(game.score, 0);
        assert_eq!(game.world.as_ref().map(|w| w.coins_left()), Some(1));
        assert_eq!(game.world.as_ref().map(|w| w.coins[0].rect.x), Some(700.0));
    }

    #[test]
    fn test_score_saturates_with_huge_coin_value() {
        let config = GameConfig::from_ron_str("(rules: (coin_value: 4294967295))").unwrap();
        let coins = vec![CoinDef::new(95.0, 540.0), CoinDef::new(100.0, 545.0)];
        let mut game = Game::new(config, LevelLibrary::from_levels(vec![level(coins, vec![])]));

        game.step(&CONFIRM);
        for _ in 0..120 {
            game.step(&IDLE);
        }
        assert_eq!(game.score, u32::MAX);
        assert_eq!(game.phase, GamePhase::Win);
    }

    #[test]
    fn test_enemy_contact_costs_a_life_and_respawns() {
        let enemies = vec![EnemyDef { x: 85.0, y: 530.0, patrol_range: 0.0, speed: 0.0 }];
        let mut game = game_with(vec![level(vec![CoinDef::new(700.0, 100.0)], enemies)]);
        game.step(&CONFIRM);

        let mut died_at = None;
        for i in 0..120 {
            game.step(&IDLE);
            if game.lives() < 3 {
                died_at = Some(i);
                break;
            }
        }
        assert!(died_at.is_some());
        assert_eq!(game.lives(), 2);
        assert_eq!(game.phase, GamePhase::Playing);
        let world = game.world.as_ref().unwrap();
        assert_eq!(world.player.pos, world.spawn);
    }

    #[test]
    fn test_game_over_when_lives_run_out() {
        let mut game = game_with(vec![level(vec![CoinDef::new(700.0, 100.0)], vec![])]);
        game.step(&CONFIRM);
        game.player_die();
        game.player_die();
        assert_eq!(game.phase, GamePhase::Playing);
        game.player_die();
        assert_eq!(game.phase, GamePhase::GameOver);
        assert_eq!(game.lives(), 0);

        // World is frozen outside Playing
        let y = game.world.as_ref().unwrap().player.pos.y;
        game.step(&IDLE);
        assert_eq!(game.world.as_ref().unwrap().player.pos.y, y);

        game.step(&CONFIRM);
        assert_eq!(game.phase, GamePhase::Menu);
    }

    #[test]
    fn test_jump_emits_event_only_when_grounded() {
        let mut game = game_with(vec![level(vec![CoinDef::new(700.0, 100.0)], vec![])]);
        game.step(&CONFIRM);
        game.step(&JUMP);
        assert!(!game.events.iter().any(|e| *e == GameEvent::Jumped));

        for _ in 0..120 {
            game.step(&IDLE);
        }
        game.step(&JUMP);
        assert!(game.events.iter().any(|e| *e == GameEvent::Jumped));
        assert!(game.world.as_ref().unwrap().player.jumping);
    }
}
