//! Platformer Adventure: a small 2D side-view platformer
//!
//! Run left and right, jump between platforms, dodge patrolling enemies
//! and collect every coin to win:
//! - Levels are RON files in `assets/levels` (built-ins are exported on first run)
//! - Optional sprites in `assets/images` and sounds in `assets/sounds`
//! - Keyboard or gamepad input
//! - Fixed-rate simulation, independent of the display refresh

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file read at startup, relative to the working directory
const CONFIG_PATH: &str = "assets/config.ron";

mod assets;
mod audio;
mod config;
mod game;
mod input;
mod ui;
mod world;

use macroquad::prelude::*;
use assets::Sprites;
use audio::AudioManager;
use config::GameConfig;
use game::{draw_frame, FixedStep, Game, GameEvent};
use input::{FrameInput, InputState};
use world::LevelLibrary;

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default(std::path::Path::new(CONFIG_PATH));
    log::info!(
        "Platformer Adventure v{} ({}x{} @ {} steps/s)",
        VERSION,
        config.window.width,
        config.window.height,
        config.window.fps
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
}

/// Create the asset directories and seed the level directory on first run
#[cfg(not(target_arch = "wasm32"))]
fn prepare_asset_dirs(config: &GameConfig) {
    use std::path::Path;

    for dir in [config.images_dir(), config.sounds_dir()] {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            log::warn!("Could not create {}: {}", dir, e);
        }
    }

    let levels_dir = config.levels_dir();
    let levels_path = Path::new(&levels_dir);
    if !levels_path.exists() {
        match LevelLibrary::export_builtins(levels_path) {
            Ok(count) => log::info!("Wrote {} built-in levels to {}", count, levels_dir),
            Err(e) => log::warn!("Could not write built-in levels to {}: {}", levels_dir, e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_levels(config: &GameConfig) -> LevelLibrary {
    LevelLibrary::discover(std::path::Path::new(&config.levels_dir()))
}

#[cfg(target_arch = "wasm32")]
fn load_levels(_config: &GameConfig) -> LevelLibrary {
    LevelLibrary::builtin()
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LevelStarted { index } => log::info!("Starting level {}", index + 1),
        GameEvent::PhaseChanged { from, to } => log::info!("{} -> {}", from.label(), to.label()),
        GameEvent::PlayerDied { lives_left } => log::debug!("Player died, {} lives left", lives_left),
        GameEvent::CoinCollected { score, remaining } => {
            log::debug!("Coin collected: score {}, {} remaining", score, remaining)
        }
        GameEvent::Jumped => log::trace!("Jump"),
    }
}

async fn run(config: GameConfig) {
    #[cfg(not(target_arch = "wasm32"))]
    prepare_asset_dirs(&config);

    let levels = load_levels(&config);
    log::info!("{} level(s) available", levels.len());

    let sprites = Sprites::load(&config.images_dir()).await;
    let audio = AudioManager::load(&config.sounds_dir(), config.audio).await;

    let mut input = InputState::new();
    let mut clock = FixedStep::new(config.step_seconds());
    let mut game = Game::new(config, levels);

    // One-shot presses wait here until a simulation step consumes them
    let mut pending = FrameInput::default();

    loop {
        pending.absorb(input.poll());

        let steps = clock.advance(get_frame_time());
        for _ in 0..steps {
            game.step(&pending);
            pending.clear_one_shots();
            if game.should_quit() {
                break;
            }
        }

        audio.play_events(game.events.iter());
        for event in game.events.drain() {
            log_event(&event);
        }

        if game.should_quit() {
            log::info!("Quit requested");
            break;
        }

        draw_frame(&game, &sprites, input.has_gamepad());
        next_frame().await;
    }
}
