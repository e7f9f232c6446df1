//! Frame Renderer
//!
//! Draws the current phase: the menus through `ui`, or the level with the
//! HUD on top while playing. Each entity uses its sprite when one was
//! loaded and a solid colour block otherwise.

use macroquad::prelude::*;
use crate::assets::{SpriteKind, Sprites};
use crate::ui;
use super::rect::Rect as BoxRect;
use super::runtime::{Game, GamePhase};
use super::world::World;

/// Draw a sprite stretched over `rect`, or fill it with `fallback`
fn draw_entity(sprites: &Sprites, kind: SpriteKind, rect: &BoxRect, flip_x: bool, fallback: Color) {
    match sprites.get(kind) {
        Some(texture) => draw_texture_ex(
            texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                flip_x,
                ..Default::default()
            },
        ),
        None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, fallback),
    }
}

/// Draw every entity of the level being played
pub fn draw_world(world: &World, sprites: &Sprites) {
    clear_background(ui::SKY_COLOR);

    for platform in &world.platforms {
        draw_entity(sprites, SpriteKind::Platform, &platform.rect, false, ui::PLATFORM_COLOR);
    }
    for coin in &world.coins {
        draw_entity(sprites, SpriteKind::Coin, &coin.rect, false, ui::COIN_COLOR);
    }
    for enemy in &world.enemies {
        draw_entity(sprites, SpriteKind::Enemy, &enemy.rect, !enemy.facing_right(), ui::ENEMY_COLOR);
    }

    let player = &world.player;
    draw_entity(sprites, SpriteKind::Player, &player.rect(), !player.facing_right, ui::PLAYER_COLOR);
}

/// Draw one full frame for the current phase
pub fn draw_frame(game: &Game, sprites: &Sprites, has_gamepad: bool) {
    let config = game.config();
    let (w, h) = (config.screen_width(), config.screen_height());

    match game.phase {
        GamePhase::Menu => {
            let level = game.levels().get(game.level_index);
            ui::draw_menu(&config.window.title, &level.name, has_gamepad, w, h);
        }
        GamePhase::Playing => {
            if let Some(world) = &game.world {
                draw_world(world, sprites);
            }
            ui::draw_hud(game.score, game.lives(), w);
        }
        GamePhase::GameOver => ui::draw_game_over(game.score, w, h),
        GamePhase::Win => ui::draw_win(game.score, w, h),
    }
}
