//! UI Theme - Shared colors and text sizes
//!
//! Centralized palette for the menus, the HUD and the colour-block
//! fallbacks used when a sprite is missing.

use macroquad::prelude::Color;

// =============================================================================
// Backgrounds
// =============================================================================

/// Sky behind the level, the menu and the win screen (135, 206, 235)
pub const SKY_COLOR: Color = Color::new(0.529, 0.808, 0.922, 1.0);

/// Game over background
pub const GAME_OVER_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Text
// =============================================================================

pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

pub const GAME_OVER_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

pub const WIN_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Secondary lines on the menu (level name, controller hint)
pub const TEXT_DIM: Color = Color::new(0.85, 0.9, 0.95, 1.0);

// =============================================================================
// Entity fallbacks
// =============================================================================

pub const PLAYER_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);

pub const PLATFORM_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

pub const ENEMY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

pub const COIN_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Screen titles
pub const FONT_SIZE_TITLE: f32 = 48.0;

/// Instructions, HUD and everything else
pub const FONT_SIZE_BODY: f32 = 22.0;
