//! Menus and HUD
//!
//! Immediate mode: every screen is redrawn from game state each frame.

mod screens;
mod theme;

pub use screens::*;
pub use theme::*;
