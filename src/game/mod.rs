//! Game Module
//!
//! Everything that happens once the window is open:
//! - Rect: axis-aligned boxes for collision and drawing
//! - Entities: platforms, enemies and coins, each with its own update rule
//! - Player: movement physics and lives
//! - Collision: landing, pickups and enemy contact
//! - World: the live entities of one level, stepped together
//! - Event: decoupled notifications for audio and logging
//! - Runtime: the menu / playing / game over / win state machine
//! - Renderer: draws the current phase
//! - Clock: fixed-rate simulation steps

pub mod rect;
pub mod entities;
pub mod player;
pub mod collision;
pub mod world;
pub mod event;
pub mod runtime;
pub mod renderer;
pub mod clock;

pub use event::GameEvent;
pub use runtime::Game;
pub use renderer::draw_frame;
pub use clock::FixedStep;
