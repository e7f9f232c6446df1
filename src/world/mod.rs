//! World module - level data
//!
//! - `level`: serde level definitions and the built-in levels
//! - `library`: ordered level list with on-disk discovery

mod level;
mod library;

pub use level::*;
pub use library::LevelLibrary;
