//! Sprite textures
//!
//! Optional images from `assets/images`. Anything that fails to load is
//! drawn as a solid colour rectangle instead.

use macroquad::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Platform,
    Enemy,
    Coin,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 4] = [
        SpriteKind::Player,
        SpriteKind::Platform,
        SpriteKind::Enemy,
        SpriteKind::Coin,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteKind::Player => "player.png",
            SpriteKind::Platform => "platform.png",
            SpriteKind::Enemy => "enemy.png",
            SpriteKind::Coin => "coin.png",
        }
    }
}

#[derive(Default)]
pub struct Sprites {
    pub player: Option<Texture2D>,
    pub platform: Option<Texture2D>,
    pub enemy: Option<Texture2D>,
    pub coin: Option<Texture2D>,
}

impl Sprites {
    /// Load every sprite from `dir`
    pub async fn load(dir: &str) -> Self {
        let mut sprites = Sprites::default();
        for kind in SpriteKind::ALL {
            let path = format!("{}/{}", dir, kind.file_name());
            let texture = match load_texture(&path).await {
                Ok(tex) => {
                    // Pixel art: keep edges crisp when scaled
                    tex.set_filter(FilterMode::Nearest);
                    log::info!("Loaded sprite {}", path);
                    Some(tex)
                }
                Err(e) => {
                    log::info!("No sprite at {} ({}), using a colour block", path, e);
                    None
                }
            };
            *sprites.slot_mut(kind) = texture;
        }
        sprites
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Texture2D> {
        match kind {
            SpriteKind::Player => self.player.as_ref(),
            SpriteKind::Platform => self.platform.as_ref(),
            SpriteKind::Enemy => self.enemy.as_ref(),
            SpriteKind::Coin => self.coin.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: SpriteKind) -> &mut Option<Texture2D> {
        match kind {
            SpriteKind::Player => &mut self.player,
            SpriteKind::Platform => &mut self.platform,
            SpriteKind::Enemy => &mut self.enemy,
            SpriteKind::Coin => &mut self.coin,
        }
    }
}
