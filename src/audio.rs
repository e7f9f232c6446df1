//! Sound effects
//!
//! Three one-shot effects loaded from `assets/sounds`. Every sound is
//! optional: a missing or unreadable file is logged and that effect stays
//! silent.

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use crate::config::AudioSettings;
use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Jump,
    Coin,
    Death,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Jump, SoundEffect::Coin, SoundEffect::Death];

    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Coin => "coin.wav",
            SoundEffect::Death => "death.wav",
        }
    }

    /// Effect triggered by a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::PlayerDied { .. } => Some(SoundEffect::Death),
            GameEvent::LevelStarted { .. } | GameEvent::PhaseChanged { .. } => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            SoundEffect::Jump => 0,
            SoundEffect::Coin => 1,
            SoundEffect::Death => 2,
        }
    }
}

pub struct AudioManager {
    sounds: [Option<Sound>; 3],
    settings: AudioSettings,
}

impl AudioManager {
    /// Load every effect from `dir`
    pub async fn load(dir: &str, settings: AudioSettings) -> Self {
        let mut sounds: [Option<Sound>; 3] = [None, None, None];
        for effect in SoundEffect::ALL {
            let path = format!("{}/{}", dir, effect.file_name());
            match load_sound(&path).await {
                Ok(sound) => {
                    log::info!("Loaded sound {}", path);
                    sounds[effect.index()] = Some(sound);
                }
                Err(e) => log::warn!("Failed to load sound {}: {}, effect will be silent", path, e),
            }
        }
        Self { sounds, settings }
    }

    pub fn play(&self, effect: SoundEffect) {
        if self.settings.muted || self.settings.sfx_volume <= 0.0 {
            return;
        }
        if let Some(sound) = &self.sounds[effect.index()] {
            play_sound(sound, PlaySoundParams {
                looped: false,
                volume: self.settings.sfx_volume,
            });
        }
    }

    /// Play the effect for each event that has one
    pub fn play_events<'a>(&self, events: impl Iterator<Item = &'a GameEvent>) {
        for effect in events.filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::runtime::GamePhase;

    #[test]
    fn test_events_map_to_effects() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Jumped), Some(SoundEffect::Jump));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::CoinCollected { score: 10, remaining: 0 }),
            Some(SoundEffect::Coin)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PlayerDied { lives_left: 2 }),
            Some(SoundEffect::Death)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PhaseChanged { from: GamePhase::Menu, to: GamePhase::Playing }),
            None
        );
    }

    #[test]
    fn test_effect_slots_are_distinct() {
        let mut seen = [false; 3];
        for effect in SoundEffect::ALL {
            assert!(!seen[effect.index()]);
            seen[effect.index()] = true;
            assert!(effect.file_name().ends_with(".wav"));
        }
    }
}
