//! Collision System
//!
//! Axis-aligned bounding-box checks between the player and level entities.
//! Platforms are one-way: the player only lands on them while falling, and
//! only if the feet are still above the platform's vertical middle.

use super::entities::{Coin, Enemy, Platform};
use super::player::Player;
use super::rect::Rect;

/// Index of the first platform directly under the player's feet.
///
/// Probes one pixel below the player rectangle, so a player resting on a
/// platform (feet one pixel inside it) is always detected.
pub fn standing_on(player_rect: &Rect, platforms: &[Platform]) -> Option<usize> {
    let probe = player_rect.translated(0.0, 1.0);
    platforms.iter().position(|p| p.rect.overlaps(&probe))
}

/// Whether a jump may start this step
pub fn can_jump(player: &Player, platforms: &[Platform]) -> bool {
    !player.jumping && standing_on(&player.rect(), platforms).is_some()
}

/// Land the player on the lowest overlapping platform, if falling onto it.
///
/// Returns the index of the platform landed on. The feet are placed one
/// pixel inside the platform so the next step still sees the contact.
pub fn resolve_landing(player: &mut Player, platforms: &[Platform]) -> Option<usize> {
    if player.vel.y <= 0.0 {
        return None;
    }

    let rect = player.rect();
    let mut lowest: Option<usize> = None;
    for (i, platform) in platforms.iter().enumerate() {
        if !platform.rect.overlaps(&rect) {
            continue;
        }
        // Strictly greater keeps the first of equally low platforms
        if lowest.map_or(true, |l| platform.rect.bottom() > platforms[l].rect.bottom()) {
            lowest = Some(i);
        }
    }

    let index = lowest?;
    let target = &platforms[index].rect;
    if player.pos.y < target.center_y() {
        player.land(target.y + 1.0);
        Some(index)
    } else {
        None
    }
}

/// Remove every coin touching the player, returning how many were taken
pub fn collect_coins(player_rect: &Rect, coins: &mut Vec<Coin>) -> usize {
    let before = coins.len();
    coins.retain(|coin| !coin.rect.overlaps(player_rect));
    before - coins.len()
}

/// Any enemy touching the player
pub fn touches_enemy(player_rect: &Rect, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| e.rect.overlaps(player_rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerSettings;
    use macroquad::math::vec2;

    fn player_at(x: f32, feet_y: f32) -> Player {
        Player::new(vec2(x, feet_y), &PlayerSettings::default(), 3)
    }

    #[test]
    fn test_lands_on_platform_top() {
        let platforms = vec![Platform::fixed(0.0, 560.0, 800.0, 40.0)];
        let mut p = player_at(100.0, 562.0);
        p.vel.y = 3.0;
        p.jumping = true;

        assert_eq!(resolve_landing(&mut p, &platforms), Some(0));
        assert_eq!(p.pos.y, 561.0);
        assert_eq!(p.vel.y, 0.0);
        assert!(!p.jumping);
        assert!(p.on_ground);
    }

    #[test]
    fn test_no_landing_while_rising() {
        let platforms = vec![Platform::fixed(0.0, 560.0, 800.0, 40.0)];
        let mut p = player_at(100.0, 562.0);
        p.vel.y = -5.0;
        assert_eq!(resolve_landing(&mut p, &platforms), None);
        assert_eq!(p.pos.y, 562.0);
    }

    #[test]
    fn test_no_landing_when_feet_below_middle() {
        // Jumping up through a thin platform from below
        let platforms = vec![Platform::fixed(100.0, 400.0, 150.0, 20.0)];
        let mut p = player_at(150.0, 415.0);
        p.vel.y = 1.0;
        assert_eq!(resolve_landing(&mut p, &platforms), None);
        assert_eq!(p.pos.y, 415.0);
    }

    #[test]
    fn test_picks_lowest_overlapping_platform() {
        let platforms = vec![
            Platform::fixed(0.0, 380.0, 200.0, 20.0),
            Platform::fixed(0.0, 395.0, 200.0, 20.0),
        ];
        let mut p = player_at(100.0, 396.0);
        p.vel.y = 2.0;
        // Lowest is index 1 (bottom 415), whose centre is 405 > 396
        assert_eq!(resolve_landing(&mut p, &platforms), Some(1));
        assert_eq!(p.pos.y, 396.0);
    }

    #[test]
    fn test_can_jump_only_when_supported() {
        let platforms = vec![Platform::fixed(0.0, 560.0, 800.0, 40.0)];
        let mut p = player_at(100.0, 561.0);
        assert!(can_jump(&p, &platforms));

        p.jumping = true;
        assert!(!can_jump(&p, &platforms));

        let airborne = player_at(100.0, 500.0);
        assert!(!can_jump(&airborne, &platforms));
    }

    #[test]
    fn test_standing_exactly_on_top_counts() {
        let platforms = vec![Platform::fixed(0.0, 560.0, 800.0, 40.0)];
        let p = player_at(100.0, 560.0);
        assert_eq!(standing_on(&p.rect(), &platforms), Some(0));
    }

    #[test]
    fn test_collects_only_touching_coins() {
        let mut coins = vec![Coin::new(90.0, 370.0), Coin::new(500.0, 100.0)];
        let p = player_at(100.0, 400.0);
        assert_eq!(collect_coins(&p.rect(), &mut coins), 1);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].rect.x, 500.0);
    }

    #[test]
    fn test_enemy_overlap() {
        let enemies = vec![Enemy::new(110.0, 380.0, 80.0, 1.0)];
        assert!(touches_enemy(&player_at(100.0, 400.0).rect(), &enemies));
        assert!(!touches_enemy(&player_at(300.0, 400.0).rect(), &enemies));
    }
}
