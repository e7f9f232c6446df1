//! Full-screen menus and the in-game HUD
//!
//! Positions are given as the top-left corner of the text and scale with
//! the configured window size.

use macroquad::prelude::*;
use super::theme::*;

/// Baseline for text whose top edge should sit at `top`
pub fn text_baseline(top: f32, font_size: f32) -> f32 {
    top + font_size * 0.8
}

/// Draw text with its top-left corner at (x, y)
pub fn draw_text_top_left(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    draw_text(text, x, text_baseline(y, font_size), font_size, color);
}

pub fn score_line(score: u32) -> String {
    format!("Final Score: {}", score)
}

/// Title screen. `level_name` is the level the next game will use.
pub fn draw_menu(title: &str, level_name: &str, has_gamepad: bool, w: f32, h: f32) {
    clear_background(SKY_COLOR);
    draw_text_top_left(title, w / 2.0 - 180.0, h / 4.0, FONT_SIZE_TITLE, TEXT_COLOR);
    draw_text_top_left(
        &format!("Level: {}", level_name),
        w / 2.0 - 180.0,
        h / 4.0 + 60.0,
        FONT_SIZE_BODY,
        TEXT_DIM,
    );
    draw_text_top_left(
        "Arrow keys to move, Space to jump",
        w / 2.0 - 180.0,
        h / 2.0,
        FONT_SIZE_BODY,
        TEXT_COLOR,
    );
    draw_text_top_left("Collect all coins to win!", w / 2.0 - 120.0, h / 2.0 + 40.0, FONT_SIZE_BODY, TEXT_COLOR);
    if has_gamepad {
        draw_text_top_left(
            "Gamepad: D-pad to move, A to jump, Start to begin",
            w / 2.0 - 230.0,
            h / 2.0 + 80.0,
            FONT_SIZE_BODY,
            TEXT_DIM,
        );
    }
    draw_text_top_left("Press Enter to start", w / 2.0 - 100.0, h * 3.0 / 4.0, FONT_SIZE_BODY, TEXT_COLOR);
}

pub fn draw_game_over(score: u32, w: f32, h: f32) {
    clear_background(GAME_OVER_BG);
    draw_text_top_left("GAME OVER", w / 2.0 - 140.0, h / 4.0, FONT_SIZE_TITLE, GAME_OVER_COLOR);
    draw_end_lines(score, w, h);
}

pub fn draw_win(score: u32, w: f32, h: f32) {
    clear_background(SKY_COLOR);
    draw_text_top_left("YOU WIN!", w / 2.0 - 100.0, h / 4.0, FONT_SIZE_TITLE, WIN_COLOR);
    draw_end_lines(score, w, h);
}

fn draw_end_lines(score: u32, w: f32, h: f32) {
    draw_text_top_left(&score_line(score), w / 2.0 - 80.0, h / 2.0, FONT_SIZE_BODY, TEXT_COLOR);
    draw_text_top_left(
        "Press Enter to return to menu",
        w / 2.0 - 150.0,
        h * 3.0 / 4.0,
        FONT_SIZE_BODY,
        TEXT_COLOR,
    );
}

/// Score top-left, lives top-right
pub fn draw_hud(score: u32, lives: u32, w: f32) {
    draw_text_top_left(&format!("Score: {}", score), 10.0, 10.0, FONT_SIZE_BODY, TEXT_COLOR);
    draw_text_top_left(&format!("Lives: {}", lives), w - 100.0, 10.0, FONT_SIZE_BODY, TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_sits_below_top() {
        assert_eq!(text_baseline(10.0, 22.0), 10.0 + 22.0 * 0.8);
        assert!(text_baseline(0.0, FONT_SIZE_TITLE) > text_baseline(0.0, FONT_SIZE_BODY));
    }

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(0), "Final Score: 0");
        assert_eq!(score_line(120), "Final Score: 120");
    }
}
