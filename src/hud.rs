//! Screen-space overlay: health and mana bars, win banner, pause text.

use macroquad::prelude::*;

use crate::hero::Hero;

const BAR_X: f32 = 20.0;
const BAR_Y: f32 = 20.0;
const BAR_WIDTH: f32 = 220.0;
const BAR_HEIGHT: f32 = 18.0;
const BAR_GAP: f32 = 8.0;

/// Health bar color by remaining fraction.
fn health_color(frac: f32) -> Color {
    if frac <= 0.25 {
        RED
    } else if frac <= 0.75 {
        YELLOW
    } else {
        GREEN
    }
}

fn draw_bar(x: f32, y: f32, frac: f32, fill: Color) {
    draw_rectangle(x, y, BAR_WIDTH, BAR_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.5));
    draw_rectangle(x, y, BAR_WIDTH * frac.clamp(0.0, 1.0), BAR_HEIGHT, fill);
    draw_rectangle_lines(x, y, BAR_WIDTH, BAR_HEIGHT, 2.0, WHITE);
}

pub fn draw_hud(hero: &Hero) {
    let hp_frac = hero.hp / hero.max_hp;
    let mp_frac = hero.mp / hero.max_mp;
    draw_bar(BAR_X, BAR_Y, hp_frac, health_color(hp_frac));
    draw_bar(BAR_X, BAR_Y + BAR_HEIGHT + BAR_GAP, mp_frac, BLUE);

    if hero.won {
        draw_banner("You made it!");
    }
}

pub fn draw_pause_overlay() {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.4),
    );
    draw_banner("Paused");
}

fn draw_banner(text: &str) {
    let size = 48.0;
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        screen_height() / 2.0,
        size,
        WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_color_thresholds() {
        assert_eq!(health_color(0.1), RED);
        assert_eq!(health_color(0.25), RED);
        assert_eq!(health_color(0.5), YELLOW);
        assert_eq!(health_color(0.75), YELLOW);
        assert_eq!(health_color(1.0), GREEN);
    }
}
