use std::path::Path;

use macroquad::prelude::*;

mod assets;
mod camera;
mod collision;
mod config;
mod enemy;
mod entity;
mod geom;
mod hero;
mod hud;
mod input;
mod level;
mod motion;
mod projectile;
mod render;
mod world;

use assets::Assets;
use camera::Camera;
use config::Tuning;
use input::InputSnapshot;
use world::World;

const TICKS_PER_SECOND: f64 = 60.0;
const TICK_SECONDS: f64 = 1.0 / TICKS_PER_SECOND;

/// Used when the level file on disk cannot be read.
const FALLBACK_LEVEL: &str = include_str!("../assets/levels/level1.txt");

fn window_conf() -> Conf {
    Conf {
        window_title: "Scrapline".to_owned(),
        window_width: 1000,
        window_height: 750,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let tuning = Tuning::load_or_default(Path::new("assets/tuning.ron"));
    let assets = Assets::load().await;
    if assets.failed > 0 {
        warn!(
            "{} textures missing, drawing flat-color fallbacks",
            assets.failed
        );
    }

    let level_text = match load_string(&tuning.level_path).await {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "level {} unavailable ({}), using the built-in level",
                tuning.level_path, err
            );
            FALLBACK_LEVEL.to_owned()
        }
    };

    let mut world = World::new();
    world.kill_plane_y = tuning.kill_plane_y;
    level::build_level(&mut world, &level_text);
    info!("level loaded, {} entities", world.entities.len());

    let mut camera = Camera::new(
        screen_width(),
        screen_height(),
        tuning.camera_deadzone_x,
        tuning.camera_deadzone_y,
    );
    if let Some(rect) = world.hero_rect() {
        camera.follow(&rect, &world.bounds);
    }

    let mut paused = false;
    let mut last_time = get_time();
    let mut accumulator = 0.0;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            paused = !paused;
        }

        let now = get_time();
        // Clamp the frame slice so a long stall can't fire a tick burst.
        accumulator += (now - last_time).min(tuning.max_step);
        last_time = now;

        if paused {
            accumulator = 0.0;
        }
        while accumulator >= TICK_SECONDS {
            accumulator -= TICK_SECONDS;
            let input = InputSnapshot::poll(camera.view_offset());
            world.step(&input);
        }

        if let Some(rect) = world.hero_rect() {
            camera.follow(&rect, &world.bounds);
        }

        clear_background(Color::new(0.12, 0.14, 0.20, 1.0));
        render::draw_world(&world, &assets, &camera, tuning.show_hitboxes);
        if let Some(hero) = world.hero() {
            hud::draw_hud(hero);
        }
        if paused {
            hud::draw_pause_overlay();
        }

        next_frame().await;
    }
}
