//! Forgotten Academia
//!
//! Walk with WASD/ZQSD/arrows (or the left stick), hover a skeleton or a
//! circle and click to hit it. Skeletons drop a bone when they break.
//! Escape quits, F3 toggles the debug overlay.

use std::sync::OnceLock;

use macroquad::prelude::*;

use forgotten_academia::config::GameConfig;
use forgotten_academia::game::renderer::{color_from_rgba_hex, draw_debug_overlay, draw_world, world_camera, SpriteAtlas};
use forgotten_academia::game::interaction::Activation;
use forgotten_academia::game::{FpsCounter, Simulation};
use forgotten_academia::input::{Action, InputState};
use forgotten_academia::VERSION;

/// Directory holding the sprite images
const ASSET_DIR: &str = "assets";

/// Loaded once in `window_conf`, read by `main`
static CONFIG: OnceLock<GameConfig> = OnceLock::new();

fn config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::load_or_default)
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn window_conf() -> Conf {
    // Runs before main; logging has to be up before the config is read
    init_logging();
    let window = &config().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    log::info!("=== Forgotten Academia v{} ===", VERSION);

    let config = config();
    let clear_color = color_from_rgba_hex(config.window.clear_color);
    let atlas = SpriteAtlas::load(ASSET_DIR).await;

    let mut sim = Simulation::from_config(config);
    let mut input = InputState::new();
    let mut fps = FpsCounter::new();
    let mut show_debug = config.render.show_debug_overlay;

    if input.has_gamepad() {
        log::info!("Gamepad connected");
    }

    loop {
        input.poll();
        let delta_time = get_frame_time();

        // Cursor is mapped with last frame's camera, same as what's on screen
        let camera = world_camera(&sim, &config.camera);
        let (mouse_x, mouse_y) = mouse_position();
        let cursor_world = camera.screen_to_world(vec2(mouse_x, mouse_y));

        sim.tick(&input.frame_input(delta_time, cursor_world));

        if let Some(Activation::Damaged { target, remaining }) = sim.frame().activation {
            if let Some(hit) = sim.world.entities.get(target) {
                log::info!("The {} cracks ({} left)", hit.kind.label(), remaining);
            }
        }
        for death in &sim.events.death {
            match death.loot {
                Some(_) => log::info!("A {} crumbles and leaves something behind", death.kind.label()),
                None => log::info!("A {} is destroyed", death.kind.label()),
            }
        }

        if input.action_pressed(Action::ToggleDebug) {
            show_debug = !show_debug;
        }

        clear_background(clear_color);
        let camera = world_camera(&sim, &config.camera);
        draw_world(&sim, &atlas, &camera, &config.render);

        if let Some(frames) = fps.tick(delta_time as f64) {
            log::info!("fps: {}", frames);
        }
        if show_debug {
            draw_debug_overlay(&sim, fps.fps());
        }

        if sim.should_exit() {
            log::info!("Exit requested after {} ticks", sim.tick_count());
            break;
        }

        next_frame().await;
    }
}
