//! LUNAR LANDER
//!
//! Land the sprite on one of the pads; one of them is rigged. The arrow
//! keys thrust (burning fuel), Q quits. The simulation advances at a
//! fixed timestep decoupled from the frame rate, so the physics behave
//! the same at any refresh rate.

mod game;
mod input;
mod render;

use macroquad::prelude::*;

use game::GameState;

fn window_conf() -> Conf {
    Conf {
        window_title: "LUNAR LANDER".to_string(),
        window_width: 640,
        window_height: 480,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let assets = render::Assets::load().await;
    let mut state = GameState::new(&mut ::rand::thread_rng());
    info!("lander ready: {} pads, one of them rigged", game::PLATFORM_COUNT);

    loop {
        let frame = input::read();
        if frame.quit {
            break;
        }

        state.apply_controls(frame.controls);
        state.advance(get_frame_time());
        render::draw(&state, &assets);

        next_frame().await;
    }
}
