//! Rendering
//!
//! Draws the world through a fixed orthographic camera (±5 x ±3.75 world
//! units, y up) and then the end-of-run banner in screen space. Texture
//! decoding, upload and glyph layout are all macroquad's job; this module
//! only submits quads.

use macroquad::prelude::*;

use crate::game::{Entity, GameState};

const BACKGROUND: Color = Color::new(0.1922, 0.549, 0.9059, 1.0);

const WORLD_HALF_WIDTH: f32 = 5.0;
const WORLD_HALF_HEIGHT: f32 = 3.75;

const BANNER_FONT_SIZE: u16 = 48;

/// The three sprite textures, loaded once before the loop starts.
pub struct Assets {
    pub player: Texture2D,
    pub platform: Texture2D,
    pub fuel: Texture2D,
}

impl Assets {
    /// Load every sprite, terminating the process on the first failure.
    pub async fn load() -> Assets {
        Assets {
            player: load_texture_or_die("assets/george_0.png").await,
            platform: load_texture_or_die("assets/platformPack_tile027.png").await,
            fuel: load_texture_or_die("assets/fuel.png").await,
        }
    }
}

/// A missing or undecodable sprite is the one fatal error class in the
/// game; there is nothing to do but log and abort.
async fn load_texture_or_die(path: &str) -> Texture2D {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            texture
        }
        Err(err) => {
            error!("unable to load {}: {:?}", path, err);
            std::process::exit(1);
        }
    }
}

/// Draw one frame: fuel gauge, lander, pads, then the banner if the run
/// is over.
pub fn draw(state: &GameState, assets: &Assets) {
    clear_background(BACKGROUND);

    set_camera(&Camera2D {
        target: vec2(0.0, 0.0),
        zoom: vec2(1.0 / WORLD_HALF_WIDTH, 1.0 / WORLD_HALF_HEIGHT),
        ..Default::default()
    });

    draw_entity(&state.fuel, &assets.fuel);
    draw_entity(&state.player, &assets.player);
    for pad in &state.platforms {
        draw_entity(pad, &assets.platform);
    }

    set_default_camera();
    if state.player.game_over {
        if state.player.mission {
            draw_banner("MISSION SUCCESS!");
        } else {
            draw_banner("MISSION FAILED!");
        }
    }
}

/// Submit one entity quad, centered on its position and sized by its
/// scale. Animated entities draw the current tile of their atlas;
/// everything else draws its whole texture.
fn draw_entity(entity: &Entity, texture: &Texture2D) {
    if !entity.active {
        return;
    }

    let size = vec2(entity.scale.x, entity.scale.y);
    let source = entity.animation.as_ref().map(|animation| {
        let tile_width = texture.width() / animation.cols as f32;
        let tile_height = texture.height() / animation.rows as f32;
        let index = animation.atlas_index();
        Rect::new(
            (index % animation.cols) as f32 * tile_width,
            (index / animation.cols) as f32 * tile_height,
            tile_width,
            tile_height,
        )
    });

    draw_texture_ex(
        texture,
        entity.position.x - size.x / 2.0,
        entity.position.y - size.y / 2.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(size),
            source,
            // The world camera is y-up; textures are stored y-down.
            flip_y: true,
            ..Default::default()
        },
    );
}

fn draw_banner(text: &str) {
    let dims = measure_text(text, None, BANNER_FONT_SIZE, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        screen_height() / 2.0,
        BANNER_FONT_SIZE as f32,
        WHITE,
    );
}
