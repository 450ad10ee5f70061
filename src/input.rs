//! Input snapshot
//!
//! Translates macroquad's key state into a per-frame [`Controls`]
//! snapshot plus a quit request. Kept apart from the simulation so game
//! logic never touches the windowing layer.

use macroquad::prelude::*;

use crate::game::Controls;

/// Everything the loop needs to know about this frame's input.
pub struct FrameInput {
    pub controls: Controls,
    pub quit: bool,
}

/// Poll the currently held thruster keys and the quit key.
pub fn read() -> FrameInput {
    FrameInput {
        controls: Controls {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
        },
        quit: is_key_pressed(KeyCode::Q),
    }
}
