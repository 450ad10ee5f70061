//! Game state
//!
//! [`GameState`] is the one owner of every entity in a run: the lander,
//! the fuel gauge, and the fixed array of pads, one of which is rigged at
//! startup. It is passed by reference into update and render; there are
//! no globals. The randomness source for the trap pick is injected so
//! tests can seed it.

use macroquad::math::vec3;
use rand::Rng;

use super::entity::{Direction, Entity, EntityKind, SpriteAnimation};
use super::timestep::{FixedTimestep, FIXED_TIMESTEP};

/// Number of pads, one of which is the trap.
pub const PLATFORM_COUNT: usize = 7;

/// Downward acceleration applied every tick.
pub const GRAVITY: f32 = -0.15;

/// Acceleration added along the held thruster's axis.
pub const THRUST: f32 = 0.5;

/// Fuel gauge width burned per frame of thruster input.
const FUEL_BURN: f32 = 0.01;

/// The retro (down) thruster sips fuel instead.
const FUEL_BURN_RETRO: f32 = 0.001;

/// Pad centers, in world units. Three pads sit on the floor row; the
/// rest float at various heights.
const PAD_POSITIONS: [(f32, f32); PLATFORM_COUNT] = [
    (-1.0, -3.0),
    (0.0, -3.0),
    (1.0, -3.0),
    (0.0, 2.0),
    (2.5, 2.5),
    (2.5, -2.5),
    (-1.5, 2.35),
];

/// Snapshot of the held thruster keys for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// All simulation state for one run.
pub struct GameState {
    pub player: Entity,
    pub fuel: Entity,
    pub platforms: [Entity; PLATFORM_COUNT],
    timestep: FixedTimestep,
}

impl GameState {
    /// Build the fixed entity set, designating one random pad as the trap.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut platforms: [Entity; PLATFORM_COUNT] = std::array::from_fn(|i| {
            let (x, y) = PAD_POSITIONS[i];
            let mut pad = Entity::new(EntityKind::Platform);
            pad.position = vec3(x, y, 0.0);
            // The visual tile is wider than the part that counts as pad.
            pad.width = 0.4;
            pad
        });
        platforms[rng.gen_range(0..PLATFORM_COUNT)].kind = EntityKind::Trap;

        let mut player = Entity::new(EntityKind::Player);
        player.position = vec3(-4.0, 3.0, 0.0);
        player.acceleration = vec3(0.0, GRAVITY, 0.0);
        player.width = 0.9;
        player.height = 0.9;
        player.animation = Some(SpriteAnimation::player_walk_cycle());

        // The gauge is a stretched quad outside the playfield; its kind is
        // inert because it never enters collision.
        let mut fuel = Entity::new(EntityKind::Platform);
        fuel.position = vec3(-5.0, 3.0, 0.0);
        fuel.scale = vec3(21.0, 0.3, 1.0);

        Self {
            player,
            fuel,
            platforms,
            timestep: FixedTimestep::new(),
        }
    }

    /// Rebuild the player's acceleration from gravity plus the held keys
    /// and burn fuel accordingly. Keys are checked in a fixed order, so a
    /// later held key overwrites the thrust vector of an earlier one.
    pub fn apply_controls(&mut self, controls: Controls) {
        self.player.acceleration = vec3(0.0, GRAVITY, 0.0);

        if controls.left {
            self.player.acceleration = vec3(-THRUST, GRAVITY, 0.0);
            self.face(Direction::Left);
            self.burn_fuel(FUEL_BURN);
        }
        if controls.right {
            self.player.acceleration = vec3(THRUST, GRAVITY, 0.0);
            self.face(Direction::Right);
            self.burn_fuel(FUEL_BURN);
        }
        if controls.up {
            self.player.acceleration = vec3(0.0, THRUST + GRAVITY, 0.0);
            self.face(Direction::Up);
            self.burn_fuel(FUEL_BURN);
        }
        if controls.down {
            self.player.acceleration = vec3(0.0, -THRUST + GRAVITY, 0.0);
            self.face(Direction::Down);
            self.burn_fuel(FUEL_BURN_RETRO);
        }
    }

    /// Feed one frame's wall-clock delta and run however many fixed steps
    /// it covers. Returns the number of steps simulated.
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        let steps = self.timestep.advance(frame_delta);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// One fixed simulation step. Only the lander collides; the pads are
    /// static and the gauge flies free.
    fn step(&mut self) {
        self.player.update(FIXED_TIMESTEP, &self.platforms);
        self.fuel.update(FIXED_TIMESTEP, &[]);
    }

    fn face(&mut self, direction: Direction) {
        if let Some(animation) = self.player.animation.as_mut() {
            animation.set_direction(direction);
        }
    }

    fn burn_fuel(&mut self, amount: f32) {
        // Thrusting after the run is decided costs nothing.
        if self.player.game_over {
            return;
        }
        self.fuel.scale.x = (self.fuel.scale.x - amount).max(0.0);
    }
}
