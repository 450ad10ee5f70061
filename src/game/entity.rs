//! Game entities
//!
//! Every in-game object (the lander, the pads, the fuel gauge) is the
//! same mutable record: a transform, a bounding box, optional sprite
//! animation, and the contact/outcome flags written by collision
//! resolution. The fixed set of entities is created once at startup and
//! lives for the whole run; nothing spawns or despawns mid-game.

use macroquad::math::{vec3, Vec3};

use super::collision;

/// Update calls per animation frame.
pub const TICKS_PER_FRAME: u32 = 4;

/// Frames in each direction's walk cycle.
const FRAMES_PER_DIRECTION: usize = 4;

/// What an entity is, and what touching it means for the lander.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A safe landing pad.
    Platform,
    /// A rigged pad: any contact ends the run in failure.
    Trap,
    /// The lander itself.
    Player,
}

impl EntityKind {
    /// Terminal outcome of the lander touching this entity, if any.
    ///
    /// `landing` is true when contact came from above while falling.
    /// The returned value is the `mission` flag: `Some(true)` is a
    /// successful landing, `Some(false)` a failed run, `None` a plain
    /// bump that only stops movement.
    pub fn contact_outcome(self, landing: bool) -> Option<bool> {
        match self {
            EntityKind::Trap => Some(false),
            EntityKind::Platform if landing => Some(true),
            EntityKind::Platform => None,
            EntityKind::Player => None,
        }
    }
}

/// Facing direction, selecting a row list of the sprite atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    #[default]
    Down = 3,
}

/// Frame-list animation over a sprite atlas.
///
/// The atlas is `cols` x `rows` tiles and each facing direction owns its
/// own list of tile indices. The frame position advances once every
/// [`TICKS_PER_FRAME`] update calls and carries over when the facing
/// changes, so turning mid-stride does not restart the cycle.
#[derive(Debug, Clone)]
pub struct SpriteAnimation {
    pub cols: u32,
    pub rows: u32,
    frames: [[u32; FRAMES_PER_DIRECTION]; 4],
    direction: Direction,
    frame: usize,
    ticks: u32,
}

impl SpriteAnimation {
    /// Walk cycle of the 4x4 lander atlas, one four-frame list per facing.
    pub fn player_walk_cycle() -> Self {
        Self {
            cols: 4,
            rows: 4,
            frames: [
                [1, 5, 9, 13],
                [3, 7, 11, 15],
                [2, 6, 10, 14],
                [0, 4, 8, 12],
            ],
            direction: Direction::Down,
            frame: 0,
            ticks: 0,
        }
    }

    /// Advance the cadence by one update call.
    pub fn advance(&mut self) {
        self.ticks += 1;
        if self.ticks >= TICKS_PER_FRAME {
            self.ticks = 0;
            self.frame = (self.frame + 1) % FRAMES_PER_DIRECTION;
        }
    }

    /// Switch facing, keeping the current frame position.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Atlas tile index of the current frame.
    pub fn atlas_index(&self) -> u32 {
        self.frames[self.direction as usize][self.frame]
    }
}

/// Which sides of the lander made contact during the last update cycle.
///
/// Each axis pass clears its own pair before recomputing, so at most one
/// flag per axis is set per cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// A mutable in-game object.
///
/// `scale` is the visual quad size; `width`/`height` are the bounding-box
/// extents used for collision and may be narrower than the sprite (the
/// pads are). `mission`/`game_over` only ever carry meaning on the player.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub scale: Vec3,
    pub width: f32,
    pub height: f32,
    pub animation: Option<SpriteAnimation>,
    pub active: bool,
    pub contact: ContactFlags,
    pub mission: bool,
    pub game_over: bool,
}

impl Entity {
    /// A unit-sized entity at the origin.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            scale: vec3(1.0, 1.0, 1.0),
            width: 1.0,
            height: 1.0,
            animation: None,
            active: true,
            contact: ContactFlags::default(),
            mission: false,
            game_over: false,
        }
    }

    /// Advance one simulation slice.
    ///
    /// Velocity integrates before position; each axis is resolved against
    /// `colliders` right after it moves, Y first, so a diagonal approach
    /// settles vertically before sideways contact is considered. An empty
    /// collider slice skips resolution entirely (the fuel gauge and the
    /// static pads never collide).
    pub fn update(&mut self, delta_time: f32, colliders: &[Entity]) {
        if !self.active {
            return;
        }

        self.velocity += self.acceleration * delta_time;

        self.position.y += self.velocity.y * delta_time;
        if !colliders.is_empty() {
            collision::resolve_vertical(self, colliders);
        }

        self.position.x += self.velocity.x * delta_time;
        if !colliders.is_empty() {
            collision::resolve_horizontal(self, colliders);
        }

        if let Some(animation) = self.animation.as_mut() {
            animation.advance();
        }
    }

    /// Latch a terminal outcome. `game_over` is monotonic: the first
    /// contact that ends the run decides `mission`, later contacts are
    /// ignored.
    pub(crate) fn record_outcome(&mut self, mission: bool) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.mission = mission;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_integrates_before_position() {
        let mut entity = Entity::new(EntityKind::Player);
        entity.velocity = vec3(1.0, 2.0, 0.0);
        entity.acceleration = vec3(0.5, -0.15, 0.0);

        entity.update(0.5, &[]);

        let expected_velocity = vec3(1.0 + 0.5 * 0.5, 2.0 + -0.15 * 0.5, 0.0);
        assert_eq!(entity.velocity, expected_velocity);
        // Position moves by the post-integration velocity on both axes.
        assert_eq!(entity.position, expected_velocity * 0.5);
    }

    #[test]
    fn zero_delta_moves_nothing() {
        let mut entity = Entity::new(EntityKind::Player);
        entity.velocity = vec3(3.0, -1.0, 0.0);
        entity.acceleration = vec3(0.0, -0.15, 0.0);

        entity.update(0.0, &[]);

        assert_eq!(entity.velocity, vec3(3.0, -1.0, 0.0));
        assert_eq!(entity.position, Vec3::ZERO);
    }

    #[test]
    fn inactive_entity_never_updates() {
        let mut entity = Entity::new(EntityKind::Player);
        entity.velocity = vec3(1.0, 0.0, 0.0);
        entity.active = false;

        entity.update(1.0, &[]);

        assert_eq!(entity.position, Vec3::ZERO);
    }

    #[test]
    fn walk_cycle_advances_every_fourth_tick() {
        let mut animation = SpriteAnimation::player_walk_cycle();
        assert_eq!(animation.atlas_index(), 0);

        for _ in 0..TICKS_PER_FRAME {
            animation.advance();
        }
        assert_eq!(animation.atlas_index(), 4);

        for _ in 0..TICKS_PER_FRAME {
            animation.advance();
        }
        assert_eq!(animation.atlas_index(), 8);
    }

    #[test]
    fn facing_change_keeps_frame_position() {
        let mut animation = SpriteAnimation::player_walk_cycle();
        for _ in 0..TICKS_PER_FRAME {
            animation.advance();
        }
        assert_eq!(animation.atlas_index(), 4);

        animation.set_direction(Direction::Left);
        assert_eq!(animation.atlas_index(), 5);
    }

    #[test]
    fn outcome_latches_on_first_contact() {
        let mut entity = Entity::new(EntityKind::Player);
        entity.record_outcome(true);
        assert!(entity.game_over);
        assert!(entity.mission);

        entity.record_outcome(false);
        assert!(entity.game_over);
        assert!(entity.mission);
    }

    #[test]
    fn contact_outcome_per_kind() {
        assert_eq!(EntityKind::Trap.contact_outcome(true), Some(false));
        assert_eq!(EntityKind::Trap.contact_outcome(false), Some(false));
        assert_eq!(EntityKind::Platform.contact_outcome(true), Some(true));
        assert_eq!(EntityKind::Platform.contact_outcome(false), None);
    }
}
