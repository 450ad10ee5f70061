//! Lander simulation core
//!
//! Everything that moves lives here: the entity record shared by the
//! lander, the pads and the fuel gauge; per-axis AABB collision
//! resolution; the fixed-timestep accumulator; and the game state that
//! owns the whole entity set for a run.
//!
//! Rendering and input live outside this module; the simulation never
//! touches the windowing layer, which keeps all of it testable.

pub mod collision;
pub mod entity;
pub mod timestep;
pub mod world;

// Re-export main types
pub use entity::{Direction, Entity, EntityKind};
pub use timestep::{FixedTimestep, FIXED_TIMESTEP};
pub use world::{Controls, GameState, GRAVITY, PLATFORM_COUNT};
