//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every rate is scaled by the tick's dt
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, timing or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod progression;
pub mod rect;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::check_collision;
pub use physics::Intent;
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use spawn::HazardKind;
pub use state::{
    Bird, CharacterState, CharacterVariant, Cloud, GameEvent, GameState, Obstacle, ObstacleSize,
    Player, RunState,
};
pub use tick::{TickInput, sanitize_dt, tick};
