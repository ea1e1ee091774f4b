//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so a run can be retuned
//! from the settings file without touching the simulation.

use serde::{Deserialize, Serialize};

/// How the collision detector decides whether an overlap counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Any non-empty intersection is a hit
    Exact,
    /// Intersection area must exceed `min_area` (pixels²) to count
    Forgiving { min_area: f32 },
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        CollisionPolicy::Forgiving { min_area: 12.0 }
    }
}

/// Gameplay tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player physics ===
    /// Downward acceleration while airborne (pixels/s²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_impulse: f32,
    /// Extra downward velocity added when ducking in the air
    pub fast_fall_impulse: f32,

    // === Scrolling ===
    pub base_speed: f32,
    pub max_speed: f32,
    /// Speed gained each time the score crosses a multiple of `speed_step_interval`
    pub speed_step: f32,
    pub speed_step_interval: u64,
    /// Birds close in faster than cacti
    pub bird_speed_factor: f32,
    /// Clouds drift at `speed / cloud_drift_divisor`
    pub cloud_drift_divisor: f32,

    // === Spawning ===
    pub spawn_gap_min: f32,
    pub spawn_gap_max: f32,
    /// Gap shrinks by `(speed - base_speed) / gap_shrink_divisor` seconds
    pub gap_shrink_divisor: f32,
    /// Hard floor on the gap between spawns (seconds)
    pub gap_floor: f32,
    /// Gap multiplier after a bird spawn
    pub aerial_gap_factor: f32,
    /// Probability that a spawn is a cactus rather than a bird
    pub ground_obstacle_chance: f32,
    /// Probability of a cloud accompanying each spawn
    pub cloud_chance: f32,
    /// Maximum horizontal jitter past the right edge (cactus, bird, cloud)
    pub cactus_jitter: f32,
    pub bird_jitter: f32,
    pub cloud_jitter: f32,

    // === Collision ===
    pub collision: CollisionPolicy,

    // === Progression ===
    /// Distance units per score point
    pub distance_per_point: f32,
    /// First score at which night falls
    pub night_threshold: u64,
    /// Score interval between subsequent day/night switches
    pub night_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 2400.0,
            jump_impulse: -700.0,
            fast_fall_impulse: 300.0,

            base_speed: 200.0,
            max_speed: 420.0,
            speed_step: 20.0,
            speed_step_interval: 100,
            bird_speed_factor: 1.4,
            cloud_drift_divisor: 1.5,

            spawn_gap_min: 1.0,
            spawn_gap_max: 1.8,
            gap_shrink_divisor: 600.0,
            gap_floor: 0.7,
            aerial_gap_factor: 1.3,
            ground_obstacle_chance: 0.7,
            cloud_chance: 0.8,
            cactus_jitter: 40.0,
            bird_jitter: 60.0,
            cloud_jitter: 50.0,

            collision: CollisionPolicy::default(),

            distance_per_point: 10.0,
            night_threshold: 200,
            night_interval: 200,
        }
    }
}

impl Tuning {
    /// Clamp a speed into the legal `[base_speed, max_speed]` band.
    /// A hand-edited file with `base_speed > max_speed` pins speed at `base_speed`.
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.min(self.max_speed).max(self.base_speed)
    }
}
