//! Dino Runner - A side-scrolling reaction game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, progression)
//! - `runner`: Clock-driven driver that feeds intents into the simulation
//! - `platform`: Time sources and input edge filtering
//! - `persistence`: Line-oriented record file
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScores, ScoreSink};
pub use runner::Runner;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta accepted by a tick; anything longer is a stall
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 640.0;
    pub const PLAY_HEIGHT: f32 = 240.0;
    /// Ground line (y grows downward, so everything standing has bottom == GROUND_Y)
    pub const GROUND_Y: f32 = 200.0;
    /// Width of one ground tile, used to wrap the scroll offset
    pub const GROUND_TILE_WIDTH: f32 = 40.0;

    /// Player defaults - x is fixed, the world scrolls instead
    pub const PLAYER_X: f32 = 40.0;
    pub const PLAYER_WIDTH: f32 = 36.0;
    pub const PLAYER_STAND_HEIGHT: f32 = 40.0;
    pub const PLAYER_CROUCH_HEIGHT: f32 = 20.0;

    /// Run/duck animation: frames per cycle and seconds per frame
    pub const RUN_FRAMES: u32 = 2;
    pub const DUCK_FRAMES: u32 = 2;
    pub const ANIM_FRAME_DURATION: f32 = 0.08;

    /// Bird wing flap period (seconds per wing phase)
    pub const BIRD_FLAP_DURATION: f32 = 0.15;
    pub const BIRD_WIDTH: f32 = 28.0;
    pub const BIRD_HEIGHT: f32 = 18.0;
    /// Bird top edge offsets above the ground line (low, mid, high)
    pub const BIRD_BANDS: [f32; 3] = [45.0, 70.0, 100.0];

    /// Cloud sprite size and vertical band (top edge)
    pub const CLOUD_WIDTH: f32 = 60.0;
    pub const CLOUD_HEIGHT: f32 = 30.0;
    pub const CLOUD_MIN_Y: f32 = 20.0;
    pub const CLOUD_MAX_Y: f32 = 120.0;
}
