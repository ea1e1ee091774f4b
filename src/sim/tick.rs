//! Simulation tick
//!
//! Core game loop that advances the run by one variable-length step.
//! Order within a tick: intents, physics, spawner, progression, collision.

use rand::Rng;

use super::physics::{self, Intent};
use super::state::{CharacterState, GameEvent, GameState};
use super::{autopilot, collision, progression, spawn};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Edge-triggered intents, in arrival order
    pub intents: Vec<Intent>,
    /// Idle/demo mode - AI plays the game
    pub autopilot: bool,
}

impl TickInput {
    pub fn with_intents(intents: &[Intent]) -> Self {
        Self {
            intents: intents.to_vec(),
            autopilot: false,
        }
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Clear one-shot intents after they have been consumed
    pub fn clear(&mut self) {
        self.intents.clear();
    }
}

/// Make a frame delta safe to integrate with.
///
/// Negative or non-finite deltas become 0; stalls are capped at `MAX_FRAME_DT`
/// so the player can't tunnel through the ground.
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Rejected invalid frame delta {dt}");
        0.0
    } else if dt > MAX_FRAME_DT {
        log::warn!("Frame delta {dt:.3}s clamped to {MAX_FRAME_DT}s");
        MAX_FRAME_DT
    } else {
        dt
    }
}

/// Advance the game state by `dt` seconds
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut R) {
    // Restart wins over everything else queued this tick
    if input.intents.contains(&Intent::RestartRequested) {
        log::info!("Run restarted");
        state.reset();
        return;
    }

    // Frozen world after a crash
    if state.run.game_over {
        return;
    }

    let dt = sanitize_dt(dt);

    for &intent in &input.intents {
        physics::apply_intent(state, intent);
    }
    if input.autopilot {
        for intent in autopilot::decide(state) {
            physics::apply_intent(state, intent);
        }
    }

    state.run.elapsed += f64::from(dt);

    physics::step(state, dt);
    spawn::update(state, dt, rng);
    progression::update(state, dt);

    if state.run.started && collision::check_collision(state) {
        end_run(state);
    }
}

fn end_run(state: &mut GameState) {
    state.run.game_over = true;
    state.player.state = CharacterState::Dead;
    let score = state.run.score;
    let variant = state.variant;
    state.emit(GameEvent::GameOver { variant, score });
    log::info!(
        "Game over: {} scored {} (speed {:.0}, {} cacti and {} birds cleared)",
        variant.as_str(),
        score,
        state.run.speed,
        state.run.obstacles_cleared,
        state.run.birds_cleared
    );
}
