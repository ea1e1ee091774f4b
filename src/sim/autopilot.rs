//! Demo-mode AI
//!
//! Looks at the nearest hazard ahead of the runner and decides whether to
//! jump, duck or stand. Produces ordinary intents so it exercises exactly
//! the same code paths as a human player.

use super::physics::Intent;
use super::state::{Bird, GameState};

/// Jump when a cactus is this many seconds from contact
const JUMP_LEAD: f32 = 0.15;
/// Duck when a low bird is this many seconds from contact
const DUCK_LEAD: f32 = 0.3;

/// Seconds until the left edge of something at `x` moving at `speed` reaches `player_right`
fn time_to_contact(x: f32, player_right: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return f32::INFINITY;
    }
    (x - player_right).max(0.0) / speed
}

/// A low bird flies at head height of a standing runner
fn is_low(bird: &Bird) -> bool {
    bird.band == 0
}

/// Intents the AI wants to send this tick
pub fn decide(state: &GameState) -> Vec<Intent> {
    let mut intents = Vec::new();
    if state.run.game_over {
        return intents;
    }
    if !state.run.started {
        intents.push(Intent::JumpPressed);
        return intents;
    }

    let player = &state.player;
    let left = player.rect.left();
    let right = player.rect.right();
    let speed = state.run.speed;
    let bird_speed = speed * state.tuning.bird_speed_factor;

    let cactus_due = state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > left)
        .map(|o| time_to_contact(o.rect.left(), right, speed))
        .fold(f32::INFINITY, f32::min);

    let low_bird_near = state
        .birds
        .iter()
        .filter(|b| is_low(b) && b.rect.right() > left)
        .any(|b| time_to_contact(b.rect.left(), right, bird_speed) <= DUCK_LEAD);

    if low_bird_near && player.on_ground {
        if !player.crouching {
            intents.push(Intent::DuckPressed);
        }
        return intents;
    }

    if player.crouching {
        intents.push(Intent::DuckReleased);
    }
    if player.on_ground && cactus_due <= JUMP_LEAD {
        intents.push(Intent::JumpPressed);
    }
    intents
}
