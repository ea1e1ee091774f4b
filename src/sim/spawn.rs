//! Procedural hazard and cloud spawning
//!
//! A countdown runs while the world scrolls. When it expires one hazard
//! (cactus or bird) is created just past the right edge, maybe a cloud too,
//! and the countdown is re-rolled. Gaps shrink as speed rises but never go
//! below the configured floor.

use rand::Rng;

use super::rect::Rect;
use super::state::{Bird, CACTUS_SPRITES, Cloud, GameState, Obstacle, ObstacleSize};
use crate::consts::*;
use crate::tuning::Tuning;

/// Which hazard a spawn produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Cactus,
    Bird,
}

/// Uniform draw in `[lo, hi)`; degenerate ranges return `lo`
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

/// Count down and spawn when due. Does nothing before the run starts.
pub fn update<R: Rng>(state: &mut GameState, dt: f32, rng: &mut R) {
    if !state.run.started {
        return;
    }

    state.run.spawn_timer -= dt;
    if state.run.spawn_timer > 0.0 {
        return;
    }

    let hazard = if rng.random::<f32>() < state.tuning.ground_obstacle_chance {
        let cactus = spawn_cactus(&state.tuning, rng);
        state.obstacles.push(cactus);
        HazardKind::Cactus
    } else {
        let bird = spawn_bird(&state.tuning, rng);
        state.birds.push(bird);
        HazardKind::Bird
    };

    let cloud = rng.random::<f32>() < state.tuning.cloud_chance;
    if cloud {
        let c = spawn_cloud(&state.tuning, rng);
        state.clouds.push(c);
    }

    state.run.spawn_timer = next_gap(&state.tuning, state.run.speed, hazard, rng);
    log::debug!(
        "Spawned {:?} (cloud: {}), next in {:.2}s at speed {:.0}",
        hazard,
        cloud,
        state.run.spawn_timer,
        state.run.speed
    );
}

/// Roll the seconds until the next spawn
pub fn next_gap<R: Rng>(tuning: &Tuning, speed: f32, hazard: HazardKind, rng: &mut R) -> f32 {
    let gap = uniform(rng, tuning.spawn_gap_min, tuning.spawn_gap_max);
    let shrink = (speed - tuning.base_speed).max(0.0) / tuning.gap_shrink_divisor;
    let gap = (gap - shrink).max(tuning.gap_floor);

    match hazard {
        HazardKind::Bird => gap * tuning.aerial_gap_factor,
        HazardKind::Cactus => gap,
    }
}

fn spawn_cactus<R: Rng>(tuning: &Tuning, rng: &mut R) -> Obstacle {
    let (size, w, h) = if rng.random_bool(0.5) {
        (
            ObstacleSize::Large,
            uniform(rng, 16.0, 22.0),
            uniform(rng, 30.0, 40.0),
        )
    } else {
        (
            ObstacleSize::Small,
            uniform(rng, 10.0, 16.0),
            uniform(rng, 20.0, 30.0),
        )
    };
    let x = PLAY_WIDTH + uniform(rng, 0.0, tuning.cactus_jitter);

    Obstacle {
        rect: Rect::new(x, GROUND_Y - h, w, h),
        size,
        sprite: rng.random_range(0..CACTUS_SPRITES),
    }
}

fn spawn_bird<R: Rng>(tuning: &Tuning, rng: &mut R) -> Bird {
    let band = rng.random_range(0..BIRD_BANDS.len());
    let x = PLAY_WIDTH + uniform(rng, 0.0, tuning.bird_jitter);
    let y = GROUND_Y - BIRD_BANDS[band];

    Bird {
        rect: Rect::new(x, y, BIRD_WIDTH, BIRD_HEIGHT),
        band: band as u8,
        flap_timer: 0.0,
        wing_up: false,
    }
}

fn spawn_cloud<R: Rng>(tuning: &Tuning, rng: &mut R) -> Cloud {
    let x = PLAY_WIDTH + uniform(rng, 0.0, tuning.cloud_jitter);
    let y = uniform(rng, CLOUD_MIN_Y, CLOUD_MAX_Y);
    Cloud {
        rect: Rect::new(x, y, CLOUD_WIDTH, CLOUD_HEIGHT),
    }
}
