//! Score, speed ramp and day/night cycle
//!
//! Scoring is distance based: every `distance_per_point` pixels scrolled is
//! one point. Each time the score crosses a multiple of
//! `speed_step_interval` the world speeds up. Night falls at
//! `night_threshold` and flips every `night_interval` points after that.

use super::state::{GameEvent, GameState};

/// Advance score, speed and day/night for one tick
pub fn update(state: &mut GameState, dt: f32) {
    if state.run.started {
        state.run.distance += f64::from(state.run.speed * dt);
        // distance only grows, so the score can't go backwards
        let per_point = f64::from(state.tuning.distance_per_point);
        let score = (state.run.distance / per_point).floor() as u64;
        state.run.score = state.run.score.max(score);
        ramp_speed(state);
    }
    update_day_night(state);
}

/// Apply one speed step per interval boundary crossed since the last tick
fn ramp_speed(state: &mut GameState) {
    let interval = state.tuning.speed_step_interval.max(1);
    let reached = state.run.score / interval;

    while state.run.speed_steps < reached {
        state.run.speed_steps += 1;
        let speed = state.run.speed + state.tuning.speed_step;
        state.run.speed = state.tuning.clamp_speed(speed);
        let score = state.run.speed_steps * interval;
        state.emit(GameEvent::Milestone { score });
        log::debug!("Score {} reached, speed now {:.0}", score, state.run.speed);
    }
}

/// Flip day/night on each milestone crossed. Runs the same way while idle.
fn update_day_night(state: &mut GameState) {
    let threshold = state.tuning.night_threshold;
    let interval = state.tuning.night_interval.max(1);

    loop {
        let next = if state.run.last_milestone == 0 {
            threshold
        } else {
            state.run.last_milestone + interval
        };
        if next == 0 || state.run.score < next {
            break;
        }
        state.run.last_milestone = next;
        state.run.is_night = !state.run.is_night;
        let is_night = state.run.is_night;
        state.emit(GameEvent::DayNightChanged { is_night });
        log::info!(
            "{} at score {}",
            if is_night { "Night falls" } else { "Day breaks" },
            next
        );
    }
}
