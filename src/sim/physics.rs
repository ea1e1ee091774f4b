//! Player physics and character state machine
//!
//! The player never moves horizontally; the world scrolls past instead.
//! State transitions:
//! - `Start` until the first jump
//! - `Run` <-> `Duck` while grounded, following the crouch flag
//! - `Run`/`Duck` -> `Jump` on a grounded jump, back on landing
//! - anything -> `Dead` (set by the controller, cleared only by reset)

use glam::Vec2;

use super::state::{CharacterState, GameEvent, GameState, Player};
use crate::consts::*;

/// Abstract input event, already debounced by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    JumpPressed,
    JumpReleased,
    DuckPressed,
    DuckReleased,
    RestartRequested,
}

/// Apply a movement intent. Restart is handled by the controller.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    if state.run.game_over {
        return;
    }

    match intent {
        Intent::JumpPressed => {
            if !state.run.started {
                state.run.started = true;
                state.emit(GameEvent::Started);
                log::info!("Run started ({})", state.variant.as_str());
            }
            let player = &mut state.player;
            if player.on_ground {
                player.on_ground = false;
                player.vy = state.tuning.jump_impulse;
                player.state = CharacterState::Jump;
                player.rect.set_height_keep_bottom(PLAYER_STAND_HEIGHT);
                state.emit(GameEvent::Jumped);
            }
        }
        Intent::DuckPressed => {
            let player = &mut state.player;
            player.crouching = true;
            // Fast-fall
            if !player.on_ground {
                player.vy += state.tuning.fast_fall_impulse;
            }
        }
        Intent::DuckReleased => {
            let player = &mut state.player;
            if player.crouching {
                player.crouching = false;
                player.rect.set_height_keep_bottom(PLAYER_STAND_HEIGHT);
            }
        }
        Intent::JumpReleased | Intent::RestartRequested => {}
    }
}

/// Advance the world and the player by `dt`. Does nothing before the run starts.
pub fn step(state: &mut GameState, dt: f32) {
    if !state.run.started {
        return;
    }

    scroll_world(state, dt);

    if integrate_player(&mut state.player, dt, state.tuning.gravity) {
        state.emit(GameEvent::Landed);
    }
    apply_crouch_geometry(&mut state.player);
    resolve_state(&mut state.player);
    animate(&mut state.player, dt);
}

/// Translate everything left and drop whatever has left the play area
fn scroll_world(state: &mut GameState, dt: f32) {
    let speed = state.run.speed;
    let tuning = &state.tuning;

    let ground_dx = Vec2::new(-speed * dt, 0.0);
    let bird_dx = ground_dx * tuning.bird_speed_factor;
    let cloud_dx = ground_dx / tuning.cloud_drift_divisor;

    for obstacle in &mut state.obstacles {
        obstacle.rect.translate(ground_dx);
    }
    for bird in &mut state.birds {
        bird.rect.translate(bird_dx);
        bird.flap(dt);
    }
    for cloud in &mut state.clouds {
        cloud.rect.translate(cloud_dx);
    }

    state.run.ground_offset = (state.run.ground_offset + speed * dt).rem_euclid(GROUND_TILE_WIDTH);

    // Entities are pushed in spawn order, so `retain` keeps them sorted
    let before = (state.obstacles.len(), state.birds.len());
    state.obstacles.retain(|o| o.rect.right() >= 0.0);
    state.birds.retain(|b| b.rect.right() >= 0.0);
    state.clouds.retain(|c| c.rect.right() >= 0.0);

    state.run.obstacles_cleared += (before.0 - state.obstacles.len()) as u32;
    state.run.birds_cleared += (before.1 - state.birds.len()) as u32;
}

/// Vertical motion. Returns true on the tick the player touches down.
fn integrate_player(player: &mut Player, dt: f32, gravity: f32) -> bool {
    if player.on_ground {
        return false;
    }

    player.vy += gravity * dt;
    player.rect.translate(Vec2::new(0.0, player.vy * dt));

    // Only a descending player can land
    if player.vy >= 0.0 && player.rect.bottom() >= GROUND_Y {
        player.rect.move_bottom(GROUND_Y);
        player.vy = 0.0;
        player.on_ground = true;
        player.state = if player.crouching {
            CharacterState::Duck
        } else {
            CharacterState::Run
        };
        return true;
    }
    false
}

/// Crouch height only applies with both feet on the ground
fn apply_crouch_geometry(player: &mut Player) {
    let height = if player.on_ground && player.crouching {
        PLAYER_CROUCH_HEIGHT
    } else {
        PLAYER_STAND_HEIGHT
    };
    if player.rect.height() != height {
        player.rect.set_height_keep_bottom(height);
    }
}

/// Grounded Run/Duck toggling; Jump, Start and Dead are sticky here
fn resolve_state(player: &mut Player) {
    match player.state {
        CharacterState::Run | CharacterState::Duck => {
            player.state = if player.on_ground && player.crouching {
                CharacterState::Duck
            } else {
                CharacterState::Run
            };
        }
        CharacterState::Start | CharacterState::Jump | CharacterState::Dead => {}
    }
}

/// Cycle run/duck frames on a fixed cadence
fn animate(player: &mut Player, dt: f32) {
    let frames = match player.state {
        CharacterState::Run => RUN_FRAMES,
        CharacterState::Duck => DUCK_FRAMES,
        _ => return,
    };

    player.anim_timer += dt;
    while player.anim_timer >= ANIM_FRAME_DURATION {
        player.anim_timer -= ANIM_FRAME_DURATION;
        player.anim_frame = (player.anim_frame + 1) % frames;
    }
    player.anim_frame %= frames;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Bird, Cloud, Obstacle, ObstacleSize};

    fn started_state() -> GameState {
        let mut state = GameState::default();
        state.run.started = true;
        state.player.state = CharacterState::Run;
        state
    }

    #[test]
    fn test_jump_sets_impulse_and_starts_run() {
        let mut state = GameState::default();
        apply_intent(&mut state, Intent::JumpPressed);

        assert!(state.run.started);
        assert_eq!(state.player.state, CharacterState::Jump);
        assert_eq!(state.player.vy, state.tuning.jump_impulse);
        assert!(!state.player.on_ground);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Started, GameEvent::Jumped]
        );
    }

    #[test]
    fn test_double_jump_is_noop() {
        let mut state = started_state();
        apply_intent(&mut state, Intent::JumpPressed);
        step(&mut state, SIM_DT);
        let vy = state.player.vy;

        apply_intent(&mut state, Intent::JumpPressed);
        assert_eq!(state.player.vy, vy);
        assert_eq!(state.player.state, CharacterState::Jump);
    }

    #[test]
    fn test_intents_ignored_after_game_over() {
        let mut state = started_state();
        state.run.game_over = true;
        state.player.state = CharacterState::Dead;

        apply_intent(&mut state, Intent::JumpPressed);
        apply_intent(&mut state, Intent::DuckPressed);

        assert!(state.player.on_ground);
        assert!(!state.player.crouching);
        assert_eq!(state.player.state, CharacterState::Dead);
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let mut state = started_state();
        apply_intent(&mut state, Intent::JumpPressed);

        let mut landed = false;
        for _ in 0..120 {
            step(&mut state, SIM_DT);
            if state.player.on_ground {
                landed = true;
                break;
            }
        }

        assert!(landed);
        assert_eq!(state.player.state, CharacterState::Run);
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(state.player.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn test_fast_fall_adds_downward_velocity() {
        let mut state = started_state();
        apply_intent(&mut state, Intent::JumpPressed);
        let vy = state.player.vy;
        apply_intent(&mut state, Intent::DuckPressed);
        assert_eq!(state.player.vy, vy + state.tuning.fast_fall_impulse);
        // Still standing height while airborne
        step(&mut state, SIM_DT);
        assert_eq!(state.player.rect.height(), PLAYER_STAND_HEIGHT);
    }

    #[test]
    fn test_crouch_held_through_landing_ducks() {
        let mut state = started_state();
        apply_intent(&mut state, Intent::JumpPressed);
        apply_intent(&mut state, Intent::DuckPressed);

        for _ in 0..120 {
            step(&mut state, SIM_DT);
            if state.player.on_ground {
                break;
            }
        }

        assert_eq!(state.player.state, CharacterState::Duck);
        assert_eq!(state.player.rect.height(), PLAYER_CROUCH_HEIGHT);
        assert_eq!(state.player.rect.bottom(), GROUND_Y);

        apply_intent(&mut state, Intent::DuckReleased);
        step(&mut state, SIM_DT);
        assert_eq!(state.player.state, CharacterState::Run);
        assert_eq!(state.player.rect.height(), PLAYER_STAND_HEIGHT);
        assert_eq!(state.player.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn test_idle_world_does_not_move() {
        let mut state = GameState::default();
        state.obstacles.push(Obstacle {
            rect: Rect::new(500.0, 170.0, 12.0, 30.0),
            size: ObstacleSize::Small,
            sprite: 0,
        });
        step(&mut state, SIM_DT);
        assert_eq!(state.obstacles[0].rect.left(), 500.0);
        assert_eq!(state.player.state, CharacterState::Start);
    }

    #[test]
    fn test_scroll_speeds_and_culling() {
        let mut state = started_state();
        state.obstacles.push(Obstacle {
            rect: Rect::new(300.0, 170.0, 12.0, 30.0),
            size: ObstacleSize::Small,
            sprite: 0,
        });
        state.obstacles.push(Obstacle {
            rect: Rect::new(-11.0, 170.0, 12.0, 30.0),
            size: ObstacleSize::Small,
            sprite: 0,
        });
        state.birds.push(Bird {
            rect: Rect::new(300.0, 155.0, BIRD_WIDTH, BIRD_HEIGHT),
            band: 0,
            flap_timer: 0.0,
            wing_up: false,
        });
        state.clouds.push(Cloud {
            rect: Rect::new(300.0, 50.0, CLOUD_WIDTH, CLOUD_HEIGHT),
        });

        step(&mut state, 0.1);

        // 200 px/s * 0.1 s
        assert_eq!(state.obstacles.len(), 1);
        assert!((state.obstacles[0].rect.left() - 280.0).abs() < 1e-3);
        assert!((state.birds[0].rect.left() - 272.0).abs() < 1e-3);
        assert!(state.clouds[0].rect.left() > 280.0);
        assert!(state.clouds[0].rect.left() < 300.0);
        assert_eq!(state.run.obstacles_cleared, 1);
        assert_eq!(state.run.birds_cleared, 0);
    }

    #[test]
    fn test_run_animation_cycles() {
        let mut state = started_state();
        assert_eq!(state.player.anim_frame, 0);
        step(&mut state, ANIM_FRAME_DURATION + 0.001);
        assert_eq!(state.player.anim_frame, 1);
        step(&mut state, ANIM_FRAME_DURATION);
        assert_eq!(state.player.anim_frame, 0);
    }
}
