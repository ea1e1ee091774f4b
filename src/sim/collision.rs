//! Collision detection between the runner and hazards
//!
//! Sprites carry transparent padding, so the default policy ignores
//! overlaps smaller than a few pixels². Clouds are never tested.

use super::rect::Rect;
use super::state::GameState;
use crate::tuning::CollisionPolicy;

/// Does an overlap between `a` and `b` count as a hit under `policy`?
pub fn overlaps(a: &Rect, b: &Rect, policy: CollisionPolicy) -> bool {
    match policy {
        CollisionPolicy::Exact => a.intersects(b),
        CollisionPolicy::Forgiving { min_area } => a.overlap_area(b) > min_area,
    }
}

/// True if the player hits any cactus or bird
pub fn check_collision(state: &GameState) -> bool {
    let player = &state.player.rect;
    let policy = state.tuning.collision;

    state
        .obstacles
        .iter()
        .map(|o| &o.rect)
        .chain(state.birds.iter().map(|b| &b.rect))
        .any(|rect| overlaps(player, rect, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Bird, Cloud, Obstacle, ObstacleSize};

    fn cactus_at(x: f32) -> Obstacle {
        Obstacle {
            rect: Rect::new(x, GROUND_Y - 30.0, 12.0, 30.0),
            size: ObstacleSize::Small,
            sprite: 0,
        }
    }

    #[test]
    fn test_forgiving_ignores_sliver() {
        // Player spans x 40..76; a 2px-wide sliver overlap is 2*30 = 60 px², a 0.2px one is 6
        let a = Rect::new(40.0, 160.0, 36.0, 40.0);
        let sliver = Rect::new(75.8, 170.0, 12.0, 30.0);
        let policy = CollisionPolicy::Forgiving { min_area: 12.0 };
        assert!(!overlaps(&a, &sliver, policy));
        assert!(overlaps(&a, &sliver, CollisionPolicy::Exact));

        let solid = Rect::new(74.0, 170.0, 12.0, 30.0);
        assert!(overlaps(&a, &solid, policy));
    }

    #[test]
    fn test_cactus_hit() {
        let mut state = GameState::default();
        state.obstacles.push(cactus_at(60.0));
        assert!(check_collision(&state));
    }

    #[test]
    fn test_far_cactus_misses() {
        let mut state = GameState::default();
        state.obstacles.push(cactus_at(300.0));
        assert!(!check_collision(&state));
    }

    #[test]
    fn test_low_bird_hits_standing_but_not_crouched() {
        let mut state = GameState::default();
        state.birds.push(Bird {
            rect: Rect::new(50.0, GROUND_Y - BIRD_BANDS[0], BIRD_WIDTH, BIRD_HEIGHT),
            band: 0,
            flap_timer: 0.0,
            wing_up: false,
        });
        assert!(check_collision(&state));

        state.player.rect.set_height_keep_bottom(PLAYER_CROUCH_HEIGHT);
        assert!(!check_collision(&state));
    }

    #[test]
    fn test_clouds_never_collide() {
        let mut state = GameState::default();
        state.clouds.push(Cloud {
            rect: state.player.rect,
        });
        assert!(!check_collision(&state));
    }
}
