//! Read-only view of a tick for the render collaborator

use serde::Serialize;

use super::rect::Rect;
use super::state::{Bird, CharacterState, CharacterVariant, Cloud, GameState, Obstacle};

/// Everything a renderer needs for one frame, borrowed from the state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub variant: CharacterVariant,
    pub player: Rect,
    pub player_state: CharacterState,
    pub anim_frame: u32,
    /// Cacti with their cosmetic tags, oldest first
    pub obstacles: &'a [Obstacle],
    /// Birds with their wing phase, oldest first
    pub birds: &'a [Bird],
    pub clouds: &'a [Cloud],
    pub ground_offset: f32,
    pub score: u64,
    pub speed: f32,
    pub is_night: bool,
    pub started: bool,
    pub game_over: bool,
}

impl GameState {
    /// Borrow a render snapshot of the current state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            variant: self.variant,
            player: self.player.rect,
            player_state: self.player.state,
            anim_frame: self.player.anim_frame,
            obstacles: &self.obstacles,
            birds: &self.birds,
            clouds: &self.clouds,
            ground_offset: self.run.ground_offset,
            score: self.run.score,
            speed: self.run.speed,
            is_night: self.run.is_night,
            started: self.run.started,
            game_over: self.run.game_over,
        }
    }
}
