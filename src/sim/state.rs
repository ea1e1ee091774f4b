//! Game state and core simulation types
//!
//! The entity store (player, cacti, birds, clouds) plus the per-run counters.
//! Everything a renderer or a replay needs lives here.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Discrete animation/logic state of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterState {
    /// Idle before the first jump
    #[default]
    Start,
    Run,
    Duck,
    Jump,
    /// Terminal until reset
    Dead,
}

/// Cosmetic character skin. No gameplay effect; the index keys high scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum CharacterVariant {
    #[default]
    Normal,
    YellowHat,
    Santa,
    Cowboy,
    Pirate,
}

impl CharacterVariant {
    pub const ALL: [CharacterVariant; 5] = [
        CharacterVariant::Normal,
        CharacterVariant::YellowHat,
        CharacterVariant::Santa,
        CharacterVariant::Cowboy,
        CharacterVariant::Pirate,
    ];

    /// Stable index used as the persistence key
    pub fn index(&self) -> u32 {
        match self {
            CharacterVariant::Normal => 0,
            CharacterVariant::YellowHat => 1,
            CharacterVariant::Santa => 2,
            CharacterVariant::Cowboy => 3,
            CharacterVariant::Pirate => 4,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterVariant::Normal => "Normal",
            CharacterVariant::YellowHat => "Yellow Hat",
            CharacterVariant::Santa => "Santa",
            CharacterVariant::Cowboy => "Cowboy",
            CharacterVariant::Pirate => "Pirate",
        }
    }
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    pub on_ground: bool,
    /// Duck held by the player
    pub crouching: bool,
    pub state: CharacterState,
    /// Current run/duck frame index
    pub anim_frame: u32,
    /// Time accumulated toward the next animation frame
    pub anim_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                PLAYER_X,
                GROUND_Y - PLAYER_STAND_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_STAND_HEIGHT,
            ),
            vy: 0.0,
            on_ground: true,
            crouching: false,
            state: CharacterState::Start,
            anim_frame: 0,
            anim_timer: 0.0,
        }
    }
}

/// Cactus size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleSize {
    Small,
    Large,
}

/// Number of sprite sub-kinds per cactus size class
pub const CACTUS_SPRITES: u8 = 3;

/// A ground hazard. `size` and `sprite` only select artwork; the rect is the hitbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub size: ObstacleSize,
    /// Sprite sub-kind in `0..CACTUS_SPRITES`
    pub sprite: u8,
}

/// An aerial hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub rect: Rect,
    /// Height band index into `BIRD_BANDS`
    pub band: u8,
    /// Time since the last wing flip
    pub flap_timer: f32,
    pub wing_up: bool,
}

impl Bird {
    /// Advance the wing animation
    pub fn flap(&mut self, dt: f32) {
        self.flap_timer += dt;
        while self.flap_timer >= BIRD_FLAP_DURATION {
            self.flap_timer -= BIRD_FLAP_DURATION;
            self.wing_up = !self.wing_up;
        }
    }
}

/// Background decoration, never collides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub rect: Rect,
}

/// Per-run counters and flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Scroll speed (pixels/s), within `[base_speed, max_speed]`
    pub speed: f32,
    pub score: u64,
    /// Total scrolled distance since the run started
    pub distance: f64,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    pub is_night: bool,
    /// Score of the last day/night switch (0 = none yet)
    pub last_milestone: u64,
    /// Speed-step boundaries already applied
    pub speed_steps: u64,
    pub started: bool,
    pub game_over: bool,
    /// Ground tile scroll offset in `[0, GROUND_TILE_WIDTH)`
    pub ground_offset: f32,
    pub obstacles_cleared: u32,
    pub birds_cleared: u32,
    /// Seconds simulated since reset (sanitized deltas only)
    pub elapsed: f64,
}

impl RunState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.base_speed,
            score: 0,
            distance: 0.0,
            spawn_timer: 0.0,
            is_night: false,
            last_milestone: 0,
            speed_steps: 0,
            started: false,
            game_over: false,
            ground_offset: 0.0,
            obstacles_cleared: 0,
            birds_cleared: 0,
            elapsed: 0.0,
        }
    }
}

/// Notifications for sound/UI/persistence collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First jump of the run; the world starts scrolling
    Started,
    Jumped,
    Landed,
    /// Score crossed a speed-step boundary
    Milestone { score: u64 },
    DayNightChanged { is_night: bool },
    /// Emitted exactly once per run
    GameOver {
        variant: CharacterVariant,
        score: u64,
    },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub variant: CharacterVariant,
    pub player: Player,
    /// Ground obstacles, oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    pub birds: Vec<Bird>,
    pub clouds: Vec<Cloud>,
    pub run: RunState,
    /// Pending notifications, drained by the driver
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run with the given balance and skin
    pub fn new(tuning: Tuning, variant: CharacterVariant) -> Self {
        let run = RunState::new(&tuning);
        Self {
            tuning,
            variant,
            player: Player::default(),
            obstacles: Vec::new(),
            birds: Vec::new(),
            clouds: Vec::new(),
            run,
            events: Vec::new(),
        }
    }

    /// Discard every entity and counter; keeps tuning and skin
    pub fn reset(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.birds.clear();
        self.clouds.clear();
        self.run = RunState::new(&self.tuning);
        self.events.clear();
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default(), CharacterVariant::default())
    }
}
