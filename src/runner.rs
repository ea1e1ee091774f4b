//! Frame driver
//!
//! Owns everything the pure simulation must not: the clock, the seeded RNG,
//! the input edge filter and the queue of intents gathered between frames.
//! Each `frame()` reads one delta from the clock, runs one tick and hands
//! the final score to the persistence collaborator when a run ends.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::ScoreSink;
use crate::platform::{Button, Clock, IntentFilter};
use crate::settings::Settings;
use crate::sim::{CharacterVariant, GameEvent, GameState, Intent, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

/// Drives a `GameState` from a clock and queued input
pub struct Runner<C: Clock> {
    state: GameState,
    rng: Pcg32,
    seed: u64,
    clock: C,
    input: TickInput,
    filter: IntentFilter,
}

impl<C: Clock> Runner<C> {
    pub fn new(tuning: Tuning, variant: CharacterVariant, seed: u64, clock: C) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(tuning, variant),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            clock,
            input: TickInput::default(),
            filter: IntentFilter::new(),
        }
    }

    /// Build from settings; a missing seed is drawn from the OS
    pub fn from_settings(settings: &Settings, clock: C) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut runner = Self::new(settings.tuning.clone(), settings.character, seed, clock);
        runner.set_autopilot(settings.autopilot);
        runner
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Raw button press (repeats are dropped)
    pub fn press(&mut self, button: Button) {
        if let Some(intent) = self.filter.press(button) {
            self.input.push(intent);
        }
    }

    /// Raw button release
    pub fn release(&mut self, button: Button) {
        if let Some(intent) = self.filter.release(button) {
            self.input.push(intent);
        }
    }

    /// Queue an already-debounced intent
    pub fn send(&mut self, intent: Intent) {
        self.input.push(intent);
    }

    /// Run one tick with the time elapsed since the last frame.
    /// Returns the events it produced.
    pub fn frame<S: ScoreSink + ?Sized>(&mut self, sink: &mut S) -> Vec<GameEvent> {
        let dt = self.clock.delta();
        tick(&mut self.state, &self.input, dt, &mut self.rng);
        // Clear one-shot inputs after processing
        self.input.clear();

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::GameOver { variant, score } = *event {
                sink.submit(variant, score);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::platform::ManualClock;
    use crate::sim::CharacterState;

    /// Records every submission
    #[derive(Default)]
    struct Recorder(Vec<(CharacterVariant, u64)>);

    impl ScoreSink for Recorder {
        fn submit(&mut self, variant: CharacterVariant, score: u64) -> bool {
            self.0.push((variant, score));
            true
        }
    }

    fn runner(seed: u64) -> Runner<ManualClock> {
        Runner::new(
            Tuning::default(),
            CharacterVariant::Cowboy,
            seed,
            ManualClock::new(SIM_DT),
        )
    }

    #[test]
    fn test_held_jump_only_jumps_once() {
        let mut runner = runner(1);
        let mut sink = Recorder::default();

        runner.press(Button::Jump);
        let events = runner.frame(&mut sink);
        assert!(events.contains(&GameEvent::Jumped));

        // Key repeat while airborne and after landing
        for _ in 0..60 {
            runner.press(Button::Jump);
            let events = runner.frame(&mut sink);
            assert!(!events.contains(&GameEvent::Jumped));
        }
    }

    #[test]
    fn test_game_over_reaches_sink_once() {
        let mut runner = runner(2);
        runner.set_autopilot(false);
        let mut sink = Recorder::default();

        // Start and then never jump again: the first cactus ends the run
        runner.send(Intent::JumpPressed);
        for _ in 0..(60 * 30) {
            runner.frame(&mut sink);
        }

        assert!(runner.state().run.game_over);
        assert_eq!(runner.state().player.state, CharacterState::Dead);
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].0, CharacterVariant::Cowboy);
        assert_eq!(sink.0[0].1, runner.state().run.score);
    }

    #[test]
    fn test_restart_button_resets() {
        let mut runner = runner(3);
        let mut sink = Recorder::default();
        runner.send(Intent::JumpPressed);
        for _ in 0..30 {
            runner.frame(&mut sink);
        }
        assert!(runner.state().run.started);

        runner.press(Button::Restart);
        runner.frame(&mut sink);
        assert!(!runner.state().run.started);
        assert_eq!(runner.state().run.score, 0);
        assert_eq!(runner.state().variant, CharacterVariant::Cowboy);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = runner(42);
        let mut b = runner(42);
        a.set_autopilot(true);
        b.set_autopilot(true);
        let mut sink = Recorder::default();

        for _ in 0..900 {
            a.frame(&mut sink);
            b.frame(&mut sink);
        }

        assert_eq!(a.state().run.score, b.state().run.score);
        assert_eq!(a.state().run.game_over, b.state().run.game_over);
        assert_eq!(a.state().obstacles.len(), b.state().obstacles.len());
    }

    #[test]
    fn test_from_settings_uses_seed() {
        let settings = Settings {
            seed: Some(1234),
            character: CharacterVariant::Pirate,
            ..Default::default()
        };
        let runner = Runner::from_settings(&settings, ManualClock::new(SIM_DT));
        assert_eq!(runner.seed(), 1234);
        assert_eq!(runner.state().variant, CharacterVariant::Pirate);
        assert!(runner.input.autopilot);
    }
}
