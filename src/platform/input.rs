//! Edge-triggered input filtering
//!
//! Keyboards auto-repeat and GPIO lines are sampled as levels; the simulation
//! only wants one intent per real press and one per real release. The filter
//! remembers which buttons are held and drops everything that isn't a
//! transition.

use crate::sim::Intent;

/// Abstract game buttons, independent of any key or pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Jump,
    Duck,
    Restart,
}

impl Button {
    fn slot(self) -> usize {
        match self {
            Button::Jump => 0,
            Button::Duck => 1,
            Button::Restart => 2,
        }
    }
}

/// Turns button presses/releases into intents, suppressing repeats
#[derive(Debug, Clone, Default)]
pub struct IntentFilter {
    held: [bool; 3],
}

impl IntentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A press event; `None` if the button was already held (auto-repeat)
    pub fn press(&mut self, button: Button) -> Option<Intent> {
        let held = &mut self.held[button.slot()];
        if *held {
            return None;
        }
        *held = true;
        Some(match button {
            Button::Jump => Intent::JumpPressed,
            Button::Duck => Intent::DuckPressed,
            Button::Restart => Intent::RestartRequested,
        })
    }

    /// A release event; `None` if the button wasn't held or has no release intent
    pub fn release(&mut self, button: Button) -> Option<Intent> {
        let held = &mut self.held[button.slot()];
        if !*held {
            return None;
        }
        *held = false;
        match button {
            Button::Jump => Some(Intent::JumpReleased),
            Button::Duck => Some(Intent::DuckReleased),
            Button::Restart => None,
        }
    }

    /// A sampled level (e.g. a GPIO line); only changes produce intents
    pub fn level(&mut self, button: Button, pressed: bool) -> Option<Intent> {
        if pressed {
            self.press(button)
        } else {
            self.release(button)
        }
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held[button.slot()]
    }

    /// Forget held buttons, e.g. when focus is lost
    pub fn clear(&mut self) {
        self.held = [false; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_repeat_suppressed() {
        let mut filter = IntentFilter::new();
        assert_eq!(filter.press(Button::Jump), Some(Intent::JumpPressed));
        assert_eq!(filter.press(Button::Jump), None);
        assert_eq!(filter.press(Button::Jump), None);
        assert_eq!(filter.release(Button::Jump), Some(Intent::JumpReleased));
        assert_eq!(filter.press(Button::Jump), Some(Intent::JumpPressed));
    }

    #[test]
    fn test_level_sampling_emits_edges_only() {
        let mut filter = IntentFilter::new();
        let samples = [false, true, true, true, false, false, true];
        let intents: Vec<_> = samples
            .iter()
            .filter_map(|&level| filter.level(Button::Duck, level))
            .collect();
        assert_eq!(
            intents,
            vec![
                Intent::DuckPressed,
                Intent::DuckReleased,
                Intent::DuckPressed
            ]
        );
    }

    #[test]
    fn test_restart_has_no_release_intent() {
        let mut filter = IntentFilter::new();
        assert_eq!(filter.press(Button::Restart), Some(Intent::RestartRequested));
        assert_eq!(filter.release(Button::Restart), None);
        assert!(!filter.is_held(Button::Restart));
    }

    #[test]
    fn test_clear_forgets_held() {
        let mut filter = IntentFilter::new();
        filter.press(Button::Duck);
        filter.clear();
        assert!(!filter.is_held(Button::Duck));
        assert_eq!(filter.release(Button::Duck), None);
    }
}
