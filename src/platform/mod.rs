//! Platform abstraction layer
//!
//! Handles the parts of the outside world the simulation must not touch:
//! - Time: frame deltas from a real or scripted clock
//! - Input: turning raw button edges into simulation intents

pub mod input;
pub mod time;

pub use input::{Button, IntentFilter};
pub use time::{Clock, ManualClock, SystemClock};
