//! Frame time sources

use std::time::Instant;

/// Supplies the elapsed time between consecutive frames
pub trait Clock {
    /// Seconds since the previous call (or since creation)
    fn delta(&mut self) -> f32;
}

/// Wall-clock time
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Scripted clock returning a fixed step every frame. Used headless and in tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    step: f32,
}

impl ManualClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Clock for ManualClock {
    fn delta(&mut self) -> f32 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(0.5);
        assert_eq!(clock.delta(), 0.5);
        assert_eq!(clock.delta(), 0.5);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.delta();
        let b = clock.delta();
        assert!(a >= 0.0 && b >= 0.0);
    }
}
