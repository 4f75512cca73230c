//! Tick clock for the simulation loop.
//!
//! Unlike a wall-clock timer, the clock is advanced by the host with the
//! delta it measured (or a fixed step). Same sequence of deltas in, same
//! elapsed times out, so ticks replay identically in tests.

use std::time::Duration;

/// Host-driven simulation clock.
#[derive(Debug)]
pub struct SimClock {
    /// Duration of the last tick.
    delta: Duration,
    /// Total simulated time since start.
    elapsed: Duration,
    /// Tick count since start.
    frame_count: u64,
    /// Fixed timestep for hosts that want fixed-rate updates (default 60 Hz).
    fixed_timestep: Duration,
    /// Accumulated time for fixed updates.
    accumulator: Duration,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Advance the clock by one tick of `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        let delta = Duration::from_secs_f64(delta.max(0.0) as f64);
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
        self.accumulator += delta;
    }

    /// Get the delta time of the last tick in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total simulated time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Get the current tick count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Check if a fixed update should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }

    /// Set the fixed timestep rate in Hz.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed_and_frames() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.frame_count(), 2);
        assert!((clock.elapsed_seconds() - 0.75).abs() < 1e-9);
        assert!((clock.delta_seconds() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn fixed_update_consumes_accumulator() {
        let mut clock = SimClock::new();
        clock.set_fixed_rate(10.0); // 0.1 s steps
        clock.advance(0.25);
        assert!(clock.should_fixed_update());
        assert!(clock.should_fixed_update());
        assert!(!clock.should_fixed_update());
    }

    #[test]
    fn negative_delta_is_clamped() {
        let mut clock = SimClock::new();
        clock.advance(-1.0);
        assert_eq!(clock.elapsed_seconds(), 0.0);
        assert_eq!(clock.frame_count(), 1);
    }
}
