//! Game clock for the HUD tick loop.
//!
//! Unlike a wall clock, the game clock only moves when the caller advances
//! it, so event deadlines ("recede at t = 45s") and per-tick sampling line up
//! exactly in simulations and tests.

use std::time::Duration;

/// Tracks current game time, frame count and a fixed-step accumulator.
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Current game time in seconds (the `curtime` events are stamped against).
    curtime: f32,
    /// Frame count since start.
    frame_count: u64,
    /// Fixed timestep for display ticks (default 60 Hz).
    fixed_timestep: Duration,
    /// Accumulated time for fixed ticks.
    accumulator: Duration,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// Create a clock whose current time starts at `curtime` seconds.
    pub fn starting_at(curtime: f32) -> Self {
        Self {
            curtime,
            frame_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Advance the clock by `dt` at the start of a new frame.
    pub fn advance(&mut self, dt: Duration) {
        self.curtime += dt.as_secs_f32();
        self.frame_count += 1;
        self.accumulator += dt;
    }

    /// Current game time in seconds.
    pub fn curtime(&self) -> f32 {
        self.curtime
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Get the fixed timestep as a Duration.
    pub fn fixed_timestep(&self) -> Duration {
        self.fixed_timestep
    }

    /// Check if a fixed tick should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }

    /// Set the fixed tick rate in Hz. Non-positive rates are ignored.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        if hz > 0.0 {
            self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
        } else {
            log::warn!("Ignoring non-positive tick rate {}", hz);
        }
    }
}
