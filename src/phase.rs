// Perpetual orbit clock: each cycle eases one full revolution over
// `cycle_seconds`, rests for `pause_seconds`, and starts again.
// Frame-driven; the owner calls `advance(dt)` and the driver never runs itself.

use log::debug;

use crate::config::OrbitConfig;
use crate::easing::{CubicBezier, EASE_IN_OUT};

#[derive(Clone, Debug)]
pub struct PhaseDriver {
    cycle_seconds: f64,
    pause_seconds: f64,
    curve: CubicBezier,
    elapsed: f64,
    running: bool,
}

impl PhaseDriver {
    pub fn new(cycle_seconds: f64, pause_seconds: f64) -> Self {
        Self {
            cycle_seconds: cycle_seconds.max(f64::EPSILON),
            pause_seconds: pause_seconds.max(0.0),
            curve: EASE_IN_OUT,
            elapsed: 0.0,
            running: true,
        }
    }

    pub fn from_config(config: &OrbitConfig) -> Self {
        Self::new(config.cycle_seconds, config.pause_seconds)
    }

    /// Move the clock forward; ignored once stopped or for non-positive steps.
    pub fn advance(&mut self, dt: f64) {
        if self.running && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Cancel the loop. Progress freezes where it is and never resumes.
    pub fn stop(&mut self) {
        if self.running {
            debug!("phase driver stopped at {:.3}s", self.elapsed);
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Revolutions completed so far, including the eased partial one.
    /// Non-decreasing in `elapsed`; exactly `n` during the n-th pause.
    pub fn progress(&self) -> f64 {
        let period = self.cycle_seconds + self.pause_seconds;
        let cycles = (self.elapsed / period).floor();
        let within = self.elapsed - cycles * period;
        let partial = if within < self.cycle_seconds {
            self.curve.ease(within / self.cycle_seconds)
        } else {
            1.0
        };
        cycles + partial
    }
}
