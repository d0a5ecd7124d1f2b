use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use units::DAYS_PER_YEAR;

/// Orbital phase of one running simulation.
///
/// Starts at zero and only moves forward. It is a plain value owned by
/// whoever drives the animation; the orbit it runs along lives elsewhere
/// and is never mutated. Elapsed time is always read off the phase, so the
/// two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseClock {
    phase: f64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase in radians (unbounded, not wrapped to 2π).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn elapsed_days(&self, period_days: f64) -> f64 {
        elapsed_days_at(self.phase, period_days)
    }

    pub fn elapsed_years(&self, period_days: f64) -> f64 {
        self.elapsed_days(period_days) / DAYS_PER_YEAR
    }

    /// Moves the phase forward by `step` radians. Negative or non-finite
    /// steps are ignored.
    pub(crate) fn step(&mut self, step: f64) {
        if step.is_finite() && step > 0.0 {
            self.phase += step;
        }
    }
}

/// `(θ / 2π) · period`, so one full revolution is exactly one period.
pub fn elapsed_days_at(phase: f64, period_days: f64) -> f64 {
    phase / TAU * period_days
}
