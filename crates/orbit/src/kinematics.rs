use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use units::Length;

use crate::clock::PhaseClock;
use crate::geometry::OrbitGeometry;

/// Fraction of the semi-major axis below which the current radius is not
/// allowed to fall when computing the angular rate.
pub const RADIUS_FLOOR_FRACTION: f64 = 0.01;

/// Upper bound on the angular rate, radians per unit of display time.
/// Degenerate orbits (near-zero radius beside a very bright star) would
/// otherwise overflow to infinity and stall the clock.
pub const MAX_ANGULAR_RATE: f64 = 1.0e9;

/// Drives a [`PhaseClock`] along an [`OrbitGeometry`].
///
/// The angular rate at phase `θ` is
///
/// ```text
/// dθ/dt = (a_ref / r(θ))² · √(1 − e²)
/// ```
///
/// so `r²·dθ/dt` is constant (equal areas in equal times). The `√(1 − e²)`
/// factor makes one revolution take the same display time for any
/// eccentricity at a given semi-major axis. `a_ref` is a display reference
/// radius (the habitable-zone midpoint) so comparable systems animate at
/// comparable speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kinematics {
    geometry: OrbitGeometry,
    reference_radius: Length,
    radius_floor_fraction: f64,
}

impl Kinematics {
    pub fn new(geometry: OrbitGeometry, reference_radius: Length) -> Self {
        Self::with_radius_floor(geometry, reference_radius, RADIUS_FLOOR_FRACTION)
    }

    pub fn with_radius_floor(
        geometry: OrbitGeometry,
        reference_radius: Length,
        radius_floor_fraction: f64,
    ) -> Self {
        Self {
            geometry,
            reference_radius,
            radius_floor_fraction,
        }
    }

    pub fn geometry(&self) -> &OrbitGeometry {
        &self.geometry
    }

    pub fn reference_radius(&self) -> Length {
        self.reference_radius
    }

    /// Angular rate in radians per unit of display time at phase `θ`,
    /// capped at [`MAX_ANGULAR_RATE`].
    pub fn angular_rate(&self, phase: f64) -> f64 {
        let a = self.geometry.semi_major_axis();
        let e = self.geometry.eccentricity();
        let r = self.geometry.radius_at(phase).max(a * self.radius_floor_fraction);

        // f64::min also maps a NaN ratio (0/0) to the cap.
        ((self.reference_radius / r).powi(2) * (1.0 - e * e).sqrt()).min(MAX_ANGULAR_RATE)
    }

    /// Advances `clock` by `dt` of display time and returns the new phase.
    ///
    /// The rate is sampled at the start of the step. Zero, negative and
    /// non-finite `dt` leave the clock untouched.
    pub fn advance(&self, clock: &mut PhaseClock, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            clock.step(dt * self.angular_rate(clock.phase()));
        }
        clock.phase()
    }

    pub fn radius(&self, clock: &PhaseClock) -> Length {
        self.geometry.radius_at(clock.phase())
    }

    pub fn position(&self, clock: &PhaseClock) -> Point3<f64> {
        self.geometry.position_at(clock.phase())
    }
}
