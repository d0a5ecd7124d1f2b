use std::f64::consts::TAU;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use units::Length;

/// Eccentricities are clamped to `[0, MAX_ECCENTRICITY]`; parabolic and
/// hyperbolic orbits cannot be represented.
pub const MAX_ECCENTRICITY: f64 = 0.99;

/// A fixed Kepler ellipse with the star at the origin focus.
///
/// Phase `θ` is measured from periapsis, which lies on the +x axis. The
/// orbit plane is `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitGeometry {
    semi_major_axis: Length,
    eccentricity: f64,
}

impl OrbitGeometry {
    /// Non-finite eccentricity is treated as circular.
    pub fn new(semi_major_axis: Length, eccentricity: f64) -> Self {
        let eccentricity = if eccentricity.is_finite() {
            eccentricity.clamp(0.0, MAX_ECCENTRICITY)
        } else {
            0.0
        };

        Self {
            semi_major_axis,
            eccentricity,
        }
    }

    pub fn circular(radius: Length) -> Self {
        Self::new(radius, 0.0)
    }

    pub fn semi_major_axis(&self) -> Length {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// `a(1 − e²)`
    pub fn semi_latus_rectum(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    pub fn periapsis(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Star-planet distance at phase `θ`: `a(1 − e²) / (1 + e·cos θ)`.
    pub fn radius_at(&self, phase: f64) -> Length {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * phase.cos())
    }

    /// Cartesian position at phase `θ`: `(r·cos θ, 0, r·sin θ)` in AU.
    pub fn position_at(&self, phase: f64) -> Point3<f64> {
        let r = self.radius_at(phase).to_au();
        Point3::new(r * phase.cos(), 0.0, r * phase.sin())
    }

    /// Closed polyline of `segments + 1` points, first and last at periapsis.
    pub fn trace(&self, segments: usize) -> Vec<Point3<f64>> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.position_at(i as f64 / segments as f64 * TAU))
            .collect()
    }
}
