use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// Mass of the Earth in grams (5.972 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.972e27;

const EARTH_MASSES_PER_SOLAR: f64 = SOLAR_MASS_G / EARTH_MASS_G;

/// A mass with solar masses (M☉) as the base unit.
///
/// Stellar masses feed Kepler's third law directly in these units; planet
/// masses arrive from the catalog in Earth masses and are converted on entry.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// assert!(sun.to_earth_masses() > 330_000.0);
/// assert!(earth.to_solar_masses() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a mass from Earth masses (M⊕).
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR
    }

    /// Returns the larger of two masses.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}
