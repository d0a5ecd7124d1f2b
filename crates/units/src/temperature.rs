use serde::{Deserialize, Serialize};

/// Solar effective temperature in Kelvin.
pub const SOLAR_TEFF_K: f64 = 5778.0;

/// A temperature with Kelvin as the base unit.
///
/// Only stellar effective temperatures pass through here; the catalog
/// reports them in Kelvin already.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Effective temperature of the Sun.
    pub fn solar() -> Self {
        Self(SOLAR_TEFF_K)
    }
}
