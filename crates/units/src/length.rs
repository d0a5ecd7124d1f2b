use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const AU_TO_EARTH_RADIUS: f64 = 23481.4;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;
/// AU to solar radii
pub const AU_TO_SOLAR_RADIUS: f64 = 1.0 / SOLAR_RADIUS_AU;

/// A length with astronomical units (AU) as the base unit.
///
/// Orbit geometry, habitable-zone radii and render-space positions all share
/// this unit, so one scene unit equals one AU.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let star = Length::from_solar_radii(1.0);
///
/// assert!(star.to_au() < orbit.to_au());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a length from Earth radii (R⊕).
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value / AU_TO_EARTH_RADIUS)
    }

    /// Creates a length from solar radii (R☉).
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_EARTH_RADIUS
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 * AU_TO_SOLAR_RADIUS
    }

    /// True when the underlying value is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Length over length is dimensionless.
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
