use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Julian year length; catalog periods are converted to years with it.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A time span with years as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let earth_year = Time::from_days(365.25);
/// assert_eq!(earth_year.to_years(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}
