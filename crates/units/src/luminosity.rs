use serde::{Deserialize, Serialize};

/// Largest |log10(L/L☉)| accepted before exponentiation; keeps `10^x` finite.
pub const LOG_LUMINOSITY_LIMIT: f64 = 300.0;

/// Stellar luminosity in solar luminosities (L☉).
///
/// The exoplanet archive reports luminosity as `log10(L/L☉)`; use
/// [`Luminosity::from_log10`] for catalog values.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_log10(0.0);
/// assert_eq!(sun.to_solar(), 1.0);
///
/// let bright = Luminosity::from_log10(2.0);
/// assert!((bright.sqrt() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    pub fn solar() -> Self {
        Self(1.0)
    }

    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a luminosity from `log10(L/L☉)`.
    ///
    /// The exponent is clamped to ±[`LOG_LUMINOSITY_LIMIT`] so the result is
    /// always finite and strictly positive.
    pub fn from_log10(exponent: f64) -> Self {
        Self(10f64.powf(exponent.clamp(-LOG_LUMINOSITY_LIMIT, LOG_LUMINOSITY_LIMIT)))
    }

    pub fn to_solar(&self) -> f64 {
        self.0
    }

    pub fn to_log10(&self) -> f64 {
        self.0.log10()
    }

    /// Square root in L☉^½. Equal-flux distances scale with this.
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}
