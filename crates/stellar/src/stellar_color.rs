use serde::{Deserialize, Serialize};
use units::Temperature;

/// RGB display color for a star.
///
/// Piecewise-linear ramp through red, orange, yellow, white and blue,
/// anchored at typical M, K, G, F, late-B and early-B temperatures. This is
/// a display mapping for the renderer, not a blackbody fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// (temperature K, r, g, b) anchor points, channels in 0..=1.
const RAMP: [(f64, f64, f64, f64); 6] = [
    (2_500.0, 1.0, 0.2, 0.0),
    (4_000.0, 1.0, 0.5, 0.0),
    (5_800.0, 1.0, 0.9, 0.4),
    (7_500.0, 1.0, 0.95, 0.95),
    (12_000.0, 0.8, 0.85, 1.0),
    (25_000.0, 0.5, 0.6, 1.0),
];

impl StellarColor {
    const MIN_TEMP: f64 = 2_000.0;
    const MAX_TEMP: f64 = 40_000.0;

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color for an effective temperature.
    ///
    /// Unknown (non-finite or non-positive) temperatures use the Sun's.
    /// Temperatures outside the ramp take the nearest end color.
    pub fn from_temperature(teff: Option<Temperature>) -> Self {
        let kelvin = teff
            .map(|t| t.to_kelvin())
            .filter(|k| k.is_finite() && *k > 0.0)
            .unwrap_or_else(|| Temperature::solar().to_kelvin())
            .clamp(Self::MIN_TEMP, Self::MAX_TEMP);

        let upper = RAMP.iter().position(|&(t, ..)| t >= kelvin);
        let (lo, hi) = match upper {
            Some(0) => (RAMP[0], RAMP[0]),
            Some(i) => (RAMP[i - 1], RAMP[i]),
            None => (RAMP[RAMP.len() - 1], RAMP[RAMP.len() - 1]),
        };

        let f = if hi.0 > lo.0 {
            (kelvin - lo.0) / (hi.0 - lo.0)
        } else {
            0.0
        };
        let channel = |a: f64, b: f64| (255.0 * (a + f * (b - a))).round().clamp(0.0, 255.0) as u8;

        Self {
            r: channel(lo.1, hi.1),
            g: channel(lo.2, hi.2),
            b: channel(lo.3, hi.3),
        }
    }

    /// Returns the color as a hex string (e.g., "#FFE465")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Packed `0xRRGGBB`, the form scene-graph materials take.
    pub fn to_rgb_u32(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}
