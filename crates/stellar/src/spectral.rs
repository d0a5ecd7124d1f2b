use std::fmt;

use serde::{Deserialize, Serialize};
use units::Temperature;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Harvard spectral class of a main-sequence host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    /// Class from effective temperature using the usual band edges
    /// (30000, 10000, 7500, 6000, 5200, 3700 K).
    ///
    /// Returns `None` for non-finite or non-positive temperatures.
    pub fn from_temperature(teff: Temperature) -> Option<Self> {
        let kelvin = teff.to_kelvin();
        if !kelvin.is_finite() || kelvin <= 0.0 {
            return None;
        }

        Some(match kelvin {
            t if t >= 30_000.0 => SpectralType::O,
            t if t >= 10_000.0 => SpectralType::B,
            t if t >= 7_500.0 => SpectralType::A,
            t if t >= 6_000.0 => SpectralType::F,
            t if t >= 5_200.0 => SpectralType::G,
            t if t >= 3_700.0 => SpectralType::K,
            _ => SpectralType::M,
        })
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}
