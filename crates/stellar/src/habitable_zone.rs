//! Conservative habitable-zone bounds from stellar luminosity.
//!
//! Incident flux falls off as `L/d²`, so the distance receiving a given flux
//! scales as `√L`. The edges are the Sun's bounds scaled by that factor.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Inner habitable-zone edge for a one-solar-luminosity star.
pub const SOLAR_INNER_EDGE_AU: f64 = 0.75;
/// Outer habitable-zone edge for a one-solar-luminosity star.
pub const SOLAR_OUTER_EDGE_AU: f64 = 1.77;

/// Habitable zone boundaries in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_edge: Length,
    pub outer_edge: Length,
}

impl HabitableZone {
    /// Bounds around a Sun-equivalent star.
    pub fn solar() -> Self {
        Self::from_luminosity(Luminosity::solar())
    }

    pub fn from_luminosity(luminosity: Luminosity) -> Self {
        let scale = luminosity.sqrt();
        Self {
            inner_edge: Length::from_au(SOLAR_INNER_EDGE_AU * scale),
            outer_edge: Length::from_au(SOLAR_OUTER_EDGE_AU * scale),
        }
    }

    /// Bounds from the archive's `st_lum`, i.e. `log10(L/L☉)`.
    ///
    /// Unknown or non-finite luminosity falls back to [`HabitableZone::solar`].
    ///
    /// ```
    /// use stellar::HabitableZone;
    ///
    /// let zone = HabitableZone::from_log_luminosity(Some(2.0));
    /// assert!((zone.inner_edge.to_au() - 7.5).abs() < 1e-12);
    /// assert_eq!(HabitableZone::from_log_luminosity(None), HabitableZone::solar());
    /// ```
    pub fn from_log_luminosity(log_luminosity: Option<f64>) -> Self {
        match log_luminosity.filter(|x| x.is_finite()) {
            Some(exponent) => Self::from_luminosity(Luminosity::from_log10(exponent)),
            None => Self::solar(),
        }
    }

    /// Radius halfway between the edges.
    pub fn midpoint(&self) -> Length {
        (self.inner_edge + self.outer_edge) * 0.5
    }

    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }

    /// Inclusive at both edges.
    pub fn contains(&self, distance: Length) -> bool {
        distance >= self.inner_edge && distance <= self.outer_edge
    }

    pub fn classify(&self, distance: Length) -> ZoneStatus {
        if self.contains(distance) {
            ZoneStatus::In
        } else if distance < self.inner_edge {
            ZoneStatus::TooClose
        } else {
            ZoneStatus::TooFar
        }
    }
}

/// Where an orbit sits relative to the habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "kebab-case")]
pub enum ZoneStatus {
    In,
    TooClose,
    TooFar,
}

impl ZoneStatus {
    pub fn is_habitable(&self) -> bool {
        matches!(self, ZoneStatus::In)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneStatus::In => "in",
            ZoneStatus::TooClose => "too-close",
            ZoneStatus::TooFar => "too-far",
        }
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
