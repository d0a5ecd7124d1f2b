//! Tunables for building and animating a simulation.
//!
//! The defaults are the values the visualization was tuned with. The
//! tolerance band and reference radius are display choices, not physical
//! constants; they are configurable so they can be experimented with.

use std::f64::consts::TAU;
use std::path::Path;

use orbit::{ToleranceBand, MIN_STELLAR_MASS_SOLAR, RADIUS_FLOOR_FRACTION};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Accepted catalog/derived semi-major-axis ratio.
    pub tolerance: ToleranceBand,
    /// Floor for the stellar mass used in Kepler's third law (M☉).
    pub min_stellar_mass: f64,
    /// Period assumed when the catalog has none, or a non-positive one.
    pub default_period_days: f64,
    /// Segments in the precomputed orbit polyline (points = segments + 1).
    pub orbit_segments: usize,
    /// Current radius floor, as a fraction of the semi-major axis.
    pub radius_floor_fraction: f64,
    /// Display-time step a renderer should pass to `update` per frame.
    pub frame_step: f64,
    pub render: RenderConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tolerance: ToleranceBand::default(),
            min_stellar_mass: MIN_STELLAR_MASS_SOLAR,
            default_period_days: 365.0,
            orbit_segments: 64,
            radius_floor_fraction: RADIUS_FLOOR_FRACTION,
            // One orbit at the reference radius in 1200 frames (~20 s at 60 fps).
            frame_step: TAU / 1200.0,
            render: RenderConfig::default(),
        }
    }
}

/// Render-space sizes, all in AU. Bodies are exaggerated so they stay
/// visible next to their orbits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render radius per solar radius.
    pub sun_radius_au: f64,
    /// Render radius per Earth radius.
    pub earth_radius_au: f64,
    pub min_star_radius_au: f64,
    pub min_planet_radius_au: f64,
    /// Smallest extent used to frame a system.
    pub min_system_scale_au: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sun_radius_au: 0.005,
            earth_radius_au: 0.00004,
            min_star_radius_au: 0.012,
            min_planet_radius_au: 0.008,
            min_system_scale_au: 0.08,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// ```
    /// use simulation::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_toml_str("orbit_segments = 128").unwrap();
    /// assert_eq!(config.orbit_segments, 128);
    /// assert_eq!(config.default_period_days, 365.0);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tolerance.lower", self.tolerance.lower),
            ("tolerance.upper", self.tolerance.upper),
            ("min_stellar_mass", self.min_stellar_mass),
            ("default_period_days", self.default_period_days),
            ("radius_floor_fraction", self.radius_floor_fraction),
            ("frame_step", self.frame_step),
            ("render.sun_radius_au", self.render.sun_radius_au),
            ("render.earth_radius_au", self.render.earth_radius_au),
            ("render.min_star_radius_au", self.render.min_star_radius_au),
            ("render.min_planet_radius_au", self.render.min_planet_radius_au),
            ("render.min_system_scale_au", self.render.min_system_scale_au),
        ];

        if let Some((name, value)) = positive
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "{} must be positive and finite, got {}",
                name, value
            )));
        }

        if self.tolerance.lower > self.tolerance.upper {
            return Err(ConfigError::Invalid(format!(
                "tolerance.lower ({}) exceeds tolerance.upper ({})",
                self.tolerance.lower, self.tolerance.upper
            )));
        }

        if self.orbit_segments == 0 {
            return Err(ConfigError::Invalid(
                "orbit_segments must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
