//! Render-space sizes for a renderer that draws the star, planet and
//! habitable-zone overlay. All values are in AU.

use serde::{Deserialize, Serialize};
use stellar::HabitableZone;
use units::Length;

use crate::config::RenderConfig;
use crate::state::{PlanetAttributes, StarAttributes};

/// Exaggerated body radii, with floors so small bodies stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRadii {
    pub star: Length,
    pub planet: Length,
}

impl RenderRadii {
    /// Unknown radii are treated as one solar radius and one Earth radius.
    pub fn new(star: &StarAttributes, planet: &PlanetAttributes, config: &RenderConfig) -> Self {
        let star_solar_radii = star.radius.map_or(1.0, |r| r.to_solar_radii());
        let planet_earth_radii = planet.radius.map_or(1.0, |r| r.to_earth_radii());

        Self {
            star: Length::from_au(
                (star_solar_radii * config.sun_radius_au).max(config.min_star_radius_au),
            ),
            planet: Length::from_au(
                (planet_earth_radii * config.earth_radius_au).max(config.min_planet_radius_au),
            ),
        }
    }
}

/// Flat ring between two radii around the star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annulus {
    pub inner: Length,
    pub outer: Length,
}

impl Annulus {
    pub fn width(&self) -> Length {
        self.outer - self.inner
    }
}

/// The three overlay rings: too hot, habitable, too cold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBands {
    pub too_close: Annulus,
    pub habitable: Annulus,
    pub too_far: Annulus,
}

impl ZoneBands {
    /// The too-far ring is as wide as the habitable one.
    pub fn from_zone(zone: &HabitableZone) -> Self {
        Self {
            too_close: Annulus {
                inner: Length::zero(),
                outer: zone.inner_edge,
            },
            habitable: Annulus {
                inner: zone.inner_edge,
                outer: zone.outer_edge,
            },
            too_far: Annulus {
                inner: zone.outer_edge,
                outer: zone.outer_edge + zone.width(),
            },
        }
    }
}
