use orbit::AxisSource;
use serde::{Deserialize, Serialize};
use stellar::{SpectralType, StellarColor, ZoneStatus};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::state::SimulationState;

/// Flat, renderer-facing copy of a [`SimulationState`] in plain numbers:
/// distances in AU, stellar radius in R☉, planet radius in R⊕, masses in
/// M☉ and M⊕, temperature in K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub planet_name: String,
    pub host_name: String,
    pub orbit_radius: f64,
    pub derived_orbit_radius: f64,
    #[cfg_attr(feature = "tsify", tsify(type = "\"catalog\" | \"derived\""))]
    pub axis_source: AxisSource,
    pub eccentricity: f64,
    pub eccentricity_known: bool,
    pub orbital_period_days: f64,
    pub hz_inner: f64,
    pub hz_outer: f64,
    pub zone_status: ZoneStatus,
    pub in_habitable_zone: bool,
    pub star_luminosity: Option<f64>,
    pub star_teff: Option<f64>,
    pub star_radius_rsun: Option<f64>,
    pub star_mass_msun: Option<f64>,
    pub spectral_type: Option<SpectralType>,
    pub planet_radius_re: Option<f64>,
    pub planet_mass_me: Option<f64>,
    pub star_color: String,
    pub star_radius: f64,
    pub planet_radius: f64,
    pub system_scale: f64,
}

impl SimulationState {
    pub fn snapshot(&self) -> StateSnapshot {
        let star = self.star();
        let planet = self.planet();
        let zone = self.habitable_zone();
        let render = self.render_radii();

        StateSnapshot {
            planet_name: self.planet_name().to_string(),
            host_name: self.host_name().to_string(),
            orbit_radius: self.orbit_radius().to_au(),
            derived_orbit_radius: self.axis().derived.to_au(),
            axis_source: self.axis_source(),
            eccentricity: self.eccentricity(),
            eccentricity_known: self.eccentricity_known(),
            orbital_period_days: self.orbital_period_days(),
            hz_inner: zone.inner_edge.to_au(),
            hz_outer: zone.outer_edge.to_au(),
            zone_status: self.zone_status(),
            in_habitable_zone: self.in_habitable_zone(),
            star_luminosity: star.luminosity.map(|l| l.to_solar()),
            star_teff: star.temperature.map(|t| t.to_kelvin()),
            star_radius_rsun: star.radius.map(|r| r.to_solar_radii()),
            star_mass_msun: star.mass.map(|m| m.to_solar_masses()),
            spectral_type: star.spectral_type,
            planet_radius_re: planet.radius.map(|r| r.to_earth_radii()),
            planet_mass_me: planet.mass.map(|m| m.to_earth_masses()),
            star_color: StellarColor::from_temperature(star.temperature).to_hex(),
            star_radius: render.star.to_au(),
            planet_radius: render.planet.to_au(),
            system_scale: self.system_scale().to_au(),
        }
    }
}
