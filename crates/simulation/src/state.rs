//! Immutable simulation state built from one catalog row.

use catalog::{CatalogColumn, CatalogRecord};
use nalgebra::Point3;
use orbit::{
    effective_stellar_mass, elapsed_days_at, reconcile_semi_major_axis,
    semi_major_axis_from_period, AxisSource, Kinematics, OrbitGeometry, PhaseClock,
    ReconciledAxis, MAX_ECCENTRICITY,
};
use stellar::{HabitableZone, SpectralType, ZoneStatus};
use units::{Length, Luminosity, Mass, Temperature, Time, DAYS_PER_YEAR};

use crate::config::SimulationConfig;
use crate::render::{RenderRadii, ZoneBands};

pub const DEFAULT_PLANET_NAME: &str = "Planet";
pub const DEFAULT_HOST_NAME: &str = "Star";

/// Host-star parameters as reported by the catalog. `None` means the row
/// had no usable value; the builder substitutes defaults where it needs a
/// number but these keep the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StarAttributes {
    pub luminosity: Option<Luminosity>,
    pub temperature: Option<Temperature>,
    pub radius: Option<Length>,
    pub mass: Option<Mass>,
    pub spectral_type: Option<SpectralType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanetAttributes {
    pub radius: Option<Length>,
    pub mass: Option<Mass>,
}

/// Everything a renderer needs for one planet and its host star.
///
/// Built once per catalog row and never mutated. The animation phase is
/// kept outside in a [`PhaseClock`], so one state can back any number of
/// independent animations.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    planet_name: String,
    host_name: String,
    axis: ReconciledAxis,
    kinematics: Kinematics,
    eccentricity_known: bool,
    orbital_period_days: f64,
    habitable_zone: HabitableZone,
    zone_status: ZoneStatus,
    star: StarAttributes,
    planet: PlanetAttributes,
    render: RenderRadii,
    min_system_scale: Length,
    orbit_points: Vec<Point3<f64>>,
}

impl SimulationState {
    /// Builds a state with the default [`SimulationConfig`]. Never fails:
    /// missing or malformed fields fall back to defaults.
    pub fn from_record(record: &CatalogRecord) -> Self {
        Self::from_record_with_config(record, &SimulationConfig::default())
    }

    pub fn from_record_with_config(record: &CatalogRecord, config: &SimulationConfig) -> Self {
        let planet_name = record
            .text(CatalogColumn::PlanetName)
            .unwrap_or_else(|| DEFAULT_PLANET_NAME.to_string());
        let host_name = record
            .text(CatalogColumn::HostName)
            .unwrap_or_else(|| DEFAULT_HOST_NAME.to_string());

        let star = StarAttributes {
            luminosity: record
                .number(CatalogColumn::StellarLuminosity)
                .map(Luminosity::from_log10),
            temperature: record
                .number(CatalogColumn::StellarTemperature)
                .map(Temperature::from_kelvin),
            radius: record
                .number(CatalogColumn::StellarRadius)
                .map(Length::from_solar_radii),
            mass: record
                .number(CatalogColumn::StellarMass)
                .map(Mass::from_solar_masses),
            spectral_type: record
                .number(CatalogColumn::StellarTemperature)
                .map(Temperature::from_kelvin)
                .and_then(SpectralType::from_temperature),
        };
        let planet = PlanetAttributes {
            radius: record
                .number(CatalogColumn::PlanetRadius)
                .map(Length::from_earth_radii),
            mass: record
                .number(CatalogColumn::PlanetMass)
                .map(Mass::from_earth_masses),
        };

        let orbital_period_days = record
            .number(CatalogColumn::OrbitalPeriod)
            .filter(|days| *days > 0.0)
            .unwrap_or(config.default_period_days);

        let stellar_mass = effective_stellar_mass(
            star.mass,
            Mass::from_solar_masses(config.min_stellar_mass),
        );
        let derived =
            semi_major_axis_from_period(Time::from_days(orbital_period_days), stellar_mass);
        let axis = reconcile_semi_major_axis(
            record
                .number(CatalogColumn::SemiMajorAxis)
                .map(Length::from_au),
            derived,
            config.tolerance,
        );

        let reported_eccentricity = record.number(CatalogColumn::Eccentricity);
        if let Some(e) = reported_eccentricity.filter(|e| !(0.0..=MAX_ECCENTRICITY).contains(e)) {
            tracing::debug!(
                planet = %planet_name,
                eccentricity = e,
                "eccentricity outside [0, {}], clamping",
                MAX_ECCENTRICITY
            );
        }
        let geometry =
            OrbitGeometry::new(axis.semi_major_axis, reported_eccentricity.unwrap_or(0.0));

        let habitable_zone =
            HabitableZone::from_log_luminosity(record.number(CatalogColumn::StellarLuminosity));
        let zone_status = habitable_zone.classify(axis.semi_major_axis);

        let kinematics = Kinematics::with_radius_floor(
            geometry,
            habitable_zone.midpoint(),
            config.radius_floor_fraction,
        );
        let render = RenderRadii::new(&star, &planet, &config.render);
        let orbit_points = geometry.trace(config.orbit_segments);

        tracing::debug!(
            planet = %planet_name,
            host = %host_name,
            semi_major_axis_au = axis.semi_major_axis.to_au(),
            axis_source = ?axis.source,
            eccentricity = geometry.eccentricity(),
            zone = %zone_status,
            "built simulation state"
        );

        Self {
            planet_name,
            host_name,
            axis,
            kinematics,
            eccentricity_known: reported_eccentricity.is_some(),
            orbital_period_days,
            habitable_zone,
            zone_status,
            star,
            planet,
            render,
            min_system_scale: Length::from_au(config.render.min_system_scale_au),
            orbit_points,
        }
    }

    pub fn planet_name(&self) -> &str {
        &self.planet_name
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Semi-major axis the orbit is drawn and animated with.
    pub fn orbit_radius(&self) -> Length {
        self.axis.semi_major_axis
    }

    /// Catalog and derived axes along with which one was used.
    pub fn axis(&self) -> &ReconciledAxis {
        &self.axis
    }

    pub fn axis_source(&self) -> AxisSource {
        self.axis.source
    }

    pub fn eccentricity(&self) -> f64 {
        self.kinematics.geometry().eccentricity()
    }

    /// Whether the catalog reported an eccentricity (rather than it being
    /// assumed circular).
    pub fn eccentricity_known(&self) -> bool {
        self.eccentricity_known
    }

    pub fn orbital_period_days(&self) -> f64 {
        self.orbital_period_days
    }

    pub fn geometry(&self) -> &OrbitGeometry {
        self.kinematics.geometry()
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn habitable_zone(&self) -> HabitableZone {
        self.habitable_zone
    }

    pub fn zone_status(&self) -> ZoneStatus {
        self.zone_status
    }

    pub fn in_habitable_zone(&self) -> bool {
        self.zone_status.is_habitable()
    }

    pub fn star(&self) -> &StarAttributes {
        &self.star
    }

    pub fn planet(&self) -> &PlanetAttributes {
        &self.planet
    }

    pub fn render_radii(&self) -> RenderRadii {
        self.render
    }

    /// Closed orbit polyline, computed once at build time. The first and
    /// last points coincide at periapsis.
    pub fn orbit_points(&self) -> &[Point3<f64>] {
        &self.orbit_points
    }

    /// Star-planet distance at `phase`.
    pub fn radius_at(&self, phase: f64) -> Length {
        self.kinematics.geometry().radius_at(phase)
    }

    pub fn position_at(&self, phase: f64) -> Point3<f64> {
        self.kinematics.geometry().position_at(phase)
    }

    pub fn elapsed_days_at(&self, phase: f64) -> f64 {
        elapsed_days_at(phase, self.orbital_period_days)
    }

    pub fn elapsed_years_at(&self, phase: f64) -> f64 {
        self.elapsed_days_at(phase) / DAYS_PER_YEAR
    }

    /// Advances `clock` by `dt` of display time and returns the new phase.
    pub fn update(&self, clock: &mut PhaseClock, dt: f64) -> f64 {
        self.kinematics.advance(clock, dt)
    }

    pub fn planet_position(&self, clock: &PhaseClock) -> Point3<f64> {
        self.kinematics.position(clock)
    }

    /// Too-close, habitable and too-far annuli around the star.
    pub fn zone_bands(&self) -> ZoneBands {
        ZoneBands::from_zone(&self.habitable_zone)
    }

    /// Extent used to frame the system: the larger of the habitable zone's
    /// outer edge and the orbit radius, never below the configured minimum.
    pub fn system_scale(&self) -> Length {
        self.habitable_zone
            .outer_edge
            .max(self.axis.semi_major_axis)
            .max(self.min_system_scale)
    }
}
