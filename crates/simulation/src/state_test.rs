use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use catalog::CatalogRecord;
use orbit::{semi_major_axis_from_period, AxisSource, PhaseClock};
use serde_json::json;
use stellar::{SpectralType, ZoneStatus};
use units::{Mass, Time};

use crate::config::SimulationConfig;
use crate::state::{SimulationState, DEFAULT_HOST_NAME, DEFAULT_PLANET_NAME};

fn build(value: serde_json::Value) -> SimulationState {
    SimulationState::from_record(&CatalogRecord::from_value(value))
}

#[test]
fn empty_record_uses_sun_and_earth_defaults() {
    let state = build(json!({}));

    assert_eq!(state.planet_name(), DEFAULT_PLANET_NAME);
    assert_eq!(state.host_name(), DEFAULT_HOST_NAME);
    assert_eq!(state.orbital_period_days(), 365.0);
    assert_eq!(state.eccentricity(), 0.0);
    assert!(!state.eccentricity_known());
    assert_eq!(state.axis_source(), AxisSource::Derived);
    assert_relative_eq!(state.orbit_radius().to_au(), 1.0, epsilon = 1e-3);
    assert_eq!(state.habitable_zone().inner_edge.to_au(), 0.75);
    assert_eq!(state.habitable_zone().outer_edge.to_au(), 1.77);
    assert_eq!(state.zone_status(), ZoneStatus::In);

    let star = state.star();
    assert!(star.luminosity.is_none());
    assert!(star.temperature.is_none());
    assert!(star.radius.is_none());
    assert!(star.mass.is_none());
    assert!(star.spectral_type.is_none());
    assert!(state.planet().radius.is_none());
    assert!(state.planet().mass.is_none());
}

#[test]
fn names_and_numbers_read_any_key_case() {
    let state = build(json!({
        "PL_NAME": "Kepler-452 b",
        "HOSTNAME": "Kepler-452",
        "PL_ORBPER": "384.843",
        "ST_MASS": 1.037,
        "ST_TEFF": 5757,
    }));

    assert_eq!(state.planet_name(), "Kepler-452 b");
    assert_eq!(state.host_name(), "Kepler-452");
    assert_eq!(state.orbital_period_days(), 384.843);
    assert_eq!(state.star().mass.map(|m| m.to_solar_masses()), Some(1.037));
    assert_eq!(state.star().spectral_type, Some(SpectralType::G));
}

#[test]
fn non_numeric_values_fall_back() {
    let state = build(json!({
        "pl_name": "",
        "pl_orbper": "n/a",
        "st_lum": true,
        "pl_orbeccen": "",
        "st_rad": [1.2],
    }));

    assert_eq!(state.planet_name(), DEFAULT_PLANET_NAME);
    assert_eq!(state.orbital_period_days(), 365.0);
    assert_eq!(state.habitable_zone().inner_edge.to_au(), 0.75);
    assert!(!state.eccentricity_known());
    assert!(state.star().radius.is_none());
}

#[test]
fn non_positive_period_uses_default() {
    for period in [0.0, -12.5] {
        let state = build(json!({ "pl_orbper": period }));
        assert_eq!(state.orbital_period_days(), 365.0);
    }
}

#[test]
fn reported_zero_eccentricity_is_known() {
    let state = build(json!({ "pl_orbeccen": 0 }));

    assert_eq!(state.eccentricity(), 0.0);
    assert!(state.eccentricity_known());
}

#[test]
fn eccentricity_is_clamped() {
    assert_eq!(build(json!({ "pl_orbeccen": 1.4 })).eccentricity(), 0.99);
    assert_eq!(build(json!({ "pl_orbeccen": -0.2 })).eccentricity(), 0.0);

    let state = build(json!({ "pl_orbeccen": 0.2056 }));
    assert_eq!(state.eccentricity(), 0.2056);
    assert!(state.eccentricity_known());
}

#[test]
fn consistent_catalog_axis_is_kept() {
    let state = build(json!({
        "pl_orbper": 4332.59,
        "st_mass": 1.0,
        "pl_orbsmax": 5.2,
    }));

    assert_eq!(state.axis_source(), AxisSource::Catalog);
    assert_eq!(state.orbit_radius().to_au(), 5.2);
    assert_relative_eq!(state.axis().derived.to_au(), 5.2, epsilon = 0.01);
}

#[test]
fn placeholder_catalog_axis_is_replaced() {
    // Hot Jupiter with a placeholder 1 AU distance.
    let state = build(json!({
        "pl_orbper": 3.52,
        "st_mass": 1.1,
        "pl_orbsmax": 1.0,
    }));

    let derived = semi_major_axis_from_period(Time::from_days(3.52), Mass::from_solar_masses(1.1));
    assert_eq!(state.axis_source(), AxisSource::Derived);
    assert_eq!(state.orbit_radius(), derived);
    assert_eq!(state.axis().catalog.map(|a| a.to_au()), Some(1.0));
    assert_eq!(state.zone_status(), ZoneStatus::TooClose);
}

#[test]
fn tiny_stellar_mass_is_floored() {
    let tiny = build(json!({ "pl_orbper": 365.25, "st_mass": 0.001 }));
    let floor = build(json!({ "pl_orbper": 365.25, "st_mass": 0.1 }));

    assert_eq!(tiny.orbit_radius(), floor.orbit_radius());
    assert_eq!(tiny.star().mass.map(|m| m.to_solar_masses()), Some(0.001));
}

#[test]
fn luminosity_scales_the_zone() {
    let state = build(json!({ "st_lum": 2.0 }));

    assert_relative_eq!(state.habitable_zone().inner_edge.to_au(), 7.5, epsilon = 1e-12);
    assert_relative_eq!(state.habitable_zone().outer_edge.to_au(), 17.7, epsilon = 1e-12);
    assert_relative_eq!(
        state.star().luminosity.map(|l| l.to_solar()).unwrap_or_default(),
        100.0,
        epsilon = 1e-9
    );
    assert_eq!(state.zone_status(), ZoneStatus::TooClose);
}

#[test]
fn orbit_points_are_a_closed_65_point_loop() {
    let state = build(json!({ "pl_orbsmax": 1.0, "pl_orbeccen": 0.3 }));
    let points = state.orbit_points();

    assert_eq!(points.len(), 65);
    let first = points[0];
    let last = points[64];
    assert_relative_eq!(first.x, last.x, epsilon = 1e-12);
    assert_relative_eq!(first.z, last.z, epsilon = 1e-12);
    assert!(points.iter().all(|p| p.y == 0.0));

    // Periapsis sits on +x.
    assert_relative_eq!(first.x, state.geometry().periapsis().to_au(), epsilon = 1e-12);
    assert_relative_eq!(points[32].x, -state.geometry().apoapsis().to_au(), epsilon = 1e-12);
}

#[test]
fn orbit_segments_follow_config() {
    let config = SimulationConfig {
        orbit_segments: 128,
        ..Default::default()
    };
    let state = SimulationState::from_record_with_config(&CatalogRecord::new(), &config);

    assert_eq!(state.orbit_points().len(), 129);
}

#[test]
fn positions_match_polar_form() {
    let state = build(json!({ "pl_orbsmax": 1.0, "pl_orbeccen": 0.5, "pl_orbper": 365.25 }));

    assert_relative_eq!(state.radius_at(0.0).to_au(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(state.radius_at(PI).to_au(), 1.5, epsilon = 1e-12);

    let p = state.position_at(PI / 2.0);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.75, epsilon = 1e-12);
}

#[test]
fn elapsed_time_is_read_off_the_phase() {
    let state = build(json!({ "pl_orbper": 687.0 }));

    assert_eq!(state.elapsed_days_at(0.0), 0.0);
    assert_eq!(state.elapsed_days_at(TAU), 687.0);
    assert_relative_eq!(state.elapsed_days_at(PI), 343.5, epsilon = 1e-12);
    assert_relative_eq!(state.elapsed_years_at(TAU), 687.0 / 365.25, epsilon = 1e-12);
}

#[test]
fn one_state_drives_independent_clocks() {
    let state = build(json!({ "pl_orbsmax": 1.0, "pl_orbeccen": 0.1 }));
    let mut a = PhaseClock::new();
    let mut b = PhaseClock::new();

    state.update(&mut a, 0.5);
    state.update(&mut a, 0.5);
    state.update(&mut b, 0.25);

    assert!(a.phase() > b.phase());
    assert_eq!(state.planet_position(&a), state.position_at(a.phase()));
    assert_eq!(state.planet_position(&b), state.position_at(b.phase()));
}

#[test]
fn system_scale_covers_zone_and_orbit() {
    assert_eq!(build(json!({})).system_scale().to_au(), 1.77);

    let wide = build(json!({ "pl_orbper": 60190.0, "pl_orbsmax": 30.07 }));
    assert_eq!(wide.system_scale().to_au(), 30.07);

    let dim = build(json!({ "st_lum": -4.0, "pl_orbper": 1.0 }));
    assert_eq!(dim.system_scale().to_au(), 0.08);
}

#[test]
fn vanishing_period_still_gives_a_moving_orbit() {
    let rows = [
        json!({ "pl_orbper": 5e-324 }),
        json!({ "pl_orbper": 5e-324, "pl_orbsmax": 1.0 }),
        json!({ "st_lum": 300, "pl_orbper": 1e-3, "pl_orbeccen": 0.9 }),
    ];

    for row in rows {
        let state = build(row.clone());
        assert!(state.orbit_radius().to_au() > 0.0, "{}", row);
        assert!(state.orbit_points().iter().all(|p| p.x.is_finite() && p.z.is_finite()));

        let mut clock = PhaseClock::new();
        let phase = state.update(&mut clock, 0.1);
        assert!(phase.is_finite() && phase > 0.0, "{}", row);
        assert!(state.elapsed_days_at(phase).is_finite());
    }
}

#[test]
fn building_is_deterministic() {
    let record = CatalogRecord::from_value(json!({
        "pl_name": "TOI-700 d",
        "st_lum": -1.6,
        "st_mass": 0.415,
        "pl_orbper": 37.42,
        "pl_orbeccen": 0.032,
    }));

    assert_eq!(
        SimulationState::from_record(&record),
        SimulationState::from_record(&record)
    );
}
