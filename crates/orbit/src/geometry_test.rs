use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_relative_eq;
use units::Length;

use crate::geometry::{OrbitGeometry, MAX_ECCENTRICITY};

#[test]
fn circular_orbit_has_constant_radius() {
    let orbit = OrbitGeometry::circular(Length::from_au(1.5));

    for phase in [0.0, 1.0, PI, 4.0, TAU] {
        assert_relative_eq!(orbit.radius_at(phase).to_au(), 1.5, epsilon = 1e-12);
    }
}

#[test]
fn eccentric_orbit_extremes() {
    let orbit = OrbitGeometry::new(Length::from_au(2.0), 0.5);

    assert_relative_eq!(orbit.radius_at(0.0).to_au(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(orbit.radius_at(PI).to_au(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(orbit.periapsis().to_au(), 1.0);
    assert_relative_eq!(orbit.apoapsis().to_au(), 3.0);
    assert_relative_eq!(orbit.semi_latus_rectum().to_au(), 1.5);
    assert_relative_eq!(orbit.radius_at(FRAC_PI_2).to_au(), 1.5, epsilon = 1e-12);
}

#[test]
fn positions_lie_in_the_orbit_plane() {
    let orbit = OrbitGeometry::new(Length::from_au(1.0), 0.3);

    let periapsis = orbit.position_at(0.0);
    assert_relative_eq!(periapsis.x, 0.7, epsilon = 1e-12);
    assert_eq!(periapsis.y, 0.0);
    assert_relative_eq!(periapsis.z, 0.0, epsilon = 1e-12);

    let quarter = orbit.position_at(FRAC_PI_2);
    assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(quarter.z, 0.91, epsilon = 1e-12);
}

#[test]
fn eccentricity_is_clamped() {
    assert_eq!(OrbitGeometry::new(Length::from_au(1.0), 1.5).eccentricity(), MAX_ECCENTRICITY);
    assert_eq!(OrbitGeometry::new(Length::from_au(1.0), 0.995).eccentricity(), MAX_ECCENTRICITY);
    assert_eq!(OrbitGeometry::new(Length::from_au(1.0), -0.2).eccentricity(), 0.0);
    assert_eq!(OrbitGeometry::new(Length::from_au(1.0), f64::NAN).eccentricity(), 0.0);
}

#[test]
fn trace_is_closed() {
    let orbit = OrbitGeometry::new(Length::from_au(1.0), 0.2);
    let points = orbit.trace(64);

    assert_eq!(points.len(), 65);
    assert_relative_eq!(points[0].x, points[64].x, epsilon = 1e-12);
    assert_relative_eq!(points[0].z, points[64].z, epsilon = 1e-12);
    assert_eq!(orbit.trace(0).len(), 2);
}
