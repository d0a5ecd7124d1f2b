//! Orbit geometry for a single planet around a single star.
//!
//! - [`kepler`] reconciles a catalog semi-major axis against the one implied
//!   by the orbital period (Kepler's third law).
//! - [`geometry`] describes the fixed ellipse, star at one focus.
//! - [`kinematics`] advances a [`PhaseClock`] along that ellipse at a rate
//!   that sweeps equal areas in equal times (Kepler's second law).
//!
//! Orbits are planar: positions lie in the `y = 0` plane.

pub mod clock;
pub mod geometry;
pub mod kepler;
pub mod kinematics;

#[cfg(test)]
mod geometry_test;

pub use clock::{elapsed_days_at, PhaseClock};
pub use geometry::{OrbitGeometry, MAX_ECCENTRICITY};
pub use kepler::{
    effective_stellar_mass, reconcile_semi_major_axis, semi_major_axis_from_period, AxisSource,
    ReconciledAxis, ToleranceBand, MIN_SEMI_MAJOR_AXIS_AU, MIN_STELLAR_MASS_SOLAR,
};
pub use kinematics::{Kinematics, MAX_ANGULAR_RATE, RADIUS_FLOOR_FRACTION};
