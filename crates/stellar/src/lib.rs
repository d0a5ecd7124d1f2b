//! Quantities derived from a host star's catalog parameters.

pub mod habitable_zone;
pub mod spectral;
pub mod stellar_color;

#[cfg(test)]
mod spectral_test;

pub use habitable_zone::{HabitableZone, ZoneStatus, SOLAR_INNER_EDGE_AU, SOLAR_OUTER_EDGE_AU};
pub use spectral::SpectralType;
pub use stellar_color::StellarColor;
