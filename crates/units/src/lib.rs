//! Physical quantities used by the simulation core.
//!
//! Each quantity is an `f64` newtype with a fixed base unit chosen for
//! planetary-system work: lengths in AU, masses in solar masses, times in
//! years, temperatures in Kelvin and luminosities in solar luminosities.

pub mod length;
pub mod luminosity;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod time_test;

pub use length::Length;
pub use luminosity::Luminosity;
pub use mass::{Mass, EARTH_MASS_G, SOLAR_MASS_G};
pub use temperature::Temperature;
pub use time::{Time, DAYS_PER_YEAR};
