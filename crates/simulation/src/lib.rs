//! Builds a renderer-ready orbit simulation from one exoplanet catalog row.
//!
//! A [`SimulationState`] is computed once from a [`catalog::CatalogRecord`]
//! and is read-only afterwards: reconciled orbit, habitable zone, display
//! radii and a precomputed orbit polyline. [`Simulation`] pairs a state with
//! an [`orbit::PhaseClock`] and is what a frame loop drives.
//!
//! Building never fails. Missing or malformed catalog fields fall back to
//! Sun/Earth-like defaults.

pub mod config;
pub mod driver;
pub mod render;
pub mod snapshot;
pub mod state;
pub mod summary;

#[cfg(test)]
mod state_test;

pub use config::{ConfigError, RenderConfig, SimulationConfig};
pub use driver::Simulation;
pub use render::{Annulus, RenderRadii, ZoneBands};
pub use snapshot::StateSnapshot;
pub use state::{
    PlanetAttributes, SimulationState, StarAttributes, DEFAULT_HOST_NAME, DEFAULT_PLANET_NAME,
};
