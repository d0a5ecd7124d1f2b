use nalgebra::Point3;
use orbit::PhaseClock;
use units::Length;

use catalog::CatalogRecord;

use crate::config::SimulationConfig;
use crate::state::SimulationState;

/// One running animation: a fixed [`SimulationState`] plus its own clock.
///
/// ```
/// use catalog::CatalogRecord;
/// use simulation::Simulation;
///
/// let record = CatalogRecord::new()
///     .with("pl_name", "Earth-like")
///     .with("pl_orbper", 365.25);
/// let mut sim = Simulation::from_record(&record);
///
/// sim.update(std::f64::consts::TAU);
/// assert!(sim.elapsed_years() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    state: SimulationState,
    clock: PhaseClock,
}

impl Simulation {
    pub fn new(state: SimulationState) -> Self {
        Self {
            state,
            clock: PhaseClock::new(),
        }
    }

    pub fn from_record(record: &CatalogRecord) -> Self {
        Self::new(SimulationState::from_record(record))
    }

    pub fn from_record_with_config(record: &CatalogRecord, config: &SimulationConfig) -> Self {
        Self::new(SimulationState::from_record_with_config(record, config))
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    pub fn phase(&self) -> f64 {
        self.clock.phase()
    }

    pub fn orbit_points(&self) -> &[Point3<f64>] {
        self.state.orbit_points()
    }

    /// Advances the animation by `dt` of display time. Zero, negative and
    /// non-finite steps leave the phase unchanged.
    pub fn update(&mut self, dt: f64) -> f64 {
        self.state.update(&mut self.clock, dt)
    }

    pub fn planet_position(&self) -> Point3<f64> {
        self.state.planet_position(&self.clock)
    }

    pub fn radius(&self) -> Length {
        self.state.radius_at(self.clock.phase())
    }

    pub fn elapsed_days(&self) -> f64 {
        self.clock.elapsed_days(self.state.orbital_period_days())
    }

    pub fn elapsed_years(&self) -> f64 {
        self.clock.elapsed_years(self.state.orbital_period_days())
    }

    /// Restarts from periapsis.
    pub fn reset(&mut self) {
        self.clock = PhaseClock::new();
    }
}
