use std::fmt;

use crate::state::SimulationState;

/// Multi-line info-panel text:
///
/// ```text
/// Kepler-22 b (Kepler-22)
/// Orbit: 0.849 AU | Planet radius: 2.10 R⊕
/// Goldilocks: 0.75 – 1.77 AU
/// In habitable zone
/// ```
impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.planet_name(), self.host_name())?;

        write!(f, "Orbit: {:.3} AU | Planet radius: ", self.orbit_radius().to_au())?;
        match self.planet().radius {
            Some(radius) => writeln!(f, "{:.2} R⊕", radius.to_earth_radii())?,
            None => writeln!(f, "—")?,
        }

        let zone = self.habitable_zone();
        writeln!(
            f,
            "Goldilocks: {:.2} – {:.2} AU",
            zone.inner_edge.to_au(),
            zone.outer_edge.to_au()
        )?;

        if self.in_habitable_zone() {
            write!(f, "In habitable zone")
        } else {
            write!(f, "Outside habitable zone")
        }
    }
}
