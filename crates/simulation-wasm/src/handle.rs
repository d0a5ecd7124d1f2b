use nalgebra::Point3;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use catalog::CatalogRecord;
use simulation::{Simulation, SimulationConfig};

use crate::{from_js, to_js};

#[derive(Clone, Copy, Debug, Serialize)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl From<Point3<f64>> for Vec3 {
    fn from(p: Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// One animated planet around its host star.
#[wasm_bindgen]
pub struct WasmSimulation {
    inner: Simulation,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Builds a simulation from an archive row (any key case, numbers or
    /// numeric strings). Missing fields take defaults; only a row that is
    /// not an object is an error.
    #[wasm_bindgen(constructor)]
    pub fn new(row: JsValue) -> Result<WasmSimulation, JsError> {
        let record: CatalogRecord = from_js(row)?;
        Ok(Self {
            inner: Simulation::from_record(&record),
        })
    }

    /// Like the constructor, with a partial `SimulationConfig` object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(row: JsValue, config: JsValue) -> Result<WasmSimulation, JsError> {
        let record: CatalogRecord = from_js(row)?;
        let config: SimulationConfig = from_js(config)?;
        config.validate()?;
        Ok(Self {
            inner: Simulation::from_record_with_config(&record, &config),
        })
    }

    /// Advances by `dt` of display time; returns the new phase (radians).
    pub fn update(&mut self, dt: f64) -> f64 {
        self.inner.update(dt)
    }

    pub fn phase(&self) -> f64 {
        self.inner.phase()
    }

    /// `{ x, y, z }` in AU, `y` always 0.
    #[wasm_bindgen(js_name = planetPosition)]
    pub fn planet_position(&self) -> Result<JsValue, JsError> {
        to_js(&Vec3::from(self.inner.planet_position()))
    }

    /// The precomputed closed orbit as `{ x, y, z }[]`.
    #[wasm_bindgen(js_name = orbitPoints)]
    pub fn orbit_points(&self) -> Result<JsValue, JsError> {
        let points: Vec<Vec3> = self
            .inner
            .orbit_points()
            .iter()
            .map(|p| Vec3::from(*p))
            .collect();
        to_js(&points)
    }

    #[wasm_bindgen(js_name = elapsedDays)]
    pub fn elapsed_days(&self) -> f64 {
        self.inner.elapsed_days()
    }

    #[wasm_bindgen(js_name = elapsedYears)]
    pub fn elapsed_years(&self) -> f64 {
        self.inner.elapsed_years()
    }

    /// Read-only fields of the state, including nullable stellar and
    /// planetary attributes.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.state().snapshot())
    }

    /// `{ tooClose, habitable, tooFar }`, each `{ inner, outer }` in AU.
    #[wasm_bindgen(js_name = zoneBands)]
    pub fn zone_bands(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.state().zone_bands())
    }

    #[wasm_bindgen(js_name = systemScale)]
    pub fn system_scale(&self) -> f64 {
        self.inner.state().system_scale().to_au()
    }

    /// Info-panel text, one item per line.
    pub fn summary(&self) -> String {
        self.inner.state().to_string()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
