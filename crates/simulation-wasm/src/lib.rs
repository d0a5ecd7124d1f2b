//! WASM bindings for the orbit simulation.
//!
//! A renderer creates one [`WasmSimulation`] per selected catalog row and
//! calls `update` once per animation frame. Each handle owns its state and
//! phase; dropping it (`free()` on the JS side) releases both.
//!
//! ```javascript
//! const sql = build_catalog_query({ st_teff_min: "5000", st_teff_max: "6000" });
//! const rows = parse_catalog_rows(await response.text());
//!
//! const sim = new WasmSimulation(rows[0]);
//! const step = frame_step();
//! function frame() {
//!   sim.update(step);
//!   const { x, y, z } = sim.planetPosition();
//!   // ...
//!   requestAnimationFrame(frame);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod handle;
mod query;

pub use handle::WasmSimulation;

/// Plain objects rather than `Map`s, and `null` for missing values, so the
/// result reads like the archive's own JSON.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
