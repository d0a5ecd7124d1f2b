//! Catalog search helpers and small display conversions.

use wasm_bindgen::prelude::*;

use catalog::{build_query, parse_rows, CatalogRecord, QueryInput};
use simulation::SimulationConfig;
use stellar::StellarColor;
use units::Temperature;

use crate::{from_js, to_js};

/// ADQL for a range search. `input` holds `<column>_min` / `<column>_max`
/// entries as form strings; blank entries are ignored.
#[wasm_bindgen]
pub fn build_catalog_query(input: JsValue) -> Result<String, JsError> {
    let input: QueryInput = from_js(input)?;
    Ok(build_query(&input))
}

/// Parses an archive response body into rows with lower-case keys.
/// Unrecognized payload shapes yield an empty array.
#[wasm_bindgen]
pub fn parse_catalog_rows(json: &str) -> Result<JsValue, JsError> {
    to_js(&parse_rows(json)?)
}

/// `"<planet> (<host>)"` for a result list entry.
#[wasm_bindgen]
pub fn catalog_row_label(row: JsValue) -> Result<String, JsError> {
    let record: CatalogRecord = from_js(row)?;
    Ok(record.list_label())
}

/// `#RRGGBB` display color for an effective temperature in K. Missing or
/// invalid temperatures get the Sun's color.
#[wasm_bindgen]
pub fn star_color_hex(teff: Option<f64>) -> String {
    StellarColor::from_temperature(teff.map(Temperature::from_kelvin)).to_hex()
}

/// Default `dt` to pass to `update` each frame.
#[wasm_bindgen]
pub fn frame_step() -> f64 {
    SimulationConfig::default().frame_step
}
