use wasm_bindgen::prelude::*;
use geojson::GeoJson;
use crate::geojson_io::{polygons_to_geojson, rings_from_geojson};
use crate::SoupResolver;
use std::str::FromStr;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Resolves the rings of a GeoJSON document into a FeatureCollection of
/// polygons with holes.
#[wasm_bindgen]
pub fn resolve_soup(geojson_str: &str) -> Result<String, JsValue> {
    // Parse the GeoJSON string
    let geojson = GeoJson::from_str(geojson_str)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse GeoJSON: {}", e)))?;

    let rings = rings_from_geojson(geojson)
        .map_err(|e| JsValue::from_str(&format!("Unsupported geometry: {}", e)))?;

    let polygons = SoupResolver::new()
        .resolve(rings)
        .map_err(|e| JsValue::from_str(&format!("Resolution failed: {}", e)))?;

    Ok(polygons_to_geojson(&polygons).to_string())
}
