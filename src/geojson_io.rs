use geo_types::{Geometry, LineString, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use log::warn;

use crate::error::Result;

/// Collects every ring of a GeoJSON document as soup input.
///
/// Polygon rings (exterior and interior alike) and closed line strings are
/// taken as they are. Open line strings are skipped with a warning; points
/// are ignored.
pub fn rings_from_geojson(geojson: GeoJson) -> Result<Vec<LineString<f64>>> {
    let mut rings = Vec::new();
    match geojson {
        GeoJson::FeatureCollection(fc) => {
            for feature in fc.features {
                if let Some(geom) = feature.geometry {
                    let geom: Geometry<f64> = geom.try_into()?;
                    extract_rings(&geom, &mut rings);
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geom) = feature.geometry {
                let geom: Geometry<f64> = geom.try_into()?;
                extract_rings(&geom, &mut rings);
            }
        }
        GeoJson::Geometry(geom) => {
            let geom: Geometry<f64> = geom.try_into()?;
            extract_rings(&geom, &mut rings);
        }
    }
    Ok(rings)
}

fn extract_rings(geom: &Geometry<f64>, out: &mut Vec<LineString<f64>>) {
    match geom {
        Geometry::LineString(ls) => push_closed(ls, out),
        Geometry::MultiLineString(mls) => {
            for ls in mls {
                push_closed(ls, out);
            }
        }
        Geometry::Polygon(poly) => {
            out.push(poly.exterior().clone());
            out.extend(poly.interiors().iter().cloned());
        }
        Geometry::MultiPolygon(mpoly) => {
            for poly in mpoly {
                out.push(poly.exterior().clone());
                out.extend(poly.interiors().iter().cloned());
            }
        }
        Geometry::Rect(rect) => out.push(rect.to_polygon().exterior().clone()),
        Geometry::Triangle(tri) => out.push(tri.to_polygon().exterior().clone()),
        Geometry::GeometryCollection(gc) => {
            for g in gc {
                extract_rings(g, out);
            }
        }
        _ => {}
    }
}

fn push_closed(ls: &LineString<f64>, out: &mut Vec<LineString<f64>>) {
    if ls.is_closed() {
        out.push(ls.clone());
    } else {
        warn!("skipping open line string with {} points", ls.0.len());
    }
}

/// One Polygon feature per polygon with holes, in order.
pub fn polygons_to_geojson(polygons: &[Polygon<f64>]) -> GeoJson {
    let features: Vec<Feature> = polygons
        .iter()
        .map(|poly| Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(Value::from(poly))),
            id: None,
            properties: None,
            foreign_members: None,
        })
        .collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
