//! Thin adapters over the `geo` predicates the nesting pipeline relies on.
//!
//! Rings are `LineString<f64>` values. [`vertices`] and [`vertex_count`]
//! accept open or closed rings. [`contains_all_vertices`], [`orientation`]
//! and [`ensure_orientation`] expect a closed ring (first coordinate repeated
//! at the end); `SoupResolver` closes its input before calling them.

use geo::algorithm::winding_order::{Winding, WindingOrder};
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo_types::{Coord, LineString, Polygon};

use crate::error::{Result, SoupError};

/// Distinct vertices of a ring, i.e. without the closing duplicate.
pub fn vertices(ring: &LineString<f64>) -> &[Coord<f64>] {
    let coords = ring.0.as_slice();
    if ring.is_closed() && coords.len() > 1 {
        &coords[..coords.len() - 1]
    } else {
        coords
    }
}

pub fn vertex_count(ring: &LineString<f64>) -> usize {
    vertices(ring).len()
}

/// True when every vertex of `candidate` lies inside `container` or on its boundary.
///
/// Stops at the first vertex found strictly outside.
pub fn contains_all_vertices(container: &Polygon<f64>, candidate: &LineString<f64>) -> bool {
    vertices(candidate)
        .iter()
        .all(|c| container.coordinate_position(c) != CoordPos::Outside)
}

/// Winding of a closed ring. Zero-area rings have none and are rejected.
pub fn orientation(ring: &LineString<f64>) -> Result<WindingOrder> {
    ring.winding_order().ok_or_else(|| {
        SoupError::MalformedInput(format!(
            "ring with {} vertices has no defined orientation (zero area)",
            vertex_count(ring)
        ))
    })
}

pub fn reverse_orientation(ring: &mut LineString<f64>) {
    ring.0.reverse();
}

/// Reverses `ring` only if it does not already wind the `target` way.
/// Returns whether a reversal happened.
pub fn ensure_orientation(ring: &mut LineString<f64>, target: WindingOrder) -> bool {
    match ring.winding_order() {
        Some(current) if current != target => {
            reverse_orientation(ring);
            true
        }
        _ => false,
    }
}
