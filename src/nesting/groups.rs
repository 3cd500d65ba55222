use geo::algorithm::winding_order::WindingOrder;
use geo_types::{LineString, Polygon};
use log::trace;

use super::{NestingNode, PolygonGroup};
use crate::error::{Result, SoupError};
use crate::kernel::ensure_orientation;

/// Partitions a normalized forest into groups.
///
/// Every root opens a group, in node order. Every parented node is then
/// appended, in node order, to the group its parent opened. A parent that is
/// not itself a root is rejected: groups are exactly one level deep.
pub fn group_forest(nodes: &[NestingNode]) -> Result<Vec<PolygonGroup>> {
    let mut groups = Vec::new();
    let mut group_of: Vec<Option<usize>> = vec![None; nodes.len()];

    for node in nodes.iter().filter(|n| n.is_root()) {
        group_of[node.id] = Some(groups.len());
        groups.push(PolygonGroup {
            outer: node.id,
            holes: Vec::new(),
        });
    }

    for node in nodes {
        let Some(parent) = node.parent else {
            continue;
        };
        let group = group_of.get(parent).copied().flatten().ok_or_else(|| {
            SoupError::StructuralViolation(format!(
                "polygon {} is a hole of {}, which is not an outer boundary",
                node.id, parent
            ))
        })?;
        groups[group].holes.push(node.id);
    }

    Ok(groups)
}

/// Moves rings into one polygon per group.
///
/// Outer rings are made counterclockwise and holes clockwise; rings already
/// winding the right way are left untouched. Every ring must be used by
/// exactly one group.
pub fn build_polygons(
    rings: Vec<LineString<f64>>,
    groups: &[PolygonGroup],
) -> Result<Vec<Polygon<f64>>> {
    let mut slots: Vec<Option<LineString<f64>>> = rings.into_iter().map(Some).collect();
    let mut take = |id: usize| {
        slots.get_mut(id).and_then(Option::take).ok_or_else(|| {
            SoupError::StructuralViolation(format!("polygon {} is used by more than one group", id))
        })
    };

    let mut reversed = 0;
    let mut polygons = Vec::with_capacity(groups.len());
    for group in groups {
        let mut outer = take(group.outer)?;
        if ensure_orientation(&mut outer, WindingOrder::CounterClockwise) {
            reversed += 1;
        }

        let mut holes = Vec::with_capacity(group.holes.len());
        for &id in &group.holes {
            let mut hole = take(id)?;
            if ensure_orientation(&mut hole, WindingOrder::Clockwise) {
                reversed += 1;
            }
            holes.push(hole);
        }

        polygons.push(Polygon::new(outer, holes));
    }

    if let Some(orphan) = slots.iter().position(Option::is_some) {
        return Err(SoupError::StructuralViolation(format!(
            "polygon {} belongs to no group",
            orphan
        )));
    }

    trace!("{} rings reversed while building {} polygons", reversed, polygons.len());
    Ok(polygons)
}
