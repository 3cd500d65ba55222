use geo::algorithm::winding_order::WindingOrder;
use geo_types::{LineString, Polygon};
use log::debug;

use crate::error::{Result, SoupError};
use crate::kernel::{orientation, vertex_count};
use crate::nesting::containment::containment_sets;
use crate::nesting::forest::{assign_parents, drop_same_winding_links, promote_even_depths};
use crate::nesting::groups::{build_polygons, group_forest};
use crate::nesting::{NestingNode, NestingRole, PolygonGroup};
use crate::utils::parallel::DEFAULT_PARALLEL_THRESHOLD;

/// Everything the nesting pipeline decides, before rings are moved into polygons.
#[derive(Clone, Debug)]
pub struct Nesting {
    pub nodes: Vec<NestingNode>,
    pub roles: Vec<NestingRole>,
    pub groups: Vec<PolygonGroup>,
}

/// Turns a soup of simple rings into polygons with holes.
///
/// Holds options only; every call works on its own input.
#[derive(Clone, Debug)]
pub struct SoupResolver {
    // Configuration
    /// Drop parent links between rings of equal winding.
    pub orientation_guard: bool,
    /// Containment rows run in parallel above this many rings.
    pub parallel_threshold: usize,
}

impl Default for SoupResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SoupResolver {
    pub fn new() -> Self {
        Self {
            orientation_guard: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Resolves `rings` into polygons with CCW exteriors and CW interiors,
    /// one per outer boundary, in the order outer boundaries appear in the input.
    ///
    /// This is the main entry point.
    pub fn resolve(&self, rings: Vec<LineString<f64>>) -> Result<Vec<Polygon<f64>>> {
        let (rings, orientations) = prepare(rings)?;
        let nesting = self.nest(&rings, &orientations)?;
        build_polygons(rings, &nesting.groups)
    }

    /// Runs the pipeline without building polygons.
    pub fn nesting(&self, rings: &[LineString<f64>]) -> Result<Nesting> {
        let (rings, orientations) = prepare(rings.to_vec())?;
        self.nest(&rings, &orientations)
    }

    pub fn groups(&self, rings: &[LineString<f64>]) -> Result<Vec<PolygonGroup>> {
        Ok(self.nesting(rings)?.groups)
    }

    pub fn classify(&self, rings: &[LineString<f64>]) -> Result<Vec<NestingRole>> {
        Ok(self.nesting(rings)?.roles)
    }

    fn nest(&self, rings: &[LineString<f64>], orientations: &[WindingOrder]) -> Result<Nesting> {
        // 1. Containment
        let sets = containment_sets(rings, self.parallel_threshold);

        // 2. Immediate parents
        let mut nodes = assign_parents(&sets);
        let contained: Vec<bool> = nodes.iter().map(|n| !n.is_root()).collect();

        // 3. Outer/hole alternation
        let depths = promote_even_depths(&mut nodes)?;

        // 4. Winding check
        let dropped = if self.orientation_guard {
            drop_same_winding_links(&mut nodes, orientations)
        } else {
            Vec::new()
        };

        let roles = nodes
            .iter()
            .map(|node| {
                if !contained[node.id] {
                    NestingRole::RootByNoContainment
                } else if depths[node.id] % 2 == 0 {
                    NestingRole::RootByEvenDepth
                } else if node.is_root() {
                    NestingRole::RootByOrientationMismatch
                } else {
                    NestingRole::ConfirmedHole
                }
            })
            .collect();

        // 5. Groups
        let groups = group_forest(&nodes)?;

        debug!(
            "resolved {} rings into {} polygons ({} winding links dropped)",
            rings.len(),
            groups.len(),
            dropped.len()
        );

        Ok(Nesting {
            nodes,
            roles,
            groups,
        })
    }
}

/// Resolves `rings` with default options.
pub fn resolve(rings: Vec<LineString<f64>>) -> Result<Vec<Polygon<f64>>> {
    SoupResolver::new().resolve(rings)
}

/// Closes every ring and measures its winding.
///
/// Rings with fewer than three distinct vertices or with zero area are rejected.
fn prepare(mut rings: Vec<LineString<f64>>) -> Result<(Vec<LineString<f64>>, Vec<WindingOrder>)> {
    let mut orientations = Vec::with_capacity(rings.len());
    for (index, ring) in rings.iter_mut().enumerate() {
        let count = vertex_count(ring);
        if count < 3 {
            return Err(SoupError::MalformedInput(format!(
                "polygon {} has {} distinct vertices, at least 3 are required",
                index, count
            )));
        }
        ring.close();
        let winding = orientation(ring).map_err(|_| {
            SoupError::MalformedInput(format!("polygon {} has zero area and no orientation", index))
        })?;
        orientations.push(winding);
    }
    Ok((rings, orientations))
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
