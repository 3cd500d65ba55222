use geo::bounding_rect::BoundingRect;
use geo_types::{LineString, Polygon};
use log::debug;
use rstar::{Envelope, RTree, RTreeObject, AABB};

use super::{ContainmentSet, PolygonId};
use crate::kernel::contains_all_vertices;
use crate::utils::parallel;

// Bounding box of a ring, indexable by rstar
#[derive(Clone, Copy, Debug)]
struct IndexedRing {
    envelope: AABB<[f64; 2]>,
    id: PolygonId,
}

impl RTreeObject for IndexedRing {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

fn ring_envelope(ring: &LineString<f64>) -> Option<AABB<[f64; 2]>> {
    let bbox = ring.bounding_rect()?;
    Some(AABB::from_corners(
        [bbox.min().x, bbox.min().y],
        [bbox.max().x, bbox.max().y],
    ))
}

/// Computes, for every ring, the ids of all other rings containing all of its vertices.
///
/// A container's bounding box must enclose the candidate's, so the R-tree
/// narrows each row down before the exact vertex walk. Rows are independent
/// and may be computed in parallel; each row is sorted ascending.
pub fn containment_sets(rings: &[LineString<f64>], parallel_threshold: usize) -> Vec<ContainmentSet> {
    let regions: Vec<Polygon<f64>> = rings
        .iter()
        .map(|ring| Polygon::new(ring.clone(), vec![]))
        .collect();
    let envelopes: Vec<Option<AABB<[f64; 2]>>> = rings.iter().map(ring_envelope).collect();

    let indexed: Vec<IndexedRing> = envelopes
        .iter()
        .enumerate()
        .filter_map(|(id, env)| env.map(|envelope| IndexedRing { envelope, id }))
        .collect();
    let tree = RTree::bulk_load(indexed);

    let sets = parallel::map(rings, parallel_threshold, |id, ring| {
        let Some(env) = envelopes[id] else {
            return Vec::new();
        };

        let mut containers: ContainmentSet = tree
            .locate_in_envelope_intersecting(&env)
            .filter(|cand| cand.id != id && cand.envelope.contains_envelope(&env))
            .filter(|cand| contains_all_vertices(&regions[cand.id], ring))
            .map(|cand| cand.id)
            .collect();
        containers.sort_unstable();
        containers
    });

    debug!(
        "containment: {} rings, {} containment pairs",
        rings.len(),
        sets.iter().map(Vec::len).sum::<usize>()
    );

    sets
}
