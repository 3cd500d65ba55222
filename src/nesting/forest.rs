use geo::algorithm::winding_order::WindingOrder;
use log::trace;

use super::{ContainmentSet, NestingNode, PolygonId};
use crate::error::{Result, SoupError};

/// Picks one immediate parent per ring from its containers.
///
/// The parent is the container that is itself contained by the most rings,
/// i.e. the deepest one. Containers are scanned in ascending id order and
/// only a strictly larger count replaces the current pick, so exact ties go
/// to the lowest id. Rings with no container start as roots.
pub fn assign_parents(sets: &[ContainmentSet]) -> Vec<NestingNode> {
    sets.iter()
        .enumerate()
        .map(|(id, containers)| {
            let mut parent: Option<PolygonId> = None;
            let mut parent_depth = 0;
            for &candidate in containers {
                let depth = sets[candidate].len();
                if parent.is_none() || depth > parent_depth {
                    parent = Some(candidate);
                    parent_depth = depth;
                }
            }
            NestingNode { id, parent }
        })
        .collect()
}

/// Number of hops from `id` up to a parentless node.
///
/// A forest of `n` nodes has no chain longer than `n - 1` hops; reaching `n`
/// means the parent links loop.
pub fn depth_of(nodes: &[NestingNode], id: PolygonId) -> Result<usize> {
    let mut depth = 0;
    let mut current = id;
    while let Some(parent) = nodes[current].parent {
        depth += 1;
        if depth >= nodes.len() {
            return Err(SoupError::StructuralViolation(format!(
                "parent chain of polygon {} does not end within {} hops",
                id,
                nodes.len()
            )));
        }
        current = parent;
    }
    Ok(depth)
}

/// Depth of every node, measured on the parent array as given.
pub fn depths(nodes: &[NestingNode]) -> Result<Vec<usize>> {
    nodes.iter().map(|node| depth_of(nodes, node.id)).collect()
}

/// Clears the parent of every node at an even depth and returns the depths.
///
/// All depths are taken from the array before any link is cleared. Clearing
/// in place while walking gives the same outcome: a cleared ancestor always
/// sits at an even depth, so later walks keep their parity.
pub fn promote_even_depths(nodes: &mut [NestingNode]) -> Result<Vec<usize>> {
    let depths = depths(nodes)?;
    for (node, &depth) in nodes.iter_mut().zip(&depths) {
        if depth % 2 == 0 && node.parent.take().is_some() {
            trace!("polygon {} promoted to outer boundary at depth {}", node.id, depth);
        }
    }
    Ok(depths)
}

/// Clears every parent link whose two rings wind the same way.
///
/// Returns the ids that were cut loose.
pub fn drop_same_winding_links(
    nodes: &mut [NestingNode],
    orientations: &[WindingOrder],
) -> Vec<PolygonId> {
    let mut dropped = Vec::new();
    for node in nodes.iter_mut() {
        if let Some(parent) = node.parent {
            if orientations[node.id] == orientations[parent] {
                trace!(
                    "polygon {} winds like its parent {}, promoted to outer boundary",
                    node.id,
                    parent
                );
                node.parent = None;
                dropped.push(node.id);
            }
        }
    }
    dropped
}
