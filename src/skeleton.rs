//! Straight-skeleton orchestration.
//!
//! Skeleton construction itself is left to a [`SkeletonBuilder`]. This module
//! resolves the soup, runs the builder once per polygon with holes, and
//! stitches the results into one graph whose nodes carry their signed
//! clearance to the nearest input boundary.

use geo_types::{Coord, LineString, Polygon};
use log::debug;

use crate::distance::BoundaryIndex;
use crate::error::{Result, SoupError};
use crate::resolver::SoupResolver;

/// Skeleton of a single polygon with holes, with edges as vertex index pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    pub vertices: Vec<Coord<f64>>,
    pub edges: Vec<(usize, usize)>,
}

pub trait SkeletonBuilder {
    fn build(&self, region: &Polygon<f64>) -> Result<Skeleton>;
}

impl<F> SkeletonBuilder for F
where
    F: Fn(&Polygon<f64>) -> Result<Skeleton>,
{
    fn build(&self, region: &Polygon<f64>) -> Result<Skeleton> {
        self(region)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphNode {
    pub id: usize,
    pub xy: Coord<f64>,
    /// Distance to the nearest input boundary, negative outside the owning polygon.
    pub r: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkeletonGraph {
    pub nodes: Vec<GraphNode>,
    /// Undirected, each stored once as `(lower id, higher id)`.
    pub edges: Vec<(usize, usize)>,
}

impl SkeletonGraph {
    pub fn node(&self, id: usize) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Resolves `rings` and builds the combined skeleton graph.
///
/// Node ids are assigned consecutively, polygon by polygon, in resolver
/// output order. Self-loops and repeated edges from the builder are dropped.
pub fn skeleton_graph<B: SkeletonBuilder>(
    builder: &B,
    resolver: &SoupResolver,
    rings: Vec<LineString<f64>>,
) -> Result<SkeletonGraph> {
    let index = BoundaryIndex::new(&rings);
    let polygons = resolver.resolve(rings)?;

    let mut graph = SkeletonGraph::default();
    for (poly_idx, polygon) in polygons.iter().enumerate() {
        let skeleton = builder.build(polygon)?;
        let offset = graph.nodes.len();

        for &xy in &skeleton.vertices {
            let r = index.signed_distance(polygon, xy).unwrap_or(0.0);
            graph.nodes.push(GraphNode {
                id: graph.nodes.len(),
                xy,
                r,
            });
        }

        let count = skeleton.vertices.len();
        let mut edges = Vec::with_capacity(skeleton.edges.len());
        for &(a, b) in &skeleton.edges {
            if a >= count || b >= count {
                return Err(SoupError::InvalidSkeleton(format!(
                    "edge ({}, {}) of polygon {} references one of only {} vertices",
                    a, b, poly_idx, count
                )));
            }
            if a != b {
                edges.push((offset + a.min(b), offset + a.max(b)));
            }
        }
        edges.sort_unstable();
        edges.dedup();
        graph.edges.extend(edges);
    }

    debug!(
        "skeleton graph: {} polygons, {} nodes, {} edges",
        polygons.len(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(graph)
}
