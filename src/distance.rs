use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::EuclideanDistance;
use geo_types::{Coord, Line, LineString, Point, Polygon};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

// Wrapper for a boundary segment to be indexable by rstar
#[derive(Clone, Copy, Debug)]
struct IndexedSegment {
    line: Line<f64>,
}

impl RTreeObject for IndexedSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let p1 = self.line.start;
        let p2 = self.line.end;
        AABB::from_corners(
            [p1.x.min(p2.x), p1.y.min(p2.y)],
            [p1.x.max(p2.x), p1.y.max(p2.y)],
        )
    }
}

impl PointDistance for IndexedSegment {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d = Point::new(point[0], point[1]).euclidean_distance(&self.line);
        d * d
    }
}

/// Nearest-boundary lookups over every segment of a set of rings.
pub struct BoundaryIndex {
    tree: RTree<IndexedSegment>,
}

impl BoundaryIndex {
    pub fn new<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = &'a LineString<f64>>,
    {
        let mut segments = Vec::new();
        for ring in rings {
            let mut ring = ring.clone();
            ring.close();
            segments.extend(
                ring.lines()
                    .filter(|l| l.start != l.end)
                    .map(|line| IndexedSegment { line }),
            );
        }
        Self {
            tree: RTree::bulk_load(segments),
        }
    }

    /// Indexes the exterior and interior rings of `polygons`.
    pub fn from_polygons(polygons: &[Polygon<f64>]) -> Self {
        Self::new(
            polygons
                .iter()
                .flat_map(|p| std::iter::once(p.exterior()).chain(p.interiors())),
        )
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Distance from `coord` to the closest indexed segment, `None` when empty.
    pub fn distance(&self, coord: Coord<f64>) -> Option<f64> {
        let query = [coord.x, coord.y];
        self.tree
            .nearest_neighbor(&query)
            .map(|seg| seg.distance_2(&query).sqrt())
    }

    /// Like [`distance`](Self::distance), but negative when `coord` lies
    /// outside `region` (beyond its exterior or inside one of its holes).
    pub fn signed_distance(&self, region: &Polygon<f64>, coord: Coord<f64>) -> Option<f64> {
        let d = self.distance(coord)?;
        Some(match region.coordinate_position(&coord) {
            CoordPos::Outside => -d,
            _ => d,
        })
    }
}
