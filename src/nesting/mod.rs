//! Nesting resolution for a soup of simple rings.
//!
//! The pipeline runs strictly in this order:
//! 1. [`containment::containment_sets`] finds every container of every ring.
//! 2. [`forest::assign_parents`] keeps the tightest container as the parent.
//! 3. [`forest::promote_even_depths`] turns even-depth rings back into roots.
//! 4. [`forest::drop_same_winding_links`] cuts links between rings that wind the same way.
//! 5. [`groups::group_forest`] and [`groups::build_polygons`] emit polygons with holes.
//!
//! Rings are addressed by their input position ([`PolygonId`]) throughout.

pub mod containment;
pub mod forest;
pub mod groups;


/// Position of a ring in the input sequence.
pub type PolygonId = usize;

/// Ids of every ring fully containing a given ring, ascending.
pub type ContainmentSet = Vec<PolygonId>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NestingNode {
    pub id: PolygonId,
    pub parent: Option<PolygonId>,
}

impl NestingNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// One outer boundary and its direct holes, in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolygonGroup {
    pub outer: PolygonId,
    pub holes: Vec<PolygonId>,
}

/// How a ring ended up in its final role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NestingRole {
    /// Nothing contains it.
    RootByNoContainment,
    /// Contained, but at an even nesting depth.
    RootByEvenDepth,
    /// Its parent winds the same way, so the link was dropped.
    RootByOrientationMismatch,
    /// A hole of its parent's group.
    ConfirmedHole,
}

impl NestingRole {
    pub fn is_outer(self) -> bool {
        self != NestingRole::ConfirmedHole
    }
}
