use crate::math::{Point, Real, UnitVector};
use arrayvec::ArrayVec;

/// The maximum number of contact points of a manifold (2 in 2D).
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// A single contact point between two shapes.
///
/// The feature id pair identifies which geometric features (vertex or face,
/// together with the owning shape slot) generated this point. The manifold
/// store matches feature id pairs across steps to carry the accumulated
/// impulses over, warm-starting the solver.
#[derive(Copy, Clone, Debug)]
pub struct TrackedContact {
    /// The contact point, in world space.
    pub point: Point,
    /// The signed distance between the two shapes along the normal.
    ///
    /// Negative values indicate penetration.
    pub dist: Real,
    /// The contact normal, in world space, pointing from the first shape
    /// toward the second.
    pub normal: UnitVector,
    /// The packed feature id of the first shape involved in this contact.
    pub fid1: u32,
    /// The packed feature id of the second shape involved in this contact.
    pub fid2: u32,
    /// The impulse applied along the normal during the previous solve.
    pub normal_impulse: Real,
    /// The impulse applied along the tangent during the previous solve.
    pub tangent_impulse: Real,
}

impl TrackedContact {
    /// Creates a new tracked contact with zeroed accumulated impulses.
    pub fn new(point: Point, dist: Real, normal: UnitVector, fid1: u32, fid2: u32) -> Self {
        Self {
            point,
            dist,
            normal,
            fid1,
            fid2,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
        }
    }

    /// This contact with the roles of the two shapes exchanged.
    pub fn flipped(mut self) -> Self {
        self.normal = -self.normal;
        std::mem::swap(&mut self.fid1, &mut self.fid2);
        self
    }
}

/// The set of contact points between two bodies.
///
/// At most [`MAX_MANIFOLD_POINTS`] points are kept; for compound bodies the
/// narrow phase keeps the deepest points across all shape pairs.
#[derive(Clone, Debug, Default)]
pub struct ContactManifold {
    /// The contact points of this manifold.
    pub points: ArrayVec<TrackedContact, MAX_MANIFOLD_POINTS>,
}

impl ContactManifold {
    /// Creates an empty manifold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the contact of this manifold matching the given feature id pair.
    pub fn find_matching(&self, fid1: u32, fid2: u32) -> Option<&TrackedContact> {
        self.points
            .iter()
            .find(|pt| pt.fid1 == fid1 && pt.fid2 == fid2)
    }
}
