//! Uniform-grid pruning of candidate collision pairs.

use crate::dynamics::{BodyId, RigidBody};
use crate::math::Real;
use crate::utils::SortedPair;
use std::collections::BTreeMap;

/// A uniform-grid broad phase, rebuilt from scratch every step.
///
/// The grid is a superset filter: it may report pairs whose shapes do not
/// actually touch, but never misses a pair that will. Body AABBs are swept
/// along one step of velocity and loosened by a margin so fast bodies still
/// find their partners. Static-static pairs are excluded.
pub struct BroadPhase {
    /// The edge length of the grid cells.
    pub cell_size: Real,
}

impl BroadPhase {
    /// Creates a broad phase with the given grid cell size.
    pub fn new(cell_size: Real) -> Self {
        Self { cell_size }
    }

    /// Finds all candidate body pairs, sorted and deduplicated.
    pub fn find_pairs(
        &self,
        bodies: &[Option<RigidBody>],
        dt: Real,
        margin: Real,
    ) -> Vec<SortedPair<BodyId>> {
        let mut aabbs = Vec::with_capacity(bodies.len());
        let mut grid: BTreeMap<(i32, i32), Vec<usize>> = BTreeMap::new();

        for (i, slot) in bodies.iter().enumerate() {
            let Some(body) = slot else {
                aabbs.push(None);
                continue;
            };
            if body.shapes().is_empty() {
                aabbs.push(None);
                continue;
            }

            let aabb = body
                .compute_aabb()
                .extended(&(body.linvel * dt))
                .loosened(margin);

            let min_cell = self.cell_coords(aabb.mins.x, aabb.mins.y);
            let max_cell = self.cell_coords(aabb.maxs.x, aabb.maxs.y);
            for cx in min_cell.0..=max_cell.0 {
                for cy in min_cell.1..=max_cell.1 {
                    grid.entry((cx, cy)).or_default().push(i);
                }
            }
            aabbs.push(Some(aabb));
        }

        let mut pairs = Vec::new();
        for members in grid.values() {
            for (k, &i1) in members.iter().enumerate() {
                for &i2 in &members[k + 1..] {
                    let (Some(b1), Some(b2)) = (&bodies[i1], &bodies[i2]) else {
                        continue;
                    };
                    if b1.is_static() && b2.is_static() {
                        continue;
                    }
                    let (Some(aabb1), Some(aabb2)) = (&aabbs[i1], &aabbs[i2]) else {
                        continue;
                    };
                    if aabb1.intersects(aabb2) {
                        pairs.push(SortedPair::new(BodyId(i1 as u32), BodyId(i2 as u32)));
                    }
                }
            }
        }

        pairs.sort_unstable();
        pairs.dedup();
        log::trace!("broad phase found {} candidate pairs", pairs.len());
        pairs
    }

    fn cell_coords(&self, x: Real, y: Real) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }
}
