//! Persistent contact manifolds keyed by body pair.

use crate::dynamics::{BodyId, RigidBody};
use crate::math::Real;
use crate::pipeline::narrow_phase;
use crate::query::ContactManifold;
use crate::utils::SortedPair;
use std::collections::BTreeMap;

/// The persistent set of contact manifolds, keyed by unordered body pair.
///
/// Keyed storage is what makes warm starting work: when the same feature
/// pair shows up on consecutive steps, the accumulated impulses of the
/// previous step seed the new solve. Pairs the broad phase no longer
/// reports are dropped.
#[derive(Default)]
pub struct ManifoldStore {
    manifolds: BTreeMap<SortedPair<BodyId>, ContactManifold>,
}

impl ManifoldStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current manifolds. Only pairs with at least one contact point are
    /// stored.
    pub fn manifolds(&self) -> &BTreeMap<SortedPair<BodyId>, ContactManifold> {
        &self.manifolds
    }

    /// Mutable access for the solver's impulse write-back.
    pub(crate) fn manifolds_mut(
        &mut self,
    ) -> &mut BTreeMap<SortedPair<BodyId>, ContactManifold> {
        &mut self.manifolds
    }

    /// Recomputes the manifolds of the given candidate pairs, carrying
    /// accumulated impulses across matching feature-id pairs.
    ///
    /// Pairs where both bodies sleep keep their previous manifold untouched
    /// so their warm-start state survives until they wake. Returns the pairs
    /// that gained points and the pairs that lost all points, both in key
    /// order.
    pub fn update(
        &mut self,
        pairs: &[SortedPair<BodyId>],
        bodies: &[Option<RigidBody>],
        prediction: Real,
    ) -> (Vec<SortedPair<BodyId>>, Vec<SortedPair<BodyId>>) {
        let mut new_manifolds = BTreeMap::new();

        for pair in pairs {
            let (id1, id2) = **pair;
            let (Some(b1), Some(b2)) = (&bodies[id1.0 as usize], &bodies[id2.0 as usize])
            else {
                continue;
            };

            if b1.is_sleeping() && b2.is_sleeping() {
                if let Some(manifold) = self.manifolds.remove(pair) {
                    new_manifolds.insert(*pair, manifold);
                }
                continue;
            }

            let mut manifold = narrow_phase::compute_manifold(b1, b2, prediction);
            if manifold.points.is_empty() {
                continue;
            }

            if let Some(old) = self.manifolds.get(pair) {
                for pt in &mut manifold.points {
                    if let Some(old_pt) = old.find_matching(pt.fid1, pt.fid2) {
                        pt.normal_impulse = old_pt.normal_impulse;
                        pt.tangent_impulse = old_pt.tangent_impulse;
                    }
                }
            }

            new_manifolds.insert(*pair, manifold);
        }

        let began = new_manifolds
            .keys()
            .filter(|pair| !self.manifolds.contains_key(pair))
            .copied()
            .collect();
        let ended = self
            .manifolds
            .keys()
            .filter(|pair| !new_manifolds.contains_key(pair))
            .copied()
            .collect();

        self.manifolds = new_manifolds;
        (began, ended)
    }

    /// The bodies currently in contact with `body`.
    pub fn bodies_in_contact_with(&self, body: BodyId) -> Vec<BodyId> {
        self.manifolds
            .keys()
            .filter_map(|pair| {
                let (id1, id2) = **pair;
                if id1 == body {
                    Some(id2)
                } else if id2 == body {
                    Some(id1)
                } else {
                    None
                }
            })
            .collect()
    }
}
