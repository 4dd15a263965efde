//! Distance and pin joints linking pairs of bodies.

use crate::dynamics::BodyId;
use crate::math::{Point, Real, Vector};
use serde::{Deserialize, Serialize};

/// A stable handle to a joint. Ids are never reused by a world.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct JointId(pub u32);

/// The constraint enforced by a joint.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JointKind {
    /// Keeps the two anchor points at a fixed distance.
    Distance {
        /// The distance to maintain between the anchors.
        rest_length: Real,
    },
    /// Keeps the two anchor points coincident, leaving rotation free.
    Pin,
}

/// A constraint between two bodies, or between a body and a fixed world point.
///
/// Joints are solved with the same sequential-impulse framework as contacts.
/// When `breaking_impulse` is set and the impulse accumulated during one step
/// exceeds it, the joint is removed and a breakage event is emitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joint {
    /// The first attached body.
    pub body1: BodyId,
    /// The second attached body, or `None` to anchor to the world.
    pub body2: Option<BodyId>,
    /// The anchor point in the first body's local space.
    pub local_anchor1: Point,
    /// The anchor point in the second body's local space, or in world space
    /// when `body2` is `None`.
    pub local_anchor2: Point,
    /// The constraint enforced between the two anchors.
    pub kind: JointKind,
    /// The impulse magnitude above which the joint breaks, if any.
    pub breaking_impulse: Option<Real>,
    pub(crate) impulse: Vector,
}

impl Joint {
    /// A distance joint between two bodies.
    pub fn distance(
        body1: BodyId,
        local_anchor1: Point,
        body2: BodyId,
        local_anchor2: Point,
        rest_length: Real,
    ) -> Self {
        Self {
            body1,
            body2: Some(body2),
            local_anchor1,
            local_anchor2,
            kind: JointKind::Distance { rest_length },
            breaking_impulse: None,
            impulse: Vector::zeros(),
        }
    }

    /// A pin joint keeping the two anchors coincident.
    pub fn pin(body1: BodyId, local_anchor1: Point, body2: BodyId, local_anchor2: Point) -> Self {
        Self {
            body1,
            body2: Some(body2),
            local_anchor1,
            local_anchor2,
            kind: JointKind::Pin,
            breaking_impulse: None,
            impulse: Vector::zeros(),
        }
    }

    /// A pin joint anchoring a body to a fixed world point.
    pub fn pin_to_world(body1: BodyId, local_anchor1: Point, world_anchor: Point) -> Self {
        Self {
            body1,
            body2: None,
            local_anchor1,
            local_anchor2: world_anchor,
            kind: JointKind::Pin,
            breaking_impulse: None,
            impulse: Vector::zeros(),
        }
    }

    /// Sets the impulse magnitude above which this joint breaks.
    pub fn with_breaking_impulse(mut self, threshold: Real) -> Self {
        self.breaking_impulse = Some(threshold);
        self
    }
}
