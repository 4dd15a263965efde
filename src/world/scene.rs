//! The serializable snapshot format of a world.

use crate::dynamics::{AttachedShape, BodyKind, IntegrationParameters, Joint};
use crate::math::{Isometry, Real, Vector};
use serde::{Deserialize, Serialize};

/// A flat, serializable snapshot of a world.
///
/// Records are keyed by the raw id values so destroyed (never reused) slots
/// survive a round trip: a world rebuilt from a scene hands out the same ids
/// the original world would have.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    /// The simulation parameters, gravity included.
    pub params: IntegrationParameters,
    /// The live bodies.
    pub bodies: Vec<BodyRecord>,
    /// The live joints.
    pub joints: Vec<JointRecord>,
    /// The id the next created body will receive.
    pub next_body_id: u32,
    /// The id the next added joint will receive.
    pub next_joint_id: u32,
}

/// The serializable state of one rigid body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyRecord {
    /// The raw id of the body.
    pub id: u32,
    /// The motion regime.
    pub kind: BodyKind,
    /// The world-space pose.
    pub position: Isometry,
    /// The linear velocity.
    pub linvel: Vector,
    /// The angular velocity.
    pub angvel: Real,
    /// The restitution coefficient.
    pub restitution: Real,
    /// The friction coefficient.
    pub friction: Real,
    /// The attached shapes.
    pub shapes: Vec<AttachedShape>,
    /// The id the next attached shape will receive.
    pub next_shape_id: u32,
    /// Whether the body is asleep.
    pub sleeping: bool,
    /// The accumulated quiescence time.
    pub sleep_timer: Real,
}

/// The serializable state of one joint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JointRecord {
    /// The raw id of the joint.
    pub id: u32,
    /// The joint itself.
    pub joint: Joint,
}
