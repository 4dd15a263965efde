//! Errors reported by fallible world operations.

use crate::dynamics::{BodyId, JointId};
use crate::math::Real;

/// The failure cases of the world's mutating operations.
///
/// A rejected operation leaves the world untouched. Numerical edge cases
/// inside the pipeline never surface here; they degrade to "no contact".
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum WorldError {
    /// A shape description was rejected (too few vertices, zero area,
    /// non-convex loop, non-positive radius).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
    /// A numeric parameter was rejected.
    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),
    /// The body handle does not name a live body.
    #[error("unknown body {0:?}")]
    UnknownBody(BodyId),
    /// The joint handle does not name a live joint.
    #[error("unknown joint {0:?}")]
    UnknownJoint(JointId),
    /// The timestep was non-finite or non-positive.
    #[error("invalid timestep: {0}")]
    InvalidTimestep(Real),
}
