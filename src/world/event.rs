//! Events observed while stepping a world.

use crate::dynamics::{BodyId, JointId};

/// A simulation event emitted during a step.
///
/// Events of one step are sorted before being appended to the world's event
/// buffer, so the stream is deterministic across runs. The derived ordering
/// (variant first, then ids) is the sort key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    /// Two bodies gained at least one contact point.
    CollisionBegan(BodyId, BodyId),
    /// Two previously touching bodies lost all contact points.
    CollisionEnded(BodyId, BodyId),
    /// A joint's accumulated impulse exceeded its breaking threshold and the
    /// joint was removed.
    JointBroken(JointId),
    /// A body fell asleep with the rest of its island.
    BodySlept(BodyId),
    /// A sleeping body woke up.
    BodyWoke(BodyId),
}
