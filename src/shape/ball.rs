use crate::math::Real;
use serde::{Deserialize, Serialize};

/// A ball (disc) shape.
#[derive(PartialEq, Debug, Copy, Clone, Serialize, Deserialize)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}
