/*!
boxigon2d
=========

**boxigon2d** is the rigid-body physics core of the Boxigon sandbox: a
deterministic, fixed-timestep 2D simulator with broad-phase pruning,
SAT/clipping narrow-phase, a warm-started sequential-impulse solver,
island-based sleeping, and breakable joints.

The presentation, editor and scripting layers live outside this crate and
talk to it exclusively through [`world::World`]: they enqueue intents
(create a body, apply a force, detonate an explosion), call
[`world::World::step`], and read back body state, spatial queries and the
per-step event stream.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dynamics;
pub mod mass_properties;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;
pub mod world;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    use na::{Isometry2, Matrix2, Point2, UnitComplex, UnitVector2, Vector2};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub type Point = Point2<Real>;

    /// The vector type.
    pub type Vector = Vector2<Real>;

    /// The unit vector type.
    pub type UnitVector = UnitVector2<Real>;

    /// The matrix type.
    pub type Matrix = Matrix2<Real>;

    /// The transformation matrix type.
    pub type Isometry = Isometry2<Real>;

    /// The rotation type.
    pub type Rotation = UnitComplex<Real>;
}
