//! Rigid bodies, joints, the impulse solver, the integrator, and island
//! based sleeping.

pub use self::body::{AttachedShape, BodyId, BodyKind, RigidBody, ShapeId};
pub use self::integration_parameters::IntegrationParameters;
pub use self::joint::{Joint, JointId, JointKind};

pub mod body;
pub mod integration_parameters;
pub mod integrator;
pub mod island;
pub mod joint;
pub mod solver;
