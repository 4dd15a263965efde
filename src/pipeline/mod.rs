//! The per-step collision pipeline: broad phase, narrow phase, and the
//! persistent manifold store.

pub use self::broad_phase::BroadPhase;
pub use self::manifold_store::ManifoldStore;

pub mod broad_phase;
pub mod manifold_store;
pub mod narrow_phase;
