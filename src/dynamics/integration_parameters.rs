//! Tunable parameters of the simulation loop.

use crate::math::{Real, Vector};
use serde::{Deserialize, Serialize};

/// Parameters controlling the simulation step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegrationParameters {
    /// The gravity acceleration applied to every dynamic body.
    pub gravity: Vector,
    /// The number of velocity iterations of the impulse solver.
    pub velocity_iterations: usize,
    /// The penetration depth the solver tolerates without correction.
    pub allowed_penetration: Real,
    /// The proportion of penetration beyond the slop corrected each step.
    pub erp: Real,
    /// The minimum approach speed below which restitution is ignored.
    pub restitution_threshold: Real,
    /// The distance below which speculative contacts are generated.
    pub prediction_distance: Real,
    /// The edge length of the uniform broad-phase grid cells.
    pub broad_phase_cell_size: Real,
    /// The margin added around broad-phase AABBs.
    pub broad_phase_margin: Real,
    /// The linear speed below which a body is eligible for sleep.
    pub sleep_linear_threshold: Real,
    /// The angular speed below which a body is eligible for sleep.
    pub sleep_angular_threshold: Real,
    /// How long every body of an island must stay slow before it sleeps.
    pub time_to_sleep: Real,
}

impl Default for IntegrationParameters {
    fn default() -> Self {
        Self {
            gravity: Vector::new(0.0, -9.81),
            velocity_iterations: 10,
            allowed_penetration: 0.005,
            erp: 0.2,
            restitution_threshold: 1.0,
            prediction_distance: 0.005,
            broad_phase_cell_size: 2.0,
            broad_phase_margin: 0.1,
            sleep_linear_threshold: 0.05,
            sleep_angular_threshold: 0.05,
            time_to_sleep: 0.5,
        }
    }
}
