//! Drop from rest

use super::MotionLaw;
use crate::physics::frame::SimulationFrame;
use crate::physics::horizon::{FALLBACK_HORIZON, landing_horizon, usable_gravity};
use crate::physics::math::{Scalar, fall_time_from_rest};
use crate::physics::params::PhysicsParams;

/// Drop height used for the horizon when the body starts lower than this
const MIN_DROP_HEIGHT: Scalar = 1.0;

/// Free fall from `initial_height`, ignoring `initial_velocity`
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeFall;

impl MotionLaw for FreeFall {
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame {
        let g = params.gravity;
        let y = params.initial_height - 0.5 * g * t * t;

        SimulationFrame::new(t, 0.0, y.max(0.0), 0.0, -g * t)
    }

    fn horizon(&self, params: &PhysicsParams) -> Scalar {
        let Some(g) = usable_gravity(params) else {
            return FALLBACK_HORIZON;
        };

        let height = params.initial_height.max(MIN_DROP_HEIGHT);
        landing_horizon(fall_time_from_rest(height, g))
    }
}
