//! Straight-up throw under constant gravity

use super::MotionLaw;
use crate::physics::frame::SimulationFrame;
use crate::physics::horizon::{FALLBACK_HORIZON, landing_horizon, usable_gravity};
use crate::physics::math::{Scalar, fall_time_from_rest};
use crate::physics::params::PhysicsParams;

/// Vertical projectile
///
/// y(t) = h₀ + v₀t − ½gt², floored at the ground
/// vy(t) = v₀ − gt
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalProjectile;

impl MotionLaw for VerticalProjectile {
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame {
        let v0 = params.initial_velocity;
        let g = params.gravity;
        let y = params.initial_height + v0 * t - 0.5 * g * t * t;

        SimulationFrame::new(t, 0.0, y.max(0.0), 0.0, v0 - g * t)
    }

    /// Rise to the apex, then fall from rest at the apex height.
    fn horizon(&self, params: &PhysicsParams) -> Scalar {
        let Some(g) = usable_gravity(params) else {
            return FALLBACK_HORIZON;
        };

        let v0 = params.initial_velocity;
        let rise = v0 / g;
        let peak = params.initial_height + v0 * rise - 0.5 * g * rise * rise;

        landing_horizon(rise + fall_time_from_rest(peak, g))
    }
}
