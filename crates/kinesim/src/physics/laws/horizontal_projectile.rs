//! Angled launch under constant gravity

use super::MotionLaw;
use crate::physics::frame::SimulationFrame;
use crate::physics::horizon::{FALLBACK_HORIZON, landing_horizon, usable_gravity};
use crate::physics::math::{Scalar, time_to_cover, to_radians};
use crate::physics::params::PhysicsParams;

/// Projectile launched at `angle` degrees above the horizontal
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalProjectile;

impl HorizontalProjectile {
    fn launch_velocity(params: &PhysicsParams) -> (Scalar, Scalar) {
        let theta = to_radians(params.angle);
        (
            params.initial_velocity * libm::cos(theta),
            params.initial_velocity * libm::sin(theta),
        )
    }
}

impl MotionLaw for HorizontalProjectile {
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame {
        let (vx0, vy0) = Self::launch_velocity(params);
        let g = params.gravity;
        let y = params.initial_height + vy0 * t - 0.5 * g * t * t;

        SimulationFrame::new(t, vx0 * t, y.max(0.0), vx0, vy0 - g * t)
    }

    /// Positive root of h₀ + vy₀t − ½gt² = 0.
    fn horizon(&self, params: &PhysicsParams) -> Scalar {
        let Some(g) = usable_gravity(params) else {
            return FALLBACK_HORIZON;
        };

        let (_, vy0) = Self::launch_velocity(params);
        landing_horizon(time_to_cover(params.initial_height, -vy0, g))
    }
}
