//! Block sliding down a ramp with Coulomb friction

use super::MotionLaw;
use crate::physics::frame::SimulationFrame;
use crate::physics::horizon::{FALLBACK_HORIZON, landing_horizon};
use crate::physics::math::{Scalar, time_to_cover, to_radians};
use crate::physics::params::PhysicsParams;

/// Ramp height assumed when the block starts at ground level
const DEFAULT_RAMP_HEIGHT: Scalar = 10.0;

/// Inclined plane
///
/// Net acceleration along the slope is a = g(sinθ − μcosθ). The block moves
/// s(t) = v₀t + ½at² along the slope, which projects to x = s·cosθ and a
/// drop in height of s·sinθ. A negative `a` decelerates (and eventually
/// reverses) the block; no static-friction hold is modelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclinedPlane;

impl InclinedPlane {
    /// (incline angle in radians, net acceleration along the slope)
    fn slope(params: &PhysicsParams) -> (Scalar, Scalar) {
        let theta = to_radians(params.incline_angle_or_default());
        let mu = params.friction_coefficient_or_default();
        let acceleration = params.gravity * (libm::sin(theta) - mu * libm::cos(theta));
        (theta, acceleration)
    }
}

impl MotionLaw for InclinedPlane {
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame {
        let (theta, a) = Self::slope(params);
        let v0 = params.initial_velocity;
        let s = v0 * t + 0.5 * a * t * t;
        let v = v0 + a * t;
        let (sin, cos) = (libm::sin(theta), libm::cos(theta));
        let y = params.initial_height - s * sin;

        SimulationFrame::new(t, s * cos, y.max(0.0), v * cos, -v * sin)
    }

    /// Time to slide the full ramp length h₀/sinθ. Without net downslope
    /// acceleration the block never reaches the bottom and the fallback
    /// duration is used.
    fn horizon(&self, params: &PhysicsParams) -> Scalar {
        let (theta, a) = Self::slope(params);
        if !(a > 0.0) {
            return FALLBACK_HORIZON;
        }

        let height = if params.initial_height == 0.0 || params.initial_height.is_nan() {
            DEFAULT_RAMP_HEIGHT
        } else {
            params.initial_height
        };
        let ramp_length = height / libm::sin(theta);

        landing_horizon(time_to_cover(ramp_length, params.initial_velocity, a))
    }
}
