//! Uniform circular motion about the origin

use super::MotionLaw;
use crate::physics::frame::SimulationFrame;
use crate::physics::horizon::FALLBACK_HORIZON;
use crate::physics::math::{Scalar, TAU};
use crate::physics::params::PhysicsParams;

const REVOLUTIONS_PER_RUN: Scalar = 2.0;

/// Counter-clockwise motion on a circle of `radius`, starting at (r, 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationalMotion;

impl MotionLaw for RotationalMotion {
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame {
        let r = params.radius_or_default();
        let omega = params.angular_velocity_or_default();
        let (sin, cos) = (libm::sin(omega * t), libm::cos(omega * t));

        SimulationFrame::new(t, r * cos, r * sin, -r * omega * sin, r * omega * cos)
    }

    fn horizon(&self, params: &PhysicsParams) -> Scalar {
        let omega = params.angular_velocity_or_default();
        if omega > 0.0 {
            REVOLUTIONS_PER_RUN * TAU / omega
        } else {
            FALLBACK_HORIZON
        }
    }
}
