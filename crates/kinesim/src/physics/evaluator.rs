//! Frame evaluation by scenario kind

use super::frame::SimulationFrame;
use super::kind::PhysicsKind;
use super::laws::{
    FreeFall, HorizontalProjectile, InclinedPlane, MotionLaw, RotationalMotion,
    SimpleHarmonicMotion, VerticalProjectile,
};
use super::math::Scalar;
use super::params::PhysicsParams;

/// Sample the scenario at time `t`.
///
/// `t` is not bounded: negative times and times past the horizon are
/// evaluated with the same law. Unrecognized kinds use the vertical
/// projectile law.
pub fn compute(params: &PhysicsParams, t: Scalar) -> SimulationFrame {
    match params.kind {
        PhysicsKind::VerticalProjectile | PhysicsKind::Unrecognized => {
            VerticalProjectile.evaluate(params, t)
        }
        PhysicsKind::HorizontalProjectile => HorizontalProjectile.evaluate(params, t),
        PhysicsKind::FreeFall => FreeFall.evaluate(params, t),
        PhysicsKind::SimpleHarmonicMotion => SimpleHarmonicMotion.evaluate(params, t),
        PhysicsKind::InclinedPlane => InclinedPlane.evaluate(params, t),
        PhysicsKind::RotationalMotion => RotationalMotion.evaluate(params, t),
    }
}
