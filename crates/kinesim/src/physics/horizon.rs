//! Natural duration of a scenario
//!
//! Landing kinds end at ground impact, floored at [`MIN_LANDING_TIME`] and
//! padded by [`LANDING_MARGIN`] so the final frames stay visible. Periodic
//! kinds run a fixed number of cycles.

use super::kind::PhysicsKind;
use super::laws::{
    FreeFall, HorizontalProjectile, InclinedPlane, MotionLaw, RotationalMotion,
    SimpleHarmonicMotion, VerticalProjectile,
};
use super::math::Scalar;
use super::params::PhysicsParams;

/// Duration used when a scenario has no natural end
pub const FALLBACK_HORIZON: Scalar = 5.0;

/// Visual margin added after ground impact
pub const LANDING_MARGIN: Scalar = 0.5;

/// Shortest impact time reported for landing kinds
pub const MIN_LANDING_TIME: Scalar = 1.0;

/// Impact time with the floor and margin applied.
#[inline]
pub(crate) fn landing_horizon(impact_time: Scalar) -> Scalar {
    impact_time.max(MIN_LANDING_TIME) + LANDING_MARGIN
}

/// Gravity, when it is usable as a divisor in a landing formula.
pub(crate) fn usable_gravity(params: &PhysicsParams) -> Option<Scalar> {
    let g = params.gravity;
    (g.is_finite() && g > 0.0).then_some(g)
}

/// Natural end time of the scenario in seconds.
///
/// Always finite and positive for finite parameters.
pub fn horizon(params: &PhysicsParams) -> Scalar {
    match params.kind {
        PhysicsKind::VerticalProjectile => VerticalProjectile.horizon(params),
        PhysicsKind::HorizontalProjectile => HorizontalProjectile.horizon(params),
        PhysicsKind::FreeFall => FreeFall.horizon(params),
        PhysicsKind::SimpleHarmonicMotion => SimpleHarmonicMotion.horizon(params),
        PhysicsKind::InclinedPlane => InclinedPlane.horizon(params),
        PhysicsKind::RotationalMotion => RotationalMotion.horizon(params),
        PhysicsKind::Unrecognized => FALLBACK_HORIZON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_throw_from_ground() {
        let params = PhysicsParams::new(PhysicsKind::VerticalProjectile)
            .with_initial_velocity(10.0)
            .with_initial_height(0.0);
        assert!((horizon(&params) - 2.54).abs() < 0.01);
    }

    #[test]
    fn test_free_fall_from_45_metres() {
        let params = PhysicsParams::new(PhysicsKind::FreeFall).with_initial_height(45.0);
        assert!((horizon(&params) - 3.53).abs() < 0.01);
    }

    #[test]
    fn test_oscillator_runs_three_periods() {
        let params = PhysicsParams::new(PhysicsKind::SimpleHarmonicMotion)
            .with_amplitude(0.5)
            .with_frequency(2.0);
        assert_eq!(horizon(&params), 1.5);
    }

    #[test]
    fn test_unrecognized_kind_uses_fallback() {
        let params = PhysicsParams::new(PhysicsKind::Unrecognized).with_initial_velocity(50.0);
        assert_eq!(horizon(&params), FALLBACK_HORIZON);
    }

    #[test]
    fn test_gravity_kinds_fall_back_without_usable_gravity() {
        for kind in [
            PhysicsKind::VerticalProjectile,
            PhysicsKind::HorizontalProjectile,
            PhysicsKind::FreeFall,
        ] {
            for g in [0.0, -9.8, Scalar::NAN, Scalar::INFINITY] {
                let params = PhysicsParams::new(kind).with_gravity(g);
                assert_eq!(horizon(&params), FALLBACK_HORIZON, "{kind} with g = {g}");
            }
        }
    }

    #[test]
    fn test_every_kind_has_positive_finite_horizon() {
        for kind in PhysicsKind::ALL {
            let h = horizon(&PhysicsParams::new(kind));
            assert!(h.is_finite() && h > 0.0, "{kind}: {h}");
        }
    }

    #[test]
    fn test_landing_horizon_floor() {
        assert_eq!(landing_horizon(0.2), 1.5);
        assert_eq!(landing_horizon(2.0), 2.5);
        assert_eq!(landing_horizon(-1.0), 1.5);
    }
}
