//! Simple harmonic motion along the x axis

use super::MotionLaw;
use crate::physics::frame::SimulationFrame;
use crate::physics::horizon::FALLBACK_HORIZON;
use crate::physics::math::{Scalar, TAU};
use crate::physics::params::PhysicsParams;

/// Number of oscillation periods in one run
const PERIODS_PER_RUN: Scalar = 3.0;

/// Oscillator released from x = A
///
/// x(t) = A·cos(ωt), vx(t) = −Aω·sin(ωt), with ω = 2πf.
/// Height stays at zero. A zero frequency gives a stationary body.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleHarmonicMotion;

impl MotionLaw for SimpleHarmonicMotion {
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame {
        let amplitude = params.amplitude_or_default();
        let omega = TAU * params.frequency_or_default();
        let phase = omega * t;

        SimulationFrame::new(
            t,
            amplitude * libm::cos(phase),
            0.0,
            -amplitude * omega * libm::sin(phase),
            0.0,
        )
    }

    fn horizon(&self, params: &PhysicsParams) -> Scalar {
        let frequency = params.frequency_or_default();
        if frequency > 0.0 {
            PERIODS_PER_RUN / frequency
        } else {
            FALLBACK_HORIZON
        }
    }
}
