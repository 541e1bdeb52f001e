//! Example problem statements, one per scenario kind

use crate::physics::{PhysicsKind, PhysicsParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleProblem {
    pub label: &'static str,
    pub text: &'static str,
    pub kind: PhysicsKind,
}

pub const SAMPLE_PROBLEMS: [SampleProblem; 6] = [
    SampleProblem {
        label: "Vertical Throw",
        text: "A ball is thrown straight up with a speed of 10 m/s from the ground.",
        kind: PhysicsKind::VerticalProjectile,
    },
    SampleProblem {
        label: "Free Fall",
        text: "A stone is dropped from a height of 45 meters.",
        kind: PhysicsKind::FreeFall,
    },
    SampleProblem {
        label: "Projectile",
        text: "A cannonball is launched at 20 m/s at an angle of 45 degrees from the ground.",
        kind: PhysicsKind::HorizontalProjectile,
    },
    SampleProblem {
        label: "SHM",
        text: "A mass on a spring oscillates with an amplitude of 0.5 meters and a frequency of 2 Hz.",
        kind: PhysicsKind::SimpleHarmonicMotion,
    },
    SampleProblem {
        label: "Inclined Plane",
        text: "A 2 kg block slides down a 30 degree frictionless inclined plane from rest.",
        kind: PhysicsKind::InclinedPlane,
    },
    SampleProblem {
        label: "Rotational",
        text: "A ball moves in a circle of radius 2 meters with angular velocity 3 rad/s.",
        kind: PhysicsKind::RotationalMotion,
    },
];

impl SampleProblem {
    /// Parameters a parser would extract from the text. The ramp sample
    /// has no stated height and gets a 10 m ramp.
    pub fn parameters(&self) -> PhysicsParams {
        let params = PhysicsParams::new(self.kind);
        match self.kind {
            PhysicsKind::VerticalProjectile => params.with_initial_velocity(10.0).with_label("Ball"),
            PhysicsKind::FreeFall => params.with_initial_height(45.0).with_label("Stone"),
            PhysicsKind::HorizontalProjectile => params
                .with_initial_velocity(20.0)
                .with_angle(45.0)
                .with_label("Cannonball"),
            PhysicsKind::SimpleHarmonicMotion => params
                .with_amplitude(0.5)
                .with_frequency(2.0)
                .with_label("Mass"),
            PhysicsKind::InclinedPlane => PhysicsParams {
                mass: 2.0,
                ..params
                    .with_initial_velocity(0.0)
                    .with_initial_height(10.0)
                    .with_incline_angle(30.0)
                    .with_friction_coefficient(0.0)
                    .with_label("Block")
            },
            PhysicsKind::RotationalMotion => params
                .with_radius(2.0)
                .with_angular_velocity(3.0)
                .with_label("Ball"),
            PhysicsKind::Unrecognized => params,
        }
    }
}

/// Sample by label, ignoring case
pub fn find_sample(label: &str) -> Option<&'static SampleProblem> {
    SAMPLE_PROBLEMS
        .iter()
        .find(|sample| sample.label.eq_ignore_ascii_case(label.trim()))
}
