//! Adjustable parameters per scenario kind
//!
//! Each [`ControlSpec`] describes one slider: which field it edits, its
//! range and step, and the unit shown next to the value.

use crate::physics::{ParamsError, PhysicsKind, PhysicsParams, Scalar};
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    /// snake_case field name accepted by [`PhysicsParams::set_field`]
    pub field: &'static str,
    pub label: &'static str,
    pub min: Scalar,
    pub max: Scalar,
    pub step: Scalar,
    pub unit: &'static str,
}

impl ControlSpec {
    const fn new(
        field: &'static str,
        label: &'static str,
        min: Scalar,
        max: Scalar,
        step: Scalar,
        unit: &'static str,
    ) -> Self {
        Self {
            field,
            label,
            min,
            max,
            step,
            unit,
        }
    }

    /// Current value, or the slider minimum when the field cannot be read
    pub fn value(&self, params: &PhysicsParams) -> Scalar {
        params.field(self.field).unwrap_or(self.min)
    }

    /// Set the field to `value` clamped into the slider range
    pub fn apply(&self, params: &mut PhysicsParams, value: Scalar) -> Result<Scalar, ParamsError> {
        let clamped = value.clamp(self.min, self.max);
        params.set_field(self.field, clamped)?;
        Ok(clamped)
    }
}

const GRAVITY: ControlSpec = ControlSpec::new("gravity", "Gravity", 1.0, 20.0, 0.1, "m/s²");
const INITIAL_HEIGHT: ControlSpec =
    ControlSpec::new("initial_height", "Initial Height", 0.0, 100.0, 1.0, "m");

/// Controls shown for `kind`, gravity last for the kinds it affects.
pub fn controls_for(kind: PhysicsKind) -> Vec<ControlSpec> {
    match kind {
        PhysicsKind::VerticalProjectile => vec![
            ControlSpec::new("initial_velocity", "Initial Velocity", 1.0, 50.0, 0.5, "m/s"),
            INITIAL_HEIGHT,
            GRAVITY,
        ],
        PhysicsKind::HorizontalProjectile => vec![
            ControlSpec::new("initial_velocity", "Launch Speed", 1.0, 50.0, 0.5, "m/s"),
            ControlSpec::new("angle", "Launch Angle", 5.0, 85.0, 1.0, "°"),
            INITIAL_HEIGHT,
            GRAVITY,
        ],
        PhysicsKind::FreeFall => vec![
            ControlSpec::new("initial_height", "Drop Height", 1.0, 200.0, 1.0, "m"),
            GRAVITY,
        ],
        PhysicsKind::SimpleHarmonicMotion => vec![
            ControlSpec::new("amplitude", "Amplitude", 0.1, 5.0, 0.1, "m"),
            ControlSpec::new("frequency", "Frequency", 0.1, 10.0, 0.1, "Hz"),
        ],
        PhysicsKind::InclinedPlane => vec![
            ControlSpec::new("incline_angle", "Incline Angle", 5.0, 85.0, 1.0, "°"),
            ControlSpec::new("friction_coefficient", "Friction", 0.0, 1.0, 0.01, ""),
            ControlSpec::new("initial_velocity", "Initial Speed", 0.0, 20.0, 0.5, "m/s"),
            ControlSpec::new("initial_height", "Ramp Height", 1.0, 100.0, 1.0, "m"),
            GRAVITY,
        ],
        PhysicsKind::RotationalMotion => vec![
            ControlSpec::new("radius", "Radius", 0.1, 10.0, 0.1, "m"),
            ControlSpec::new("angular_velocity", "Angular Velocity", 0.1, 20.0, 0.1, "rad/s"),
        ],
        PhysicsKind::Unrecognized => vec![GRAVITY],
    }
}
