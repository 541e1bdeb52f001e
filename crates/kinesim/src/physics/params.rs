//! Scenario parameter model
//!
//! [`PhysicsParams`] is the structured object produced by the problem parser
//! (or edited by hand). Universal fields are always present: anything the
//! parser omits is filled from [`PhysicsParams::default`]. Kind-specific
//! fields stay optional and are resolved through the generated
//! `*_or_default()` accessors at the point of use. A `null` counts as
//! omitted for every field.

use super::kind::PhysicsKind;
use super::math::Scalar;
use kinesim_macros::{ConfigDefaults, FieldFallbacks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised when building or validating a parameter set
#[derive(Debug)]
pub enum ParamsError {
    /// Gravity must be strictly positive for landing-time formulas
    NonPositiveGravity(Scalar),
    /// A numeric field held NaN or an infinity
    NonFinite { field: &'static str, value: Scalar },
    /// A field that only makes sense as a magnitude was negative
    NegativeField { field: &'static str, value: Scalar },
    /// Strict kind lookup failed
    UnknownKind(String),
    /// `set_field` was given a name that is not a numeric parameter
    UnknownField(String),
    /// The input was not a valid parameter object
    Json(serde_json::Error),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::NonPositiveGravity(value) => {
                write!(f, "gravity must be positive, got {value}")
            }
            ParamsError::NonFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            ParamsError::NegativeField { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ParamsError::UnknownKind(name) => {
                let available: Vec<&str> = PhysicsKind::ALL.iter().map(|k| k.name()).collect();
                write!(
                    f,
                    "Unknown scenario kind: '{name}'. Available kinds: {}",
                    available.join(", ")
                )
            }
            ParamsError::UnknownField(name) => {
                write!(
                    f,
                    "Unknown parameter: '{name}'. Numeric parameters: {}",
                    NUMERIC_FIELDS.join(", ")
                )
            }
            ParamsError::Json(err) => write!(f, "Invalid parameter object: {err}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        ParamsError::Json(err)
    }
}

/// Numeric fields addressable by [`PhysicsParams::set_field`], snake_case.
pub const NUMERIC_FIELDS: [&str; 11] = [
    "initial_velocity",
    "angle",
    "gravity",
    "initial_height",
    "mass",
    "amplitude",
    "frequency",
    "incline_angle",
    "friction_coefficient",
    "radius",
    "angular_velocity",
];

#[derive(ConfigDefaults, FieldFallbacks, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "ParamsPatch", rename_all = "camelCase")]
pub struct PhysicsParams {
    #[serde(rename = "type")]
    #[default(PhysicsKind::VerticalProjectile)]
    pub kind: PhysicsKind,

    /// Launch speed in m/s
    #[default(10.0)]
    pub initial_velocity: Scalar,

    /// Launch angle in degrees above the horizontal
    #[default(90.0)]
    pub angle: Scalar,

    /// Gravitational acceleration in m/s²
    #[default(9.8)]
    pub gravity: Scalar,

    /// Starting height in m
    #[default(0.0)]
    pub initial_height: Scalar,

    /// Mass in kg. Informational only; no law depends on it.
    #[default(1.0)]
    pub mass: Scalar,

    #[default("Ball")]
    pub label: String,

    /// SHM amplitude in m
    #[default(None)]
    #[fallback(0.5)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<Scalar>,

    /// SHM frequency in Hz
    #[default(None)]
    #[fallback(2.0)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Scalar>,

    /// Incline angle in degrees, distinct from the launch `angle`
    #[default(None)]
    #[fallback(30.0)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incline_angle: Option<Scalar>,

    #[default(None)]
    #[fallback(0.0)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_coefficient: Option<Scalar>,

    /// Circle radius in m
    #[default(None)]
    #[fallback(2.0)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Scalar>,

    /// Angular velocity in rad/s
    #[default(None)]
    #[fallback(3.0)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angular_velocity: Option<Scalar>,
}

/// Wire form of [`PhysicsParams`]: every field optional, merged over the
/// defaults on conversion
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ParamsPatch {
    #[serde(rename = "type")]
    kind: Option<PhysicsKind>,
    initial_velocity: Option<Scalar>,
    angle: Option<Scalar>,
    gravity: Option<Scalar>,
    initial_height: Option<Scalar>,
    mass: Option<Scalar>,
    label: Option<String>,
    amplitude: Option<Scalar>,
    frequency: Option<Scalar>,
    incline_angle: Option<Scalar>,
    friction_coefficient: Option<Scalar>,
    radius: Option<Scalar>,
    angular_velocity: Option<Scalar>,
}

impl From<ParamsPatch> for PhysicsParams {
    fn from(patch: ParamsPatch) -> Self {
        let defaults = Self::default();
        Self {
            kind: patch.kind.unwrap_or(defaults.kind),
            initial_velocity: patch.initial_velocity.unwrap_or(defaults.initial_velocity),
            angle: patch.angle.unwrap_or(defaults.angle),
            gravity: patch.gravity.unwrap_or(defaults.gravity),
            initial_height: patch.initial_height.unwrap_or(defaults.initial_height),
            mass: patch.mass.unwrap_or(defaults.mass),
            label: patch.label.unwrap_or(defaults.label),
            amplitude: patch.amplitude,
            frequency: patch.frequency,
            incline_angle: patch.incline_angle,
            friction_coefficient: patch.friction_coefficient,
            radius: patch.radius,
            angular_velocity: patch.angular_velocity,
        }
    }
}

impl PhysicsParams {
    /// Default parameters with the given kind.
    pub fn new(kind: PhysicsKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Parse a parser-service object. Missing universal fields take their
    /// defaults; unknown kinds become [`PhysicsKind::Unrecognized`].
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse either a bare parameter object or a [`ParsedProblem`]
    /// envelope. An envelope's `type` applies when its `parameters` omit one.
    pub fn from_parser_output(json: &str) -> Result<Self, ParamsError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("parameters").is_some_and(serde_json::Value::is_object) {
            let problem: ParsedProblem = serde_json::from_value(value)?;
            return Ok(problem.parameters);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Like [`Self::from_json`], then [`Self::validate`].
    pub fn from_json_validated(json: &str) -> Result<Self, ParamsError> {
        let params = Self::from_json(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json_pretty(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject parameter sets the engine cannot evaluate meaningfully.
    ///
    /// The engine itself never calls this; it stays total on any input.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { field, value });
            }
        }

        if self.gravity <= 0.0 {
            return Err(ParamsError::NonPositiveGravity(self.gravity));
        }

        let magnitudes = [
            ("initial_height", Some(self.initial_height)),
            ("mass", Some(self.mass)),
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("radius", self.radius),
            ("angular_velocity", self.angular_velocity),
            ("friction_coefficient", self.friction_coefficient),
        ];
        for (field, value) in magnitudes {
            if let Some(value) = value.filter(|v| *v < 0.0) {
                return Err(ParamsError::NegativeField { field, value });
            }
        }

        Ok(())
    }

    /// Set a numeric field by name. Accepts snake_case and camelCase.
    pub fn set_field(&mut self, name: &str, value: Scalar) -> Result<(), ParamsError> {
        match normalize_field_name(name).as_str() {
            "initial_velocity" => self.initial_velocity = value,
            "angle" => self.angle = value,
            "gravity" => self.gravity = value,
            "initial_height" => self.initial_height = value,
            "mass" => self.mass = value,
            "amplitude" => self.amplitude = Some(value),
            "frequency" => self.frequency = Some(value),
            "incline_angle" => self.incline_angle = Some(value),
            "friction_coefficient" => self.friction_coefficient = Some(value),
            "radius" => self.radius = Some(value),
            "angular_velocity" => self.angular_velocity = Some(value),
            _ => return Err(ParamsError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Current value of a numeric field, with fallbacks applied.
    pub fn field(&self, name: &str) -> Result<Scalar, ParamsError> {
        let value = match normalize_field_name(name).as_str() {
            "initial_velocity" => self.initial_velocity,
            "angle" => self.angle,
            "gravity" => self.gravity,
            "initial_height" => self.initial_height,
            "mass" => self.mass,
            "amplitude" => self.amplitude_or_default(),
            "frequency" => self.frequency_or_default(),
            "incline_angle" => self.incline_angle_or_default(),
            "friction_coefficient" => self.friction_coefficient_or_default(),
            "radius" => self.radius_or_default(),
            "angular_velocity" => self.angular_velocity_or_default(),
            _ => return Err(ParamsError::UnknownField(name.to_string())),
        };
        Ok(value)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_initial_velocity(mut self, initial_velocity: Scalar) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    pub fn with_angle(mut self, angle: Scalar) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_gravity(mut self, gravity: Scalar) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_initial_height(mut self, initial_height: Scalar) -> Self {
        self.initial_height = initial_height;
        self
    }

    pub fn with_amplitude(mut self, amplitude: Scalar) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn with_frequency(mut self, frequency: Scalar) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_incline_angle(mut self, incline_angle: Scalar) -> Self {
        self.incline_angle = Some(incline_angle);
        self
    }

    pub fn with_friction_coefficient(mut self, friction_coefficient: Scalar) -> Self {
        self.friction_coefficient = Some(friction_coefficient);
        self
    }

    pub fn with_radius(mut self, radius: Scalar) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: Scalar) -> Self {
        self.angular_velocity = Some(angular_velocity);
        self
    }

    fn numeric_fields(&self) -> impl Iterator<Item = (&'static str, Scalar)> + '_ {
        NUMERIC_FIELDS.into_iter().filter_map(|name| {
            let present = match name {
                "amplitude" => self.amplitude.is_some(),
                "frequency" => self.frequency.is_some(),
                "incline_angle" => self.incline_angle.is_some(),
                "friction_coefficient" => self.friction_coefficient.is_some(),
                "radius" => self.radius.is_some(),
                "angular_velocity" => self.angular_velocity.is_some(),
                _ => true,
            };
            present.then(|| (name, self.field(name).unwrap_or(Scalar::NAN)))
        })
    }
}

fn normalize_field_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len() + 4);
    for c in name.trim().chars() {
        if c.is_ascii_uppercase() {
            if !normalized.is_empty() {
                normalized.push('_');
            }
            normalized.push(c.to_ascii_lowercase());
        } else if c == '-' {
            normalized.push('_');
        } else {
            normalized.push(c);
        }
    }
    normalized
}

/// Envelope returned alongside the parameters by the problem parser
///
/// When deserializing, the envelope `type` fills in for a `parameters`
/// object that has none.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "ParsedProblemWire")]
pub struct ParsedProblem {
    #[serde(rename = "type")]
    pub kind: PhysicsKind,
    pub parameters: PhysicsParams,
    pub description: String,
}

#[derive(Deserialize)]
struct ParsedProblemWire {
    #[serde(rename = "type", default)]
    kind: Option<PhysicsKind>,
    parameters: ParamsPatch,
    #[serde(default)]
    description: String,
}

impl From<ParsedProblemWire> for ParsedProblem {
    fn from(wire: ParsedProblemWire) -> Self {
        let mut parameters = wire.parameters;
        parameters.kind = parameters.kind.or(wire.kind);
        ParsedProblem::new(parameters.into(), wire.description)
    }
}

impl ParsedProblem {
    /// Wrap raw parser output. The parameter kind wins over any separate tag.
    pub fn new(parameters: PhysicsParams, description: impl Into<String>) -> Self {
        Self {
            kind: parameters.kind,
            parameters,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let params = PhysicsParams::default();
        assert_eq!(params.kind, PhysicsKind::VerticalProjectile);
        assert_eq!(params.initial_velocity, 10.0);
        assert_eq!(params.angle, 90.0);
        assert_eq!(params.gravity, 9.8);
        assert_eq!(params.initial_height, 0.0);
        assert_eq!(params.mass, 1.0);
        assert_eq!(params.label, "Ball");
        assert!(params.amplitude.is_none());
        assert!(params.angular_velocity.is_none());
    }

    #[test]
    fn test_fallbacks_apply_when_absent() {
        let params = PhysicsParams::default();
        assert_eq!(params.amplitude_or_default(), 0.5);
        assert_eq!(params.frequency_or_default(), 2.0);
        assert_eq!(params.incline_angle_or_default(), 30.0);
        assert_eq!(params.friction_coefficient_or_default(), 0.0);
        assert_eq!(params.radius_or_default(), 2.0);
        assert_eq!(params.angular_velocity_or_default(), 3.0);

        let params = params.with_radius(5.0).with_frequency(0.0);
        assert_eq!(params.radius_or_default(), 5.0);
        // Present-but-zero is not replaced
        assert_eq!(params.frequency_or_default(), 0.0);
    }

    #[test]
    fn test_from_json_merges_over_defaults() {
        let params =
            PhysicsParams::from_json(r#"{"type": "free_fall", "initialHeight": 45}"#).unwrap();
        assert_eq!(params.kind, PhysicsKind::FreeFall);
        assert_eq!(params.initial_height, 45.0);
        assert_eq!(params.gravity, 9.8);
        assert_eq!(params.label, "Ball");
        assert!(params.frequency.is_none());
    }

    #[test]
    fn test_from_json_full_parser_output() {
        let json = r#"{
            "type": "simple_harmonic_motion",
            "initialVelocity": 0,
            "angle": 0,
            "gravity": 9.8,
            "initialHeight": 0,
            "mass": 1,
            "label": "Spring",
            "amplitude": 0.5,
            "frequency": 2
        }"#;
        let params = PhysicsParams::from_json(json).unwrap();
        assert_eq!(params.kind, PhysicsKind::SimpleHarmonicMotion);
        assert_eq!(params.label, "Spring");
        assert_eq!(params.amplitude, Some(0.5));
        assert_eq!(params.frequency, Some(2.0));
    }

    #[test]
    fn test_from_json_tolerates_nulls_and_unknown_kind() {
        let params =
            PhysicsParams::from_json(r#"{"type": "pendulum", "radius": null}"#).unwrap();
        assert_eq!(params.kind, PhysicsKind::Unrecognized);
        assert!(params.radius.is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = PhysicsParams::from_json(r#"{"gravity": "strong"}"#).unwrap_err();
        assert!(matches!(err, ParamsError::Json(_)));
    }

    #[test]
    fn test_serialization_uses_camel_case_and_skips_absent_options() {
        let params = PhysicsParams::new(PhysicsKind::InclinedPlane).with_incline_angle(25.0);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "inclined_plane");
        assert_eq!(json["inclineAngle"], 25.0);
        assert_eq!(json["initialVelocity"], 10.0);
        assert!(json.get("radius").is_none());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        for kind in PhysicsKind::ALL {
            assert!(PhysicsParams::new(kind).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_zero_gravity() {
        let params = PhysicsParams::default().with_gravity(0.0);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonPositiveGravity(g)) if g == 0.0
        ));
        assert!(PhysicsParams::default().with_gravity(-9.8).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let params = PhysicsParams::default().with_initial_velocity(Scalar::NAN);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonFinite {
                field: "initial_velocity",
                ..
            })
        ));

        let params = PhysicsParams::default().with_radius(Scalar::INFINITY);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonFinite { field: "radius", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_magnitudes() {
        let params = PhysicsParams::default().with_frequency(-1.0);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NegativeField {
                field: "frequency",
                ..
            })
        ));
        assert!(PhysicsParams::default().with_initial_height(-2.0).validate().is_err());
        // Negative launch angles are a legitimate downward throw
        assert!(PhysicsParams::default().with_angle(-30.0).validate().is_ok());
    }

    #[test]
    fn test_set_field_accepts_both_cases() {
        let mut params = PhysicsParams::default();
        params.set_field("initialHeight", 12.0).unwrap();
        params.set_field("angular_velocity", 1.5).unwrap();
        params.set_field("friction-coefficient", 0.2).unwrap();
        assert_eq!(params.initial_height, 12.0);
        assert_eq!(params.angular_velocity, Some(1.5));
        assert_eq!(params.friction_coefficient, Some(0.2));
        assert_eq!(params.field("initialHeight").unwrap(), 12.0);
    }

    #[test]
    fn test_set_field_rejects_unknown_names() {
        let mut params = PhysicsParams::default();
        let err = params.set_field("label", 1.0).unwrap_err();
        assert!(matches!(err, ParamsError::UnknownField(ref name) if name == "label"));
        assert!(err.to_string().contains("initial_velocity"));
    }

    #[test]
    fn test_from_parser_output_accepts_envelope() {
        let json = r#"{
            "type": "rotational_motion",
            "parameters": {"radius": 4, "angularVelocity": 1.5},
            "description": "A ball on a string"
        }"#;
        let params = PhysicsParams::from_parser_output(json).unwrap();
        assert_eq!(params.kind, PhysicsKind::RotationalMotion);
        assert_eq!(params.radius, Some(4.0));

        let bare = PhysicsParams::from_parser_output(r#"{"type": "free_fall"}"#).unwrap();
        assert_eq!(bare.kind, PhysicsKind::FreeFall);
    }

    #[test]
    fn test_from_parser_output_prefers_inner_type() {
        let json = r#"{"type": "free_fall", "parameters": {"type": "inclined_plane"}}"#;
        let params = PhysicsParams::from_parser_output(json).unwrap();
        assert_eq!(params.kind, PhysicsKind::InclinedPlane);
    }

    #[test]
    fn test_parsed_problem_envelope() {
        let params = PhysicsParams::new(PhysicsKind::FreeFall).with_initial_height(45.0);
        let problem = ParsedProblem::new(params, "A stone is dropped from a height of 45 meters.");
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["type"], "free_fall");
        assert_eq!(json["parameters"]["initialHeight"], 45.0);

        let back: ParsedProblem = serde_json::from_value(json).unwrap();
        assert_eq!(back, problem);
    }

    #[test]
    fn test_parsed_problem_takes_envelope_type_when_parameters_have_none() {
        let json = r#"{
            "type": "simple_harmonic_motion",
            "parameters": {"amplitude": 0.3},
            "description": "A spring oscillates"
        }"#;
        let problem: ParsedProblem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.kind, PhysicsKind::SimpleHarmonicMotion);
        assert_eq!(problem.parameters.kind, PhysicsKind::SimpleHarmonicMotion);
        assert_eq!(problem.parameters.amplitude, Some(0.3));

        let inner_wins: ParsedProblem = serde_json::from_str(
            r#"{"type": "free_fall", "parameters": {"type": "inclined_plane"}, "description": ""}"#,
        )
        .unwrap();
        assert_eq!(inner_wins.kind, PhysicsKind::InclinedPlane);
    }

    #[test]
    fn test_nulls_in_universal_fields_take_defaults() {
        let json = r#"{
            "type": null,
            "initialVelocity": 15,
            "angle": null,
            "gravity": null,
            "initialHeight": null,
            "mass": null,
            "label": null,
            "frequency": null
        }"#;
        let params = PhysicsParams::from_json(json).unwrap();
        assert_eq!(params.kind, PhysicsKind::VerticalProjectile);
        assert_eq!(params.initial_velocity, 15.0);
        assert_eq!(params.angle, 90.0);
        assert_eq!(params.gravity, 9.8);
        assert_eq!(params.initial_height, 0.0);
        assert_eq!(params.mass, 1.0);
        assert_eq!(params.label, "Ball");
        assert!(params.frequency.is_none());
        assert!(params.validate().is_ok());
    }
}
