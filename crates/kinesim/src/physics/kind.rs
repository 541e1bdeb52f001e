//! Scenario kinds and their name resolution
//!
//! Each kind is self-describing: it reports its canonical tag, the aliases
//! accepted on the command line, and a human-readable label. Deserialization
//! is lenient (unknown tags become [`PhysicsKind::Unrecognized`]) while
//! [`FromStr`] is strict and reports the available names.

use super::params::ParamsError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PhysicsKind {
    #[default]
    VerticalProjectile,
    HorizontalProjectile,
    FreeFall,
    SimpleHarmonicMotion,
    InclinedPlane,
    RotationalMotion,
    /// A tag outside the closed set. Evaluated with the vertical projectile
    /// law and given the fallback horizon.
    Unrecognized,
}

impl PhysicsKind {
    /// Every recognized kind, in presentation order.
    pub const ALL: [PhysicsKind; 6] = [
        PhysicsKind::VerticalProjectile,
        PhysicsKind::HorizontalProjectile,
        PhysicsKind::FreeFall,
        PhysicsKind::SimpleHarmonicMotion,
        PhysicsKind::InclinedPlane,
        PhysicsKind::RotationalMotion,
    ];

    /// Canonical wire tag.
    pub fn name(self) -> &'static str {
        match self {
            PhysicsKind::VerticalProjectile => "vertical_projectile",
            PhysicsKind::HorizontalProjectile => "horizontal_projectile",
            PhysicsKind::FreeFall => "free_fall",
            PhysicsKind::SimpleHarmonicMotion => "simple_harmonic_motion",
            PhysicsKind::InclinedPlane => "inclined_plane",
            PhysicsKind::RotationalMotion => "rotational_motion",
            PhysicsKind::Unrecognized => "unrecognized",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            PhysicsKind::VerticalProjectile => &["vertical", "throw"],
            PhysicsKind::HorizontalProjectile => &["projectile", "horizontal", "launch"],
            PhysicsKind::FreeFall => &["drop", "fall"],
            PhysicsKind::SimpleHarmonicMotion => &["shm", "spring", "oscillator"],
            PhysicsKind::InclinedPlane => &["incline", "ramp"],
            PhysicsKind::RotationalMotion => &["circular", "rotation"],
            PhysicsKind::Unrecognized => &[],
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PhysicsKind::VerticalProjectile => "Vertical Projectile",
            PhysicsKind::HorizontalProjectile => "Projectile Motion",
            PhysicsKind::FreeFall => "Free Fall",
            PhysicsKind::SimpleHarmonicMotion => "Simple Harmonic Motion",
            PhysicsKind::InclinedPlane => "Inclined Plane",
            PhysicsKind::RotationalMotion => "Rotational Motion",
            PhysicsKind::Unrecognized => "Unrecognized",
        }
    }

    /// Periodic kinds never land; their height is not ground-referenced.
    pub fn is_periodic(self) -> bool {
        matches!(
            self,
            PhysicsKind::SimpleHarmonicMotion | PhysicsKind::RotationalMotion
        )
    }

    /// Lenient lookup by canonical tag only.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == tag)
            .unwrap_or(PhysicsKind::Unrecognized)
    }
}

impl fmt::Display for PhysicsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhysicsKind {
    type Err = ParamsError;

    /// Strict lookup by canonical tag or alias, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == needle || kind.aliases().contains(&needle.as_str()))
            .ok_or_else(|| ParamsError::UnknownKind(s.to_string()))
    }
}

impl Serialize for PhysicsKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PhysicsKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        let kind = PhysicsKind::from_tag(&tag);
        if kind == PhysicsKind::Unrecognized {
            tracing::debug!("Unrecognized scenario kind '{tag}'");
        }
        Ok(kind)
    }
}
