use super::math::Scalar;
use serde::{Deserialize, Serialize};

/// Instantaneous kinematic state of a scenario at `time`
///
/// `y` is height. For ground-referenced kinds it never goes below zero.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationFrame {
    pub time: Scalar,
    pub x: Scalar,
    pub y: Scalar,
    pub vx: Scalar,
    pub vy: Scalar,
}

impl SimulationFrame {
    pub const fn new(time: Scalar, x: Scalar, y: Scalar, vx: Scalar, vy: Scalar) -> Self {
        Self { time, x, y, vx, vy }
    }

    /// Magnitude of the velocity vector
    pub fn speed(&self) -> Scalar {
        libm::hypot(self.vx, self.vy)
    }

    /// Distance from the origin
    pub fn distance_from_origin(&self) -> Scalar {
        libm::hypot(self.x, self.y)
    }
}
