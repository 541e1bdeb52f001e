//! Scalar type and small numeric helpers shared by the motion laws

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

pub const PI: Scalar = std::f64::consts::PI;
pub const TAU: Scalar = std::f64::consts::TAU;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: Scalar = PI / 180.0;

#[inline]
pub fn to_radians(degrees: Scalar) -> Scalar {
    degrees * DEG_TO_RAD
}

/// Positive time at which a body covers `distance` while starting at speed
/// `speed` and accelerating at `acceleration` along the same line.
///
/// Solves `½·a·t² + v·t − d = 0` for the larger root. The discriminant is
/// clamped at zero, so an unreachable distance yields the time of closest
/// approach rather than NaN. `acceleration` must be non-zero.
pub fn time_to_cover(distance: Scalar, speed: Scalar, acceleration: Scalar) -> Scalar {
    let discriminant = speed * speed + 2.0 * acceleration * distance;
    (-speed + libm::sqrt(discriminant.max(0.0))) / acceleration
}

/// Time for a body released from rest to fall `height` under `gravity`.
#[inline]
pub fn fall_time_from_rest(height: Scalar, gravity: Scalar) -> Scalar {
    libm::sqrt(2.0 * height.max(0.0) / gravity)
}
