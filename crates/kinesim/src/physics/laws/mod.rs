//! Closed-form motion laws, one per scenario kind
//!
//! Every law is a stateless zero-sized type. Dispatch happens through a
//! single `match` on [`PhysicsKind`](super::PhysicsKind) in
//! [`compute`](super::compute) and [`horizon`](super::horizon), so adding a
//! kind is a compile error until both are handled.
//!
//! Angles in parameters are degrees and are converted internally.

use super::frame::SimulationFrame;
use super::math::Scalar;
use super::params::PhysicsParams;

pub mod free_fall;
pub mod harmonic;
pub mod horizontal_projectile;
pub mod inclined_plane;
pub mod rotational;
pub mod vertical_projectile;

pub use free_fall::FreeFall;
pub use harmonic::SimpleHarmonicMotion;
pub use horizontal_projectile::HorizontalProjectile;
pub use inclined_plane::InclinedPlane;
pub use rotational::RotationalMotion;
pub use vertical_projectile::VerticalProjectile;

/// A kinematics law for one scenario kind
pub trait MotionLaw {
    /// State at time `t`. Total for any `t`, including negative values and
    /// times past the horizon.
    fn evaluate(&self, params: &PhysicsParams, t: Scalar) -> SimulationFrame;

    /// Natural duration of the scenario in seconds
    fn horizon(&self, params: &PhysicsParams) -> Scalar;
}
