//! kinesim library
//!
//! Closed-form kinematics for a fixed set of classical-mechanics scenarios,
//! plus the configuration, output and playback pieces the command line
//! tool is built from.

pub mod cli;
pub mod config;
pub mod controls;
pub mod output;
pub mod physics;
pub mod playback;
pub mod prelude;
pub mod samples;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use physics::{
    PhysicsKind, PhysicsParams, Scalar, SimulationFrame, compute, horizon, trajectory,
};
pub use playback::{PlaybackClock, PlaybackMode};
