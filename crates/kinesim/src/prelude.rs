//! kinesim prelude module
//!
//! Re-exports the types and functions most callers need to sample a
//! scenario.

pub use crate::config::{EngineConfig, OutputConfig, OutputFormat, SimulationConfig};
pub use crate::controls::{ControlSpec, controls_for};
pub use crate::physics::laws::MotionLaw;
pub use crate::physics::{
    ChartChannel, ChartChannels, ChartPoint, Comparison, ParamsError, ParsedProblem, PhysicsKind,
    PhysicsParams, Scalar, SimulationFrame, TrajectoryBounds, TrajectoryOptions, chart_series,
    compute, frames, horizon, trajectory, trajectory_with,
};
pub use crate::playback::{PlaybackClock, PlaybackMode};
pub use crate::samples::{SAMPLE_PROBLEMS, SampleProblem};
