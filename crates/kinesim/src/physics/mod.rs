//! Kinematics engine
//!
//! Everything here is a pure function of a [`PhysicsParams`] and a time.
//! Nothing holds state between calls.

pub mod chart;
pub mod compare;
pub mod evaluator;
pub mod frame;
pub mod horizon;
pub mod kind;
pub mod laws;
pub mod math;
pub mod params;
pub mod trajectory;

pub use chart::{ChartChannel, ChartChannels, ChartPoint, DEFAULT_CHART_STRIDE, chart_series};
pub use compare::{Comparison, ScenarioSummary, TrajectoryBounds};
pub use evaluator::compute;
pub use frame::SimulationFrame;
pub use horizon::{FALLBACK_HORIZON, horizon};
pub use kind::PhysicsKind;
pub use math::Scalar;
pub use params::{ParamsError, ParsedProblem, PhysicsParams};
pub use trajectory::{
    DEFAULT_STEP, Frames, TrajectoryOptions, frames, frames_with, trajectory, trajectory_with,
};
