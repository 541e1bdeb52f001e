//! Discretized trajectories
//!
//! A trajectory samples [`compute`] from t = 0 up to the [`horizon`] at a
//! fixed step, finishing with a frame at exactly the horizon when the last
//! step falls short of it. Landing kinds stop at the first grounded frame
//! after [`LANDING_GRACE`]; periodic kinds always run the full span.
//!
//! Frame count is unbounded unless [`TrajectoryOptions::max_frames`] sets a
//! cap. A capped sequence skips ahead and still ends at the horizon.

use super::evaluator::compute;
use super::frame::SimulationFrame;
use super::horizon::horizon;
use super::math::Scalar;
use super::params::PhysicsParams;

/// Default time step between frames in seconds
pub const DEFAULT_STEP: Scalar = 0.02;

/// Frames at or before this time never count as a landing, so a body
/// starting on the ground is not stopped at t = 0
pub const LANDING_GRACE: Scalar = 0.01;

/// Tolerance used when comparing step multiples against the horizon
const TIME_EPSILON: Scalar = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryOptions {
    pub step: Scalar,
    /// At least one frame is always produced, and a capped run's last frame
    /// is the closing frame at the horizon
    pub max_frames: usize,
    pub landing_grace: Scalar,
}

impl Default for TrajectoryOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_frames: usize::MAX,
            landing_grace: LANDING_GRACE,
        }
    }
}

impl TrajectoryOptions {
    pub fn with_step(step: Scalar) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }
}

/// Lazy frame sequence for one parameter set
///
/// A clone resumes from the same position. Call [`frames`] again for a
/// fresh pass from t = 0.
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    params: &'a PhysicsParams,
    step: Scalar,
    horizon: Scalar,
    /// Index of the last whole step inside the horizon
    last_step: u64,
    /// Whether a closing frame at exactly the horizon follows the last step
    closing_frame: bool,
    index: u64,
    emitted: usize,
    max_frames: usize,
    landing_grace: Scalar,
    finished: bool,
}

impl<'a> Frames<'a> {
    fn new(params: &'a PhysicsParams, options: &TrajectoryOptions) -> Self {
        let step = if options.step.is_finite() && options.step > 0.0 {
            options.step
        } else {
            tracing::warn!(
                "Invalid trajectory step {}, using {DEFAULT_STEP}",
                options.step
            );
            DEFAULT_STEP
        };

        let horizon = horizon(params);
        // NaN and negative horizons collapse to the single frame at t = 0
        let last_step = libm::floor(horizon / step + TIME_EPSILON).max(0.0) as u64;
        let closing_frame = horizon - last_step as Scalar * step > TIME_EPSILON;

        Self {
            params,
            step,
            horizon,
            last_step,
            closing_frame,
            index: 0,
            emitted: 0,
            max_frames: options.max_frames.max(1),
            landing_grace: options.landing_grace,
            finished: false,
        }
    }

    /// Horizon this sequence runs to
    pub fn horizon(&self) -> Scalar {
        self.horizon
    }

    /// Effective step after validation
    pub fn step(&self) -> Scalar {
        self.step
    }

    /// Index of the final frame when no landing cuts the run short
    fn final_index(&self) -> u64 {
        self.last_step + u64::from(self.closing_frame)
    }

    fn time_at(&self, index: u64) -> Option<Scalar> {
        if index <= self.last_step {
            Some(index as Scalar * self.step)
        } else if index == self.last_step + 1 && self.closing_frame {
            Some(self.horizon)
        } else {
            None
        }
    }
}

impl Iterator for Frames<'_> {
    type Item = SimulationFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(mut t) = self.time_at(self.index) else {
            self.finished = true;
            return None;
        };

        if self.emitted + 1 >= self.max_frames && self.index < self.final_index() {
            tracing::warn!(
                "Trajectory for {} capped at {} frames, skipping from t = {t:.3} to {:.3}",
                self.params.kind,
                self.max_frames,
                self.horizon
            );
            t = self.horizon;
            self.index = self.final_index();
            self.finished = true;
        }

        let frame = compute(self.params, t);
        self.index += 1;
        self.emitted += 1;

        if !self.params.kind.is_periodic() && frame.y <= 0.0 && t > self.landing_grace {
            self.finished = true;
        }

        Some(frame)
    }
}

/// Lazy frames with the default step.
pub fn frames(params: &PhysicsParams) -> Frames<'_> {
    Frames::new(params, &TrajectoryOptions::default())
}

pub fn frames_with<'a>(params: &'a PhysicsParams, options: &TrajectoryOptions) -> Frames<'a> {
    Frames::new(params, options)
}

/// Materialized trajectory at `step` seconds per frame.
///
/// A non-positive or non-finite `step` falls back to [`DEFAULT_STEP`].
pub fn trajectory(params: &PhysicsParams, step: Scalar) -> Vec<SimulationFrame> {
    trajectory_with(params, &TrajectoryOptions::with_step(step))
}

pub fn trajectory_with(params: &PhysicsParams, options: &TrajectoryOptions) -> Vec<SimulationFrame> {
    frames_with(params, options).collect()
}
