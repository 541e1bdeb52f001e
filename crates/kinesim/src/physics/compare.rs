//! What-if comparison of two parameter sets

use super::evaluator::compute;
use super::frame::SimulationFrame;
use super::horizon::horizon;
use super::kind::PhysicsKind;
use super::math::Scalar;
use super::params::PhysicsParams;
use super::trajectory::{TrajectoryOptions, trajectory_with};
use serde::{Deserialize, Serialize};

/// Axis extent needed to draw a set of frames: the widest |x| and the
/// highest y
///
/// Both extents are at least one metre so a stationary scenario still gets
/// a usable scale.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryBounds {
    pub max_abs_x: Scalar,
    pub max_y: Scalar,
}

impl Default for TrajectoryBounds {
    fn default() -> Self {
        Self {
            max_abs_x: 1.0,
            max_y: 1.0,
        }
    }
}

impl TrajectoryBounds {
    pub fn of<'a>(frames: impl IntoIterator<Item = &'a SimulationFrame>) -> Self {
        frames.into_iter().fold(Self::default(), |bounds, frame| {
            bounds.include(frame)
        })
    }

    pub fn include(self, frame: &SimulationFrame) -> Self {
        Self {
            max_abs_x: self.max_abs_x.max(frame.x.abs()),
            max_y: self.max_y.max(frame.y),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            max_abs_x: self.max_abs_x.max(other.max_abs_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Headline numbers for one trajectory
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScenarioSummary {
    pub label: String,
    pub kind: PhysicsKind,
    pub horizon: Scalar,
    pub frames: usize,
    /// Time of the last generated frame
    pub end_time: Scalar,
    pub bounds: TrajectoryBounds,
}

impl ScenarioSummary {
    pub fn of(params: &PhysicsParams, frames: &[SimulationFrame]) -> Self {
        Self {
            label: params.label.clone(),
            kind: params.kind,
            horizon: horizon(params),
            frames: frames.len(),
            end_time: frames.last().map_or(0.0, |frame| frame.time),
            bounds: TrajectoryBounds::of(frames),
        }
    }
}

/// A primary scenario overlaid with an edited copy
#[derive(Clone, Debug)]
pub struct Comparison {
    pub primary: PhysicsParams,
    pub other: PhysicsParams,
    pub primary_frames: Vec<SimulationFrame>,
    pub other_frames: Vec<SimulationFrame>,
    pub bounds: TrajectoryBounds,
}

impl Comparison {
    /// Both trajectories generated with the same `options`
    pub fn new(primary: PhysicsParams, other: PhysicsParams, options: &TrajectoryOptions) -> Self {
        let primary_frames = trajectory_with(&primary, options);
        let other_frames = trajectory_with(&other, options);
        let bounds = TrajectoryBounds::of(&primary_frames)
            .union(TrajectoryBounds::of(&other_frames));

        tracing::debug!(
            "Comparing {} ({} frames) against {} ({} frames)",
            primary.kind,
            primary_frames.len(),
            other.kind,
            other_frames.len()
        );

        Self {
            primary,
            other,
            primary_frames,
            other_frames,
            bounds,
        }
    }

    /// Both scenarios sampled at the same clock time
    pub fn frames_at(&self, t: Scalar) -> (SimulationFrame, SimulationFrame) {
        (compute(&self.primary, t), compute(&self.other, t))
    }

    pub fn summaries(&self) -> (ScenarioSummary, ScenarioSummary) {
        (
            ScenarioSummary::of(&self.primary, &self.primary_frames),
            ScenarioSummary::of(&self.other, &self.other_frames),
        )
    }

    /// Longer of the two horizons
    pub fn horizon(&self) -> Scalar {
        horizon(&self.primary).max(horizon(&self.other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_have_unit_floor() {
        let frames = [SimulationFrame::new(0.0, 0.2, 0.1, 0.0, 0.0)];
        assert_eq!(TrajectoryBounds::of(&frames), TrajectoryBounds::default());
        assert_eq!(TrajectoryBounds::of(&[]), TrajectoryBounds::default());
    }

    #[test]
    fn test_bounds_use_absolute_x() {
        let frames = [
            SimulationFrame::new(0.0, -4.0, 2.0, 0.0, 0.0),
            SimulationFrame::new(0.1, 3.0, 6.5, 0.0, 0.0),
        ];
        let bounds = TrajectoryBounds::of(&frames);
        assert_eq!(bounds.max_abs_x, 4.0);
        assert_eq!(bounds.max_y, 6.5);
    }

    #[test]
    fn test_comparison_bounds_cover_both() {
        let low = PhysicsParams::new(PhysicsKind::VerticalProjectile).with_initial_velocity(5.0);
        let high = low.clone().with_initial_velocity(15.0);
        let comparison = Comparison::new(low, high, &TrajectoryOptions::default());

        let high_only = TrajectoryBounds::of(&comparison.other_frames);
        assert_eq!(comparison.bounds.max_y, high_only.max_y);
        assert!(comparison.other_frames.len() > comparison.primary_frames.len());
        assert!(comparison.horizon() > horizon(&comparison.primary));

        let (low, high) = comparison.summaries();
        assert!(high.end_time > low.end_time);
        assert_eq!(high.frames, comparison.other_frames.len());
    }

    #[test]
    fn test_frames_at_shares_the_clock() {
        let primary = PhysicsParams::new(PhysicsKind::FreeFall).with_initial_height(30.0);
        let other = primary.clone().with_gravity(1.6);
        let comparison = Comparison::new(primary, other, &TrajectoryOptions::default());

        let (a, b) = comparison.frames_at(1.0);
        assert_eq!(a.time, b.time);
        assert!(b.y > a.y);
    }

    #[test]
    fn test_options_apply_to_both_scenarios() {
        let primary = PhysicsParams::new(PhysicsKind::FreeFall).with_initial_height(45.0);
        let other = primary.clone().with_gravity(1.6);
        let options = TrajectoryOptions {
            step: 0.1,
            max_frames: 10,
            ..TrajectoryOptions::default()
        };
        let comparison = Comparison::new(primary, other, &options);

        assert_eq!(comparison.primary_frames.len(), 10);
        assert_eq!(comparison.other_frames.len(), 10);
        assert_eq!(comparison.primary_frames[1].time, 0.1);
        assert_eq!(
            comparison.other_frames.last().unwrap().time,
            horizon(&comparison.other)
        );
    }
}
