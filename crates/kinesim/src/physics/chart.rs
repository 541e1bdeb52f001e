//! Downsampled time series for position and velocity charts

use super::frame::SimulationFrame;
use super::kind::PhysicsKind;
use super::math::Scalar;
use serde::{Deserialize, Serialize};

/// Default downsampling factor for chart series
pub const DEFAULT_CHART_STRIDE: usize = 3;

/// One sample of a chart series
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartPoint {
    pub t: Scalar,
    pub x: Scalar,
    pub y: Scalar,
    pub vx: Scalar,
    pub vy: Scalar,
    pub speed: Scalar,
}

impl From<&SimulationFrame> for ChartPoint {
    fn from(frame: &SimulationFrame) -> Self {
        Self {
            t: frame.time,
            x: frame.x,
            y: frame.y,
            vx: frame.vx,
            vy: frame.vy,
            speed: frame.speed(),
        }
    }
}

/// Keep every `stride`-th frame, starting with the first. A zero stride is
/// treated as one.
pub fn chart_series(frames: &[SimulationFrame], stride: usize) -> Vec<ChartPoint> {
    frames
        .iter()
        .step_by(stride.max(1))
        .map(ChartPoint::from)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartChannel {
    X,
    Y,
    Vx,
    Vy,
    Speed,
}

impl ChartChannel {
    pub fn key(self) -> &'static str {
        match self {
            ChartChannel::X => "x",
            ChartChannel::Y => "y",
            ChartChannel::Vx => "vx",
            ChartChannel::Vy => "vy",
            ChartChannel::Speed => "speed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartChannel::X => "X (m)",
            ChartChannel::Y => "Height (m)",
            ChartChannel::Vx => "Vx (m/s)",
            ChartChannel::Vy => "Vy (m/s)",
            ChartChannel::Speed => "Speed (m/s)",
        }
    }

    pub fn value(self, point: &ChartPoint) -> Scalar {
        match self {
            ChartChannel::X => point.x,
            ChartChannel::Y => point.y,
            ChartChannel::Vx => point.vx,
            ChartChannel::Vy => point.vy,
            ChartChannel::Speed => point.speed,
        }
    }
}

/// Channels plotted on the position and velocity charts for a kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartChannels {
    pub position: &'static [ChartChannel],
    pub velocity: &'static [ChartChannel],
}

impl ChartChannels {
    pub fn for_kind(kind: PhysicsKind) -> Self {
        match kind {
            PhysicsKind::SimpleHarmonicMotion => Self {
                position: &[ChartChannel::X],
                velocity: &[ChartChannel::Vx],
            },
            PhysicsKind::HorizontalProjectile => Self {
                position: &[ChartChannel::Y, ChartChannel::X],
                velocity: &[ChartChannel::Vy, ChartChannel::Vx, ChartChannel::Speed],
            },
            _ => Self {
                position: &[ChartChannel::Y],
                velocity: &[ChartChannel::Vy],
            },
        }
    }

    /// Position channels followed by velocity channels, without duplicates
    pub fn all(&self) -> Vec<ChartChannel> {
        let mut channels: Vec<ChartChannel> = Vec::new();
        for channel in self.position.iter().chain(self.velocity) {
            if !channels.contains(channel) {
                channels.push(*channel);
            }
        }
        channels
    }
}
