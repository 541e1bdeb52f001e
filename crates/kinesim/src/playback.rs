//! Animation clock for driving the engine in real time
//!
//! The engine never advances time on its own. A caller owns a
//! [`PlaybackClock`], feeds it elapsed wall-clock seconds, and samples
//! [`compute`](crate::physics::compute) at [`PlaybackClock::time`].

use crate::physics::{PhysicsKind, PhysicsParams, Scalar, horizon};

/// What happens when the clock reaches the horizon
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Freeze at the horizon
    #[default]
    Clamp,
    /// Wrap back to the start
    Loop,
}

impl PlaybackMode {
    /// Periodic kinds loop; everything else stops where it lands.
    pub fn for_kind(kind: PhysicsKind) -> Self {
        if kind.is_periodic() {
            PlaybackMode::Loop
        } else {
            PlaybackMode::Clamp
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackClock {
    time: Scalar,
    horizon: Scalar,
    mode: PlaybackMode,
    playing: bool,
}

impl PlaybackClock {
    pub fn new(horizon: Scalar, mode: PlaybackMode) -> Self {
        Self {
            time: 0.0,
            horizon,
            mode,
            playing: true,
        }
    }

    /// Clock sized to the scenario's horizon with the mode its kind calls for
    pub fn for_params(params: &PhysicsParams) -> Self {
        Self::new(horizon(params), PlaybackMode::for_kind(params.kind))
    }

    /// Accumulate `dt` seconds of real time. Ignored while paused or when
    /// `dt` is negative or not finite.
    pub fn advance(&mut self, dt: Scalar) -> Scalar {
        if !self.playing || !dt.is_finite() || dt <= 0.0 {
            return self.time;
        }

        let next = self.time + dt;
        self.time = match self.mode {
            PlaybackMode::Clamp => next.min(self.horizon),
            PlaybackMode::Loop if self.horizon > 0.0 => next.rem_euclid(self.horizon),
            PlaybackMode::Loop => 0.0,
        };
        self.time
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn time(&self) -> Scalar {
        self.time
    }

    pub fn horizon(&self) -> Scalar {
        self.horizon
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// A clamped clock that has reached its horizon. Looping clocks never
    /// complete.
    pub fn is_complete(&self) -> bool {
        self.mode == PlaybackMode::Clamp && self.time >= self.horizon
    }
}
