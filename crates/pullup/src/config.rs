#![forbid(unsafe_code)]

//! Controller configuration.
//!
//! Every field has a default and can be set independently through the
//! builder methods, which clamp their input instead of rejecting it.
//!
//! With the `serde` feature, [`PullUpConfig`] can be loaded from any serde
//! format; durations are written as whole milliseconds.

use std::time::Duration;

use crate::dimming::DEFAULT_DIMMING_THRESHOLD;
use crate::layout_mode::LayoutMode;
use crate::snap::{SnapConfig, sanitize_threshold};

/// Default distance kept free above the expanded panel.
pub const DEFAULT_TOP_MARGIN: f64 = 20.0;

/// Default animation duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Default spring damping ratio.
pub const DEFAULT_SPRING_DAMPING: f64 = 0.8;

/// Animation parameters for state changes and drag hand-off.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Duration of an animated transition. Zero disables animation.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub duration: Duration,
    /// Damping ratio of the spring: 1.0 settles without overshoot.
    pub spring_damping: f64,
    /// Initial velocity of programmatic transitions, in total distances per
    /// second (1.0 covers the whole distance in one second).
    pub initial_velocity: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            spring_damping: DEFAULT_SPRING_DAMPING,
            initial_velocity: 0.0,
        }
    }
}

impl AnimationConfig {
    /// Configuration that jumps instead of animating.
    pub fn none() -> Self {
        Self {
            duration: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Set the duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the spring damping ratio. Negative and non-finite values fall
    /// back to the default.
    pub fn spring_damping(mut self, damping: f64) -> Self {
        self.spring_damping = if damping.is_finite() && damping >= 0.0 {
            damping
        } else {
            DEFAULT_SPRING_DAMPING
        };
        self
    }

    /// Set the initial velocity. Non-finite values become zero.
    pub fn initial_velocity(mut self, velocity: f64) -> Self {
        self.initial_velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self
    }

    /// Whether transitions complete immediately.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Configuration of a [`PullUpController`](crate::PullUpController).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PullUpConfig {
    /// How the bottom panel's box follows its height.
    pub layout_mode: LayoutMode,
    /// Snapping at the end of a drag.
    pub snap: SnapConfig,
    /// Space kept free above the expanded panel.
    pub top_margin: f64,
    /// Fraction of the range at which content dimming starts, in `[0, 1]`.
    pub dimming_threshold: f64,
    /// Ignore drags and taps. Programmatic changes still apply.
    pub locked: bool,
    /// Animation parameters.
    pub animation: AnimationConfig,
}

impl Default for PullUpConfig {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::Shift,
            snap: SnapConfig::default(),
            top_margin: DEFAULT_TOP_MARGIN,
            dimming_threshold: DEFAULT_DIMMING_THRESHOLD,
            locked: false,
            animation: AnimationConfig::default(),
        }
    }
}

impl PullUpConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout mode.
    pub fn layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Set whether releases near either end snap to it.
    pub fn snap_to_ends(mut self, enabled: bool) -> Self {
        self.snap.enabled = enabled;
        self
    }

    /// Set the snap threshold, clamped into `(0, 1)`.
    pub fn snap_threshold(mut self, threshold: f64) -> Self {
        self.snap.threshold = sanitize_threshold(threshold);
        self
    }

    /// Set the top margin. Negative and non-finite values become zero.
    pub fn top_margin(mut self, margin: f64) -> Self {
        self.top_margin = if margin.is_finite() {
            margin.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Set the dimming threshold, clamped into `[0, 1]`.
    pub fn dimming_threshold(mut self, threshold: f64) -> Self {
        self.dimming_threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_DIMMING_THRESHOLD
        };
        self
    }

    /// Set whether user interaction is locked.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set the animation parameters.
    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
