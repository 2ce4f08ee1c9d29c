#![forbid(unsafe_code)]

//! A single scalar transition from one value to another over a fixed
//! duration, shaped by a [`SpringCurve`].
//!
//! # Invariants
//!
//! 1. `position()` equals `start()` before the first tick and equals `target()`
//!    exactly once the duration has elapsed.
//! 2. A zero-duration transition is complete on construction.
//! 3. `elapsed()` never exceeds `duration()`.

use std::time::Duration;

use super::{Animation, SpringCurve};

/// Scalar transition driven by [`Animation::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    curve: SpringCurve,
}

impl Transition {
    /// Create a transition from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, curve: SpringCurve) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            curve,
        }
    }

    /// Start value.
    #[inline]
    #[must_use]
    pub fn start(&self) -> f64 {
        self.from
    }

    /// End value.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The easing curve.
    #[inline]
    #[must_use]
    pub fn curve(&self) -> SpringCurve {
        self.curve
    }

    /// Elapsed fraction of the duration in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current value. May overshoot `target()` for underdamped curves.
    #[must_use]
    pub fn position(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.curve.progress(self.fraction())
    }
}

impl Animation for Transition {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        self.fraction() as f32
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
