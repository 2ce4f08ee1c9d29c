#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Everything here is deterministic: the only input is the `Duration` passed
//! to [`Animation::tick`], so the same tick sequence always yields the same
//! positions. Wall-clock handling lives in the caller.

pub mod spring;
pub mod transition;

use std::time::Duration;

pub use spring::SpringCurve;
pub use transition::Transition;

/// A time-driven animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation reached its end.
    fn is_complete(&self) -> bool;

    /// Normalized progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Rewind to the start.
    fn reset(&mut self);
}
