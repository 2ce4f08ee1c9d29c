#![forbid(unsafe_code)]

//! Drag input: the normalized event stream the engine consumes.
//!
//! Hosts own gesture recognition. They forward each phase of a vertical pan
//! as a [`DragEvent`] carrying the cumulative translation since the drag began
//! and the instantaneous velocity, both in screen coordinates (positive is
//! downward, so dragging the panel up produces negative values).
//!
//! # Invariants
//!
//! 1. `Began` always carries zero translation and zero velocity.
//! 2. Non-finite translation or velocity is normalized to zero on
//!    construction.
//! 3. `Ended` and `Cancelled` are terminal: the engine discards its drag
//!    session after either.

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    /// The finger went down and the host recognized a pan.
    Began,
    /// The finger moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The platform aborted the gesture (interruption, focus loss).
    Cancelled,
}

/// A single drag sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEvent {
    /// Gesture phase.
    pub phase: DragPhase,
    /// Cumulative vertical translation since `Began`, in points.
    pub translation: f64,
    /// Vertical velocity in points per second.
    pub velocity: f64,
}

impl DragEvent {
    /// Start of a drag.
    #[must_use]
    pub const fn began() -> Self {
        Self {
            phase: DragPhase::Began,
            translation: 0.0,
            velocity: 0.0,
        }
    }

    /// The drag moved to `translation`.
    #[must_use]
    pub fn changed(translation: f64) -> Self {
        Self::new(DragPhase::Changed, translation, 0.0)
    }

    /// The finger lifted at `translation` while moving at `velocity`.
    #[must_use]
    pub fn ended(translation: f64, velocity: f64) -> Self {
        Self::new(DragPhase::Ended, translation, velocity)
    }

    /// The platform cancelled the drag at `translation`.
    #[must_use]
    pub fn cancelled(translation: f64) -> Self {
        Self::new(DragPhase::Cancelled, translation, 0.0)
    }

    fn new(phase: DragPhase, translation: f64, velocity: f64) -> Self {
        Self {
            phase,
            translation: finite_or_zero(translation),
            velocity: finite_or_zero(velocity),
        }
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
