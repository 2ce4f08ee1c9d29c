#![forbid(unsafe_code)]

//! The active height driver.
//!
//! Height changes come from exactly one source at a time: a drag session or
//! an animation. [`Driver`] holds whichever is active, so the two can never
//! be populated together, and replacing the value is how one supersedes the
//! other.

use crate::animator::ActiveAnimation;
use crate::layout_mode::LayoutMode;

/// State captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Height when the finger went down.
    pub start_height: f64,
    /// Layout mode in effect for the whole drag.
    pub layout_mode: LayoutMode,
}

impl GestureSession {
    pub fn new(start_height: f64, layout_mode: LayoutMode) -> Self {
        Self {
            start_height,
            layout_mode,
        }
    }

    /// Raw height requested by a drag sample at `translation`.
    #[inline]
    pub fn raw_height(&self, translation: f64) -> f64 {
        self.layout_mode.drag_height(self.start_height, translation)
    }
}

/// Who is currently moving the panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Driver {
    /// Nothing; the panel is at rest.
    #[default]
    Idle,
    /// The user's finger.
    Gesture(GestureSession),
    /// An animation.
    Animation(ActiveAnimation),
}

impl Driver {
    #[inline]
    pub fn is_gesture(&self) -> bool {
        matches!(self, Self::Gesture(_))
    }

    #[inline]
    pub fn is_animation(&self) -> bool {
        matches!(self, Self::Animation(_))
    }

    /// The active drag session, if any.
    pub fn session(&self) -> Option<GestureSession> {
        match self {
            Self::Gesture(session) => Some(*session),
            Self::Idle | Self::Animation(_) => None,
        }
    }

    /// Short lowercase name, used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Gesture(_) => "gesture",
            Self::Animation(_) => "animation",
        }
    }
}
