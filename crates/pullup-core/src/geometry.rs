#![forbid(unsafe_code)]

//! Geometric primitives.

/// Per-side margins, in points, describing an obscured or hidden area.
///
/// Insets built by [`EdgeInsets::bottom`] are never negative, so the value
/// can be handed straight to a host layout system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// Insets of zero on every side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create new insets with specific values.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets covering only the bottom edge.
    ///
    /// Negative and non-finite values saturate to zero.
    #[inline]
    pub fn bottom(value: f64) -> Self {
        Self {
            bottom: saturate(value),
            ..Self::ZERO
        }
    }

    /// Check if every side is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[inline]
fn saturate(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
