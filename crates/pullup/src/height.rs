#![forbid(unsafe_code)]

//! Height bounds and the clamped height model.
//!
//! # Invariants
//!
//! 1. `0 <= minimum <= maximum` and both are finite for every
//!    [`HeightBounds`] value.
//! 2. [`clamp`] always returns a value in `[minimum, maximum]`.
//! 3. [`HeightModel::set_height`] stores a clamped value; only
//!    [`HeightModel::set_unclamped`] may leave the bounds.
//!
//! # Failure Modes
//!
//! - A host reporting `maximum < minimum` gets a degenerate single-height
//!   panel (`maximum = minimum`) and a warning in the log.
//! - Negative or non-finite minimums become zero.

use pullup_core::warn;

/// The collapsed (minimum) and expanded (maximum) heights of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightBounds {
    minimum: f64,
    maximum: f64,
}

impl Default for HeightBounds {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 0.0,
        }
    }
}

impl HeightBounds {
    /// Create bounds, repairing invalid input.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        let minimum = if minimum.is_finite() {
            minimum.max(0.0)
        } else {
            0.0
        };
        let maximum = if maximum.is_finite() {
            maximum
        } else {
            minimum
        };
        if maximum < minimum {
            warn!(message = "pullup.bounds_invalid", minimum, maximum);
            return Self {
                minimum,
                maximum: minimum,
            };
        }
        Self { minimum, maximum }
    }

    /// Collapsed height.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Expanded height.
    #[inline]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// `maximum - minimum`.
    #[inline]
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Whether minimum and maximum coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.range() <= 0.0
    }

    /// Whether `height` lies within the bounds.
    #[inline]
    pub fn contains(&self, height: f64) -> bool {
        height >= self.minimum && height <= self.maximum
    }

    /// Clamp `raw` into the bounds. See [`clamp`].
    #[inline]
    pub fn clamp(&self, raw: f64) -> f64 {
        clamp(raw, *self)
    }
}

/// `max(minimum, min(maximum, raw))`. NaN maps to the minimum.
#[inline]
pub fn clamp(raw: f64, bounds: HeightBounds) -> f64 {
    if raw.is_nan() {
        return bounds.minimum;
    }
    raw.min(bounds.maximum).max(bounds.minimum)
}

/// The single mutable height value plus the bounds it was last clamped to.
#[derive(Debug, Clone, Default)]
pub struct HeightModel {
    current: f64,
    bounds: HeightBounds,
}

impl HeightModel {
    /// Create a model resting at `bounds.minimum()`.
    pub fn new(bounds: HeightBounds) -> Self {
        Self {
            current: bounds.minimum(),
            bounds,
        }
    }

    /// Current height.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Bounds used by the last clamped write.
    #[inline]
    pub fn bounds(&self) -> HeightBounds {
        self.bounds
    }

    /// Store `clamp(value, bounds)`. Returns whether the stored height changed.
    pub fn set_height(&mut self, value: f64, bounds: HeightBounds) -> bool {
        self.bounds = bounds;
        let clamped = clamp(value, bounds);
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }

    /// Store `value` without clamping. Returns whether the height changed.
    ///
    /// Non-finite values are ignored.
    pub fn set_unclamped(&mut self, value: f64) -> bool {
        if !value.is_finite() || value == self.current {
            return false;
        }
        self.current = value;
        true
    }

    /// Record `bounds` without touching the current height.
    pub fn set_bounds(&mut self, bounds: HeightBounds) {
        self.bounds = bounds;
    }
}
