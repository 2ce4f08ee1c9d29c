#![forbid(unsafe_code)]

//! Content dimming derived from the panel height.
//!
//! Dimming starts at `minimum + threshold * range` and reaches full strength
//! at `maximum`. Renderers multiply their dimming colour's alpha by the
//! fraction.

use crate::height::HeightBounds;

/// Default point (as a fraction of the range) at which dimming starts.
pub const DEFAULT_DIMMING_THRESHOLD: f64 = 0.5;

/// Dimming fraction in `[0, 1]` for `height`.
///
/// Degenerate bounds never dim. A threshold of 1.0 dims only at (or above)
/// the maximum.
pub fn dimming_fraction(height: f64, bounds: HeightBounds, threshold: f64) -> f64 {
    if bounds.is_degenerate() || !height.is_finite() {
        return 0.0;
    }
    let threshold = if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DEFAULT_DIMMING_THRESHOLD
    };
    let start = bounds.minimum() + threshold * bounds.range();
    let span = bounds.maximum() - start;
    if span <= 0.0 {
        return if height >= bounds.maximum() { 1.0 } else { 0.0 };
    }
    ((height - start) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> HeightBounds {
        HeightBounds::new(100.0, 500.0)
    }

    #[test]
    fn no_dimming_below_threshold() {
        assert_eq!(dimming_fraction(100.0, bounds(), 0.5), 0.0);
        assert_eq!(dimming_fraction(300.0, bounds(), 0.5), 0.0);
    }

    #[test]
    fn linear_ramp_to_maximum() {
        assert_eq!(dimming_fraction(400.0, bounds(), 0.5), 0.5);
        assert_eq!(dimming_fraction(500.0, bounds(), 0.5), 1.0);
        assert_eq!(dimming_fraction(650.0, bounds(), 0.5), 1.0);
    }

    #[test]
    fn zero_threshold_dims_from_minimum() {
        assert_eq!(dimming_fraction(300.0, bounds(), 0.0), 0.5);
    }

    #[test]
    fn full_threshold_is_step() {
        assert_eq!(dimming_fraction(499.0, bounds(), 1.0), 0.0);
        assert_eq!(dimming_fraction(500.0, bounds(), 1.0), 1.0);
    }

    #[test]
    fn degenerate_bounds_never_dim() {
        let b = HeightBounds::new(200.0, 200.0);
        assert_eq!(dimming_fraction(200.0, b, 0.0), 0.0);
    }
}
