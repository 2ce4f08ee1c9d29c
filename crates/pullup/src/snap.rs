#![forbid(unsafe_code)]

//! End-of-drag target resolution.
//!
//! Runs once per completed drag: the host may adjust the release height
//! (for example to add an intermediate detent), then the adjusted value is
//! snapped to whichever bound it lies within `threshold * range` of.
//!
//! Host adjustments are not re-validated. A host that already returns the
//! minimum or maximum exactly simply makes the snap step a no-op.

use crate::delegate::SizingDelegate;
use crate::height::{HeightBounds, clamp};

/// Default fraction of the range within which a release snaps to a bound.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.25;

/// Smallest threshold kept by [`SnapConfig::threshold`].
const MIN_THRESHOLD: f64 = 1e-6;

/// Snapping behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Snap to the closest bound when releasing near it.
    pub enabled: bool,
    /// Fraction of `maximum - minimum`. Values outside `(0, 1)` are clamped
    /// when snapping.
    pub threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl SnapConfig {
    /// Snapping disabled.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set whether snapping is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the threshold. Clamped into the open interval `(0, 1)`;
    /// non-finite input keeps the default.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = sanitize_threshold(threshold);
        self
    }
}

pub(crate) fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(MIN_THRESHOLD, 1.0 - MIN_THRESHOLD)
    } else {
        DEFAULT_SNAP_THRESHOLD
    }
}

/// Resting height for an adjusted target.
///
/// Always within `bounds`. Degenerate bounds resolve to the minimum. The
/// threshold is clamped into `(0, 1)` here as well, since the public field
/// and deserialized configs bypass [`SnapConfig::threshold`].
pub fn snap(adjusted: f64, bounds: HeightBounds, config: SnapConfig) -> f64 {
    if bounds.is_degenerate() {
        return bounds.minimum();
    }
    let target = clamp(adjusted, bounds);
    if !config.enabled {
        return target;
    }

    let threshold = sanitize_threshold(config.threshold);
    let range = bounds.range();
    let from_min = (target - bounds.minimum()) / range;
    let from_max = (bounds.maximum() - target) / range;
    if from_min > threshold && from_max > threshold {
        return target;
    }
    // Above 0.5 both zones overlap; the nearer bound wins.
    if from_min <= from_max {
        bounds.minimum()
    } else {
        bounds.maximum()
    }
}

/// Ask the host for an adjusted target, then [`snap`] it.
pub fn resolve_target(
    release_height: f64,
    bounds: HeightBounds,
    config: SnapConfig,
    sizing: &mut dyn SizingDelegate,
) -> f64 {
    let adjusted = sizing.adjusted_target_height(release_height);
    snap(adjusted, bounds, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::DefaultSizing;

    fn bounds() -> HeightBounds {
        HeightBounds::new(100.0, 500.0)
    }

    #[test]
    fn snaps_near_minimum() {
        assert_eq!(snap(140.0, bounds(), SnapConfig::default()), 100.0);
    }

    #[test]
    fn snaps_near_maximum() {
        assert_eq!(snap(480.0, bounds(), SnapConfig::default()), 500.0);
    }

    #[test]
    fn middle_passes_through() {
        assert_eq!(snap(300.0, bounds(), SnapConfig::default()), 300.0);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // 0.25 * 400 = 100 above the minimum.
        assert_eq!(snap(200.0, bounds(), SnapConfig::default()), 100.0);
        assert_eq!(snap(400.0, bounds(), SnapConfig::default()), 500.0);
        assert_eq!(snap(201.0, bounds(), SnapConfig::default()), 201.0);
    }

    #[test]
    fn disabled_only_clamps() {
        let config = SnapConfig::disabled();
        assert_eq!(snap(140.0, bounds(), config), 140.0);
        assert_eq!(snap(480.0, bounds(), config), 480.0);
        assert_eq!(snap(900.0, bounds(), config), 500.0);
        assert_eq!(snap(20.0, bounds(), config), 100.0);
    }

    #[test]
    fn degenerate_bounds_always_minimum() {
        let b = HeightBounds::new(200.0, 200.0);
        for target in [0.0, 200.0, 350.0] {
            assert_eq!(snap(target, b, SnapConfig::default()), 200.0);
            assert_eq!(snap(target, b, SnapConfig::disabled()), 200.0);
        }
    }

    #[test]
    fn threshold_sanitized() {
        assert!(SnapConfig::default().threshold(0.0).threshold > 0.0);
        assert!(SnapConfig::default().threshold(1.0).threshold < 1.0);
        assert_eq!(
            SnapConfig::default().threshold(f64::NAN).threshold,
            DEFAULT_SNAP_THRESHOLD
        );
    }

    #[test]
    fn raw_field_threshold_clamped_at_snap_time() {
        let wide = SnapConfig {
            enabled: true,
            threshold: 2.0,
        };
        // 20 below the maximum: snaps up, not down to the minimum.
        assert_eq!(snap(480.0, bounds(), wide), 500.0);
        assert_eq!(snap(120.0, bounds(), wide), 100.0);

        let negative = SnapConfig {
            enabled: true,
            threshold: -1.0,
        };
        assert_eq!(snap(101.0, bounds(), negative), 101.0);
        assert_eq!(snap(100.0, bounds(), negative), 100.0);

        let nan = SnapConfig {
            enabled: true,
            threshold: f64::NAN,
        };
        assert_eq!(snap(140.0, bounds(), nan), 100.0);
    }

    struct HalfwayDetent {
        halfway: f64,
    }

    impl SizingDelegate for HalfwayDetent {
        fn adjusted_target_height(&mut self, current: f64) -> f64 {
            if (current - self.halfway).abs() < 30.0 {
                self.halfway
            } else {
                current
            }
        }
    }

    #[test]
    fn host_adjustment_applied_before_snapping() {
        let mut host = HalfwayDetent { halfway: 300.0 };
        let config = SnapConfig::default();
        assert_eq!(resolve_target(320.0, bounds(), config, &mut host), 300.0);
        assert_eq!(resolve_target(130.0, bounds(), config, &mut host), 100.0);
    }

    #[test]
    fn default_host_is_identity() {
        let mut host = DefaultSizing;
        assert_eq!(
            resolve_target(260.0, bounds(), SnapConfig::default(), &mut host),
            260.0
        );
    }
}
