#![forbid(unsafe_code)]

//! Host interfaces.
//!
//! The engine pulls sizing information through [`SizingDelegate`] and pushes
//! results through [`PanelObserver`]. Both traits have default method bodies,
//! so a host implements only what it cares about.
//!
//! All calls happen synchronously on the thread driving the controller. A
//! push may arrive in the middle of an animation tick; hosts that mirror
//! platform animations should apply the value immediately.

use pullup_core::geometry::EdgeInsets;

use crate::state::PanelState;

/// Suggested collapsed height when the host does not provide one.
pub const DEFAULT_MINIMUM_HEIGHT: f64 = 44.0;

/// Pull interface: sizing queries answered by the host.
///
/// Every method must return a non-negative finite value. The engine clamps
/// what it receives to keep `minimum <= height <= maximum`, and nothing more.
pub trait SizingDelegate {
    /// Collapsed height of the bottom panel.
    fn minimum_height(&mut self) -> f64 {
        DEFAULT_MINIMUM_HEIGHT
    }

    /// Expanded height of the bottom panel.
    ///
    /// `maximum_available` already accounts for the top margin and the top
    /// layout guide; larger return values are capped to it.
    fn maximum_height(&mut self, maximum_available: f64) -> f64 {
        maximum_available
    }

    /// Resting height the panel should settle at after the user releases it
    /// at `current`. Snapping to the ends is applied to the returned value.
    fn adjusted_target_height(&mut self, current: f64) -> f64 {
        current
    }
}

/// Sizing with every default: [`DEFAULT_MINIMUM_HEIGHT`], the full available
/// height and no target adjustment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSizing;

impl SizingDelegate for DefaultSizing {}

/// Push interface: change notifications delivered to the host.
///
/// Each method fires at most once per discrete event (drag sample, animation
/// tick, programmatic call) and only when the value actually changed.
pub trait PanelObserver {
    /// The panel entered a new state. Also called once during the first
    /// layout pass to prime the host.
    fn state_changed(&mut self, _state: PanelState) {}

    /// The area of the content panel covered by the bottom panel changed.
    fn content_insets_changed(&mut self, _insets: EdgeInsets) {}

    /// The area of the bottom panel that is off-screen changed.
    fn bottom_insets_changed(&mut self, _insets: EdgeInsets) {}

    /// The dimming fraction for the content overlay changed.
    fn dimming_changed(&mut self, _fraction: f64) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PanelObserver for NoopObserver {}

/// Sizing delegate with fixed values, convenient for hosts whose bounds are
/// known up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSizing {
    pub minimum: f64,
    pub maximum: f64,
}

impl FixedSizing {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }
}

impl SizingDelegate for FixedSizing {
    fn minimum_height(&mut self) -> f64 {
        self.minimum
    }

    fn maximum_height(&mut self, _maximum_available: f64) -> f64 {
        self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizing_values() {
        let mut sizing = DefaultSizing;
        assert_eq!(sizing.minimum_height(), DEFAULT_MINIMUM_HEIGHT);
        assert_eq!(sizing.maximum_height(612.0), 612.0);
        assert_eq!(sizing.adjusted_target_height(233.0), 233.0);
    }

    #[test]
    fn fixed_sizing_ignores_available_height() {
        let mut sizing = FixedSizing::new(80.0, 300.0);
        assert_eq!(sizing.minimum_height(), 80.0);
        assert_eq!(sizing.maximum_height(1000.0), 300.0);
        assert_eq!(sizing.adjusted_target_height(150.0), 150.0);
    }
}
