#![forbid(unsafe_code)]

//! Layout modes: how a height becomes a panel box and edge insets.
//!
//! The bottom panel has two heights that may differ:
//!
//! - the **box height**, the size of the panel's own frame, and
//! - the **visible height**, how much of the container it covers.
//!
//! In [`LayoutMode::Shift`] the box is always `maximum` tall and the panel
//! slides down to show less of it; content further down the panel is
//! off-screen and reported through the bottom-panel insets. A drag past
//! `maximum` keeps the box at `maximum` but reports the extra distance as
//! visible overflow, so content can follow the finger.
//!
//! In [`LayoutMode::Resize`] the box follows the height and nothing is ever
//! hidden.
//!
//! # Invariants
//!
//! 1. `PanelLayout::height` is always clamped to the bounds.
//! 2. `content_insets.bottom == visible_height` and all other content sides
//!    are zero.
//! 3. Resize mode never reports overflow or bottom-panel insets.

use pullup_core::geometry::EdgeInsets;

use crate::height::{HeightBounds, clamp};

/// How the bottom panel's frame reacts to height changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Shift the panel; its box stays at the maximum height.
    #[default]
    Shift,
    /// Resize the panel to the current height.
    Resize,
}

/// Geometry derived from a single height value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelLayout {
    /// Clamped model height.
    pub height: f64,
    /// Height of the bottom panel's frame.
    pub box_height: f64,
    /// Height of the container area covered by the bottom panel.
    pub visible_height: f64,
    /// Area of the content panel obscured by the bottom panel.
    pub content_insets: EdgeInsets,
    /// Area of the bottom panel currently off-screen.
    pub bottom_insets: EdgeInsets,
}

impl PanelLayout {
    /// Distance the visible region extends past the clamped height.
    #[inline]
    pub fn overflow(&self) -> f64 {
        self.visible_height - self.height
    }

    fn from_parts(height: f64, box_height: f64, visible_height: f64) -> Self {
        Self {
            height,
            box_height,
            visible_height,
            content_insets: EdgeInsets::bottom(visible_height),
            bottom_insets: EdgeInsets::bottom(box_height - visible_height),
        }
    }
}

impl LayoutMode {
    /// Raw height a drag sample asks for, before clamping.
    ///
    /// Both modes follow the finger 1:1; they differ only in [`resolve`].
    ///
    /// [`resolve`]: LayoutMode::resolve
    #[inline]
    pub fn drag_height(self, start_height: f64, translation: f64) -> f64 {
        start_height - translation
    }

    /// Derive the layout for a raw (possibly out-of-bounds) height.
    pub fn resolve(self, raw: f64, bounds: HeightBounds) -> PanelLayout {
        let height = clamp(raw, bounds);
        match self {
            Self::Shift => {
                let overflow = if raw > bounds.maximum() && raw.is_finite() {
                    raw - bounds.maximum()
                } else {
                    0.0
                };
                PanelLayout::from_parts(height, bounds.maximum(), height + overflow)
            }
            Self::Resize => PanelLayout::from_parts(height, height, height),
        }
    }

    /// Derive the layout for a trusted height that skips clamping.
    ///
    /// Used for programmatic heights that the caller placed outside the
    /// bounds on purpose.
    pub fn resolve_unclamped(self, height: f64, bounds: HeightBounds) -> PanelLayout {
        match self {
            Self::Shift => PanelLayout::from_parts(height, bounds.maximum().max(height), height),
            Self::Resize => PanelLayout::from_parts(height, height, height),
        }
    }

    /// Short lowercase name, used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Resize => "resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> HeightBounds {
        HeightBounds::new(80.0, 300.0)
    }

    #[test]
    fn drag_up_grows_height() {
        assert_eq!(LayoutMode::Shift.drag_height(100.0, -50.0), 150.0);
        assert_eq!(LayoutMode::Resize.drag_height(100.0, 30.0), 70.0);
    }

    #[test]
    fn shift_overflow_reported_in_content_insets() {
        let layout = LayoutMode::Shift.resolve(350.0, bounds());
        assert_eq!(layout.height, 300.0);
        assert_eq!(layout.box_height, 300.0);
        assert_eq!(layout.visible_height, 350.0);
        assert_eq!(layout.overflow(), 50.0);
        assert_eq!(layout.content_insets, EdgeInsets::bottom(350.0));
        assert!(layout.bottom_insets.is_zero());
    }

    #[test]
    fn resize_clamps_without_overflow() {
        let layout = LayoutMode::Resize.resolve(350.0, bounds());
        assert_eq!(layout.height, 300.0);
        assert_eq!(layout.box_height, 300.0);
        assert_eq!(layout.visible_height, 300.0);
        assert_eq!(layout.overflow(), 0.0);
        assert_eq!(layout.content_insets, EdgeInsets::bottom(300.0));
        assert!(layout.bottom_insets.is_zero());
    }

    #[test]
    fn shift_hides_lower_part_of_box() {
        let layout = LayoutMode::Shift.resolve(120.0, bounds());
        assert_eq!(layout.box_height, 300.0);
        assert_eq!(layout.visible_height, 120.0);
        assert_eq!(layout.bottom_insets, EdgeInsets::bottom(180.0));
        assert_eq!(layout.content_insets, EdgeInsets::bottom(120.0));
    }

    #[test]
    fn resize_never_hides() {
        let layout = LayoutMode::Resize.resolve(120.0, bounds());
        assert_eq!(layout.box_height, 120.0);
        assert!(layout.bottom_insets.is_zero());
    }

    #[test]
    fn below_minimum_clamps_in_both_modes() {
        for mode in [LayoutMode::Shift, LayoutMode::Resize] {
            let layout = mode.resolve(10.0, bounds());
            assert_eq!(layout.height, 80.0, "{mode:?}");
            assert_eq!(layout.visible_height, 80.0, "{mode:?}");
        }
    }

    #[test]
    fn unclamped_heights_pass_through() {
        let layout = LayoutMode::Shift.resolve_unclamped(420.0, bounds());
        assert_eq!(layout.height, 420.0);
        assert_eq!(layout.box_height, 420.0);
        assert!(layout.bottom_insets.is_zero());

        let layout = LayoutMode::Resize.resolve_unclamped(40.0, bounds());
        assert_eq!(layout.height, 40.0);
        assert_eq!(layout.content_insets, EdgeInsets::bottom(40.0));
    }

    #[test]
    fn default_mode_is_shift() {
        assert_eq!(LayoutMode::default(), LayoutMode::Shift);
    }
}
