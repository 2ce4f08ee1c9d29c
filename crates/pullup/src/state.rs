#![forbid(unsafe_code)]

//! Panel lifecycle states and their derivation from height.
//!
//! State is never stored as an independent source of truth: it is a pure
//! function of the current height, the bounds and whether a drag is in
//! progress. [`StateTracker`] only remembers the last value it announced so
//! observers hear about each distinct state once.
//!
//! # Invariants
//!
//! 1. `Dragging` and `Intermediate` are derived only; they are rejected by
//!    [`PanelState::is_settable`].
//! 2. With degenerate bounds (`minimum == maximum`) every height classifies
//!    as `Collapsed`.
//! 3. [`StateTracker::update`] reports a change only for a value different
//!    from the previous announcement.

use crate::height::HeightBounds;

/// Lifecycle state of the bottom panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelState {
    /// Resting at the minimum height.
    Collapsed,
    /// Following the user's finger.
    Dragging,
    /// Resting somewhere between minimum and maximum.
    Intermediate,
    /// Resting at the maximum height.
    Expanded,
}

impl PanelState {
    /// Whether the state may be requested programmatically.
    #[inline]
    pub fn is_settable(self) -> bool {
        matches!(self, Self::Collapsed | Self::Expanded)
    }

    /// Whether this is a resting classification (anything but `Dragging`).
    #[inline]
    pub fn is_resting(self) -> bool {
        !matches!(self, Self::Dragging)
    }

    /// Classify a resting height against bounds.
    ///
    /// Degenerate bounds always report `Collapsed`. Heights outside the
    /// bounds (only reachable through
    /// [`PullUpController::set_height`](crate::PullUpController::set_height))
    /// classify as the bound they passed.
    pub fn classify(height: f64, bounds: HeightBounds) -> Self {
        if bounds.is_degenerate() || height <= bounds.minimum() {
            Self::Collapsed
        } else if height >= bounds.maximum() {
            Self::Expanded
        } else {
            Self::Intermediate
        }
    }

    /// State the user reaches by toggling from this one.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Dragging | Self::Intermediate | Self::Expanded => Self::Collapsed,
        }
    }

    /// Short lowercase name, used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Dragging => "dragging",
            Self::Intermediate => "intermediate",
            Self::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction hint for a drag handle glyph.
///
/// Renderers draw an upward chevron when the panel can be pulled up, a
/// downward one when it can be pushed down and a flat bar otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleState {
    /// Panel is collapsed; pulling up expands it.
    Up,
    /// Panel is moving or resting in between.
    #[default]
    Neutral,
    /// Panel is expanded; pushing down collapses it.
    Down,
}

impl HandleState {
    /// Handle glyph for a panel state.
    pub fn for_panel_state(state: PanelState) -> Self {
        match state {
            PanelState::Collapsed => Self::Up,
            PanelState::Expanded => Self::Down,
            PanelState::Dragging | PanelState::Intermediate => Self::Neutral,
        }
    }
}

impl From<PanelState> for HandleState {
    fn from(state: PanelState) -> Self {
        Self::for_panel_state(state)
    }
}

/// Current state plus the last value announced to observers.
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    current: Option<PanelState>,
    announced: Option<PanelState>,
}

impl StateTracker {
    /// Create a tracker that has not seen any state yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, `None` before the first layout pass.
    #[inline]
    pub fn current(&self) -> Option<PanelState> {
        self.current
    }

    /// Last announced state.
    #[inline]
    pub fn announced(&self) -> Option<PanelState> {
        self.announced
    }

    /// Record `state`. Returns `Some(state)` when it differs from the last
    /// announcement and must be delivered to observers.
    pub fn update(&mut self, state: PanelState) -> Option<PanelState> {
        self.current = Some(state);
        if self.announced == Some(state) {
            return None;
        }
        self.announced = Some(state);
        Some(state)
    }
}
