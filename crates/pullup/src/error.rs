#![forbid(unsafe_code)]

//! Error types.

use std::fmt;

use crate::state::PanelState;

/// Errors reported by the fallible controller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullUpError {
    /// Only `Collapsed` and `Expanded` can be requested; the other states
    /// are derived from height and gesture activity.
    UnsettableState(PanelState),
}

impl fmt::Display for PullUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsettableState(state) => write!(
                f,
                "panel state `{state}` cannot be set; only `collapsed` and `expanded` are settable"
            ),
        }
    }
}

impl std::error::Error for PullUpError {}
