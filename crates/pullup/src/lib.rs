#![forbid(unsafe_code)]

//! Draggable bottom-panel engine.
//!
//! A container hosts two panels: a content panel filling the container and a
//! bottom panel overlaying its lower part. The user drags the bottom panel
//! between a collapsed (minimum) and an expanded (maximum) height; the
//! engine tracks that height, snaps it to the ends on release, animates it
//! and tells the host how much of each panel is obscured.
//!
//! The crate knows nothing about any UI toolkit. Hosts feed it
//! [`DragEvent`]s, [`LayoutMetrics`] and frame ticks, answer sizing queries
//! through [`SizingDelegate`] and receive results through [`PanelObserver`].
//!
//! # Modules
//!
//! - [`controller`]: [`PullUpController`], the entry point.
//! - [`height`] and [`layout_mode`]: bounds, clamping and panel geometry.
//! - [`snap`]: resting height after a release.
//! - [`state`]: panel and handle states.
//! - [`animator`]: animated transitions between heights.
//! - [`delegate`]: host interfaces.
//!
//! # Feature Flags
//!
//! - `tracing`: structured log events for state changes, bounds queries and
//!   superseded animations.
//! - `serde`: serialize [`PullUpConfig`] and the state enums.

pub mod animator;
pub mod config;
pub mod controller;
pub mod delegate;
pub mod dimming;
pub mod error;
pub mod height;
pub mod layout_mode;
pub mod session;
pub mod snap;
pub mod state;

pub use config::{AnimationConfig, PullUpConfig};
pub use controller::{LayoutMetrics, PullUpController};
pub use delegate::{DefaultSizing, FixedSizing, NoopObserver, PanelObserver, SizingDelegate};
pub use error::PullUpError;
pub use height::HeightBounds;
pub use layout_mode::{LayoutMode, PanelLayout};
pub use snap::SnapConfig;
pub use state::{HandleState, PanelState};

pub use pullup_core::geometry::EdgeInsets;
pub use pullup_core::gesture::{DragEvent, DragPhase};
