// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: host-agnostic primitives for the pullup panel engine.
//!
//! # Role in pullup
//! `pullup-core` is the vocabulary layer. It owns the value types that cross
//! the boundary between the engine and its host, plus the motion math the
//! engine uses to animate heights.
//!
//! # Primary responsibilities
//! - **EdgeInsets**: per-side margins handed to the content and bottom panels.
//! - **DragEvent**: normalized drag phase / translation / velocity input.
//! - **Animation**: the tick-driven animation trait, the duration-bounded
//!   [`SpringCurve`](animation::SpringCurve) and the height
//!   [`Transition`](animation::Transition).
//! - **Logging**: `tracing` macros that compile to nothing without the
//!   `tracing` feature.
//!
//! # How it fits in the system
//! The engine (`pullup`) consumes [`DragEvent`](gesture::DragEvent) values
//! from the host, drives a [`Transition`](animation::Transition) on every
//! frame tick and reports [`EdgeInsets`](geometry::EdgeInsets) back.

pub mod animation;
pub mod geometry;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
