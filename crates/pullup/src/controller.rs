#![forbid(unsafe_code)]

//! The pull-up controller.
//!
//! [`PullUpController`] owns the panel height and turns drag events,
//! animation ticks and programmatic requests into height changes, panel
//! states and edge insets.
//!
//! # Event flow
//!
//! ```text
//! DragEvent ─► GestureSession ─► LayoutMode::resolve ─► HeightModel
//!                                                          │
//!   release ─► SizingDelegate::adjusted_target_height ─► snap
//!                                                          │
//!                   AnimationController ─► tick ─► HeightModel ─► PanelObserver
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use pullup::{LayoutMetrics, PanelState, PullUpConfig, PullUpController};
//! use pullup_core::gesture::DragEvent;
//!
//! let mut panel = PullUpController::with_delegates(PullUpConfig::default(), sizing, observer);
//! panel.layout(LayoutMetrics::new(800.0, 44.0)); // primes the observer
//!
//! panel.handle_drag(DragEvent::began());
//! panel.handle_drag(DragEvent::changed(-120.0));
//! panel.handle_drag(DragEvent::ended(-150.0, -900.0));
//!
//! while panel.tick(Duration::from_millis(16)) {}
//! panel.set_state(PanelState::Collapsed, true);
//! ```
//!
//! # Invariants
//!
//! 1. At most one of {drag session, animation} is active ([`Driver`]).
//! 2. Every height produced by drags, snapping and state requests lies within
//!    the current bounds; only [`PullUpController::set_height`] may leave
//!    them.
//! 3. The observer hears each distinct state once, and at most one inset
//!    and one dimming notification per event, only for changed values.
//! 4. Nothing reaches the observer before the first [`layout`] call, which
//!    announces the initial state.
//!
//! # Failure Modes
//!
//! - Drag events before the first layout, or `Changed`/`Ended` without a
//!   `Began`, are ignored.
//! - Bounds are only re-queried when stale. Hosts must call
//!   [`invalidate_layout`] when their minimum or maximum changes.
//!
//! [`layout`]: PullUpController::layout
//! [`invalidate_layout`]: PullUpController::invalidate_layout

use std::fmt;
use std::time::Duration;

use pullup_core::geometry::EdgeInsets;
use pullup_core::gesture::{DragEvent, DragPhase};
use pullup_core::{debug, trace};
use web_time::Instant;

use crate::animator::{AnimationController, AnimationGoal, AnimationRequest};
use crate::config::PullUpConfig;
use crate::delegate::{DefaultSizing, NoopObserver, PanelObserver, SizingDelegate};
use crate::dimming::dimming_fraction;
use crate::error::PullUpError;
use crate::height::{HeightBounds, HeightModel};
use crate::layout_mode::{LayoutMode, PanelLayout};
use crate::session::{Driver, GestureSession};
use crate::snap;
use crate::state::{HandleState, PanelState, StateTracker};

/// Container geometry reported by the host's layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Full height of the container hosting both panels.
    pub container_height: f64,
    /// Height reserved at the top (status bar, navigation bar).
    pub top_guide: f64,
}

impl LayoutMetrics {
    pub fn new(container_height: f64, top_guide: f64) -> Self {
        Self {
            container_height,
            top_guide,
        }
    }

    /// Largest height the bottom panel may take after `top_margin`.
    pub fn maximum_available(&self, top_margin: f64) -> f64 {
        let available = self.container_height - self.top_guide - top_margin;
        if available.is_finite() {
            available.max(0.0)
        } else {
            0.0
        }
    }
}

/// Resting position requested before the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    State(PanelState),
    Height(f64),
}

/// Values last delivered to the observer.
#[derive(Debug, Clone, Copy, Default)]
struct Published {
    content: Option<EdgeInsets>,
    bottom: Option<EdgeInsets>,
    dimming: Option<f64>,
}

/// Draggable bottom panel height and state engine.
pub struct PullUpController {
    config: PullUpConfig,
    sizing: Box<dyn SizingDelegate>,
    observer: Box<dyn PanelObserver>,
    metrics: LayoutMetrics,
    // None while stale.
    bounds: Option<HeightBounds>,
    model: HeightModel,
    layout: PanelLayout,
    driver: Driver,
    animator: AnimationController,
    state: StateTracker,
    published: Published,
    pending: Pending,
    primed: bool,
    last_frame: Option<Instant>,
}

impl fmt::Debug for PullUpController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullUpController")
            .field("height", &self.model.current())
            .field("bounds", &self.bounds)
            .field("state", &self.state.current())
            .field("driver", &self.driver.as_str())
            .field("locked", &self.config.locked)
            .finish_non_exhaustive()
    }
}

impl Default for PullUpController {
    fn default() -> Self {
        Self::new(PullUpConfig::default())
    }
}

impl PullUpController {
    /// Create a controller with default sizing and no observer.
    pub fn new(config: PullUpConfig) -> Self {
        Self::with_delegates(config, DefaultSizing, NoopObserver)
    }

    /// Create a controller with host delegates.
    pub fn with_delegates(
        config: PullUpConfig,
        sizing: impl SizingDelegate + 'static,
        observer: impl PanelObserver + 'static,
    ) -> Self {
        let animator = AnimationController::new(config.animation);
        Self {
            config,
            sizing: Box::new(sizing),
            observer: Box::new(observer),
            metrics: LayoutMetrics::default(),
            bounds: None,
            model: HeightModel::default(),
            layout: PanelLayout::default(),
            driver: Driver::Idle,
            animator,
            state: StateTracker::new(),
            published: Published::default(),
            pending: Pending::State(PanelState::Collapsed),
            primed: false,
            last_frame: None,
        }
    }

    // ── Delegates & configuration ───────────────────────────────────────

    /// Replace the sizing delegate. Cached bounds become stale.
    pub fn set_sizing_delegate(&mut self, sizing: impl SizingDelegate + 'static) {
        self.sizing = Box::new(sizing);
        self.invalidate_layout();
    }

    /// Replace the observer. After the first layout the new observer is
    /// primed with the current state, insets and dimming.
    pub fn set_observer(&mut self, observer: impl PanelObserver + 'static) {
        self.observer = Box::new(observer);
        self.published = Published::default();
        if self.primed {
            let state = self.state();
            self.observer.state_changed(state);
            self.publish_layout();
        }
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &PullUpConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A new top margin makes the bounds stale; a new layout mode or dimming
    /// threshold is applied immediately unless a drag is in progress (the
    /// drag keeps the mode it started with).
    pub fn set_config(&mut self, config: PullUpConfig) {
        let previous = std::mem::replace(&mut self.config, config);
        self.animator.set_config(self.config.animation);
        if previous.top_margin != self.config.top_margin {
            self.bounds = None;
        }
        if !previous.locked && self.config.locked {
            self.end_session_in_place();
        }
        if !self.primed {
            return;
        }
        if self.bounds.is_none() {
            self.relayout();
        } else if !self.driver.is_gesture() {
            self.reshow();
        }
    }

    /// Switch between shift and resize layout.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        let config = self.config.clone().layout_mode(mode);
        self.set_config(config);
    }

    /// Lock or unlock user interaction. Locking during a drag ends the drag
    /// where it stands, without snapping.
    pub fn set_locked(&mut self, locked: bool) {
        let config = self.config.clone().locked(locked);
        self.set_config(config);
    }

    /// Whether drags and taps are ignored.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.config.locked
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Current model height of the bottom panel.
    #[inline]
    pub fn height(&self) -> f64 {
        self.model.current()
    }

    /// Geometry derived from the current height.
    #[inline]
    pub fn panel_layout(&self) -> PanelLayout {
        self.layout
    }

    /// Current state. Before the first layout this is the requested initial
    /// state. A height requested before then has no bounds to classify
    /// against and reports `Intermediate` until the first layout.
    pub fn state(&self) -> PanelState {
        self.state.current().unwrap_or(match self.pending {
            Pending::State(state) => state,
            Pending::Height(_) => PanelState::Intermediate,
        })
    }

    /// Handle glyph matching the current state.
    #[inline]
    pub fn handle_state(&self) -> HandleState {
        HandleState::for_panel_state(self.state())
    }

    /// Dimming fraction for the current height.
    pub fn dimming(&self) -> f64 {
        dimming_fraction(
            self.layout.height,
            self.model.bounds(),
            self.config.dimming_threshold,
        )
    }

    /// Bounds from the last sizing query. After [`invalidate_layout`] this
    /// keeps returning the old bounds until the next layout pass or height
    /// change re-queries them.
    ///
    /// [`invalidate_layout`]: Self::invalidate_layout
    #[inline]
    pub fn bounds(&self) -> HeightBounds {
        self.bounds.unwrap_or_else(|| self.model.bounds())
    }

    /// Whether the bounds must be re-queried.
    #[inline]
    pub fn is_layout_stale(&self) -> bool {
        self.bounds.is_none()
    }

    /// Container geometry from the last layout pass.
    #[inline]
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Whether the first layout pass happened.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.primed
    }

    /// Whether a drag session is active.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.driver.is_gesture()
    }

    /// Whether an animation is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animation()
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// Mark the cached bounds stale. They are re-queried before the next
    /// height computation, and the next [`layout`](Self::layout) call moves
    /// a resting panel onto its new bounds.
    pub fn invalidate_layout(&mut self) {
        debug!(message = "pullup.invalidate");
        self.bounds = None;
    }

    /// Host layout pass.
    ///
    /// The first call resolves the initial height and primes the observer
    /// (state first, then insets and dimming). Later calls only do work when
    /// the container changed or the bounds were invalidated.
    pub fn layout(&mut self, metrics: LayoutMetrics) {
        if metrics != self.metrics {
            self.metrics = metrics;
            self.bounds = None;
        }
        if !self.primed {
            self.prime();
        } else if self.bounds.is_none() {
            self.relayout();
        }
    }

    fn prime(&mut self) {
        let bounds = self.refresh_bounds();
        match self.pending {
            Pending::State(state) => self.show(target_for(state, bounds), false),
            Pending::Height(height) => self.show(height, true),
        }
        self.primed = true;
        self.settle();
        self.publish_layout();
    }

    fn relayout(&mut self) {
        let old = self.model.bounds();
        let bounds = self.refresh_bounds();
        let current = self.model.current();

        match &self.driver {
            Driver::Animation(active) => {
                let goal = active.goal();
                self.retarget(goal);
            }
            Driver::Gesture(_) => {
                self.show(current, false);
                self.publish_layout();
            }
            Driver::Idle => {
                // Panels resting on a bound stay on it.
                let (height, trusted) = if current == old.minimum() {
                    (bounds.minimum(), false)
                } else if current == old.maximum() {
                    (bounds.maximum(), false)
                } else if old.contains(current) {
                    (current, false)
                } else {
                    (current, true)
                };
                self.show(height, trusted);
                self.settle();
                self.publish_layout();
            }
        }
    }

    /// Re-aim an in-flight animation at its goal under fresh bounds.
    fn retarget(&mut self, goal: AnimationGoal) {
        let bounds = self.refresh_bounds();
        let (target, goal) = match goal {
            AnimationGoal::State(state) => (target_for(state, bounds), goal),
            AnimationGoal::Resting(height) => {
                let height = bounds.clamp(height);
                (height, AnimationGoal::Resting(height))
            }
            AnimationGoal::Trusted(height) => (height, goal),
        };
        let live = self.live_height();
        self.show(live, goal.is_trusted());
        self.announce(PanelState::classify(target, bounds));
        let request = self.animator.request(target, true);
        self.animate(self.live_height(), request, goal);
        self.publish_layout();
    }

    // ── Gestures ────────────────────────────────────────────────────────

    /// Feed a drag sample.
    pub fn handle_drag(&mut self, event: DragEvent) {
        if !self.primed {
            debug!(message = "pullup.drag_ignored", reason = "not_laid_out");
            return;
        }
        match event.phase {
            DragPhase::Began => self.begin_drag(),
            DragPhase::Changed => self.drag_to(event.translation),
            DragPhase::Ended => self.end_drag(event.translation, event.velocity),
            DragPhase::Cancelled => self.end_drag(event.translation, 0.0),
        }
    }

    /// Tap on the panel's handle area: toggles unless locked.
    pub fn tap(&mut self, animated: bool) {
        if self.config.locked {
            debug!(message = "pullup.tap_ignored", reason = "locked");
            return;
        }
        self.toggle_state(animated);
    }

    fn begin_drag(&mut self) {
        if self.config.locked {
            debug!(message = "pullup.drag_ignored", reason = "locked");
            return;
        }
        let start = self.live_height();
        debug!(
            message = "pullup.drag_begin",
            start,
            superseded = self.driver.as_str()
        );
        self.driver = Driver::Gesture(GestureSession::new(start, self.config.layout_mode));
        self.announce(PanelState::Dragging);
    }

    fn drag_to(&mut self, translation: f64) {
        let Some(session) = self.driver.session() else {
            debug!(message = "pullup.drag_ignored", reason = "no_session");
            return;
        };
        self.show(session.raw_height(translation), false);
        self.publish_layout();
    }

    fn end_drag(&mut self, translation: f64, velocity: f64) {
        let Some(session) = self.driver.session() else {
            debug!(message = "pullup.drag_ignored", reason = "no_session");
            return;
        };
        self.show(session.raw_height(translation), false);

        let release = self.model.current();
        let bounds = self.refresh_bounds();
        let target = snap::resolve_target(release, bounds, self.config.snap, &mut *self.sizing);
        debug!(message = "pullup.drag_end", release, target, velocity);

        self.announce(PanelState::classify(target, bounds));
        let from = self.live_height();
        // Screen velocity points down; height grows upward.
        let request = self.animator.release_request(from, target, -velocity);
        self.animate(from, request, AnimationGoal::Resting(target));
        self.publish_layout();
    }

    /// End an active drag without snapping.
    fn end_session_in_place(&mut self) {
        if !self.driver.is_gesture() {
            return;
        }
        debug!(message = "pullup.drag_end", reason = "locked");
        self.driver = Driver::Idle;
        let current = self.model.current();
        self.show(current, false);
        self.settle();
        self.publish_layout();
    }

    // ── Programmatic control ────────────────────────────────────────────

    /// Move to `Collapsed` or `Expanded`.
    ///
    /// # Panics
    ///
    /// Panics for `Dragging` and `Intermediate`, which are derived states.
    /// Use [`try_set_state`](Self::try_set_state) to handle that case.
    pub fn set_state(&mut self, state: PanelState, animated: bool) {
        if let Err(err) = self.try_set_state(state, animated) {
            panic!("{err}");
        }
    }

    /// Move to `Collapsed` or `Expanded`, rejecting derived states.
    pub fn try_set_state(&mut self, state: PanelState, animated: bool) -> Result<(), PullUpError> {
        if !state.is_settable() {
            return Err(PullUpError::UnsettableState(state));
        }
        if !self.primed {
            self.pending = Pending::State(state);
            return Ok(());
        }
        let bounds = self.refresh_bounds();
        let target = target_for(state, bounds);
        self.announce(PanelState::classify(target, bounds));
        let request = self.animator.request(target, animated);
        self.animate(self.live_height(), request, AnimationGoal::State(state));
        self.publish_layout();
        Ok(())
    }

    /// Expand when collapsed, collapse otherwise.
    pub fn toggle_state(&mut self, animated: bool) {
        if !self.primed {
            let next = match self.pending {
                Pending::State(state) => state.toggled(),
                Pending::Height(_) => PanelState::Collapsed,
            };
            self.pending = Pending::State(next);
            return;
        }
        let resting = self.resting_state();
        self.set_state(resting.toggled(), animated);
    }

    /// Move to `height` without clamping or snapping.
    ///
    /// The caller is trusted: heights outside the bounds are kept as they
    /// are. Non-finite heights are ignored.
    pub fn set_height(&mut self, height: f64, animated: bool) {
        if !height.is_finite() {
            debug!(message = "pullup.set_height_ignored", height);
            return;
        }
        if !self.primed {
            self.pending = Pending::Height(height);
            return;
        }
        let bounds = self.refresh_bounds();
        self.announce(PanelState::classify(height, bounds));
        let request = self.animator.request(height, animated);
        self.animate(self.live_height(), request, AnimationGoal::Trusted(height));
        self.publish_layout();
    }

    // ── Animation ───────────────────────────────────────────────────────

    /// Advance the active animation by `dt`. Returns whether it is still
    /// running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Driver::Animation(active) = &mut self.driver else {
            return false;
        };
        active.tick(dt);
        let height = active.height();
        let trusted = active.goal().is_trusted();
        let done = active.is_complete();

        self.show(height, trusted);
        if done {
            self.driver = Driver::Idle;
            self.last_frame = None;
            self.settle();
        }
        self.publish_layout();
        !done
    }

    /// Advance the active animation to `now`. The first call after an
    /// animation starts only records the frame time.
    pub fn tick_to(&mut self, now: Instant) -> bool {
        if !self.driver.is_animation() {
            self.last_frame = None;
            return false;
        }
        let dt = self
            .last_frame
            .map(|previous| now.saturating_duration_since(previous))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.tick(dt)
    }

    /// Start `request` from `from`, superseding whatever drives the height,
    /// or jump when nothing needs animating.
    fn animate(&mut self, from: f64, request: AnimationRequest, goal: AnimationGoal) {
        #[cfg(feature = "tracing")]
        if let Driver::Animation(previous) = &self.driver {
            debug!(
                message = "pullup.animation_superseded",
                from,
                previous_target = previous.request().target_height,
                target = request.target_height
            );
        }
        self.last_frame = None;
        match self.animator.start(from, request, goal) {
            Some(active) => {
                trace!(
                    message = "pullup.animation_start",
                    from,
                    target = request.target_height
                );
                self.driver = Driver::Animation(active);
            }
            None => {
                self.driver = Driver::Idle;
                self.show(request.target_height, goal.is_trusted());
                self.settle();
            }
        }
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn refresh_bounds(&mut self) -> HeightBounds {
        if let Some(bounds) = self.bounds {
            return bounds;
        }
        let available = self.metrics.maximum_available(self.config.top_margin);
        let minimum = self.sizing.minimum_height();
        let maximum = self.sizing.maximum_height(available).min(available);
        let bounds = HeightBounds::new(minimum, maximum);
        debug!(
            message = "pullup.bounds",
            minimum = bounds.minimum(),
            maximum = bounds.maximum(),
            available
        );
        self.bounds = Some(bounds);
        bounds
    }

    /// Layout mode of the active drag, or the configured one.
    fn active_layout_mode(&self) -> LayoutMode {
        self.driver
            .session()
            .map_or(self.config.layout_mode, |session| session.layout_mode)
    }

    /// Height currently on screen, including shift-mode overflow.
    #[inline]
    fn live_height(&self) -> f64 {
        self.layout.visible_height
    }

    /// Resting classification, ignoring an active drag.
    fn resting_state(&mut self) -> PanelState {
        match self.state.current() {
            Some(state) if state.is_resting() => state,
            _ => {
                let bounds = self.refresh_bounds();
                PanelState::classify(self.model.current(), bounds)
            }
        }
    }

    /// Write a height into the model and derive its layout. Does not notify.
    fn show(&mut self, raw: f64, trusted: bool) {
        let bounds = self.refresh_bounds();
        let mode = self.active_layout_mode();
        self.layout = if trusted {
            self.model.set_bounds(bounds);
            self.model.set_unclamped(raw);
            mode.resolve_unclamped(self.model.current(), bounds)
        } else {
            self.model.set_height(raw, bounds);
            mode.resolve(raw, bounds)
        };
        trace!(
            message = "pullup.height",
            raw,
            height = self.layout.height,
            visible = self.layout.visible_height
        );
    }

    /// Re-derive the layout for the current height (mode or threshold
    /// changed).
    fn reshow(&mut self) {
        let current = self.model.current();
        let bounds = self.refresh_bounds();
        self.show(current, !bounds.contains(current));
        self.publish_layout();
    }

    /// Announce the resting classification of the current height.
    fn settle(&mut self) {
        let state = PanelState::classify(self.model.current(), self.model.bounds());
        self.announce(state);
    }

    fn announce(&mut self, state: PanelState) {
        if let Some(state) = self.state.update(state) {
            debug!(
                message = "pullup.state",
                state = state.as_str(),
                height = self.model.current()
            );
            self.observer.state_changed(state);
        }
    }

    /// Push insets and dimming that changed since the last push.
    fn publish_layout(&mut self) {
        let layout = self.layout;
        if self.published.content != Some(layout.content_insets) {
            self.published.content = Some(layout.content_insets);
            self.observer.content_insets_changed(layout.content_insets);
        }
        if self.published.bottom != Some(layout.bottom_insets) {
            self.published.bottom = Some(layout.bottom_insets);
            self.observer.bottom_insets_changed(layout.bottom_insets);
        }
        let dimming = self.dimming();
        if self.published.dimming != Some(dimming) {
            self.published.dimming = Some(dimming);
            self.observer.dimming_changed(dimming);
        }
    }
}

/// Height at which a settable state rests.
fn target_for(state: PanelState, bounds: HeightBounds) -> f64 {
    match state {
        PanelState::Expanded => bounds.maximum(),
        PanelState::Collapsed | PanelState::Dragging | PanelState::Intermediate => {
            bounds.minimum()
        }
    }
}
