#![forbid(unsafe_code)]

//! Animated height transitions.
//!
//! [`AnimationController`] turns a target height into an [`ActiveAnimation`].
//! There is never more than one: the controller's driver slot holds it, and
//! starting another simply replaces it, beginning from the live height of
//! the one it displaced. Nothing is queued and a displaced animation never
//! resumes.
//!
//! # Invariants
//!
//! 1. An animation ends exactly on its target height.
//! 2. Disabled animation (`animated == false` or zero duration) and
//!    zero-distance requests never produce an [`ActiveAnimation`]; the caller
//!    jumps instead.
//! 3. Initial velocity is saturated to [`MAX_RELATIVE_VELOCITY`] so a wild
//!    flick cannot launch the spring far past its target.

use std::time::Duration;

use pullup_core::animation::{Animation, SpringCurve, Transition};

use crate::config::AnimationConfig;
use crate::state::PanelState;

/// Largest spring initial velocity, in distances per animation duration.
pub const MAX_RELATIVE_VELOCITY: f64 = 20.0;

/// What an animation is heading for, used to re-aim it when bounds change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationGoal {
    /// A settable state; the target follows the current bound.
    State(PanelState),
    /// A resting height resolved at the end of a drag, kept within bounds.
    Resting(f64),
    /// A caller-provided height that is never clamped.
    Trusted(f64),
}

impl AnimationGoal {
    /// Whether intermediate and final heights skip clamping.
    #[inline]
    pub fn is_trusted(self) -> bool {
        matches!(self, Self::Trusted(_))
    }
}

/// Parameters of a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    pub target_height: f64,
    pub duration: Duration,
    pub spring_damping: f64,
    /// Spring initial velocity in distances per second.
    pub initial_velocity: f64,
}

impl AnimationRequest {
    /// Whether the request completes without intermediate frames.
    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }

    fn curve(&self) -> SpringCurve {
        let per_duration = self.initial_velocity * self.duration.as_secs_f64();
        SpringCurve::new(
            self.spring_damping,
            per_duration.clamp(-MAX_RELATIVE_VELOCITY, MAX_RELATIVE_VELOCITY),
        )
    }
}

/// The in-flight transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAnimation {
    request: AnimationRequest,
    goal: AnimationGoal,
    transition: Transition,
}

impl ActiveAnimation {
    /// The request this animation was started from.
    #[inline]
    pub fn request(&self) -> &AnimationRequest {
        &self.request
    }

    /// What the animation is heading for.
    #[inline]
    pub fn goal(&self) -> AnimationGoal {
        self.goal
    }

    /// Height at the current point of the transition.
    #[inline]
    pub fn height(&self) -> f64 {
        self.transition.position()
    }

    /// Height the animation started from.
    #[inline]
    pub fn start_height(&self) -> f64 {
        self.transition.start()
    }

    /// Elapsed fraction in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.transition.fraction()
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.transition.tick(dt);
    }

    /// Whether the target was reached.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.transition.is_complete()
    }
}

/// Builds requests from the configured animation parameters.
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    config: AnimationConfig,
}

impl AnimationController {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Request for a programmatic change to `target`.
    pub fn request(&self, target: f64, animated: bool) -> AnimationRequest {
        AnimationRequest {
            target_height: target,
            duration: if animated {
                self.config.duration
            } else {
                Duration::ZERO
            },
            spring_damping: self.config.spring_damping,
            initial_velocity: self.config.initial_velocity,
        }
    }

    /// Request for the hand-off after a drag released at `from` while the
    /// height changed at `height_velocity` points per second.
    ///
    /// The velocity becomes relative to the remaining distance, so the
    /// spring continues the finger's motion.
    pub fn release_request(
        &self,
        from: f64,
        target: f64,
        height_velocity: f64,
    ) -> AnimationRequest {
        let distance = target - from;
        let relative = if distance.abs() > f64::EPSILON && height_velocity.is_finite() {
            height_velocity / distance
        } else {
            0.0
        };
        AnimationRequest {
            initial_velocity: relative,
            ..self.request(target, true)
        }
    }

    /// Start `request` from the live height `from`.
    ///
    /// Returns `None` when the caller should jump straight to the target.
    pub fn start(
        &self,
        from: f64,
        request: AnimationRequest,
        goal: AnimationGoal,
    ) -> Option<ActiveAnimation> {
        if request.is_immediate() || from == request.target_height || !from.is_finite() {
            return None;
        }
        let transition = Transition::new(
            from,
            request.target_height,
            request.duration,
            request.curve(),
        );
        Some(ActiveAnimation {
            request,
            goal,
            transition,
        })
    }
}
