#![forbid(unsafe_code)]

//! Duration-bounded damped spring curve.
//!
//! Maps normalized time `t ∈ [0, 1]` to progress along a transition, using
//! the closed-form solution of the damped harmonic oscillator
//!
//!   x'' + 2ζω x' + ω² x = 0,  x(0) = 1,  x'(0) = -v₀
//!
//! where `x` is the remaining fraction of the distance, `ζ` the damping ratio
//! and `v₀` the initial velocity in distances per unit of normalized time.
//! Progress is `1 - x`.
//!
//! # Parameters
//!
//! - **damping_ratio** (ζ): 1.0 is critically damped (no overshoot), values
//!   below 1.0 bounce past the target, values above 1.0 creep in slowly.
//! - **initial_velocity** (v₀): 1.0 means "moving fast enough to cover the
//!   whole distance over the whole duration". Negative values start by moving
//!   away from the target.
//!
//! # Invariants
//!
//! 1. `progress(0.0) == 0.0` and `progress(1.0) == 1.0` exactly.
//! 2. The natural frequency is chosen so the oscillation envelope decays to
//!    0.1% of the distance by `t = 1`, independent of ζ.
//! 3. A critically damped curve with `v₀ == 0` is monotonic.
//!
//! # Failure Modes
//!
//! - Damping below [`MIN_DAMPING_RATIO`] is clamped; a zero ratio would never
//!   decay.
//! - Non-finite parameters fall back to the critically damped defaults.

/// Lowest accepted damping ratio.
pub const MIN_DAMPING_RATIO: f64 = 0.05;

/// `ln(1000)`: envelope decay exponent reaching 0.1% at `t = 1`.
const SETTLE_EXPONENT: f64 = 6.907_755_278_982_137;

/// Band around ζ = 1 treated as critically damped.
const CRITICAL_EPSILON: f64 = 1e-6;

/// A damped spring easing curve over normalized time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    damping_ratio: f64,
    initial_velocity: f64,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::critical()
    }
}

impl SpringCurve {
    /// Create a curve with the given damping ratio and initial velocity.
    #[must_use]
    pub fn new(damping_ratio: f64, initial_velocity: f64) -> Self {
        let damping_ratio = if damping_ratio.is_finite() {
            damping_ratio.max(MIN_DAMPING_RATIO)
        } else {
            1.0
        };
        let initial_velocity = if initial_velocity.is_finite() {
            initial_velocity
        } else {
            0.0
        };
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Critically damped, starting at rest.
    #[must_use]
    pub const fn critical() -> Self {
        Self {
            damping_ratio: 1.0,
            initial_velocity: 0.0,
        }
    }

    /// Damping ratio (ζ).
    #[inline]
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Initial velocity in distances per normalized time.
    #[inline]
    #[must_use]
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Return a copy with a different initial velocity.
    #[must_use]
    pub fn with_initial_velocity(self, initial_velocity: f64) -> Self {
        Self::new(self.damping_ratio, initial_velocity)
    }

    /// Natural frequency for the current damping ratio.
    fn natural_frequency(&self) -> f64 {
        let zeta = self.damping_ratio;
        if zeta <= 1.0 {
            SETTLE_EXPONENT / zeta
        } else {
            // The slow root governs settling when overdamped.
            SETTLE_EXPONENT / (zeta - (zeta * zeta - 1.0).sqrt())
        }
    }

    /// Remaining displacement fraction at normalized time `t`.
    fn displacement(&self, t: f64) -> f64 {
        let zeta = self.damping_ratio;
        let v0 = self.initial_velocity;
        let omega = self.natural_frequency();

        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            (1.0 + (omega - v0) * t) * (-omega * t).exp()
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            envelope
                * ((omega_d * t).cos() + ((zeta * omega - v0) / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (-v0 - r1) / (r2 - r1);
            let c1 = 1.0 - c2;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        }
    }

    /// Progress along the transition at normalized time `t`.
    ///
    /// `t` is clamped to `[0, 1]`. The result may leave `[0, 1]` in between
    /// (overshoot), but the endpoints are exact.
    #[must_use]
    pub fn progress(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        1.0 - self.displacement(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(curve: &SpringCurve) -> Vec<f64> {
        (0..=100).map(|i| curve.progress(i as f64 / 100.0)).collect()
    }

    #[test]
    fn endpoints_exact() {
        for zeta in [0.1, 0.5, 1.0, 1.5, 4.0] {
            let curve = SpringCurve::new(zeta, 0.0);
            assert_eq!(curve.progress(0.0), 0.0, "zeta {zeta}");
            assert_eq!(curve.progress(1.0), 1.0, "zeta {zeta}");
        }
    }

    #[test]
    fn critical_is_monotonic_without_overshoot() {
        let values = samples(&SpringCurve::critical());
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-12, "not monotonic: {pair:?}");
        }
        assert!(values.iter().all(|v| *v <= 1.0));
    }

    #[test]
    fn underdamped_overshoots() {
        let max = samples(&SpringCurve::new(0.3, 0.0))
            .into_iter()
            .fold(f64::MIN, f64::max);
        assert!(max > 1.0, "expected overshoot, max was {max}");
    }

    #[test]
    fn overdamped_stays_below_target() {
        let values = samples(&SpringCurve::new(3.0, 0.0));
        assert!(values.iter().all(|v| *v <= 1.0));
    }

    #[test]
    fn initial_velocity_accelerates_start() {
        let rest = SpringCurve::critical();
        let moving = SpringCurve::critical().with_initial_velocity(5.0);
        assert!(moving.progress(0.05) > rest.progress(0.05));
    }

    #[test]
    fn settles_close_to_target_before_end() {
        for zeta in [0.2, 0.7, 1.0, 2.0] {
            let curve = SpringCurve::new(zeta, 0.0);
            let near_end = curve.progress(0.99);
            assert!(
                (near_end - 1.0).abs() < 0.02,
                "zeta {zeta}: progress at 0.99 was {near_end}"
            );
        }
    }

    #[test]
    fn time_is_clamped() {
        let curve = SpringCurve::new(0.5, 0.0);
        assert_eq!(curve.progress(-3.0), 0.0);
        assert_eq!(curve.progress(7.0), 1.0);
        assert_eq!(curve.progress(f64::NAN), 0.0);
    }

    #[test]
    fn degenerate_parameters_clamped() {
        let curve = SpringCurve::new(0.0, f64::NAN);
        assert!(curve.damping_ratio() >= MIN_DAMPING_RATIO);
        assert_eq!(curve.initial_velocity(), 0.0);

        let curve = SpringCurve::new(f64::INFINITY, 1.0);
        assert_eq!(curve.damping_ratio(), 1.0);
    }

    #[test]
    fn deterministic_across_runs() {
        let curve = SpringCurve::new(0.6, 1.5);
        assert_eq!(samples(&curve), samples(&curve));
    }
}
