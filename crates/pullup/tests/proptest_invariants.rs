//! Property-based invariant tests for the pull-up engine.
//!
//! 1. Clamping always lands within the bounds
//! 2. Snapping always lands within the bounds, on an end when close to it
//! 3. Dimming stays within `[0, 1]` and never decreases with height
//! 4. Arbitrary event sequences keep the height within the bounds
//! 5. Observers never hear the same state twice in a row
//! 6. Degenerate bounds always classify as collapsed

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use pullup::dimming::dimming_fraction;
use pullup::height::clamp;
use pullup::snap::snap;
use pullup::{
    DragEvent, FixedSizing, HeightBounds, LayoutMetrics, LayoutMode, PanelObserver, PanelState,
    PullUpConfig, PullUpController, SnapConfig,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn bounds_strategy() -> impl Strategy<Value = HeightBounds> {
    (0.0f64..400.0, 1.0f64..600.0).prop_map(|(min, span)| HeightBounds::new(min, min + span))
}

/// Operations a host can apply to a controller.
#[derive(Debug, Clone)]
enum Op {
    Began,
    Changed(f64),
    Ended(f64, f64),
    Cancelled(f64),
    Tick(u64),
    SetState(bool, bool),
    Tap,
    Lock(bool),
    Mode(bool),
    Layout(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Began),
        (-800.0f64..800.0).prop_map(Op::Changed),
        (-800.0f64..800.0, -4000.0f64..4000.0).prop_map(|(t, v)| Op::Ended(t, v)),
        (-800.0f64..800.0).prop_map(Op::Cancelled),
        (0u64..120).prop_map(Op::Tick),
        (any::<bool>(), any::<bool>()).prop_map(|(e, a)| Op::SetState(e, a)),
        Just(Op::Tap),
        any::<bool>().prop_map(Op::Lock),
        any::<bool>().prop_map(Op::Mode),
        (50.0f64..1200.0).prop_map(Op::Layout),
    ]
}

#[derive(Clone, Default)]
struct StateLog(Rc<RefCell<Vec<PanelState>>>);

impl PanelObserver for StateLog {
    fn state_changed(&mut self, state: PanelState) {
        self.0.borrow_mut().push(state);
    }
}

fn apply(panel: &mut PullUpController, op: &Op) {
    match *op {
        Op::Began => panel.handle_drag(DragEvent::began()),
        Op::Changed(t) => panel.handle_drag(DragEvent::changed(t)),
        Op::Ended(t, v) => panel.handle_drag(DragEvent::ended(t, v)),
        Op::Cancelled(t) => panel.handle_drag(DragEvent::cancelled(t)),
        Op::Tick(ms) => {
            panel.tick(Duration::from_millis(ms));
        }
        Op::SetState(expanded, animated) => {
            let state = if expanded {
                PanelState::Expanded
            } else {
                PanelState::Collapsed
            };
            panel.set_state(state, animated);
        }
        Op::Tap => panel.tap(true),
        Op::Lock(locked) => panel.set_locked(locked),
        Op::Mode(resize) => panel.set_layout_mode(if resize {
            LayoutMode::Resize
        } else {
            LayoutMode::Shift
        }),
        Op::Layout(container) => panel.layout(LayoutMetrics::new(container, 0.0)),
    }
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clamp_within_bounds(bounds in bounds_strategy(), raw in -2000.0f64..2000.0) {
        let h = clamp(raw, bounds);
        prop_assert!(bounds.contains(h));
        if bounds.contains(raw) {
            prop_assert_eq!(h, raw);
        }
    }

    #[test]
    fn snap_within_bounds(
        bounds in bounds_strategy(),
        raw in -2000.0f64..2000.0,
        threshold in 0.01f64..0.49,
    ) {
        let config = SnapConfig::default().threshold(threshold);
        let target = snap(raw, bounds, config);
        prop_assert!(bounds.contains(target));

        let clamped = clamp(raw, bounds);
        if (clamped - bounds.minimum()) / bounds.range() <= threshold {
            prop_assert_eq!(target, bounds.minimum());
        } else if (bounds.maximum() - clamped) / bounds.range() <= threshold {
            prop_assert_eq!(target, bounds.maximum());
        } else {
            prop_assert_eq!(target, clamped);
        }
    }

    #[test]
    fn dimming_monotonic(
        bounds in bounds_strategy(),
        a in -200.0f64..1200.0,
        b in -200.0f64..1200.0,
        threshold in 0.0f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let d_low = dimming_fraction(low, bounds, threshold);
        let d_high = dimming_fraction(high, bounds, threshold);
        prop_assert!((0.0..=1.0).contains(&d_low));
        prop_assert!((0.0..=1.0).contains(&d_high));
        prop_assert!(d_low <= d_high);
    }

    #[test]
    fn degenerate_bounds_collapsed(height in 0.0f64..400.0, min in 0.0f64..400.0) {
        let bounds = HeightBounds::new(min, min);
        prop_assert_eq!(PanelState::classify(height, bounds), PanelState::Collapsed);
    }

    #[test]
    fn event_sequences_keep_height_in_bounds(
        ops in proptest::collection::vec(op_strategy(), 1..80),
    ) {
        let log = StateLog::default();
        let mut panel = PullUpController::with_delegates(
            PullUpConfig::default(),
            FixedSizing::new(80.0, 300.0),
            log.clone(),
        );
        panel.layout(LayoutMetrics::new(800.0, 0.0));

        for op in &ops {
            apply(&mut panel, op);
            let bounds = panel.bounds();
            prop_assert!(
                bounds.contains(panel.height()),
                "height {} outside {:?} after {:?}",
                panel.height(),
                bounds,
                op
            );
            prop_assert!(!(panel.is_dragging() && panel.is_animating()));
        }

        let states = log.0.borrow();
        for pair in states.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
}
