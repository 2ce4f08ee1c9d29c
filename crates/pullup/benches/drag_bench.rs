//! Benchmark: per-event cost of the pull-up controller.
//!
//! Run with: `cargo bench -p pullup --bench drag_bench`
//!
//! Measures a full drag (began, 60 samples, release) and a full animated
//! state change driven at 60 fps, both of which run once per input or
//! display frame in a host.

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use pullup::{
    DragEvent, FixedSizing, LayoutMetrics, LayoutMode, NoopObserver, PanelState, PullUpConfig,
    PullUpController,
};

const FRAME: Duration = Duration::from_millis(16);

fn controller(mode: LayoutMode) -> PullUpController {
    let mut panel = PullUpController::with_delegates(
        PullUpConfig::default().layout_mode(mode),
        FixedSizing::new(80.0, 600.0),
        NoopObserver,
    );
    panel.layout(LayoutMetrics::new(900.0, 44.0));
    panel
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");

    for mode in [LayoutMode::Shift, LayoutMode::Resize] {
        group.bench_function(mode.as_str(), |b| {
            let mut panel = controller(mode);
            b.iter(|| {
                panel.set_state(PanelState::Collapsed, false);
                panel.handle_drag(DragEvent::began());
                for i in 0..60 {
                    panel.handle_drag(DragEvent::changed(-(i as f64) * 10.0));
                }
                panel.handle_drag(DragEvent::ended(-600.0, -1200.0));
                black_box(panel.height())
            });
        });
    }

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    group.bench_function("expand_collapse", |b| {
        let mut panel = controller(LayoutMode::Shift);
        b.iter(|| {
            panel.toggle_state(true);
            while panel.tick(FRAME) {}
            black_box(panel.state())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_animation);
criterion_main!(benches);
