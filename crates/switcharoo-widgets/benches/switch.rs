//! Benchmarks for the switch's per-frame work.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switcharoo_core::{Point, Rect, RecordingCanvas, Widget};
use switcharoo_widgets::{SwitchGeometry, Switcharoo};

fn bench_geometry(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 60.0, 30.0);

    c.bench_function("geometry_compute", |b| {
        b.iter(|| SwitchGeometry::compute(black_box(bounds), black_box(4.0)))
    });
}

fn bench_layout(c: &mut Criterion) {
    c.bench_function("switch_layout_resize", |b| {
        let mut switch = Switcharoo::new();
        let mut width = 60.0;
        b.iter(|| {
            width = if width > 100.0 { 60.0 } else { width + 1.0 };
            switch.layout(black_box(Rect::new(0.0, 0.0, width, 30.0)))
        })
    });
}

fn bench_full_transition(c: &mut Criterion) {
    c.bench_function("switch_tap_and_animate_60fps", |b| {
        let mut switch = Switcharoo::new().padding(4.0);
        switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
        b.iter(|| {
            let x = if switch.is_on() { 5.0 } else { 55.0 };
            switch.handle_tap(black_box(Point::new(x, 15.0)));
            while switch.is_animating() {
                switch.update(1.0 / 60.0);
            }
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut switch = Switcharoo::new().on(true);
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));

    c.bench_function("switch_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            switch.paint(&mut canvas);
            black_box(canvas.command_count())
        })
    });
}

criterion_group!(
    benches,
    bench_geometry,
    bench_layout,
    bench_full_transition,
    bench_paint
);
criterion_main!(benches);
