// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_showcase::{
    FocusPolicy, IntersectionObserver, Item, ShowcaseConfig, ShowcaseController, Subscribers,
    ViewportObserver, VisibilityThreshold,
};
use understory_timing::TimerQueue;

const PANEL: f64 = 900.0;

fn mount(len: usize, focus: FocusPolicy) -> (ShowcaseController, TimerQueue, Subscribers) {
    let mut timers = TimerQueue::new();
    let mut observer = Subscribers::new();
    let mut showcase = ShowcaseController::mount(
        (0..len).map(|i| Item::new(3 + i % 5)),
        ShowcaseConfig::default().with_focus(focus),
        &mut timers,
        &mut observer,
    )
    .unwrap();
    showcase.set_item_regions((0..len).map(|i| i as f64 * PANEL..(i + 1) as f64 * PANEL));
    (showcase, timers, observer)
}

fn bench_scroll_focus(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase/scroll_focus");

    // Every scroll event is processed, so this is the hot path while scrolling.
    for len in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(len as u64));
        for (name, policy) in [
            ("first_straddling", FocusPolicy::FirstStraddling),
            ("nearest_center", FocusPolicy::NearestCenter),
        ] {
            let (mut showcase, _timers, _observer) = mount(len, policy);
            let extent = len as f64 * PANEL;
            group.bench_function(BenchmarkId::new(name, len), |b| {
                let mut y = 0.0;
                b.iter(|| {
                    y = (y + 37.0) % extent;
                    black_box(showcase.on_scroll_position_changed(black_box(y)));
                });
            });
        }
    }

    group.finish();
}

fn bench_auto_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase/tick");

    for len in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(len as u64));
        let (mut showcase, _timers, _observer) = mount(len, FocusPolicy::default());
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(showcase.tick()));
        });
    }

    group.finish();
}

fn bench_intersection_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase/intersection_update");

    for len in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(len as u64));
        let mut observer = IntersectionObserver::new(VisibilityThreshold::DEFAULT);
        let _subscriptions: Vec<_> = (0..len).map(|i| observer.subscribe(i)).collect();
        let bounds: Vec<(usize, Rect)> = (0..len)
            .map(|i| (i, Rect::new(0.0, i as f64 * PANEL, 1_200.0, (i + 1) as f64 * PANEL)))
            .collect();
        let extent = len as f64 * PANEL;

        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 113.0) % extent;
                let viewport = Rect::new(0.0, y, 1_200.0, y + 800.0);
                black_box(observer.update(viewport, bounds.iter().copied()));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scroll_focus,
    bench_auto_advance,
    bench_intersection_update
);
criterion_main!(benches);
