// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_sticky::{Animation, Binding, OptionsPatch, StickyHost, StickyManager, Transition};

/// Column of `n` sections, each 600 tall with a 120 tall sticky header.
///
/// Even ids are sections, odd ids their headers.
struct Column {
    scroll: f64,
    n: u32,
    writes: u64,
}

impl Column {
    fn new(n: u32) -> Self {
        Self {
            scroll: 0.0,
            n,
            writes: 0,
        }
    }

    fn section_top(id: u32) -> f64 {
        f64::from(id / 2) * 600.0
    }
}

impl StickyHost for Column {
    type Node = u32;

    fn scroll_top(&self) -> f64 {
        self.scroll
    }

    fn page_rect(&self, node: u32) -> Rect {
        let top = Self::section_top(node);
        let height = if node % 2 == 0 { 600.0 } else { 120.0 };
        Rect::new(0.0, top, 800.0, top + height)
    }

    fn outer_height(&self, _: u32) -> f64 {
        120.0
    }

    fn position_top(&self, _: u32) -> f64 {
        0.0
    }

    fn parent(&self, node: u32) -> Option<u32> {
        (node % 2 == 1).then(|| node - 1)
    }

    fn make_positioning_context(&mut self, _: u32) {}

    fn prepare_element(&mut self, _: u32, _: Option<Transition>) {}

    fn set_offset(&mut self, _: u32, _: f64) {
        self.writes += 1;
    }

    fn animate_offset(&mut self, _: u32, _: f64, _: Animation) {
        self.writes += 1;
    }

    fn stop_animation(&mut self, _: u32) {}
}

fn build(n: u32) -> (Column, StickyManager<u32>) {
    let mut column = Column::new(n);
    let mut manager = StickyManager::new();
    let headers = (0..column.n).map(|i| i * 2 + 1);
    manager.bind(&mut column, headers, Binding::Options(OptionsPatch::default()));
    (column, manager)
}

fn bench_sticky(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_sticky");
    group.sample_size(50);

    for &n in &[64_u32, 1_024_u32] {
        group.bench_function(format!("scroll_sweep(n={n})"), |b| {
            b.iter_batched(
                || build(n),
                |(mut column, mut manager)| {
                    let end = f64::from(n) * 600.0;
                    let mut y = 0.0;
                    while y < end {
                        column.scroll = y;
                        manager.on_scroll(&mut column);
                        y += 150.0;
                    }
                    black_box(column.writes);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("poll_unchanged(n={n})"), |b| {
            let (mut column, mut manager) = build(n);
            b.iter(|| black_box(manager.poll_parents(&mut column)));
        });

        group.bench_function(format!("update_all(n={n})"), |b| {
            let (mut column, mut manager) = build(n);
            b.iter(|| {
                manager.update_all(&mut column);
                black_box(column.writes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sticky);
criterion_main!(benches);
