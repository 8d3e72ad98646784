// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use sprig_command_bar::{BarAttributes, CommandBar, CommandItem, ItemGroup, layout_group_sizes};
use sprig_tokens::IconRef;

#[derive(Clone, Debug)]
struct Item {
    icon: IconRef,
    selected: bool,
    enabled: bool,
    label: String,
}

impl CommandItem for Item {
    fn icon(&self) -> IconRef {
        self.icon
    }
    fn is_selected(&self) -> bool {
        self.selected
    }
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn content_description(&self) -> &str {
        &self.label
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> usize {
        (self.next_u64() % n) as usize
    }
}

// Group sizes 0..=5, so some groups are skipped.
fn gen_sizes(count: usize) -> Vec<usize> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.below(6)).collect()
}

fn gen_groups(count: usize) -> Vec<ItemGroup<Item>> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    gen_sizes(count)
        .into_iter()
        .enumerate()
        .map(|(g, size)| {
            (0..size)
                .map(|i| Item {
                    icon: IconRef(1 + i as u32),
                    selected: rng.below(4) == 0,
                    enabled: rng.below(8) != 0,
                    label: format!("g{g}i{i}"),
                })
                .collect()
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let attrs = BarAttributes::default();
    let mut group = c.benchmark_group("layout_group_sizes");
    for &n in &[8_usize, 64, 512] {
        let sizes = gen_sizes(n);
        group.throughput(Throughput::Elements(sizes.iter().sum::<usize>() as u64));
        group.bench_function(format!("groups_n{n}"), |b| {
            b.iter(|| {
                let layout = layout_group_sizes(sizes.iter().copied(), &attrs);
                black_box(layout.content_width());
            });
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("command_bar");
    for &n in &[8_usize, 64] {
        let groups = gen_groups(n);
        group.bench_function(format!("set_item_groups_n{n}"), |b| {
            b.iter_batched(
                || {
                    let attrs = BarAttributes {
                        show_dismiss: true,
                        ..BarAttributes::default()
                    };
                    let bar = CommandBar::new(attrs.validate().unwrap());
                    (bar, groups.clone())
                },
                |(mut bar, groups)| {
                    bar.set_item_groups(groups);
                    black_box(bar.views().len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    let mut bar = CommandBar::new(BarAttributes::default().validate().unwrap());
    bar.set_item_groups(gen_groups(64));
    let viewport = Rect::new(0.0, 0.0, 360.0, 48.0);
    let max = bar.max_scroll(viewport.width());
    group.bench_function("target_at_sweep", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for step in 0..100 {
                let offset = max * f64::from(step) / 100.0;
                let p = Point::new(f64::from(step) * 3.6, 24.0);
                if bar.target_at(p, viewport, offset) != sprig_command_bar::ClickTarget::Nothing {
                    hits += 1;
                }
            }
            black_box(hits);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_rebuild);
criterion_main!(benches);
