// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sprig_pill::{PillBar, PillMetaData};
use sprig_tokens::{InteractionState, PillButtonTokens, StyleVariant, Theme, resolve};

fn all_states() -> Vec<InteractionState> {
    (0..=InteractionState::all().bits())
        .map(InteractionState::from_bits_truncate)
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let tokens = PillButtonTokens::default();
    let states = all_states();
    let mut group = c.benchmark_group("resolve");
    for variant in [StyleVariant::Neutral, StyleVariant::Brand] {
        group.bench_function(format!("{variant:?}_all_states"), |b| {
            b.iter(|| {
                for &state in &states {
                    black_box(resolve(&tokens, variant, state));
                }
            });
        });
    }
    group.finish();
}

fn bench_pill_bar(c: &mut Criterion) {
    let theme = Theme::default();
    let mut group = c.benchmark_group("pill_bar");
    for &n in &[10_usize, 100] {
        let mut metas: Vec<_> = (0..n)
            .map(|i| PillMetaData::new(format!("Pill {i}")).with_notification_dot(i % 7 == 0))
            .collect();
        let mut bar = PillBar::new(StyleVariant::Neutral, true);
        group.bench_function(format!("render_toggle_n{n}"), |b| {
            let mut i = 0;
            b.iter(|| {
                // Move selection and focus so every frame has edges to process.
                metas[i % n].selected = !metas[i % n].selected;
                black_box(bar.on_focus(Some(i % n)));
                let frame = bar.render(&metas, &theme);
                bar.advance(Duration::from_millis(16));
                i += 1;
                black_box(frame);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_pill_bar);
criterion_main!(benches);
