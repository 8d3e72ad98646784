// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pill bar: selection pulse, focus-driven scrolling, and disabled pills.
//!
//! Drives a bar of ten pills through a few frames with a fake 16 ms clock and prints what a
//! host would draw.
//!
//! Run:
//! - `RUST_LOG=sprig_pill=debug cargo run -p sprig_demos --example pill_bar`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use sprig_pill::{PillBar, PillBarFrame, PillMetaData};
use sprig_tokens::{IconRef, StyleVariant, Theme};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn print_frame(label: &str, frame: &PillBarFrame) {
    println!("== {label} ==");
    if let Some(bg) = frame.background {
        println!("  background {bg:?}");
    }
    for pill in &frame.pills {
        println!(
            "  {:<28} bg={:?} scale={:.3}{}",
            pill.content_description,
            pill.background,
            pill.scale,
            if pill.pulsing { " (pulse)" } else { "" },
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme = Theme::default();
    let clicks = Rc::new(Cell::new(0));
    let mut metas: Vec<PillMetaData> = (0..10)
        .map(|i| {
            let clicks = clicks.clone();
            PillMetaData::new(format!("Filter {i}")).with_on_click(move || clicks.set(clicks.get() + 1))
        })
        .collect();
    metas[0] = PillMetaData::new("Starred")
        .with_icon(IconRef(7))
        .with_notification_dot(true);
    metas[4].enabled = false;

    let mut bar = PillBar::new(StyleVariant::Neutral, true);
    let first = bar.render(&metas, &theme).expect("non-empty bar");
    print_frame("first frame", &first);
    assert!(first.pills.iter().all(|p| !p.pulsing));

    // Select pill 2 and let the pulse play out.
    metas[2].selected = true;
    let frame = bar.render(&metas, &theme).expect("non-empty bar");
    assert!(frame.pills[2].pulsing);
    let mut frames = 0;
    while bar.is_animating() {
        bar.advance(FRAME);
        frames += 1;
    }
    tracing::info!(frames, "selection settled");
    print_frame("selected", &bar.render(&metas, &theme).expect("non-empty bar"));

    // Focus pill 7: the coordinator keeps two pills of context.
    let widths: Vec<f64> = metas
        .iter()
        .map(|m| if m.is_icon_pill() { 52.0 } else { 84.0 })
        .collect();
    let mut strip = bar.strip(widths, 320.0);
    let command = bar.on_focus(Some(7)).expect("focus gained");
    let offset = strip.apply(command);
    println!("== focus 7 ==\n  scroll to {} (offset {offset:.1})", command.target_index);
    assert_eq!(command.target_index, 5);
    assert!(strip.is_visible(5));

    // Losing focus leaves the scroll position alone.
    assert_eq!(bar.on_focus(None), None);

    // Disabled pills swallow clicks.
    assert!(bar.click(&mut metas, 3));
    assert!(!bar.click(&mut metas, 4));
    assert_eq!(clicks.get(), 1);

    assert!(bar.render(&[], &theme).is_none());
}
