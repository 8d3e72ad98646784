// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load token overrides and attributes from JSON, then resolve a few states.
//!
//! Run:
//! - `cargo run -p sprig_demos --example themed_tokens`

use sprig_command_bar::BarAttributes;
use sprig_pill::PillBarMetrics;
use sprig_tokens::{InteractionState, StyleVariant, Theme, resolve};
use tracing_subscriber::EnvFilter;

const THEME: &str = r#"{
    "pill_bar": { "neutral_background": { "r": 250, "g": 250, "b": 250, "a": 255 } }
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme: Theme = serde_json::from_str(THEME).expect("valid theme");
    println!(
        "== Theme ==\n  pill bar background {:?}",
        theme.pill_bar.background(StyleVariant::Neutral)
    );

    let attrs: BarAttributes =
        serde_json::from_str(r#"{ "icon_size": 20, "show_dismiss": true }"#).expect("valid json");
    match attrs.validate() {
        Ok(valid) => println!("  item width {}", valid.get().item_width()),
        Err(err) => println!("  invalid attributes: {err}"),
    }
    let bad: BarAttributes = serde_json::from_str(r#"{ "group_space": -4 }"#).expect("valid json");
    let err = bad.validate().expect_err("negative spacing");
    println!("  rejected: {err}");

    let metrics: PillBarMetrics = serde_json::from_str(r#"{ "lookbehind": 3 }"#).expect("valid json");
    println!("  lookbehind {}", metrics.lookbehind);

    println!("== Neutral pill states ==");
    let states = [
        ("rest", InteractionState::ENABLED),
        ("hovered", InteractionState::ENABLED | InteractionState::HOVERED),
        ("selected", InteractionState::ENABLED | InteractionState::SELECTED),
        ("selected+disabled", InteractionState::SELECTED),
    ];
    for (name, state) in states {
        let style = resolve(&theme.pill_button, StyleVariant::Neutral, state);
        println!(
            "  {name:<18} bg={:?} text={:?} rings={}",
            style.background,
            style.text,
            style.border.len()
        );
    }
}
