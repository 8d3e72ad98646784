// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command bar basics.
//!
//! Build a bar with two groups, print the arranged items, toggle the dismiss button, and
//! dispatch a few clicks by position.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p sprig_demos --example command_bar`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use sprig_command_bar::{
    BarAttributes, ClickTarget, CommandBar, CommandItem, ItemGroup, ItemHandle, PositionRole,
};
use sprig_tokens::IconRef;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Action {
    name: &'static str,
    icon: IconRef,
    selected: bool,
    enabled: bool,
}

impl Action {
    fn new(name: &'static str, icon: u32) -> Self {
        Self {
            name,
            icon: IconRef(icon),
            selected: false,
            enabled: true,
        }
    }
}

impl CommandItem for Action {
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
        self.name
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bold = Action::new("Bold", 1);
    bold.selected = true;
    let mut underline = Action::new("Underline", 3);
    underline.enabled = false;
    let groups = vec![
        ItemGroup::new(vec![bold, Action::new("Italic", 2), underline]),
        ItemGroup::new(Vec::new()),
        ItemGroup::new(vec![Action::new("Undo", 4)]),
    ];

    let mut bar = CommandBar::new(BarAttributes::default().validate().unwrap());
    bar.set_item_groups(groups);

    println!("== Items ==");
    for view in bar.views() {
        println!(
            "  {:<10} {:?} x={:>5.1}..{:>5.1} selected={} enabled={}",
            view.content_description,
            view.role,
            view.bounds.x0,
            view.bounds.x1,
            view.shows_selected(),
            view.is_enabled(),
        );
    }
    let roles: Vec<_> = bar.views().iter().map(|v| v.role).collect();
    assert_eq!(
        roles,
        [
            PositionRole::Start,
            PositionRole::Middle,
            PositionRole::End,
            PositionRole::Single
        ]
    );
    assert_eq!(bar.layout().skipped_groups(), 1);

    let clicked = Rc::new(RefCell::new(Vec::new()));
    let sink = clicked.clone();
    bar.set_item_click_listener(move |item: &Action, _view| sink.borrow_mut().push(item.name));
    let dismissed = Rc::new(RefCell::new(0));
    let count = dismissed.clone();
    bar.set_dismiss_listener(move || *count.borrow_mut() += 1);

    let insets = bar.set_show_dismiss(true);
    println!("== Dismiss shown ==\n  content insets {insets:?}");
    assert_eq!(insets.x1, 56.0);

    let viewport = Rect::new(0.0, 0.0, 200.0, 48.0);
    println!("  max scroll {:.1}", bar.max_scroll(viewport.width()));

    // Click the first item, the disabled one, and the dismiss button.
    let first = bar.views()[0].bounds.center();
    let disabled = bar.views()[2].bounds.center();
    let dismiss = bar.dismiss_layout(viewport).button.center();
    for (label, p) in [("first", first), ("disabled", disabled), ("dismiss", dismiss)] {
        let target = bar.target_at(p, viewport, 0.0);
        let handled = bar.click_at(p, viewport, 0.0);
        println!("  click {label:<8} -> {target:?} handled={handled}");
    }
    assert_eq!(
        bar.target_at(first, viewport, 0.0),
        ClickTarget::Item(ItemHandle::new(0, 0))
    );
    assert_eq!(*clicked.borrow(), ["Bold"]);
    assert_eq!(*dismissed.borrow(), 1);

    // Hidden dismiss button: clicks there fall through to content.
    bar.set_show_dismiss(false);
    assert_ne!(bar.target_at(dismiss, viewport, 0.0), ClickTarget::Dismiss);
    println!("== Dismiss hidden ==\n  content insets {:?}", bar.content_insets());
}
