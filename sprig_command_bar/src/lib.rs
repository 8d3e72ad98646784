// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Command Bar: a Kurbo-native, horizontally scrollable bar of grouped commands.
//!
//! ## Overview
//!
//! The caller supplies an ordered list of [`ItemGroup`]s. The bar lays the items out in one
//! row, joins the items of a group into a segment, and gives each item a [`PositionRole`]
//! (single, start, middle, end) that selects its background treatment. A trailing dismiss
//! button can be shown; while it is, the scrolled content reserves space for it.
//!
//! Items are anything implementing [`CommandItem`]. The bar only reads them.
//!
//! ## Layering
//!
//! - [`layout`]: pure `(group sizes, attributes) -> BarLayout` arrangement, usable on its own.
//! - [`dismiss`]: [`DismissSlot`], which couples dismiss visibility to the content inset.
//! - [`bar`]: [`CommandBar`], which owns groups and listeners, rebuilds [`ItemView`]s on every
//!   [`CommandBar::set_item_groups`], and dispatches clicks.
//! - [`config`]: [`BarAttributes`] and their validation.
//!
//! The bar does not draw. Hosts read [`CommandBar::views`], [`CommandBar::dismiss_layout`],
//! and [`CommandBar::content_insets`] and render them however they like.
//!
//! ## Not a scroll view
//!
//! Scrolling and flinging belong to the host. The bar reports its scrollable extent
//! ([`CommandBar::content_extent`]) and accepts the current scroll offset when resolving
//! pointer positions ([`CommandBar::target_at`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bar;
pub mod config;
pub mod dismiss;
pub mod layout;
pub mod types;

pub use bar::{ClickTarget, CommandBar, DismissListener, ItemClickListener, ItemView};
pub use config::{BarAttributes, ValidatedAttributes};
pub use dismiss::{DismissLayout, DismissSlot};
pub use layout::{
    BarLayout, Divider, DividerKind, GroupSlot, ItemSlot, layout_group_sizes, layout_groups,
};
pub use types::{CommandItem, ItemGroup, ItemHandle, PositionRole, SelectionGate};
