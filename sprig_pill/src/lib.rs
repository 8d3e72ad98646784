// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Pill: chip-like selectable buttons and a scrollable bar of them.
//!
//! ## Overview
//!
//! The caller owns a list of [`PillMetaData`] (text, optional icon, enabled, selected,
//! notification dot, click handler). Each frame, the bar resolves every pill's interaction
//! state against a token table and returns [`PillBarFrame`]s for the host to draw.
//!
//! - [`button`]: [`PillButton`], retained per-pill state. Remembers the previous state so the
//!   selection pulse fires on edges only, and runs the background transition.
//! - [`bar`]: [`PillBar`], a row of buttons with optional background and auto-scroll.
//! - [`interaction`]: hover and focus enter/leave events.
//! - [`scroll`]: [`ScrollCoordinator`], which keeps a few pills of context before the focused
//!   one, and [`ScrollStrip`], which turns that into a clamped offset.
//! - [`metadata`]: [`PillMetaData`] and the [`PillStrings`] used for content descriptions.
//! - [`config`]: [`PillBarMetrics`].
//!
//! Tokens come from [`sprig_tokens`]. Either control accepts an override table and otherwise
//! uses the [`Theme`](sprig_tokens::Theme).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bar;
pub mod button;
pub mod config;
pub mod interaction;
pub mod metadata;
pub mod scroll;

pub use bar::{PillBar, PillBarFrame};
pub use button::{PillButton, PillContent, PillFrame, PillLabel};
pub use config::PillBarMetrics;
pub use interaction::{InteractionEvent, InteractionTracker};
pub use metadata::{PillClickHandler, PillMetaData, PillStrings};
pub use scroll::{ScrollCommand, ScrollCoordinator, ScrollStrip};
