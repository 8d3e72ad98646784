// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Tokens: state-keyed design tokens and a pure style resolver.
//!
//! ## Overview
//!
//! Controls describe their interaction state as a small flag set, the [`InteractionState`]
//! (enabled, selected, hovered, focused). A [`TokenTable`] maps that vector and a
//! [`StyleVariant`] to concrete colors, and [`resolve`] assembles the result into a
//! [`ResolvedStyle`]. Resolution is pure: no caches, no retained state, no theme globals.
//!
//! ## Pieces
//!
//! - [`color`]: [`Color`] and [`BorderStroke`].
//! - [`state`]: [`InteractionState`] plus rising/falling edge helpers for side effects that
//!   fire on a transition.
//! - [`tokens`]: [`StateColors`] (the state matcher that owns precedence), [`TokenTable`], and
//!   built-in tables for pill buttons, pill bars, and the command bar.
//! - [`theme`]: [`Theme`], the registry of default tables keyed by [`ControlType`].
//! - [`resolver`]: [`resolve`].
//! - [`transition`]: [`ColorTransition`] and [`PressPulse`], frame-clock driven and
//!   superseding rather than queueing.
//! - [`error`]: [`AttributeError`] for validating host-supplied dimensions.
//!
//! ## Testing with fixed tables
//!
//! Any type can implement [`TokenTable`], which keeps tests independent of the default theme:
//!
//! ```
//! use sprig_tokens::{
//!     resolve, BorderStroke, Color, InteractionState, StyleVariant, TokenTable,
//! };
//!
//! struct Flat;
//! impl TokenTable for Flat {
//!     fn background(&self, _: StyleVariant, s: InteractionState) -> Color {
//!         if s.is_selected() { Color::BLACK } else { Color::WHITE }
//!     }
//!     fn icon_color(&self, _: StyleVariant, _: InteractionState) -> Color { Color::BLACK }
//!     fn text_color(&self, _: StyleVariant, _: InteractionState) -> Color { Color::BLACK }
//!     fn focus_stroke(&self, _: StyleVariant) -> &[BorderStroke] { &[] }
//! }
//!
//! let s = InteractionState::ENABLED | InteractionState::SELECTED;
//! assert_eq!(resolve(&Flat, StyleVariant::Neutral, s).background, Color::BLACK);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
pub mod error;
pub mod resolver;
pub mod resource;
pub mod state;
pub mod theme;
pub mod tokens;
pub mod transition;

pub use color::{BorderStroke, Color};
pub use error::{AttributeError, check_dimension};
pub use resolver::{ResolvedStyle, resolve};
pub use resource::IconRef;
pub use state::InteractionState;
pub use theme::{ControlTokens, ControlType, Theme};
pub use tokens::{
    CommandBarTokens, PillBarTokens, PillButtonTokens, PillPalette, StateColors, StyleVariant,
    TokenTable,
};
pub use transition::{ColorTransition, PressPulse};
