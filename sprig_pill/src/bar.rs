// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontally scrolling row of pills.
//!
//! [`PillBar`] owns one [`PillButton`] per metadata entry, tracks which pill is hovered and
//! focused, and asks its [`ScrollCoordinator`] to bring a newly focused pill into view.
//! Style resolution and scrolling are independent: a focus change updates the focused pill's
//! style on the next render and, separately, yields a [`ScrollCommand`] for the host.
//!
//! ```
//! use sprig_pill::{PillBar, PillMetaData};
//! use sprig_tokens::{StyleVariant, Theme};
//!
//! let theme = Theme::default();
//! let mut bar = PillBar::new(StyleVariant::Neutral, true);
//! let pills: Vec<_> = (0..8).map(|i| PillMetaData::new(format!("Pill {i}"))).collect();
//!
//! assert!(bar.render(&[], &theme).is_none());
//! let frame = bar.render(&pills, &theme).unwrap();
//! assert_eq!(frame.pills.len(), 8);
//! assert_eq!(bar.on_focus(Some(5)).map(|c| c.target_index), Some(3));
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use sprig_tokens::{AttributeError, Color, PillBarTokens, PillButtonTokens, StyleVariant, Theme};

use crate::button::{PillButton, PillFrame};
use crate::config::PillBarMetrics;
use crate::interaction::{InteractionEvent, InteractionTracker};
use crate::metadata::{PillMetaData, PillStrings};
use crate::scroll::{ScrollCommand, ScrollCoordinator, ScrollStrip};

/// One frame of a pill bar.
#[derive(Clone, Debug, PartialEq)]
pub struct PillBarFrame {
    /// Strip background, present only when the bar shows one.
    pub background: Option<Color>,
    /// One frame per pill, in order.
    pub pills: Vec<PillFrame>,
    /// Padding before the first and after the last pill.
    pub content_padding: f64,
    /// Gap between pills.
    pub item_spacing: f64,
}

/// A scrollable row of pill buttons.
#[derive(Clone, Debug)]
pub struct PillBar {
    variant: StyleVariant,
    show_background: bool,
    metrics: PillBarMetrics,
    button_tokens: Option<PillButtonTokens>,
    bar_tokens: Option<PillBarTokens>,
    strings: PillStrings,
    buttons: Vec<PillButton>,
    tracker: InteractionTracker<usize>,
    scroll: ScrollCoordinator,
}

impl PillBar {
    /// A bar with default metrics and theme tokens.
    pub fn new(variant: StyleVariant, show_background: bool) -> Self {
        let metrics = PillBarMetrics::default();
        Self {
            variant,
            show_background,
            metrics,
            button_tokens: None,
            bar_tokens: None,
            strings: PillStrings::default(),
            buttons: Vec::new(),
            tracker: InteractionTracker::new(),
            scroll: ScrollCoordinator::new(metrics.lookbehind),
        }
    }

    /// Style variant.
    pub fn variant(&self) -> StyleVariant {
        self.variant
    }

    /// Change the style variant.
    pub fn set_variant(&mut self, variant: StyleVariant) {
        self.variant = variant;
    }

    /// Whether the strip background is drawn.
    pub fn shows_background(&self) -> bool {
        self.show_background
    }

    /// Show or hide the strip background.
    pub fn set_show_background(&mut self, show: bool) {
        self.show_background = show;
    }

    /// Current metrics.
    pub fn metrics(&self) -> PillBarMetrics {
        self.metrics
    }

    /// Replace the metrics after validating them. Any pending scroll command is dropped.
    pub fn set_metrics(&mut self, metrics: PillBarMetrics) -> Result<(), AttributeError> {
        self.metrics = metrics.validate()?;
        self.scroll = ScrollCoordinator::new(metrics.lookbehind);
        Ok(())
    }

    /// Override the pill button tokens. `None` falls back to the theme.
    pub fn set_button_tokens(&mut self, tokens: Option<PillButtonTokens>) {
        self.button_tokens = tokens;
    }

    /// Override the bar tokens. `None` falls back to the theme.
    pub fn set_bar_tokens(&mut self, tokens: Option<PillBarTokens>) {
        self.bar_tokens = tokens;
    }

    /// Replace the content description words.
    pub fn set_strings(&mut self, strings: PillStrings) {
        self.strings = strings;
    }

    /// Retained per-pill state, in order.
    pub fn buttons(&self) -> &[PillButton] {
        &self.buttons
    }

    /// Hovered and focused pill indices.
    pub fn tracker(&self) -> &InteractionTracker<usize> {
        &self.tracker
    }

    /// Scroll coordinator, for reading or taking the pending command.
    pub fn scroll(&mut self) -> &mut ScrollCoordinator {
        &mut self.scroll
    }

    /// Move hover to `index` (or nowhere). Takes effect on the next render.
    ///
    /// An index past the last rendered pill is ignored and yields no events.
    pub fn on_hover(&mut self, index: Option<usize>) -> Vec<InteractionEvent<usize>> {
        if !self.is_rendered(index) {
            return Vec::new();
        }
        self.tracker.update_hover(index)
    }

    /// Move focus to `index` (or nowhere), returning the scroll command a newly focused pill
    /// triggers. Losing focus issues no command.
    ///
    /// An index past the last rendered pill is ignored: focus stays where it was and no
    /// command is issued.
    pub fn on_focus(&mut self, index: Option<usize>) -> Option<ScrollCommand> {
        if !self.is_rendered(index) {
            tracing::trace!(?index, pills = self.buttons.len(), "ignored focus past the end");
            return None;
        }
        let mut command = None;
        for event in self.tracker.update_focus(index) {
            if let Some(c) = self.scroll.on_event(event) {
                command = Some(c);
            }
        }
        command
    }

    /// Click pill `index`. Disabled pills and out-of-range indices do nothing.
    pub fn click(&mut self, metas: &mut [PillMetaData], index: usize) -> bool {
        metas.get_mut(index).is_some_and(PillMetaData::click)
    }

    /// Render `metas`. An empty list renders nothing.
    pub fn render(&mut self, metas: &[PillMetaData], theme: &Theme) -> Option<PillBarFrame> {
        if metas.is_empty() {
            tracing::trace!("empty pill bar");
            return None;
        }
        self.sync_len(metas.len());

        let tokens = theme.pill_button_or(self.button_tokens.as_ref());
        let hovered = self.tracker.hovered();
        let focused = self.tracker.focused();
        let pills = metas
            .iter()
            .zip(self.buttons.iter_mut())
            .enumerate()
            .map(|(i, (meta, button))| {
                button.set_hovered(hovered == Some(i));
                button.set_focused(focused == Some(i));
                button.render(meta, self.variant, tokens, &self.strings)
            })
            .collect();

        let background = self.show_background.then(|| {
            theme
                .pill_bar_or(self.bar_tokens.as_ref())
                .background(self.variant)
        });
        Some(PillBarFrame {
            background,
            pills,
            content_padding: self.metrics.content_padding,
            item_spacing: self.metrics.item_spacing,
        })
    }

    /// Advance every pill's transitions by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for button in &mut self.buttons {
            button.advance(dt);
        }
    }

    /// True while any pill is animating.
    pub fn is_animating(&self) -> bool {
        self.buttons.iter().any(PillButton::is_animating)
    }

    /// A scroll strip for pills of the given widths in a viewport of `viewport` width.
    pub fn strip(&self, widths: Vec<f64>, viewport: f64) -> ScrollStrip {
        ScrollStrip::new(
            widths,
            self.metrics.content_padding,
            self.metrics.item_spacing,
            viewport,
        )
    }

    fn is_rendered(&self, index: Option<usize>) -> bool {
        index.is_none_or(|i| i < self.buttons.len())
    }

    fn sync_len(&mut self, len: usize) {
        if self.buttons.len() != len {
            tracing::debug!(from = self.buttons.len(), to = len, "pill count changed");
            self.buttons.resize_with(len, PillButton::new);
            self.tracker.retain(|i| i < len);
        }
    }
}
