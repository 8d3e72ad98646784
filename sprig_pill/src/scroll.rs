// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep the focused pill visible inside a horizontally scrolling strip.
//!
//! ## Coordinator
//!
//! On focus gained at `index`, [`ScrollCoordinator`] issues a scroll to
//! `max(0, index - lookbehind)` so a few preceding pills stay visible as context. Losing focus
//! issues nothing and the scroll position persists. A newer command replaces any command the
//! host has not yet consumed.
//!
//! ```
//! use sprig_pill::scroll::ScrollCoordinator;
//!
//! let mut c = ScrollCoordinator::new(2);
//! assert_eq!(c.focus_gained(5).target_index, 3);
//! assert_eq!(c.focus_gained(1).target_index, 0);
//! ```
//!
//! ## Strip
//!
//! [`ScrollStrip`] turns an item index into a clamped scroll offset, given pill widths,
//! content padding, spacing, and the viewport width. Content narrower than the viewport is
//! centered and does not scroll.

use alloc::vec::Vec;

use crate::interaction::InteractionEvent;

/// A best-effort request to bring a pill into view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollCommand {
    /// Pill to align with the leading edge of the viewport.
    pub target_index: usize,
    /// Whether the host should animate the scroll.
    pub animated: bool,
}

/// Reacts to focus changes with scroll commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollCoordinator {
    lookbehind: usize,
    pending: Option<ScrollCommand>,
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ScrollCoordinator {
    /// Create a coordinator keeping `lookbehind` pills of context.
    pub const fn new(lookbehind: usize) -> Self {
        Self {
            lookbehind,
            pending: None,
        }
    }

    /// Pills kept before the focused one.
    pub fn lookbehind(&self) -> usize {
        self.lookbehind
    }

    /// Handle focus arriving at `index`. The command is also kept as pending.
    pub fn focus_gained(&mut self, index: usize) -> ScrollCommand {
        let command = ScrollCommand {
            target_index: index.saturating_sub(self.lookbehind),
            animated: true,
        };
        if let Some(stale) = self.pending.replace(command) {
            tracing::trace!(?stale, "superseded scroll command");
        }
        tracing::debug!(focused = index, target = command.target_index, "scroll to focused pill");
        command
    }

    /// Handle an interaction event. Only focus gained produces a command.
    pub fn on_event(&mut self, event: InteractionEvent<usize>) -> Option<ScrollCommand> {
        match event {
            InteractionEvent::FocusGained(index) => Some(self.focus_gained(index)),
            InteractionEvent::FocusLost(_)
            | InteractionEvent::HoverEnter(_)
            | InteractionEvent::HoverLeave(_) => None,
        }
    }

    /// The latest unconsumed command.
    pub fn pending(&self) -> Option<ScrollCommand> {
        self.pending
    }

    /// Take the latest command, leaving none pending.
    pub fn take_pending(&mut self) -> Option<ScrollCommand> {
        self.pending.take()
    }
}

/// A horizontal strip of pills with padding and spacing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollStrip {
    widths: Vec<f64>,
    padding: f64,
    spacing: f64,
    viewport: f64,
    offset: f64,
}

impl ScrollStrip {
    /// Create a strip. Offsets start at zero.
    pub fn new(widths: Vec<f64>, padding: f64, spacing: f64, viewport: f64) -> Self {
        Self {
            widths,
            padding,
            spacing,
            viewport,
            offset: 0.0,
        }
    }

    /// Leading x of pill `index` in content space. Past the end yields the content end.
    pub fn item_start(&self, index: usize) -> f64 {
        let n = index.min(self.widths.len());
        let widths: f64 = self.widths[..n].iter().sum();
        #[allow(clippy::cast_precision_loss, reason = "Pill counts are small.")]
        let gaps = n as f64 * self.spacing;
        self.padding + widths + gaps
    }

    /// Total content width, including padding at both ends.
    pub fn content_width(&self) -> f64 {
        if self.widths.is_empty() {
            return 2.0 * self.padding;
        }
        self.item_start(self.widths.len()) - self.spacing + self.padding
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_width() - self.viewport).max(0.0)
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Set the offset, clamped to the valid range.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Change the viewport width, re-clamping the offset.
    pub fn set_viewport(&mut self, viewport: f64) {
        self.viewport = viewport;
        self.set_offset(self.offset);
    }

    /// Align pill `index` with the leading edge (after padding), as far as clamping allows.
    pub fn scroll_to_item(&mut self, index: usize) -> f64 {
        self.set_offset(self.item_start(index) - self.padding);
        self.offset
    }

    /// Apply a coordinator command.
    pub fn apply(&mut self, command: ScrollCommand) -> f64 {
        self.scroll_to_item(command.target_index)
    }

    /// Shift applied to the content to center it when it is narrower than the viewport.
    pub fn centering_shift(&self) -> f64 {
        ((self.viewport - self.content_width()) / 2.0).max(0.0)
    }

    /// Leading x of pill `index` in viewport space at the current offset.
    pub fn item_x(&self, index: usize) -> f64 {
        self.item_start(index) - self.offset + self.centering_shift()
    }

    /// Whether pill `index` is fully inside the viewport at the current offset.
    pub fn is_visible(&self, index: usize) -> bool {
        let Some(&w) = self.widths.get(index) else {
            return false;
        };
        let x0 = self.item_x(index);
        x0 >= 0.0 && x0 + w <= self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    // Focus at 5 with lookbehind 2 targets 3; focus at 1 clamps to 0.
    #[test]
    fn target_keeps_context_and_clamps() {
        let mut c = ScrollCoordinator::new(2);
        assert_eq!(c.focus_gained(5).target_index, 3);
        assert_eq!(c.focus_gained(1).target_index, 0);
        assert_eq!(c.focus_gained(0).target_index, 0);
        assert_eq!(c.focus_gained(2).target_index, 0);
    }

    #[test]
    fn focus_lost_issues_nothing() {
        let mut c = ScrollCoordinator::default();
        assert_eq!(c.on_event(InteractionEvent::FocusLost(4)), None);
        assert_eq!(c.on_event(InteractionEvent::HoverEnter(4)), None);
        assert_eq!(c.pending(), None);
        let cmd = c.on_event(InteractionEvent::FocusGained(4)).unwrap();
        assert!(cmd.animated);
        assert_eq!(cmd.target_index, 2);
    }

    // A newer command replaces the unconsumed one.
    #[test]
    fn newer_command_supersedes() {
        let mut c = ScrollCoordinator::new(2);
        c.focus_gained(9);
        c.focus_gained(4);
        assert_eq!(c.take_pending().map(|p| p.target_index), Some(2));
        assert_eq!(c.take_pending(), None);
    }

    fn strip() -> ScrollStrip {
        ScrollStrip::new(vec![60.0; 10], 16.0, 8.0, 200.0)
    }

    #[test]
    fn strip_geometry() {
        let s = strip();
        assert_eq!(s.item_start(0), 16.0);
        assert_eq!(s.item_start(1), 84.0);
        // 10 pills, 9 gaps, padding on both ends.
        assert_eq!(s.content_width(), 600.0 + 72.0 + 32.0);
        assert_eq!(s.max_offset(), 704.0 - 200.0);
        assert_eq!(ScrollStrip::new(Vec::new(), 16.0, 8.0, 200.0).content_width(), 32.0);
    }

    #[test]
    fn scroll_to_item_clamps() {
        let mut s = strip();
        assert_eq!(s.scroll_to_item(0), 0.0);
        assert_eq!(s.scroll_to_item(3), 3.0 * 68.0);
        assert_eq!(s.scroll_to_item(9), s.max_offset());
        assert!(s.is_visible(9));
    }

    #[test]
    fn command_brings_focused_pill_into_view() {
        let mut s = strip();
        let mut c = ScrollCoordinator::new(2);
        assert!(!s.is_visible(5));
        s.apply(c.focus_gained(5));
        assert!(s.is_visible(3));
        assert!(s.is_visible(5) || s.item_start(5) - s.offset() < 200.0);
    }

    // Three 60-wide pills in a 400 viewport: content 228 wide, centered.
    #[test]
    fn narrow_content_is_centered() {
        let mut s = ScrollStrip::new(vec![60.0; 3], 16.0, 8.0, 400.0);
        assert_eq!(s.content_width(), 228.0);
        assert_eq!(s.centering_shift(), 86.0);
        assert_eq!(s.item_x(0), 102.0);
        assert_eq!(s.scroll_to_item(2), 0.0);
        assert_eq!(s.item_x(2), 86.0 + 16.0 + 136.0);
        assert!(s.is_visible(2));
        // Overflowing content starts at the leading edge.
        assert_eq!(strip().centering_shift(), 0.0);
        assert_eq!(strip().item_x(0), 16.0);
    }

    #[test]
    fn viewport_change_reclamps() {
        let mut s = strip();
        s.set_offset(10_000.0);
        assert_eq!(s.offset(), s.max_offset());
        s.set_viewport(1000.0);
        assert_eq!(s.offset(), 0.0);
    }
}
