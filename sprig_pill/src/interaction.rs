// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and focus tracking: turn "what is hovered/focused now" into transition events.
//!
//! ## Usage
//!
//! 1) Resolve the pointer or keyboard focus to a pill key (for example its index).
//! 2) Call [`InteractionTracker::update_hover`] or [`InteractionTracker::update_focus`].
//! 3) Apply the returned events: flip the pill's hovered/focused flag and, on
//!    [`InteractionEvent::FocusGained`], let the [scroll coordinator](crate::scroll) react.
//!
//! Leaving events always precede entering events, so a pill never observes two hovered
//! siblings at once.
//!
//! ```
//! use sprig_pill::interaction::{InteractionEvent, InteractionTracker};
//! let mut t: InteractionTracker<usize> = InteractionTracker::new();
//! assert_eq!(t.update_hover(Some(1)), vec![InteractionEvent::HoverEnter(1)]);
//! assert_eq!(
//!     t.update_hover(Some(3)),
//!     vec![InteractionEvent::HoverLeave(1), InteractionEvent::HoverEnter(3)]
//! );
//! ```

use alloc::vec::Vec;

/// A hover or focus transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent<K> {
    /// Pointer entered the item.
    HoverEnter(K),
    /// Pointer left the item.
    HoverLeave(K),
    /// The item gained input focus.
    FocusGained(K),
    /// The item lost input focus.
    FocusLost(K),
}

impl<K: Copy> InteractionEvent<K> {
    /// The item the event concerns.
    pub fn key(&self) -> K {
        match *self {
            Self::HoverEnter(k)
            | Self::HoverLeave(k)
            | Self::FocusGained(k)
            | Self::FocusLost(k) => k,
        }
    }
}

/// Current hovered and focused items, with minimal transitions between updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionTracker<K: Copy + Eq> {
    hovered: Option<K>,
    focused: Option<K>,
}

impl<K: Copy + Eq> Default for InteractionTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> InteractionTracker<K> {
    /// Nothing hovered, nothing focused.
    pub fn new() -> Self {
        Self {
            hovered: None,
            focused: None,
        }
    }

    /// The hovered item.
    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// The focused item.
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    /// Move hover to `target` and return leave-then-enter events. No change, no events.
    pub fn update_hover(&mut self, target: Option<K>) -> Vec<InteractionEvent<K>> {
        let events = transition(
            self.hovered,
            target,
            InteractionEvent::HoverLeave,
            InteractionEvent::HoverEnter,
        );
        self.hovered = target;
        events
    }

    /// Move focus to `target` and return lost-then-gained events. No change, no events.
    pub fn update_focus(&mut self, target: Option<K>) -> Vec<InteractionEvent<K>> {
        let events = transition(
            self.focused,
            target,
            InteractionEvent::FocusLost,
            InteractionEvent::FocusGained,
        );
        self.focused = target;
        events
    }

    /// Drop hover and focus, returning the corresponding leave/lost events.
    pub fn clear(&mut self) -> Vec<InteractionEvent<K>> {
        let mut out = self.update_hover(None);
        out.extend(self.update_focus(None));
        out
    }

    /// Forget any item for which `keep` returns `false`, without emitting events.
    ///
    /// Used when the item list shrinks and the old keys no longer exist.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) {
        self.hovered = self.hovered.filter(|&k| keep(k));
        self.focused = self.focused.filter(|&k| keep(k));
    }
}

fn transition<K: Copy + Eq>(
    old: Option<K>,
    new: Option<K>,
    leave: fn(K) -> InteractionEvent<K>,
    enter: fn(K) -> InteractionEvent<K>,
) -> Vec<InteractionEvent<K>> {
    let mut out = Vec::new();
    if old == new {
        return out;
    }
    if let Some(k) = old {
        out.push(leave(k));
    }
    if let Some(k) = new {
        out.push(enter(k));
    }
    out
}
