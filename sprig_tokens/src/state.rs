// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state vector: enabled, selected, hovered, focused.
//!
//! ## Edge detection
//!
//! Side effects such as the selection pulse fire on a *transition*, not on a level.
//! Callers keep the previously rendered vector and diff it against the current one with
//! [`InteractionState::rising`] and [`InteractionState::falling`].
//!
//! ```
//! use sprig_tokens::InteractionState;
//!
//! let before = InteractionState::ENABLED;
//! let after = InteractionState::ENABLED | InteractionState::SELECTED;
//! assert_eq!(after.rising(before), InteractionState::SELECTED);
//! assert!(after.rising(after).is_empty());
//! ```

bitflags::bitflags! {
    /// Flags that fully determine an item's resolved style.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionState: u8 {
        /// The item accepts input.
        const ENABLED  = 0b0000_0001;
        /// The item is toggled on.
        const SELECTED = 0b0000_0010;
        /// A pointer is over the item.
        const HOVERED  = 0b0000_0100;
        /// The item holds input focus.
        const FOCUSED  = 0b0000_1000;
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::ENABLED
    }
}

impl InteractionState {
    /// Assemble a vector from individual booleans.
    pub fn new(enabled: bool, selected: bool, hovered: bool, focused: bool) -> Self {
        let mut s = Self::empty();
        s.set(Self::ENABLED, enabled);
        s.set(Self::SELECTED, selected);
        s.set(Self::HOVERED, hovered);
        s.set(Self::FOCUSED, focused);
        s
    }

    /// True if [`ENABLED`](Self::ENABLED) is set.
    pub fn is_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }

    /// True if [`SELECTED`](Self::SELECTED) is set.
    pub fn is_selected(self) -> bool {
        self.contains(Self::SELECTED)
    }

    /// True if [`HOVERED`](Self::HOVERED) is set.
    pub fn is_hovered(self) -> bool {
        self.contains(Self::HOVERED)
    }

    /// True if [`FOCUSED`](Self::FOCUSED) is set.
    pub fn is_focused(self) -> bool {
        self.contains(Self::FOCUSED)
    }

    /// Whether the focus/hover ring overlays the base style.
    pub fn shows_focus_ring(self) -> bool {
        self.intersects(Self::HOVERED | Self::FOCUSED)
    }

    /// Flags set in `self` that were clear in `previous`.
    #[must_use]
    pub fn rising(self, previous: Self) -> Self {
        self.difference(previous)
    }

    /// Flags clear in `self` that were set in `previous`.
    #[must_use]
    pub fn falling(self, previous: Self) -> Self {
        previous.difference(self)
    }
}
