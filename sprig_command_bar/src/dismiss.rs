// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trailing dismiss region and the content inset it reserves.
//!
//! ## Coupling
//!
//! The dismiss affordance floats over the trailing edge of the scrolled content. Whenever it
//! is visible the content must reserve `button_width + gap_width` of trailing space, or the
//! last items would slide underneath it. [`DismissSlot`] owns both the visibility flag and the
//! inset, and [`DismissSlot::set_visible`] changes them together, so there is no state in
//! which one is updated without the other.
//!
//! The region is always laid out, visible or not, as the last and frontmost child of the bar.
//! Toggling only flips visibility and the inset; siblings never reorder.

use kurbo::{Insets, Rect};
use sprig_tokens::IconRef;

/// Geometry of the dismiss region for one viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DismissLayout {
    /// Gap drawn with a fade between content and button.
    pub gap: Rect,
    /// The dismiss button.
    pub button: Rect,
    /// Whether the region is drawn and hit-testable.
    pub visible: bool,
}

impl DismissLayout {
    /// Union of gap and button.
    pub fn bounds(&self) -> Rect {
        self.gap.union(self.button)
    }
}

/// Visibility, icon, and reserved inset of the dismiss affordance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DismissSlot {
    visible: bool,
    icon: IconRef,
    button_width: f64,
    gap_width: f64,
}

impl DismissSlot {
    /// Create a slot with the given widths.
    pub fn new(button_width: f64, gap_width: f64, visible: bool) -> Self {
        Self {
            visible,
            icon: IconRef::NONE,
            button_width,
            gap_width,
        }
    }

    /// Whether the affordance is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the affordance and update the reserved inset in the same step.
    ///
    /// Idempotent. Returns the content insets now in effect.
    pub fn set_visible(&mut self, visible: bool) -> Insets {
        if self.visible != visible {
            let before = self.trailing_inset();
            self.visible = visible;
            tracing::debug!(
                visible,
                before,
                after = self.trailing_inset(),
                "dismiss visibility changed"
            );
        }
        self.content_insets()
    }

    /// Trailing space the scrolled content reserves.
    pub fn trailing_inset(&self) -> f64 {
        if self.visible {
            self.button_width + self.gap_width
        } else {
            0.0
        }
    }

    /// Insets applied to the scrolled content; only the trailing edge is ever non-zero.
    pub fn content_insets(&self) -> Insets {
        Insets::new(0.0, 0.0, self.trailing_inset(), 0.0)
    }

    /// Icon shown on the button.
    pub fn icon(&self) -> IconRef {
        self.icon
    }

    /// Replace the icon. [`IconRef::NONE`] is ignored. Returns `true` if the icon changed.
    pub fn set_icon(&mut self, icon: IconRef) -> bool {
        if icon.is_none() || icon == self.icon {
            return false;
        }
        self.icon = icon;
        true
    }

    /// Lay the region out against the trailing edge of `viewport`.
    pub fn layout(&self, viewport: Rect) -> DismissLayout {
        let button = Rect::new(
            viewport.x1 - self.button_width,
            viewport.y0,
            viewport.x1,
            viewport.y1,
        );
        let gap = Rect::new(button.x0 - self.gap_width, viewport.y0, button.x0, viewport.y1);
        DismissLayout {
            gap,
            button,
            visible: self.visible,
        }
    }
}
