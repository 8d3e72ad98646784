// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve an interaction state vector into concrete visual attributes.
//!
//! [`resolve`] is a pure function of its inputs: the same table, variant, and state always
//! produce the same [`ResolvedStyle`]. It keeps no memo between calls, so one item's state
//! can never leak into another item's style.
//!
//! The focus ring is an overlay decision made here: strokes are attached only when the
//! vector is hovered or focused, and never influence the fill or content colors.
//!
//! ```
//! use sprig_tokens::{resolve, InteractionState, PillButtonTokens, StyleVariant};
//!
//! let tokens = PillButtonTokens::default();
//! let idle = resolve(&tokens, StyleVariant::Neutral, InteractionState::ENABLED);
//! let focused = resolve(
//!     &tokens,
//!     StyleVariant::Neutral,
//!     InteractionState::ENABLED | InteractionState::FOCUSED,
//! );
//! assert!(idle.border.is_empty());
//! assert!(!focused.border.is_empty());
//! ```

use alloc::vec::Vec;

use crate::color::{BorderStroke, Color};
use crate::state::InteractionState;
use crate::tokens::{StyleVariant, TokenTable};

/// Concrete attributes for one item in one state.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Background fill.
    pub background: Color,
    /// Icon tint.
    pub icon: Color,
    /// Label color.
    pub text: Color,
    /// Notification dot fill.
    pub notification_dot: Color,
    /// Focus ring strokes; empty unless hovered or focused.
    pub border: Vec<BorderStroke>,
}

/// Resolve `state` against `table` for the given `variant`.
pub fn resolve<T: TokenTable + ?Sized>(
    table: &T,
    variant: StyleVariant,
    state: InteractionState,
) -> ResolvedStyle {
    let border = if state.shows_focus_ring() {
        table.focus_stroke(variant).to_vec()
    } else {
        Vec::new()
    };
    tracing::trace!(?variant, ?state, rings = border.len(), "resolved style");
    ResolvedStyle {
        background: table.background(variant, state),
        icon: table.icon_color(variant, state),
        text: table.text_color(variant, state),
        notification_dot: table.notification_dot_color(variant, state),
        border,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{PillButtonTokens, StateColors};
    use alloc::vec;

    /// A fixed table that encodes the raw state bits into the fill so tests can see exactly
    /// which vector reached the matcher.
    struct Echo {
        ring: Vec<BorderStroke>,
    }

    impl TokenTable for Echo {
        fn background(&self, _v: StyleVariant, s: InteractionState) -> Color {
            Color::from_rgba8(s.bits(), 0, 0, 0xFF)
        }
        fn icon_color(&self, _v: StyleVariant, s: InteractionState) -> Color {
            Color::from_rgba8(0, s.bits(), 0, 0xFF)
        }
        fn text_color(&self, _v: StyleVariant, s: InteractionState) -> Color {
            Color::from_rgba8(0, 0, s.bits(), 0xFF)
        }
        fn focus_stroke(&self, _v: StyleVariant) -> &[BorderStroke] {
            &self.ring
        }
    }

    fn echo() -> Echo {
        Echo {
            ring: vec![BorderStroke::new(2.0, Color::BLACK)],
        }
    }

    // The full vector is forwarded untouched, including conflicting flags.
    #[test]
    fn forwards_full_vector() {
        let s = InteractionState::all();
        let style = resolve(&echo(), StyleVariant::Neutral, s);
        assert_eq!(style.background.r, s.bits());
        assert_eq!(style.icon.g, s.bits());
        assert_eq!(style.text.b, s.bits());
        assert_eq!(style.notification_dot, Color::TRANSPARENT);
    }

    #[test]
    fn resolve_is_pure_for_every_vector() {
        let tokens = PillButtonTokens::default();
        for bits in 0..16_u8 {
            let s = InteractionState::from_bits_truncate(bits);
            for variant in [StyleVariant::Neutral, StyleVariant::Brand] {
                assert_eq!(
                    resolve(&tokens, variant, s),
                    resolve(&tokens, variant, s),
                    "state {s:?}"
                );
            }
        }
    }

    // Interleaving other items' states does not change a later result.
    #[test]
    fn no_state_leaks_between_items() {
        let tokens = PillButtonTokens::default();
        let a = InteractionState::ENABLED;
        let first = resolve(&tokens, StyleVariant::Neutral, a);
        let _ = resolve(&tokens, StyleVariant::Neutral, InteractionState::all());
        let _ = resolve(&tokens, StyleVariant::Brand, InteractionState::empty());
        assert_eq!(resolve(&tokens, StyleVariant::Neutral, a), first);
    }

    // The ring is additive: fill and content colors only depend on the table.
    #[test]
    fn ring_overlay_does_not_touch_colors() {
        let mut tokens = PillButtonTokens::default();
        tokens.neutral.background = StateColors::uniform(Color::WHITE);
        let idle = resolve(&tokens, StyleVariant::Neutral, InteractionState::ENABLED);
        let hovered = resolve(
            &tokens,
            StyleVariant::Neutral,
            InteractionState::ENABLED | InteractionState::HOVERED,
        );
        assert!(idle.border.is_empty());
        assert_eq!(hovered.border, tokens.focus_stroke);
        assert_eq!(idle.background, hovered.background);
    }

    #[test]
    fn disabled_focus_still_draws_ring() {
        let style = resolve(&echo(), StyleVariant::Brand, InteractionState::FOCUSED);
        assert_eq!(style.border.len(), 1);
    }
}
