// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token tables: state-keyed colors per control and style variant.
//!
//! ## Precedence lives in the table
//!
//! [`StateColors::resolve`] is the state matcher. It receives the full
//! [`InteractionState`] and decides which entry wins when flags conflict (for example a
//! pill that is both selected and hovered). The [resolver](crate::resolver) never encodes
//! priority itself; swapping a table swaps the policy.
//!
//! Matching order:
//! - Disabled: `selected_disabled` when selected and present, otherwise `disabled`.
//!   A disabled item therefore renders as plain disabled regardless of selection unless
//!   the table opts in to a distinct treatment.
//! - Enabled and selected: `selected_focused`, then `selected_hovered`, then `selected`.
//! - Enabled: `focused`, then `hovered`, then `rest`.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::{BorderStroke, Color};
use crate::state::InteractionState;

/// Fluent style variant of a control. Selects which palette row of a table applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleVariant {
    /// Neutral surfaces; the default.
    #[default]
    Neutral,
    /// Brand-colored surfaces.
    Brand,
}

/// A color per interaction state, with optional refinements that fall back to a base entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StateColors {
    /// Enabled, unselected, idle.
    pub rest: Color,
    /// Enabled, unselected, hovered. Falls back to `rest`.
    pub hovered: Option<Color>,
    /// Enabled, unselected, focused. Falls back to `hovered`, then `rest`.
    pub focused: Option<Color>,
    /// Enabled and selected.
    pub selected: Color,
    /// Enabled, selected, hovered. Falls back to `selected`.
    pub selected_hovered: Option<Color>,
    /// Enabled, selected, focused. Falls back to `selected_hovered`, then `selected`.
    pub selected_focused: Option<Color>,
    /// Disabled.
    pub disabled: Color,
    /// Disabled while selected. Falls back to `disabled`.
    pub selected_disabled: Option<Color>,
}

impl Default for StateColors {
    fn default() -> Self {
        Self::uniform(Color::TRANSPARENT)
    }
}

impl StateColors {
    /// A table that yields `color` for every state.
    pub const fn uniform(color: Color) -> Self {
        Self {
            rest: color,
            hovered: None,
            focused: None,
            selected: color,
            selected_hovered: None,
            selected_focused: None,
            disabled: color,
            selected_disabled: None,
        }
    }

    /// A table with distinct rest, selected, and disabled entries and no refinements.
    pub const fn new(rest: Color, selected: Color, disabled: Color) -> Self {
        Self {
            rest,
            hovered: None,
            focused: None,
            selected,
            selected_hovered: None,
            selected_focused: None,
            disabled,
            selected_disabled: None,
        }
    }

    /// Match `state` against the table.
    pub fn resolve(&self, state: InteractionState) -> Color {
        if !state.is_enabled() {
            return match (state.is_selected(), self.selected_disabled) {
                (true, Some(c)) => c,
                _ => self.disabled,
            };
        }
        if state.is_selected() {
            let hovered = self.selected_hovered.unwrap_or(self.selected);
            if state.is_focused() {
                return self.selected_focused.unwrap_or(hovered);
            }
            if state.is_hovered() {
                return hovered;
            }
            return self.selected;
        }
        let hovered = self.hovered.unwrap_or(self.rest);
        if state.is_focused() {
            return self.focused.unwrap_or(hovered);
        }
        if state.is_hovered() {
            return hovered;
        }
        self.rest
    }
}

/// State-keyed lookups a control needs to resolve a style.
///
/// Implemented by the built-in tables below. Implement it on your own type to drive the
/// [resolver](crate::resolver::resolve) from a live theme or a fixed test table.
pub trait TokenTable {
    /// Background fill.
    fn background(&self, variant: StyleVariant, state: InteractionState) -> Color;
    /// Icon tint.
    fn icon_color(&self, variant: StyleVariant, state: InteractionState) -> Color;
    /// Label color.
    fn text_color(&self, variant: StyleVariant, state: InteractionState) -> Color;
    /// Notification dot fill. Defaults to transparent for controls without a dot.
    fn notification_dot_color(&self, _variant: StyleVariant, _state: InteractionState) -> Color {
        Color::TRANSPARENT
    }
    /// Strokes drawn when the item is hovered or focused.
    fn focus_stroke(&self, variant: StyleVariant) -> &[BorderStroke];
}

/// One palette row of [`PillButtonTokens`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PillPalette {
    /// Background fill.
    pub background: StateColors,
    /// Icon tint.
    pub icon: StateColors,
    /// Label color.
    pub text: StateColors,
    /// Notification dot fill.
    pub notification_dot: StateColors,
}

/// Tokens for a single pill button.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PillButtonTokens {
    /// Palette for [`StyleVariant::Neutral`].
    pub neutral: PillPalette,
    /// Palette for [`StyleVariant::Brand`].
    pub brand: PillPalette,
    /// Focus ring strokes; shared by both variants.
    pub focus_stroke: Vec<BorderStroke>,
    /// Minimum pill height.
    pub min_height: f64,
    /// Vertical padding inside the pill.
    pub vertical_padding: f64,
    /// Icon edge length.
    pub icon_size: f64,
}

impl PillButtonTokens {
    /// The palette row for `variant`.
    pub fn palette(&self, variant: StyleVariant) -> &PillPalette {
        match variant {
            StyleVariant::Neutral => &self.neutral,
            StyleVariant::Brand => &self.brand,
        }
    }
}

mod palette {
    use crate::color::Color;

    pub(super) const BRAND_80: Color = Color::from_hex(0x0F_6C_BD);
    pub(super) const BRAND_60: Color = Color::from_hex(0x11_5E_A3);
    pub(super) const BRAND_160: Color = Color::from_hex(0xEB_F3_FC);
    pub(super) const GREY_14: Color = Color::from_hex(0x24_24_24);
    pub(super) const GREY_26: Color = Color::from_hex(0x42_42_42);
    pub(super) const GREY_74: Color = Color::from_hex(0xBD_BD_BD);
    pub(super) const GREY_92: Color = Color::from_hex(0xEB_EB_EB);
    pub(super) const GREY_94: Color = Color::from_hex(0xF0_F0_F0);
    pub(super) const GREY_96: Color = Color::from_hex(0xF5_F5_F5);
    pub(super) const GREY_98: Color = Color::from_hex(0xFA_FA_FA);
    pub(super) const DANGER: Color = Color::from_hex(0xD1_34_38);
    pub(super) const STROKE_FOCUS_INNER: Color = Color::from_hex(0xFF_FF_FF);
    pub(super) const STROKE_FOCUS_OUTER: Color = Color::from_hex(0x00_00_00);
}

impl Default for PillButtonTokens {
    fn default() -> Self {
        use palette::*;
        let neutral = PillPalette {
            background: StateColors {
                hovered: Some(GREY_92),
                selected_hovered: Some(BRAND_60),
                ..StateColors::new(GREY_96, BRAND_80, GREY_96)
            },
            icon: StateColors::new(GREY_26, Color::WHITE, GREY_74),
            text: StateColors {
                hovered: Some(GREY_14),
                ..StateColors::new(GREY_26, Color::WHITE, GREY_74)
            },
            notification_dot: StateColors::new(BRAND_80, Color::WHITE, GREY_74),
        };
        let brand = PillPalette {
            background: StateColors {
                hovered: Some(BRAND_60),
                selected_hovered: Some(GREY_94),
                ..StateColors::new(BRAND_80, Color::WHITE, BRAND_80.with_alpha(0x66))
            },
            icon: StateColors::new(Color::WHITE, BRAND_80, BRAND_160),
            text: StateColors::new(Color::WHITE, BRAND_80, BRAND_160),
            notification_dot: StateColors::new(Color::WHITE, DANGER, BRAND_160),
        };
        Self {
            neutral,
            brand,
            focus_stroke: vec![
                BorderStroke::new(2.0, STROKE_FOCUS_INNER),
                BorderStroke::new(1.0, STROKE_FOCUS_OUTER),
            ],
            min_height: 28.0,
            vertical_padding: 6.0,
            icon_size: 16.0,
        }
    }
}

impl TokenTable for PillButtonTokens {
    fn background(&self, variant: StyleVariant, state: InteractionState) -> Color {
        self.palette(variant).background.resolve(state)
    }

    fn icon_color(&self, variant: StyleVariant, state: InteractionState) -> Color {
        self.palette(variant).icon.resolve(state)
    }

    fn text_color(&self, variant: StyleVariant, state: InteractionState) -> Color {
        self.palette(variant).text.resolve(state)
    }

    fn notification_dot_color(&self, variant: StyleVariant, state: InteractionState) -> Color {
        self.palette(variant).notification_dot.resolve(state)
    }

    fn focus_stroke(&self, _variant: StyleVariant) -> &[BorderStroke] {
        &self.focus_stroke
    }
}

/// Tokens for the strip behind a row of pills.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PillBarTokens {
    /// Strip background for [`StyleVariant::Neutral`].
    pub neutral_background: Color,
    /// Strip background for [`StyleVariant::Brand`].
    pub brand_background: Color,
}

impl Default for PillBarTokens {
    fn default() -> Self {
        Self {
            neutral_background: palette::GREY_98,
            brand_background: palette::BRAND_80,
        }
    }
}

impl PillBarTokens {
    /// Strip background for `variant`.
    pub fn background(&self, variant: StyleVariant) -> Color {
        match variant {
            StyleVariant::Neutral => self.neutral_background,
            StyleVariant::Brand => self.brand_background,
        }
    }
}

/// Tokens for the grouped command bar.
///
/// The bar has a single look, so the variant argument of [`TokenTable`] is ignored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommandBarTokens {
    /// Corner radius applied to the rounded ends of a group.
    pub corner_radius: f64,
    /// Item background; the selected entry is the "pressed" treatment.
    pub item_background: StateColors,
    /// Item icon tint.
    pub icon_tint: StateColors,
    /// Dismiss button background.
    pub dismiss_background: Color,
    /// Dismiss button icon tint.
    pub dismiss_icon_tint: Color,
    /// Focus ring strokes.
    pub focus_stroke: Vec<BorderStroke>,
}

impl Default for CommandBarTokens {
    fn default() -> Self {
        use palette::*;
        Self {
            corner_radius: 8.0,
            // A selected item that is also disabled only reaches the table when the bar's
            // selection gate lets it through; it then keeps the pressed fill.
            item_background: StateColors {
                hovered: Some(GREY_92),
                selected_disabled: Some(BRAND_160),
                ..StateColors::new(GREY_96, BRAND_160, GREY_96)
            },
            icon_tint: StateColors::new(GREY_26, BRAND_80, GREY_74),
            dismiss_background: Color::WHITE,
            dismiss_icon_tint: GREY_26,
            focus_stroke: vec![BorderStroke::new(2.0, STROKE_FOCUS_OUTER)],
        }
    }
}

impl TokenTable for CommandBarTokens {
    fn background(&self, _variant: StyleVariant, state: InteractionState) -> Color {
        self.item_background.resolve(state)
    }

    fn icon_color(&self, _variant: StyleVariant, state: InteractionState) -> Color {
        self.icon_tint.resolve(state)
    }

    fn text_color(&self, _variant: StyleVariant, state: InteractionState) -> Color {
        self.icon_tint.resolve(state)
    }

    fn focus_stroke(&self, _variant: StyleVariant) -> &[BorderStroke] {
        &self.focus_stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REST: Color = Color::from_hex(0x00_00_01);
    const HOVER: Color = Color::from_hex(0x00_00_02);
    const FOCUS: Color = Color::from_hex(0x00_00_03);
    const SEL: Color = Color::from_hex(0x00_00_04);
    const SEL_HOVER: Color = Color::from_hex(0x00_00_05);
    const DISABLED: Color = Color::from_hex(0x00_00_06);

    fn table() -> StateColors {
        StateColors {
            hovered: Some(HOVER),
            focused: Some(FOCUS),
            selected_hovered: Some(SEL_HOVER),
            ..StateColors::new(REST, SEL, DISABLED)
        }
    }

    fn state(enabled: bool, selected: bool, hovered: bool, focused: bool) -> InteractionState {
        InteractionState::new(enabled, selected, hovered, focused)
    }

    #[test]
    fn enabled_unselected_states() {
        let t = table();
        assert_eq!(t.resolve(state(true, false, false, false)), REST);
        assert_eq!(t.resolve(state(true, false, true, false)), HOVER);
        // Focus outranks hover.
        assert_eq!(t.resolve(state(true, false, true, true)), FOCUS);
    }

    #[test]
    fn selected_refinements_fall_back() {
        let t = table();
        assert_eq!(t.resolve(state(true, true, false, false)), SEL);
        assert_eq!(t.resolve(state(true, true, true, false)), SEL_HOVER);
        // No selected_focused entry: falls back to selected_hovered.
        assert_eq!(t.resolve(state(true, true, false, true)), SEL_HOVER);
    }

    // Disabled wins over selection unless the table opts in.
    #[test]
    fn disabled_overrides_selection() {
        let mut t = table();
        assert_eq!(t.resolve(state(false, true, true, true)), DISABLED);
        assert_eq!(t.resolve(state(false, false, false, false)), DISABLED);
        t.selected_disabled = Some(SEL);
        assert_eq!(t.resolve(state(false, true, false, false)), SEL);
        assert_eq!(t.resolve(state(false, false, false, false)), DISABLED);
    }

    #[test]
    fn uniform_is_constant() {
        let t = StateColors::uniform(REST);
        for bits in 0..16_u8 {
            let s = InteractionState::from_bits_truncate(bits);
            assert_eq!(t.resolve(s), REST);
        }
    }

    #[test]
    fn pill_palette_rows_differ_by_variant() {
        let tokens = PillButtonTokens::default();
        let s = InteractionState::ENABLED;
        assert_ne!(
            tokens.background(StyleVariant::Neutral, s),
            tokens.background(StyleVariant::Brand, s)
        );
        assert_eq!(tokens.focus_stroke(StyleVariant::Brand).len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn command_bar_tokens_deserialize_with_defaults() {
        let t: CommandBarTokens = serde_json::from_str(r#"{ "corner_radius": 4.0 }"#).unwrap();
        assert_eq!(t.corner_radius, 4.0);
        assert_eq!(t.item_background, CommandBarTokens::default().item_background);
    }
}
