// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme-wide token registry keyed by control type.
//!
//! Controls accept an optional per-instance token override. When none is given they fall back
//! to the table registered here for their [`ControlType`].

use crate::tokens::{CommandBarTokens, PillBarTokens, PillButtonTokens};

/// Controls that have an entry in the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlType {
    /// A single pill button.
    PillButton,
    /// The strip holding a row of pills.
    PillBar,
    /// The grouped command bar.
    CommandBar,
}

/// A borrowed entry of the registry.
#[derive(Copy, Clone, Debug)]
pub enum ControlTokens<'a> {
    /// Entry for [`ControlType::PillButton`].
    PillButton(&'a PillButtonTokens),
    /// Entry for [`ControlType::PillBar`].
    PillBar(&'a PillBarTokens),
    /// Entry for [`ControlType::CommandBar`].
    CommandBar(&'a CommandBarTokens),
}

/// Default tables for every control type.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    /// Pill button table.
    pub pill_button: PillButtonTokens,
    /// Pill bar table.
    pub pill_bar: PillBarTokens,
    /// Command bar table.
    pub command_bar: CommandBarTokens,
}

impl Theme {
    /// Look up the table registered for `control`.
    pub fn tokens(&self, control: ControlType) -> ControlTokens<'_> {
        match control {
            ControlType::PillButton => ControlTokens::PillButton(&self.pill_button),
            ControlType::PillBar => ControlTokens::PillBar(&self.pill_bar),
            ControlType::CommandBar => ControlTokens::CommandBar(&self.command_bar),
        }
    }

    /// `overridden` if present, else the theme's pill button table.
    pub fn pill_button_or<'a>(
        &'a self,
        overridden: Option<&'a PillButtonTokens>,
    ) -> &'a PillButtonTokens {
        overridden.unwrap_or(&self.pill_button)
    }

    /// `overridden` if present, else the theme's pill bar table.
    pub fn pill_bar_or<'a>(&'a self, overridden: Option<&'a PillBarTokens>) -> &'a PillBarTokens {
        overridden.unwrap_or(&self.pill_bar)
    }

    /// `overridden` if present, else the theme's command bar table.
    pub fn command_bar_or<'a>(
        &'a self,
        overridden: Option<&'a CommandBarTokens>,
    ) -> &'a CommandBarTokens {
        overridden.unwrap_or(&self.command_bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn lookup_by_control_type() {
        let theme = Theme::default();
        assert!(matches!(
            theme.tokens(ControlType::PillButton),
            ControlTokens::PillButton(t) if *t == theme.pill_button
        ));
        assert!(matches!(
            theme.tokens(ControlType::PillBar),
            ControlTokens::PillBar(_)
        ));
        assert!(matches!(
            theme.tokens(ControlType::CommandBar),
            ControlTokens::CommandBar(_)
        ));
    }

    #[test]
    fn override_wins_over_theme() {
        let theme = Theme::default();
        let custom = PillBarTokens {
            neutral_background: Color::BLACK,
            brand_background: Color::BLACK,
        };
        assert_eq!(theme.pill_bar_or(Some(&custom)), &custom);
        assert_eq!(theme.pill_bar_or(None), &theme.pill_bar);
    }
}
