// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar attributes read once at construction.
//!
//! Hosts typically read these from a style or attribute source. With the `serde` feature they
//! deserialize from any serde format; missing fields take the defaults below.

use sprig_tokens::{AttributeError, check_dimension};

/// Dimensions and flags of a command bar.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarAttributes {
    /// Gap between consecutive groups.
    pub group_space: f64,
    /// Gap between consecutive items of a group.
    pub item_space: f64,
    /// Whether the dismiss affordance starts visible.
    pub show_dismiss: bool,
    /// Horizontal padding around an item's icon.
    pub item_padding_horizontal: f64,
    /// Vertical padding around an item's icon.
    pub item_padding_vertical: f64,
    /// Icon edge length.
    pub icon_size: f64,
    /// Width of the dismiss button.
    pub dismiss_button_width: f64,
    /// Width of the gap separating the dismiss button from scrolled content.
    pub dismiss_gap_width: f64,
    /// Minimum bar height.
    pub height: f64,
}

impl Default for BarAttributes {
    fn default() -> Self {
        Self {
            group_space: 16.0,
            item_space: 2.0,
            show_dismiss: false,
            item_padding_horizontal: 12.0,
            item_padding_vertical: 12.0,
            icon_size: 24.0,
            dismiss_button_width: 48.0,
            dismiss_gap_width: 8.0,
            height: 48.0,
        }
    }
}

impl BarAttributes {
    /// Check every dimension and wrap the result.
    pub fn validate(self) -> Result<ValidatedAttributes, AttributeError> {
        check_dimension("group_space", self.group_space)?;
        check_dimension("item_space", self.item_space)?;
        check_dimension("item_padding_horizontal", self.item_padding_horizontal)?;
        check_dimension("item_padding_vertical", self.item_padding_vertical)?;
        check_dimension("icon_size", self.icon_size)?;
        check_dimension("dismiss_button_width", self.dismiss_button_width)?;
        check_dimension("dismiss_gap_width", self.dismiss_gap_width)?;
        check_dimension("height", self.height)?;
        Ok(ValidatedAttributes(self))
    }

    /// Width of one item view.
    pub fn item_width(&self) -> f64 {
        self.icon_size + 2.0 * self.item_padding_horizontal
    }

    /// Height of one item view.
    pub fn item_height(&self) -> f64 {
        self.icon_size + 2.0 * self.item_padding_vertical
    }

    /// Height of the bar: the taller of the configured height and an item.
    pub fn bar_height(&self) -> f64 {
        self.height.max(self.item_height())
    }
}

/// [`BarAttributes`] that passed [`BarAttributes::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidatedAttributes(BarAttributes);

impl ValidatedAttributes {
    /// The checked attributes.
    pub fn get(&self) -> &BarAttributes {
        &self.0
    }
}

impl Default for ValidatedAttributes {
    fn default() -> Self {
        Self(BarAttributes::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let v = BarAttributes::default().validate().unwrap();
        assert_eq!(v.get(), &BarAttributes::default());
        assert_eq!(v, ValidatedAttributes::default());
    }

    #[test]
    fn item_geometry() {
        let a = BarAttributes::default();
        assert_eq!(a.item_width(), 48.0);
        assert_eq!(a.item_height(), 48.0);
        let tall = BarAttributes {
            height: 56.0,
            ..a
        };
        assert_eq!(tall.bar_height(), 56.0);
        let short = BarAttributes { height: 0.0, ..a };
        assert_eq!(short.bar_height(), 48.0);
    }

    #[test]
    fn rejects_bad_dimension() {
        let bad = BarAttributes {
            item_space: -2.0,
            ..Default::default()
        };
        assert_eq!(
            bad.validate(),
            Err(AttributeError::NegativeDimension {
                name: "item_space",
                value: -2.0
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_attributes() {
        let a: BarAttributes =
            serde_json::from_str(r#"{ "group_space": 24.0, "show_dismiss": true }"#).unwrap();
        assert_eq!(a.group_space, 24.0);
        assert!(a.show_dismiss);
        assert_eq!(a.item_space, BarAttributes::default().item_space);
    }
}
