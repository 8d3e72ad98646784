// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pill bar metrics.

use sprig_tokens::{AttributeError, check_dimension};

/// Spacing of a pill bar and how much context auto-scroll keeps before a focused pill.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PillBarMetrics {
    /// Padding before the first and after the last pill.
    pub content_padding: f64,
    /// Gap between consecutive pills.
    pub item_spacing: f64,
    /// Number of pills kept visible before a newly focused pill.
    pub lookbehind: usize,
}

impl Default for PillBarMetrics {
    fn default() -> Self {
        Self {
            content_padding: 16.0,
            item_spacing: 8.0,
            lookbehind: 2,
        }
    }
}

impl PillBarMetrics {
    /// Check every dimension.
    pub fn validate(self) -> Result<Self, AttributeError> {
        check_dimension("content_padding", self.content_padding)?;
        check_dimension("item_spacing", self.item_spacing)?;
        Ok(self)
    }
}
