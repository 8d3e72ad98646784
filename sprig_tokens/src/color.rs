// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 8-bit sRGB colors and stroke descriptions used by token tables.

/// An 8-bit per channel, non-premultiplied sRGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black. Used where a table leaves an attribute unspecified.
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(0xFF, 0xFF, 0xFF);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);

    /// Create a color from four channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from three channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xFF)
    }

    /// Create an opaque color from a `0xRRGGBB` value.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to eight bits first."
    )]
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Return this color with its alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation per channel. `t` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp_channel(self.r, to.r, t),
            g: lerp_channel(self.g, to.g, t),
            b: lerp_channel(self.b, to.b, t),
            a: lerp_channel(self.a, to.a, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let v = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    // `v` lies in 0..=255, so adding a half and truncating rounds to nearest.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Interpolated channel stays within the u8 range."
    )]
    let out = (v + 0.5) as u8;
    out
}

/// One stroke of a focus or hover ring. Rings are drawn in order, outermost last.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStroke {
    /// Stroke width in logical pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

impl BorderStroke {
    /// Create a stroke.
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}
