// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque references to host-owned resources.

/// A host-defined icon handle. Zero is reserved for "no icon".
///
/// Loading and drawing icons is the host's job; the controls only carry the handle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconRef(pub u32);

impl IconRef {
    /// The unset handle.
    pub const NONE: Self = Self(0);

    /// True for [`IconRef::NONE`].
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// `Some(self)` unless unset.
    pub const fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}
