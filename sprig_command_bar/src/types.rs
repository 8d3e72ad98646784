// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the command bar: the item capability, groups, roles, and handles.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use kurbo::RoundedRectRadii;
use sprig_tokens::IconRef;

/// What the bar needs to read from an item.
///
/// The bar never mutates items. Any type can be used; wrap shared items in [`Rc`] to keep
/// reference identity between the caller and click callbacks.
pub trait CommandItem {
    /// Icon to draw.
    fn icon(&self) -> IconRef;
    /// Whether the item is toggled on.
    fn is_selected(&self) -> bool;
    /// Whether the item accepts clicks.
    fn is_enabled(&self) -> bool;
    /// Accessible description.
    fn content_description(&self) -> &str;
}

impl<T: CommandItem + ?Sized> CommandItem for &T {
    fn icon(&self) -> IconRef {
        (**self).icon()
    }
    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    fn content_description(&self) -> &str {
        (**self).content_description()
    }
}

impl<T: CommandItem + ?Sized> CommandItem for Rc<T> {
    fn icon(&self) -> IconRef {
        (**self).icon()
    }
    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    fn content_description(&self) -> &str {
        (**self).content_description()
    }
}

impl<T: CommandItem + ?Sized> CommandItem for Box<T> {
    fn icon(&self) -> IconRef {
        (**self).icon()
    }
    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    fn content_description(&self) -> &str {
        (**self).content_description()
    }
}

/// An ordered run of items drawn as one visually joined segment.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemGroup<I> {
    items: Vec<I>,
}

impl<I> Default for ItemGroup<I> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<I> ItemGroup<I> {
    /// Create a group from items in display order.
    pub fn new(items: Vec<I>) -> Self {
        Self { items }
    }

    /// Items in display order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the group has no items. Empty groups are skipped by the layout.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item.
    pub fn push(&mut self, item: I) {
        self.items.push(item);
    }
}

impl<I> FromIterator<I> for ItemGroup<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Position of an item within its group. Selects the background treatment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PositionRole {
    /// The only item of its group.
    Single,
    /// First of two or more.
    Start,
    /// Neither first nor last.
    Middle,
    /// Last of two or more.
    End,
}

impl PositionRole {
    /// Role of the item at `index` in a group of `group_size` items.
    ///
    /// Total for `index < group_size`. A size of zero or one yields [`Single`](Self::Single);
    /// an index past the end is treated as the last item.
    pub const fn of(index: usize, group_size: usize) -> Self {
        if group_size <= 1 {
            Self::Single
        } else if index == 0 {
            Self::Start
        } else if index >= group_size - 1 {
            Self::End
        } else {
            Self::Middle
        }
    }

    /// Corner radii of the background for this role, in left-to-right order.
    ///
    /// Single rounds every corner, Start the leading pair, End the trailing pair, Middle none.
    pub fn corner_radii(self, radius: f64) -> RoundedRectRadii {
        match self {
            Self::Single => RoundedRectRadii::from_single_radius(radius),
            Self::Start => RoundedRectRadii::new(radius, 0.0, 0.0, radius),
            Self::Middle => RoundedRectRadii::from_single_radius(0.0),
            Self::End => RoundedRectRadii::new(0.0, radius, radius, 0.0),
        }
    }
}

/// When the bar draws an item with its selected ("pressed") treatment.
///
/// This is the command bar's own policy and is independent from how pill tokens treat
/// disabled selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionGate {
    /// Selected and enabled. Selected-but-disabled renders as plain disabled.
    #[default]
    RequireEnabled,
    /// Selected, regardless of enabled.
    SelectedOnly,
}

impl SelectionGate {
    /// Whether an item with these flags shows the selected treatment.
    pub const fn shows_selected(self, selected: bool, enabled: bool) -> bool {
        match self {
            Self::RequireEnabled => selected && enabled,
            Self::SelectedOnly => selected,
        }
    }
}

/// Address of an item in the group list last passed to the bar.
///
/// `group` indexes the caller's list, including any empty groups that were skipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemHandle {
    /// Index of the group in the supplied list.
    pub group: usize,
    /// Index of the item within its group.
    pub item: usize,
}

impl ItemHandle {
    /// Create a handle.
    pub const fn new(group: usize, item: usize) -> Self {
        Self { group, item }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_group() {
        assert_eq!(PositionRole::of(0, 1), PositionRole::Single);
    }

    #[test]
    fn pair_is_start_and_end() {
        assert_eq!(PositionRole::of(0, 2), PositionRole::Start);
        assert_eq!(PositionRole::of(1, 2), PositionRole::End);
    }

    // Every (index, size) pair maps to exactly one role; only the interior is Middle.
    #[test]
    fn role_is_total() {
        for size in 1..12 {
            for index in 0..size {
                let role = PositionRole::of(index, size);
                let expected = match (index, size) {
                    (_, 1) => PositionRole::Single,
                    (0, _) => PositionRole::Start,
                    (i, s) if i == s - 1 => PositionRole::End,
                    _ => PositionRole::Middle,
                };
                assert_eq!(role, expected, "index {index} size {size}");
            }
        }
    }

    #[test]
    fn radii_follow_role() {
        let r = 8.0;
        let single = PositionRole::Single.corner_radii(r);
        assert_eq!(single, RoundedRectRadii::from_single_radius(r));
        let start = PositionRole::Start.corner_radii(r);
        assert_eq!((start.top_left, start.top_right), (r, 0.0));
        assert_eq!((start.bottom_left, start.bottom_right), (r, 0.0));
        let end = PositionRole::End.corner_radii(r);
        assert_eq!((end.top_left, end.top_right), (0.0, r));
        let middle = PositionRole::Middle.corner_radii(r);
        assert_eq!(middle, RoundedRectRadii::from_single_radius(0.0));
    }

    #[test]
    fn gate_policies() {
        let strict = SelectionGate::RequireEnabled;
        assert!(strict.shows_selected(true, true));
        assert!(!strict.shows_selected(true, false));
        assert!(!strict.shows_selected(false, true));
        let loose = SelectionGate::SelectedOnly;
        assert!(loose.shows_selected(true, false));
        assert!(!loose.shows_selected(false, false));
    }

    #[test]
    fn empty_group() {
        let g: ItemGroup<u8> = ItemGroup::default();
        assert!(g.is_empty());
        let g: ItemGroup<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(g.len(), 3);
        assert_eq!(g.items(), &[1, 2, 3]);
    }
}
