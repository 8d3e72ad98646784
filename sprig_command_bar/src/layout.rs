// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure arrangement of grouped items along a horizontal strip.
//!
//! ## Rules
//!
//! - Groups with no items are dropped before arrangement and consume no space.
//! - Dividers are inserted strictly between children ("show middle"): a group gap between
//!   consecutive rendered groups, an item gap between consecutive items of a group, never
//!   before the first or after the last child.
//! - Each item gets a [`PositionRole`] from its index and its group's size.
//! - Items are vertically centered in the bar.
//!
//! Coordinates are in content space: `x = 0` is the leading edge of the first item, before
//! any scroll offset. The trailing inset reserved by the dismiss slot is not part of the
//! layout; see [`CommandBar::content_extent`](crate::CommandBar::content_extent).
//!
//! ```
//! use sprig_command_bar::{layout_group_sizes, BarAttributes, PositionRole};
//!
//! let attrs = BarAttributes { group_space: 16.0, item_space: 2.0, ..Default::default() };
//! let layout = layout_group_sizes([3, 0, 1], &attrs);
//! assert_eq!(layout.groups().len(), 2);
//! assert_eq!(layout.dividers().len(), 3); // two item gaps and one group gap
//! let roles: Vec<_> = layout.items().iter().map(|i| i.role).collect();
//! assert_eq!(
//!     roles,
//!     [PositionRole::Start, PositionRole::Middle, PositionRole::End, PositionRole::Single]
//! );
//! ```

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect};

use crate::config::BarAttributes;
use crate::types::{ItemGroup, ItemHandle, PositionRole};

/// Which gap a divider represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DividerKind {
    /// Between two groups; [`BarAttributes::group_space`] wide.
    Group,
    /// Between two items of a group; [`BarAttributes::item_space`] wide.
    Item,
}

/// A spacer between two children.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Divider {
    /// Gap kind.
    pub kind: DividerKind,
    /// Gap bounds in content space.
    pub bounds: Rect,
}

/// A laid-out item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemSlot {
    /// Address of the item in the supplied group list.
    pub handle: ItemHandle,
    /// Index of the rendered group (empty groups not counted).
    pub rendered_group: usize,
    /// Position within the group.
    pub role: PositionRole,
    /// Item bounds in content space.
    pub bounds: Rect,
}

/// A laid-out, non-empty group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSlot {
    /// Index of the group in the supplied list.
    pub source: usize,
    /// Union of the group's items and item gaps.
    pub bounds: Rect,
    /// Range of this group's entries in [`BarLayout::items`].
    pub items: Range<usize>,
}

/// Result of arranging a group list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarLayout {
    groups: Vec<GroupSlot>,
    items: Vec<ItemSlot>,
    dividers: Vec<Divider>,
    content_width: f64,
    height: f64,
    skipped: usize,
}

impl BarLayout {
    /// Rendered groups in order.
    pub fn groups(&self) -> &[GroupSlot] {
        &self.groups
    }

    /// Rendered items in order.
    pub fn items(&self) -> &[ItemSlot] {
        &self.items
    }

    /// Dividers in order.
    pub fn dividers(&self) -> &[Divider] {
        &self.dividers
    }

    /// Width of items plus dividers.
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Bar height used for vertical centering.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of supplied groups dropped for being empty.
    pub fn skipped_groups(&self) -> usize {
        self.skipped
    }

    /// True if nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The slot for `handle`, if that item was rendered.
    pub fn item(&self, handle: ItemHandle) -> Option<&ItemSlot> {
        let group = self.groups.iter().find(|g| g.source == handle.group)?;
        self.items[group.items.clone()].get(handle.item)
    }

    /// The item under `point` (content space). Gaps hit nothing.
    pub fn hit_item(&self, point: Point) -> Option<&ItemSlot> {
        if point.x < 0.0 || point.x >= self.content_width {
            return None;
        }
        // Items are sorted by x; the last slot starting at or before `point` is the candidate.
        let idx = self.items.partition_point(|s| s.bounds.x0 <= point.x);
        let slot = self.items.get(idx.checked_sub(1)?)?;
        let b = slot.bounds;
        (point.x < b.x1 && point.y >= b.y0 && point.y < b.y1).then_some(slot)
    }
}

/// Arrange `groups`. Only group sizes matter; items are not read.
pub fn layout_groups<I>(groups: &[ItemGroup<I>], attrs: &BarAttributes) -> BarLayout {
    layout_group_sizes(groups.iter().map(ItemGroup::len), attrs)
}

/// Arrange groups given only their sizes, in order.
pub fn layout_group_sizes(
    sizes: impl IntoIterator<Item = usize>,
    attrs: &BarAttributes,
) -> BarLayout {
    let height = attrs.bar_height();
    let item_w = attrs.item_width();
    let item_h = attrs.item_height();
    let y0 = (height - item_h) * 0.5;
    let y1 = y0 + item_h;

    let mut out = BarLayout {
        height,
        ..BarLayout::default()
    };
    let mut x = 0.0;
    for (source, size) in sizes.into_iter().enumerate() {
        if size == 0 {
            out.skipped += 1;
            continue;
        }
        let rendered_group = out.groups.len();
        if rendered_group > 0 {
            out.dividers.push(Divider {
                kind: DividerKind::Group,
                bounds: Rect::new(x, y0, x + attrs.group_space, y1),
            });
            x += attrs.group_space;
        }
        let group_x0 = x;
        let first = out.items.len();
        for index in 0..size {
            if index > 0 {
                out.dividers.push(Divider {
                    kind: DividerKind::Item,
                    bounds: Rect::new(x, y0, x + attrs.item_space, y1),
                });
                x += attrs.item_space;
            }
            let role = PositionRole::of(index, size);
            tracing::trace!(source, index, size, ?role, "item role");
            out.items.push(ItemSlot {
                handle: ItemHandle::new(source, index),
                rendered_group,
                role,
                bounds: Rect::new(x, y0, x + item_w, y1),
            });
            x += item_w;
        }
        out.groups.push(GroupSlot {
            source,
            bounds: Rect::new(group_x0, y0, x, y1),
            items: first..out.items.len(),
        });
    }
    out.content_width = x;
    out
}
