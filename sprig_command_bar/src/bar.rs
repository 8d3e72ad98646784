// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The command bar: owns groups, derived item views, the dismiss slot, and listeners.
//!
//! ## Rebuild model
//!
//! [`CommandBar::set_item_groups`] discards every previously rendered view and recomputes the
//! layout and per-item views from the new list. There is no incremental diffing, so the views
//! can never drift from the groups they were built from. Item flags are read during the
//! rebuild; call it again after items change.
//!
//! ## Dispatch
//!
//! Clicks resolve to either the dismiss button (frontmost, checked first) or an item.
//! Missing listeners and clicks on disabled items are no-ops.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, RoundedRectRadii};
use sprig_tokens::{
    Color, CommandBarTokens, IconRef, InteractionState, ResolvedStyle, StyleVariant, Theme,
    resolve,
};

use crate::config::{BarAttributes, ValidatedAttributes};
use crate::dismiss::{DismissLayout, DismissSlot};
use crate::layout::{BarLayout, ItemSlot, layout_groups};
use crate::types::{CommandItem, ItemGroup, ItemHandle, PositionRole, SelectionGate};

/// Callback for item clicks.
pub type ItemClickListener<I> = Box<dyn FnMut(&I, &ItemView)>;
/// Callback for the dismiss button.
pub type DismissListener = Box<dyn FnMut()>;

/// A rendered item: geometry, role, and resolved treatment. Handed to click listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    /// Address of the source item.
    pub handle: ItemHandle,
    /// Position within its group.
    pub role: PositionRole,
    /// Bounds in content space.
    pub bounds: Rect,
    /// State vector the style was resolved from. `SELECTED` is set only when the bar's
    /// [`SelectionGate`] lets the selected treatment through.
    pub state: InteractionState,
    /// Icon to draw.
    pub icon: IconRef,
    /// Accessible description.
    pub content_description: String,
    /// Background corner radii for the role.
    pub corner_radii: RoundedRectRadii,
    /// Resolved colors.
    pub style: ResolvedStyle,
}

impl ItemView {
    /// True if the selected ("pressed") treatment is shown.
    pub fn shows_selected(&self) -> bool {
        self.state.is_selected()
    }

    /// True if the item accepts clicks.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }
}

/// What a point on the bar resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dismiss button.
    Dismiss,
    /// An item.
    Item(ItemHandle),
    /// A gap, the fade in front of the dismiss button, or outside the content.
    Nothing,
}

/// A horizontally scrollable bar of item groups with an optional trailing dismiss button.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use sprig_command_bar::{BarAttributes, CommandBar, CommandItem, ItemGroup, ItemHandle};
/// use sprig_tokens::IconRef;
///
/// struct Cmd(&'static str);
/// impl CommandItem for Cmd {
///     fn icon(&self) -> IconRef { IconRef(1) }
///     fn is_selected(&self) -> bool { false }
///     fn is_enabled(&self) -> bool { true }
///     fn content_description(&self) -> &str { self.0 }
/// }
///
/// let clicked = Rc::new(RefCell::new(Vec::new()));
/// let sink = clicked.clone();
/// let mut bar = CommandBar::new(BarAttributes::default().validate().unwrap());
/// bar.set_item_click_listener(move |item: &Cmd, _view| sink.borrow_mut().push(item.0));
/// bar.set_item_groups(vec![
///     ItemGroup::new(vec![Cmd("bold"), Cmd("italic")]),
///     ItemGroup::new(vec![Cmd("undo")]),
/// ]);
/// assert!(bar.click(ItemHandle::new(1, 0)));
/// assert_eq!(*clicked.borrow(), ["undo"]);
/// ```
pub struct CommandBar<I> {
    attributes: BarAttributes,
    gate: SelectionGate,
    tokens: CommandBarTokens,
    groups: Vec<ItemGroup<I>>,
    layout: BarLayout,
    views: Vec<ItemView>,
    dismiss: DismissSlot,
    item_click_listener: Option<ItemClickListener<I>>,
    dismiss_listener: Option<DismissListener>,
}

impl<I> core::fmt::Debug for CommandBar<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandBar")
            .field("attributes", &self.attributes)
            .field("gate", &self.gate)
            .field("groups", &self.groups.len())
            .field("views", &self.views.len())
            .field("dismiss", &self.dismiss)
            .field("item_click_listener", &self.item_click_listener.is_some())
            .field("dismiss_listener", &self.dismiss_listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<I: CommandItem> CommandBar<I> {
    /// Create an empty bar. The dismiss slot starts as [`BarAttributes::show_dismiss`] says.
    pub fn new(attributes: ValidatedAttributes) -> Self {
        let attributes = *attributes.get();
        Self {
            attributes,
            gate: SelectionGate::default(),
            tokens: CommandBarTokens::default(),
            groups: Vec::new(),
            layout: BarLayout::default(),
            views: Vec::new(),
            dismiss: DismissSlot::new(
                attributes.dismiss_button_width,
                attributes.dismiss_gap_width,
                attributes.show_dismiss,
            ),
            item_click_listener: None,
            dismiss_listener: None,
        }
    }

    /// Create an empty bar using `overridden` tokens, else the theme's command bar table.
    pub fn with_theme(
        attributes: ValidatedAttributes,
        theme: &Theme,
        overridden: Option<&CommandBarTokens>,
    ) -> Self {
        let mut bar = Self::new(attributes);
        bar.tokens = theme.command_bar_or(overridden).clone();
        bar
    }

    /// Replace the token table. Views are rebuilt.
    pub fn set_tokens(&mut self, tokens: CommandBarTokens) {
        self.tokens = tokens;
        self.rebuild_views();
    }

    /// Replace the selection gate policy. Views are rebuilt.
    pub fn set_selection_gate(&mut self, gate: SelectionGate) {
        self.gate = gate;
        self.rebuild_views();
    }

    /// The attributes the bar was built with.
    pub fn attributes(&self) -> &BarAttributes {
        &self.attributes
    }

    /// Replace all groups and rebuild from scratch. Empty groups are skipped.
    pub fn set_item_groups(&mut self, groups: Vec<ItemGroup<I>>) {
        self.views.clear();
        self.groups = groups;
        self.layout = layout_groups(&self.groups, &self.attributes);
        self.rebuild_views();
        tracing::debug!(
            supplied = self.groups.len(),
            rendered = self.layout.groups().len(),
            skipped = self.layout.skipped_groups(),
            items = self.views.len(),
            "rebuilt command bar"
        );
    }

    /// The groups last passed to [`set_item_groups`](Self::set_item_groups).
    pub fn item_groups(&self) -> &[ItemGroup<I>] {
        &self.groups
    }

    /// Current layout.
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    /// Rendered item views in display order.
    pub fn views(&self) -> &[ItemView] {
        &self.views
    }

    /// The view for `handle`, if rendered.
    pub fn view(&self, handle: ItemHandle) -> Option<&ItemView> {
        self.views.iter().find(|v| v.handle == handle)
    }

    /// The source item for `handle`.
    pub fn item(&self, handle: ItemHandle) -> Option<&I> {
        self.groups.get(handle.group)?.items().get(handle.item)
    }

    /// Register the item click listener, replacing any previous one.
    pub fn set_item_click_listener(&mut self, listener: impl FnMut(&I, &ItemView) + 'static) {
        self.item_click_listener = Some(Box::new(listener));
    }

    /// Remove the item click listener.
    pub fn clear_item_click_listener(&mut self) {
        self.item_click_listener = None;
    }

    /// Register the dismiss listener, replacing any previous one.
    pub fn set_dismiss_listener(&mut self, listener: impl FnMut() + 'static) {
        self.dismiss_listener = Some(Box::new(listener));
    }

    /// Remove the dismiss listener.
    pub fn clear_dismiss_listener(&mut self) {
        self.dismiss_listener = None;
    }

    /// Whether the dismiss button is shown.
    pub fn show_dismiss(&self) -> bool {
        self.dismiss.is_visible()
    }

    /// Show or hide the dismiss button; the content inset follows in the same step.
    pub fn set_show_dismiss(&mut self, visible: bool) -> Insets {
        self.dismiss.set_visible(visible)
    }

    /// Replace the dismiss icon. [`IconRef::NONE`] is ignored.
    pub fn set_dismiss_icon(&mut self, icon: IconRef) {
        self.dismiss.set_icon(icon);
    }

    /// Set visibility and icon together.
    pub fn set_dismiss(&mut self, visible: bool, icon: IconRef) -> Insets {
        self.dismiss.set_icon(icon);
        self.dismiss.set_visible(visible)
    }

    /// The dismiss slot.
    pub fn dismiss_slot(&self) -> &DismissSlot {
        &self.dismiss
    }

    /// Dismiss button background and icon tint.
    pub fn dismiss_colors(&self) -> (Color, Color) {
        (self.tokens.dismiss_background, self.tokens.dismiss_icon_tint)
    }

    /// Dismiss region geometry for `viewport`.
    pub fn dismiss_layout(&self, viewport: Rect) -> DismissLayout {
        self.dismiss.layout(viewport)
    }

    /// Insets applied to the scrolled content.
    pub fn content_insets(&self) -> Insets {
        self.dismiss.content_insets()
    }

    /// Scrollable extent: laid-out content plus the trailing inset.
    pub fn content_extent(&self) -> f64 {
        self.layout.content_width() + self.dismiss.trailing_inset()
    }

    /// Largest valid scroll offset for a viewport of `viewport_width`.
    pub fn max_scroll(&self, viewport_width: f64) -> f64 {
        (self.content_extent() - viewport_width).max(0.0)
    }

    /// Resolve a point in `viewport` coordinates, given the horizontal scroll offset.
    pub fn target_at(&self, point: Point, viewport: Rect, scroll_offset: f64) -> ClickTarget {
        let dismiss = self.dismiss.layout(viewport);
        if dismiss.visible {
            if dismiss.button.contains(point) {
                return ClickTarget::Dismiss;
            }
            if dismiss.gap.contains(point) {
                return ClickTarget::Nothing;
            }
        }
        let content = Point::new(
            point.x - viewport.x0 + scroll_offset,
            point.y - viewport.y0,
        );
        self.layout
            .hit_item(content)
            .map_or(ClickTarget::Nothing, |slot| ClickTarget::Item(slot.handle))
    }

    /// Resolve and dispatch a click at `point`. Returns `true` if a listener ran.
    pub fn click_at(&mut self, point: Point, viewport: Rect, scroll_offset: f64) -> bool {
        match self.target_at(point, viewport, scroll_offset) {
            ClickTarget::Dismiss => self.click_dismiss(),
            ClickTarget::Item(handle) => self.click(handle),
            ClickTarget::Nothing => false,
        }
    }

    /// Dispatch a click on the item at `handle`. Returns `true` if a listener ran.
    pub fn click(&mut self, handle: ItemHandle) -> bool {
        let Some(view) = self.views.iter().find(|v| v.handle == handle) else {
            return false;
        };
        if !view.is_enabled() {
            return false;
        }
        let Some(item) = self
            .groups
            .get(handle.group)
            .and_then(|g| g.items().get(handle.item))
        else {
            return false;
        };
        match self.item_click_listener.as_mut() {
            Some(listener) => {
                listener(item, view);
                true
            }
            None => false,
        }
    }

    /// Dispatch a click on the dismiss button. Returns `true` if a listener ran.
    pub fn click_dismiss(&mut self) -> bool {
        if !self.dismiss.is_visible() {
            return false;
        }
        match self.dismiss_listener.as_mut() {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }

    fn rebuild_views(&mut self) {
        let gate = self.gate;
        let tokens = &self.tokens;
        let groups = &self.groups;
        self.views = self
            .layout
            .items()
            .iter()
            .filter_map(|slot| {
                let item = groups.get(slot.handle.group)?.items().get(slot.handle.item)?;
                Some(build_view(slot, item, gate, tokens))
            })
            .collect();
    }
}

fn build_view<I: CommandItem>(
    slot: &ItemSlot,
    item: &I,
    gate: SelectionGate,
    tokens: &CommandBarTokens,
) -> ItemView {
    let enabled = item.is_enabled();
    let selected = gate.shows_selected(item.is_selected(), enabled);
    let state = InteractionState::new(enabled, selected, false, false);
    ItemView {
        handle: slot.handle,
        role: slot.role,
        bounds: slot.bounds,
        state,
        icon: item.icon(),
        content_description: String::from(item.content_description()),
        corner_radii: slot.role.corner_radii(tokens.corner_radius),
        style: resolve(tokens, StyleVariant::Neutral, state),
    }
}
