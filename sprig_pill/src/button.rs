// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single pill button: retained interaction state, transitions, and per-frame output.
//!
//! ## Rendering
//!
//! [`PillButton::render`] combines the caller's [`PillMetaData`] with the live hover and
//! focus flags, resolves the result against a token table, and returns a [`PillFrame`].
//! The button remembers the state it rendered last, so it can tell edges from levels:
//!
//! - The selection pulse fires only on an unselected to selected edge. Rendering an already
//!   selected pill again, including the very first render, does not pulse.
//! - Background, icon, and text colors animate toward each new resolved value. The first
//!   render snaps. [`PillFrame::style`] always carries the new targets.
//!
//! Disabling a selected pill shows the disabled treatment; that rule lives in the token table
//! ([`StateColors::resolve`](sprig_tokens::StateColors::resolve)), not here.
//!
//! ```
//! use sprig_pill::{PillButton, PillMetaData, PillStrings};
//! use sprig_tokens::{PillButtonTokens, StyleVariant};
//!
//! let tokens = PillButtonTokens::default();
//! let strings = PillStrings::default();
//! let mut button = PillButton::new();
//!
//! let mut meta = PillMetaData::new("Music");
//! button.render(&meta, StyleVariant::Neutral, &tokens, &strings);
//! meta.selected = true;
//! let frame = button.render(&meta, StyleVariant::Neutral, &tokens, &strings);
//! assert!(frame.pulsing);
//! assert_eq!(frame.content_description, "Music Selected Enabled");
//! ```

use alloc::string::String;
use core::time::Duration;

use kurbo::{Affine, Insets, Rect, RoundedRect};
use sprig_tokens::{
    Color, ColorTransition, IconRef, InteractionState, PillButtonTokens, PressPulse,
    ResolvedStyle, StyleVariant, Theme, resolve,
};

use crate::metadata::{PillMetaData, PillStrings};

/// Leading space before an icon.
pub const ICON_LEADING: f64 = 18.0;
/// Leading space before a text label.
pub const TEXT_LEADING: f64 = 16.0;
/// Trailing space when no notification dot is shown.
pub const TRAILING: f64 = 16.0;
/// Space between the content and the notification dot.
pub const DOT_GAP: f64 = 2.0;
/// Diameter of the notification dot.
pub const DOT_SIZE: f64 = 6.0;
/// Space after the dot on an icon pill.
pub const DOT_TRAILING_ICON: f64 = 10.0;
/// Space after the dot on a text pill.
pub const DOT_TRAILING_TEXT: f64 = 8.0;

/// What a pill shows inside its capsule.
#[derive(Clone, Debug, PartialEq)]
pub enum PillLabel {
    /// An icon; the text is hidden and only spoken.
    Icon(IconRef),
    /// One line of text, ellipsized when it does not fit.
    Text(String),
}

/// Horizontal arrangement of a pill's content.
#[derive(Clone, Debug, PartialEq)]
pub struct PillContent {
    /// Icon or text.
    pub label: PillLabel,
    /// Space before the label.
    pub leading: f64,
    /// Notification dot as `(gap before, diameter)`, when shown.
    pub dot: Option<(f64, f64)>,
    /// Space after the label, or after the dot when one is shown.
    pub trailing: f64,
}

impl PillContent {
    /// Arrange `meta`'s content.
    pub fn for_meta(meta: &PillMetaData) -> Self {
        let (label, leading, dot_trailing) = match meta.icon {
            Some(icon) => (PillLabel::Icon(icon), ICON_LEADING, DOT_TRAILING_ICON),
            None => (
                PillLabel::Text(meta.text.clone()),
                TEXT_LEADING,
                DOT_TRAILING_TEXT,
            ),
        };
        let (dot, trailing) = if meta.notification_dot {
            (Some((DOT_GAP, DOT_SIZE)), dot_trailing)
        } else {
            (None, TRAILING)
        };
        Self {
            label,
            leading,
            dot,
            trailing,
        }
    }

    /// Width taken by everything except the label itself.
    pub fn chrome_width(&self) -> f64 {
        let dot = self.dot.map_or(0.0, |(gap, size)| gap + size);
        self.leading + dot + self.trailing
    }

    /// Padding around the label, with `vertical` above and below.
    pub fn insets(&self, vertical: f64) -> Insets {
        Insets::new(
            self.leading,
            vertical,
            self.chrome_width() - self.leading,
            vertical,
        )
    }
}

/// Everything needed to draw one pill for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PillFrame {
    /// The state the frame was resolved for.
    pub state: InteractionState,
    /// Resolved target colors and focus ring.
    pub style: ResolvedStyle,
    /// Background color on screen now, part way through any transition.
    pub background: Color,
    /// Icon tint on screen now.
    pub icon: Color,
    /// Label color on screen now.
    pub text: Color,
    /// Press pulse scale, `1.0` at rest.
    pub scale: f64,
    /// True if this render started the selection pulse.
    pub pulsing: bool,
    /// Content arrangement.
    pub content: PillContent,
    /// Spoken description.
    pub content_description: String,
    /// Minimum capsule height.
    pub min_height: f64,
    /// Space above and below the label.
    pub vertical_padding: f64,
    /// Icon edge length.
    pub icon_size: f64,
    /// Whether a click would reach the handler.
    pub clickable: bool,
}

impl PillFrame {
    /// Notification dot color, when a dot is shown.
    pub fn notification_dot(&self) -> Option<Color> {
        self.content
            .dot
            .map(|_| self.style.notification_dot)
    }

    /// The capsule filling `bounds`, fully rounded on the short axis.
    pub fn shape(&self, bounds: Rect) -> RoundedRect {
        let radius = bounds.height().min(bounds.width()) / 2.0;
        RoundedRect::from_rect(bounds, radius)
    }

    /// Pulse transform for a pill drawn at `bounds`, scaling about its center.
    pub fn transform(&self, bounds: Rect) -> Affine {
        Affine::scale_about(self.scale, bounds.center())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Fills {
    background: ColorTransition,
    icon: ColorTransition,
    text: ColorTransition,
}

impl Fills {
    fn new(style: &ResolvedStyle) -> Self {
        Self {
            background: ColorTransition::new(style.background),
            icon: ColorTransition::new(style.icon),
            text: ColorTransition::new(style.text),
        }
    }

    fn retarget(&mut self, style: &ResolvedStyle) -> bool {
        let background = self.background.retarget(style.background);
        let icon = self.icon.retarget(style.icon);
        let text = self.text.retarget(style.text);
        background || icon || text
    }

    fn advance(&mut self, dt: Duration) {
        self.background.advance(dt);
        self.icon.advance(dt);
        self.text.advance(dt);
    }

    fn is_running(&self) -> bool {
        self.background.is_running() || self.icon.is_running() || self.text.is_running()
    }
}

/// Retained state for one pill.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PillButton {
    previous: Option<InteractionState>,
    hovered: bool,
    focused: bool,
    fills: Option<Fills>,
    pulse: PressPulse,
}

impl PillButton {
    /// A pill that has not rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the live hover flag. Takes effect on the next render.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Set the live focus flag. Takes effect on the next render.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Live hover flag.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Live focus flag.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The state seen by the last render.
    pub fn previous_state(&self) -> Option<InteractionState> {
        self.previous
    }

    /// Press pulse.
    pub fn pulse(&self) -> &PressPulse {
        &self.pulse
    }

    /// True while a color or the pulse is animating.
    pub fn is_animating(&self) -> bool {
        self.pulse.is_running() || self.fills.is_some_and(|f| f.is_running())
    }

    /// Advance transitions by the frame time `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(fills) = self.fills.as_mut() {
            fills.advance(dt);
        }
        self.pulse.advance(dt);
    }

    /// Forget the previous state, so the next render snaps and does not pulse.
    pub fn reset(&mut self) {
        *self = Self {
            hovered: self.hovered,
            focused: self.focused,
            ..Self::default()
        };
    }

    /// Resolve `meta` with `tokens` and produce this frame's output.
    pub fn render(
        &mut self,
        meta: &PillMetaData,
        variant: StyleVariant,
        tokens: &PillButtonTokens,
        strings: &PillStrings,
    ) -> PillFrame {
        let state = meta.state(self.hovered, self.focused);
        let style = resolve(tokens, variant, state);

        let pulsing = self
            .previous
            .is_some_and(|prev| state.rising(prev).is_selected());
        if pulsing {
            tracing::debug!(text = %meta.text, "selection pulse");
            self.pulse.trigger();
        }
        let fills = match self.fills.as_mut() {
            Some(fills) => {
                if fills.retarget(&style) {
                    tracing::trace!(text = %meta.text, ?state, "color transition");
                }
                *fills
            }
            None => {
                let fills = Fills::new(&style);
                self.fills = Some(fills);
                fills
            }
        };
        self.previous = Some(state);

        PillFrame {
            state,
            background: fills.background.value(),
            icon: fills.icon.value(),
            text: fills.text.value(),
            scale: self.pulse.scale(),
            pulsing,
            content: PillContent::for_meta(meta),
            content_description: strings.describe(meta),
            min_height: tokens.min_height,
            vertical_padding: tokens.vertical_padding,
            icon_size: tokens.icon_size,
            clickable: meta.enabled,
            style,
        }
    }

    /// Render with `overridden` tokens, falling back to the theme's pill button table.
    pub fn render_themed(
        &mut self,
        meta: &PillMetaData,
        variant: StyleVariant,
        overridden: Option<&PillButtonTokens>,
        theme: &Theme,
        strings: &PillStrings,
    ) -> PillFrame {
        self.render(meta, variant, theme.pill_button_or(overridden), strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_tokens::StateColors;

    fn fixture() -> (PillButtonTokens, PillStrings) {
        (PillButtonTokens::default(), PillStrings::default())
    }

    fn render(b: &mut PillButton, meta: &PillMetaData, tokens: &PillButtonTokens) -> PillFrame {
        b.render(meta, StyleVariant::Neutral, tokens, &PillStrings::default())
    }

    // First render of an already selected pill: no pulse, background snapped.
    #[test]
    fn first_render_snaps_without_pulse() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let meta = PillMetaData::new("A").with_selected(true);
        let f = render(&mut b, &meta, &tokens);
        assert!(!f.pulsing);
        assert_eq!(f.background, f.style.background);
        assert!(!b.is_animating());
    }

    #[test]
    fn pulse_only_on_selection_edge() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let mut meta = PillMetaData::new("A");
        render(&mut b, &meta, &tokens);
        meta.selected = true;
        assert!(render(&mut b, &meta, &tokens).pulsing);
        // Same state again: level, not edge.
        assert!(!render(&mut b, &meta, &tokens).pulsing);
        meta.selected = false;
        assert!(!render(&mut b, &meta, &tokens).pulsing);
        assert_eq!(b.pulse().trigger_count(), 1);
    }

    #[test]
    fn hover_does_not_pulse() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let meta = PillMetaData::new("A").with_selected(true);
        render(&mut b, &meta, &tokens);
        b.set_hovered(true);
        let f = render(&mut b, &meta, &tokens);
        assert!(!f.pulsing);
        assert!(f.state.is_hovered());
        assert!(!f.style.border.is_empty());
    }

    #[test]
    fn background_animates_and_settles() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let mut meta = PillMetaData::new("A");
        let before = render(&mut b, &meta, &tokens).background;
        meta.selected = true;
        let f = render(&mut b, &meta, &tokens);
        assert_eq!(f.background, before);
        assert_ne!(f.style.background, before);
        b.advance(Duration::from_millis(500));
        let settled = render(&mut b, &meta, &tokens);
        assert_eq!(settled.background, settled.style.background);
        assert!(!b.is_animating());
    }

    // Targets are exposed immediately; on-screen content colors catch up.
    #[test]
    fn content_colors_transition_with_background() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let mut meta = PillMetaData::new("A");
        let before = render(&mut b, &meta, &tokens);
        meta.selected = true;
        let f = render(&mut b, &meta, &tokens);
        assert_eq!(f.style.text, tokens.neutral.text.selected);
        assert_eq!(f.style.icon, tokens.neutral.icon.selected);
        assert_eq!((f.text, f.icon), (before.text, before.icon));
        b.advance(Duration::from_millis(200));
        let settled = render(&mut b, &meta, &tokens);
        assert_eq!((settled.text, settled.icon), (settled.style.text, settled.style.icon));
    }

    // Reselecting mid-transition restarts from the on-screen color instead of queueing.
    #[test]
    fn retarget_supersedes_running_transition() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let mut meta = PillMetaData::new("A");
        let rest = render(&mut b, &meta, &tokens).background;
        meta.selected = true;
        render(&mut b, &meta, &tokens);
        b.advance(Duration::from_millis(100));
        meta.selected = false;
        let f = render(&mut b, &meta, &tokens);
        assert_eq!(f.style.background, rest);
        assert_ne!(f.background, rest);
        b.advance(Duration::from_millis(200));
        assert_eq!(render(&mut b, &meta, &tokens).background, rest);
    }

    #[test]
    fn disabled_overrides_selected() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let meta = PillMetaData::new("A").with_selected(true).with_enabled(false);
        let f = render(&mut b, &meta, &tokens);
        assert_eq!(f.style.background, tokens.neutral.background.disabled);
        assert!(!f.clickable);
    }

    #[test]
    fn selected_disabled_token_is_honored() {
        let (mut tokens, _) = fixture();
        let custom = Color::from_rgb8(1, 2, 3);
        tokens.neutral.background = StateColors {
            selected_disabled: Some(custom),
            ..tokens.neutral.background
        };
        let mut b = PillButton::new();
        let meta = PillMetaData::new("A").with_selected(true).with_enabled(false);
        assert_eq!(render(&mut b, &meta, &tokens).style.background, custom);
    }

    #[test]
    fn content_layout_for_text_and_icon() {
        let text = PillContent::for_meta(&PillMetaData::new("A"));
        assert_eq!((text.leading, text.trailing, text.dot), (16.0, 16.0, None));
        assert_eq!(text.label, PillLabel::Text("A".into()));

        let icon = PillContent::for_meta(
            &PillMetaData::new("A")
                .with_icon(IconRef(4))
                .with_notification_dot(true),
        );
        assert_eq!(icon.label, PillLabel::Icon(IconRef(4)));
        assert_eq!((icon.leading, icon.trailing), (18.0, 10.0));
        assert_eq!(icon.chrome_width(), 18.0 + 2.0 + 6.0 + 10.0);

        let dotted = PillContent::for_meta(&PillMetaData::new("A").with_notification_dot(true));
        assert_eq!(dotted.trailing, 8.0);
        assert_eq!(dotted.insets(6.0), Insets::new(16.0, 6.0, 16.0, 6.0));
    }

    #[test]
    fn dot_color_only_when_shown() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        assert_eq!(render(&mut b, &PillMetaData::new("A"), &tokens).notification_dot(), None);
        let f = render(
            &mut b,
            &PillMetaData::new("A").with_notification_dot(true),
            &tokens,
        );
        assert_eq!(f.notification_dot(), Some(tokens.neutral.notification_dot.rest));
    }

    #[test]
    fn metrics_come_from_tokens() {
        let (mut tokens, strings) = fixture();
        tokens.min_height = 40.0;
        let mut b = PillButton::new();
        let f = b.render(&PillMetaData::new("A"), StyleVariant::Brand, &tokens, &strings);
        assert_eq!((f.min_height, f.vertical_padding, f.icon_size), (40.0, 6.0, 16.0));
    }

    #[test]
    fn override_wins_over_theme() {
        let theme = Theme::default();
        let mut tokens = PillButtonTokens::default();
        tokens.icon_size = 20.0;
        let mut b = PillButton::new();
        let meta = PillMetaData::new("A");
        let strings = PillStrings::default();
        let themed = b.render_themed(&meta, StyleVariant::Neutral, None, &theme, &strings);
        assert_eq!(themed.icon_size, 16.0);
        let overridden =
            b.render_themed(&meta, StyleVariant::Neutral, Some(&tokens), &theme, &strings);
        assert_eq!(overridden.icon_size, 20.0);
    }

    #[test]
    fn shape_is_capsule_and_transform_scales_about_center() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        let f = render(&mut b, &PillMetaData::new("A"), &tokens);
        let bounds = Rect::new(0.0, 0.0, 80.0, 28.0);
        assert_eq!(f.shape(bounds).radii().top_left, 14.0);
        let center = bounds.center();
        assert_eq!(f.transform(bounds) * center, center);
    }

    #[test]
    fn reset_forgets_previous_state() {
        let (tokens, _) = fixture();
        let mut b = PillButton::new();
        b.set_focused(true);
        render(&mut b, &PillMetaData::new("A"), &tokens);
        b.reset();
        assert_eq!(b.previous_state(), None);
        assert!(b.is_focused());
        assert!(!render(&mut b, &PillMetaData::new("A").with_selected(true), &tokens).pulsing);
    }
}
