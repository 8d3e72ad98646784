// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-owned pill data and the accessibility description built from it.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use sprig_tokens::{IconRef, InteractionState};

/// Callback invoked when an enabled pill is clicked.
pub type PillClickHandler = Box<dyn FnMut()>;

/// Everything a pill displays, plus its click handler.
///
/// One instance per pill. The caller owns and mutates it; pills only read it, except that a
/// click invokes [`on_click`](Self::on_click).
pub struct PillMetaData {
    /// Label. Shown for text pills and always part of the content description.
    pub text: String,
    /// Click handler.
    pub on_click: Option<PillClickHandler>,
    /// Icon. When set, the pill shows the icon instead of the text.
    pub icon: Option<IconRef>,
    /// Whether the pill accepts clicks.
    pub enabled: bool,
    /// Whether the pill is selected.
    pub selected: bool,
    /// Whether a notification dot is shown after the content.
    pub notification_dot: bool,
}

impl fmt::Debug for PillMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PillMetaData")
            .field("text", &self.text)
            .field("on_click", &self.on_click.is_some())
            .field("icon", &self.icon)
            .field("enabled", &self.enabled)
            .field("selected", &self.selected)
            .field("notification_dot", &self.notification_dot)
            .finish()
    }
}

/// Compares the fields that affect rendering. Click handlers are ignored.
impl PartialEq for PillMetaData {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.icon == other.icon
            && self.enabled == other.enabled
            && self.selected == other.selected
            && self.notification_dot == other.notification_dot
    }
}

impl PillMetaData {
    /// An enabled, unselected text pill without a handler.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_click: None,
            icon: None,
            enabled: true,
            selected: false,
            notification_dot: false,
        }
    }

    /// Set the click handler.
    #[must_use]
    pub fn with_on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Show `icon` instead of the text. [`IconRef::NONE`] clears it.
    #[must_use]
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = icon.get();
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the selected flag.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the notification dot flag.
    #[must_use]
    pub fn with_notification_dot(mut self, dot: bool) -> Self {
        self.notification_dot = dot;
        self
    }

    /// True when the pill shows an icon rather than text.
    pub fn is_icon_pill(&self) -> bool {
        self.icon.is_some()
    }

    /// The interaction state for this data combined with live hover and focus.
    pub fn state(&self, hovered: bool, focused: bool) -> InteractionState {
        InteractionState::new(self.enabled, self.selected, hovered, focused)
    }

    /// Invoke the handler if the pill is enabled. Returns whether it ran.
    pub fn click(&mut self) -> bool {
        if !self.enabled {
            tracing::trace!(text = %self.text, "ignored click on disabled pill");
            return false;
        }
        match self.on_click.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

/// The words used in a pill's content description.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PillStrings {
    /// Said for a selected pill.
    pub selected: String,
    /// Said for an unselected pill.
    pub not_selected: String,
    /// Said for an enabled pill.
    pub enabled: String,
    /// Said for a disabled pill.
    pub disabled: String,
}

impl Default for PillStrings {
    fn default() -> Self {
        Self {
            selected: "Selected".into(),
            not_selected: "Not selected".into(),
            enabled: "Enabled".into(),
            disabled: "Disabled".into(),
        }
    }
}

impl PillStrings {
    /// `"{text} {selection} {enablement}"` for `meta`.
    ///
    /// ```
    /// use sprig_pill::{PillMetaData, PillStrings};
    ///
    /// let meta = PillMetaData::new("Photos").with_selected(true);
    /// assert_eq!(PillStrings::default().describe(&meta), "Photos Selected Enabled");
    /// ```
    pub fn describe(&self, meta: &PillMetaData) -> String {
        let selection = if meta.selected {
            &self.selected
        } else {
            &self.not_selected
        };
        let enablement = if meta.enabled {
            &self.enabled
        } else {
            &self.disabled
        };
        let mut out =
            String::with_capacity(meta.text.len() + selection.len() + enablement.len() + 2);
        out.push_str(&meta.text);
        out.push(' ');
        out.push_str(selection);
        out.push(' ');
        out.push_str(enablement);
        out
    }
}
