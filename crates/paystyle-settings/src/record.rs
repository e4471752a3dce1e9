//! The per-form style record.
//!
//! [`StyleSettings`] is the unit both projectors consume: one optional
//! slot per recognized key. `None` means "unset — let the host widget
//! or page stylesheet decide"; it is a first-class state, distinct
//! from any explicit value (including `border_radius: Some(0)`).

use crate::key::StyleKey;
use crate::value::{CssColor, FontWeight, px_value, sanitize_theme_id};

/// One form's style settings. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleSettings {
    /// Applied theme preset id, if any.
    pub selected_theme: Option<String>,
    /// Outer form container background.
    pub form_container_background_color: Option<CssColor>,
    /// Input/select/textarea background.
    pub background_color: Option<CssColor>,
    /// General text color.
    pub text_color: Option<CssColor>,
    /// Label-specific text color (wins over `text_color` on labels).
    pub label_text_color: Option<CssColor>,
    /// Input-specific text color (wins over `text_color` on inputs).
    pub input_text_color: Option<CssColor>,
    /// Input border color.
    pub border_color: Option<CssColor>,
    /// Accent color for focus states and highlights.
    pub primary_color: Option<CssColor>,
    /// Button background.
    pub button_background_color: Option<CssColor>,
    /// Button text color.
    pub button_text_color: Option<CssColor>,
    /// Button hover background.
    pub button_hover_background_color: Option<CssColor>,
    /// Corner radius in pixels. `Some(0)` is meaningful and not "unset".
    pub border_radius: Option<u32>,
    /// Label font size in pixels.
    pub label_font_size: Option<u32>,
    /// Label font weight.
    pub label_font_weight: Option<FontWeight>,
    /// Input font size in pixels.
    pub input_font_size: Option<u32>,
}

impl StyleSettings {
    /// A record with every field unset.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// The canonical textual value for `key`, or `None` when unset.
    #[must_use]
    pub fn value(&self, key: StyleKey) -> Option<String> {
        match key {
            StyleKey::SelectedTheme => self.selected_theme.clone(),
            StyleKey::FormContainerBackgroundColor => {
                self.form_container_background_color.as_ref().map(|c| c.as_str().to_string())
            }
            StyleKey::BackgroundColor => self.background_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::TextColor => self.text_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::LabelTextColor => self.label_text_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::InputTextColor => self.input_text_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::BorderColor => self.border_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::PrimaryColor => self.primary_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::ButtonBackgroundColor => {
                self.button_background_color.as_ref().map(|c| c.as_str().to_string())
            }
            StyleKey::ButtonTextColor => self.button_text_color.as_ref().map(|c| c.as_str().to_string()),
            StyleKey::ButtonHoverBackgroundColor => {
                self.button_hover_background_color.as_ref().map(|c| c.as_str().to_string())
            }
            StyleKey::BorderRadius => self.border_radius.map(|n| n.to_string()),
            StyleKey::LabelFontSize => self.label_font_size.map(|n| n.to_string()),
            StyleKey::LabelFontWeight => self.label_font_weight.map(|w| w.as_str().to_string()),
            StyleKey::InputFontSize => self.input_font_size.map(|n| n.to_string()),
        }
    }

    /// Assign a raw value to `key`, sanitizing per the key's kind.
    ///
    /// Empty or invalid input clears the field, except font weights,
    /// where non-empty invalid input falls back to
    /// [`FontWeight::Normal`].
    pub fn set(&mut self, key: StyleKey, raw: &str) {
        let color = || CssColor::parse(raw);
        match key {
            StyleKey::SelectedTheme => {
                let slug = sanitize_theme_id(raw);
                self.selected_theme = (!slug.is_empty()).then_some(slug);
            }
            StyleKey::FormContainerBackgroundColor => self.form_container_background_color = color(),
            StyleKey::BackgroundColor => self.background_color = color(),
            StyleKey::TextColor => self.text_color = color(),
            StyleKey::LabelTextColor => self.label_text_color = color(),
            StyleKey::InputTextColor => self.input_text_color = color(),
            StyleKey::BorderColor => self.border_color = color(),
            StyleKey::PrimaryColor => self.primary_color = color(),
            StyleKey::ButtonBackgroundColor => self.button_background_color = color(),
            StyleKey::ButtonTextColor => self.button_text_color = color(),
            StyleKey::ButtonHoverBackgroundColor => self.button_hover_background_color = color(),
            StyleKey::BorderRadius => self.border_radius = px_value(raw),
            StyleKey::LabelFontSize => self.label_font_size = px_value(raw),
            StyleKey::LabelFontWeight => {
                let trimmed = raw.trim();
                self.label_font_weight = (!trimmed.is_empty())
                    .then(|| FontWeight::parse(trimmed).unwrap_or(FontWeight::Normal));
            }
            StyleKey::InputFontSize => self.input_font_size = px_value(raw),
        }
    }

    /// Revert `key` to unset.
    pub fn clear(&mut self, key: StyleKey) {
        match key {
            StyleKey::SelectedTheme => self.selected_theme = None,
            StyleKey::FormContainerBackgroundColor => self.form_container_background_color = None,
            StyleKey::BackgroundColor => self.background_color = None,
            StyleKey::TextColor => self.text_color = None,
            StyleKey::LabelTextColor => self.label_text_color = None,
            StyleKey::InputTextColor => self.input_text_color = None,
            StyleKey::BorderColor => self.border_color = None,
            StyleKey::PrimaryColor => self.primary_color = None,
            StyleKey::ButtonBackgroundColor => self.button_background_color = None,
            StyleKey::ButtonTextColor => self.button_text_color = None,
            StyleKey::ButtonHoverBackgroundColor => self.button_hover_background_color = None,
            StyleKey::BorderRadius => self.border_radius = None,
            StyleKey::LabelFontSize => self.label_font_size = None,
            StyleKey::LabelFontWeight => self.label_font_weight = None,
            StyleKey::InputFontSize => self.input_font_size = None,
        }
    }

    /// Right-biased shallow merge: any field set in `over` wins.
    #[must_use]
    pub fn merge(mut self, over: &StyleSettings) -> StyleSettings {
        for key in StyleKey::ALL {
            if let Some(value) = over.value(key) {
                self.set(key, &value);
            }
        }
        self
    }

    /// Whether every field is unset.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        StyleKey::ALL.into_iter().all(|key| self.value(key).is_none())
    }

    /// Whether every field carries a value (a fully resolved record,
    /// as produced by theme resolution).
    #[must_use]
    pub fn is_fully_populated(&self) -> bool {
        StyleKey::ALL.into_iter().all(|key| self.value(key).is_some())
    }
}
