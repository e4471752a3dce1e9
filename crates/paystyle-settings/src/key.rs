//! The closed set of recognized style keys.
//!
//! Every style setting a form can carry is named here. The key set is
//! deliberately closed: callers cannot invent ad-hoc keys, which keeps
//! stored metadata bounded and lets every key carry a fixed value kind
//! (and therefore a fixed sanitizer).

use crate::value::{sanitize_color, sanitize_px, sanitize_theme_id, sanitize_weight};

/// The value family a [`StyleKey`] accepts.
///
/// The kind selects the sanitizer applied on every read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A theme preset identifier (lowercased slug).
    ThemeId,
    /// A color: `#rgb`, `#rrggbb`, or `rgba(r,g,b,a)`.
    Color,
    /// A non-negative integer pixel amount.
    Px,
    /// A CSS font weight (`normal`, `bold`, or `100`–`900` in steps of 100).
    FontWeight,
}

/// A recognized style setting key.
///
/// The variant order matches the order keys are rendered, submitted,
/// and persisted in; [`StyleKey::ALL`] exposes it as the stable
/// contract surface. Adding a variant here (plus its entry in `ALL`
/// and the name tables) is the only way to extend the key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StyleKey {
    /// The applied theme preset id (empty = fully custom).
    SelectedTheme,
    /// Background of the outer form container.
    FormContainerBackgroundColor,
    /// Background of input fields, selects, and dropdowns.
    BackgroundColor,
    /// General text color for labels, inputs, and headings.
    TextColor,
    /// Label-specific text color; wins over [`StyleKey::TextColor`] on labels.
    LabelTextColor,
    /// Input-specific text color; wins over [`StyleKey::TextColor`] on inputs.
    InputTextColor,
    /// Border color for inputs and similar controls.
    BorderColor,
    /// Accent color for focus rings, highlighted tabs, and links.
    PrimaryColor,
    /// Checkout/coupon button background.
    ButtonBackgroundColor,
    /// Checkout/coupon button text color.
    ButtonTextColor,
    /// Checkout/coupon button background on hover.
    ButtonHoverBackgroundColor,
    /// Corner radius for inputs and buttons, in pixels. `0` is a real value.
    BorderRadius,
    /// Label font size in pixels.
    LabelFontSize,
    /// Label font weight.
    LabelFontWeight,
    /// Input font size in pixels.
    InputFontSize,
}

impl StyleKey {
    /// Every recognized key, in contract order.
    pub const ALL: [StyleKey; 15] = [
        Self::SelectedTheme,
        Self::FormContainerBackgroundColor,
        Self::BackgroundColor,
        Self::TextColor,
        Self::LabelTextColor,
        Self::InputTextColor,
        Self::BorderColor,
        Self::PrimaryColor,
        Self::ButtonBackgroundColor,
        Self::ButtonTextColor,
        Self::ButtonHoverBackgroundColor,
        Self::BorderRadius,
        Self::LabelFontSize,
        Self::LabelFontWeight,
        Self::InputFontSize,
    ];

    /// The key's wire/storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelectedTheme => "selected_theme",
            Self::FormContainerBackgroundColor => "form_container_background_color",
            Self::BackgroundColor => "background_color",
            Self::TextColor => "text_color",
            Self::LabelTextColor => "label_text_color",
            Self::InputTextColor => "input_text_color",
            Self::BorderColor => "border_color",
            Self::PrimaryColor => "primary_color",
            Self::ButtonBackgroundColor => "button_background_color",
            Self::ButtonTextColor => "button_text_color",
            Self::ButtonHoverBackgroundColor => "button_hover_background_color",
            Self::BorderRadius => "border_radius",
            Self::LabelFontSize => "label_font_size",
            Self::LabelFontWeight => "label_font_weight",
            Self::InputFontSize => "input_font_size",
        }
    }

    /// Look a key up by its wire/storage name.
    ///
    /// Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// The value family this key accepts.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::SelectedTheme => ValueKind::ThemeId,
            Self::FormContainerBackgroundColor
            | Self::BackgroundColor
            | Self::TextColor
            | Self::LabelTextColor
            | Self::InputTextColor
            | Self::BorderColor
            | Self::PrimaryColor
            | Self::ButtonBackgroundColor
            | Self::ButtonTextColor
            | Self::ButtonHoverBackgroundColor => ValueKind::Color,
            Self::BorderRadius | Self::LabelFontSize | Self::InputFontSize => ValueKind::Px,
            Self::LabelFontWeight => ValueKind::FontWeight,
        }
    }

    /// Sanitize a raw value for this key into its canonical stored form.
    ///
    /// Returns the empty string for invalid or empty input, except for
    /// font weights, where a non-empty invalid value falls back to
    /// `"normal"` instead of the raw input. Idempotent: sanitizing an
    /// already-sanitized value returns it unchanged.
    #[must_use]
    pub fn sanitize(self, raw: &str) -> String {
        match self.kind() {
            ValueKind::ThemeId => sanitize_theme_id(raw),
            ValueKind::Color => sanitize_color(raw),
            ValueKind::Px => sanitize_px(raw),
            ValueKind::FontWeight => sanitize_weight(raw),
        }
    }
}

impl std::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
