//! Preset resolution: theme id to fully populated settings record.
//!
//! Resolution is a right-biased layered merge:
//!
//! 1. base defaults (radius, font sizes, border and button-text colors)
//! 2. the palette mapping (four palette slots fanned out over the
//!    color fields)
//! 3. the preset's own override table (radius, label weight, and the
//!    dark-preset color corrections that the four-slot palette cannot
//!    express)
//! 4. caller-supplied overrides, when given
//!
//! Unknown theme ids resolve as the default preset, so a stale or
//! removed preset reference never breaks rendering.

use tracing::{debug, warn};

use paystyle_settings::{FontWeight, StyleKey, StyleSettings};

use crate::preset::{ThemePreset, presets};

/// Border radius used when a preset does not override it, in pixels.
pub const DEFAULT_BORDER_RADIUS_PX: u32 = 4;
/// Label font size baseline, in pixels.
pub const DEFAULT_LABEL_FONT_SIZE_PX: u32 = 14;
/// Input font size baseline, in pixels.
pub const DEFAULT_INPUT_FONT_SIZE_PX: u32 = 16;
/// Input border color baseline.
pub const DEFAULT_BORDER_COLOR: &str = "#e6e6e6";
/// Button text color baseline.
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";

/// Palette backgrounds dark enough that input text must default to
/// white even without an explicit per-preset override.
pub const DARK_BACKGROUNDS: [&str; 2] = ["#34495e", "#2c3e50"];

/// Per-preset overrides that are not derivable from the palette alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetOverrides {
    /// Corner radius in pixels (varies 0–5 across presets).
    pub border_radius: u32,
    /// Label font weight.
    pub label_font_weight: FontWeight,
    /// Label text color, when the palette text slot is wrong for labels.
    pub label_text_color: Option<&'static str>,
    /// Input text color, when it needs a fifth distinct color.
    pub input_text_color: Option<&'static str>,
    /// Border color, when the light-gray baseline would vanish.
    pub border_color: Option<&'static str>,
}

impl Default for PresetOverrides {
    fn default() -> Self {
        Self {
            border_radius: DEFAULT_BORDER_RADIUS_PX,
            label_font_weight: FontWeight::Normal,
            label_text_color: None,
            input_text_color: None,
            border_color: None,
        }
    }
}

/// The override table, keyed by preset id.
///
/// Unlisted ids get the defaults (4px radius, normal weight).
#[must_use]
pub fn overrides_for(id: &str) -> PresetOverrides {
    match id {
        "midnight" => PresetOverrides {
            border_radius: 0,
            label_font_weight: FontWeight::Bold,
            label_text_color: Some("#ffffff"),
            input_text_color: Some("#ffffff"),
            border_color: Some("#46627f"),
        },
        "sunset" => PresetOverrides {
            border_radius: 5,
            label_font_weight: FontWeight::W500,
            ..PresetOverrides::default()
        },
        "forest" => PresetOverrides {
            border_radius: 3,
            ..PresetOverrides::default()
        },
        "ocean" => PresetOverrides {
            label_font_weight: FontWeight::W500,
            ..PresetOverrides::default()
        },
        "lavender" => PresetOverrides {
            border_radius: 5,
            label_font_weight: FontWeight::W300,
            ..PresetOverrides::default()
        },
        "monochrome" => PresetOverrides {
            border_radius: 0,
            label_font_weight: FontWeight::Bold,
            ..PresetOverrides::default()
        },
        "sunshine" => PresetOverrides {
            border_radius: 5,
            label_font_weight: FontWeight::W500,
            ..PresetOverrides::default()
        },
        "coral" => PresetOverrides {
            border_radius: 3,
            ..PresetOverrides::default()
        },
        "minimal" => PresetOverrides {
            border_radius: 2,
            label_font_weight: FontWeight::W300,
            ..PresetOverrides::default()
        },
        _ => PresetOverrides::default(),
    }
}

/// The read-only catalog of built-in presets.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    presets: Vec<ThemePreset>,
}

impl ThemeCatalog {
    /// Build the catalog of built-in presets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            presets: presets::all(),
        }
    }

    /// All presets, default first.
    #[must_use]
    pub fn presets(&self) -> &[ThemePreset] {
        &self.presets
    }

    /// Look a preset up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ThemePreset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// Resolve a theme id into a fully populated settings record,
    /// optionally merging caller overrides on top (caller wins).
    ///
    /// Unknown ids resolve as `"default"`.
    #[must_use]
    pub fn resolve(&self, id: &str, overrides: Option<&StyleSettings>) -> StyleSettings {
        let preset = self.get(id).unwrap_or_else(|| {
            warn!(theme = id, "unknown theme id, resolving as default");
            &self.presets[0]
        });
        debug!(theme = preset.id, "resolving theme preset");

        let mut record = base_defaults();
        apply_palette(&mut record, preset);
        apply_overrides(&mut record, preset);

        match overrides {
            Some(over) => record.merge(over),
            None => record,
        }
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn base_defaults() -> StyleSettings {
    let mut record = StyleSettings::unset();
    record.set(StyleKey::BorderColor, DEFAULT_BORDER_COLOR);
    record.set(StyleKey::ButtonTextColor, DEFAULT_BUTTON_TEXT_COLOR);
    record.border_radius = Some(DEFAULT_BORDER_RADIUS_PX);
    record.label_font_size = Some(DEFAULT_LABEL_FONT_SIZE_PX);
    record.input_font_size = Some(DEFAULT_INPUT_FONT_SIZE_PX);
    record.label_font_weight = Some(FontWeight::Normal);
    record
}

fn apply_palette(record: &mut StyleSettings, preset: &ThemePreset) {
    let palette = &preset.palette;
    record.selected_theme = Some(preset.id.to_string());
    record.primary_color = Some(palette.primary.clone());
    record.button_background_color = Some(palette.primary.clone());
    record.button_hover_background_color = Some(palette.secondary.clone());
    record.text_color = Some(palette.text.clone());
    record.label_text_color = Some(palette.text.clone());
    record.input_text_color = Some(palette.text.clone());
    record.form_container_background_color = Some(palette.background.clone());
    record.background_color = Some(palette.background.clone());
}

fn apply_overrides(record: &mut StyleSettings, preset: &ThemePreset) {
    let overrides = overrides_for(preset.id);
    record.border_radius = Some(overrides.border_radius);
    record.label_font_weight = Some(overrides.label_font_weight);
    if let Some(color) = overrides.label_text_color {
        record.set(StyleKey::LabelTextColor, color);
    }
    if let Some(color) = overrides.input_text_color {
        record.set(StyleKey::InputTextColor, color);
    }
    if let Some(color) = overrides.border_color {
        record.set(StyleKey::BorderColor, color);
    }
    // Dark backgrounds always get white input text, even for presets
    // with no explicit override row.
    if overrides.input_text_color.is_none()
        && DARK_BACKGROUNDS.contains(&preset.palette.background.as_str())
    {
        record.set(StyleKey::InputTextColor, "#ffffff");
    }
}
