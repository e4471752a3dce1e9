//! Theme presets: named, code-defined, immutable style bundles.
//!
//! A preset carries a four-slot palette plus display metadata. Presets
//! are never persisted per-form; only the chosen preset *id* is stored
//! as `selected_theme`. Expansion into a full settings record happens
//! in [`crate::catalog`].

use paystyle_settings::CssColor;

/// The four-slot color palette every preset is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Accent: focus rings, highlights, button background.
    pub primary: CssColor,
    /// Secondary accent: button hover background.
    pub secondary: CssColor,
    /// Text color.
    pub text: CssColor,
    /// Form and input backgrounds.
    pub background: CssColor,
}

/// A named theme preset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemePreset {
    /// Stable identifier, persisted as `selected_theme`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description shown in pickers.
    pub description: &'static str,
    /// The preset's palette.
    pub palette: Palette,
}

fn hex(value: &'static str) -> CssColor {
    CssColor::parse(value).expect("preset palettes hold valid hex")
}

fn palette(
    primary: &'static str,
    secondary: &'static str,
    text: &'static str,
    background: &'static str,
) -> Palette {
    Palette {
        primary: hex(primary),
        secondary: hex(secondary),
        text: hex(text),
        background: hex(background),
    }
}

/// Built-in presets.
pub mod presets {
    use super::*;

    /// The host plugin's default styling.
    #[must_use]
    pub fn default() -> ThemePreset {
        ThemePreset {
            id: "default",
            name: "Default",
            description: "The payment form's default styling",
            palette: palette("#0f8569", "#0e7c62", "#32325d", "#ffffff"),
        }
    }

    /// Dark theme with cool blue tones.
    #[must_use]
    pub fn midnight() -> ThemePreset {
        ThemePreset {
            id: "midnight",
            name: "Midnight",
            description: "Dark theme with cool blue tones",
            palette: palette("#2c3e50", "#1a252f", "#ffffff", "#34495e"),
        }
    }

    /// Warm red accents with a light background.
    #[must_use]
    pub fn sunset() -> ThemePreset {
        ThemePreset {
            id: "sunset",
            name: "Sunset",
            description: "Warm red accents with light background",
            palette: palette("#e74c3c", "#c0392b", "#2c3e50", "#ecf0f1"),
        }
    }

    /// Fresh green theme with a clean background.
    #[must_use]
    pub fn forest() -> ThemePreset {
        ThemePreset {
            id: "forest",
            name: "Forest",
            description: "Fresh green theme with clean background",
            palette: palette("#27ae60", "#219955", "#2c3e50", "#f9f9f9"),
        }
    }

    /// Calming blue palette.
    #[must_use]
    pub fn ocean() -> ThemePreset {
        ThemePreset {
            id: "ocean",
            name: "Ocean",
            description: "Calming blue palette",
            palette: palette("#3498db", "#2980b9", "#2c3e50", "#ecf0f1"),
        }
    }

    /// Elegant purple theme.
    #[must_use]
    pub fn lavender() -> ThemePreset {
        ThemePreset {
            id: "lavender",
            name: "Lavender",
            description: "Elegant purple theme",
            palette: palette("#9b59b6", "#8e44ad", "#2c3e50", "#f5f5f5"),
        }
    }

    /// Simple black and white theme.
    #[must_use]
    pub fn monochrome() -> ThemePreset {
        ThemePreset {
            id: "monochrome",
            name: "Monochrome",
            description: "Simple black and white theme",
            palette: palette("#333333", "#555555", "#333333", "#ffffff"),
        }
    }

    /// Bright and cheerful yellow accents.
    #[must_use]
    pub fn sunshine() -> ThemePreset {
        ThemePreset {
            id: "sunshine",
            name: "Sunshine",
            description: "Bright and cheerful yellow accents",
            palette: palette("#f1c40f", "#f39c12", "#34495e", "#ffffff"),
        }
    }

    /// Warm orange palette.
    #[must_use]
    pub fn coral() -> ThemePreset {
        ThemePreset {
            id: "coral",
            name: "Coral",
            description: "Warm orange palette",
            palette: palette("#e67e22", "#d35400", "#2c3e50", "#f9f9f9"),
        }
    }

    /// Clean, minimalist design.
    #[must_use]
    pub fn minimal() -> ThemePreset {
        ThemePreset {
            id: "minimal",
            name: "Minimal",
            description: "Clean, minimalist design",
            palette: palette("#bdc3c7", "#95a5a6", "#2c3e50", "#ffffff"),
        }
    }

    /// Every built-in preset, default first.
    #[must_use]
    pub fn all() -> Vec<ThemePreset> {
        vec![
            default(),
            midnight(),
            sunset(),
            forest(),
            ocean(),
            lavender(),
            monochrome(),
            sunshine(),
            coral(),
            minimal(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_have_unique_ids() {
        let presets = presets::all();
        for preset in &presets {
            assert_eq!(
                presets.iter().filter(|p| p.id == preset.id).count(),
                1,
                "duplicate preset id {}",
                preset.id
            );
        }
        assert_eq!(presets.len(), 10);
    }

    #[test]
    fn default_preset_is_first() {
        assert_eq!(presets::all()[0].id, "default");
    }

    #[test]
    fn midnight_has_dark_background() {
        let midnight = presets::midnight();
        assert_eq!(midnight.palette.background.as_str(), "#34495e");
        assert_eq!(midnight.palette.text.as_str(), "#ffffff");
    }

    #[test]
    fn palettes_are_valid_lowercased_hex() {
        for preset in presets::all() {
            for color in [
                &preset.palette.primary,
                &preset.palette.secondary,
                &preset.palette.text,
                &preset.palette.background,
            ] {
                assert!(color.is_hex(), "{} palette entry {color} not hex", preset.id);
                assert_eq!(color.as_str(), color.as_str().to_ascii_lowercase());
            }
        }
    }
}
