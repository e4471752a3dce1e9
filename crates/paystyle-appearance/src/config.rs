//! The widget appearance config projection.
//!
//! Embedded payment widgets accept a JSON appearance object with two
//! parts: top-level `variables` (theme-wide knobs like the accent
//! color) and per-selector `rules`. [`AppearanceConfig`] is that
//! object; [`AppearanceConfig::from_settings`] projects a settings
//! record into it using the widget rows of the shared rule table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use paystyle_settings::{StyleKey, StyleSettings};

use crate::rules::{Surface, apply_transform, rules_for};

/// A widget appearance object: variables plus per-selector rules.
///
/// Maps are ordered so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme-wide variables (`colorPrimary`, `colorText`, ...).
    pub variables: BTreeMap<String, String>,
    /// Per-selector rule blocks, property name to value.
    pub rules: BTreeMap<String, BTreeMap<String, String>>,
}

impl AppearanceConfig {
    /// An appearance object with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a settings record into an appearance object.
    ///
    /// Unset fields contribute nothing, so an unset record projects to
    /// an empty object and the widget keeps its built-in appearance.
    /// `border_radius` maps to the `borderRadius` variable by presence:
    /// an explicit `0` becomes `"0px"`, unset is omitted entirely.
    #[must_use]
    pub fn from_settings(settings: &StyleSettings) -> Self {
        let mut config = Self::new();

        let variable_fields = [
            (StyleKey::PrimaryColor, "colorPrimary"),
            (StyleKey::BackgroundColor, "colorBackground"),
            (StyleKey::TextColor, "colorText"),
        ];
        for (key, variable) in variable_fields {
            if let Some(value) = settings.value(key) {
                config.variables.insert(variable.to_string(), value);
            }
        }
        if let Some(radius) = settings.border_radius {
            config.variables.insert("borderRadius".to_string(), format!("{radius}px"));
        }

        for rule in rules_for(Surface::Widget) {
            let Some(value) = settings.value(rule.field) else {
                continue;
            };
            config
                .rules
                .entry(rule.selector.to_string())
                .or_default()
                .insert(rule.property.to_string(), apply_transform(rule.transform, &value));
        }

        debug!(
            variables = config.variables.len(),
            selectors = config.rules.len(),
            "projected appearance config"
        );
        config
    }

    /// Merge this object into `target`, overwriting on collision.
    ///
    /// Used to layer form-specific styling over a host-provided base
    /// appearance without discarding the base's unrelated entries.
    pub fn merge_into(&self, target: &mut AppearanceConfig) {
        for (name, value) in &self.variables {
            target.variables.insert(name.clone(), value.clone());
        }
        for (selector, properties) in &self.rules {
            let block = target.rules.entry(selector.clone()).or_default();
            for (property, value) in properties {
                block.insert(property.clone(), value.clone());
            }
        }
    }

    /// Whether the object carries no variables and no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings(entries: &[(StyleKey, &str)]) -> StyleSettings {
        let mut record = StyleSettings::unset();
        for (key, value) in entries {
            record.set(*key, value);
        }
        record
    }

    #[test]
    fn unset_record_projects_to_empty() {
        let config = AppearanceConfig::from_settings(&StyleSettings::unset());
        assert!(config.is_empty());
    }

    #[test]
    fn primary_color_fans_out_to_variables_and_focus_rules() {
        let config =
            AppearanceConfig::from_settings(&settings(&[(StyleKey::PrimaryColor, "#0f8569")]));
        assert_eq!(config.variables.get("colorPrimary").map(String::as_str), Some("#0f8569"));
        assert_eq!(
            config.rules[".Tab--selected"]["boxShadow"],
            "inset 0 -2px #0f8569"
        );
        assert_eq!(
            config.rules[".Input:focus"]["boxShadow"],
            "0 0 0 1px #0f8569, 0 0 0 3px rgba(15,133,105,0.15), 0 1px 2px rgba(0, 0, 0, 0.05)"
        );
    }

    #[test]
    fn specific_text_colors_overwrite_general() {
        let config = AppearanceConfig::from_settings(&settings(&[
            (StyleKey::TextColor, "#111111"),
            (StyleKey::LabelTextColor, "#222222"),
            (StyleKey::InputTextColor, "#333333"),
        ]));
        assert_eq!(config.rules[".Label"]["color"], "#222222");
        assert_eq!(config.rules[".Input"]["color"], "#333333");
        // Selectors without a specific override keep the general color.
        assert_eq!(config.rules[".TabIcon--selected"]["fill"], "#111111");
        assert_eq!(config.variables["colorText"], "#111111");
    }

    #[test]
    fn zero_radius_is_projected_but_unset_is_omitted() {
        let config = AppearanceConfig::from_settings(&settings(&[(StyleKey::BorderRadius, "0")]));
        assert_eq!(config.variables.get("borderRadius").map(String::as_str), Some("0px"));

        let config = AppearanceConfig::from_settings(&StyleSettings::unset());
        assert_eq!(config.variables.get("borderRadius"), None);
    }

    #[test]
    fn font_sizes_carry_px_units() {
        let config = AppearanceConfig::from_settings(&settings(&[
            (StyleKey::LabelFontSize, "14"),
            (StyleKey::InputFontSize, "16"),
        ]));
        assert_eq!(config.rules[".Label"]["fontSize"], "14px");
        assert_eq!(config.rules[".Input"]["fontSize"], "16px");
        assert_eq!(config.rules[".PickerItem"]["fontSize"], "16px");
    }

    #[test]
    fn merge_into_overwrites_collisions_and_keeps_the_rest() {
        let mut base = AppearanceConfig::new();
        base.variables.insert("colorPrimary".into(), "#000000".into());
        base.variables.insert("fontFamily".into(), "system-ui".into());
        base.rules
            .entry(".Input".into())
            .or_default()
            .insert("padding".into(), "8px".into());

        let over =
            AppearanceConfig::from_settings(&settings(&[(StyleKey::PrimaryColor, "#0f8569")]));
        over.merge_into(&mut base);

        assert_eq!(base.variables["colorPrimary"], "#0f8569");
        assert_eq!(base.variables["fontFamily"], "system-ui");
        assert_eq!(base.rules[".Input"]["padding"], "8px");
        assert!(base.rules[".Input:focus"].contains_key("boxShadow"));
    }

    #[test]
    fn serializes_to_the_widget_wire_shape() {
        let config =
            AppearanceConfig::from_settings(&settings(&[(StyleKey::PrimaryColor, "#0f8569")]));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["variables"]["colorPrimary"], "#0f8569");
        assert!(json["rules"][".Tab:focus"]["boxShadow"].is_string());
    }

    proptest! {
        #[test]
        fn projection_is_total_over_arbitrary_raw_input(
            entries in proptest::collection::vec((any::<u8>(), ".{0,30}"), 0..15)
        ) {
            let mut record = StyleSettings::unset();
            for (pick, raw) in &entries {
                record.set(StyleKey::ALL[*pick as usize % StyleKey::ALL.len()], raw);
            }
            let config = AppearanceConfig::from_settings(&record);
            // Sanitization happened upstream: anything that survived to
            // a rule value is non-empty canonical text.
            for block in config.rules.values() {
                for value in block.values() {
                    prop_assert!(!value.is_empty());
                }
            }
        }
    }
}
