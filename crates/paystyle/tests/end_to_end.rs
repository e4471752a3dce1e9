//! End-to-end coverage: store a form's settings, apply presets, and
//! project through the full pipeline.

use paystyle::{
    AppearanceConfig, DisplayType, FormId, MemoryBackend, PageForm, SettingsStore, StyleKey,
    StyleSettings, ThemeCatalog, apply_preset, hex_to_rgba, page_css, widget_appearance,
};
use proptest::prelude::*;

fn store() -> SettingsStore<MemoryBackend> {
    SettingsStore::new(MemoryBackend::new())
}

#[test]
fn stored_settings_flow_through_both_projections() {
    let mut store = store();
    let form = FormId::from(12u64);
    store.set(&form, "primary_color", "#E74C3C");
    store.set(&form, "label_font_size", "14px");
    store.set(&form, "form_container_background_color", "#ecf0f1");

    let page = PageForm::new(form.clone(), DisplayType::Embedded, store.load_record(&form));

    let mut appearance = AppearanceConfig::new();
    assert!(widget_appearance(&page, &mut appearance));
    assert_eq!(appearance.variables["colorPrimary"], "#e74c3c");
    assert_eq!(appearance.rules[".Label"]["fontSize"], "14px");

    let css = page_css(std::slice::from_ref(&page));
    assert!(css.contains("[data-form-id=\"12\"]"));
    assert!(css.contains("#paystyle-form-12"));
    assert!(css.contains("background-color: #ecf0f1 !important;"));
    assert!(css.contains("font-size: 14px !important;"));
}

#[test]
fn specific_text_colors_win_on_their_elements() {
    let mut record = StyleSettings::unset();
    record.set(StyleKey::TextColor, "#111111");
    record.set(StyleKey::LabelTextColor, "#222222");

    let appearance = AppearanceConfig::from_settings(&record);
    assert_eq!(appearance.rules[".Label"]["color"], "#222222");
    assert_eq!(appearance.rules[".Input"]["color"], "#111111");

    let css = page_css(&[PageForm::new("1", DisplayType::Embedded, record)]);
    let general = css.find("color: #111111 !important;").unwrap();
    let label = css.find("color: #222222 !important;").unwrap();
    assert!(general < label);
}

#[test]
fn zero_radius_survives_the_whole_pipeline() {
    let mut store = store();
    let form = FormId::from(3u64);
    store.set(&form, "border_radius", "0");

    let record = store.load_record(&form);
    assert_eq!(record.border_radius, Some(0));

    let appearance = AppearanceConfig::from_settings(&record);
    assert_eq!(appearance.variables["borderRadius"], "0px");

    let css = page_css(&[PageForm::new(form, DisplayType::Embedded, record)]);
    assert!(css.contains("input[type=\"text\"]"));
    assert!(css.contains("border-radius: 0px !important;"));
}

#[test]
fn untouched_form_produces_no_output_anywhere() {
    let store = store();
    let form = FormId::from(5u64);
    assert!(store.is_untouched(&form));

    let page = PageForm::new(form, DisplayType::Embedded, store.load_record(&FormId::from(5u64)));
    let mut appearance = AppearanceConfig::new();
    assert!(!widget_appearance(&page, &mut appearance));
    assert!(appearance.is_empty());
    assert_eq!(page_css(&[page]), "");
}

#[test]
fn multiple_forms_stay_isolated_in_one_stylesheet() {
    let mut a = StyleSettings::unset();
    a.set(StyleKey::ButtonBackgroundColor, "#0f8569");
    let mut b = StyleSettings::unset();
    b.set(StyleKey::ButtonBackgroundColor, "#e74c3c");

    let css = page_css(&[
        PageForm::new("10", DisplayType::Embedded, a),
        PageForm::new("20", DisplayType::Overlay, b),
    ]);

    for line in css.lines().filter(|l| l.contains("#0f8569")) {
        assert!(!line.contains("form-id=\"20\""));
    }
    assert!(css.contains("[data-form-id=\"10\"] .paystyle-checkout-btn"));
    assert!(css.contains("[data-form-id=\"20\"] .paystyle-checkout-btn"));
    // One shared reset, before any per-form block.
    assert_eq!(css.matches("border-radius: 0;").count(), 1);
}

#[test]
fn off_site_forms_are_skipped_but_others_still_style() {
    let mut record = StyleSettings::unset();
    record.set(StyleKey::TextColor, "#111111");

    let css = page_css(&[
        PageForm::new("1", DisplayType::OffSite, record.clone()),
        PageForm::new("2", DisplayType::Embedded, record),
    ]);
    assert!(!css.contains("form-id=\"1\""));
    assert!(css.contains("form-id=\"2\""));
}

#[test]
fn applied_preset_projects_its_palette() {
    let mut store = store();
    let catalog = ThemeCatalog::new();
    let form = FormId::from(8u64);

    let record = apply_preset(&mut store, &form, "sunset", &catalog);
    let appearance = AppearanceConfig::from_settings(&record);
    assert_eq!(appearance.variables["colorPrimary"], "#e74c3c");
    assert_eq!(appearance.variables["borderRadius"], "5px");
    assert_eq!(appearance.rules[".Label"]["fontWeight"], "500");

    let css = page_css(&[PageForm::new(form, DisplayType::Embedded, record)]);
    assert!(css.contains("background-color: #e74c3c !important;"));
    assert!(css.contains("font-weight: 500 !important;"));
}

#[test]
fn unknown_preset_falls_back_to_default_end_to_end() {
    let mut store = store();
    let catalog = ThemeCatalog::new();
    let form = FormId::from(8u64);

    let record = apply_preset(&mut store, &form, "does-not-exist", &catalog);
    assert_eq!(record.selected_theme.as_deref(), Some("default"));
    assert_eq!(store.get(&form, StyleKey::PrimaryColor, ""), "#0f8569");
}

#[test]
fn preset_then_tweak_keeps_the_tweak() {
    let mut store = store();
    let catalog = ThemeCatalog::new();
    let form = FormId::from(4u64);

    apply_preset(&mut store, &form, "forest", &catalog);
    store.set(&form, "button_background_color", "#000000");

    let record = store.load_record(&form);
    assert_eq!(
        record.value(StyleKey::ButtonBackgroundColor).as_deref(),
        Some("#000000")
    );
    // The rest of the preset is intact.
    assert_eq!(record.value(StyleKey::PrimaryColor).as_deref(), Some("#27ae60"));
    assert_eq!(record.border_radius, Some(3));
}

#[test]
fn appearance_serializes_to_the_widget_schema() {
    let mut record = StyleSettings::unset();
    record.set(StyleKey::PrimaryColor, "#0f8569");
    record.set(StyleKey::BorderRadius, "0");

    let appearance = AppearanceConfig::from_settings(&record);
    let json = serde_json::to_value(&appearance).unwrap();
    assert_eq!(json["variables"]["colorPrimary"], "#0f8569");
    assert_eq!(json["variables"]["borderRadius"], "0px");
    assert_eq!(
        json["rules"][".Tab--selected"]["boxShadow"],
        "inset 0 -2px #0f8569"
    );
}

#[test]
fn hex_to_rgba_matches_documented_cases() {
    assert_eq!(hex_to_rgba("#ff0000", 1.0), "rgba(255,0,0,1.00)");
    assert_eq!(hex_to_rgba("#f00", 1.0), "rgba(255,0,0,1.00)");
    assert_eq!(hex_to_rgba("#000000", 7.5), "rgba(0,0,0,1.00)");
    assert_eq!(hex_to_rgba("bad", 1.0), "rgba(0,0,0,0)");
}

#[test]
fn reset_returns_the_form_to_silence() {
    let mut store = store();
    let catalog = ThemeCatalog::new();
    let form = FormId::from(2u64);

    apply_preset(&mut store, &form, "midnight", &catalog);
    assert!(!store.is_untouched(&form));

    store.reset(&form);
    assert!(store.is_untouched(&form));
    let page = PageForm::new(form.clone(), DisplayType::Embedded, store.load_record(&form));
    assert_eq!(page_css(&[page]), "");
}

proptest! {
    #[test]
    fn projections_are_total_over_arbitrary_submissions(
        entries in proptest::collection::vec((any::<u8>(), ".{0,20}"), 0..20)
    ) {
        let mut store = store();
        let form = FormId::from(1u64);
        for (pick, raw) in &entries {
            let key = StyleKey::ALL[*pick as usize % StyleKey::ALL.len()];
            store.set_key(&form, key, raw);
        }
        let record = store.load_record(&form);
        let _ = AppearanceConfig::from_settings(&record);
        let css = page_css(&[PageForm::new(form, DisplayType::Embedded, record)]);
        // Generated CSS never interpolates unsanitized text.
        prop_assert!(!css.contains('<'));
    }

    #[test]
    fn load_after_store_is_a_fixed_point(radius in 0u32..100, size in 8u32..40) {
        let mut store = store();
        let form = FormId::from(1u64);
        store.set_key(&form, StyleKey::BorderRadius, &radius.to_string());
        store.set_key(&form, StyleKey::LabelFontSize, &format!("{size}px"));

        let record = store.load_record(&form);
        store.store_record(&form, &record);
        prop_assert_eq!(store.load_record(&form), record);
    }
}
