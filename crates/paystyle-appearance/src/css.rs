//! The page stylesheet projection.
//!
//! Some form fields are ordinary DOM elements on the host page rather
//! than part of the embedded widget, so they are styled with generated
//! CSS. Every declaration carries `!important` to beat host page
//! styles, and every rule is double-scoped under both form roots (the
//! `data-form-id` attribute and the id-based container) so either
//! markup variant is covered.

use std::fmt::Write as _;

use tracing::debug;

use paystyle_settings::{FormId, StyleKey, StyleSettings};

use crate::rules::{Surface, ValueTransform, apply_transform, rules_for};

/// Prefix of the id-based form container selector.
pub const FORM_ID_PREFIX: &str = "paystyle-form-";
/// Class of the checkout button.
pub const CHECKOUT_BUTTON_CLASS: &str = "paystyle-checkout-btn";
/// Class of the apply-coupon button.
pub const COUPON_BUTTON_CLASS: &str = "paystyle-apply-coupon";
/// Class of the admin preview wrapper, styled alongside the live form.
pub const PREVIEW_WRAP_CLASS: &str = "paystyle-preview-wrap";

/// Container layout applied whenever a container background is set.
const CONTAINER_EXTRAS: [(&str, &str); 4] = [
    ("padding", "30px"),
    ("border-radius", "4px"),
    ("max-width", "460px"),
    ("margin", "0 auto"),
];

/// Buttons keep square corners unless a per-form block overrides them.
const GLOBAL_BUTTON_RESET: &str =
    ".paystyle-checkout-btn,\n.paystyle-apply-coupon {\n  border-radius: 0;\n}\n";

/// Generate the scoped stylesheet for one form.
///
/// An unset record still produces the unconditional button
/// border-radius block (radius `0` when unset), matching the global
/// reset so per-form output is self-contained.
#[must_use]
pub fn form_css(form: &FormId, settings: &StyleSettings) -> String {
    let scopes = [
        format!("[data-form-id=\"{form}\"]"),
        format!("#{FORM_ID_PREFIX}{form}"),
    ];
    let mut css = String::new();

    if let Some(background) = settings.value(StyleKey::FormContainerBackgroundColor) {
        let mut declarations = vec![("background-color", background.clone())];
        declarations
            .extend(CONTAINER_EXTRAS.map(|(property, value)| (property, value.to_string())));
        push_block(&mut css, &scopes, &declarations);
        // The admin preview wrapper mirrors the container background.
        push_block(
            &mut css,
            &[format!(".{PREVIEW_WRAP_CLASS}")],
            &[("background", background)],
        );
    }

    for key in StyleKey::ALL {
        let Some(value) = settings.value(key) else {
            continue;
        };
        for (property, transform, selectors) in buckets_for(key) {
            let rendered = apply_transform(transform, &value);
            let scoped: Vec<String> = selectors
                .iter()
                .flat_map(|selector| scopes.iter().map(move |scope| format!("{scope} {selector}")))
                .collect();
            push_block(&mut css, &scoped, &[(property, rendered)]);
        }
    }

    let radius = settings.border_radius.unwrap_or(0);
    let buttons: Vec<String> = [CHECKOUT_BUTTON_CLASS, COUPON_BUTTON_CLASS]
        .iter()
        .flat_map(|class| scopes.iter().map(move |scope| format!("{scope} .{class}")))
        .collect();
    push_block(&mut css, &buttons, &[("border-radius", format!("{radius}px"))]);

    css
}

/// Generate the combined stylesheet for every styled form on a page:
/// one global button reset, then each form's scoped block in order.
///
/// An empty form list produces an empty stylesheet.
#[must_use]
pub fn page_css(forms: &[(FormId, StyleSettings)]) -> String {
    if forms.is_empty() {
        return String::new();
    }

    let mut css = String::from(GLOBAL_BUTTON_RESET);
    for (form, settings) in forms {
        css.push_str(&form_css(form, settings));
    }
    debug!(forms = forms.len(), bytes = css.len(), "generated page stylesheet");
    css
}

/// Page-surface rows for `key`, grouped by property in table order.
fn buckets_for(key: StyleKey) -> Vec<(&'static str, ValueTransform, Vec<&'static str>)> {
    let mut buckets: Vec<(&'static str, ValueTransform, Vec<&'static str>)> = Vec::new();
    let rows = rules_for(Surface::Page).filter(|rule| rule.field == key);
    for rule in rows {
        match buckets.iter_mut().find(|(p, ..)| *p == rule.property) {
            Some((_, _, selectors)) => selectors.push(rule.selector),
            None => buckets.push((rule.property, rule.transform, vec![rule.selector])),
        }
    }
    buckets
}

fn push_block(css: &mut String, selectors: &[String], declarations: &[(&str, String)]) {
    css.push_str(&selectors.join(",\n"));
    css.push_str(" {\n");
    for (property, value) in declarations {
        let _ = writeln!(css, "  {property}: {value} !important;");
    }
    css.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(entries: &[(StyleKey, &str)]) -> StyleSettings {
        let mut record = StyleSettings::unset();
        for (key, value) in entries {
            record.set(*key, value);
        }
        record
    }

    #[test]
    fn rules_are_scoped_under_both_form_roots() {
        let css = form_css(
            &FormId::from("42"),
            &settings(&[(StyleKey::BackgroundColor, "#ffffff")]),
        );
        assert!(css.contains("[data-form-id=\"42\"] input[type=\"text\"]"));
        assert!(css.contains("#paystyle-form-42 input[type=\"text\"]"));
        assert!(css.contains("background-color: #ffffff !important;"));
    }

    #[test]
    fn container_background_brings_layout_extras_and_preview() {
        let css = form_css(
            &FormId::from("1"),
            &settings(&[(StyleKey::FormContainerBackgroundColor, "#f9f9f9")]),
        );
        assert!(css.contains("padding: 30px !important;"));
        assert!(css.contains("max-width: 460px !important;"));
        assert!(css.contains("margin: 0 auto !important;"));
        assert!(css.contains(".paystyle-preview-wrap {\n  background: #f9f9f9 !important;"));
    }

    #[test]
    fn specific_text_colors_are_emitted_after_general() {
        let css = form_css(
            &FormId::from("1"),
            &settings(&[
                (StyleKey::TextColor, "#111111"),
                (StyleKey::LabelTextColor, "#222222"),
            ]),
        );
        let general = css.find("color: #111111 !important;").unwrap();
        let label = css.find("color: #222222 !important;").unwrap();
        assert!(general < label, "label color must come after general text color");
    }

    #[test]
    fn zero_radius_is_emitted_and_distinct_from_unset() {
        let css = form_css(&FormId::from("1"), &settings(&[(StyleKey::BorderRadius, "0")]));
        assert!(css.contains("border-radius: 0px !important;"));
        assert!(css.contains("input[type=\"checkbox\"]"));

        // Unset radius styles no inputs, but buttons still get the
        // unconditional 0px block.
        let css = form_css(&FormId::from("1"), &StyleSettings::unset());
        assert!(!css.contains("input[type=\"checkbox\"]"));
        assert!(css.contains(".paystyle-checkout-btn"));
        assert!(css.contains("border-radius: 0px !important;"));
    }

    #[test]
    fn buttons_share_background_and_border_color() {
        let css = form_css(
            &FormId::from("1"),
            &settings(&[
                (StyleKey::ButtonBackgroundColor, "#0f8569"),
                (StyleKey::ButtonHoverBackgroundColor, "#0e7c62"),
            ]),
        );
        assert!(css.contains(".paystyle-checkout-btn,"));
        assert!(css.contains(".paystyle-apply-coupon"));
        assert!(css.contains("background-color: #0f8569 !important;"));
        assert!(css.contains("border-color: #0f8569 !important;"));
        assert!(css.contains(".paystyle-checkout-btn:hover"));
        assert!(css.contains("background-color: #0e7c62 !important;"));
    }

    #[test]
    fn page_css_prepends_one_global_reset() {
        let forms = vec![
            (FormId::from("1"), settings(&[(StyleKey::TextColor, "#111111")])),
            (FormId::from("2"), settings(&[(StyleKey::TextColor, "#222222")])),
        ];
        let css = page_css(&forms);
        assert!(css.starts_with(GLOBAL_BUTTON_RESET));
        assert_eq!(css.matches("border-radius: 0;").count(), 1);
    }

    #[test]
    fn forms_do_not_leak_into_each_other() {
        let forms = vec![
            (FormId::from("1"), settings(&[(StyleKey::TextColor, "#111111")])),
            (FormId::from("2"), settings(&[(StyleKey::TextColor, "#222222")])),
        ];
        let css = page_css(&forms);
        for line in css.lines().filter(|l| l.contains("#111111")) {
            assert!(!line.contains("form-id=\"2\""));
        }
        assert!(css.contains("[data-form-id=\"1\"] label"));
        assert!(css.contains("[data-form-id=\"2\"] label"));
    }

    #[test]
    fn empty_form_list_yields_empty_stylesheet() {
        assert_eq!(page_css(&[]), "");
    }

    #[test]
    fn selected_theme_never_reaches_the_stylesheet() {
        let css = form_css(
            &FormId::from("1"),
            &settings(&[(StyleKey::SelectedTheme, "midnight")]),
        );
        assert!(!css.contains("midnight"));
    }
}
