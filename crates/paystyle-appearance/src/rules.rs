//! The declarative projection rule table.
//!
//! Both projectors — the widget appearance config and the page
//! stylesheet — fan each style field out over several selectors. The
//! fan-out lives here as one flat table so the two outputs cannot
//! drift apart: a row names the source field, the surface it targets,
//! the selector, the property, and how the stored value is transformed
//! into the property value.
//!
//! Table order is load-bearing within a surface: later rows overwrite
//! earlier ones for the same selector/property pair, which is how the
//! label- and input-specific text colors win over the general text
//! color.

use paystyle_settings::StyleKey;

/// Which projection a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The embedded payment widget's appearance config.
    Widget,
    /// The host page stylesheet.
    Page,
}

/// How a stored value becomes a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    /// Use the stored value as-is.
    Verbatim,
    /// Append a `px` unit to a bare pixel count.
    PxSuffix,
    /// Bottom inset shadow of the given thickness, used for tab
    /// highlight bars: `inset 0 -{n}px {color}`.
    InsetShadow(u32),
    /// The three-layer focus ring built around the accent color.
    FocusRing,
}

/// One row of the projection table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Source style field.
    pub field: StyleKey,
    /// Projection this row feeds.
    pub surface: Surface,
    /// Widget rule selector, or page selector suffix scoped under the
    /// form root (empty = the form root itself).
    pub selector: &'static str,
    /// CSS property name (camelCase on the widget surface, kebab-case
    /// on the page surface, matching what each consumer expects).
    pub property: &'static str,
    /// Value transform for this row.
    pub transform: ValueTransform,
}

const fn widget(
    field: StyleKey,
    selector: &'static str,
    property: &'static str,
    transform: ValueTransform,
) -> RuleSpec {
    RuleSpec { field, surface: Surface::Widget, selector, property, transform }
}

const fn page(
    field: StyleKey,
    selector: &'static str,
    property: &'static str,
    transform: ValueTransform,
) -> RuleSpec {
    RuleSpec { field, surface: Surface::Page, selector, property, transform }
}

/// The full projection table, widget rows first, grouped by field in
/// contract key order.
pub const RULE_TABLE: &[RuleSpec] = &[
    // Widget: accent color drives tab highlights and focus rings.
    widget(StyleKey::PrimaryColor, ".Tab:focus", "boxShadow", ValueTransform::InsetShadow(4)),
    widget(StyleKey::PrimaryColor, ".Tab:hover", "boxShadow", ValueTransform::InsetShadow(4)),
    widget(StyleKey::PrimaryColor, ".Tab--selected", "boxShadow", ValueTransform::InsetShadow(2)),
    widget(StyleKey::PrimaryColor, ".Tab--selected:focus", "boxShadow", ValueTransform::InsetShadow(4)),
    widget(StyleKey::PrimaryColor, ".Input:focus", "boxShadow", ValueTransform::FocusRing),
    widget(StyleKey::PrimaryColor, ".CodeInput:focus", "boxShadow", ValueTransform::FocusRing),
    widget(StyleKey::PrimaryColor, ".CheckboxInput:focus", "boxShadow", ValueTransform::FocusRing),
    widget(StyleKey::PrimaryColor, ".PickerItem--selected", "boxShadow", ValueTransform::FocusRing),
    // Widget: general text color, then the label/input-specific colors
    // which overwrite it on their selectors.
    widget(StyleKey::TextColor, ".TabLabel", "color", ValueTransform::Verbatim),
    widget(StyleKey::TextColor, ".TabIcon--selected", "fill", ValueTransform::Verbatim),
    widget(StyleKey::TextColor, ".Label", "color", ValueTransform::Verbatim),
    widget(StyleKey::TextColor, ".Input", "color", ValueTransform::Verbatim),
    widget(StyleKey::TextColor, ".CodeInput", "color", ValueTransform::Verbatim),
    widget(StyleKey::TextColor, ".PickerItem", "color", ValueTransform::Verbatim),
    widget(StyleKey::TextColor, ".DropdownItem", "color", ValueTransform::Verbatim),
    widget(StyleKey::LabelTextColor, ".Label", "color", ValueTransform::Verbatim),
    widget(StyleKey::LabelTextColor, ".TabLabel", "color", ValueTransform::Verbatim),
    widget(StyleKey::InputTextColor, ".Input", "color", ValueTransform::Verbatim),
    widget(StyleKey::InputTextColor, ".CodeInput", "color", ValueTransform::Verbatim),
    widget(StyleKey::InputTextColor, ".PickerItem", "color", ValueTransform::Verbatim),
    widget(StyleKey::InputTextColor, ".DropdownItem", "color", ValueTransform::Verbatim),
    widget(StyleKey::BorderColor, ".Input", "borderColor", ValueTransform::Verbatim),
    widget(StyleKey::BorderColor, ".CodeInput", "borderColor", ValueTransform::Verbatim),
    widget(StyleKey::BorderColor, ".CheckboxInput", "borderColor", ValueTransform::Verbatim),
    widget(StyleKey::LabelFontSize, ".Label", "fontSize", ValueTransform::PxSuffix),
    widget(StyleKey::LabelFontSize, ".TabLabel", "fontSize", ValueTransform::PxSuffix),
    widget(StyleKey::LabelFontWeight, ".Label", "fontWeight", ValueTransform::Verbatim),
    widget(StyleKey::LabelFontWeight, ".TabLabel", "fontWeight", ValueTransform::Verbatim),
    widget(StyleKey::InputFontSize, ".Input", "fontSize", ValueTransform::PxSuffix),
    widget(StyleKey::InputFontSize, ".CodeInput", "fontSize", ValueTransform::PxSuffix),
    widget(StyleKey::InputFontSize, ".PickerItem", "fontSize", ValueTransform::PxSuffix),
    // Page: input backgrounds, plus the hosted-fields wrapper.
    page(StyleKey::BackgroundColor, "input[type=\"text\"]", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, "input[type=\"email\"]", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, "input[type=\"tel\"]", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, "input[type=\"number\"]", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, "input[type=\"date\"]", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, "select", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, "textarea", "background-color", ValueTransform::Verbatim),
    page(StyleKey::BackgroundColor, ".paystyle-fields-wrap", "background-color", ValueTransform::Verbatim),
    // Page: general text color over labels, headings, and inputs, then
    // the specific colors which overwrite it.
    page(StyleKey::TextColor, ".paystyle-label", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "label", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "legend", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, ".paystyle-total-label", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "h1", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "h2", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "h3", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "h4", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "h5", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "h6", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "input[type=\"text\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "input[type=\"email\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "input[type=\"tel\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "input[type=\"number\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "input[type=\"date\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "select", "color", ValueTransform::Verbatim),
    page(StyleKey::TextColor, "textarea", "color", ValueTransform::Verbatim),
    page(StyleKey::LabelTextColor, ".paystyle-label", "color", ValueTransform::Verbatim),
    page(StyleKey::LabelTextColor, "label", "color", ValueTransform::Verbatim),
    page(StyleKey::LabelTextColor, "legend", "color", ValueTransform::Verbatim),
    page(StyleKey::LabelTextColor, ".paystyle-total-label", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "input[type=\"text\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "input[type=\"email\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "input[type=\"tel\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "input[type=\"number\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "input[type=\"date\"]", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "select", "color", ValueTransform::Verbatim),
    page(StyleKey::InputTextColor, "textarea", "color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "input[type=\"text\"]", "border-color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "input[type=\"email\"]", "border-color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "input[type=\"tel\"]", "border-color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "input[type=\"number\"]", "border-color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "input[type=\"date\"]", "border-color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "select", "border-color", ValueTransform::Verbatim),
    page(StyleKey::BorderColor, "textarea", "border-color", ValueTransform::Verbatim),
    // Page: button surfaces.
    page(StyleKey::ButtonBackgroundColor, ".paystyle-checkout-btn", "background-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonBackgroundColor, ".paystyle-checkout-btn", "border-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonBackgroundColor, ".paystyle-apply-coupon", "background-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonBackgroundColor, ".paystyle-apply-coupon", "border-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonTextColor, ".paystyle-checkout-btn", "color", ValueTransform::Verbatim),
    page(StyleKey::ButtonTextColor, ".paystyle-apply-coupon", "color", ValueTransform::Verbatim),
    page(StyleKey::ButtonHoverBackgroundColor, ".paystyle-checkout-btn:hover", "background-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonHoverBackgroundColor, ".paystyle-checkout-btn:hover", "border-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonHoverBackgroundColor, ".paystyle-apply-coupon:hover", "background-color", ValueTransform::Verbatim),
    page(StyleKey::ButtonHoverBackgroundColor, ".paystyle-apply-coupon:hover", "border-color", ValueTransform::Verbatim),
    // Page: corner radius on text-like inputs plus the toggle controls.
    // Button radius is emitted unconditionally by the stylesheet
    // projector, so it has no row here.
    page(StyleKey::BorderRadius, "input[type=\"text\"]", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "input[type=\"email\"]", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "input[type=\"tel\"]", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "input[type=\"number\"]", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "input[type=\"date\"]", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "select", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "textarea", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "input[type=\"radio\"]", "border-radius", ValueTransform::PxSuffix),
    page(StyleKey::BorderRadius, "input[type=\"checkbox\"]", "border-radius", ValueTransform::PxSuffix),
    // Page: label typography.
    page(StyleKey::LabelFontSize, ".paystyle-label", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::LabelFontSize, "label", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::LabelFontSize, "legend", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::LabelFontSize, ".paystyle-total-label", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::LabelFontWeight, ".paystyle-label", "font-weight", ValueTransform::Verbatim),
    page(StyleKey::LabelFontWeight, "label", "font-weight", ValueTransform::Verbatim),
    page(StyleKey::LabelFontWeight, "legend", "font-weight", ValueTransform::Verbatim),
    page(StyleKey::LabelFontWeight, ".paystyle-total-label", "font-weight", ValueTransform::Verbatim),
    page(StyleKey::InputFontSize, "input[type=\"text\"]", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::InputFontSize, "input[type=\"email\"]", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::InputFontSize, "input[type=\"tel\"]", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::InputFontSize, "input[type=\"number\"]", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::InputFontSize, "input[type=\"date\"]", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::InputFontSize, "select", "font-size", ValueTransform::PxSuffix),
    page(StyleKey::InputFontSize, "textarea", "font-size", ValueTransform::PxSuffix),
];

/// Rows feeding the given surface, in table order.
pub fn rules_for(surface: Surface) -> impl Iterator<Item = &'static RuleSpec> {
    RULE_TABLE.iter().filter(move |rule| rule.surface == surface)
}

/// Convert a hex color into an `rgba()` value with the given alpha.
///
/// Accepts `#rgb` and `#rrggbb`; three-digit forms double each nibble.
/// Alpha is clamped to `[0, 1]` and rendered with two decimal places.
/// Anything that is not a `#`-prefixed hex color yields the
/// transparent fallback `rgba(0,0,0,0)`.
#[must_use]
pub fn hex_to_rgba(color: &str, alpha: f64) -> String {
    const FALLBACK: &str = "rgba(0,0,0,0)";

    let Some(digits) = color.strip_prefix('#') else {
        return FALLBACK.to_string();
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return FALLBACK.to_string();
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return FALLBACK.to_string(),
    };

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16).unwrap_or(0)
    };
    let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };

    format!("rgba({r},{g},{b},{alpha:.2})")
}

/// Apply a transform to a stored value, producing the property value.
#[must_use]
pub fn apply_transform(transform: ValueTransform, value: &str) -> String {
    match transform {
        ValueTransform::Verbatim => value.to_string(),
        ValueTransform::PxSuffix => format!("{value}px"),
        ValueTransform::InsetShadow(thickness) => format!("inset 0 -{thickness}px {value}"),
        ValueTransform::FocusRing => format!(
            "0 0 0 1px {value}, 0 0 0 3px {}, 0 1px 2px rgba(0, 0, 0, 0.05)",
            hex_to_rgba(value, 0.15)
        ),
    }
}
