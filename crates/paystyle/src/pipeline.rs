//! The render-time pipeline: which forms get styled, and how.
//!
//! A host page can carry several payment forms, each with its own
//! display type and settings record. The pipeline takes that explicit
//! form list as input and produces the two presentation artifacts,
//! rather than accumulating rendered-form state somewhere global: the
//! caller that rendered the forms is the one that knows which forms
//! are on the page.

use tracing::debug;

use paystyle_appearance::AppearanceConfig;
use paystyle_settings::{FormId, SettingsBackend, SettingsStore, StyleSettings};
use paystyle_theme::ThemeCatalog;

/// How a payment form is presented to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    /// Rendered inline in the page.
    Embedded,
    /// Rendered in an overlay opened from the page.
    Overlay,
    /// The visitor is sent to an externally hosted payment page.
    OffSite,
}

impl DisplayType {
    /// Whether the form's fields render on the host page at all.
    ///
    /// Off-site forms never receive styling: their payment page is not
    /// ours to style.
    #[must_use]
    pub const fn is_on_site(self) -> bool {
        !matches!(self, Self::OffSite)
    }

    /// The display type's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Overlay => "overlay",
            Self::OffSite => "off_site",
        }
    }

    /// Look a display type up by wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "embedded" => Some(Self::Embedded),
            "overlay" => Some(Self::Overlay),
            "off_site" => Some(Self::OffSite),
            _ => None,
        }
    }
}

/// One rendered form on a page: identity, display type, settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PageForm {
    /// The form's identity, used to scope generated CSS.
    pub id: FormId,
    /// How the form is presented.
    pub display: DisplayType,
    /// The form's style settings, as loaded from the store.
    pub settings: StyleSettings,
}

impl PageForm {
    /// Assemble a page form from its parts.
    #[must_use]
    pub fn new(id: impl Into<FormId>, display: DisplayType, settings: StyleSettings) -> Self {
        Self { id: id.into(), display, settings }
    }

    /// Whether this form contributes any styling output.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.display.is_on_site() && !self.settings.is_unset()
    }
}

/// Layer a form's styling into a widget appearance object.
///
/// Returns `false` without touching `target` when the form is off-site
/// or carries no settings, so an untouched form keeps the widget's
/// built-in appearance exactly.
pub fn widget_appearance(form: &PageForm, target: &mut AppearanceConfig) -> bool {
    if !form.is_styled() {
        debug!(form = %form.id, "form contributes no widget styling");
        return false;
    }
    AppearanceConfig::from_settings(&form.settings).merge_into(target);
    true
}

/// Generate the page stylesheet for every styled form on the page.
///
/// Off-site and untouched forms are skipped; when nothing remains the
/// stylesheet is empty and the host should not emit a style tag.
#[must_use]
pub fn page_css(forms: &[PageForm]) -> String {
    let styled: Vec<(FormId, StyleSettings)> = forms
        .iter()
        .filter(|form| form.is_styled())
        .map(|form| (form.id.clone(), form.settings.clone()))
        .collect();
    debug!(rendered = forms.len(), styled = styled.len(), "collecting page styles");
    paystyle_appearance::page_css(&styled)
}

/// Apply a theme preset to a form: resolve the preset into a full
/// record and persist it, replacing any previous styling.
///
/// Unknown theme ids resolve as the default preset. Returns the record
/// that was stored, for immediate re-rendering.
pub fn apply_preset<B: SettingsBackend>(
    store: &mut SettingsStore<B>,
    form: &FormId,
    theme_id: &str,
    catalog: &ThemeCatalog,
) -> StyleSettings {
    let record = catalog.resolve(theme_id, None);
    store.store_record(form, &record);
    record
}
