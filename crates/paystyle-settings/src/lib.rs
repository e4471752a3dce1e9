#![forbid(unsafe_code)]

//! Style settings model and storage for paystyle.
//!
//! # Role in paystyle
//! `paystyle-settings` is the shared vocabulary for per-form style
//! data. The theme catalog resolves into these records, and both
//! projection surfaces (widget appearance configuration and page CSS)
//! consume them without ever mutating storage.
//!
//! # This crate provides
//! - [`StyleKey`]: the closed set of recognized style keys, each with
//!   a fixed value kind and sanitizer.
//! - [`CssColor`] and [`FontWeight`]: validated value types whose
//!   canonical forms are safe to interpolate downstream.
//! - [`StyleSettings`]: one form's record, every field independently
//!   optional ("unset" is a first-class state).
//! - [`SettingsStore`] over a [`SettingsBackend`]: sanitize-on-write,
//!   sanitize-on-read access, with [`MemoryBackend`] for in-process
//!   use.
//!
//! # Sanitization policy
//! Invalid input is never an error here. Malformed colors and sizes
//! degrade to unset, out-of-enum font weights fall back to `normal`,
//! and unknown keys are rejected as a logged no-op. A broken style
//! setting can only ever mean "use the host default", never a
//! rendering failure.

/// The closed set of recognized style keys.
pub mod key;
/// The per-form style record.
pub mod record;
/// Settings access over a pluggable persistence backend.
pub mod store;
/// Value types and per-kind sanitizers.
pub mod value;

pub use key::{StyleKey, ValueKind};
pub use record::StyleSettings;
pub use store::{FormId, META_PREFIX, MemoryBackend, SettingsBackend, SettingsStore};
pub use value::{
    CssColor, FontWeight, px_value, sanitize_color, sanitize_px, sanitize_theme_id,
    sanitize_weight,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_record_agree_on_sanitization() {
        let mut store = SettingsStore::new(MemoryBackend::new());
        let form = FormId::from("checkout");

        store.set_key(&form, StyleKey::ButtonBackgroundColor, "rgba(15, 133, 105, 1)");
        let via_store = store.get(&form, StyleKey::ButtonBackgroundColor, "");
        let via_record = store
            .load_record(&form)
            .value(StyleKey::ButtonBackgroundColor)
            .unwrap();
        assert_eq!(via_store, via_record);
    }
}
