#![forbid(unsafe_code)]

//! Theme presets and resolution for paystyle.
//!
//! # Role in paystyle
//! A theme preset is a named, hardcoded bundle of coordinated style
//! values a user applies in one action as a starting point, then
//! customizes field by field. This crate owns the preset catalog and
//! the deterministic expansion of a preset id into a fully populated
//! [`paystyle_settings::StyleSettings`] record.
//!
//! # This crate provides
//! - [`ThemePreset`] and [`Palette`]: the static preset definitions.
//! - [`ThemeCatalog`]: lookup plus layered resolution
//!   (defaults ⊕ palette mapping ⊕ per-preset overrides ⊕ caller
//!   overrides, right-biased).
//!
//! Presets are read-only and never persisted per-form; only the chosen
//! preset id travels through storage.

/// Preset resolution into settings records.
pub mod catalog;
/// Static preset definitions.
pub mod preset;

pub use catalog::{
    DARK_BACKGROUNDS, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_RADIUS_PX,
    DEFAULT_BUTTON_TEXT_COLOR, DEFAULT_INPUT_FONT_SIZE_PX, DEFAULT_LABEL_FONT_SIZE_PX,
    PresetOverrides, ThemeCatalog, overrides_for,
};
pub use preset::{Palette, ThemePreset, presets};
