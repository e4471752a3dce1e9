#![forbid(unsafe_code)]

//! Per-form payment styling.
//!
//! # Role in paystyle
//! This is the facade crate: it stitches the settings store, the theme
//! preset catalog, and the two projectors into the render-time
//! pipeline a host embeds, and re-exports the member crates under one
//! roof.
//!
//! # The pipeline
//! 1. Per-form settings are stored and sanitized by
//!    [`settings::SettingsStore`].
//! 2. A theme preset can be resolved into a full record by
//!    [`theme::ThemeCatalog`] and applied in one action.
//! 3. At render time, [`pipeline::widget_appearance`] projects each
//!    form into the embedded widget's appearance object and
//!    [`pipeline::page_css`] generates the scoped page stylesheet.
//!
//! Forms with no stored styling produce no output at any stage; the
//! host's default presentation is untouched.

/// Render-time orchestration.
pub mod pipeline;

pub use paystyle_appearance as appearance;
pub use paystyle_settings as settings;
pub use paystyle_theme as theme;

pub use appearance::{AppearanceConfig, hex_to_rgba};
pub use pipeline::{DisplayType, PageForm, apply_preset, page_css, widget_appearance};
pub use settings::{FormId, MemoryBackend, SettingsBackend, SettingsStore, StyleKey, StyleSettings};
pub use theme::{ThemeCatalog, ThemePreset};
