#![forbid(unsafe_code)]

//! Projection of style settings into presentation artifacts.
//!
//! # Role in paystyle
//! Styling a payment form means feeding the same per-form settings
//! record to two very different consumers: the embedded payment
//! widget, which takes a JSON appearance object, and the host page,
//! which needs generated CSS for the form fields that live in ordinary
//! DOM. This crate owns both projections.
//!
//! # This crate provides
//! - [`rules`]: the single declarative fan-out table both projections
//!   read, plus [`rules::hex_to_rgba`].
//! - [`AppearanceConfig`]: the widget appearance projection.
//! - [`css::form_css`] and [`css::page_css`]: the page stylesheet
//!   projection.
//!
//! Projection is pure: settings in, strings out, no I/O and no shared
//! state.

/// Widget appearance config.
pub mod config;
/// Page stylesheet generation.
pub mod css;
/// The shared projection rule table.
pub mod rules;

pub use config::AppearanceConfig;
pub use css::{form_css, page_css};
pub use rules::hex_to_rgba;
