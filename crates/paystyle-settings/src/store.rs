//! Key-value settings access over a pluggable persistence backend.
//!
//! The store owns the closed-key-set boundary: raw submissions come in
//! as `(name, value)` string pairs, unknown names are rejected as a
//! logged no-op, and recognized values are sanitized per key before
//! they ever reach the backend. Reads re-sanitize defensively, so a
//! backend row written by an older version still comes back canonical.
//!
//! Persistence itself is an external collaborator: hosts implement
//! [`SettingsBackend`] over whatever metadata table they own.
//! [`MemoryBackend`] is the in-process implementation used in tests
//! and previews.

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::key::StyleKey;
use crate::record::StyleSettings;

/// Prefix applied to every stored key, namespacing style rows away
/// from other metadata the host keeps per form.
pub const META_PREFIX: &str = "_paystyle_";

/// Opaque identifier of a payment form, owned by the external
/// form-management system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormId(String);

impl FormId {
    /// Create a form id from any displayable value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FormId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for FormId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Raw per-form metadata persistence, implemented by the host.
///
/// `meta_key` is already prefixed ([`META_PREFIX`]); implementations
/// store and return values verbatim. A row holding the empty string is
/// a real row: [`SettingsBackend::contains`] must report it, which is
/// how an explicitly stored `0` radius stays distinguishable from
/// "never set".
pub trait SettingsBackend {
    /// Read a stored value, `None` if the row is absent.
    fn read(&self, form: &FormId, meta_key: &str) -> Option<String>;
    /// Create or replace a row.
    fn write(&mut self, form: &FormId, meta_key: &str, value: &str);
    /// Remove a row if present.
    fn delete(&mut self, form: &FormId, meta_key: &str);
    /// Whether a row exists, regardless of its value.
    fn contains(&self, form: &FormId, meta_key: &str) -> bool;
}

/// In-memory backend over an [`AHashMap`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    rows: AHashMap<(FormId, String), String>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows across all forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self, form: &FormId, meta_key: &str) -> Option<String> {
        self.rows.get(&(form.clone(), meta_key.to_string())).cloned()
    }

    fn write(&mut self, form: &FormId, meta_key: &str, value: &str) {
        self.rows
            .insert((form.clone(), meta_key.to_string()), value.to_string());
    }

    fn delete(&mut self, form: &FormId, meta_key: &str) {
        self.rows.remove(&(form.clone(), meta_key.to_string()));
    }

    fn contains(&self, form: &FormId, meta_key: &str) -> bool {
        self.rows.contains_key(&(form.clone(), meta_key.to_string()))
    }
}

/// Typed, sanitizing settings accessor over a [`SettingsBackend`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore<B> {
    backend: B,
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Every recognized key, in contract order.
    #[must_use]
    pub fn style_keys() -> &'static [StyleKey] {
        &StyleKey::ALL
    }

    /// Get the sanitized stored value for `key`, or `fallback` when
    /// unset or sanitized-to-empty.
    #[must_use]
    pub fn get(&self, form: &FormId, key: StyleKey, fallback: &str) -> String {
        let stored = self.backend.read(form, &meta_key(key));
        let sanitized = stored.as_deref().map(|raw| key.sanitize(raw)).unwrap_or_default();
        if sanitized.is_empty() {
            fallback.to_string()
        } else {
            sanitized
        }
    }

    /// Sanitize and persist a raw `(name, value)` submission.
    ///
    /// Returns `false` (a no-op) for names outside the closed key set.
    pub fn set(&mut self, form: &FormId, name: &str, raw: &str) -> bool {
        let Some(key) = StyleKey::parse(name) else {
            warn!(form = %form, name, "rejecting unknown style key");
            return false;
        };
        self.set_key(form, key, raw);
        true
    }

    /// Sanitize and persist a value for a known key.
    pub fn set_key(&mut self, form: &FormId, key: StyleKey, raw: &str) {
        let sanitized = key.sanitize(raw);
        debug!(form = %form, key = %key, value = %sanitized, "style setting saved");
        self.backend.write(form, &meta_key(key), &sanitized);
    }

    /// Remove the stored value for `key`, reverting it to unset.
    pub fn delete(&mut self, form: &FormId, key: StyleKey) {
        debug!(form = %form, key = %key, "style setting deleted");
        self.backend.delete(form, &meta_key(key));
    }

    /// Whether `key` has a stored row, even an empty or zero one.
    #[must_use]
    pub fn exists(&self, form: &FormId, key: StyleKey) -> bool {
        self.backend.contains(form, &meta_key(key))
    }

    /// Whether the form has no stored style rows at all.
    #[must_use]
    pub fn is_untouched(&self, form: &FormId) -> bool {
        StyleKey::ALL.into_iter().all(|key| !self.exists(form, key))
    }

    /// Read every stored key into a [`StyleSettings`] record.
    #[must_use]
    pub fn load_record(&self, form: &FormId) -> StyleSettings {
        let mut record = StyleSettings::unset();
        for key in StyleKey::ALL {
            if let Some(raw) = self.backend.read(form, &meta_key(key)) {
                record.set(key, &raw);
            }
        }
        record
    }

    /// Full-replace save of a flat `(name, value)` submission.
    ///
    /// Every recognized key submitted is sanitized and written; every
    /// recognized key absent from the submission is deleted. Unknown
    /// names are ignored. This mirrors the admin save flow, where the
    /// form always posts the complete key set.
    pub fn save_record(&mut self, form: &FormId, submission: &[(String, String)]) {
        for key in StyleKey::ALL {
            match submission.iter().find(|(name, _)| name == key.as_str()) {
                Some((_, raw)) => self.set_key(form, key, raw),
                None => self.delete(form, key),
            }
        }
    }

    /// Persist a fully or partially resolved record, writing set
    /// fields and deleting unset ones.
    pub fn store_record(&mut self, form: &FormId, record: &StyleSettings) {
        for key in StyleKey::ALL {
            match record.value(key) {
                Some(value) => self.set_key(form, key, &value),
                None => self.delete(form, key),
            }
        }
    }

    /// Delete every recognized key for the form (the admin "reset
    /// styles" action).
    pub fn reset(&mut self, form: &FormId) {
        debug!(form = %form, "resetting all style settings");
        for key in StyleKey::ALL {
            self.backend.delete(form, &meta_key(key));
        }
    }
}

fn meta_key(key: StyleKey) -> String {
    format!("{META_PREFIX}{key}")
}
