//! Value types and per-kind sanitizers.
//!
//! Style values are never free-form CSS. Colors are restricted to hex
//! or `rgba(...)` syntax, sizes to non-negative integer pixels, and
//! font weights to a fixed enum. Every sanitizer is idempotent and
//! total: invalid input degrades to "unset" (or a safe default), never
//! to an error, so a broken setting can only ever mean "use the host
//! default".

/// A validated CSS color value.
///
/// Holds the canonical textual form: lowercased `#rgb`/`#rrggbb` hex,
/// or `rgba(r,g,b,a)` with channels clamped to 0–255 and alpha clamped
/// to `[0, 1]`. The inner string is safe to interpolate into CSS and
/// into the hosted widget's appearance configuration without further
/// escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CssColor(String);

impl CssColor {
    /// Parse and canonicalize a color, returning `None` for anything
    /// that is not hex or `rgb()`/`rgba()` syntax.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(hex) = raw.strip_prefix('#') {
            if (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Some(Self(format!("#{}", hex.to_ascii_lowercase())));
            }
            return None;
        }
        parse_rgba(raw)
    }

    /// The canonical textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a hex color (as opposed to `rgba(...)`).
    #[must_use]
    pub fn is_hex(&self) -> bool {
        self.0.starts_with('#')
    }
}

impl std::fmt::Display for CssColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_rgba(raw: &str) -> Option<CssColor> {
    let rest = raw
        .strip_prefix("rgba")
        .or_else(|| raw.strip_prefix("rgb"))?;
    let inner = rest.trim().strip_prefix('(')?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let r = parts[0].parse::<u32>().ok()?.min(255);
    let g = parts[1].parse::<u32>().ok()?.min(255);
    let b = parts[2].parse::<u32>().ok()?.min(255);
    let alpha = if parts.len() == 4 {
        let parsed = parts[3].parse::<f32>().ok()?;
        if parsed.is_nan() {
            return None;
        }
        parsed.clamp(0.0, 1.0)
    } else {
        1.0
    };
    Some(CssColor(format!("rgba({r},{g},{b},{alpha})")))
}

/// A CSS font weight: the keywords plus the nine numeric weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    /// `normal`
    Normal,
    /// `bold`
    Bold,
    /// `100`
    W100,
    /// `200`
    W200,
    /// `300`
    W300,
    /// `400`
    W400,
    /// `500`
    W500,
    /// `600`
    W600,
    /// `700`
    W700,
    /// `800`
    W800,
    /// `900`
    W900,
}

impl FontWeight {
    /// Every accepted weight.
    pub const ALL: [FontWeight; 11] = [
        Self::Normal,
        Self::Bold,
        Self::W100,
        Self::W200,
        Self::W300,
        Self::W400,
        Self::W500,
        Self::W600,
        Self::W700,
        Self::W800,
        Self::W900,
    ];

    /// The CSS textual form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::W100 => "100",
            Self::W200 => "200",
            Self::W300 => "300",
            Self::W400 => "400",
            Self::W500 => "500",
            Self::W600 => "600",
            Self::W700 => "700",
            Self::W800 => "800",
            Self::W900 => "900",
        }
    }

    /// Parse a weight, returning `None` for out-of-enum input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == raw)
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sanitize a color value. Invalid or empty input becomes the empty
/// string ("unset").
#[must_use]
pub fn sanitize_color(raw: &str) -> String {
    CssColor::parse(raw).map(|c| c.0).unwrap_or_default()
}

/// Sanitize a pixel amount. Accepts an optional `px` suffix. Invalid,
/// negative, or empty input becomes the empty string ("unset");
/// an explicit `0` survives as `"0"`.
#[must_use]
pub fn sanitize_px(raw: &str) -> String {
    px_value(raw).map(|n| n.to_string()).unwrap_or_default()
}

/// Parse a pixel amount, accepting an optional `px` suffix.
#[must_use]
pub fn px_value(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}

/// Sanitize a font weight. Empty stays empty ("unset"); a non-empty
/// value outside the enum falls back to `"normal"`, the key-specific
/// safe default.
#[must_use]
pub fn sanitize_weight(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    FontWeight::parse(trimmed)
        .unwrap_or(FontWeight::Normal)
        .as_str()
        .to_string()
}

/// Sanitize a theme preset id into a lowercase slug. Characters outside
/// `[a-z0-9_-]` are dropped.
#[must_use]
pub fn sanitize_theme_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter_map(|c| {
            let c = c.to_ascii_lowercase();
            (c.is_ascii_alphanumeric() || c == '-' || c == '_').then_some(c)
        })
        .collect()
}
