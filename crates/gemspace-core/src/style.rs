//! Per-object widget styling.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Optional per-object style values.
///
/// Each field falls back to the global default independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    /// Ring and connector color.
    pub color: Option<Rgba>,
    /// Line width in pixels.
    pub line_width: Option<f32>,
    /// Clearance drawn around the object, in scene units.
    pub spacing: Option<f32>,
}

impl StyleOverride {
    /// Creates an empty override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.line_width.is_none() && self.spacing.is_none()
    }
}

/// A fully resolved style: every field has a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub color: Rgba,
    pub line_width: f32,
    pub spacing: f32,
}

impl ResolvedStyle {
    /// Resolves the effective style of an object.
    ///
    /// With `use_overrides` disabled, or without an override, the defaults
    /// are returned unchanged.
    #[must_use]
    pub fn resolve(defaults: &ResolvedStyle, ovrd: Option<&StyleOverride>, use_overrides: bool) -> Self {
        match ovrd {
            Some(o) if use_overrides => Self {
                color: o.color.unwrap_or(defaults.color),
                line_width: o.line_width.unwrap_or(defaults.line_width),
                spacing: o.spacing.unwrap_or(defaults.spacing),
            },
            _ => *defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ResolvedStyle {
        ResolvedStyle {
            color: Rgba::WHITE,
            line_width: 1.2,
            spacing: 0.2,
        }
    }

    #[test]
    fn test_resolve_without_override() {
        assert_eq!(ResolvedStyle::resolve(&defaults(), None, true), defaults());
    }

    #[test]
    fn test_resolve_per_field_fallback() {
        let o = StyleOverride::new().with_spacing(0.5);
        let s = ResolvedStyle::resolve(&defaults(), Some(&o), true);
        assert_eq!(s.spacing, 0.5);
        assert_eq!(s.line_width, 1.2);
        assert_eq!(s.color, Rgba::WHITE);
    }

    #[test]
    fn test_resolve_overrides_disabled() {
        let o = StyleOverride::new()
            .with_color(Rgba::new(1.0, 0.0, 0.0, 1.0))
            .with_line_width(3.0);
        assert_eq!(ResolvedStyle::resolve(&defaults(), Some(&o), false), defaults());
    }

    #[test]
    fn test_override_deserialize_partial() {
        let o: StyleOverride = serde_json::from_str(r#"{"spacing": 0.3}"#).unwrap();
        assert_eq!(o.spacing, Some(0.3));
        assert!(o.color.is_none());
        assert!(!o.is_empty());
        assert!(StyleOverride::new().is_empty());
    }
}
