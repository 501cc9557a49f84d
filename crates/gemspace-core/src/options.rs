//! Configuration options for the gem spacing widget.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{GemspaceError, Result};
use crate::style::ResolvedStyle;

/// Host-supplied widget configuration, read once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// Whether the widget is toggled on by the user.
    pub widget_toggle: bool,

    /// Draw rings around every gem, not just neighbors of the active one.
    pub show_all: bool,

    /// Honor per-object style overrides.
    pub use_overrides: bool,

    /// Default ring and connector color.
    pub color: Rgba,

    /// Default line width in pixels.
    pub line_width: f32,

    /// Default spacing around gems, in scene units.
    pub spacing: f32,

    /// Draw the widget on top of scene geometry (depth test off).
    pub show_in_front: bool,

    /// Label font size in pixels.
    pub font_size: f32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            widget_toggle: false,
            show_all: false,
            use_overrides: true,
            color: Rgba::new(0.9, 0.9, 0.9, 1.0),
            line_width: 1.2,
            spacing: 0.2,
            show_in_front: false,
            font_size: 16.0,
        }
    }
}

/// Which objects get rings and whether overrides apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawMode {
    pub show_all: bool,
    pub use_overrides: bool,
}

impl WidgetOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_toggle(mut self, enabled: bool) -> Self {
        self.widget_toggle = enabled;
        self
    }

    #[must_use]
    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, use_overrides: bool) -> Self {
        self.use_overrides = use_overrides;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_show_in_front(mut self, show_in_front: bool) -> Self {
        self.show_in_front = show_in_front;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// The ring/override mode for a frame.
    #[must_use]
    pub fn mode(&self) -> DrawMode {
        DrawMode {
            show_all: self.show_all,
            use_overrides: self.use_overrides,
        }
    }

    /// The global fallback style.
    #[must_use]
    pub fn default_style(&self) -> ResolvedStyle {
        ResolvedStyle {
            color: self.color,
            line_width: self.line_width,
            spacing: self.spacing,
        }
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.color.is_finite() {
            return Err(invalid("color", "components must be finite"));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(invalid("line_width", format!("must be positive, got {}", self.line_width)));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(invalid("spacing", format!("must be non-negative, got {}", self.spacing)));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(invalid("font_size", format!("must be positive, got {}", self.font_size)));
        }
        Ok(())
    }

    /// Parses and validates options from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::debug!("loaded widget options from {}", path.display());
        Ok(options)
    }

    /// Saves options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> GemspaceError {
    GemspaceError::InvalidOption {
        name,
        reason: reason.into(),
    }
}
