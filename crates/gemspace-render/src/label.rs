//! Gap labels drawn next to connectors.
//!
//! Labels are queued during the world pass and placed during the screen
//! pass, once the camera state needed for projection is settled.

use gemspace_core::Rgba;
use glam::{Vec2, Vec3};

/// Text color for gap labels.
pub const LABEL_TEXT_COLOR: Rgba = Rgba::WHITE;

/// Gaps below this value (display units) are always critical.
pub const CRITICAL_GAP: f32 = 0.1;

/// Severity of a gap, used for the label backdrop color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    /// Gems touch or nearly touch.
    Critical,
    /// Gap is below the required spacing.
    Warning,
    /// Gap is acceptable.
    Neutral,
}

impl ColorTier {
    /// Classifies a gap against the spacing threshold.
    ///
    /// Intervals are half-open: `[-inf, 0.1)`, `[0.1, threshold)`, `[threshold, inf)`.
    #[must_use]
    pub fn classify(gap: f32, spacing_threshold: f32) -> Self {
        if gap < CRITICAL_GAP {
            ColorTier::Critical
        } else if gap < spacing_threshold {
            ColorTier::Warning
        } else {
            ColorTier::Neutral
        }
    }

    /// Backdrop color for this tier.
    #[must_use]
    pub fn color(self) -> Rgba {
        match self {
            ColorTier::Critical => Rgba::new(0.9, 0.0, 0.0, 1.0),
            ColorTier::Warning => Rgba::new(0.9, 0.7, 0.0, 1.0),
            ColorTier::Neutral => Rgba::new(0.0, 0.0, 0.0, 0.2),
        }
    }
}

/// A label waiting for screen-space placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingLabel {
    /// Signed gap in display units.
    pub gap: f32,
    /// Connector midpoint in world space.
    pub midpoint: Vec3,
    /// Required spacing of the pair, in display units.
    pub spacing_threshold: f32,
}

impl PendingLabel {
    #[must_use]
    pub fn tier(&self) -> ColorTier {
        ColorTier::classify(self.gap, self.spacing_threshold)
    }

    #[must_use]
    pub fn text(&self) -> String {
        format_gap(self.gap)
    }
}

/// Formats a gap with two decimals.
#[must_use]
pub fn format_gap(gap: f32) -> String {
    format!("{gap:.2}")
}

/// Padded quad behind a label, counter-clockwise from the bottom left.
#[must_use]
pub fn label_backdrop(anchor: Vec2, text_size: Vec2) -> [Vec2; 4] {
    let (x, y) = (anchor.x, anchor.y);
    [
        Vec2::new(x - 3.0, y - 4.0),
        Vec2::new(x + 3.0 + text_size.x, y - 4.0),
        Vec2::new(x + 3.0 + text_size.x, y + 4.0 + text_size.y),
        Vec2::new(x - 3.0, y + 4.0 + text_size.y),
    ]
}
