//! Scene-to-display length conversion.

use serde::{Deserialize, Serialize};

/// Converts scene lengths into the lengths shown to the user.
pub trait DisplayUnitConverter {
    /// Converts a scene length into display units.
    fn from_scene(&self, value: f32) -> f32;
}

impl<F> DisplayUnitConverter for F
where
    F: Fn(f32) -> f32,
{
    fn from_scene(&self, value: f32) -> f32 {
        self(value)
    }
}

/// Unit system configured in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    /// Unitless scene.
    None,
    /// Metric units, displayed in millimeters.
    #[default]
    Metric,
    /// Imperial units, displayed as-is.
    Imperial,
}

/// Host unit settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    pub system: UnitSystem,
    /// Length of one scene unit in meters.
    pub scale_length: f32,
}

impl Default for UnitScale {
    fn default() -> Self {
        Self {
            system: UnitSystem::Metric,
            scale_length: 0.001,
        }
    }
}

impl UnitScale {
    #[must_use]
    pub fn new(system: UnitSystem, scale_length: f32) -> Self {
        Self {
            system,
            scale_length,
        }
    }

    /// True when scene lengths need rescaling to millimeters.
    #[must_use]
    pub fn use_conversion(&self) -> bool {
        let rounded = (self.scale_length * 10_000.0).round() / 10_000.0;
        self.system == UnitSystem::Metric && (rounded - 0.001).abs() > f32::EPSILON
    }
}

impl DisplayUnitConverter for UnitScale {
    fn from_scene(&self, value: f32) -> f32 {
        if self.use_conversion() {
            value * 1000.0 * self.scale_length
        } else {
            value
        }
    }
}
