//! Connector geometry between the active gem and a neighbor.

use glam::Vec3;

/// The segment joining two gem outlines, plus what its label needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Point on the active gem's outline.
    pub start: Vec3,
    /// Point on the neighbor's outline.
    pub end: Vec3,
    pub midpoint: Vec3,
    /// Signed clearance in display units.
    pub gap: f32,
    /// Required spacing in display units.
    pub spacing_threshold: f32,
}

impl Connector {
    /// Builds the connector between two circles.
    ///
    /// Coincident centers collapse every point onto the neighbor's location.
    #[must_use]
    pub fn between(
        active: (Vec3, f32),
        neighbor: (Vec3, f32),
        gap: f32,
        spacing_threshold: f32,
    ) -> Self {
        let (act_loc, act_rad) = active;
        let (ob_loc, ob_rad) = neighbor;
        let distance = act_loc.distance(ob_loc);

        let (start, end, midpoint) = if distance > 0.0 {
            let start = act_loc.lerp(ob_loc, act_rad / distance);
            let end = ob_loc.lerp(act_loc, ob_rad / distance);
            (start, end, start.lerp(end, 0.5))
        } else {
            (ob_loc, ob_loc, ob_loc)
        };

        Self {
            start,
            end,
            midpoint,
            gap,
            spacing_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_gems() {
        let c = Connector::between((Vec3::ZERO, 1.0), (Vec3::new(1.5, 0.0, 0.0), 1.0), -0.5, 0.2);
        assert!((c.start - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((c.end - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
        assert!((c.midpoint - Vec3::new(0.75, 0.0, 0.0)).length() < 1e-6);
        assert_eq!(c.gap, -0.5);
    }

    #[test]
    fn test_separated_gems() {
        let c = Connector::between((Vec3::ZERO, 0.5), (Vec3::new(0.0, 2.0, 0.0), 0.5), 1.0, 0.2);
        assert!((c.start - Vec3::new(0.0, 0.5, 0.0)).length() < 1e-6);
        assert!((c.end - Vec3::new(0.0, 1.5, 0.0)).length() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_coincident_centers_collapse(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            z in -100.0f32..100.0,
            r0 in 0.0f32..10.0,
            r1 in 0.0f32..10.0,
        ) {
            let loc = Vec3::new(x, y, z);
            let c = Connector::between((loc, r0), (loc, r1), -(r0 + r1), 0.2);
            prop_assert_eq!(c.start, loc);
            prop_assert_eq!(c.end, loc);
            prop_assert_eq!(c.midpoint, loc);
        }
    }
}
