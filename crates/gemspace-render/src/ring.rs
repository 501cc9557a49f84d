//! Ring outlines drawn around gems.

use std::f32::consts::TAU;
use std::num::NonZeroUsize;

use glam::{Mat4, Vec3};
use lru::LruCache;

/// Number of points in every ring outline.
pub const RING_SEGMENTS: usize = 64;

/// Default number of radii kept in a [`RingCache`].
pub const DEFAULT_RING_CACHE_CAPACITY: usize = 128;

/// Points of a circle of the given radius in the local XY plane.
///
/// Point `i` sits at angle `i * TAU / 64`, measured from +Y towards +X.
#[must_use]
pub fn circle_offsets(radius: f32) -> Vec<Vec3> {
    let step = TAU / RING_SEGMENTS as f32;
    (0..RING_SEGMENTS)
        .map(|i| {
            let angle = i as f32 * step;
            Vec3::new(angle.sin() * radius, angle.cos() * radius, 0.0)
        })
        .collect()
}

/// Bounded LRU cache of circle offsets keyed by radius.
pub struct RingCache {
    entries: LruCache<u32, Vec<Vec3>>,
    misses: usize,
}

impl Default for RingCache {
    fn default() -> Self {
        Self::new(DEFAULT_RING_CACHE_CAPACITY)
    }
}

impl RingCache {
    /// Creates a cache holding at most `capacity` radii (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            misses: 0,
        }
    }

    /// Returns the ring of `radius` transformed by `matrix`.
    ///
    /// Negative or non-finite radii are treated as zero.
    pub fn ring_points(&mut self, radius: f32, matrix: &Mat4) -> Vec<Vec3> {
        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        let key = radius.to_bits();

        if let Some(offsets) = self.entries.get(&key) {
            return offsets.iter().map(|&p| matrix.transform_point3(p)).collect();
        }

        log::trace!("ring cache miss for radius {radius}");
        self.misses += 1;
        let offsets = circle_offsets(radius);
        let points = offsets.iter().map(|&p| matrix.transform_point3(p)).collect();
        self.entries.put(key, offsets);
        points
    }

    /// Returns true if the radius is cached.
    pub fn contains(&self, radius: f32) -> bool {
        self.entries.contains(&radius.to_bits())
    }

    /// Number of cached radii.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached radii.
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Number of lookups that had to compute offsets.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drops all cached radii.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_offsets_start_on_y() {
        let pts = circle_offsets(2.0);
        assert_eq!(pts.len(), RING_SEGMENTS);
        assert!((pts[0] - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-6);
        assert!((pts[16] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_cache_reuses_radius() {
        let mut cache = RingCache::default();
        cache.ring_points(1.0, &Mat4::IDENTITY);
        cache.ring_points(1.0, &Mat4::from_translation(Vec3::X));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert!(cache.contains(1.0));
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let mut cache = RingCache::new(2);
        cache.ring_points(1.0, &Mat4::IDENTITY);
        cache.ring_points(2.0, &Mat4::IDENTITY);
        // touch 1.0 so 2.0 becomes the oldest
        cache.ring_points(1.0, &Mat4::IDENTITY);
        cache.ring_points(3.0, &Mat4::IDENTITY);

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(1.0));
        assert!(!cache.contains(2.0));
        assert!(cache.contains(3.0));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(RingCache::new(0).capacity(), 1);
    }

    #[test]
    fn test_negative_radius_collapses() {
        let mut cache = RingCache::default();
        let pts = cache.ring_points(-1.0, &Mat4::from_translation(Vec3::Y));
        assert!(pts.iter().all(|p| *p == Vec3::Y));
    }

    #[test]
    fn test_transform_applied() {
        let mut cache = RingCache::default();
        let m = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let pts = cache.ring_points(1.0, &m);
        assert!((pts[0] - Vec3::new(5.0, 1.0, 0.0)).length() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_ring_has_64_points_at_radius(radius in 0.0f32..100.0) {
            let mut cache = RingCache::new(4);
            let pts = cache.ring_points(radius, &Mat4::IDENTITY);
            prop_assert_eq!(pts.len(), RING_SEGMENTS);
            for p in pts {
                prop_assert!((p.length() - radius).abs() <= 1e-3 * radius.max(1.0));
                prop_assert_eq!(p.z, 0.0);
            }
        }
    }
}
