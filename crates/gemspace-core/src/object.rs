//! Per-frame scene objects and their evaluated instances.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::style::StyleOverride;
use crate::transform::Transform;

/// Opaque object identifier, stable within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A source object in the host scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Identifier of the original (non-evaluated) object.
    pub id: ObjectId,
    /// Planar radius in scene units.
    pub radius: f32,
    /// Whether the object is tagged as a gemstone.
    pub is_gem: bool,
    /// Optional widget style stored on the object.
    pub style: Option<StyleOverride>,
}

impl SceneObject {
    /// Creates a gem object with the given planar radius.
    pub fn gem(id: ObjectId, radius: f32) -> Self {
        Self {
            id,
            radius,
            is_gem: true,
            style: None,
        }
    }

    /// Creates an untagged object.
    pub fn plain(id: ObjectId, radius: f32) -> Self {
        Self {
            is_gem: false,
            ..Self::gem(id, radius)
        }
    }

    /// Creates an object whose radius is derived from its bounding dimensions.
    pub fn from_dimensions(id: ObjectId, dimensions: Vec3, is_gem: bool) -> Self {
        Self {
            id,
            radius: Self::planar_radius(dimensions),
            is_gem,
            style: None,
        }
    }

    /// Attaches a style override.
    #[must_use]
    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = Some(style);
        self
    }

    /// Half of the larger of the X and Y extents, never negative.
    #[must_use]
    pub fn planar_radius(dimensions: Vec3) -> f32 {
        (dimensions.x.max(dimensions.y) / 2.0).max(0.0)
    }
}

/// One evaluated placement of a [`SceneObject`].
///
/// Real objects produce one instance each; instancers produce one per copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInstance {
    pub object: SceneObject,
    /// World transform of this placement.
    pub transform: Transform,
    /// True if generated by an instancer rather than being the object itself.
    pub is_instance: bool,
}

impl SceneInstance {
    /// Creates the instance of a real object.
    pub fn new(object: SceneObject, transform: Transform) -> Self {
        Self {
            object,
            transform,
            is_instance: false,
        }
    }

    /// Creates a copy generated by an instancer.
    pub fn instanced(object: SceneObject, transform: Transform) -> Self {
        Self {
            object,
            transform,
            is_instance: true,
        }
    }

    /// World-space location.
    #[must_use]
    pub fn location(&self) -> Vec3 {
        self.transform.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_radius() {
        assert_eq!(SceneObject::planar_radius(Vec3::new(2.0, 3.0, 10.0)), 1.5);
        assert_eq!(SceneObject::planar_radius(Vec3::new(-2.0, -4.0, 0.0)), 0.0);
    }

    #[test]
    fn test_instance_location() {
        let ob = SceneObject::gem(ObjectId(1), 0.5);
        let inst = SceneInstance::instanced(ob, Transform::from_translation(Vec3::X));
        assert!(inst.is_instance);
        assert_eq!(inst.location(), Vec3::X);
        assert_eq!(format!("{}", inst.object.id), "#1");
    }
}
