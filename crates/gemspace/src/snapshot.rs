//! Per-frame scene snapshots supplied by the host.

use gemspace_core::{ObjectId, SceneInstance, SceneObject, Transform};
use glam::Vec3;

/// What the user has selected for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveSelection {
    /// A regular active object, looked up among the snapshot instances.
    Object(ObjectId),
    /// An active object supplied with its own world transform.
    ///
    /// Used when the active object is not among the drawn instances, e.g.
    /// hidden or only present through instanced copies. Copies sharing its
    /// id still count as active.
    Placed {
        object: SceneObject,
        transform: Transform,
    },
    /// An instancer being edited in mesh edit mode.
    ///
    /// `gem` is the first gem-tagged child of the instancer and `location`
    /// the world-space center of the active polygon.
    Instancer {
        gem: Option<SceneObject>,
        location: Vec3,
    },
}

/// Everything the overlay needs from the host for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSnapshot {
    /// Evaluated instances in host iteration order.
    pub instances: Vec<SceneInstance>,
    pub active: Option<ActiveSelection>,
}

impl SceneSnapshot {
    pub fn new(instances: Vec<SceneInstance>) -> Self {
        Self {
            instances,
            active: None,
        }
    }

    /// Marks an object as active.
    #[must_use]
    pub fn with_active(mut self, id: ObjectId) -> Self {
        self.active = Some(ActiveSelection::Object(id));
        self
    }

    /// Marks an object as active at its own transform.
    #[must_use]
    pub fn with_active_placed(mut self, object: SceneObject, transform: Transform) -> Self {
        self.active = Some(ActiveSelection::Placed { object, transform });
        self
    }

    /// Marks an instancer in edit mode as active.
    #[must_use]
    pub fn with_instancer(mut self, gem: Option<SceneObject>, location: Vec3) -> Self {
        self.active = Some(ActiveSelection::Instancer { gem, location });
        self
    }

    /// The instance representing `id` itself, falling back to any copy of it.
    pub fn find_object(&self, id: ObjectId) -> Option<&SceneInstance> {
        let mut copies = self.instances.iter().filter(|i| i.object.id == id);
        let first = copies.next()?;
        if !first.is_instance {
            return Some(first);
        }
        copies.find(|i| !i.is_instance).or(Some(first))
    }

    /// Iterates over gem-tagged instances.
    pub fn gems(&self) -> impl Iterator<Item = &SceneInstance> {
        self.instances.iter().filter(|i| i.object.is_gem)
    }
}

/// Source of per-frame scene data.
///
/// Implementations must reflect edit-mode state consistently within a frame.
pub trait SceneSnapshotProvider {
    fn snapshot(&self) -> SceneSnapshot;
}

impl SceneSnapshotProvider for SceneSnapshot {
    fn snapshot(&self) -> SceneSnapshot {
        self.clone()
    }
}

impl<F> SceneSnapshotProvider for F
where
    F: Fn() -> SceneSnapshot,
{
    fn snapshot(&self) -> SceneSnapshot {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_object_prefers_real_object() {
        let ob = SceneObject::gem(ObjectId(7), 1.0);
        let snapshot = SceneSnapshot::new(vec![
            SceneInstance::instanced(ob.clone(), Transform::from_translation(Vec3::X)),
            SceneInstance::new(ob, Transform::from_translation(Vec3::Y)),
        ]);
        assert_eq!(snapshot.find_object(ObjectId(7)).unwrap().location(), Vec3::Y);
        assert!(snapshot.find_object(ObjectId(8)).is_none());
    }

    #[test]
    fn test_find_object_falls_back_to_copy() {
        let ob = SceneObject::gem(ObjectId(7), 1.0);
        let snapshot = SceneSnapshot::new(vec![SceneInstance::instanced(
            ob,
            Transform::from_translation(Vec3::X),
        )]);
        assert_eq!(snapshot.find_object(ObjectId(7)).unwrap().location(), Vec3::X);
    }

    #[test]
    fn test_with_active_placed() {
        let ob = SceneObject::gem(ObjectId(4), 0.5);
        let snapshot = SceneSnapshot::default().with_active_placed(ob.clone(), Transform::from_translation(Vec3::Z));
        assert_eq!(
            snapshot.active,
            Some(ActiveSelection::Placed {
                object: ob,
                transform: Transform::from_translation(Vec3::Z),
            })
        );
        assert!(snapshot.find_object(ObjectId(4)).is_none());
    }

    #[test]
    fn test_gems_filter() {
        let snapshot = SceneSnapshot::new(vec![
            SceneInstance::new(SceneObject::gem(ObjectId(1), 1.0), Transform::identity()),
            SceneInstance::new(SceneObject::plain(ObjectId(2), 1.0), Transform::identity()),
        ]);
        assert_eq!(snapshot.gems().count(), 1);
    }

    #[test]
    fn test_closure_provider() {
        let provider = || SceneSnapshot::default().with_active(ObjectId(3));
        assert_eq!(
            provider.snapshot().active,
            Some(ActiveSelection::Object(ObjectId(3)))
        );
    }
}
