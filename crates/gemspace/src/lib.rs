//! gemspace: proximity overlays for gemstone layouts.
//!
//! Given the gems of a scene and the one currently selected, gemspace works
//! out which gems sit too close, draws connectors between them with the
//! remaining clearance as a label, and rings each gem with its required
//! spacing.
//!
//! # Quick Start
//!
//! ```no_run
//! use gemspace::*;
//!
//! init_logging();
//!
//! let gem = |id: u64, x: f32| {
//!     SceneInstance::new(
//!         SceneObject::gem(ObjectId(id), 1.0),
//!         Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
//!     )
//! };
//! let scene = SceneSnapshot::new(vec![gem(1, 0.0), gem(2, 2.1)]).with_active(ObjectId(1));
//!
//! let options = WidgetOptions::new().with_toggle(true);
//! let units = UnitScale::default();
//! let camera = Camera::new(Vec2::new(800.0, 600.0));
//! let ctx = FrameContext {
//!     options: &options,
//!     overlays_visible: true,
//!     units: &units,
//!     projector: &camera,
//! };
//!
//! let mut engine = ProximityOverlayEngine::new();
//! engine.start();
//! let mut sink = RecordingSink::new();
//! let stats = engine.draw_frame(&ctx, &scene, &mut sink);
//! println!("{} connectors", stats.connectors);
//! ```
//!
//! # Passes
//!
//! - [`ProximityOverlayEngine::compute_world_pass`] emits rings and
//!   connectors in world space and queues gap labels.
//! - [`ProximityOverlayEngine::compute_screen_pass`] projects the queued
//!   labels and empties the queue.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod connector;
pub mod engine;
pub mod frame;
pub mod snapshot;

pub use connector::Connector;
pub use engine::{
    FrameStats, PendingLabels, ProximityOverlayEngine, WorldPass, CONNECTOR_THRESHOLD,
    RING_THRESHOLD,
};
pub use frame::FrameContext;
pub use snapshot::{ActiveSelection, SceneSnapshot, SceneSnapshotProvider};

// Re-export core types
pub use gemspace_core::{
    DisplayUnitConverter, DrawMode, GemspaceError, Mat4, ObjectId, Quat, ResolvedStyle, Result,
    Rgba, SceneInstance, SceneObject, StyleOverride, Transform, UnitScale, UnitSystem, Vec2, Vec3,
    WidgetOptions,
};

// Re-export render types
pub use gemspace_render::{
    Camera, ColorTier, DrawState, PendingLabel, Projector, RecordingSink, RenderCommand,
    RenderSink, SinkEvent,
};

/// Installs an `env_logger` logger driven by `RUST_LOG`.
///
/// Safe to call more than once; later calls do nothing.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
