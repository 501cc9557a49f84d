//! Integration tests for gemspace frames.
//!
//! A fake host provider changes the selection between frames so that
//! labels from one frame can be checked not to leak into the next.

use std::cell::Cell;

use gemspace::*;

/// Host stand-in: three gems in a row, selection driven by the test.
struct FakeHost {
    active: Cell<Option<ObjectId>>,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            active: Cell::new(None),
        }
    }

    fn select(&self, id: Option<ObjectId>) {
        self.active.set(id);
    }
}

impl SceneSnapshotProvider for FakeHost {
    fn snapshot(&self) -> SceneSnapshot {
        let gem = |id: u64, x: f32| {
            SceneInstance::new(
                SceneObject::from_dimensions(ObjectId(id), Vec3::new(2.0, 2.0, 1.2), true),
                Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
            )
        };
        let mut snapshot = SceneSnapshot::new(vec![gem(1, 0.0), gem(2, 2.05), gem(3, 4.5)]);
        snapshot.active = self.active.get().map(ActiveSelection::Object);
        snapshot
    }
}

fn labels(sink: &RecordingSink) -> Vec<String> {
    sink.commands()
        .filter_map(|c| match c {
            RenderCommand::Label { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_spec_examples() {
    let options = WidgetOptions::new().with_spacing(0.5);
    let units = UnitScale::default();
    let mut engine = ProximityOverlayEngine::new();

    let gem = |id: u64, x: f32| {
        SceneInstance::new(
            SceneObject::gem(ObjectId(id), 1.0),
            Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
        )
    };

    // gap 1.0: neither connector nor ring
    let far = SceneSnapshot::new(vec![gem(1, 0.0), gem(2, 3.0)]).with_active(ObjectId(1));
    let pass = engine.compute_world_pass(&far, options.mode(), &options.default_style(), &units);
    assert!(pass.commands.is_empty());

    // gap -0.5: connector between the outlines
    let near = SceneSnapshot::new(vec![gem(1, 0.0), gem(2, 1.5)]).with_active(ObjectId(1));
    let pass = engine.compute_world_pass(&near, options.mode(), &options.default_style(), &units);
    assert_eq!(pass.connectors.len(), 1);
    let c = pass.connectors[0];
    let (a, b) = (Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0));
    assert!((c.start - a.lerp(b, 1.0 / 1.5)).length() < 1e-6);
    assert!((c.end - b.lerp(a, 1.0 / 1.5)).length() < 1e-6);
}

#[test]
fn test_selection_changes_between_frames() {
    let host = FakeHost::new();
    let options = WidgetOptions::new().with_toggle(true);
    let units = UnitScale::default();
    let projector = |p: Vec3| Some(Vec2::new(p.x * 100.0, p.y * 100.0));
    let ctx = FrameContext {
        options: &options,
        overlays_visible: true,
        units: &units,
        projector: &projector,
    };
    let mut engine = ProximityOverlayEngine::new();
    engine.start();

    // nothing selected, show_all off
    let mut sink = RecordingSink::new();
    let stats = engine.draw_frame(&ctx, &host, &mut sink);
    assert_eq!(stats, FrameStats::default());
    assert!(sink.events().is_empty());

    // gem 2 sits 0.05 from gem 1 and 0.45 from gem 3
    host.select(Some(ObjectId(2)));
    let mut sink = RecordingSink::new();
    let stats = engine.draw_frame(&ctx, &host, &mut sink);
    assert_eq!(stats.connectors, 2);
    assert_eq!(stats.rings, 2);
    assert_eq!(labels(&sink), ["0.05", "0.45"]);
    assert!(sink.is_balanced());

    // gem 3 only neighbors gem 2; the previous labels are gone
    host.select(Some(ObjectId(3)));
    let mut sink = RecordingSink::new();
    let stats = engine.draw_frame(&ctx, &host, &mut sink);
    assert_eq!(stats.connectors, 1);
    assert_eq!(labels(&sink), ["0.45"]);
}

#[test]
fn test_show_all_without_selection() {
    let host = FakeHost::new();
    let options = WidgetOptions::new().with_toggle(true).with_show_all(true);
    let units = UnitScale::default();
    let camera = Camera::new(Vec2::new(800.0, 600.0)).looking_at(Vec3::new(2.0, 0.0, 20.0), Vec3::new(2.0, 0.0, 0.0));
    let ctx = FrameContext {
        options: &options,
        overlays_visible: true,
        units: &units,
        projector: &camera,
    };
    let mut engine = ProximityOverlayEngine::new();
    engine.start();

    let mut sink = RecordingSink::new();
    let stats = engine.draw_frame(&ctx, &host, &mut sink);
    assert_eq!(stats.rings, 3);
    assert_eq!(stats.connectors, 0);
    assert!(labels(&sink).is_empty());

    // one begin/end pair for the world pass only
    let begins = sink
        .events()
        .iter()
        .filter(|e| matches!(e, SinkEvent::Begin(_)))
        .count();
    assert_eq!(begins, 1);
}

#[test]
fn test_meter_scene_converts_gaps() {
    // scene in meters: gems 0.002 apart from 1mm-radius outlines
    let gem = |id: u64, x: f32| {
        SceneInstance::new(
            SceneObject::gem(ObjectId(id), 0.001),
            Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
        )
    };
    let scene = SceneSnapshot::new(vec![gem(1, 0.0), gem(2, 0.0023)]).with_active(ObjectId(1));
    let options = WidgetOptions::new().with_spacing(0.0002);
    let units = UnitScale::new(UnitSystem::Metric, 1.0);
    let mut engine = ProximityOverlayEngine::new();

    let pass = engine.compute_world_pass(&scene, options.mode(), &options.default_style(), &units);
    assert_eq!(pass.connectors.len(), 1);
    let c = pass.connectors[0];
    assert!((c.gap - 0.3).abs() < 1e-3);
    assert!((c.spacing_threshold - 0.2).abs() < 1e-4);
    assert_eq!(pass.labels.iter().next().map(PendingLabel::tier), Some(ColorTier::Neutral));
}

#[test]
fn test_options_from_json_drive_frame() {
    let options = WidgetOptions::from_json_str(
        r#"{"widget_toggle": true, "show_all": true, "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}}"#,
    )
    .unwrap();
    init_logging();

    let host = FakeHost::new();
    let units = UnitScale::default();
    let projector = |_: Vec3| None::<Vec2>;
    let ctx = FrameContext {
        options: &options,
        overlays_visible: true,
        units: &units,
        projector: &projector,
    };
    let mut engine = ProximityOverlayEngine::new();
    engine.toggle(true);
    let mut sink = RecordingSink::new();
    engine.draw_frame(&ctx, &host, &mut sink);

    assert!(sink.commands().all(|c| matches!(
        c,
        RenderCommand::Polyline { color, .. } if *color == Rgba::new(1.0, 0.0, 0.0, 1.0)
    )));
}
