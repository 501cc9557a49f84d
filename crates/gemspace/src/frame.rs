//! Driving both passes of a frame against a render sink.

use gemspace_core::{DisplayUnitConverter, WidgetOptions};
use gemspace_render::{DrawScope, DrawState, Projector, RenderSink};

use crate::engine::{FrameStats, ProximityOverlayEngine};
use crate::snapshot::SceneSnapshotProvider;

/// Host state needed to draw one frame.
pub struct FrameContext<'a> {
    pub options: &'a WidgetOptions,
    /// Whether the viewport currently shows overlays at all.
    pub overlays_visible: bool,
    pub units: &'a dyn DisplayUnitConverter,
    pub projector: &'a dyn Projector,
}

impl ProximityOverlayEngine {
    /// Runs the world pass, then the screen pass, submitting both to `sink`.
    ///
    /// Nothing is drawn while the engine is stopped, the widget toggle is
    /// off, or the viewport hides overlays. Each pass with output is wrapped
    /// in its own begin/end pair on the sink.
    pub fn draw_frame<P, S>(&mut self, ctx: &FrameContext<'_>, provider: &P, sink: &mut S) -> FrameStats
    where
        P: SceneSnapshotProvider + ?Sized,
        S: RenderSink + ?Sized,
    {
        if !(self.is_running() && ctx.options.widget_toggle && ctx.overlays_visible) {
            return FrameStats::default();
        }

        let snapshot = provider.snapshot();
        let mut world = self.compute_world_pass(
            &snapshot,
            ctx.options.mode(),
            &ctx.options.default_style(),
            ctx.units,
        );

        if !world.commands.is_empty() {
            let mut scope = DrawScope::begin(&mut *sink, &DrawState::world(ctx.options.show_in_front));
            scope.submit_all(&world.commands);
        }

        let labels = self.compute_screen_pass(&mut world.labels, ctx.projector, ctx.options.font_size);
        if !labels.is_empty() {
            let mut scope = DrawScope::begin(&mut *sink, &DrawState::screen());
            scope.submit_all(&labels);
        }

        let stats = FrameStats {
            labels: labels.len(),
            ..world.stats
        };
        log::debug!(
            "frame drawn: {} connectors, {} rings, {} labels",
            stats.connectors,
            stats.rings,
            stats.labels
        );
        stats
    }
}
