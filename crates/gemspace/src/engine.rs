//! The proximity overlay engine.
//!
//! A frame is computed in two passes. The world pass turns a
//! [`SceneSnapshot`] into rings, connectors and a queue of pending labels.
//! The screen pass projects the queued labels once the host camera state is
//! settled, draining the queue so nothing carries over to the next frame.

use gemspace_core::{
    DisplayUnitConverter, DrawMode, GemspaceError, ObjectId, ResolvedStyle, Result, SceneInstance,
};
use gemspace_render::{
    PendingLabel, Projector, RenderCommand, RingCache, DEFAULT_RING_CACHE_CAPACITY,
    LABEL_TEXT_COLOR,
};
use glam::{Mat4, Vec3};

use crate::connector::Connector;
use crate::snapshot::{ActiveSelection, SceneSnapshot};

/// Gaps below this value (display units) get a connector and a label.
pub const CONNECTOR_THRESHOLD: f32 = 0.8;

/// Gaps below this value (display units) get a ring around the neighbor.
pub const RING_THRESHOLD: f32 = 0.5;

/// Labels queued by the world pass for the screen pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingLabels {
    labels: Vec<PendingLabel>,
}

impl PendingLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: PendingLabel) {
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingLabel> {
        self.labels.iter()
    }

    /// Removes and yields every queued label.
    pub fn drain(&mut self) -> std::vec::Drain<'_, PendingLabel> {
        self.labels.drain(..)
    }
}

/// Counts of what a frame produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub connectors: usize,
    pub rings: usize,
    /// Labels queued by the world pass; after a full frame, labels placed
    /// on screen.
    pub labels: usize,
}

/// Output of the world pass.
#[derive(Debug, Default)]
pub struct WorldPass {
    /// World-space draw commands in emission order.
    pub commands: Vec<RenderCommand>,
    pub connectors: Vec<Connector>,
    pub labels: PendingLabels,
    pub stats: FrameStats,
}

impl WorldPass {
    fn push_connector(&mut self, connector: Connector, style: &ResolvedStyle) {
        self.commands.push(RenderCommand::Line {
            p0: connector.start,
            p1: connector.end,
            color: style.color,
            line_width: style.line_width,
        });
        self.commands.push(RenderCommand::PointMarker {
            p0: connector.start,
            p1: connector.end,
            color: style.color,
            line_width: style.line_width,
        });
        self.labels.push(PendingLabel {
            gap: connector.gap,
            midpoint: connector.midpoint,
            spacing_threshold: connector.spacing_threshold,
        });
        self.connectors.push(connector);
        self.stats.connectors += 1;
    }

    fn push_ring(&mut self, points: Vec<Vec3>, style: &ResolvedStyle) {
        self.commands.push(RenderCommand::Polyline {
            points,
            closed: true,
            color: style.color,
            line_width: style.line_width,
        });
        self.stats.rings += 1;
    }
}

/// How instances are recognized as the active gem.
enum ActiveMatch {
    Object(ObjectId),
    /// First instance sitting exactly on the active location wins.
    Latch { claimed: bool },
}

struct ActiveGem {
    location: Vec3,
    radius: f32,
    spacing: f32,
    matcher: ActiveMatch,
}

impl ActiveGem {
    fn resolve(snapshot: &SceneSnapshot, mode: DrawMode, defaults: &ResolvedStyle) -> Option<Self> {
        match snapshot.active.as_ref()? {
            ActiveSelection::Object(id) => {
                let inst = snapshot.find_object(*id)?;
                if !inst.object.is_gem {
                    return None;
                }
                let style = ResolvedStyle::resolve(defaults, inst.object.style.as_ref(), mode.use_overrides);
                Some(Self {
                    location: inst.location(),
                    radius: sanitize_radius(inst.object.radius, inst.object.id),
                    spacing: style.spacing,
                    matcher: ActiveMatch::Object(*id),
                })
            }
            ActiveSelection::Placed { object, transform } => {
                if !object.is_gem {
                    return None;
                }
                let style = ResolvedStyle::resolve(defaults, object.style.as_ref(), mode.use_overrides);
                Some(Self {
                    location: transform.translation,
                    radius: sanitize_radius(object.radius, object.id),
                    spacing: style.spacing,
                    matcher: ActiveMatch::Object(object.id),
                })
            }
            ActiveSelection::Instancer { gem, location } => {
                let gem = gem.as_ref().filter(|g| g.is_gem)?;
                let style = ResolvedStyle::resolve(defaults, gem.style.as_ref(), mode.use_overrides);
                Some(Self {
                    location: *location,
                    radius: sanitize_radius(gem.radius, gem.id),
                    spacing: style.spacing,
                    matcher: ActiveMatch::Latch { claimed: false },
                })
            }
        }
    }

    fn is_active(&mut self, inst: &SceneInstance) -> bool {
        match &mut self.matcher {
            ActiveMatch::Object(id) => inst.object.id == *id,
            ActiveMatch::Latch { claimed } => {
                if *claimed {
                    false
                } else {
                    *claimed = inst.location() == self.location;
                    *claimed
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Proximity {
    gap: f32,
    near: bool,
    is_active: bool,
}

fn sanitize_radius(radius: f32, id: ObjectId) -> f32 {
    if radius.is_finite() && radius >= 0.0 {
        radius
    } else {
        log::warn!("object {id} has invalid radius {radius}, clamping to zero");
        0.0
    }
}

/// Rings of instancer copies follow the full matrix; real objects drop scale.
fn ring_matrix(inst: &SceneInstance) -> Mat4 {
    if inst.is_instance {
        inst.transform.to_matrix()
    } else {
        inst.transform.rigid_matrix()
    }
}

/// Computes gem spacing overlays frame by frame.
///
/// The only state kept across frames is the ring cache and whether the
/// overlay is running.
pub struct ProximityOverlayEngine {
    ring_cache: RingCache,
    running: bool,
}

impl Default for ProximityOverlayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximityOverlayEngine {
    /// Creates a stopped engine with the default ring cache size.
    pub fn new() -> Self {
        Self::with_ring_cache_capacity(DEFAULT_RING_CACHE_CAPACITY)
    }

    pub fn with_ring_cache_capacity(capacity: usize) -> Self {
        Self {
            ring_cache: RingCache::new(capacity),
            running: false,
        }
    }

    /// Starts drawing. Starting a running engine does nothing.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("gem overlay started");
        }
    }

    /// Stops drawing. Stopping a stopped engine does nothing.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("gem overlay stopped");
        }
    }

    /// Starts drawing, failing if already running.
    pub fn try_start(&mut self) -> Result<()> {
        if self.running {
            return Err(GemspaceError::AlreadyStarted);
        }
        self.start();
        Ok(())
    }

    /// Stops drawing, failing if not running.
    pub fn try_stop(&mut self) -> Result<()> {
        if !self.running {
            return Err(GemspaceError::NotStarted);
        }
        self.stop();
        Ok(())
    }

    /// Starts or stops to follow the user toggle.
    pub fn toggle(&mut self, enabled: bool) {
        if enabled {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ring_cache(&self) -> &RingCache {
        &self.ring_cache
    }

    /// Computes rings, connectors and pending labels for one frame.
    ///
    /// Without an active gem and with `show_all` off nothing is produced.
    pub fn compute_world_pass(
        &mut self,
        snapshot: &SceneSnapshot,
        mode: DrawMode,
        defaults: &ResolvedStyle,
        units: &dyn DisplayUnitConverter,
    ) -> WorldPass {
        let mut pass = WorldPass::default();
        let mut active = ActiveGem::resolve(snapshot, mode, defaults);

        if !(mode.show_all || active.is_some()) {
            log::trace!("no active gem, skipping frame");
            return pass;
        }

        for inst in snapshot.gems() {
            let ob = &inst.object;
            let ob_rad = sanitize_radius(ob.radius, ob.id);
            let ob_loc = inst.location();

            let proximity = match active.as_mut() {
                Some(act) => {
                    let distance = act.location.distance(ob_loc);
                    let gap = units.from_scene(distance - (act.radius + ob_rad));
                    let near = gap < CONNECTOR_THRESHOLD;
                    if !(mode.show_all || near) {
                        log::trace!("object {} too far (gap {gap:.3})", ob.id);
                        continue;
                    }
                    Some(Proximity {
                        gap,
                        near,
                        is_active: act.is_active(inst),
                    })
                }
                None => None,
            };

            let style = ResolvedStyle::resolve(defaults, ob.style.as_ref(), mode.use_overrides);

            if let (Some(act), Some(p)) = (active.as_ref(), proximity) {
                if p.near && !p.is_active {
                    let threshold = units.from_scene(act.spacing.max(style.spacing));
                    let connector = Connector::between(
                        (act.location, act.radius),
                        (ob_loc, ob_rad),
                        p.gap,
                        threshold,
                    );
                    pass.push_connector(connector, &style);
                }
            }

            let draw_ring =
                mode.show_all || proximity.is_some_and(|p| !p.is_active && p.gap < RING_THRESHOLD);
            if draw_ring {
                let points = self
                    .ring_cache
                    .ring_points(ob_rad + style.spacing, &ring_matrix(inst));
                pass.push_ring(points, &style);
            }
        }

        pass.stats.labels = pass.labels.len();
        log::debug!(
            "world pass: {} instances, {} connectors, {} rings, {} labels queued",
            snapshot.instances.len(),
            pass.stats.connectors,
            pass.stats.rings,
            pass.stats.labels
        );
        pass
    }

    /// Places queued labels on screen and empties the queue.
    ///
    /// Labels whose midpoint cannot be projected are dropped.
    #[allow(clippy::unused_self)]
    pub fn compute_screen_pass(
        &self,
        labels: &mut PendingLabels,
        projector: &dyn Projector,
        font_size: f32,
    ) -> Vec<RenderCommand> {
        labels
            .drain()
            .filter_map(|label| {
                let Some(anchor) = projector.project(label.midpoint) else {
                    log::trace!("label at {} is off-screen", label.midpoint);
                    return None;
                };
                Some(RenderCommand::Label {
                    anchor,
                    text: label.text(),
                    tier: label.tier(),
                    text_color: LABEL_TEXT_COLOR,
                    font_size,
                })
            })
            .collect()
    }
}
