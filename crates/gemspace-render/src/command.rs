//! Render commands emitted by the overlay engine.

use gemspace_core::Rgba;
use glam::{Vec2, Vec3};

use crate::label::ColorTier;

/// A single draw request.
///
/// World-space commands carry the color and line width of the object they
/// belong to; the sink issues the matching primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// A line segment between two world points.
    Line {
        p0: Vec3,
        p1: Vec3,
        color: Rgba,
        line_width: f32,
    },
    /// Two point markers at the connector endpoints.
    PointMarker {
        p0: Vec3,
        p1: Vec3,
        color: Rgba,
        line_width: f32,
    },
    /// A polyline through world points, optionally closed into a loop.
    Polyline {
        points: Vec<Vec3>,
        closed: bool,
        color: Rgba,
        line_width: f32,
    },
    /// Screen-space text over a backdrop colored by `tier`.
    Label {
        anchor: Vec2,
        text: String,
        tier: ColorTier,
        text_color: Rgba,
        font_size: f32,
    },
}

impl RenderCommand {
    /// Returns true for commands drawn in screen space.
    #[must_use]
    pub fn is_screen_space(&self) -> bool {
        matches!(self, RenderCommand::Label { .. })
    }

    /// Flattens a world-space command into colored vertices.
    ///
    /// Labels have no world geometry and yield nothing.
    #[must_use]
    pub fn vertices(&self) -> Vec<OverlayVertex> {
        match self {
            RenderCommand::Line { p0, p1, color, .. }
            | RenderCommand::PointMarker { p0, p1, color, .. } => {
                vec![OverlayVertex::new(*p0, *color), OverlayVertex::new(*p1, *color)]
            }
            RenderCommand::Polyline { points, color, .. } => points
                .iter()
                .map(|p| OverlayVertex::new(*p, *color))
                .collect(),
            RenderCommand::Label { .. } => Vec::new(),
        }
    }
}

/// GPU-compatible overlay vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl OverlayVertex {
    #[must_use]
    pub fn new(position: Vec3, color: Rgba) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}
