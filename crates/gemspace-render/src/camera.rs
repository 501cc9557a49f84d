//! Camera state and world-to-screen projection.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Maps world points to region pixel coordinates.
///
/// Returns `None` when the point cannot be placed on screen (behind the view).
pub trait Projector {
    fn project(&self, world: Vec3) -> Option<Vec2>;
}

impl<F> Projector for F
where
    F: Fn(Vec3) -> Option<Vec2>,
{
    fn project(&self, world: Vec3) -> Option<Vec2> {
        self(world)
    }
}

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// A 3D camera looking into a viewport region.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Projection mode.
    pub projection_mode: ProjectionMode,
    /// Orthographic half-height (used when `projection_mode` is Orthographic).
    pub ortho_scale: f32,
    /// Region size in pixels.
    pub viewport: Vec2,
}

impl Camera {
    /// Creates a new camera for a region of the given pixel size.
    #[must_use]
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            near: 0.01,
            far: 1000.0,
            projection_mode: ProjectionMode::Perspective,
            ortho_scale: 1.0,
            viewport,
        }
    }

    /// Places the camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    /// Sets the projection mode.
    #[must_use]
    pub fn with_projection_mode(mut self, mode: ProjectionMode) -> Self {
        self.projection_mode = mode;
        self
    }

    /// Width over height; 1.0 for a degenerate region.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect = self.aspect_ratio();
        match self.projection_mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(self.fov, aspect, self.near, self.far),
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_scale;
                let half_width = half_height * aspect;
                // Symmetric depth range around the eye so geometry between the
                // camera and its target, and just behind the eye, is not clipped.
                let dist = (self.position - self.target).length();
                let ortho_depth = (dist + self.far).max(self.ortho_scale * 100.0);
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    -ortho_depth,
                    ortho_depth,
                )
            }
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Projector for Camera {
    /// Region coordinates with the origin at the bottom-left corner.
    fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection_matrix() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(clip.x, clip.y) / clip.w;
        Some((ndc + Vec2::ONE) * 0.5 * self.viewport)
    }
}
