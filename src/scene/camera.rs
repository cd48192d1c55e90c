//! Pinhole camera with cached matrices
//!
//! View, projection and view-projection matrices are rebuilt lazily: every
//! setter marks the cache dirty and the next projection request refreshes it.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use crate::consts::*;

/// Result of projecting a world position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    /// Pixel position, Y growing downward
    pub screen: Vec2,
    /// Post-divide normalized Z, for ordering and shading only
    pub depth: f32,
}

/// A perspective camera orbiting a target
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    /// Vertical field of view in degrees
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,

    view: Mat4,
    projection: Mat4,
    view_projection: Mat4,
    dirty: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_DISTANCE)
    }
}

impl Camera {
    /// Camera on the +Z axis looking at the origin
    pub fn new(distance: f32) -> Self {
        let distance = distance.clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: CAMERA_FOV,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            dirty: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Distance from position to target
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Matrices will be rebuilt before the next projection
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Move along the current view axis to `distance` from the target
    pub fn set_distance(&mut self, distance: f32) {
        let distance = distance.clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
        let dir = (self.position - self.target).normalize_or(Vec3::Z);
        self.position = self.target + dir * distance;
        self.dirty = true;
    }

    /// Update the aspect ratio; a zero height leaves it at 1
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        let aspect = if height > 0.0 && width > 0.0 {
            width / height
        } else {
            1.0
        };
        if aspect != self.aspect {
            log::debug!("Camera aspect {} -> {}", self.aspect, aspect);
            self.aspect = aspect;
            self.dirty = true;
        }
    }

    /// Orbit the position around the target.
    ///
    /// Returns false (and leaves the camera unchanged) when the new view
    /// direction would come within the pole margin of straight up or down.
    pub fn rotate_around(&mut self, delta_yaw: f32, delta_pitch: f32) -> bool {
        let offset = self.position - self.target;
        let view_dir = -offset.normalize_or_zero();
        let right = view_dir.cross(self.up).normalize_or(Vec3::X);

        let rotation = Quat::from_axis_angle(self.up, delta_yaw)
            * Quat::from_axis_angle(right, delta_pitch);
        let new_offset = rotation * offset;

        let new_dir = -new_offset.normalize_or_zero();
        let limit = CAMERA_POLE_MARGIN_DEG.to_radians().cos();
        if new_dir.dot(self.up).abs() > limit {
            return false;
        }

        self.position = self.target + new_offset;
        self.dirty = true;
        true
    }

    /// Move toward (positive) or away from the target, clamped to the distance limits
    pub fn zoom(&mut self, delta: f32) {
        self.set_distance(self.distance() - delta);
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        self.view = Mat4::look_at_rh(self.position, self.target, self.up);
        self.projection =
            Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far);
        self.view_projection = self.projection * self.view;
        self.dirty = false;
    }

    pub fn view_matrix(&mut self) -> Mat4 {
        self.refresh();
        self.view
    }

    pub fn projection_matrix(&mut self) -> Mat4 {
        self.refresh();
        self.projection
    }

    pub fn view_projection(&mut self) -> Mat4 {
        self.refresh();
        self.view_projection
    }

    /// Project a world position to pixels. A zero `w` yields the zero projection.
    pub fn project_to_screen(&mut self, world: Vec3, screen_size: Vec2) -> Projection {
        let clip = self.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w.abs() < f32::EPSILON {
            return Projection::default();
        }
        let ndc = clip.truncate() / clip.w;
        Projection {
            screen: Vec2::new(
                (ndc.x + 1.0) * 0.5 * screen_size.x,
                (1.0 - ndc.y) * 0.5 * screen_size.y,
            ),
            depth: ndc.z,
        }
    }
}
