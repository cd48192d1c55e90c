//! Dotsphere - an animated 3D point cloud
//!
//! Core modules:
//! - `scene`: Point sets, camera, trail history, hit testing
//! - `renderer`: Per-frame update and depth-sorted drawing
//! - `settings`: Configuration snapshot
//! - `math` / `easing`: Stateless helpers

pub mod easing;
pub mod error;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use easing::Easing;
pub use error::SettingsError;
pub use renderer::{DrawSurface, Renderer, VertexSurface};
pub use scene::{Camera, Point, TrailBuffer};
pub use settings::{RotationDirection, Settings, Shape, TrailStyle, WobbleAxis};

/// Engine configuration constants
pub mod consts {
    /// Physical slots in every trail buffer
    pub const TRAIL_CAPACITY: usize = 64;
    /// Largest point count accepted from a settings snapshot
    pub const MAX_POINT_COUNT: usize = 10_000;

    /// Camera distance limits
    pub const MIN_CAMERA_DISTANCE: f32 = 1.5;
    pub const MAX_CAMERA_DISTANCE: f32 = 10.0;
    pub const DEFAULT_CAMERA_DISTANCE: f32 = 4.0;
    /// Field of view in degrees
    pub const CAMERA_FOV: f32 = 45.0;
    /// Clip planes; NDC depth spans roughly 0.7..0.85 across the unit cloud at the default distance
    pub const CAMERA_NEAR: f32 = 0.5;
    pub const CAMERA_FAR: f32 = 20.0;
    /// Closest the orbit may get to the poles (degrees from straight up/down)
    pub const CAMERA_POLE_MARGIN_DEG: f32 = 18.0;

    /// Keeps manual pitch strictly inside (-90°, 90°)
    pub const PITCH_EPSILON: f32 = 0.01;

    /// Extra pixels around a point's size that still count as a hit
    pub const HIT_SLACK: f32 = 5.0;

    /// Seed for per-point wobble/pulse phases
    pub const PHASE_SEED: u64 = 42;
    /// Seed for the random-axis wobble directions
    pub const DIRECTION_SEED: u64 = 1337;

    /// Clear color for every frame
    pub const BACKGROUND: [f32; 4] = [0.04, 0.04, 0.07, 1.0];

    /// Bounding span the logo is rescaled to
    pub const LOGO_TARGET_SPAN: f32 = 1.8;
}
