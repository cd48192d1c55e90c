//! A single visualized point

use glam::Vec3;

use super::trail::TrailBuffer;

/// One point of the cloud. Created in a batch by the renderer, identified by index.
#[derive(Debug, Clone)]
pub struct Point {
    /// Stable identity (0..N-1)
    pub index: usize,
    /// Unit-scale position on the generated shape
    pub base_position: Vec3,
    /// Rotated and wobbled position, recomputed every update
    pub position: Vec3,
    /// Offset for wobble and pulse signals
    pub phase: f32,
    /// Fixed unit direction for random-axis wobble
    pub random_direction: Vec3,
    /// Marker radius in pixels
    pub size: f32,
    pub color: [f32; 4],
    pub selected: bool,
    pub hovered: bool,
    /// Normalized depth from the last projection (-1 near, 1 far)
    pub depth: f32,
    pub trail: TrailBuffer,
}

impl Point {
    pub fn new(
        index: usize,
        base_position: Vec3,
        phase: f32,
        random_direction: Vec3,
        color: [f32; 4],
        trail_length: usize,
    ) -> Self {
        Self {
            index,
            base_position,
            position: base_position,
            phase,
            random_direction,
            size: 0.0,
            color,
            selected: false,
            hovered: false,
            depth: 0.0,
            trail: TrailBuffer::new(trail_length),
        }
    }

    /// Drawn with a glow underlay
    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.selected || self.hovered
    }
}
