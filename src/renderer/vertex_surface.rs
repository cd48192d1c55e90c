//! Tessellating drawing surface
//!
//! Turns draw calls into a triangle list ready for upload as a vertex buffer
//! (`bytemuck::cast_slice`). The buffer is cleared, not freed, every frame.

use glam::Vec2;

use super::shapes;
use super::surface::{DrawSurface, LinearGradient, Paint};
use super::vertex::Vertex;

/// Circle segment count
const CIRCLE_SEGMENTS: u32 = 16;

/// Per-frame draw call counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub circles: usize,
    pub outlines: usize,
    pub lines: usize,
    pub polygons: usize,
}

impl DrawStats {
    pub fn total(&self) -> usize {
        self.circles + self.outlines + self.lines + self.polygons
    }
}

/// `DrawSurface` that records triangles
#[derive(Debug, Clone)]
pub struct VertexSurface {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
    stats: DrawStats,
}

impl Default for VertexSurface {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            clear_color: [0.0; 4],
            stats: DrawStats::default(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a GPU vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }
}

impl DrawSurface for VertexSurface {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
        self.stats = DrawStats::default();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.stats.circles += 1;
        if paint.blur > 0.0 {
            shapes::soft_circle(
                &mut self.vertices,
                center,
                radius,
                paint.blur,
                paint.color,
                CIRCLE_SEGMENTS,
            );
        } else {
            shapes::circle(
                &mut self.vertices,
                center,
                radius,
                paint.color,
                CIRCLE_SEGMENTS,
            );
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.stats.outlines += 1;
        let half = paint.stroke_width * 0.5;
        shapes::ring(
            &mut self.vertices,
            center,
            (radius - half).max(0.0),
            radius + half,
            paint.color,
            paint.color,
            CIRCLE_SEGMENTS,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Paint) {
        self.stats.lines += 1;
        shapes::thick_line(&mut self.vertices, from, to, paint.stroke_width, paint.color);
    }

    fn fill_polygon(&mut self, outline: &[Vec2], gradient: &LinearGradient) {
        self.stats.polygons += 1;
        shapes::polygon(&mut self.vertices, outline, gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame() {
        let mut surface = VertexSurface::new();
        surface.fill_circle(Vec2::ZERO, 4.0, &Paint::default());
        assert_eq!(surface.stats().circles, 1);
        assert!(!surface.vertices().is_empty());

        surface.clear([0.1, 0.2, 0.3, 1.0]);
        assert_eq!(surface.stats().total(), 0);
        assert!(surface.vertices().is_empty());
        assert_eq!(surface.clear_color(), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_bytes_match_vertex_layout() {
        let mut surface = VertexSurface::new();
        surface.stroke_line(Vec2::ZERO, Vec2::new(10.0, 0.0), &Paint::default());
        assert_eq!(
            surface.as_bytes().len(),
            surface.vertices().len() * std::mem::size_of::<Vertex>()
        );
    }
}
