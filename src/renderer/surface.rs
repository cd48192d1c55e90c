//! Drawing surface boundary
//!
//! The renderer only issues stroke/fill calls through `DrawSurface`; the
//! host supplies the implementation (canvas, GPU tessellator, ...).

use glam::Vec2;

/// Reusable stroke/fill style, reconfigured per draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: [f32; 4],
    /// Stroke width in pixels (ignored by fills)
    pub stroke_width: f32,
    /// Soft-edge radius in pixels; 0 is a hard edge
    pub blur: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: [1.0; 4],
            stroke_width: 1.0,
            blur: 0.0,
        }
    }
}

impl Paint {
    /// Set color with alpha multiplied by `alpha`
    #[inline]
    pub fn set_color(&mut self, color: [f32; 4], alpha: f32) -> &mut Self {
        self.color = [color[0], color[1], color[2], color[3] * alpha];
        self
    }

    #[inline]
    pub fn set_stroke_width(&mut self, width: f32) -> &mut Self {
        self.stroke_width = width;
        self
    }

    #[inline]
    pub fn set_blur(&mut self, blur: f32) -> &mut Self {
        self.blur = blur;
        self
    }
}

/// Two-stop linear gradient between screen positions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub start_color: [f32; 4],
    pub end_color: [f32; 4],
}

impl LinearGradient {
    /// Color at screen position `p`, projected onto the gradient axis
    pub fn color_at(&self, p: Vec2) -> [f32; 4] {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        let t = if len_sq > 1e-6 {
            ((p - self.start).dot(axis) / len_sq).clamp(0.0, 1.0)
        } else {
            1.0
        };
        crate::math::lerp_color(self.start_color, self.end_color, t)
    }
}

/// Primitive 2D drawing operations the renderer needs
pub trait DrawSurface {
    fn clear(&mut self, color: [f32; 4]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Paint);
    /// Fill a closed outline with a gradient
    fn fill_polygon(&mut self, outline: &[Vec2], gradient: &LinearGradient);
}
