//! Trail drawing: fading lines, dots or a gradient ribbon

use glam::Vec2;

use super::surface::{DrawSurface, LinearGradient, Paint};
use crate::consts::TRAIL_CAPACITY;
use crate::scene::TrailBuffer;
use crate::settings::TrailStyle;

/// Parameters shared by every trail in a frame
#[derive(Debug, Clone, Copy)]
pub struct TrailParams {
    pub style: TrailStyle,
    /// Configured trail length; 0 disables drawing
    pub length: usize,
    /// Alpha cap of the newest sample
    pub opacity: f32,
}

/// Draws buffered trails, reusing its paint and outline storage across calls
#[derive(Debug, Clone)]
pub struct TrailRenderer {
    paint: Paint,
    outline: Vec<Vec2>,
}

impl Default for TrailRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailRenderer {
    pub fn new() -> Self {
        Self {
            paint: Paint::default(),
            outline: Vec::with_capacity(TRAIL_CAPACITY * 2),
        }
    }

    /// Draw one point's trail. Needs at least two samples.
    pub fn draw<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        trail: &TrailBuffer,
        params: &TrailParams,
        color: [f32; 4],
        point_size: f32,
    ) {
        if params.length == 0 || trail.len() < 2 {
            return;
        }
        match params.style {
            TrailStyle::Line => self.draw_line(surface, trail, params, color),
            TrailStyle::Dots => self.draw_dots(surface, trail, params, color),
            TrailStyle::Ribbon => self.draw_ribbon(surface, trail, params, color, point_size),
        }
    }

    fn draw_line<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        trail: &TrailBuffer,
        params: &TrailParams,
        color: [f32; 4],
    ) {
        let segments = (trail.len() - 1) as f32;
        let Some(mut prev) = trail.get(0) else {
            return;
        };
        for i in 1..trail.len() {
            let Some(next) = trail.get(i) else { break };
            // 0 at the oldest segment, 1 at the newest
            let f = i as f32 / segments;
            self.paint
                .set_color(color, f * params.opacity)
                .set_stroke_width(0.5 + 2.5 * f)
                .set_blur(0.0);
            surface.stroke_line(prev, next, &self.paint);
            prev = next;
        }
    }

    fn draw_dots<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        trail: &TrailBuffer,
        params: &TrailParams,
        color: [f32; 4],
    ) {
        let count = trail.len() as f32;
        for (i, pos) in trail.iter().enumerate() {
            let f = (i + 1) as f32 / count;
            self.paint.set_color(color, f * params.opacity).set_blur(0.0);
            surface.fill_circle(pos, 0.5 + 2.0 * f, &self.paint);
        }
    }

    fn draw_ribbon<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        trail: &TrailBuffer,
        params: &TrailParams,
        color: [f32; 4],
        point_size: f32,
    ) {
        let n = trail.len();
        let mut samples = [Vec2::ZERO; TRAIL_CAPACITY];
        for (slot, pos) in samples.iter_mut().zip(trail.iter()) {
            *slot = pos;
        }

        // Per-sample offset vectors; the last sample reuses the final segment direction
        let mut offsets = [Vec2::ZERO; TRAIL_CAPACITY];
        let max_half_width = point_size * 0.5;
        for i in 0..n {
            let (a, b) = if i + 1 < n {
                (samples[i], samples[i + 1])
            } else {
                (samples[i - 1], samples[i])
            };
            let Some(dir) = (b - a).try_normalize() else {
                return;
            };
            let f = (i + 1) as f32 / n as f32;
            offsets[i] = dir.perp() * (0.5 + max_half_width * f);
        }

        self.outline.clear();
        for i in 0..n {
            self.outline.push(samples[i] + offsets[i]);
        }
        for i in (0..n).rev() {
            self.outline.push(samples[i] - offsets[i]);
        }
        if self.outline.len() < 3 {
            return;
        }

        let gradient = LinearGradient {
            start: samples[0],
            end: samples[n - 1],
            start_color: [color[0], color[1], color[2], 0.0],
            end_color: [color[0], color[1], color[2], params.opacity],
        };
        surface.fill_polygon(&self.outline, &gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexSurface;

    fn trail_of(points: &[Vec2]) -> TrailBuffer {
        let mut trail = TrailBuffer::new(TRAIL_CAPACITY);
        for p in points {
            trail.push(*p);
        }
        trail
    }

    fn params(style: TrailStyle) -> TrailParams {
        TrailParams {
            style,
            length: 16,
            opacity: 0.5,
        }
    }

    fn diagonal(n: usize) -> Vec<Vec2> {
        (0..n).map(|i| Vec2::splat(i as f32 * 3.0)).collect()
    }

    #[test]
    fn test_single_sample_is_noop() {
        let mut renderer = TrailRenderer::new();
        let mut surface = VertexSurface::new();
        let trail = trail_of(&[Vec2::ONE]);
        renderer.draw(&mut surface, &trail, &params(TrailStyle::Line), [1.0; 4], 4.0);
        assert_eq!(surface.stats().total(), 0);
    }

    #[test]
    fn test_zero_length_is_noop() {
        let mut renderer = TrailRenderer::new();
        let mut surface = VertexSurface::new();
        let trail = trail_of(&diagonal(5));
        let params = TrailParams {
            length: 0,
            ..params(TrailStyle::Dots)
        };
        renderer.draw(&mut surface, &trail, &params, [1.0; 4], 4.0);
        assert_eq!(surface.stats().total(), 0);
    }

    #[test]
    fn test_line_fades_in_toward_newest() {
        let mut renderer = TrailRenderer::new();
        let mut surface = VertexSurface::new();
        let trail = trail_of(&diagonal(5));
        renderer.draw(&mut surface, &trail, &params(TrailStyle::Line), [1.0; 4], 4.0);
        assert_eq!(surface.stats().lines, 4);

        // 6 vertices per segment; compare first and last segment alpha
        let vertices = surface.vertices();
        let first = vertices[0].color[3];
        let last = vertices[vertices.len() - 1].color[3];
        assert!(first < last);
        assert!((last - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_dots_one_per_sample() {
        let mut renderer = TrailRenderer::new();
        let mut surface = VertexSurface::new();
        let trail = trail_of(&diagonal(6));
        renderer.draw(&mut surface, &trail, &params(TrailStyle::Dots), [1.0; 4], 4.0);
        assert_eq!(surface.stats().circles, 6);
    }

    /// Keeps the last polygon handed to the surface
    #[derive(Default)]
    struct PolygonCapture {
        outline: Vec<Vec2>,
        gradient: Option<LinearGradient>,
    }

    impl DrawSurface for PolygonCapture {
        fn clear(&mut self, _color: [f32; 4]) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _paint: &Paint) {}
        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _paint: &Paint) {}
        fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _paint: &Paint) {}

        fn fill_polygon(&mut self, outline: &[Vec2], gradient: &LinearGradient) {
            self.outline = outline.to_vec();
            self.gradient = Some(*gradient);
        }
    }

    #[test]
    fn test_ribbon_fills_one_polygon() {
        let mut renderer = TrailRenderer::new();
        let mut surface = VertexSurface::new();
        let trail = trail_of(&diagonal(6));
        renderer.draw(&mut surface, &trail, &params(TrailStyle::Ribbon), [1.0; 4], 4.0);
        assert_eq!(surface.stats().polygons, 1);
        assert!(!surface.vertices().is_empty());
    }

    #[test]
    fn test_ribbon_tapers_and_fades_toward_oldest() {
        let mut renderer = TrailRenderer::new();
        let mut surface = PolygonCapture::default();
        let samples = diagonal(6);
        let trail = trail_of(&samples);
        renderer.draw(&mut surface, &trail, &params(TrailStyle::Ribbon), [1.0; 4], 4.0);

        // One side oldest -> newest, then the other side back
        let outline = &surface.outline;
        assert_eq!(outline.len(), 12);
        let widths: Vec<f32> = (0..6)
            .map(|i| outline[i].distance(outline[11 - i]))
            .collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]), "{widths:?}");
        // Half width 0.5 + (point_size / 2) * (i + 1) / n
        assert!((widths[0] - 2.0 * (0.5 + 2.0 / 6.0)).abs() < 1e-4);
        assert!((widths[5] - 2.0 * 2.5).abs() < 1e-4);

        let gradient = surface.gradient.unwrap();
        assert_eq!(gradient.color_at(samples[0])[3], 0.0);
        assert!((gradient.color_at(samples[5])[3] - 0.5).abs() < 1e-6);
        assert!(gradient.color_at(samples[2])[3] < gradient.color_at(samples[3])[3]);
    }

    #[test]
    fn test_ribbon_skips_zero_length_segment() {
        let mut renderer = TrailRenderer::new();
        let mut surface = VertexSurface::new();
        let trail = trail_of(&[Vec2::ZERO, Vec2::ONE, Vec2::ONE, Vec2::new(2.0, 2.0)]);
        renderer.draw(&mut surface, &trail, &params(TrailStyle::Ribbon), [1.0; 4], 4.0);
        assert_eq!(surface.stats().polygons, 0);
    }
}
