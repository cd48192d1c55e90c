//! Triangle tessellation for 2D primitives
//!
//! Every function appends to an existing vertex list so a surface can reuse
//! one buffer across frames.

use glam::Vec2;
use std::f32::consts::TAU;

use super::surface::LinearGradient;
use super::vertex::Vertex;

#[inline]
fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(on_circle(center, radius, theta1), color));
        out.push(Vertex::at(on_circle(center, radius, theta2), color));
    }
}

/// Band between two radii, with separate inner and outer colors
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: [f32; 4],
    outer_color: [f32; 4],
    segments: u32,
) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = on_circle(center, inner_radius, theta1);
        let outer1 = on_circle(center, outer_radius, theta1);
        let inner2 = on_circle(center, inner_radius, theta2);
        let outer2 = on_circle(center, outer_radius, theta2);

        // Two triangles per segment
        out.push(Vertex::at(inner1, inner_color));
        out.push(Vertex::at(outer1, outer_color));
        out.push(Vertex::at(inner2, inner_color));

        out.push(Vertex::at(inner2, inner_color));
        out.push(Vertex::at(outer1, outer_color));
        out.push(Vertex::at(outer2, outer_color));
    }
}

/// Circle whose edge fades to transparent over `blur` pixels
pub fn soft_circle(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    blur: f32,
    color: [f32; 4],
    segments: u32,
) {
    let core = (radius - blur * 0.5).max(0.0);
    let edge = radius + blur * 0.5;
    let clear = [color[0], color[1], color[2], 0.0];
    circle(out, center, core, color, segments);
    ring(out, center, core, edge, color, clear, segments);
}

/// Line segment as a quad of the given width
pub fn thick_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = dir.perp() * (width * 0.5);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    out.push(Vertex::at(a1, color));
    out.push(Vertex::at(b1, color));
    out.push(Vertex::at(a2, color));

    out.push(Vertex::at(a2, color));
    out.push(Vertex::at(b1, color));
    out.push(Vertex::at(b2, color));
}

/// Closed outline filled with a gradient.
///
/// Even-length outlines are treated as two sides walked in opposite
/// directions (a ribbon) and stitched into quads; anything else is fanned
/// from the first vertex.
pub fn polygon(out: &mut Vec<Vertex>, outline: &[Vec2], gradient: &LinearGradient) {
    let n = outline.len();
    if n < 3 {
        return;
    }
    let vertex = |i: usize| Vertex::at(outline[i], gradient.color_at(outline[i]));

    if n % 2 == 0 {
        let half = n / 2;
        for i in 0..half - 1 {
            let a1 = i;
            let a2 = i + 1;
            let b1 = n - 1 - i;
            let b2 = n - 2 - i;

            out.push(vertex(a1));
            out.push(vertex(b1));
            out.push(vertex(a2));

            out.push(vertex(a2));
            out.push(vertex(b1));
            out.push(vertex(b2));
        }
    } else {
        for i in 1..n - 1 {
            out.push(vertex(0));
            out.push(vertex(i));
            out.push(vertex(i + 1));
        }
    }
}
