//! Point cloud renderer
//!
//! Owns the points and the camera. Per frame the host calls `update(dt)` and
//! then `render(surface, w, h)`; neither allocates once the points exist.

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

use super::surface::{DrawSurface, Paint};
use super::trail_renderer::{TrailParams, TrailRenderer};
use crate::consts::*;
use crate::math::{lerp_color, normalize_angle, rotate_yaw_pitch, tangent_direction};
use crate::scene::{self, Camera, Point, PointSet};
use crate::settings::{Settings, Shape, WobbleAxis};

/// Host window size assumed until the first render
const DEFAULT_SCREEN: Vec2 = Vec2::new(800.0, 600.0);

/// One projected point, queued for back-to-front drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub index: usize,
    pub screen: Vec2,
    pub depth: f32,
}

/// Sort farthest first (largest depth), ties by index
pub fn sort_back_to_front(items: &mut [DrawItem]) {
    items.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth).then(a.index.cmp(&b.index)));
}

/// Offset `position` by the wobble signal for this point at time `time`
pub fn wobble(settings: &Settings, time: f32, point: &Point, position: Vec3) -> Vec3 {
    if settings.wobble_amplitude <= 0.0 {
        return position;
    }
    let signal = (time * settings.wobble_frequency + point.phase).sin();
    let offset = signal * settings.wobble_amplitude;
    match settings.wobble_axis {
        WobbleAxis::Radial => position * (1.0 + offset),
        WobbleAxis::Tangential => position + tangent_direction(position) * offset,
        WobbleAxis::Random => position + point.random_direction * offset,
    }
}

/// Marker radius before depth scaling
pub fn point_size(settings: &Settings, time: f32, point: &Point) -> f32 {
    let variation = settings.size_variation * ((point.index * 7) % 10) as f32 / 10.0;
    let multiplier = if settings.pulse_enabled {
        (time * settings.pulse_speed + point.phase).sin() * settings.pulse_amount
    } else {
        1.0
    };
    ((settings.point_size + variation) * (1.0 + multiplier)).max(0.0)
}

/// Styles reconfigured for every point instead of rebuilt
#[derive(Debug, Clone, Default)]
struct PointPaints {
    fill: Paint,
    glow: Paint,
    outline: Paint,
}

/// Animation and projection engine for the point cloud
#[derive(Debug, Clone)]
pub struct Renderer {
    settings: Settings,
    camera: Camera,
    points: Vec<Point>,
    /// Reused every frame; capacity matches the point count
    draw_list: Vec<DrawItem>,
    trail_renderer: TrailRenderer,
    paints: PointPaints,
    screen_size: Vec2,

    time: f32,
    yaw: f32,
    pitch: f32,
    /// Active easing curve sampled at the fractional second; not applied
    eased_progress: f32,
    hovered: Option<usize>,
}

impl Renderer {
    pub fn new(settings: Settings) -> Self {
        let mut renderer = Self {
            camera: Camera::new(settings.camera_distance),
            settings: settings.clone(),
            points: Vec::new(),
            draw_list: Vec::new(),
            trail_renderer: TrailRenderer::new(),
            paints: PointPaints::default(),
            screen_size: DEFAULT_SCREEN,
            time: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            eased_progress: 0.0,
            hovered: None,
        };
        renderer
            .camera
            .set_screen_size(DEFAULT_SCREEN.x, DEFAULT_SCREEN.y);
        renderer.generate(settings);
        renderer
    }

    /// Rebuild the point collection for `settings`
    pub fn generate(&mut self, settings: Settings) {
        let count = settings.point_count;
        let PointSet { positions, phases } = match settings.shape {
            Shape::Sphere => scene::sphere(count),
            Shape::Logo => scene::logo(count),
        };
        let directions = scene::random_directions(count);

        let last = count.saturating_sub(1).max(1) as f32;
        self.points = positions
            .into_iter()
            .zip(phases)
            .zip(directions)
            .enumerate()
            .map(|(i, ((base, phase), direction))| {
                let color = if settings.use_gradient {
                    lerp_color(settings.primary_color, settings.secondary_color, i as f32 / last)
                } else {
                    settings.primary_color
                };
                let mut point =
                    Point::new(i, base, phase, direction, color, settings.trail_length);
                point.size = point_size(&settings, self.time, &point);
                point
            })
            .collect();
        self.draw_list = Vec::with_capacity(self.points.len());
        self.hovered = None;
        self.camera.set_distance(settings.camera_distance);

        log::info!(
            "Generated {} points ({})",
            self.points.len(),
            settings.shape.as_str()
        );
        self.settings = settings;
    }

    /// Apply a new snapshot, regenerating only when the point set itself changes
    pub fn update_settings(&mut self, settings: Settings) {
        if self.settings.needs_regeneration(&settings) {
            self.generate(settings);
            return;
        }

        if settings.trail_length != self.settings.trail_length {
            log::debug!(
                "Trail length {} -> {}",
                self.settings.trail_length,
                settings.trail_length
            );
            for point in &mut self.points {
                point.trail.set_max_len(settings.trail_length);
                if settings.trail_length == 0 {
                    point.trail.clear();
                }
            }
        }
        if settings.easing != self.settings.easing {
            log::debug!(
                "Easing {} -> {}",
                self.settings.easing.as_str(),
                settings.easing.as_str()
            );
        }
        if settings.camera_distance != self.settings.camera_distance {
            log::debug!("Camera distance -> {}", settings.camera_distance);
            self.camera.set_distance(settings.camera_distance);
        }
        self.settings = settings;
    }

    /// Advance the animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.time += dt;

        if self.settings.auto_rotate {
            let sign = self.settings.rotation_direction.sign();
            self.yaw = normalize_angle(self.yaw + self.settings.rotation_speed * dt * sign);
        }
        self.eased_progress = self.settings.easing.apply(self.time.fract());

        let settings = &self.settings;
        let time = self.time;
        for point in &mut self.points {
            let rotated = rotate_yaw_pitch(point.base_position, self.yaw, self.pitch);
            point.position = wobble(settings, time, point, rotated);
            point.size = point_size(settings, time, point);
        }
    }

    /// Draw the current frame: trails first, then points, both back to front
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        self.screen_size = Vec2::new(width, height);
        self.camera.set_screen_size(width, height);
        surface.clear(BACKGROUND);

        let record_trails = self.settings.trails_enabled();
        self.draw_list.clear();
        for point in &mut self.points {
            let projected = self
                .camera
                .project_to_screen(point.position, self.screen_size);
            point.depth = projected.depth;
            if record_trails {
                point.trail.push(projected.screen);
            }
            self.draw_list.push(DrawItem {
                index: point.index,
                screen: projected.screen,
                depth: projected.depth,
            });
        }
        sort_back_to_front(&mut self.draw_list);

        if record_trails {
            let params = TrailParams {
                style: self.settings.trail_style,
                length: self.settings.trail_length,
                opacity: self.settings.trail_opacity,
            };
            for item in &self.draw_list {
                let point = &self.points[item.index];
                self.trail_renderer
                    .draw(surface, &point.trail, &params, point.color, point.size);
            }
        }

        for item in &self.draw_list {
            draw_point(
                surface,
                &mut self.paints,
                self.settings.depth_scaling,
                &self.points[item.index],
                item,
            );
        }
    }

    /// Drag rotation of the cloud; pitch stays strictly inside ±90°
    pub fn manual_rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let limit = FRAC_PI_2 - PITCH_EPSILON;
        self.yaw = normalize_angle(self.yaw + delta_yaw);
        self.pitch = (self.pitch + delta_pitch).clamp(-limit, limit);
    }

    /// Back to the initial pose: time, rotation, camera, trails and flags
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.eased_progress = 0.0;
        self.camera = Camera::new(self.settings.camera_distance);
        self.camera
            .set_screen_size(self.screen_size.x, self.screen_size.y);
        self.hovered = None;
        for point in &mut self.points {
            point.position = point.base_position;
            point.selected = false;
            point.hovered = false;
            point.trail.clear();
        }
        log::debug!("Renderer reset");
    }

    // === Pointer queries ===

    /// Point under `screen_pos`, if any lies within `tolerance` pixels
    pub fn hit_test(&mut self, screen_pos: Vec2, tolerance: f32) -> Option<&Point> {
        let index = scene::find_nearest(
            &self.points,
            &mut self.camera,
            self.screen_size,
            screen_pos,
            tolerance,
        )?;
        self.points.get(index)
    }

    pub fn points_in_radius(&mut self, center: Vec2, radius: f32) -> Vec<usize> {
        scene::find_in_radius(
            &self.points,
            &mut self.camera,
            self.screen_size,
            center,
            radius,
        )
    }

    pub fn points_in_rectangle(&mut self, corner_a: Vec2, corner_b: Vec2) -> Vec<usize> {
        scene::find_in_rectangle(
            &self.points,
            &mut self.camera,
            self.screen_size,
            corner_a,
            corner_b,
        )
    }

    // === Selection and hover ===

    /// Returns false if `index` is out of range
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Flip selection; returns the new state
    pub fn toggle_selected(&mut self, index: usize) -> Option<bool> {
        let point = self.points.get_mut(index)?;
        point.selected = !point.selected;
        Some(point.selected)
    }

    /// Move the hover highlight; at most one point is hovered
    pub fn set_hovered(&mut self, index: Option<usize>) {
        if let Some(prev) = self.hovered.take() {
            if let Some(point) = self.points.get_mut(prev) {
                point.hovered = false;
            }
        }
        if let Some(point) = index.and_then(|i| self.points.get_mut(i)) {
            point.hovered = true;
            self.hovered = Some(point.index);
        }
    }

    pub fn clear_selection(&mut self) {
        for point in &mut self.points {
            point.selected = false;
        }
    }

    pub fn clear_hover(&mut self) {
        self.set_hovered(None);
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.points.iter().filter(|p| p.selected).map(|p| p.index)
    }

    // === Camera ===

    pub fn zoom(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    /// Orbit the camera; false when the move would reach a pole
    pub fn orbit_camera(&mut self, delta_yaw: f32, delta_pitch: f32) -> bool {
        self.camera.rotate_around(delta_yaw, delta_pitch)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    // === State ===

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Seconds of animation so far
    pub fn elapsed(&self) -> f32 {
        self.time
    }

    /// Current (yaw, pitch) in radians
    pub fn rotation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    pub fn eased_progress(&self) -> f32 {
        self.eased_progress
    }

    /// Last frame's draw order, farthest first
    pub fn draw_order(&self) -> &[DrawItem] {
        &self.draw_list
    }
}

fn draw_point<S: DrawSurface + ?Sized>(
    surface: &mut S,
    paints: &mut PointPaints,
    depth_scaling: bool,
    point: &Point,
    item: &DrawItem,
) {
    let (size_scale, alpha) = if depth_scaling {
        // Points inside the near plane would otherwise grow past full size
        let depth = item.depth.clamp(-1.0, 1.0);
        (1.0 - (depth + 1.0) * 0.25, 0.5 + (1.0 - depth) * 0.25)
    } else {
        (1.0, 1.0)
    };
    let radius = (point.size * size_scale).max(0.0);

    if point.is_highlighted() {
        paints
            .glow
            .set_color(point.color, 0.3 * alpha)
            .set_blur(radius);
        surface.fill_circle(item.screen, radius * 2.0, &paints.glow);
    }

    paints.fill.set_color(point.color, alpha).set_blur(0.0);
    surface.fill_circle(item.screen, radius, &paints.fill);

    if point.selected {
        paints
            .outline
            .set_color(point.color, alpha)
            .set_stroke_width(1.5)
            .set_blur(0.0);
        surface.stroke_circle(item.screen, radius + 4.0, &paints.outline);
    }
}
