//! Vector and rotation helpers shared by the generators, camera and renderer

use glam::{Quat, Vec2, Vec3};

/// Rotate around the X axis
#[inline]
pub fn rotate_x(v: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_x(angle) * v
}

/// Rotate around the Y axis
#[inline]
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * v
}

/// Rotate around the Z axis
#[inline]
pub fn rotate_z(v: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_z(angle) * v
}

/// Apply yaw (around Y) first, then pitch (around X)
#[inline]
pub fn rotate_yaw_pitch(v: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    rotate_x(rotate_y(v, yaw), pitch)
}

/// Normalized angle to [-π, π]; constant time for any finite input
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two RGBA colors
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}

/// Pixel distance between two screen positions
#[inline]
pub fn screen_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector perpendicular to `position`, lying in the horizontal orbit plane.
///
/// Crosses the radial direction with world up; when the position is (nearly)
/// aligned with up that cross product vanishes and world right is used instead.
pub fn tangent_direction(position: Vec3) -> Vec3 {
    let radial = position.normalize_or_zero();
    let tangent = radial.cross(Vec3::Y);
    if tangent.length_squared() > 1e-6 {
        return tangent.normalize();
    }
    radial.cross(Vec3::X).normalize_or_zero()
}
