//! Procedural point sets
//!
//! Each generator is pure: the same count always yields the same positions and
//! phases. Randomness comes from a `Pcg32` created per call from a fixed seed.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::consts::{DIRECTION_SEED, LOGO_TARGET_SPAN, PHASE_SEED};
use crate::math::rotate_z;

/// Golden ratio φ
const PHI: f32 = 1.618_034;

/// 2π/φ², the most even incremental angular step
pub fn golden_angle() -> f32 {
    TAU / (PHI * PHI)
}

/// Base positions plus a parallel list of per-point phase offsets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    pub positions: Vec<Vec3>,
    pub phases: Vec<f32>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// `count` phases uniform in [0, 2π)
pub fn phases(count: usize) -> Vec<f32> {
    let mut rng = Pcg32::seed_from_u64(PHASE_SEED);
    (0..count).map(|_| rng.random_range(0.0..TAU)).collect()
}

/// `count` unit vectors uniform on the sphere, for random-axis wobble
pub fn random_directions(count: usize) -> Vec<Vec3> {
    let mut rng = Pcg32::seed_from_u64(DIRECTION_SEED);
    (0..count)
        .map(|_| {
            let z: f32 = rng.random_range(-1.0..1.0);
            let theta: f32 = rng.random_range(0.0..TAU);
            let r = (1.0 - z * z).max(0.0).sqrt();
            Vec3::new(r * theta.cos(), r * theta.sin(), z)
        })
        .collect()
}

/// Fibonacci sphere: `count` points spread evenly over the unit sphere
pub fn sphere(count: usize) -> PointSet {
    let golden = golden_angle();
    let denom = count.saturating_sub(1).max(1) as f32;

    let positions = (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * i as f32 / denom;
            let radius = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden * i as f32;
            Vec3::new(theta.cos() * radius, y, theta.sin() * radius)
        })
        .collect();

    PointSet {
        positions,
        phases: phases(count),
    }
}

// Ring geometry, in pre-normalization units
const RING_HALF_STRAIGHT: f32 = 0.35;
const RING_CORNER_RADIUS: f32 = 0.15;
const RING_TUBE_RADIUS: f32 = 0.035;
const RING_SPACING: f32 = 0.42;
const RING_Z_STAGGER: f32 = 0.06;

/// Placement of one ring: Z rotation and 3D offset
struct RingPlacement {
    rotation: f32,
    offset: Vec3,
}

/// Four rings in a diamond, alternately tilted ±45° so neighbours interlock
fn ring_placements() -> [RingPlacement; 4] {
    [
        RingPlacement {
            rotation: FRAC_PI_4,
            offset: Vec3::new(0.0, RING_SPACING, RING_Z_STAGGER),
        },
        RingPlacement {
            rotation: -FRAC_PI_4,
            offset: Vec3::new(RING_SPACING, 0.0, -RING_Z_STAGGER),
        },
        RingPlacement {
            rotation: FRAC_PI_4,
            offset: Vec3::new(0.0, -RING_SPACING, RING_Z_STAGGER),
        },
        RingPlacement {
            rotation: -FRAC_PI_4,
            offset: Vec3::new(-RING_SPACING, 0.0, -RING_Z_STAGGER),
        },
    ]
}

/// One piece of the rounded-rectangle perimeter
#[derive(Debug, Clone, Copy)]
enum PathSegment {
    Straight { from: Vec2, to: Vec2 },
    Corner { center: Vec2, start_angle: f32 },
}

impl PathSegment {
    fn length(&self) -> f32 {
        match self {
            PathSegment::Straight { from, to } => from.distance(*to),
            PathSegment::Corner { .. } => RING_CORNER_RADIUS * FRAC_PI_2,
        }
    }

    /// Position and unit tangent at fraction `u` of this segment
    fn sample(&self, u: f32) -> (Vec2, Vec2) {
        match *self {
            PathSegment::Straight { from, to } => {
                (from.lerp(to, u), (to - from).normalize_or_zero())
            }
            PathSegment::Corner {
                center,
                start_angle,
            } => {
                // Corners are walked clockwise (decreasing angle)
                let angle = start_angle - u * FRAC_PI_2;
                let radial = Vec2::new(angle.cos(), angle.sin());
                (
                    center + radial * RING_CORNER_RADIUS,
                    Vec2::new(radial.y, -radial.x),
                )
            }
        }
    }
}

/// Perimeter of one ring, clockwise from the bottom edge
fn ring_path() -> [PathSegment; 8] {
    let s = RING_HALF_STRAIGHT;
    let e = RING_HALF_STRAIGHT + RING_CORNER_RADIUS;
    [
        PathSegment::Straight {
            from: Vec2::new(s, -e),
            to: Vec2::new(-s, -e),
        },
        PathSegment::Corner {
            center: Vec2::new(-s, -s),
            start_angle: -FRAC_PI_2,
        },
        PathSegment::Straight {
            from: Vec2::new(-e, -s),
            to: Vec2::new(-e, s),
        },
        PathSegment::Corner {
            center: Vec2::new(-s, s),
            start_angle: PI,
        },
        PathSegment::Straight {
            from: Vec2::new(-s, e),
            to: Vec2::new(s, e),
        },
        PathSegment::Corner {
            center: Vec2::new(s, s),
            start_angle: FRAC_PI_2,
        },
        PathSegment::Straight {
            from: Vec2::new(e, s),
            to: Vec2::new(e, -s),
        },
        PathSegment::Corner {
            center: Vec2::new(s, -s),
            start_angle: 0.0,
        },
    ]
}

/// Point on the ring centerline at arc-length fraction `t` in [0, 1)
fn ring_centerline(path: &[PathSegment; 8], perimeter: f32, t: f32) -> (Vec2, Vec2) {
    let mut remaining = t.rem_euclid(1.0) * perimeter;
    for segment in path {
        let len = segment.length();
        if remaining <= len {
            return segment.sample(remaining / len);
        }
        remaining -= len;
    }
    path[path.len() - 1].sample(1.0)
}

/// Four interlocking rounded-rectangle rings, normalized to a fixed span
pub fn logo(count: usize) -> PointSet {
    if count == 0 {
        return PointSet::default();
    }

    let path = ring_path();
    let perimeter: f32 = path.iter().map(PathSegment::length).sum();
    let golden = golden_angle();
    let placements = ring_placements();

    let per_ring = count / placements.len();
    let remainder = count % placements.len();

    let mut positions = Vec::with_capacity(count);
    for (ring, placement) in placements.iter().enumerate() {
        let n = per_ring + usize::from(ring < remainder);
        for j in 0..n {
            let t = j as f32 / n as f32;
            let (center, tangent) = ring_centerline(&path, perimeter, t);

            // Outward normal of a clockwise path; Z is the binormal
            let normal = Vec2::new(-tangent.y, tangent.x);
            let tube_phase = golden * j as f32;
            let radial = normal * tube_phase.cos() * RING_TUBE_RADIUS;
            let local = Vec3::new(
                center.x + radial.x,
                center.y + radial.y,
                tube_phase.sin() * RING_TUBE_RADIUS,
            );

            positions.push(rotate_z(local, placement.rotation) + placement.offset);
        }
    }

    normalize_to_span(&mut positions, LOGO_TARGET_SPAN);

    PointSet {
        positions,
        phases: phases(count),
    }
}

/// Recenter on the bounding-box center and scale the largest extent to `span`
fn normalize_to_span(positions: &mut [Vec3], span: f32) {
    let Some((min, max)) = bounds(positions) else {
        return;
    };

    let center = (min + max) * 0.5;
    let extent = (max - min).max_element();
    let scale = if extent > 1e-6 { span / extent } else { 1.0 };

    for p in positions.iter_mut() {
        *p = (*p - center) * scale;
    }
}

/// Axis-aligned bounds of a point list
pub fn bounds(positions: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *positions.first()?;
    Some(
        positions
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_points_on_unit_sphere() {
        let set = sphere(500);
        assert_eq!(set.len(), 500);
        for p in &set.positions {
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_spans_poles() {
        let set = sphere(37);
        let (min, max) = bounds(&set.positions).unwrap();
        assert!((min.y + 1.0).abs() < 1e-6);
        assert!((max.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_single_point() {
        let set = sphere(1);
        assert_eq!(set.len(), 1);
        assert!(set.positions[0].is_finite());
        assert_eq!(set.phases.len(), 1);
    }

    #[test]
    fn test_empty_counts() {
        assert!(sphere(0).is_empty());
        assert!(logo(0).is_empty());
        assert!(phases(0).is_empty());
    }

    #[test]
    fn test_phases_in_range_and_deterministic() {
        let a = phases(100);
        let b = phases(100);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| (0.0..TAU).contains(p)));
    }

    #[test]
    fn test_random_directions_unit() {
        for d in random_directions(64) {
            assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_logo_normalized() {
        let set = logo(400);
        assert_eq!(set.len(), 400);
        let (min, max) = bounds(&set.positions).unwrap();
        let extent = (max - min).max_element();
        assert!((extent - LOGO_TARGET_SPAN).abs() < 1e-3);
        let center = (min + max) * 0.5;
        assert!(center.length() < 1e-3);
    }

    #[test]
    fn test_logo_uneven_split() {
        // 4 rings, remainder to the first rings
        let set = logo(7);
        assert_eq!(set.len(), 7);
        assert_eq!(set.phases.len(), 7);
    }

    #[test]
    fn test_ring_path_is_closed() {
        let path = ring_path();
        for pair in path.windows(2) {
            let (end, _) = pair[0].sample(1.0);
            let (start, _) = pair[1].sample(0.0);
            assert!(end.distance(start) < 1e-5);
        }
        let (end, _) = path[7].sample(1.0);
        let (start, _) = path[0].sample(0.0);
        assert!(end.distance(start) < 1e-5);
    }
}
