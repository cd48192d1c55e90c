//! Property tests for generators, trail buffers and hit testing

use dotsphere::consts::{LOGO_TARGET_SPAN, TRAIL_CAPACITY};
use dotsphere::scene::{Camera, Point, TrailBuffer, find_nearest, generators, logo, sphere};
use glam::{Vec2, Vec3};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sphere_points_are_unit_length(count in 2usize..2000) {
        let set = sphere(count);
        prop_assert_eq!(set.positions.len(), count);
        prop_assert_eq!(set.phases.len(), count);
        for p in &set.positions {
            prop_assert!((p.length() - 1.0).abs() < 1e-5);
        }
        let (min, max) = generators::bounds(&set.positions).unwrap();
        prop_assert!((min.y + 1.0).abs() < 1e-5);
        prop_assert!((max.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn generation_is_deterministic(count in 0usize..500) {
        prop_assert_eq!(sphere(count), sphere(count));
        prop_assert_eq!(logo(count), logo(count));
    }

    #[test]
    fn logo_fits_target_span(count in 8usize..1500) {
        let set = logo(count);
        prop_assert_eq!(set.positions.len(), count);
        let (min, max) = generators::bounds(&set.positions).unwrap();
        prop_assert!(((max - min).max_element() - LOGO_TARGET_SPAN).abs() < 1e-3);
        prop_assert!(((min + max) * 0.5).length() < 1e-3);
    }

    #[test]
    fn trail_count_saturates(inserts in 0usize..300) {
        let mut trail = TrailBuffer::new(TRAIL_CAPACITY);
        for i in 0..inserts {
            trail.push(Vec2::splat(i as f32));
        }
        prop_assert_eq!(trail.len(), inserts.min(TRAIL_CAPACITY));
        if inserts > TRAIL_CAPACITY {
            let m = inserts - TRAIL_CAPACITY;
            prop_assert_eq!(trail.get(0), Some(Vec2::splat(m as f32)));
        }
        if inserts > 0 {
            prop_assert_eq!(trail.newest(), Some(Vec2::splat((inserts - 1) as f32)));
        }
    }

    #[test]
    fn trail_respects_configured_length(max_len in 0usize..100, inserts in 0usize..200) {
        let mut trail = TrailBuffer::new(max_len);
        for i in 0..inserts {
            trail.push(Vec2::splat(i as f32));
        }
        prop_assert!(trail.len() <= max_len.min(TRAIL_CAPACITY));
        prop_assert_eq!(trail.iter().count(), trail.len());
    }

    #[test]
    fn distant_points_never_hit(offset in 31.0f32..300.0, angle in 0.0f32..std::f32::consts::TAU) {
        let screen = Vec2::new(800.0, 600.0);
        let mut camera = Camera::default();
        camera.set_screen_size(screen.x, screen.y);

        let mut point = Point::new(0, Vec3::ZERO, 0.0, Vec3::X, [1.0; 4], 0);
        point.size = 5.0;
        let points = [point];

        let query = screen * 0.5 + Vec2::new(angle.cos(), angle.sin()) * offset;
        prop_assert_eq!(find_nearest(&points, &mut camera, screen, query, 20.0), None);
        prop_assert_eq!(find_nearest(&points, &mut camera, screen, screen * 0.5, 20.0), Some(0));
    }
}
