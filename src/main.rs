//! Dotsphere headless demo
//!
//! Runs the engine at a fixed 60 Hz for a few seconds against a tessellating
//! surface and logs what each stage produced. Pass a settings JSON file as the
//! first argument to override the defaults.

use dotsphere::renderer::VertexSurface;
use dotsphere::{Renderer, Settings, Shape, TrailStyle};
use glam::Vec2;

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: usize = 180;
const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Settings::from_json(&json).map_err(|e| e.to_string()))
    {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path);
            settings
        }
        Err(e) => {
            log::warn!("Failed to load {}: {} - using defaults", path, e);
            Settings::default()
        }
    }
}

fn run(renderer: &mut Renderer, surface: &mut VertexSurface) {
    for _ in 0..FRAMES {
        renderer.update(FRAME_DT);
        renderer.render(surface, WIDTH, HEIGHT);
    }
    let stats = surface.stats();
    log::info!(
        "t={:.2}s: {} vertices ({} circles, {} lines, {} polygons)",
        renderer.elapsed(),
        surface.vertices().len(),
        stats.circles,
        stats.lines,
        stats.polygons
    );
}

fn main() {
    env_logger::init();
    log::info!("Dotsphere (headless) starting...");

    let settings = load_settings();
    let mut renderer = Renderer::new(settings.clone());
    let mut surface = VertexSurface::with_capacity(64 * 1024);
    run(&mut renderer, &mut surface);

    let center = Vec2::new(WIDTH, HEIGHT) * 0.5;
    if let Some(index) = renderer.hit_test(center, 20.0).map(|p| p.index) {
        renderer.set_selected(index, true);
        renderer.set_hovered(Some(index));
        log::info!("Selected point {} under the screen center", index);
    }

    renderer.update_settings(Settings {
        trail_style: TrailStyle::Ribbon,
        ..settings.clone()
    });
    run(&mut renderer, &mut surface);

    renderer.update_settings(Settings {
        shape: Shape::Logo,
        trail_style: TrailStyle::Dots,
        ..settings
    });
    run(&mut renderer, &mut surface);

    println!(
        "{} points, {} bytes of vertex data in the last frame",
        renderer.points().len(),
        surface.as_bytes().len()
    );
}
