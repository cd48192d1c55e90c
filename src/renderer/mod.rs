//! Rendering module
//!
//! Turns the animated scene into 2D draw calls through a `DrawSurface`.

pub mod engine;
pub mod shapes;
pub mod surface;
pub mod trail_renderer;
pub mod vertex;
pub mod vertex_surface;

pub use engine::{DrawItem, Renderer};
pub use surface::{DrawSurface, LinearGradient, Paint};
pub use trail_renderer::{TrailParams, TrailRenderer};
pub use vertex::Vertex;
pub use vertex_surface::{DrawStats, VertexSurface};
