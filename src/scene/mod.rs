//! Scene model
//!
//! Everything the renderer animates and queries, free of any drawing surface:
//! - Point-set generators (pure, seeded)
//! - Points and their trail history
//! - The camera and screen-space hit testing

pub mod camera;
pub mod generators;
pub mod point;
pub mod trail;

pub use camera::{Camera, Projection};
pub use generators::{PointSet, logo, phases, random_directions, sphere};
pub use hit_test::{find_in_radius, find_in_rectangle, find_nearest};
pub use point::Point;
pub use trail::TrailBuffer;
