//! Basic geometric value types

mod bounds;
mod vector;

pub use bounds::{BoundingBox2D, BoundingBox3D};
pub use vector::{Vector2, Vector3};
