//! Line entity

use crate::types::{BoundingBox2D, Vector2};

/// A straight segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Vector2,
    pub end: Vector2,
    /// Position of the source marker in the ENTITIES token stream
    pub index: usize,
    pub layer: String,
}

impl Line {
    pub fn new(start: Vector2, end: Vector2, index: usize, layer: impl Into<String>) -> Self {
        Line {
            start,
            end,
            index,
            layer: layer.into(),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn midpoint(&self) -> Vector2 {
        self.start.midpoint(&self.end)
    }

    /// The same segment traversed end to start.
    pub fn reversed(&self) -> Line {
        Line {
            start: self.end,
            end: self.start,
            ..self.clone()
        }
    }

    pub fn bounding_box(&self) -> BoundingBox2D {
        let mut bbox = BoundingBox2D::new(self.start, self.start);
        bbox.update(&[self.end]);
        bbox
    }
}
