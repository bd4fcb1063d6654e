//! Drawing entities
//!
//! The supported format subset is fixed, so entities are a closed sum type
//! dispatched by `match` rather than trait objects.

use crate::types::{BoundingBox2D, Vector2};

pub mod arc;
pub mod bulge;
pub mod contour;
pub mod line;

pub use arc::Arc;
pub use bulge::{arc_from_bulge, included_angle, BulgeArc, BulgeError};
pub use contour::{find_contours, Contour, ContourError, Segment, DEFAULT_TOLERANCE};
pub use line::Line;

/// A drawable primitive with a source-order index and a layer name.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Arc(Arc),
    Contour(Contour),
}

impl Entity {
    /// Position of the entity's marker in the ENTITIES token stream.
    pub fn index(&self) -> usize {
        match self {
            Entity::Line(l) => l.index,
            Entity::Arc(a) => a.index,
            Entity::Contour(c) => c.index,
        }
    }

    pub fn layer(&self) -> &str {
        match self {
            Entity::Line(l) => &l.layer,
            Entity::Arc(a) => &a.layer,
            Entity::Contour(c) => &c.layer,
        }
    }

    /// Keyword of the entity type.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Entity::Line(_) => "LINE",
            Entity::Arc(_) => "ARC",
            Entity::Contour(_) => "CONTOUR",
        }
    }

    pub fn start_point(&self) -> Vector2 {
        match self {
            Entity::Line(l) => l.start,
            Entity::Arc(a) => a.start_point(),
            Entity::Contour(c) => c.start_point(),
        }
    }

    pub fn end_point(&self) -> Vector2 {
        match self {
            Entity::Line(l) => l.end,
            Entity::Arc(a) => a.end_point(),
            Entity::Contour(c) => c.end_point(),
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Entity::Line(l) => l.length(),
            Entity::Arc(a) => a.length(),
            Entity::Contour(c) => c.length(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox2D {
        match self {
            Entity::Line(l) => l.bounding_box(),
            Entity::Arc(a) => a.bounding_box(),
            Entity::Contour(c) => c.bounding_box(),
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Entity::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Entity::Arc(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_contour(&self) -> Option<&Contour> {
        match self {
            Entity::Contour(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Line> for Entity {
    fn from(line: Line) -> Self {
        Entity::Line(line)
    }
}

impl From<Arc> for Entity {
    fn from(arc: Arc) -> Self {
        Entity::Arc(arc)
    }
}

impl From<Contour> for Entity {
    fn from(contour: Contour) -> Self {
        Entity::Contour(contour)
    }
}
