//! Contours: connected chains of lines and arcs

use super::{Arc, Entity, Line};
use crate::types::{BoundingBox2D, Vector2};
use std::collections::VecDeque;
use thiserror::Error;

/// Default endpoint matching tolerance, in drawing units.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// One piece of a contour.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line(Line),
    Arc(Arc),
}

impl Segment {
    pub fn start_point(&self) -> Vector2 {
        match self {
            Segment::Line(l) => l.start,
            Segment::Arc(a) => a.start_point(),
        }
    }

    pub fn end_point(&self) -> Vector2 {
        match self {
            Segment::Line(l) => l.end,
            Segment::Arc(a) => a.end_point(),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Segment::Line(l) => l.index,
            Segment::Arc(a) => a.index,
        }
    }

    pub fn layer(&self) -> &str {
        match self {
            Segment::Line(l) => &l.layer,
            Segment::Arc(a) => &a.layer,
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(l) => l.length(),
            Segment::Arc(a) => a.length(),
        }
    }

    pub fn reversed(&self) -> Segment {
        match self {
            Segment::Line(l) => Segment::Line(l.reversed()),
            Segment::Arc(a) => Segment::Arc(a.flipped()),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox2D {
        match self {
            Segment::Line(l) => l.bounding_box(),
            Segment::Arc(a) => a.bounding_box(),
        }
    }
}

impl From<Segment> for Entity {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Line(l) => Entity::Line(l),
            Segment::Arc(a) => Entity::Arc(a),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContourError {
    #[error("contour has no segments")]
    Empty,
    #[error("segment {at} does not start where its predecessor ends")]
    Disconnected { at: usize },
}

/// Ordered chain of segments where each one starts where the previous ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    segments: Vec<Segment>,
    /// Index of the first segment
    pub index: usize,
    pub layer: String,
}

impl Contour {
    /// Build a contour, checking that consecutive segments touch within `tolerance`.
    pub fn new(segments: Vec<Segment>, tolerance: f64) -> Result<Self, ContourError> {
        let first = segments.first().ok_or(ContourError::Empty)?;
        let index = first.index();
        let layer = first.layer().to_string();
        for (at, pair) in segments.windows(2).enumerate() {
            if !pair[0].end_point().approx_eq(&pair[1].start_point(), tolerance) {
                return Err(ContourError::Disconnected { at: at + 1 });
            }
        }
        Ok(Contour {
            segments,
            index,
            layer,
        })
    }

    /// Chains built by `find_contours` are connected and non-empty.
    fn from_chain(chain: VecDeque<Segment>) -> Self {
        let segments: Vec<Segment> = chain.into();
        Contour {
            index: segments[0].index(),
            layer: segments[0].layer().to_string(),
            segments,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn start_point(&self) -> Vector2 {
        self.segments[0].start_point()
    }

    pub fn end_point(&self) -> Vector2 {
        self.segments[self.segments.len() - 1].end_point()
    }

    pub fn is_closed(&self, tolerance: f64) -> bool {
        self.start_point().approx_eq(&self.end_point(), tolerance)
    }

    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    pub fn bounding_box(&self) -> BoundingBox2D {
        self.segments[1..]
            .iter()
            .fold(self.segments[0].bounding_box(), |acc, seg| {
                acc.merge(&seg.bounding_box())
            })
    }
}

/// Chain loose lines and arcs into contours.
///
/// Segments whose endpoints coincide within `tolerance` are joined, reversing
/// them where needed. Chains of two or more segments become contours; segments
/// that connect to nothing come back untouched in the second list. Contours
/// already present in `entities` are passed through. Both lists are ordered
/// by index.
pub fn find_contours(entities: Vec<Entity>, tolerance: f64) -> (Vec<Contour>, Vec<Entity>) {
    let mut contours = Vec::new();
    let mut pool: Vec<Option<Segment>> = Vec::new();
    for entity in entities {
        match entity {
            Entity::Line(l) => pool.push(Some(Segment::Line(l))),
            Entity::Arc(a) => pool.push(Some(Segment::Arc(a))),
            Entity::Contour(c) => contours.push(c),
        }
    }

    let mut loose = Vec::new();
    for i in 0..pool.len() {
        let Some(seed) = pool[i].take() else {
            continue;
        };
        let mut chain = VecDeque::from([seed]);
        grow_chain(&mut chain, &mut pool, tolerance);

        if chain.len() < 2 {
            loose.extend(chain.into_iter().map(Entity::from));
        } else {
            contours.push(Contour::from_chain(chain));
        }
    }

    contours.sort_by_key(|c| c.index);
    loose.sort_by_key(Entity::index);
    (contours, loose)
}

fn grow_chain(chain: &mut VecDeque<Segment>, pool: &mut [Option<Segment>], tolerance: f64) {
    // Extend forward from the tail.
    while !chain_closed(chain, tolerance) {
        let tail = chain[chain.len() - 1].end_point();
        match take_touching(pool, tail, tolerance) {
            Some((seg, true)) => chain.push_back(seg),
            Some((seg, false)) => chain.push_back(seg.reversed()),
            None => break,
        }
    }

    // Then backward from the head.
    while !chain_closed(chain, tolerance) {
        let head = chain[0].start_point();
        match take_touching(pool, head, tolerance) {
            Some((seg, true)) => chain.push_front(seg.reversed()),
            Some((seg, false)) => chain.push_front(seg),
            None => break,
        }
    }
}

fn chain_closed(chain: &VecDeque<Segment>, tolerance: f64) -> bool {
    chain.len() > 1
        && chain[0]
            .start_point()
            .approx_eq(&chain[chain.len() - 1].end_point(), tolerance)
}

/// Remove the first pooled segment with an endpoint at `point`. The flag is
/// true when it is the segment's start point.
fn take_touching(
    pool: &mut [Option<Segment>],
    point: Vector2,
    tolerance: f64,
) -> Option<(Segment, bool)> {
    for slot in pool.iter_mut() {
        let at_start = match slot {
            Some(seg) if seg.start_point().approx_eq(&point, tolerance) => true,
            Some(seg) if seg.end_point().approx_eq(&point, tolerance) => false,
            _ => continue,
        };
        return slot.take().map(|seg| (seg, at_start));
    }
    None
}
