//! Axis-aligned bounding boxes over point lists
//!
//! 2D and 3D boxes are separate types, so a point list of mixed
//! dimensionality cannot be constructed.

use super::{Vector2, Vector3};
use std::fmt;

/// 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Lower-left corner
    pub min: Vector2,
    /// Upper-right corner
    pub max: Vector2,
}

impl BoundingBox2D {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// Smallest box containing all `points`; `None` for an empty list.
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox2D::new(*first, *first);
        bbox.update(rest);
        Some(bbox)
    }

    /// Grow the box to include `points`.
    pub fn update(&mut self, points: &[Vector2]) {
        for p in points {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector2 {
        self.min.midpoint(&self.max)
    }

    /// Boundary points count as inside.
    pub fn contains(&self, point: Vector2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Per-point containment.
    pub fn inside(&self, points: &[Vector2]) -> Vec<bool> {
        points.iter().map(|p| self.contains(*p)).collect()
    }

    pub fn merge(&self, other: &BoundingBox2D) -> BoundingBox2D {
        let mut merged = *self;
        merged.update(&[other.min, other.max]);
        merged
    }

    /// Box enclosing every box in `boxes`; `None` for an empty list.
    pub fn merge_all(boxes: &[BoundingBox2D]) -> Option<BoundingBox2D> {
        let (first, rest) = boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.merge(b)))
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<BBox {} ≤ x ≤ {}, {} ≤ y ≤ {}>",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}

/// 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox3D {
    pub fn new(min: Vector3, max: Vector3) -> Self {
        BoundingBox3D { min, max }
    }

    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox3D::new(*first, *first);
        bbox.update(rest);
        Some(bbox)
    }

    pub fn update(&mut self, points: &[Vector3]) {
        for p in points {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.min.z = self.min.z.min(p.z);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
            self.max.z = self.max.z.max(p.z);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    pub fn contains(&self, point: Vector3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    pub fn inside(&self, points: &[Vector3]) -> Vec<bool> {
        points.iter().map(|p| self.contains(*p)).collect()
    }

    pub fn merge(&self, other: &BoundingBox3D) -> BoundingBox3D {
        let mut merged = *self;
        merged.update(&[other.min, other.max]);
        merged
    }

    pub fn merge_all(boxes: &[BoundingBox3D]) -> Option<BoundingBox3D> {
        let (first, rest) = boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.merge(b)))
    }
}

impl From<BoundingBox2D> for BoundingBox3D {
    fn from(b: BoundingBox2D) -> Self {
        BoundingBox3D::new(b.min.into(), b.max.into())
    }
}

impl fmt::Display for BoundingBox3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<BBox {} ≤ x ≤ {}, {} ≤ y ≤ {}, {} ≤ z ≤ {}>",
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox2d_from_points() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 5.0),
            Vector2::new(-5.0, 3.0),
        ];
        let bbox = BoundingBox2D::from_points(&points).unwrap();
        assert_eq!(bbox.min, Vector2::new(-5.0, 0.0));
        assert_eq!(bbox.max, Vector2::new(10.0, 5.0));
        assert_eq!(bbox.width(), 15.0);
        assert_eq!(bbox.height(), 5.0);
    }

    #[test]
    fn test_bbox2d_empty() {
        assert!(BoundingBox2D::from_points(&[]).is_none());
        assert!(BoundingBox2D::merge_all(&[]).is_none());
    }

    #[test]
    fn test_bbox2d_update_and_inside() {
        let mut bbox = BoundingBox2D::from_points(&[Vector2::new(0.0, 0.0)]).unwrap();
        bbox.update(&[Vector2::new(10.0, 10.0)]);
        let flags = bbox.inside(&[
            Vector2::new(5.0, 5.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(15.0, 5.0),
        ]);
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_bbox2d_merge_all() {
        let a = BoundingBox2D::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        let b = BoundingBox2D::new(Vector2::new(-2.0, 0.5), Vector2::new(0.5, 4.0));
        let c = BoundingBox2D::new(Vector2::new(3.0, -1.0), Vector2::new(3.5, 0.0));
        let merged = BoundingBox2D::merge_all(&[a, b, c]).unwrap();
        assert_eq!(merged.min, Vector2::new(-2.0, -1.0));
        assert_eq!(merged.max, Vector2::new(3.5, 4.0));
    }

    #[test]
    fn test_bbox3d_dimensions() {
        let bbox = BoundingBox3D::from_points(&[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 5.0, 3.0),
            Vector3::new(-5.0, 3.0, -2.0),
        ])
        .unwrap();
        assert_eq!(bbox.width(), 15.0);
        assert_eq!(bbox.height(), 5.0);
        assert_eq!(bbox.depth(), 5.0);
        assert!(bbox.contains(Vector3::new(0.0, 1.0, 0.0)));
        assert!(!bbox.contains(Vector3::new(0.0, 1.0, 4.0)));
    }

    #[test]
    fn test_bbox_display() {
        let bbox = BoundingBox2D::new(Vector2::new(0.0, 1.0), Vector2::new(2.0, 3.0));
        assert_eq!(bbox.to_string(), "<BBox 0 ≤ x ≤ 2, 1 ≤ y ≤ 3>");
    }
}
