//! Arc entity

use super::bulge::{arc_from_bulge, BulgeError};
use crate::types::{BoundingBox2D, Vector2};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A circular arc.
///
/// The arc is traversed from `angle_start` to `angle_end`: counter-clockwise
/// when `ccw` is set (then `angle_end >= angle_start`), clockwise otherwise.
/// A full circle is `0 .. 2π` counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub center: Vector2,
    pub radius: f64,
    /// Start angle in radians
    pub angle_start: f64,
    /// End angle in radians
    pub angle_end: f64,
    pub ccw: bool,
    /// Position of the source marker in the ENTITIES token stream
    pub index: usize,
    pub layer: String,
}

impl Arc {
    /// Counter-clockwise arc. An `angle_end` below `angle_start` gets one
    /// full turn added.
    pub fn new(
        center: Vector2,
        radius: f64,
        angle_start: f64,
        angle_end: f64,
        index: usize,
        layer: impl Into<String>,
    ) -> Self {
        let angle_end = if angle_end < angle_start {
            angle_end + TAU
        } else {
            angle_end
        };
        Arc {
            center,
            radius,
            angle_start,
            angle_end,
            ccw: true,
            index,
            layer: layer.into(),
        }
    }

    /// Full circle.
    pub fn circle(center: Vector2, radius: f64, index: usize, layer: impl Into<String>) -> Self {
        Arc::new(center, radius, 0.0, TAU, index, layer)
    }

    /// Arc segment of a polyline from `start` to `end` with the given bulge.
    pub fn from_bulge(
        start: Vector2,
        end: Vector2,
        bulge: f64,
        index: usize,
        layer: impl Into<String>,
    ) -> Result<Self, BulgeError> {
        let data = arc_from_bulge(start, end, bulge)?;
        Ok(Arc {
            center: data.center,
            radius: data.radius,
            angle_start: data.angle_start,
            angle_end: data.angle_end,
            ccw: data.is_ccw(),
            index,
            layer: layer.into(),
        })
    }

    /// Unsigned angular extent in radians.
    pub fn sweep_angle(&self) -> f64 {
        (self.angle_end - self.angle_start).abs()
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle()
    }

    pub fn is_full_circle(&self) -> bool {
        (self.sweep_angle() - TAU).abs() < 1e-12
    }

    pub fn start_point(&self) -> Vector2 {
        Vector2::polar(self.center, self.radius, self.angle_start)
    }

    pub fn end_point(&self) -> Vector2 {
        Vector2::polar(self.center, self.radius, self.angle_end)
    }

    /// The same arc traversed the other way round.
    pub fn flipped(&self) -> Arc {
        Arc {
            angle_start: self.angle_end,
            angle_end: self.angle_start,
            ccw: !self.ccw,
            ..self.clone()
        }
    }

    /// Copy whose angles describe a counter-clockwise sweep.
    pub fn to_ccw(&self) -> Arc {
        if self.ccw {
            self.clone()
        } else {
            self.flipped()
        }
    }

    /// Exact bounds: both endpoints plus every axis extreme inside the sweep.
    pub fn bounding_box(&self) -> BoundingBox2D {
        let lo = self.angle_start.min(self.angle_end);
        let hi = self.angle_start.max(self.angle_end);
        let mut bbox = BoundingBox2D::new(self.start_point(), self.start_point());
        bbox.update(&[self.end_point()]);

        let first = (lo / FRAC_PI_2).ceil() as i64;
        let last = (hi / FRAC_PI_2).floor() as i64;
        for k in first..=last {
            bbox.update(&[Vector2::polar(
                self.center,
                self.radius,
                k as f64 * FRAC_PI_2,
            )]);
        }
        bbox
    }
}
