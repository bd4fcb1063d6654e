//! Arc reconstruction from polyline bulge values
//!
//! A polyline vertex stores the curvature of the segment that leaves it as
//! `bulge = tan(included_angle / 4)`. Positive values bend counter-clockwise
//! when walking from the segment start to its end.

use crate::types::Vector2;
use thiserror::Error;

/// Reasons a bulge segment has no arc.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BulgeError {
    #[error("bulge {0} on a zero-length chord")]
    ZeroChord(f64),
    #[error("zero bulge describes a straight segment")]
    Straight,
    #[error("non-finite bulge {0}")]
    NonFinite(f64),
}

/// Circle data of one bulge segment.
///
/// `angle_start` is the direction of the segment start as seen from
/// `center`; `angle_end` is `angle_start` plus the signed included angle, so
/// it lies above `angle_start` for counter-clockwise segments and below it
/// for clockwise ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Vector2,
    pub radius: f64,
    pub angle_start: f64,
    pub angle_end: f64,
}

impl BulgeArc {
    /// Signed included angle.
    pub fn included_angle(&self) -> f64 {
        self.angle_end - self.angle_start
    }

    pub fn is_ccw(&self) -> bool {
        self.angle_end > self.angle_start
    }
}

/// Signed angle swept by a segment with the given bulge.
pub fn included_angle(bulge: f64) -> f64 {
    4.0 * bulge.atan()
}

/// Reconstruct the arc running from `start` to `end` with curvature `bulge`.
pub fn arc_from_bulge(start: Vector2, end: Vector2, bulge: f64) -> Result<BulgeArc, BulgeError> {
    if !bulge.is_finite() {
        return Err(BulgeError::NonFinite(bulge));
    }
    if bulge == 0.0 {
        return Err(BulgeError::Straight);
    }
    let chord = end - start;
    let chord_length = chord.length();
    if chord_length == 0.0 {
        return Err(BulgeError::ZeroChord(bulge));
    }

    let angle = included_angle(bulge);
    let half = angle.abs() / 2.0;
    let radius = chord_length / (2.0 * half.sin());

    // Center sits on the chord bisector; left of the chord for ccw segments.
    // cos(half) turns negative past a semicircle, which moves it across.
    let normal = chord.perp() * (1.0 / chord_length);
    let offset = radius * half.cos() * bulge.signum();
    let center = start.midpoint(&end) + normal * offset;

    let angle_start = (start - center).angle();
    Ok(BulgeArc {
        center,
        radius,
        angle_start,
        angle_end: angle_start + angle,
    })
}
