//! Entity extraction from the ENTITIES section
//!
//! Each supported keyword gets its own scan over the section. A record's
//! fields are found with a [`PairCursor`] starting at the record's marker, so
//! every lookup is bounded by the next marker.

use super::cursor::{record_end, GroupPair, PairCursor};
use super::DxfReaderConfiguration;
use crate::entities::{Arc, Entity, Line};
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfCode, EntityKeyword};
use crate::notification::{Notification, NotificationCollection, NotificationType};
use crate::types::Vector2;
use bitflags::bitflags;
use std::collections::BTreeMap;

bitflags! {
    /// POLYLINE flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PolylineFlags: u16 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

/// One polyline vertex with the bulge of the segment leaving it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Vertex {
    location: Vector2,
    bulge: f64,
}

/// Reads entities out of the paired ENTITIES section.
pub struct EntitySectionReader<'p, 'a> {
    pairs: &'p [GroupPair<'a>],
    config: &'p DxfReaderConfiguration,
    notifications: NotificationCollection,
}

impl<'p, 'a> EntitySectionReader<'p, 'a> {
    pub fn new(pairs: &'p [GroupPair<'a>], config: &'p DxfReaderConfiguration) -> Self {
        Self {
            pairs,
            config,
            notifications: NotificationCollection::new(),
        }
    }

    /// All supported entities ordered by index, plus what was noticed on the way.
    pub fn read(mut self) -> Result<(Vec<Entity>, NotificationCollection)> {
        let mut entities = self.read_lines()?;
        let line_count = entities.len();
        entities.extend(self.read_arcs()?);
        let arc_count = entities.len() - line_count;
        entities.extend(self.read_circles()?);
        let circle_count = entities.len() - line_count - arc_count;
        entities.extend(self.read_polylines()?);
        self.report_unsupported();

        // Stable: segments of one polyline share its index and keep their order.
        entities.sort_by_key(Entity::index);

        tracing::debug!(
            lines = line_count,
            arcs = arc_count,
            circles = circle_count,
            total = entities.len(),
            "read ENTITIES section"
        );
        Ok((entities, self.notifications))
    }

    /// Pair indices of every marker with the given keyword.
    fn markers(&self, keyword: EntityKeyword) -> Vec<usize> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_marker() && p.value == keyword.as_str())
            .map(|(i, _)| i)
            .collect()
    }

    fn read_lines(&self) -> Result<Vec<Entity>> {
        self.markers(EntityKeyword::Line)
            .into_iter()
            .map(|marker| -> Result<Entity> {
                let mut cur = PairCursor::new(self.pairs, marker, "LINE");
                let layer = read_layer(&mut cur)?;
                let x1 = cur.read_f64(DxfCode::XCoordinate)?;
                let y1 = cur.read_f64(DxfCode::YCoordinate)?;
                let x2 = cur.read_f64(DxfCode::XEnd)?;
                let y2 = cur.read_f64(DxfCode::YEnd)?;
                Ok(Entity::Line(Line::new(
                    Vector2::new(x1, y1),
                    Vector2::new(x2, y2),
                    cur.index(),
                    layer,
                )))
            })
            .collect()
    }

    fn read_arcs(&self) -> Result<Vec<Entity>> {
        self.markers(EntityKeyword::Arc)
            .into_iter()
            .map(|marker| -> Result<Entity> {
                let mut cur = PairCursor::new(self.pairs, marker, "ARC");
                let layer = read_layer(&mut cur)?;
                let center = read_point(&mut cur)?;
                let radius = read_radius(&mut cur)?;
                let start = cur.read_f64(DxfCode::StartAngle)?.to_radians();
                let end = cur.read_f64(DxfCode::EndAngle)?.to_radians();
                Ok(Entity::Arc(Arc::new(
                    center,
                    radius,
                    start,
                    end,
                    cur.index(),
                    layer,
                )))
            })
            .collect()
    }

    fn read_circles(&self) -> Result<Vec<Entity>> {
        self.markers(EntityKeyword::Circle)
            .into_iter()
            .map(|marker| -> Result<Entity> {
                let mut cur = PairCursor::new(self.pairs, marker, "CIRCLE");
                let layer = read_layer(&mut cur)?;
                let center = read_point(&mut cur)?;
                let radius = read_radius(&mut cur)?;
                Ok(Entity::Arc(Arc::circle(center, radius, cur.index(), layer)))
            })
            .collect()
    }

    fn read_polylines(&mut self) -> Result<Vec<Entity>> {
        let mut segments = Vec::new();
        for marker in self.markers(EntityKeyword::Polyline) {
            segments.extend(self.read_polyline(marker)?);
        }
        Ok(segments)
    }

    /// Segments of the POLYLINE whose marker is `pairs[marker]`.
    fn read_polyline(&mut self, marker: usize) -> Result<Vec<Entity>> {
        let mut cur = PairCursor::new(self.pairs, marker, "POLYLINE");
        let index = cur.index();
        let layer = read_layer(&mut cur)?;
        let flags = self.read_flags(&mut cur)?;

        let seqend = self.pairs[marker + 1..]
            .iter()
            .position(|p| p.is_marker() && p.value == EntityKeyword::SeqEnd.as_str())
            .map(|offset| marker + 1 + offset)
            .ok_or(DxfError::MissingSeqEnd { index })?;

        let pairs = self.pairs;
        let mut vertices = Vec::new();
        for v in (marker + 1..seqend).filter(|&i| {
            pairs[i].is_marker() && pairs[i].value == EntityKeyword::Vertex.as_str()
        }) {
            vertices.push(self.read_vertex(v, index)?);
        }

        if flags.contains(PolylineFlags::CLOSED) {
            if let Some(first) = vertices.first().copied() {
                vertices.push(Vertex {
                    location: first.location,
                    bulge: 0.0,
                });
            }
        }

        vertices
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                if from.bulge == 0.0 {
                    return Ok(Entity::Line(Line::new(
                        from.location,
                        to.location,
                        index,
                        layer.as_str(),
                    )));
                }
                Arc::from_bulge(from.location, to.location, from.bulge, index, layer.as_str())
                    .map(Entity::Arc)
                    .map_err(|e| DxfError::DegenerateGeometry {
                        index,
                        reason: e.to_string(),
                    })
            })
            .collect()
    }

    /// Location and bulge of one VERTEX record.
    fn read_vertex(&mut self, marker: usize, polyline: usize) -> Result<Vertex> {
        let mut cur = PairCursor::new(self.pairs, marker, "VERTEX");
        let location = read_point(&mut cur)?;

        // The cursor stops at the next VERTEX or SEQEND, so a bulge found here
        // belongs to this vertex.
        let bulge = match cur.seek(DxfCode::Bulge) {
            None => 0.0,
            Some(pair) => match cur.parse_f64(&pair) {
                Ok(b) => b,
                Err(err) if self.config.strict => return Err(err),
                Err(_) => {
                    self.warn(
                        format!(
                            "VERTEX of POLYLINE {polyline}: bulge '{}' is not a number, segment read as straight",
                            pair.value
                        ),
                        pair.position,
                    );
                    0.0
                }
            },
        };
        Ok(Vertex { location, bulge })
    }

    /// Optional flags of the POLYLINE record; anything unreadable means open.
    fn read_flags(&mut self, cur: &mut PairCursor<'_, 'a>) -> Result<PolylineFlags> {
        let Some(pair) = cur.seek(DxfCode::Flags) else {
            return Ok(PolylineFlags::empty());
        };
        match pair.value.parse::<u16>() {
            Ok(bits) => Ok(PolylineFlags::from_bits_truncate(bits)),
            Err(_) if self.config.strict => Err(cur.invalid(&pair)),
            Err(_) => {
                self.warn(
                    format!(
                        "POLYLINE {}: flags '{}' are not an integer, polyline read as open",
                        cur.index(),
                        pair.value
                    ),
                    pair.position,
                );
                Ok(PolylineFlags::empty())
            }
        }
    }

    fn warn(&mut self, message: String, position: usize) {
        tracing::warn!(position, "{message}");
        self.notifications
            .push(Notification::new(NotificationType::Warning, message).at(position));
    }

    /// One notification per unsupported keyword, with its count.
    fn report_unsupported(&mut self) {
        let mut skipped: BTreeMap<&str, usize> = BTreeMap::new();
        let mut i = 0;
        while i < self.pairs.len() {
            let pair = self.pairs[i];
            if pair.is_marker() && EntityKeyword::from_keyword(pair.value).is_none() {
                *skipped.entry(pair.value).or_default() += 1;
            }
            i = record_end(self.pairs, i);
        }
        for (keyword, count) in skipped {
            self.notifications.notify(
                NotificationType::NotSupported,
                format!("{count} {keyword} entit{} skipped", if count == 1 { "y" } else { "ies" }),
            );
        }
    }
}

fn read_layer(cur: &mut PairCursor<'_, '_>) -> Result<String> {
    cur.read_str(DxfCode::LayerName).map(str::to_string)
}

fn read_point(cur: &mut PairCursor<'_, '_>) -> Result<Vector2> {
    let x = cur.read_f64(DxfCode::XCoordinate)?;
    let y = cur.read_f64(DxfCode::YCoordinate)?;
    Ok(Vector2::new(x, y))
}

fn read_radius(cur: &mut PairCursor<'_, '_>) -> Result<f64> {
    let radius = cur.read_f64(DxfCode::Radius)?;
    if radius.is_nan() || radius <= 0.0 {
        return Err(DxfError::DegenerateGeometry {
            index: cur.index(),
            reason: format!("radius {radius} is not positive"),
        });
    }
    Ok(radius)
}
