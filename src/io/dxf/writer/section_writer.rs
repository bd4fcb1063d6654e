//! ENTITIES section writer

use super::text_writer::DxfTextWriter;
use super::Timestamp;
use crate::entities::{Arc, Contour, Entity, Line, Segment};
use crate::io::dxf::{DxfCode, EntityKeyword};

/// Writes the preamble, the ENTITIES section and the file terminator.
pub struct SectionWriter<'a> {
    writer: &'a mut DxfTextWriter,
    layer: &'a str,
}

impl<'a> SectionWriter<'a> {
    /// Every entity is written on `layer`.
    pub fn new(writer: &'a mut DxfTextWriter, layer: &'a str) -> Self {
        Self { writer, layer }
    }

    /// Three comment records: generator, start time, entity count.
    pub fn write_preamble(&mut self, program_name: &str, now: Timestamp, count: usize) {
        self.writer
            .write_comment(&format!("DXF file generated by {program_name}"));
        self.writer.write_comment(&format!(
            "This conversion was started on {}",
            now.format("%A, %B %d %H:%M")
        ));
        self.writer
            .write_comment(&format!("This file contains {count} entities."));
    }

    /// Write the ENTITIES section, entities in the given order.
    pub fn write_entities(&mut self, entities: &[Entity]) {
        self.writer.write_string(DxfCode::Start, "SECTION");
        self.writer.write_string(DxfCode::Name, "ENTITIES");
        for entity in entities {
            self.write_entity(entity);
        }
        self.writer.write_string(DxfCode::Start, "ENDSEC");
    }

    pub fn write_eof(&mut self) {
        self.writer.write_string(DxfCode::Start, "EOF");
    }

    fn write_entity(&mut self, entity: &Entity) {
        match entity {
            Entity::Line(e) => self.write_line(e),
            Entity::Arc(e) => self.write_arc(e),
            Entity::Contour(e) => self.write_contour(e),
        }
    }

    /// A contour has no record of its own; its segments are written in order.
    fn write_contour(&mut self, contour: &Contour) {
        for segment in contour.segments() {
            match segment {
                Segment::Line(e) => self.write_line(e),
                Segment::Arc(e) => self.write_arc(e),
            }
        }
    }

    /// Write LINE entity
    fn write_line(&mut self, line: &Line) {
        self.writer
            .write_string(DxfCode::Start, EntityKeyword::Line.as_str());
        self.writer.write_string(DxfCode::LayerName, self.layer);
        self.writer.write_double(DxfCode::XCoordinate, line.start.x);
        self.writer.write_double(DxfCode::YCoordinate, line.start.y);
        self.writer.write_double(DxfCode::ZCoordinate, 0.0);
        self.writer.write_double(DxfCode::XEnd, line.end.x);
        self.writer.write_double(DxfCode::YEnd, line.end.y);
        self.writer.write_double(DxfCode::ZEnd, 0.0);
    }

    /// Write ARC entity, always as a counter-clockwise sweep
    fn write_arc(&mut self, arc: &Arc) {
        let arc = arc.to_ccw();
        self.writer
            .write_string(DxfCode::Start, EntityKeyword::Arc.as_str());
        self.writer.write_string(DxfCode::LayerName, self.layer);
        self.writer.write_double(DxfCode::XCoordinate, arc.center.x);
        self.writer.write_double(DxfCode::YCoordinate, arc.center.y);
        self.writer.write_double(DxfCode::ZCoordinate, 0.0);
        self.writer.write_double(DxfCode::Radius, arc.radius);
        self.writer
            .write_double(DxfCode::StartAngle, arc.angle_start.to_degrees());
        self.writer
            .write_double(DxfCode::EndAngle, arc.angle_end.to_degrees());
    }
}
