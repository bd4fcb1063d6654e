//! Builders for DXF text fragments and entity lists.
//!
//! Records are produced the way CAD programs lay them out, with a group code
//! line right-aligned in three characters followed by the value line.

#![allow(dead_code)]

use nctools::{Arc, Entity, Line, Vector2};
use std::fmt::Write;

fn pair(out: &mut String, code: i32, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{code:>3}\n{value}");
}

pub fn line_record(layer: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    let mut s = String::new();
    pair(&mut s, 0, "LINE");
    pair(&mut s, 5, "2F");
    pair(&mut s, 8, layer);
    pair(&mut s, 10, x1);
    pair(&mut s, 20, y1);
    pair(&mut s, 30, 0.0);
    pair(&mut s, 11, x2);
    pair(&mut s, 21, y2);
    pair(&mut s, 31, 0.0);
    s
}

/// ARC record, angles in degrees.
pub fn arc_record(layer: &str, cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let mut s = String::new();
    pair(&mut s, 0, "ARC");
    pair(&mut s, 8, layer);
    pair(&mut s, 10, cx);
    pair(&mut s, 20, cy);
    pair(&mut s, 30, 0.0);
    pair(&mut s, 40, r);
    pair(&mut s, 50, start);
    pair(&mut s, 51, end);
    s
}

pub fn circle_record(layer: &str, cx: f64, cy: f64, r: f64) -> String {
    let mut s = String::new();
    pair(&mut s, 0, "CIRCLE");
    pair(&mut s, 8, layer);
    pair(&mut s, 10, cx);
    pair(&mut s, 20, cy);
    pair(&mut s, 30, 0.0);
    pair(&mut s, 40, r);
    s
}

/// POLYLINE with its VERTEX records and SEQEND. Each vertex is
/// `(x, y, bulge)`; a zero bulge is left out of the record.
pub fn polyline_record(layer: &str, closed: bool, vertices: &[(f64, f64, f64)]) -> String {
    let mut s = String::new();
    pair(&mut s, 0, "POLYLINE");
    pair(&mut s, 8, layer);
    pair(&mut s, 66, 1);
    pair(&mut s, 10, 0.0);
    pair(&mut s, 20, 0.0);
    pair(&mut s, 30, 0.0);
    pair(&mut s, 70, if closed { 1 } else { 0 });
    for &(x, y, bulge) in vertices {
        pair(&mut s, 0, "VERTEX");
        pair(&mut s, 8, layer);
        pair(&mut s, 10, x);
        pair(&mut s, 20, y);
        pair(&mut s, 30, 0.0);
        if bulge != 0.0 {
            pair(&mut s, 42, bulge);
        }
    }
    pair(&mut s, 0, "SEQEND");
    pair(&mut s, 8, layer);
    s
}

/// Complete file: a small HEADER, then the records inside ENTITIES.
pub fn dxf_file(records: &[String]) -> String {
    let mut s = String::new();
    pair(&mut s, 999, "test drawing");
    pair(&mut s, 0, "SECTION");
    pair(&mut s, 2, "HEADER");
    pair(&mut s, 9, "$ACADVER");
    pair(&mut s, 1, "AC1009");
    pair(&mut s, 0, "ENDSEC");
    pair(&mut s, 0, "SECTION");
    pair(&mut s, 2, "ENTITIES");
    for record in records {
        s.push_str(record);
    }
    pair(&mut s, 0, "ENDSEC");
    pair(&mut s, 0, "EOF");
    s
}

/// A square of four lines followed by a quarter arc and a clockwise arc.
pub fn sample_entities() -> Vec<Entity> {
    let p = |x: f64, y: f64| Vector2::new(x, y);
    let mut cw = Arc::new(p(20.0, 0.0), 2.5, 0.25, 1.75, 60, "0");
    cw = cw.flipped();
    vec![
        Line::new(p(0.0, 0.0), p(10.0, 0.0), 1, "0").into(),
        Line::new(p(10.0, 0.0), p(10.0, 10.0), 15, "0").into(),
        Line::new(p(10.0, 10.0), p(0.0, 10.0), 29, "0").into(),
        Line::new(p(0.0, 10.0), p(0.0, 0.0), 43, "0").into(),
        Arc::new(p(-3.5, 7.25), 1.125, 0.0, std::f64::consts::FRAC_PI_2, 57, "0").into(),
        cw.into(),
    ]
}
