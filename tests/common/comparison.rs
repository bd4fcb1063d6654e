//! Geometry and entity comparison utilities for tests.
//!
//! Tolerance-based f64/Vector2 assertions and per-entity geometry comparison
//! that ignores layer and index.

#![allow(dead_code)]

use nctools::{Arc, Entity, Line, Segment, Vector2};

/// Tolerance for values that went through text and back.
pub const TOL: f64 = 1e-9;

/// Check approximate equality of two f64 values within `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Assert two f64 values are approximately equal.
pub fn assert_f64_eq(a: f64, b: f64, tol: f64) {
    assert!(
        approx_eq(a, b, tol),
        "f64 mismatch: {a} vs {b} (delta={}, tol={tol})",
        (a - b).abs()
    );
}

/// Assert two Vector2 values are approximately equal component-wise.
pub fn assert_vec2_eq(a: Vector2, b: Vector2, tol: f64) {
    assert!(
        approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol),
        "Vector2 mismatch: {a} vs {b} tol={tol}"
    );
}

fn check_f64(diffs: &mut Vec<String>, name: &str, a: f64, b: f64) {
    if !approx_eq(a, b, TOL) {
        diffs.push(format!("{name}: {a} vs {b}"));
    }
}

fn check_vec2(diffs: &mut Vec<String>, name: &str, a: Vector2, b: Vector2) {
    if !approx_eq(a.x, b.x, TOL) || !approx_eq(a.y, b.y, TOL) {
        diffs.push(format!("{name}: {a} vs {b}"));
    }
}

fn compare_lines(a: &Line, b: &Line, diffs: &mut Vec<String>) {
    check_vec2(diffs, "start", a.start, b.start);
    check_vec2(diffs, "end", a.end, b.end);
}

/// Arcs are compared after normalizing both to a counter-clockwise sweep.
fn compare_arcs(a: &Arc, b: &Arc, diffs: &mut Vec<String>) {
    let (a, b) = (a.to_ccw(), b.to_ccw());
    check_vec2(diffs, "center", a.center, b.center);
    check_f64(diffs, "radius", a.radius, b.radius);
    check_f64(diffs, "angle_start", a.angle_start, b.angle_start);
    check_f64(diffs, "angle_end", a.angle_end, b.angle_end);
}

/// Differences in geometry between two entities, empty when equivalent.
pub fn compare_entity_geometry(a: &Entity, b: &Entity) -> Vec<String> {
    let mut diffs = Vec::new();
    match (a, b) {
        (Entity::Line(a), Entity::Line(b)) => compare_lines(a, b, &mut diffs),
        (Entity::Arc(a), Entity::Arc(b)) => compare_arcs(a, b, &mut diffs),
        _ => diffs.push(format!("kind: {} vs {}", a.entity_type(), b.entity_type())),
    }
    diffs
}

/// Assert two entity lists are geometrically the same, in the same order.
pub fn assert_same_geometry(a: &[Entity], b: &[Entity]) {
    assert_eq!(a.len(), b.len(), "entity count differs");
    for (i, (ea, eb)) in a.iter().zip(b).enumerate() {
        let diffs = compare_entity_geometry(ea, eb);
        assert!(diffs.is_empty(), "entity {i}: {}", diffs.join(", "));
    }
}

/// A contour's segments as plain entities.
pub fn flatten(entities: &[Entity]) -> Vec<Entity> {
    entities
        .iter()
        .flat_map(|e| match e {
            Entity::Contour(c) => c
                .segments()
                .iter()
                .map(|s| match s {
                    Segment::Line(l) => Entity::Line(l.clone()),
                    Segment::Arc(a) => Entity::Arc(a.clone()),
                })
                .collect(),
            other => vec![other.clone()],
        })
        .collect()
}
