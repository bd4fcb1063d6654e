//! Shared test utilities for nctools integration tests.
//!
//! Path resolution, token helpers and read helpers used by every test crate
//! via `mod common;`.

#![allow(dead_code)]

pub mod builders;
pub mod comparison;

use nctools::io::dxf::{DxfReader, DxfReaderConfiguration};
use nctools::{Drawing, Entity, Timestamp};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("test_output");
    std::fs::create_dir_all(&dir).expect("create test_output dir");
    dir.join(filename)
}

/// Split DXF text into trimmed lines, the way the reader sees them.
pub fn tokens(text: &str) -> Vec<String> {
    text.lines().map(|l| l.trim().to_string()).collect()
}

/// Fixed timestamp for reproducible output.
pub fn fixed_now() -> Timestamp {
    chrono::NaiveDate::from_ymd_opt(2021, 6, 14)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid date")
}

/// Read DXF text, panicking on error.
pub fn read_text(text: &str) -> Drawing {
    DxfReader::from_text(text)
        .read()
        .unwrap_or_else(|e| panic!("read failed: {e}"))
}

/// Read DXF text in strict mode.
pub fn read_text_strict(text: &str) -> nctools::Result<Drawing> {
    DxfReader::from_text(text)
        .with_configuration(DxfReaderConfiguration { strict: true })
        .read()
}

/// Count entities per kind.
pub fn entity_type_histogram(entities: &[Entity]) -> BTreeMap<&'static str, usize> {
    let mut map = BTreeMap::new();
    for e in entities {
        *map.entry(e.entity_type()).or_insert(0) += 1;
    }
    map
}
