//! ASCII DXF writer

use crate::io::dxf::DxfCode;
use std::fmt::Write;

/// Builds ASCII DXF text in memory, one group code line and one value line
/// per record.
#[derive(Debug, Default)]
pub struct DxfTextWriter {
    out: String,
}

impl DxfTextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a DXF code right-aligned in a 3-character field
    fn write_code(&mut self, code: DxfCode) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.out, "{:>3}", code.to_i32());
    }

    pub fn write_string(&mut self, code: DxfCode, value: &str) {
        self.write_code(code);
        self.out.push_str(value);
        self.out.push('\n');
    }

    /// Shortest text that parses back to the same value, with at least one
    /// decimal place.
    pub fn write_double(&mut self, code: DxfCode, value: f64) {
        self.write_code(code);
        let _ = if value == value.trunc() {
            writeln!(self.out, "{value:.1}")
        } else {
            writeln!(self.out, "{value}")
        };
    }

    pub fn write_comment(&mut self, text: &str) {
        self.write_string(DxfCode::Comment, text);
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
