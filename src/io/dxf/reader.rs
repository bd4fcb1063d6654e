//! DXF file reader

mod cursor;
mod entity_reader;
mod text_reader;

pub use entity_reader::PolylineFlags;
pub use text_reader::DxfTextReader;

use crate::drawing::Drawing;
use crate::error::{DxfError, Result};
use cursor::pair_tokens;
use encoding_rs::Encoding;
use entity_reader::EntitySectionReader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When `true`, a malformed optional field (vertex bulge, polyline flags)
    /// aborts the read with [`DxfError::InvalidValue`] instead of being
    /// reported as a warning and read with its default.
    ///
    /// Default: `false`
    pub strict: bool,
}

/// DXF file reader
pub struct DxfReader {
    tokens: Vec<String>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a reader over already split, trimmed lines.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Create a reader over the text of a whole file.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(text.lines().map(|l| l.trim().to_string()).collect())
    }

    /// Create a reader over raw file bytes, detecting the text encoding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_tokens(DxfTextReader::new(bytes).read_lines())
    }

    /// Like [`from_bytes`](Self::from_bytes), with a fixed fallback encoding
    /// for files that are not UTF-8.
    pub fn from_bytes_with_encoding(bytes: &[u8], encoding: &'static Encoding) -> Self {
        Self::from_tokens(
            DxfTextReader::new(bytes)
                .with_encoding(encoding)
                .read_lines(),
        )
    }

    /// Create a reader from any reader. The whole stream is read into memory.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Create a reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the ENTITIES section into a [`Drawing`].
    pub fn read(self) -> Result<Drawing> {
        read_tokens(&self.tokens, &self.config)
    }
}

/// Tokens strictly between the first `ENTITIES` marker and the next `ENDSEC`.
pub fn entities_section(tokens: &[String]) -> Result<&[String]> {
    let start = tokens
        .iter()
        .position(|t| t == "ENTITIES")
        .ok_or_else(|| DxfError::MalformedSection("no ENTITIES section".to_string()))?
        + 1;
    let len = tokens[start..]
        .iter()
        .position(|t| t == "ENDSEC")
        .ok_or_else(|| {
            DxfError::MalformedSection(format!(
                "ENTITIES section at line {start} has no ENDSEC"
            ))
        })?;
    tracing::debug!(start, len, "found ENTITIES section");
    Ok(&tokens[start..start + len])
}

pub(crate) fn read_tokens(tokens: &[String], config: &DxfReaderConfiguration) -> Result<Drawing> {
    let section = entities_section(tokens)?;
    let pairs = pair_tokens(section)?;
    let (entities, notifications) = EntitySectionReader::new(&pairs, config).read()?;
    Ok(Drawing::new(entities, notifications))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_section_bounds() {
        let t = tokens("0 SECTION 2 HEADER 0 ENDSEC 0 SECTION 2 ENTITIES 0 LINE 0 ENDSEC 0 EOF");
        let section = entities_section(&t).unwrap();
        assert_eq!(section, &tokens("0 LINE 0")[..]);
    }

    #[test]
    fn test_missing_entities() {
        let err = entities_section(&tokens("0 SECTION 2 HEADER 0 ENDSEC")).unwrap_err();
        assert!(matches!(err, DxfError::MalformedSection(_)));
    }

    #[test]
    fn test_missing_endsec() {
        let err = entities_section(&tokens("0 SECTION 2 ENTITIES 0 LINE 8 0")).unwrap_err();
        assert!(matches!(err, DxfError::MalformedSection(_)));
    }

    #[test]
    fn test_endsec_before_entities_is_ignored() {
        let t = tokens("0 ENDSEC 0 SECTION 2 ENTITIES 0 ENDSEC");
        assert_eq!(entities_section(&t).unwrap(), &tokens("0")[..]);
    }

    #[test]
    fn test_from_text_trims_lines() {
        let text = "  0\r\nSECTION\r\n  2\r\nENTITIES\r\n  0\r\nCIRCLE\r\n  8\r\n0\r\n 10\r\n1.0\r\n 20\r\n2.0\r\n 40\r\n0.5\r\n  0\r\nENDSEC\r\n  0\r\nEOF\r\n";
        let drawing = DxfReader::from_text(text).read().unwrap();
        assert_eq!(drawing.len(), 1);
        assert_eq!(drawing.entities()[0].index(), 1);
    }

    #[test]
    fn test_from_reader() {
        let data: &[u8] = b"0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n";
        let drawing = DxfReader::from_reader(data).unwrap().read().unwrap();
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_from_file_missing() {
        let err = DxfReader::from_file("/nonexistent/drawing.dxf").err().unwrap();
        assert!(matches!(err, DxfError::Io(_)));
    }
}
