//! DXF writer module

mod section_writer;
mod text_writer;

pub use section_writer::SectionWriter;
pub use text_writer::DxfTextWriter;

use crate::entities::Entity;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Layer every written entity is placed on unless configured otherwise.
pub const OUTPUT_LAYER: &str = "snijlijnen";

/// Moment a conversion was started, rendered in the file's preamble.
pub type Timestamp = chrono::NaiveDateTime;

/// Configuration for the DXF writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxfWriterConfiguration {
    /// Named in the generator comment of the preamble
    pub program_name: String,
    /// Layer for all written entities; source layers are not kept
    pub layer: String,
}

impl Default for DxfWriterConfiguration {
    fn default() -> Self {
        Self {
            program_name: env!("CARGO_PKG_NAME").to_string(),
            layer: OUTPUT_LAYER.to_string(),
        }
    }
}

/// DXF file writer
pub struct DxfWriter {
    entities: Vec<Entity>,
    config: DxfWriterConfiguration,
}

impl DxfWriter {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            config: DxfWriterConfiguration::default(),
        }
    }

    /// Set the writer configuration.
    pub fn with_configuration(mut self, config: DxfWriterConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The complete file as text.
    pub fn write_to_string(&self, now: Timestamp) -> String {
        write_entities(&self.entities, &self.config, now)
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, mut writer: W, now: Timestamp) -> Result<()> {
        writer.write_all(self.write_to_string(now).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write to a file, stamped with the current local time
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file), chrono::Local::now().naive_local())
    }
}

pub(crate) fn write_entities(
    entities: &[Entity],
    config: &DxfWriterConfiguration,
    now: Timestamp,
) -> String {
    let mut writer = DxfTextWriter::new();
    let mut sections = SectionWriter::new(&mut writer, &config.layer);
    sections.write_preamble(&config.program_name, now, entities.len());
    sections.write_entities(entities);
    sections.write_eof();

    tracing::debug!(
        entities = entities.len(),
        bytes = writer.len(),
        layer = %config.layer,
        "wrote DXF"
    );
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Arc, Line};
    use crate::types::Vector2;

    fn now() -> Timestamp {
        chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_default_configuration() {
        let config = DxfWriterConfiguration::default();
        assert_eq!(config.program_name, "nctools");
        assert_eq!(config.layer, "snijlijnen");
    }

    #[test]
    fn test_file_layout() {
        let entities = vec![
            Line::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 1, "a").into(),
            Arc::circle(Vector2::new(0.0, 0.0), 1.0, 2, "b").into(),
        ];
        let text = DxfWriter::new(entities).write_to_string(now());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "999");
        assert_eq!(lines[5], "This file contains 2 entities.");
        assert_eq!(&lines[6..10], &["  0", "SECTION", "  2", "ENTITIES"]);
        assert_eq!(&lines[lines.len() - 4..], &["  0", "ENDSEC", "  0", "EOF"]);
        assert!(text.ends_with("EOF\n"));
        assert_eq!(text.matches("snijlijnen").count(), 2);
    }

    #[test]
    fn test_custom_layer() {
        let config = DxfWriterConfiguration {
            program_name: "plot".to_string(),
            layer: "laser".to_string(),
        };
        let line = Line::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 1, "a");
        let text = DxfWriter::new(vec![line.into()])
            .with_configuration(config)
            .write_to_string(now());
        assert!(text.contains("generated by plot\n"));
        assert!(text.contains("  8\nlaser\n"));
    }

    #[test]
    fn test_write_to_writer() {
        let mut buffer = Vec::new();
        DxfWriter::new(Vec::new())
            .write_to_writer(&mut buffer, now())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("This file contains 0 entities."));
    }
}
