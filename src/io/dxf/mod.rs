//! DXF (Drawing Exchange Format) reading and writing
//!
//! Only the ENTITIES section is read, and of that only LINE, ARC, CIRCLE and
//! POLYLINE records. Written files contain nothing but LINE and ARC records.

mod code_page;
mod dxf_code;
mod reader;
mod writer;

pub use code_page::encoding_from_code_page;
pub use dxf_code::{DxfCode, EntityKeyword};
pub use reader::{entities_section, DxfReader, DxfReaderConfiguration, DxfTextReader, PolylineFlags};
pub use writer::{
    DxfTextWriter, DxfWriter, DxfWriterConfiguration, SectionWriter, Timestamp, OUTPUT_LAYER,
};

use crate::entities::Entity;
use crate::error::Result;

/// Decode the entities of a drawing given as trimmed lines.
///
/// `tokens` may hold the whole file or just the ENTITIES section with its
/// `ENTITIES` and `ENDSEC` markers. Entities come back ordered by index.
/// Warnings are logged and otherwise dropped; use [`DxfReader`] to keep them.
pub fn decode(tokens: &[String]) -> Result<Vec<Entity>> {
    let drawing = reader::read_tokens(tokens, &DxfReaderConfiguration::default())?;
    Ok(drawing.into_entities())
}

/// Encode entities as a complete DXF file on [`OUTPUT_LAYER`].
pub fn encode(entities: &[Entity], program_name: &str, now: Timestamp) -> String {
    let config = DxfWriterConfiguration {
        program_name: program_name.to_string(),
        ..DxfWriterConfiguration::default()
    };
    writer::write_entities(entities, &config, now)
}
