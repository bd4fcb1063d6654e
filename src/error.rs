//! Error types for nctools

use std::io;
use thiserror::Error;

/// Main error type for DXF decoding and I/O.
///
/// Decoding is all-or-nothing: the first of these aborts the whole read and
/// no partial entity list is returned.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The ENTITIES section marker or its terminating ENDSEC is missing
    #[error("Malformed section: {0}")]
    MalformedSection(String),

    /// A required group code was not found before the next entity boundary
    #[error("{entity} at index {index}: missing group code {code}")]
    MissingField {
        entity: &'static str,
        code: i32,
        index: usize,
    },

    /// A POLYLINE record is not terminated by a SEQEND marker
    #[error("POLYLINE at index {index}: no matching SEQEND")]
    MissingSeqEnd { index: usize },

    /// A group code line that is not an integer
    #[error("Invalid group code '{token}' at position {position}")]
    InvalidGroupCode { position: usize, token: String },

    /// A value line that could not be converted to the type its group code requires
    #[error("{entity} at index {index}: invalid value '{value}' for group code {code}")]
    InvalidValue {
        entity: &'static str,
        code: i32,
        value: String,
        index: usize,
    },

    /// Geometry that cannot be reconstructed (zero-length bulge chord, radius <= 0)
    #[error("Degenerate geometry at index {index}: {reason}")]
    DegenerateGeometry { index: usize, reason: String },
}

/// Result type alias for nctools operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl DxfError {
    /// Stream index of the entity marker the error refers to, when known.
    pub fn index(&self) -> Option<usize> {
        match self {
            DxfError::MissingField { index, .. }
            | DxfError::MissingSeqEnd { index }
            | DxfError::InvalidValue { index, .. }
            | DxfError::DegenerateGeometry { index, .. } => Some(*index),
            DxfError::InvalidGroupCode { position, .. } => Some(*position),
            DxfError::Io(_) | DxfError::MalformedSection(_) => None,
        }
    }
}
