//! # nctools
//!
//! Reading and writing the 2D subset of DXF used for cutting: lines, arcs,
//! circles and polylines with bulges.
//!
//! ## Features
//!
//! - Read the ENTITIES section of ASCII DXF files (UTF-8 or any `$DWGCODEPAGE` code page)
//! - LINE, ARC, CIRCLE and POLYLINE/VERTEX/SEQEND, with polyline bulges turned into arcs
//! - Entities ordered by their position in the file
//! - Write lines, arcs and contours back out on a single layer
//! - Chain loose lines and arcs into contours
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nctools::io::dxf::{DxfReader, DxfWriter};
//!
//! let drawing = DxfReader::from_file("part.dxf")?.read()?;
//! for entity in drawing.entities() {
//!     println!("{} at {} on {}", entity.entity_type(), entity.index(), entity.layer());
//! }
//! for note in drawing.notifications() {
//!     eprintln!("{note}");
//! }
//!
//! DxfWriter::new(drawing.into_entities()).write_to_file("out.dxf")?;
//! # Ok::<(), nctools::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`Entity`] - closed set of drawable primitives: [`Line`], [`Arc`], [`Contour`]
//! - [`Drawing`] - entities read from one file, plus the diagnostics collected on the way
//! - [`io::dxf`] - the reader, the writer and the [`decode`]/[`encode`] shortcuts

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod drawing;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{BoundingBox2D, BoundingBox3D, Vector2, Vector3};

// Re-export entity types
pub use entities::{
    arc_from_bulge, find_contours, Arc, BulgeArc, BulgeError, Contour, ContourError, Entity, Line,
    Segment,
};

pub use drawing::Drawing;
pub use notification::{Notification, NotificationCollection, NotificationType};

// Re-export I/O types
pub use io::dxf::{decode, encode, DxfReader, DxfWriter, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
