//! DXF group codes and entity keywords
//!
//! Only the codes the supported LINE/ARC/CIRCLE/POLYLINE subset reads or
//! writes are listed.

/// DXF group codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DxfCode {
    /// Entity type keyword or section marker
    Start = 0,
    /// Section name
    Name = 2,
    LayerName = 8,

    /// Primary X coordinate (start point, center, vertex)
    XCoordinate = 10,
    /// Secondary X coordinate (line end point)
    XEnd = 11,
    /// Primary Y coordinate
    YCoordinate = 20,
    YEnd = 21,
    ZCoordinate = 30,
    ZEnd = 31,

    Radius = 40,
    /// Polyline vertex bulge, `tan(included_angle / 4)`
    Bulge = 42,
    /// Start angle in degrees
    StartAngle = 50,
    /// End angle in degrees
    EndAngle = 51,

    /// Polyline flags bitfield
    Flags = 70,

    Comment = 999,
}

impl DxfCode {
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

/// Entity keywords that appear after group code 0 in the ENTITIES section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKeyword {
    Line,
    Arc,
    Circle,
    Polyline,
    Vertex,
    SeqEnd,
}

impl EntityKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKeyword::Line => "LINE",
            EntityKeyword::Arc => "ARC",
            EntityKeyword::Circle => "CIRCLE",
            EntityKeyword::Polyline => "POLYLINE",
            EntityKeyword::Vertex => "VERTEX",
            EntityKeyword::SeqEnd => "SEQEND",
        }
    }

    /// Exact, case-sensitive match.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "LINE" => Some(EntityKeyword::Line),
            "ARC" => Some(EntityKeyword::Arc),
            "CIRCLE" => Some(EntityKeyword::Circle),
            "POLYLINE" => Some(EntityKeyword::Polyline),
            "VERTEX" => Some(EntityKeyword::Vertex),
            "SEQEND" => Some(EntityKeyword::SeqEnd),
            _ => None,
        }
    }
}
