//! Group code/value pairs and a forward-only cursor over one entity record

use crate::error::{DxfError, Result};
use crate::io::dxf::DxfCode;

/// A group code with its value line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPair<'a> {
    pub code: i32,
    pub value: &'a str,
    /// Token position of the value line inside the ENTITIES section. For an
    /// entity marker this is the entity's index.
    pub position: usize,
}

impl<'a> GroupPair<'a> {
    pub fn is_marker(&self) -> bool {
        self.code == DxfCode::Start.to_i32()
    }
}

/// Group the section tokens into code/value pairs.
///
/// Blank lines where a group code is expected are skipped; some writers put
/// one after every record. `position` stays the offset in `tokens`, blanks
/// included. A trailing unpaired token (the `0` in front of `ENDSEC`) is
/// dropped.
pub fn pair_tokens(tokens: &[String]) -> Result<Vec<GroupPair<'_>>> {
    let mut pairs = Vec::with_capacity(tokens.len() / 2);
    let mut iter = tokens.iter().enumerate();
    while let Some((position, code)) = iter.next() {
        if code.is_empty() {
            continue;
        }
        let Some((value_position, value)) = iter.next() else {
            break;
        };
        let code = code
            .parse::<i32>()
            .map_err(|_| DxfError::InvalidGroupCode {
                position,
                token: code.clone(),
            })?;
        pairs.push(GroupPair {
            code,
            value: value.as_str(),
            position: value_position,
        });
    }
    Ok(pairs)
}

/// Index of the first marker pair after `from`, or `pairs.len()`.
pub fn record_end(pairs: &[GroupPair<'_>], from: usize) -> usize {
    pairs[from + 1..]
        .iter()
        .position(GroupPair::is_marker)
        .map_or(pairs.len(), |offset| from + 1 + offset)
}

/// Forward-only cursor over the pairs of one entity record.
///
/// Searches start where the previous one stopped and never move backward.
/// The record ends at the next marker pair, so a lookup cannot run into the
/// following entity.
pub struct PairCursor<'p, 'a> {
    pairs: &'p [GroupPair<'a>],
    pos: usize,
    end: usize,
    entity: &'static str,
    index: usize,
}

impl<'p, 'a> PairCursor<'p, 'a> {
    /// Cursor over the record whose marker is `pairs[marker]`.
    pub fn new(pairs: &'p [GroupPair<'a>], marker: usize, entity: &'static str) -> Self {
        Self {
            pairs,
            pos: marker + 1,
            end: record_end(pairs, marker),
            entity,
            index: pairs[marker].position,
        }
    }

    /// Index of the record's marker.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pair index one past the record.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Move past the next pair with `code`.
    pub fn advance_to(&mut self, code: DxfCode) -> Result<GroupPair<'a>> {
        self.seek(code).ok_or(DxfError::MissingField {
            entity: self.entity,
            code: code.to_i32(),
            index: self.index,
        })
    }

    /// Like `advance_to`, but a missing code leaves the cursor where it was.
    pub fn seek(&mut self, code: DxfCode) -> Option<GroupPair<'a>> {
        let wanted = code.to_i32();
        let offset = self.pairs[self.pos..self.end]
            .iter()
            .position(|p| p.code == wanted)?;
        let found = self.pairs[self.pos + offset];
        self.pos += offset + 1;
        Some(found)
    }

    /// Value of the next `code` as a float.
    pub fn read_f64(&mut self, code: DxfCode) -> Result<f64> {
        let pair = self.advance_to(code)?;
        self.parse_f64(&pair)
    }

    /// Value of the next `code` as a string.
    pub fn read_str(&mut self, code: DxfCode) -> Result<&'a str> {
        self.advance_to(code).map(|pair| pair.value)
    }

    pub fn parse_f64(&self, pair: &GroupPair<'a>) -> Result<f64> {
        pair.value.parse::<f64>().map_err(|_| self.invalid(pair))
    }

    /// `InvalidValue` error for `pair` in this record.
    pub fn invalid(&self, pair: &GroupPair<'a>) -> DxfError {
        DxfError::InvalidValue {
            entity: self.entity,
            code: pair.code,
            value: pair.value.to_string(),
            index: self.index,
        }
    }
}
