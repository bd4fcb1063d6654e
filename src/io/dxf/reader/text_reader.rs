//! ASCII DXF text decoding and line splitting

use super::super::code_page::{encoding_from_code_page, find_code_page};
use encoding_rs::Encoding;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Turns the raw bytes of an ASCII DXF file into trimmed lines.
pub struct DxfTextReader<'a> {
    bytes: &'a [u8],
    /// Non-UTF-8 fallback. `None` means look at `$DWGCODEPAGE`, then Latin-1.
    encoding: Option<&'static Encoding>,
}

impl<'a> DxfTextReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Self {
            bytes,
            encoding: None,
        }
    }

    /// Force the encoding used when the bytes are not valid UTF-8.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// The whole file as text.
    pub fn decode(&self) -> Cow<'a, str> {
        if let Ok(text) = std::str::from_utf8(self.bytes) {
            return Cow::Borrowed(text);
        }

        // Latin-1 maps every byte to the code point of the same value, which
        // is enough to find the header variable naming the real encoding.
        let latin1: String = self.bytes.iter().map(|&b| b as char).collect();
        let encoding = self.encoding.or_else(|| {
            let lines: Vec<&str> = latin1.lines().map(str::trim).collect();
            find_code_page(&lines).and_then(encoding_from_code_page)
        });

        match encoding {
            Some(enc) => {
                tracing::debug!(encoding = enc.name(), "decoding non-UTF-8 drawing");
                let (text, _, _) = enc.decode(self.bytes);
                Cow::Owned(text.into_owned())
            }
            None => Cow::Owned(latin1),
        }
    }

    /// One entry per line, surrounding whitespace (including `\r`) removed.
    pub fn read_lines(&self) -> Vec<String> {
        self.decode()
            .lines()
            .map(|line| line.trim().to_string())
            .collect()
    }
}
